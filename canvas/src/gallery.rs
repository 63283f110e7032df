//! Shape gallery: the ordered list of finished shapes in the module being edited.
//!
//! Insertion order is draw order. Each entry gets a serial [`ShapeId`] that
//! stays stable across deletions, so the layers list can show re-numbered
//! positions while delete buttons keep pointing at the right shape.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use records::ShapeRecord;

/// Stable identifier for a shape within one editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryEntry {
    pub id: ShapeId,
    pub shape: ShapeRecord,
}

/// One row of the layers list: display position (1-based) plus the entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer<'a> {
    pub position: usize,
    pub entry: &'a GalleryEntry,
}

#[derive(Debug, Clone, Default)]
pub struct ShapeGallery {
    entries: Vec<GalleryEntry>,
    next_serial: u32,
}

impl ShapeGallery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of the stack.
    pub fn push(&mut self, shape: ShapeRecord) -> ShapeId {
        let id = ShapeId(self.next_serial);
        self.next_serial += 1;
        self.entries.push(GalleryEntry { id, shape });
        id
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: ShapeId) -> Option<ShapeRecord> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx).shape)
    }

    #[must_use]
    pub fn get(&self, id: ShapeId) -> Option<&ShapeRecord> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.shape)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryEntry> {
        self.entries.iter()
    }

    /// Layers list rows, numbered from 1 in insertion order.
    pub fn layers(&self) -> impl Iterator<Item = Layer<'_>> {
        self.entries.iter().enumerate().map(|(i, entry)| Layer { position: i + 1, entry })
    }

    /// Shapes in draw order, ready to store on a module record.
    #[must_use]
    pub fn records(&self) -> Vec<ShapeRecord> {
        self.entries.iter().map(|e| e.shape.clone()).collect()
    }

    /// Drop all shapes. Serials keep counting so old ids are never reused.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the contents with shapes from a loaded module.
    pub fn load(&mut self, shapes: Vec<ShapeRecord>) {
        self.clear();
        for shape in shapes {
            self.push(shape);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
