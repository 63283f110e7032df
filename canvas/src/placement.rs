//! Shape placement: the multi-click state machine that turns canvas clicks into shapes.
//!
//! Each shape kind has a fixed number of clicks. The accumulator collects the
//! grid coordinates of each click into a param list and hands back a finished
//! [`ShapeRecord`] on the last one. Click indices are supplied by the caller
//! (the editor's running click counter) and checked against the
//! accumulator's own progress so an out-of-order click can never produce a
//! half-built shape.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use records::{ArcMode, ShapeKind, ShapeRecord};

use crate::grid::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// No shape selected; canvas clicks are ignored.
    #[default]
    Pointer,
    /// Clicks on the canvas place a shape of this kind.
    Place(ShapeKind),
}

impl Tool {
    #[must_use]
    pub fn shape(self) -> Option<ShapeKind> {
        match self {
            Self::Pointer => None,
            Self::Place(kind) => Some(kind),
        }
    }
}

/// Editor settings that influence how a click sequence is turned into params.
#[derive(Debug, Clone, Copy)]
pub struct PlacementOptions<'a> {
    pub color: &'a str,
    /// Ellipses keep a single diameter; arcs use equal width and height.
    pub circle_mode: bool,
    pub arc_mode: ArcMode,
}

/// Result of feeding one click to the accumulator.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// More clicks are needed.
    Pending,
    /// The click completed the shape.
    Complete(ShapeRecord),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The click index is past the kind's required count.
    #[error("{kind} takes {required} clicks, got click #{click}")]
    OutOfSequence { kind: ShapeKind, click: u32, required: u32 },
    /// The click index does not follow the previous click of this sequence.
    #[error("{kind} expected click #{expected}, got click #{click}")]
    Unexpected { kind: ShapeKind, click: u32, expected: u32 },
}

/// Arc angle for a pointer at horizontal pixel position `pixel_x`:
/// one degree per pixel, wrapped to a full turn, returned in radians.
#[must_use]
pub fn angle_from_pointer(pixel_x: f64) -> f64 {
    pixel_x.rem_euclid(360.0).to_radians()
}

/// Collects click coordinates for the shape being placed.
#[derive(Debug, Clone, Default)]
pub struct ShapeAccumulator {
    kind: Option<ShapeKind>,
    clicks: u32,
    params: Vec<f64>,
}

impl ShapeAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clicks recorded so far in the current sequence.
    #[must_use]
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Params collected so far (grid units).
    #[must_use]
    pub fn pending_params(&self) -> &[f64] {
        &self.params
    }

    /// Kind of the shape in progress, if a sequence has started.
    #[must_use]
    pub fn kind(&self) -> Option<ShapeKind> {
        self.kind
    }

    /// Drop any partially collected shape.
    pub fn reset(&mut self) {
        self.kind = None;
        self.clicks = 0;
        self.params.clear();
    }

    /// Feed click number `click` (0-based) of a `kind` sequence.
    ///
    /// `grid` is the click position in grid units; `pixel` is the raw pointer
    /// position, used for arc angles.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfSequence`] when `click` is at or past the
    /// kind's required count, and [`PlacementError::Unexpected`] when it does
    /// not continue the current sequence. Neither error changes the
    /// accumulator.
    pub fn handle_click(
        &mut self,
        kind: ShapeKind,
        click: u32,
        grid: Point,
        pixel: Point,
        options: &PlacementOptions<'_>,
    ) -> Result<Placement, PlacementError> {
        let required = kind.required_clicks();
        if click >= required {
            return Err(PlacementError::OutOfSequence { kind, click, required });
        }
        if click == 0 {
            self.reset();
            self.kind = Some(kind);
        } else if self.kind != Some(kind) || click != self.clicks {
            let expected = if self.kind == Some(kind) { self.clicks } else { 0 };
            return Err(PlacementError::Unexpected { kind, click, expected });
        }

        match kind {
            ShapeKind::Rect => self.rect_click(click, grid),
            ShapeKind::Quad | ShapeKind::Triangle => self.params.extend([grid.x, grid.y]),
            ShapeKind::Ellipse => self.center_then_size(click, grid, options.circle_mode, false),
            ShapeKind::Arc => match click {
                0 | 1 => self.center_then_size(click, grid, options.circle_mode, true),
                _ => self.params.push(angle_from_pointer(pixel.x)),
            },
        }
        self.clicks += 1;

        if self.clicks < required {
            return Ok(Placement::Pending);
        }

        let mut shape = ShapeRecord::new(kind, options.color, std::mem::take(&mut self.params));
        if kind == ShapeKind::Arc {
            shape = shape.with_mode(options.arc_mode);
        }
        self.reset();
        Ok(Placement::Complete(shape))
    }

    fn rect_click(&mut self, click: u32, grid: Point) {
        if click == 0 {
            self.params.extend([grid.x, grid.y]);
        } else {
            let (x0, y0) = (self.params[0], self.params[1]);
            self.params.extend([grid.x - x0, grid.y - y0]);
        }
    }

    /// Center on the first click, diameters on the second. Arcs always keep
    /// two size params so the angle params stay at fixed positions.
    fn center_then_size(&mut self, click: u32, grid: Point, circle_mode: bool, keep_both: bool) {
        if click == 0 {
            self.params.extend([grid.x, grid.y]);
            return;
        }
        let dx = (grid.x - self.params[0]).abs();
        let dy = (grid.y - self.params[1]).abs();
        if circle_mode {
            let diameter = 2.0 * dx.hypot(dy);
            self.params.push(diameter);
            if keep_both {
                self.params.push(diameter);
            }
        } else {
            self.params.extend([2.0 * dx, 2.0 * dy]);
        }
    }
}
