//! The module record: everything the host game needs to know about one module.

#[cfg(test)]
#[path = "module_test.rs"]
mod module_test;

use serde::{Deserialize, Serialize};

use crate::resource::{Resource, ResourceCategory, ResourceList};
use crate::shape::ShapeRecord;

/// A module definition as edited, stored and served.
///
/// `name` is intended to be unique across the store but nothing enforces it.
/// `width` and `height` are in grid blocks, not pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default = "one")]
    pub width: f64,
    #[serde(default = "one")]
    pub height: f64,
    /// Lowercase type name consumed by the game engine's dispatch.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub pressurized: bool,
    /// How many more modules can stack on each column of this one.
    #[serde(default)]
    pub column_strength: f64,
    #[serde(default)]
    pub durability: f64,
    #[serde(default)]
    pub build_costs: ResourceList,
    #[serde(default)]
    pub maintenance_costs: ResourceList,
    /// Production modules only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_inputs: Option<ResourceList>,
    /// Production modules only; output of one batch of work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_outputs: Option<ResourceList>,
    #[serde(default)]
    pub storage_capacity: ResourceList,
    #[serde(default)]
    pub crew_capacity: f64,
    #[serde(default)]
    pub shapes: Vec<ShapeRecord>,
}

fn one() -> f64 {
    1.0
}

impl ModuleRecord {
    /// The blank record a fresh editor session starts from.
    #[must_use]
    pub fn template() -> Self {
        Self {
            name: String::new(),
            width: 1.0,
            height: 1.0,
            kind: "Test".to_owned(),
            pressurized: false,
            column_strength: 0.0,
            durability: 100.0,
            build_costs: ResourceList::from(vec![Resource::new("money", 100.0)]),
            maintenance_costs: ResourceList::new(),
            production_inputs: Some(ResourceList::new()),
            production_outputs: Some(ResourceList::new()),
            storage_capacity: ResourceList::new(),
            crew_capacity: 0.0,
            shapes: Vec::new(),
        }
    }

    /// Write a resource into the list for `category` with replace-on-add
    /// semantics. Returns `false` when the target list does not exist
    /// (production lists on a non-production module).
    pub fn add_resource(&mut self, category: ResourceCategory, resource: Resource) -> bool {
        let list = match category {
            ResourceCategory::Build => &mut self.build_costs,
            ResourceCategory::Maintenance => &mut self.maintenance_costs,
            ResourceCategory::Storage => &mut self.storage_capacity,
            ResourceCategory::Input => match self.production_inputs.as_mut() {
                Some(list) => list,
                None => return false,
            },
            ResourceCategory::Output => match self.production_outputs.as_mut() {
                Some(list) => list,
                None => return false,
            },
        };
        list.set(resource);
        true
    }

    /// Read-only access to the list for `category`, if present.
    #[must_use]
    pub fn resources(&self, category: ResourceCategory) -> Option<&ResourceList> {
        match category {
            ResourceCategory::Build => Some(&self.build_costs),
            ResourceCategory::Maintenance => Some(&self.maintenance_costs),
            ResourceCategory::Storage => Some(&self.storage_capacity),
            ResourceCategory::Input => self.production_inputs.as_ref(),
            ResourceCategory::Output => self.production_outputs.as_ref(),
        }
    }
}

impl Default for ModuleRecord {
    fn default() -> Self {
        Self::template()
    }
}
