//! Resources and the replace-on-add resource lists used for costs and capacities.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RecordError;

/// A `(name, quantity)` pair. Serialized as a two-element JSON array, e.g. `["water", 50]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource(pub String, pub f64);

impl Resource {
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self(name.into(), quantity)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn quantity(&self) -> f64 {
        self.1
    }
}

/// Ordered list of resources with at most one entry per name.
///
/// Deserializes through [`From<Vec<Resource>>`], so documents read from the
/// wire or the store get the same replace-on-add treatment as edits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Resource>", into = "Vec<Resource>")]
pub struct ResourceList(Vec<Resource>);

impl ResourceList {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Replace-on-add: drop any entry with the same name, then append the
    /// resource if its quantity is positive. A zero quantity is a removal.
    pub fn set(&mut self, resource: Resource) {
        self.0.retain(|existing| existing.name() != resource.name());
        if resource.quantity() > 0.0 {
            self.0.push(resource);
        }
    }

    /// Quantity recorded for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|r| r.name() == name).map(Resource::quantity)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace the whole list with a single resource (used by the cost field).
    pub fn replace_all(&mut self, resource: Resource) {
        self.0.clear();
        self.set(resource);
    }
}

impl From<Vec<Resource>> for ResourceList {
    /// Builds a list through [`ResourceList::set`], so duplicates collapse to
    /// the last occurrence and non-positive quantities are dropped.
    fn from(resources: Vec<Resource>) -> Self {
        let mut list = Self::new();
        for resource in resources {
            list.set(resource);
        }
        list
    }
}

impl From<ResourceList> for Vec<Resource> {
    fn from(list: ResourceList) -> Self {
        list.0
    }
}

/// Which resource list of a module an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    Build,
    Maintenance,
    Storage,
    Input,
    Output,
}

impl ResourceCategory {
    pub const ALL: [Self; 5] = [Self::Build, Self::Maintenance, Self::Storage, Self::Input, Self::Output];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Maintenance => "maintenance",
            Self::Storage => "storage",
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl FromStr for ResourceCategory {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "build" => Ok(Self::Build),
            "maintenance" => Ok(Self::Maintenance),
            "storage" => Ok(Self::Storage),
            "input" => Ok(Self::Input),
            "output" => Ok(Self::Output),
            other => Err(RecordError::UnknownCategory(other.to_owned())),
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
