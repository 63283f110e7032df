//! Shared module-definition model for the editor, the API client and the backend.
//!
//! This crate owns the JSON representation of a module as it travels between
//! the editor, the HTTP API and the `modules` store. Field names follow the
//! host game's definition format (camelCase, resources as `[name, quantity]`
//! pairs) so documents can be copied into the game without translation.

pub mod api;
pub mod module;
pub mod resource;
pub mod shape;

pub use api::{ApiResponse, CreatedModule, ModuleSummary};
pub use module::ModuleRecord;
pub use resource::{Resource, ResourceCategory, ResourceList};
pub use shape::{ArcMode, ShapeKind, ShapeRecord};

/// Error returned when parsing model values from user or wire input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// The resource category name is not one of the known lists.
    #[error("unrecognized resource category: {0}")]
    UnknownCategory(String),
    /// The shape kind name is not one of the supported shapes.
    #[error("unrecognized shape kind: {0}")]
    UnknownShape(String),
    /// The arc mode name is not one of `CHORD`, `PIE` or `OPEN`.
    #[error("unrecognized arc mode: {0}")]
    UnknownArcMode(String),
}
