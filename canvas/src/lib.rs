//! Module editor for the World Builder Suite.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! editor's whole interaction model: turning canvas clicks into shapes on a
//! module grid, keeping the module record in sync with the metadata form,
//! and drawing the menu and builder screens. The host JavaScript layer only
//! wires DOM events to the editor and performs the network calls requested
//! through [`engine::Action`]s, feeding results back through the editor's
//! `apply_*` callbacks.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level editor and testable [`engine::EditorCore`] |
//! | [`panel`] | Panels, buttons and the [`panel::Message`] they emit |
//! | [`placement`] | Multi-click shape placement state machine |
//! | [`gallery`] | Ordered list of finished shapes with stable ids |
//! | [`form`] | Metadata form bindings onto the module record |
//! | [`grid`] | Pixel/grid coordinate conversion and scaling |
//! | [`render`] | Drawing through the [`render::Surface`] trait |
//! | [`consts`] | Layout, grid and colour constants |

pub mod consts;
pub mod engine;
pub mod form;
pub mod gallery;
pub mod grid;
pub mod panel;
pub mod placement;
pub mod render;
