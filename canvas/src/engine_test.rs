#![allow(clippy::float_cmp)]

use records::{ModuleSummary, Resource, ShapeKind};

use super::*;
use crate::consts::{PALETTE, SCALE_LARGE, SCALE_SMALL};

// =============================================================
// Helpers
// =============================================================

// Canvas panel sits at (320, 80); a 1x1 module is drawn at scale 4, so grid
// (0, 0) is pixel (344, 104) and one grid unit is 80 px.
const ORIGIN_X: f64 = 344.0;
const ORIGIN_Y: f64 = 104.0;
const UNIT: f64 = 80.0;

fn px(gx: f64, gy: f64) -> (f64, f64) {
    (ORIGIN_X + gx * UNIT, ORIGIN_Y + gy * UNIT)
}

fn builder() -> EditorCore {
    let mut core = EditorCore::new();
    core.apply(Message::OpenModuleBuilder);
    core
}

fn click_grid(core: &mut EditorCore, gx: f64, gy: f64) -> Vec<Action> {
    let (x, y) = px(gx, gy);
    core.handle_click(x, y)
}

fn place_rect(core: &mut EditorCore) -> ShapeRecord {
    core.apply(Message::SelectShape(ShapeKind::Rect));
    click_grid(core, 0.0, 0.0);
    let actions = click_grid(core, 1.0, 1.0);
    match actions.first() {
        Some(Action::ShapeCompleted(shape)) => shape.clone(),
        other => panic!("expected ShapeCompleted, got {other:?}"),
    }
}

fn summary(id: &str) -> ModuleSummary {
    ModuleSummary { id: id.to_owned(), name: format!("module {id}"), kind: "storage".to_owned() }
}

// =============================================================
// Screens
// =============================================================

#[test]
fn starts_on_menu_with_template_record() {
    let core = EditorCore::new();
    assert_eq!(core.state().screen, Screen::Menu);
    assert_eq!(core.record(), &ModuleRecord::template());
    assert!(core.gallery().is_empty());
}

#[test]
fn menu_button_enters_builder_and_requests_list() {
    let mut core = EditorCore::new();
    let actions = core.handle_click(750.0, 400.0);
    assert_eq!(actions, vec![Action::ListModulesRequested, Action::RenderNeeded]);
    assert_eq!(core.state().screen, Screen::Builder);
}

#[test]
fn menu_ignores_clicks_outside_button() {
    let mut core = EditorCore::new();
    assert!(core.handle_click(10.0, 10.0).is_empty());
    assert_eq!(core.state().screen, Screen::Menu);
}

// =============================================================
// Placement
// =============================================================

#[test]
fn canvas_click_without_tool_does_nothing() {
    let mut core = builder();
    assert!(click_grid(&mut core, 0.5, 0.5).is_empty());
    assert!(core.gallery().is_empty());
}

#[test]
fn two_clicks_place_a_rect() {
    let mut core = builder();
    core.apply(Message::SelectColour(PALETTE[5]));
    let shape = place_rect(&mut core);
    assert_eq!(shape.shape, ShapeKind::Rect);
    assert_eq!(shape.params, vec![0.0, 0.0, 1.0, 1.0]);
    assert_eq!(shape.color, PALETTE[5]);
    assert_eq!(core.gallery().len(), 1);
    assert_eq!(core.record().shapes, vec![shape]);
    assert_eq!(core.state().click_count, 0);
    assert_eq!(core.state().tool, Tool::Pointer);
}

#[test]
fn pending_click_advances_counter() {
    let mut core = builder();
    core.apply(Message::SelectShape(ShapeKind::Triangle));
    assert_eq!(click_grid(&mut core, 0.0, 0.0), vec![Action::RenderNeeded]);
    assert_eq!(core.state().click_count, 1);
    assert!(core.gallery().is_empty());
}

#[test]
fn selecting_active_shape_returns_to_pointer() {
    let mut core = builder();
    core.apply(Message::SelectShape(ShapeKind::Quad));
    assert_eq!(core.state().tool, Tool::Place(ShapeKind::Quad));
    core.apply(Message::SelectShape(ShapeKind::Quad));
    assert_eq!(core.state().tool, Tool::Pointer);
}

#[test]
fn switching_shape_abandons_pending_clicks() {
    let mut core = builder();
    core.apply(Message::SelectShape(ShapeKind::Quad));
    click_grid(&mut core, 0.0, 0.0);
    core.apply(Message::SelectShape(ShapeKind::Rect));
    assert_eq!(core.state().click_count, 0);
    assert!(core.state().accumulator.pending_params().is_empty());
}

#[test]
fn out_of_sequence_click_resets_tool_without_adding_shape() {
    let mut core = builder();
    core.apply(Message::SelectShape(ShapeKind::Rect));
    click_grid(&mut core, 0.0, 0.0);
    core.state.click_count = 5;
    let actions = click_grid(&mut core, 1.0, 1.0);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(core.state().tool, Tool::Pointer);
    assert_eq!(core.state().click_count, 0);
    assert!(core.gallery().is_empty());
}

#[test]
fn circle_mode_produces_single_diameter() {
    let mut core = builder();
    core.apply(Message::ToggleCircleMode);
    core.apply(Message::SelectShape(ShapeKind::Ellipse));
    click_grid(&mut core, 0.0, 0.0);
    click_grid(&mut core, 0.3, 0.4);
    let shape = &core.record().shapes[0];
    assert_eq!(shape.params.len(), 3);
    assert!((shape.params[2] - 1.0).abs() < 1e-9);
}

#[test]
fn arc_uses_selected_mode() {
    let mut core = builder();
    core.apply(Message::SetArcMode(ArcMode::Open));
    core.apply(Message::SelectShape(ShapeKind::Arc));
    for (gx, gy) in [(0.5, 0.5), (1.0, 1.0), (0.0, 0.0), (1.0, 0.0)] {
        click_grid(&mut core, gx, gy);
    }
    let shape = &core.record().shapes[0];
    assert_eq!(shape.mode, Some(ArcMode::Open));
    assert_eq!(shape.params.len(), 6);
    // Third click at pixel x 344 -> 344 degrees.
    assert!((shape.params[4] - 344.0_f64.to_radians()).abs() < 1e-9);
    assert_eq!(core.state().tool, Tool::Pointer);
}

#[test]
fn click_after_completed_arc_starts_nothing() {
    let mut core = builder();
    core.apply(Message::SelectShape(ShapeKind::Arc));
    for (gx, gy) in [(0.5, 0.5), (1.0, 1.0), (0.0, 0.0), (1.0, 0.0)] {
        click_grid(&mut core, gx, gy);
    }
    assert_eq!(core.gallery().len(), 1);

    assert!(click_grid(&mut core, 0.5, 0.5).is_empty());
    assert_eq!(core.state().tool, Tool::Pointer);
    assert_eq!(core.state().click_count, 0);
    assert_eq!(core.gallery().len(), 1);
}

#[test]
fn grid_snap_rounds_clicks() {
    let mut core = builder();
    core.apply(Message::SetGridSnap(1.0));
    core.apply(Message::SelectShape(ShapeKind::Rect));
    core.handle_click(ORIGIN_X + 10.0, ORIGIN_Y + 12.0);
    core.handle_click(ORIGIN_X + UNIT - 15.0, ORIGIN_Y + UNIT + 20.0);
    assert_eq!(core.record().shapes[0].params, vec![0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn unknown_arc_mode_falls_back_to_chord() {
    let mut core = builder();
    core.set_arc_mode_str("PIE");
    assert_eq!(core.state().arc_mode, ArcMode::Pie);
    core.set_arc_mode_str("wedge");
    assert_eq!(core.state().arc_mode, ArcMode::Chord);
}

// =============================================================
// Layers
// =============================================================

#[test]
fn delete_button_removes_shape() {
    let mut core = builder();
    place_rect(&mut core);
    let id = core.gallery().iter().next().map(|e| e.id).unwrap();
    let actions = core.handle_click(1245.0, 125.0);
    assert_eq!(actions, vec![Action::ShapeDeleted(id), Action::RenderNeeded]);
    assert!(core.gallery().is_empty());
    assert!(core.record().shapes.is_empty());
}

#[test]
fn deleting_unknown_shape_is_a_no_op() {
    let mut core = builder();
    assert!(core.apply(Message::DeleteShape(ShapeId(42))).is_empty());
}

// =============================================================
// Navbar
// =============================================================

#[test]
fn save_sends_record_with_gallery_shapes() {
    let mut core = builder();
    let shape = place_rect(&mut core);
    core.edit_field(FormField::Name, "Silo");
    let actions = core.apply(Message::Navbar(NavCommand::Save));
    match actions.as_slice() {
        [Action::SaveRequested(record)] => {
            assert_eq!(record.name, "Silo");
            assert_eq!(record.shapes, vec![shape]);
        }
        other => panic!("unexpected actions {other:?}"),
    }
}

#[test]
fn new_resets_record_and_gallery() {
    let mut core = builder();
    place_rect(&mut core);
    core.edit_field(FormField::Width, "12");
    core.apply(Message::Navbar(NavCommand::New));
    assert_eq!(core.record(), &ModuleRecord::template());
    assert!(core.gallery().is_empty());
    assert_eq!(core.state().frame.scale, SCALE_LARGE);
    assert_eq!(core.state().tool, Tool::Pointer);
}

#[test]
fn load_requests_module_list() {
    let mut core = builder();
    assert_eq!(core.apply(Message::Navbar(NavCommand::Load)), vec![Action::ListModulesRequested]);
}

#[test]
fn menu_returns_to_start_screen() {
    let mut core = builder();
    core.handle_click(1100.0, 30.0);
    assert_eq!(core.state().screen, Screen::Menu);
}

// =============================================================
// Form
// =============================================================

#[test]
fn large_module_switches_to_small_scale() {
    let mut core = builder();
    assert_eq!(core.edit_field(FormField::Width, "10"), vec![Action::RenderNeeded]);
    assert_eq!(core.state().frame.scale, SCALE_SMALL);
    core.edit_field(FormField::Width, "7");
    assert_eq!(core.state().frame.scale, SCALE_LARGE);
}

#[test]
fn empty_field_input_emits_nothing() {
    let mut core = builder();
    assert!(core.edit_field(FormField::Durability, "").is_empty());
    assert_eq!(core.record().durability, 100.0);
}

#[test]
fn resource_edits_follow_replace_on_add() {
    let mut core = builder();
    core.edit_resource(ResourceCategory::Storage, "water", "50");
    core.edit_resource(ResourceCategory::Storage, "water", "20");
    assert_eq!(core.record().storage_capacity.get("water"), Some(20.0));
    core.edit_resource(ResourceCategory::Storage, "water", "0");
    assert!(core.record().storage_capacity.is_empty());
}

#[test]
fn pressurized_toggle_button() {
    let mut core = builder();
    core.handle_click(1300.0, 330.0);
    assert!(core.record().pressurized);
    core.toggle_pressurized();
    assert!(!core.record().pressurized);
}

// =============================================================
// Host callbacks
// =============================================================

#[test]
fn module_list_replaces_catalogue() {
    let mut core = builder();
    assert_eq!(core.apply_module_list(Some(vec![summary("a"), summary("b")])), vec![Action::RenderNeeded]);
    assert_eq!(core.state().catalogue.len(), 2);
}

#[test]
fn failed_module_list_keeps_cached_catalogue() {
    let mut core = builder();
    core.apply_module_list(Some(vec![summary("a")]));
    assert!(core.apply_module_list(None).is_empty());
    assert_eq!(core.state().catalogue, vec![summary("a")]);
}

#[test]
fn catalogue_click_requests_module() {
    let mut core = builder();
    core.apply_module_list(Some(vec![summary("abc")]));
    assert_eq!(core.handle_click(1300.0, 610.0), vec![Action::LoadModuleRequested("abc".to_owned())]);
}

#[test]
fn loaded_module_replaces_record_and_gallery() {
    let mut core = builder();
    place_rect(&mut core);

    let mut record = ModuleRecord::template();
    record.name = "Greenhouse".to_owned();
    record.width = 12.0;
    record.storage_capacity.set(Resource::new("water", 50.0));
    record.shapes = vec![
        ShapeRecord::new(ShapeKind::Ellipse, "#2E8B3A", vec![1.0, 1.0, 2.0]),
        ShapeRecord::new(ShapeKind::Rect, "#A0412D", vec![0.0, 0.0, 3.0, 1.0]),
    ];

    core.apply_loaded_module("gh-1", Some(record.clone()));
    assert_eq!(core.record(), &record);
    assert_eq!(core.gallery().records(), record.shapes);
    assert_eq!(core.state().loaded.as_deref(), Some("gh-1"));
    assert_eq!(core.state().frame.scale, SCALE_SMALL);
    assert_eq!(core.state().status, "Loaded Greenhouse");
}

#[test]
fn failed_load_keeps_current_record() {
    let mut core = builder();
    let shape = place_rect(&mut core);
    core.apply_loaded_module("missing", None);
    assert_eq!(core.record().shapes, vec![shape]);
    assert_eq!(core.state().status, "Could not load missing");
}

#[test]
fn saved_id_updates_status_and_refreshes_list() {
    let mut core = builder();
    let actions = core.apply_saved("new-id");
    assert_eq!(actions, vec![Action::ListModulesRequested, Action::RenderNeeded]);
    assert_eq!(core.state().status, "Saved as new-id");
    assert_eq!(core.state().loaded.as_deref(), Some("new-id"));
}
