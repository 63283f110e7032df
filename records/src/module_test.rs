use super::*;
use crate::shape::{ArcMode, ShapeKind};

#[test]
fn template_matches_editor_defaults() {
    let record = ModuleRecord::template();
    assert_eq!(record.name, "");
    assert!((record.width - 1.0).abs() < f64::EPSILON);
    assert!((record.height - 1.0).abs() < f64::EPSILON);
    assert_eq!(record.kind, "Test");
    assert!(!record.pressurized);
    assert!((record.durability - 100.0).abs() < f64::EPSILON);
    assert_eq!(record.build_costs.get("money"), Some(100.0));
    assert!(record.maintenance_costs.is_empty());
    assert_eq!(record.production_inputs, Some(ResourceList::new()));
    assert_eq!(record.production_outputs, Some(ResourceList::new()));
    assert!(record.shapes.is_empty());
}

#[test]
fn storage_water_added_then_zeroed_is_absent() {
    let mut record = ModuleRecord::template();
    assert!(record.add_resource(ResourceCategory::Storage, Resource::new("water", 50.0)));
    assert_eq!(record.storage_capacity.get("water"), Some(50.0));
    assert!(record.add_resource(ResourceCategory::Storage, Resource::new("water", 0.0)));
    assert!(!record.storage_capacity.contains("water"));
}

#[test]
fn add_resource_routes_to_maintenance() {
    let mut record = ModuleRecord::template();
    record.add_resource(ResourceCategory::Maintenance, Resource::new("power", 3.0));
    assert_eq!(record.maintenance_costs.get("power"), Some(3.0));
    assert!(record.storage_capacity.is_empty());
}

#[test]
fn add_resource_to_missing_production_list_is_ignored() {
    let mut record = ModuleRecord::template();
    record.production_outputs = None;
    assert!(!record.add_resource(ResourceCategory::Output, Resource::new("food", 4.0)));
    assert!(record.production_outputs.is_none());
    assert!(record.resources(ResourceCategory::Output).is_none());
}

#[test]
fn add_resource_to_production_inputs() {
    let mut record = ModuleRecord::template();
    record.add_resource(ResourceCategory::Input, Resource::new("water", 2.0));
    let inputs = record.resources(ResourceCategory::Input).unwrap();
    assert_eq!(inputs.get("water"), Some(2.0));
}

#[test]
fn serializes_with_camel_case_keys() {
    let json = serde_json::to_value(ModuleRecord::template()).unwrap();
    let obj = json.as_object().unwrap();
    for key in [
        "name",
        "width",
        "height",
        "type",
        "pressurized",
        "columnStrength",
        "durability",
        "buildCosts",
        "maintenanceCosts",
        "productionInputs",
        "productionOutputs",
        "storageCapacity",
        "crewCapacity",
        "shapes",
    ] {
        assert!(obj.contains_key(key), "missing key {key}");
    }
}

#[test]
fn production_lists_are_omitted_when_absent() {
    let mut record = ModuleRecord::template();
    record.production_inputs = None;
    record.production_outputs = None;
    let json = serde_json::to_value(&record).unwrap();
    assert!(json.get("productionInputs").is_none());
    assert!(json.get("productionOutputs").is_none());
}

#[test]
fn deserializes_game_document() {
    let raw = r##"{
        "name": "Crew Quarters",
        "width": 3,
        "height": 2,
        "type": "living",
        "pressurized": true,
        "columnStrength": 2,
        "durability": 250,
        "buildCosts": [["money", 800]],
        "maintenanceCosts": [["power", 1]],
        "storageCapacity": [["water", 50], ["food", 20]],
        "crewCapacity": 4,
        "shapes": [
            {"shape": "rect", "color": "#0FFF13", "params": [0, 0, 3, 2]},
            {"shape": "arc", "color": "#023803", "params": [1, 1, 2, 2, 0, 3.1], "mode": "OPEN"}
        ]
    }"##;
    let record: ModuleRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.name, "Crew Quarters");
    assert_eq!(record.kind, "living");
    assert!(record.pressurized);
    assert!(record.production_inputs.is_none());
    assert_eq!(record.storage_capacity.len(), 2);
    assert_eq!(record.shapes.len(), 2);
    assert_eq!(record.shapes[0].shape, ShapeKind::Rect);
    assert_eq!(record.shapes[1].mode, Some(ArcMode::Open));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let record: ModuleRecord = serde_json::from_str(r#"{"name":"Bare"}"#).unwrap();
    assert_eq!(record.name, "Bare");
    assert!((record.width - 1.0).abs() < f64::EPSILON);
    assert!(record.shapes.is_empty());
    assert!(record.build_costs.is_empty());
}
