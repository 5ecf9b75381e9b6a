// File: crates/insight-core/tests/serde_roundtrip.rs
// Purpose: Layout tables serialize with react-grid-layout field names and read back unchanged.

use insight_core::{compute_layouts, default_views, LayoutTable, ViewDescriptor};

#[test]
fn table_json_uses_grid_field_names() {
    let table = compute_layouts(&[ViewDescriptor::new("revenue", "bar")]);
    let json: serde_json::Value = serde_json::to_value(&table).expect("serialize");
    let lg = &json["lg"][0];
    assert_eq!(lg["i"], "revenue");
    assert_eq!(lg["x"], 0);
    assert_eq!(lg["y"], 0);
    assert_eq!(lg["w"], 4);
    assert_eq!(lg["h"], 3);
    assert_eq!(lg["minW"], 3);
    assert_eq!(lg["minH"], 2);
    for bp in ["xs", "sm", "md", "lg"] {
        assert!(json[bp].is_array(), "missing {bp}");
    }
}

#[test]
fn table_reads_back_equal() {
    let table = compute_layouts(&default_views());
    let text = serde_json::to_string_pretty(&table).expect("serialize");
    let back: LayoutTable = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, table);
}

#[test]
fn view_descriptor_uses_type_key() {
    let v: ViewDescriptor = serde_json::from_str(r#"{"id":"a","type":"pie"}"#).expect("deserialize");
    assert_eq!(v, ViewDescriptor::new("a", "pie"));
}
