use bar_chart_kit::api::{BarChartConfig, BarChartEngine, EngineSnapshot};
use bar_chart_kit::core::{Bar, DataElement, DataSet, ElementRef, Limit, Viewport};
use bar_chart_kit::render::{Color, NullRenderer};

fn build_engine() -> BarChartEngine<NullRenderer> {
    let mut engine = BarChartEngine::new(
        NullRenderer::default(),
        BarChartConfig::new(Viewport::new(200, 122)),
    )
    .expect("engine init");

    let green = Color::rgb(0.0, 1.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    engine.set_data_set(
        DataSet::new(vec![
            DataElement::new("Jan", vec![Bar::new(200.0, green), Bar::new(50.0, blue)]),
            DataElement::new("Feb", vec![Bar::new(100.0, green)]),
        ])
        .with_limit(Limit::new(150.0, blue).with_label("cap"))
        .with_selection_color(Color::rgb(1.0, 1.0, 0.0)),
    );
    engine.select_label("Feb");
    engine
}

#[test]
fn snapshot_captures_selection_and_geometry() {
    let engine = build_engine();
    let snapshot = engine.snapshot().expect("snapshot should build");

    assert_eq!(snapshot.viewport, Viewport::new(200, 122));
    assert_eq!(snapshot.bar_width, 6.0);
    assert_eq!(snapshot.max_value, 200.0);
    assert_eq!(snapshot.selection, Some(ElementRef::new(1, "Feb")));
    assert_eq!(snapshot.layout.elements.len(), 2);
    assert_eq!(snapshot.layout.elements[0].bars[1].height, 25.0);
    assert!(snapshot.layout.elements[1].selected);
    assert_eq!(
        snapshot.layout.limit.as_ref().map(|limit| limit.offset_from_bottom),
        Some(75.0)
    );
}

#[test]
fn snapshot_is_deterministic_for_equal_state() {
    let first = build_engine().snapshot().expect("snapshot");
    let second = build_engine().snapshot().expect("snapshot");
    assert_eq!(first, second);
}

#[test]
fn snapshot_survives_serde_roundtrip() {
    let snapshot = build_engine().snapshot().expect("snapshot");
    let value = serde_json::to_value(&snapshot).expect("serialize");
    assert_eq!(value["selection"]["label"], "Feb");

    let restored: EngineSnapshot = serde_json::from_value(value).expect("deserialize");
    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_of_empty_engine_has_no_selection() {
    let engine = BarChartEngine::new(
        NullRenderer::default(),
        BarChartConfig::new(Viewport::new(200, 122)),
    )
    .expect("engine init");
    let snapshot = engine.snapshot().expect("snapshot");

    assert!(snapshot.layout.is_empty());
    assert!(snapshot.selection.is_none());
    assert!(snapshot.max_value > 0.0);
}
