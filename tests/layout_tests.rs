use approx::assert_relative_eq;
use bar_chart_kit::ChartError;
use bar_chart_kit::api::{BarChartConfig, BarChartEngine, compute_layout};
use bar_chart_kit::core::{Bar, DataElement, DataSet, ElementRef, Limit, Viewport};
use bar_chart_kit::interaction::SelectionState;
use bar_chart_kit::render::{Color, NullRenderer};

const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
const GRAY: Color = Color::rgb(0.8, 0.8, 0.8);

fn jan_feb() -> DataSet {
    DataSet::new(vec![
        DataElement::new("Jan", vec![Bar::new(20_000.0, GREEN), Bar::new(15_000.0, BLUE)]),
        DataElement::new("Feb", vec![Bar::new(0.0, GREEN)]),
    ])
    .with_selection_color(YELLOW)
}

fn heights(layout: &bar_chart_kit::api::ChartLayout) -> Vec<Vec<f64>> {
    layout
        .elements
        .iter()
        .map(|element| element.bars.iter().map(|bar| bar.height).collect())
        .collect()
}

#[test]
fn layout_matches_reference_scenario() {
    let layout = compute_layout(&jan_feb(), &SelectionState::none(), 100.0, 6.0).expect("layout");

    assert_eq!(layout.max_value, 20_000.0);
    assert_eq!(heights(&layout), vec![vec![100.0, 75.0], vec![6.0]]);
    assert_eq!(layout.elements[0].label, "Jan");
    assert_eq!(layout.elements[1].index, 1);
    assert!(layout.limit.is_none());
}

#[test]
fn layout_preserves_render_order() {
    let data_set = DataSet::new(
        ["Mar", "Jan", "Feb"]
            .iter()
            .map(|label| DataElement::new(*label, vec![Bar::new(1.0, GREEN)]))
            .collect(),
    );
    let layout = compute_layout(&data_set, &SelectionState::none(), 50.0, 6.0).expect("layout");
    let labels: Vec<&str> = layout
        .elements
        .iter()
        .map(|element| element.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Mar", "Jan", "Feb"]);
}

#[test]
fn layout_marks_selected_group_and_recolors_it() {
    let selection = SelectionState::with_selected(ElementRef::new(0, "Jan"));
    let layout = compute_layout(&jan_feb(), &selection, 100.0, 6.0).expect("layout");

    assert!(layout.elements[0].selected);
    assert!(!layout.elements[1].selected);
    assert!(layout.elements[0].bars.iter().all(|bar| bar.color == YELLOW));
    assert_eq!(layout.elements[1].bars[0].color, GREEN);
}

#[test]
fn layout_places_limit_on_shared_scale() {
    let data_set = DataSet::new(vec![DataElement::new(
        "May",
        vec![Bar::new(32_010.0, GRAY), Bar::new(15_000.0, GRAY)],
    )])
    .with_limit(Limit::new(15_010.0, GRAY).with_label("YOUR LIMIT"));

    let layout = compute_layout(&data_set, &SelectionState::none(), 100.0, 6.0).expect("layout");
    let limit = layout.limit.expect("limit layout");
    assert_relative_eq!(limit.offset_from_bottom, 100.0 * 15_010.0 / 32_010.0, epsilon = 1e-9);
    assert_eq!(limit.label.as_deref(), Some("YOUR LIMIT"));
    assert_eq!(limit.color, GRAY);
}

#[test]
fn limit_above_every_bar_becomes_the_scale_maximum() {
    let data_set = DataSet::new(vec![DataElement::new("Jan", vec![Bar::new(50.0, GREEN)])])
        .with_limit(Limit::new(200.0, GRAY));

    let layout = compute_layout(&data_set, &SelectionState::none(), 100.0, 6.0).expect("layout");
    assert_eq!(layout.max_value, 200.0);
    assert_relative_eq!(layout.elements[0].bars[0].height, 25.0);
    assert_relative_eq!(layout.limit.expect("limit").offset_from_bottom, 100.0);
}

#[test]
fn empty_data_set_produces_empty_layout() {
    let layout =
        compute_layout(&DataSet::default(), &SelectionState::none(), 100.0, 6.0).expect("layout");
    assert!(layout.is_empty());
    assert!(layout.max_value > 0.0);
}

#[test]
fn all_zero_data_set_renders_floor_bars() {
    let data_set = DataSet::new(vec![
        DataElement::new("Jan", vec![Bar::new(0.0, GREEN)]),
        DataElement::new("Feb", vec![Bar::new(0.0, GREEN), Bar::new(0.0, BLUE)]),
    ]);
    let layout = compute_layout(&data_set, &SelectionState::none(), 100.0, 6.0).expect("layout");
    assert_eq!(heights(&layout), vec![vec![6.0], vec![6.0, 6.0]]);
}

#[test]
fn layout_rejects_invalid_render_parameters() {
    let data_set = jan_feb();
    let selection = SelectionState::none();

    for (plot_height, bar_width) in [(0.0, 6.0), (f64::NAN, 6.0), (100.0, 0.0), (100.0, -1.0)] {
        let err = compute_layout(&data_set, &selection, plot_height, bar_width)
            .expect_err("invalid render parameters must fail");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}

#[test]
fn engine_layout_uses_plot_height_below_label_row() {
    // 122px viewport minus 12px label font and 10px gap leaves 100px for bars.
    let config = BarChartConfig::new(Viewport::new(200, 122));
    let mut engine = BarChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data_set(jan_feb());

    let layout = engine.compute_layout().expect("layout");
    assert_eq!(layout.plot_height, 100.0);
    assert_eq!(heights(&layout), vec![vec![100.0, 75.0], vec![6.0]]);
}

#[test]
fn engine_bar_width_drives_floor_height() {
    let config = BarChartConfig::new(Viewport::new(200, 122)).with_bar_width(10.0);
    let mut engine = BarChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data_set(jan_feb());
    assert_eq!(engine.compute_layout().expect("layout").elements[1].bars[0].height, 10.0);

    engine.set_bar_width(4.0).expect("bar width");
    assert_eq!(engine.compute_layout().expect("layout").elements[1].bars[0].height, 4.0);
    assert!(engine.set_bar_width(0.0).is_err());
}
