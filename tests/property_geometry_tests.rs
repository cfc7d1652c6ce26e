use bar_chart_kit::core::{
    Bar, DataElement, DataSet, Limit, bar_height, default_selection, limit_offset, max_value,
};
use bar_chart_kit::render::Color;
use proptest::prelude::*;

fn build_data_set(groups: &[Vec<f64>], limit: Option<f64>) -> DataSet {
    let color = Color::rgb(0.5, 0.5, 0.5);
    let elements = groups
        .iter()
        .enumerate()
        .map(|(index, values)| {
            DataElement::new(
                format!("g{index}"),
                values.iter().map(|value| Bar::new(*value, color)).collect(),
            )
        })
        .collect();
    let data_set = DataSet::new(elements);
    match limit {
        Some(value) => data_set.with_limit(Limit::new(value, color)),
        None => data_set,
    }
}

fn group_values() -> impl Strategy<Value = Vec<Vec<f64>>> {
    let value = prop_oneof![Just(0.0f64), -1_000.0f64..1_000_000.0, 0.0f64..1e-6];
    prop::collection::vec(prop::collection::vec(value, 0..5), 0..12)
}

proptest! {
    #[test]
    fn bar_height_is_monotonic_in_value(
        a in 0.0f64..1e12,
        b in 0.0f64..1e12,
        viewport_height in 1.0f64..5_000.0,
        max in 1e-6f64..1e12,
        thickness_ratio in 0.0f64..1.0
    ) {
        let min_thickness = viewport_height * thickness_ratio;
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            bar_height(low, viewport_height, max, min_thickness)
                <= bar_height(high, viewport_height, max, min_thickness)
        );
    }

    #[test]
    fn bar_height_stays_within_floor_and_viewport(
        value in 0.0f64..1e15,
        viewport_height in 1.0f64..5_000.0,
        max in 1e-9f64..1e12,
        thickness_ratio in 0.0f64..1.0
    ) {
        let min_thickness = viewport_height * thickness_ratio;
        let height = bar_height(value, viewport_height, max, min_thickness);
        prop_assert!(height >= min_thickness);
        prop_assert!(height <= viewport_height);
    }

    #[test]
    fn limit_offset_never_drops_below_floor(
        value in -1e6f64..1e9,
        container_height in 1.0f64..5_000.0,
        max in 1e-6f64..1e9,
        min_thickness in 0.0f64..50.0
    ) {
        prop_assert!(limit_offset(value, container_height, max, min_thickness) >= min_thickness);
    }

    #[test]
    fn max_value_is_positive_and_bounds_every_bar(
        groups in group_values(),
        limit in prop::option::of(-1_000.0f64..1_000_000.0)
    ) {
        let data_set = build_data_set(&groups, limit);
        let max = max_value(&data_set);
        prop_assert!(max > 0.0);
        for value in groups.iter().flatten() {
            prop_assert!(*value <= max);
        }
        if let Some(limit) = limit {
            prop_assert!(limit <= max);
        }
    }

    #[test]
    fn default_selection_matches_last_group_with_positive_bar(groups in group_values()) {
        let data_set = build_data_set(&groups, None);
        let expected = groups
            .iter()
            .rposition(|values| values.iter().any(|value| *value > 0.0));
        prop_assert_eq!(
            default_selection(&data_set).map(|selected| selected.index),
            expected
        );
    }
}
