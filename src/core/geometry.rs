use ordered_float::OrderedFloat;

use crate::core::{DataSet, ElementRef};

/// Default bar width in pixels. Also the minimum bar height, so a pill-capped
/// bar never degenerates below a circle.
pub const DEFAULT_BAR_WIDTH_PX: f64 = 6.0;

/// Normalization maximum used when a dataset has no positive value: the
/// smallest positive subnormal `f64` (about `4.9e-324`).
pub const MIN_NORMALIZATION_VALUE: f64 = f64::from_bits(1);

/// Maximum across every bar value, folded with the limit value when present.
///
/// Never returns zero or a negative number: empty, all-zero and all-negative
/// datasets fall back to [`MIN_NORMALIZATION_VALUE`]. NaN values are skipped.
#[must_use]
pub fn max_value(data_set: &DataSet) -> f64 {
    let observed = data_set
        .elements()
        .iter()
        .flat_map(|element| element.bars.iter().map(|bar| bar.value))
        .chain(data_set.limit().map(|limit| limit.value))
        .filter(|value| !value.is_nan())
        .map(OrderedFloat)
        .max()
        .map(OrderedFloat::into_inner);

    match observed {
        Some(value) if value > 0.0 => value,
        _ => MIN_NORMALIZATION_VALUE,
    }
}

/// Picks the most recent group with data: the last group, in render order,
/// holding at least one bar above zero.
#[must_use]
pub fn default_selection(data_set: &DataSet) -> Option<ElementRef> {
    data_set
        .elements()
        .iter()
        .enumerate()
        .rev()
        .find(|(_, element)| element.has_positive_value())
        .map(|(index, element)| ElementRef::new(index, element.label.clone()))
}

/// Pixel height of one bar normalized against `max_value`.
///
/// The result is floored at `min_thickness` and capped at `viewport_height`.
/// When `min_thickness` exceeds `viewport_height` the floor wins. NaN input
/// lands on the floor.
#[must_use]
pub fn bar_height(bar_value: f64, viewport_height: f64, max_value: f64, min_thickness: f64) -> f64 {
    let raw = viewport_height * (bar_value / max_value);
    if raw.is_nan() || raw < min_thickness {
        min_thickness
    } else if raw >= viewport_height {
        viewport_height
    } else {
        raw
    }
}

/// Distance from the container bottom to the limit line.
///
/// Floored at `min_thickness` so the line clears the baseline; there is no
/// upper clamp beyond the normalization itself.
#[must_use]
pub fn limit_offset(
    limit_value: f64,
    container_height: f64,
    max_value: f64,
    min_thickness: f64,
) -> f64 {
    let offset = container_height * (limit_value / max_value);
    if offset.is_nan() || offset < min_thickness {
        min_thickness
    } else {
        offset
    }
}
