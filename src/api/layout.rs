use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{DataElement, DataSet, Viewport, bar_height, limit_offset, max_value};
use crate::error::{ChartError, ChartResult};
use crate::interaction::SelectionState;
use crate::render::Color;

/// Resolved height and display color for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub value: f64,
    pub height: f64,
    pub color: Color,
}

/// Per-group layout entry, in render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementLayout {
    pub index: usize,
    pub label: String,
    pub selected: bool,
    pub bars: SmallVec<[BarLayout; 4]>,
}

/// Limit line placement against the same scale as the bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitLayout {
    pub value: f64,
    pub offset_from_bottom: f64,
    pub color: Color,
    pub label: Option<String>,
}

/// Geometry for one full chart pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub plot_height: f64,
    pub bar_width: f64,
    pub max_value: f64,
    pub elements: Vec<ElementLayout>,
    pub limit: Option<LimitLayout>,
}

impl ChartLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn element(&self, index: usize) -> Option<&ElementLayout> {
        self.elements.get(index)
    }
}

/// Computes bar heights, bar colors and the limit offset for `data_set`.
///
/// `plot_height` is the drawing height available to bars and `bar_width` the
/// bar thickness (also the minimum height). The function is pure; only the
/// selection state decides colors.
pub fn compute_layout(
    data_set: &DataSet,
    selection: &SelectionState,
    plot_height: f64,
    bar_width: f64,
) -> ChartResult<ChartLayout> {
    if !plot_height.is_finite() || plot_height <= 0.0 {
        return Err(ChartError::InvalidData(
            "plot height must be finite and > 0".to_owned(),
        ));
    }
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "bar width must be finite and > 0".to_owned(),
        ));
    }

    let max_value = max_value(data_set);
    let elements = layout_elements(data_set, selection, plot_height, bar_width, max_value);
    let limit = data_set.limit().map(|limit| LimitLayout {
        value: limit.value,
        offset_from_bottom: limit_offset(limit.value, plot_height, max_value, bar_width),
        color: limit.color,
        label: limit.label.clone(),
    });

    Ok(ChartLayout {
        plot_height,
        bar_width,
        max_value,
        elements,
        limit,
    })
}

fn layout_elements(
    data_set: &DataSet,
    selection: &SelectionState,
    plot_height: f64,
    bar_width: f64,
    max_value: f64,
) -> Vec<ElementLayout> {
    // Groups are independent of each other, so large datasets can be laid out
    // in parallel without changing output order.
    #[cfg(feature = "parallel-projection")]
    {
        data_set
            .elements()
            .par_iter()
            .enumerate()
            .map(|(index, element)| {
                layout_single_element(
                    data_set,
                    selection,
                    index,
                    element,
                    plot_height,
                    bar_width,
                    max_value,
                )
            })
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        data_set
            .elements()
            .iter()
            .enumerate()
            .map(|(index, element)| {
                layout_single_element(
                    data_set,
                    selection,
                    index,
                    element,
                    plot_height,
                    bar_width,
                    max_value,
                )
            })
            .collect()
    }
}

fn layout_single_element(
    data_set: &DataSet,
    selection: &SelectionState,
    index: usize,
    element: &DataElement,
    plot_height: f64,
    bar_width: f64,
    max_value: f64,
) -> ElementLayout {
    let bars = element
        .bars
        .iter()
        .map(|bar| BarLayout {
            value: bar.value,
            height: bar_height(bar.value, plot_height, max_value, bar_width),
            color: selection.bar_color(data_set, index, bar),
        })
        .collect();

    ElementLayout {
        index,
        label: element.label.clone(),
        selected: selection.is_selected(index),
        bars,
    }
}

/// Horizontal slot of one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnGeometry {
    pub left: f64,
    pub width: f64,
}

impl ColumnGeometry {
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Groups share the viewport width evenly, first group leftmost.
#[must_use]
pub fn column_geometry(viewport_width: f64, count: usize, index: usize) -> ColumnGeometry {
    let width = if count == 0 {
        viewport_width
    } else {
        viewport_width / count as f64
    };
    ColumnGeometry {
        left: width * index as f64,
        width,
    }
}

/// Returns the group whose column (bars and label area) contains the point.
#[must_use]
pub fn element_index_at(viewport: Viewport, count: usize, x: f64, y: f64) -> Option<usize> {
    if count == 0 || !x.is_finite() || !y.is_finite() {
        return None;
    }
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    if x < 0.0 || x >= width || y < 0.0 || y > height {
        return None;
    }

    let column_width = width / count as f64;
    let index = (x / column_width).floor() as usize;
    Some(index.min(count - 1))
}
