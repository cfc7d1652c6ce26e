use crate::core::Viewport;
use crate::render::{
    LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{BarChartConfig, ChartLayout, LimitLayout, column_geometry};

/// Space between the limit label and its dashed line.
const LIMIT_LABEL_GAP_PX: f64 = 2.0;

/// Turns a computed layout into draw primitives.
///
/// Bars are bottom-aligned pills centered in their group column, group labels
/// sit under the baseline and the limit is a dashed full-width line with its
/// label right-aligned above it.
#[must_use]
pub fn build_render_frame(layout: &ChartLayout, config: &BarChartConfig) -> RenderFrame {
    let viewport = config.viewport;
    let mut frame = RenderFrame::new(viewport);
    let count = layout.elements.len();
    let viewport_width = f64::from(viewport.width);
    let baseline_y = layout.plot_height;
    let bar_width = layout.bar_width;

    for element in &layout.elements {
        let column = column_geometry(viewport_width, count, element.index);
        let bar_count = element.bars.len() as f64;
        let group_width = bar_count * bar_width + (bar_count - 1.0).max(0.0) * config.bar_spacing_px;
        let mut x = column.center_x() - group_width / 2.0;

        for bar in &element.bars {
            frame.rects.push(
                RectPrimitive::new(x, baseline_y - bar.height, bar_width, bar.height, bar.color)
                    .with_corner_radius(bar_width / 2.0),
            );
            x += bar_width + config.bar_spacing_px;
        }

        if !element.label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                element.label.clone(),
                column.center_x(),
                baseline_y + config.label_gap_px,
                config.label_font_size_px,
                config.label_color,
                TextHAlign::Center,
            ));
        }
    }

    if let Some(limit) = &layout.limit {
        push_limit(&mut frame, viewport, limit, baseline_y, config);
    }

    frame
}

fn push_limit(
    frame: &mut RenderFrame,
    viewport: Viewport,
    limit: &LimitLayout,
    baseline_y: f64,
    config: &BarChartConfig,
) {
    let line_y = baseline_y - limit.offset_from_bottom;
    let width = f64::from(viewport.width);
    let [on_px, off_px] = config.limit_dash_pattern;

    frame.lines.push(
        LinePrimitive::new(
            0.0,
            line_y,
            width,
            line_y,
            config.limit_stroke_width_px,
            limit.color,
        )
        .with_stroke_style(LineStrokeStyle::Dashed { on_px, off_px }),
    );

    if let Some(label) = limit.label.as_deref().filter(|label| !label.is_empty()) {
        frame.texts.push(TextPrimitive::new(
            label,
            width,
            line_y - LIMIT_LABEL_GAP_PX - config.limit_label_font_size_px,
            config.limit_label_font_size_px,
            limit.color,
            TextHAlign::Right,
        ));
    }
}
