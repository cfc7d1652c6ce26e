use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_BAR_WIDTH_PX, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Sizing and styling for one chart.
///
/// Only the viewport is required; every other field falls back to the pill-bar
/// defaults, including when a host deserializes a partial config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    /// Bar width; doubles as the minimum bar height and limit floor.
    #[serde(default = "default_bar_width_px")]
    pub bar_width_px: f64,
    #[serde(default = "default_bar_spacing_px")]
    pub bar_spacing_px: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    /// Space between the bar baseline and the group label.
    #[serde(default = "default_label_gap_px")]
    pub label_gap_px: f64,
    #[serde(default = "default_label_color")]
    pub label_color: Color,
    #[serde(default = "default_limit_label_font_size_px")]
    pub limit_label_font_size_px: f64,
    #[serde(default = "default_limit_stroke_width_px")]
    pub limit_stroke_width_px: f64,
    /// Painted/unpainted dash lengths for the limit line.
    #[serde(default = "default_limit_dash_pattern")]
    pub limit_dash_pattern: [f64; 2],
    /// Re-picks the default selection at the start of every rebuild pass,
    /// without notifying plugins.
    #[serde(default)]
    pub auto_select_default_on_rebuild: bool,
}

impl BarChartConfig {
    /// Creates a config with default styling.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            bar_width_px: default_bar_width_px(),
            bar_spacing_px: default_bar_spacing_px(),
            label_font_size_px: default_label_font_size_px(),
            label_gap_px: default_label_gap_px(),
            label_color: default_label_color(),
            limit_label_font_size_px: default_limit_label_font_size_px(),
            limit_stroke_width_px: default_limit_stroke_width_px(),
            limit_dash_pattern: default_limit_dash_pattern(),
            auto_select_default_on_rebuild: false,
        }
    }

    #[must_use]
    pub fn with_bar_width(mut self, bar_width_px: f64) -> Self {
        self.bar_width_px = bar_width_px;
        self
    }

    #[must_use]
    pub fn with_bar_spacing(mut self, bar_spacing_px: f64) -> Self {
        self.bar_spacing_px = bar_spacing_px;
        self
    }

    #[must_use]
    pub fn with_label_style(mut self, font_size_px: f64, gap_px: f64, color: Color) -> Self {
        self.label_font_size_px = font_size_px;
        self.label_gap_px = gap_px;
        self.label_color = color;
        self
    }

    #[must_use]
    pub fn with_auto_select_default_on_rebuild(mut self, enabled: bool) -> Self {
        self.auto_select_default_on_rebuild = enabled;
        self
    }

    /// Height left for bars once the label row is reserved.
    #[must_use]
    pub fn plot_height(&self) -> f64 {
        f64::from(self.viewport.height) - self.label_font_size_px - self.label_gap_px
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for (name, value) in [
            ("bar_width_px", self.bar_width_px),
            ("label_font_size_px", self.label_font_size_px),
            ("limit_label_font_size_px", self.limit_label_font_size_px),
            ("limit_stroke_width_px", self.limit_stroke_width_px),
            ("limit_dash_pattern[0]", self.limit_dash_pattern[0]),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("bar_spacing_px", self.bar_spacing_px),
            ("label_gap_px", self.label_gap_px),
            ("limit_dash_pattern[1]", self.limit_dash_pattern[1]),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        self.label_color
            .validate()
            .map_err(|err| ChartError::InvalidConfig(format!("label_color: {err}")))?;

        if self.plot_height() <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "viewport height {} leaves no room for bars above the label row",
                self.viewport.height
            )));
        }
        Ok(())
    }
}

fn default_bar_width_px() -> f64 {
    DEFAULT_BAR_WIDTH_PX
}

fn default_bar_spacing_px() -> f64 {
    5.0
}

fn default_label_font_size_px() -> f64 {
    12.0
}

fn default_label_gap_px() -> f64 {
    10.0
}

fn default_label_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_limit_label_font_size_px() -> f64 {
    10.0
}

fn default_limit_stroke_width_px() -> f64 {
    2.0
}

fn default_limit_dash_pattern() -> [f64; 2] {
    [3.0, 5.0]
}
