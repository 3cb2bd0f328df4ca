use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for the current render frame.
///
/// Theme-independent knobs live here; theme-dependent tones come from
/// [`super::ThemePalette`]. Entrance timing is expressed in milliseconds and
/// resolved by the host's animation facility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub grid_ring_width: f64,
    pub grid_dash_on_px: f64,
    pub grid_dash_off_px: f64,
    pub grid_label_font_size_px: f64,
    /// Horizontal offset of the `{level}%` ring labels from the center axis.
    pub grid_label_offset_x_px: f64,
    pub spoke_line_width: f64,
    pub axis_label_font_size_px: f64,
    /// Distance past the outer ring at which category labels are centered.
    pub axis_label_radial_offset_px: f64,
    pub area_stroke_color: Color,
    pub area_stroke_width: f64,
    pub area_gradient_inner_color: Color,
    pub area_gradient_outer_color: Color,
    pub area_fade_duration_ms: f64,
    pub marker_radius_px: f64,
    pub marker_stroke_width: f64,
    /// Shared grow-in delay applied to every marker; points are not
    /// staggered by index.
    pub marker_delay_ms: f64,
    pub marker_duration_ms: f64,
}

impl RenderStyle {
    pub fn validate(&self) -> ChartResult<()> {
        for (field, value) in [
            ("grid_ring_width", self.grid_ring_width),
            ("grid_dash_on_px", self.grid_dash_on_px),
            ("grid_dash_off_px", self.grid_dash_off_px),
            ("grid_label_font_size_px", self.grid_label_font_size_px),
            ("spoke_line_width", self.spoke_line_width),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("area_stroke_width", self.area_stroke_width),
            ("marker_radius_px", self.marker_radius_px),
            ("marker_stroke_width", self.marker_stroke_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidStyle(format!(
                    "`{field}` must be finite and > 0"
                )));
            }
        }
        for (field, value) in [
            ("grid_label_offset_x_px", self.grid_label_offset_x_px),
            (
                "axis_label_radial_offset_px",
                self.axis_label_radial_offset_px,
            ),
            ("area_fade_duration_ms", self.area_fade_duration_ms),
            ("marker_delay_ms", self.marker_delay_ms),
            ("marker_duration_ms", self.marker_duration_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidStyle(format!(
                    "`{field}` must be finite and >= 0"
                )));
            }
        }
        self.area_stroke_color.validate()?;
        self.area_gradient_inner_color.validate()?;
        self.area_gradient_outer_color.validate()
    }
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            grid_ring_width: 1.0,
            grid_dash_on_px: 3.0,
            grid_dash_off_px: 3.0,
            grid_label_font_size_px: 10.0,
            grid_label_offset_x_px: 5.0,
            spoke_line_width: 1.0,
            axis_label_font_size_px: 12.0,
            axis_label_radial_offset_px: 25.0,
            area_stroke_color: Color::from_rgb8(0x06, 0xb6, 0xd4),
            area_stroke_width: 2.0,
            area_gradient_inner_color: Color::from_rgb8(0x06, 0xb6, 0xd4).with_alpha(0.8),
            area_gradient_outer_color: Color::from_rgb8(0x8b, 0x5c, 0xf6).with_alpha(0.4),
            area_fade_duration_ms: 1000.0,
            marker_radius_px: 6.0,
            marker_stroke_width: 2.0,
            marker_delay_ms: 500.0,
            marker_duration_ms: 500.0,
        }
    }
}
