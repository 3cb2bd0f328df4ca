use crate::render::{
    ChartLayerKind, LineStrokeStyle, RenderFrame, Renderer, RingPrimitive, TextHAlign,
    TextPrimitive,
};

use super::ChartEngine;
use super::engine::SceneContext;

impl<R: Renderer> ChartEngine<R> {
    /// Concentric reference rings plus their `{level}%` labels.
    ///
    /// Grid levels are processed in config order. Labels sit along the
    /// "angle 0 is up" axis at a small fixed horizontal offset.
    pub(super) fn append_grid_scene(&self, frame: &mut RenderFrame, ctx: &SceneContext) {
        for &level in &self.config.grid_levels {
            let ring_radius = ctx.scales.radial.map(level);

            frame.push_ring(
                ChartLayerKind::Grid,
                RingPrimitive::new(
                    ctx.center_x,
                    ctx.center_y,
                    ring_radius,
                    self.style.grid_ring_width,
                    LineStrokeStyle::Dashed {
                        on_px: self.style.grid_dash_on_px,
                        off_px: self.style.grid_dash_off_px,
                    },
                    ctx.palette.grid_color,
                ),
            );

            frame.push_text(
                ChartLayerKind::Grid,
                TextPrimitive::new(
                    format!("{level}%"),
                    ctx.center_x + self.style.grid_label_offset_x_px,
                    ctx.center_y - ring_radius,
                    self.style.grid_label_font_size_px,
                    ctx.palette.grid_label_color,
                    TextHAlign::Left,
                ),
            );
        }
    }
}
