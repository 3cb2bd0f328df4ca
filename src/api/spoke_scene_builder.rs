use crate::core::polar_to_cartesian;
use crate::render::{ChartLayerKind, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive};

use super::ChartEngine;
use super::engine::SceneContext;

impl<R: Renderer> ChartEngine<R> {
    /// One full-length axis line and category label per record.
    ///
    /// Spokes run from the center to the outer radius regardless of the
    /// record's level; they mark the category axis, not its value.
    pub(super) fn append_spoke_scene(&self, frame: &mut RenderFrame, ctx: &SceneContext) {
        let label_radius = ctx.scales.radius + self.style.axis_label_radial_offset_px;

        for (index, record) in self.skills.iter().enumerate() {
            let angle = ctx.scales.angular.anchor_angle(index);
            let (spoke_x, spoke_y) = polar_to_cartesian(angle, ctx.scales.radius);

            frame.push_line(
                ChartLayerKind::Spokes,
                LinePrimitive::new(
                    ctx.center_x,
                    ctx.center_y,
                    ctx.center_x + spoke_x,
                    ctx.center_y + spoke_y,
                    self.style.spoke_line_width,
                    ctx.palette.grid_color,
                ),
            );

            let (label_x, label_y) = polar_to_cartesian(angle, label_radius);
            frame.push_text(
                ChartLayerKind::Spokes,
                TextPrimitive::new(
                    record.name.clone(),
                    ctx.center_x + label_x,
                    ctx.center_y + label_y,
                    self.style.axis_label_font_size_px,
                    ctx.palette.axis_label_color,
                    TextHAlign::Center,
                ),
            );
        }
    }
}
