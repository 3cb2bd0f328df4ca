use crate::core::project_skill_points;
use crate::render::{
    AnimatedProperty, ChartLayerKind, MarkerPrimitive, RenderFrame, Renderer, Transition,
};

use super::ChartEngine;
use super::engine::SceneContext;

impl<R: Renderer> ChartEngine<R> {
    /// One circular marker per data point.
    ///
    /// Fill is the record's own declared color; only the outline tone is
    /// theme-dependent. Every marker grows in from radius 0 after the same
    /// shared delay.
    pub(super) fn append_marker_scene(&self, frame: &mut RenderFrame, ctx: &SceneContext) {
        let points = project_skill_points(&self.skills, &ctx.scales);

        for (record, point) in self.skills.iter().zip(points) {
            let entrance = Transition::new(AnimatedProperty::Radius, 0.0, self.style.marker_radius_px)
                .with_timing(self.style.marker_delay_ms, self.style.marker_duration_ms);

            frame.push_marker(
                ChartLayerKind::Markers,
                MarkerPrimitive::new(
                    ctx.center_x + point.x,
                    ctx.center_y + point.y,
                    self.style.marker_radius_px,
                    record.color,
                    ctx.palette.marker_outline_color,
                    self.style.marker_stroke_width,
                )
                .with_entrance(entrance),
            );
        }
    }
}
