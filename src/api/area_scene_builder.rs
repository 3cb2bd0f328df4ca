use crate::core::project_area_polygon;
use crate::render::{
    AnimatedProperty, ChartLayerKind, PolygonPrimitive, RadialGradient, RenderFrame, Renderer,
    Transition,
};

use super::ChartEngine;
use super::engine::SceneContext;

impl<R: Renderer> ChartEngine<R> {
    /// The single gradient-filled polygon through every data point.
    ///
    /// The shape enters with a non-staggered opacity fade that restarts on
    /// every rebuild, since the polygon is recreated from zero each pass.
    pub(super) fn append_area_scene(&self, frame: &mut RenderFrame, ctx: &SceneContext) {
        let mut vertices = project_area_polygon(&self.skills, &ctx.scales);
        if vertices.is_empty() {
            return;
        }
        for vertex in &mut vertices {
            vertex.x += ctx.center_x;
            vertex.y += ctx.center_y;
        }

        let fill = RadialGradient::new(
            ctx.center_x,
            ctx.center_y,
            ctx.scales.radius,
            self.style.area_gradient_inner_color,
            self.style.area_gradient_outer_color,
        );
        let entrance = Transition::new(AnimatedProperty::Opacity, 0.0, 1.0)
            .with_timing(0.0, self.style.area_fade_duration_ms);

        frame.push_polygon(
            ChartLayerKind::Area,
            PolygonPrimitive::new(
                vertices,
                fill,
                self.style.area_stroke_color,
                self.style.area_stroke_width,
            )
            .with_entrance(entrance),
        );
    }
}
