mod frame;
mod layer_stack;
mod null_renderer;
mod primitives;

pub use frame::{LayerPrimitives, RenderFrame};
pub use layer_stack::ChartLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AnimatedProperty, Color, LinePrimitive, LineStrokeStyle, MarkerPrimitive, PolygonPrimitive,
    RadialGradient, RingPrimitive, TextHAlign, TextPrimitive, Transition,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from chart domain logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
