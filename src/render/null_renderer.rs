use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_ring_count: usize,
    pub last_line_count: usize,
    pub last_polygon_count: usize,
    pub last_marker_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_ring_count = frame.layers.iter().map(|layer| layer.rings.len()).sum();
        self.last_line_count = frame.layers.iter().map(|layer| layer.lines.len()).sum();
        self.last_polygon_count = frame.layers.iter().map(|layer| layer.polygons.len()).sum();
        self.last_marker_count = frame.layers.iter().map(|layer| layer.markers.len()).sum();
        self.last_text_count = frame.layers.iter().map(|layer| layer.texts.len()).sum();
        Ok(())
    }
}
