use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    ChartLayerKind, LinePrimitive, MarkerPrimitive, PolygonPrimitive, RingPrimitive, TextPrimitive,
};

/// Primitives collected for one draw layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: ChartLayerKind,
    pub rings: Vec<RingPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    fn empty(kind: ChartLayerKind) -> Self {
        Self {
            kind,
            rings: Vec::new(),
            lines: Vec::new(),
            polygons: Vec::new(),
            markers: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
            && self.lines.is_empty()
            && self.polygons.is_empty()
            && self.markers.is_empty()
            && self.texts.is_empty()
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Layers appear in canonical paint order; backends draw a layer's
/// primitives completely before moving to the next layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let layers = ChartLayerKind::canonical_stack()
            .into_iter()
            .map(LayerPrimitives::empty)
            .collect();
        Self { viewport, layers }
    }

    pub fn push_ring(&mut self, kind: ChartLayerKind, ring: RingPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.rings.push(ring);
        }
    }

    pub fn push_line(&mut self, kind: ChartLayerKind, line: LinePrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.lines.push(line);
        }
    }

    pub fn push_polygon(&mut self, kind: ChartLayerKind, polygon: PolygonPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.polygons.push(polygon);
        }
    }

    pub fn push_marker(&mut self, kind: ChartLayerKind, marker: MarkerPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.markers.push(marker);
        }
    }

    pub fn push_text(&mut self, kind: ChartLayerKind, text: TextPrimitive) {
        if let Some(layer) = self.layer_mut(kind) {
            layer.texts.push(text);
        }
    }

    #[must_use]
    pub fn layer(&self, kind: ChartLayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: ChartLayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for ring in &layer.rings {
                ring.validate()?;
            }
            for line in &layer.lines {
                line.validate()?;
            }
            for polygon in &layer.polygons {
                polygon.validate()?;
            }
            for marker in &layer.markers {
                marker.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}
