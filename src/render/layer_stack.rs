use serde::{Deserialize, Serialize};

/// Draw layers of one radar chart, listed in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartLayerKind {
    Grid,
    Spokes,
    Area,
    Markers,
}

impl ChartLayerKind {
    /// Fixed paint order: grid rings first so every later layer draws on top.
    #[must_use]
    pub const fn canonical_stack() -> [ChartLayerKind; 4] {
        [
            ChartLayerKind::Grid,
            ChartLayerKind::Spokes,
            ChartLayerKind::Area,
            ChartLayerKind::Markers,
        ]
    }
}
