use serde::{Deserialize, Serialize};

use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One category/value entry of the chart dataset.
///
/// Order inside the dataset sequence is significant: it fixes the angular
/// sector assigned to the record. `level` is intended to lie in `[0, 100]`
/// but is not validated; out-of-range values extrapolate past the outermost
/// grid ring. `color` is the marker fill and is not theme-dependent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: f64,
    pub color: Color,
}

impl SkillRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, level: f64, color: Color) -> Self {
        Self {
            name: name.into(),
            level,
            color,
        }
    }
}

/// Layout input for one chart instance.
///
/// `grid_levels` is processed in the given order, typically ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub grid_levels: Vec<f64>,
}

impl ChartConfig {
    #[must_use]
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
            grid_levels: vec![25.0, 50.0, 75.0, 100.0],
        }
    }

    #[must_use]
    pub fn with_grid_levels(mut self, grid_levels: Vec<f64>) -> Self {
        self.grid_levels = grid_levels;
        self
    }

    /// Outer chart radius. A non-positive result means degenerate geometry,
    /// not an error.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0 - self.margin
    }

    /// Chart center in absolute pixel coordinates.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Viewport for the drawing surface backing this chart.
    ///
    /// A zero-area viewport models a not-yet-mounted surface; the engine
    /// skips rendering silently in that state.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.width.max(0.0).round() as u32,
            self.height.max(0.0).round() as u32,
        )
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(400.0, 400.0, 60.0)
    }
}
