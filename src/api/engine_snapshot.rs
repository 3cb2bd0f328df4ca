use serde::{Deserialize, Serialize};

use crate::core::{PolarScales, Vertex, Viewport, project_skill_points};
use crate::render::Renderer;

use super::{ChartEngine, ThemePalette};

/// Serializable deterministic scene summary used by regression tests and
/// debugging tooling.
///
/// Captures resolved geometry and colors without element identity, so two
/// renders of identical inputs compare equal even though their frames are
/// distinct allocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub viewport: Viewport,
    pub radius: f64,
    pub bandwidth: f64,
    pub anchor_angles: Vec<f64>,
    pub ring_radii: Vec<f64>,
    pub point_positions: Vec<Vertex>,
    pub palette: ThemePalette,
}

impl<R: Renderer> ChartEngine<R> {
    /// Derives a snapshot from current `(skills, theme, config)` inputs.
    #[must_use]
    pub fn scene_snapshot(&self) -> SceneSnapshot {
        let scales = PolarScales::build(&self.skills, &self.config);
        SceneSnapshot {
            viewport: self.config.viewport(),
            radius: scales.radius,
            bandwidth: scales.angular.bandwidth(),
            anchor_angles: (0..self.skills.len())
                .map(|index| scales.angular.anchor_angle(index))
                .collect(),
            ring_radii: self
                .config
                .grid_levels
                .iter()
                .map(|&level| scales.radial.map(level))
                .collect(),
            point_positions: project_skill_points(&self.skills, &scales),
            palette: ThemePalette::resolve(self.theme),
        }
    }
}
