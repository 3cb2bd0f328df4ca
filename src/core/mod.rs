pub mod geometry;
pub mod scale;
pub mod types;

pub use geometry::{Vertex, polar_to_cartesian, project_area_polygon, project_skill_points};
pub use scale::{AngularBandScale, PolarScales, RadialScale};
pub use types::{ChartConfig, SkillRecord, Viewport};
