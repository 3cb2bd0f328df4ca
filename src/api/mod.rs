mod area_scene_builder;
mod engine;
mod engine_config;
mod engine_snapshot;
mod grid_scene_builder;
mod marker_scene_builder;
mod render_style;
mod spoke_scene_builder;
mod theme;

pub use engine::{ChartEngine, ScenePhase};
pub use engine_config::ChartEngineConfig;
pub use engine_snapshot::SceneSnapshot;
pub use render_style::RenderStyle;
pub use theme::{Theme, ThemePalette};
