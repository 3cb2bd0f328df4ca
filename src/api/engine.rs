use tracing::{debug, trace};

use crate::core::{ChartConfig, PolarScales, SkillRecord, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{ChartEngineConfig, RenderStyle, Theme, ThemePalette};

/// Inputs shared by every scene-builder pass of one frame rebuild.
#[derive(Debug, Clone, Copy)]
pub(super) struct SceneContext {
    pub scales: PolarScales,
    pub palette: ThemePalette,
    pub center_x: f64,
    pub center_y: f64,
}

/// Drawing-surface lifecycle of one chart instance.
///
/// The scene returns to `Empty` immediately before any rebuild; there is no
/// partial-update path and no diffing against the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    Empty,
    Drawn,
}

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the dataset, theme value, layout config, and renderer,
/// and rebuilds the full scene from a known-empty state whenever any of them
/// changes. A rebuild supersedes any in-flight entrance transition.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) style: RenderStyle,
    pub(super) theme: Theme,
    pub(super) skills: Vec<SkillRecord>,
    pub(super) phase: ScenePhase,
    pub(super) last_frame: Option<RenderFrame>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.style.validate()?;
        Ok(Self {
            renderer,
            config: config.chart,
            style: config.style,
            theme: config.theme,
            skills: Vec::new(),
            phase: ScenePhase::Empty,
            last_frame: None,
        })
    }

    /// Replaces the dataset and redraws.
    ///
    /// Order is preserved as given; it fixes each record's angular sector.
    /// Duplicate names and out-of-`[0, 100]` levels pass through untouched.
    pub fn set_skills(&mut self, skills: Vec<SkillRecord>) -> ChartResult<()> {
        debug!(count = skills.len(), "set skills dataset");
        self.skills = skills;
        self.render()
    }

    /// Applies a theme change and redraws. A repeated value is a no-op.
    pub fn set_theme(&mut self, theme: Theme) -> ChartResult<()> {
        if self.theme == theme {
            trace!(?theme, "theme unchanged, skipping redraw");
            return Ok(());
        }
        debug!(?theme, "theme changed");
        self.theme = theme;
        self.render()
    }

    pub fn set_chart_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        debug!(
            width = config.width,
            height = config.height,
            margin = config.margin,
            "chart config changed"
        );
        self.config = config;
        self.render()
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        self.render()
    }

    /// Clears the scene and rebuilds every layer in the fixed order
    /// Grid → Spokes → Area → Markers.
    ///
    /// When the drawing surface has no renderable area yet (pre-mount), the
    /// pass is skipped silently; the next render fires once layout supplies
    /// real dimensions.
    pub fn render(&mut self) -> ChartResult<()> {
        let viewport = self.config.viewport();
        if !viewport.is_valid() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "skipping render, drawing surface not ready"
            );
            return Ok(());
        }

        self.phase = ScenePhase::Empty;
        self.last_frame = None;

        let frame = self.build_frame(viewport);
        self.renderer.render(&frame)?;
        self.last_frame = Some(frame);
        self.phase = ScenePhase::Drawn;
        Ok(())
    }

    fn build_frame(&self, viewport: Viewport) -> RenderFrame {
        let scales = PolarScales::build(&self.skills, &self.config);
        let (center_x, center_y) = self.config.center();
        let ctx = SceneContext {
            scales,
            palette: ThemePalette::resolve(self.theme),
            center_x,
            center_y,
        };

        let mut frame = RenderFrame::new(viewport);
        self.append_grid_scene(&mut frame, &ctx);
        self.append_spoke_scene(&mut frame, &ctx);
        self.append_area_scene(&mut frame, &ctx);
        self.append_marker_scene(&mut frame, &ctx);
        trace!(
            records = self.skills.len(),
            radius = ctx.scales.radius,
            "rebuilt scene frame"
        );
        frame
    }

    #[must_use]
    pub fn skills(&self) -> &[SkillRecord] {
        &self.skills
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn chart_config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    #[must_use]
    pub fn scene_phase(&self) -> ScenePhase {
        self.phase
    }

    /// Frame produced by the most recent completed render pass.
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
