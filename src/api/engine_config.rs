use crate::core::ChartConfig;

use super::{RenderStyle, Theme};

/// Bootstrap input for [`super::ChartEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEngineConfig {
    pub chart: ChartConfig,
    pub theme: Theme,
    pub style: RenderStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(chart: ChartConfig) -> Self {
        Self {
            chart,
            theme: Theme::default(),
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}
