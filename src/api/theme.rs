use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Two-valued theme signal supplied by the host theme provider.
///
/// The engine holds no ambient theme state; hosts pass the current value and
/// the engine re-renders whenever it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Concrete color set used by the drawing layers for one theme value.
///
/// Faint low-opacity strokes against the matching background: near-white on
/// dark, near-black on light. Marker fills are per-record and stay outside
/// this palette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub grid_color: Color,
    pub grid_label_color: Color,
    pub axis_label_color: Color,
    pub marker_outline_color: Color,
}

impl ThemePalette {
    #[must_use]
    pub fn resolve(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                grid_color: Color::rgba(0.0, 0.0, 0.0, 0.1),
                grid_label_color: Color::rgba(0.0, 0.0, 0.0, 0.5),
                axis_label_color: Color::from_rgb8(0x1a, 0x1a, 0x2e),
                marker_outline_color: Color::rgb(1.0, 1.0, 1.0),
            },
            Theme::Dark => Self {
                grid_color: Color::rgba(1.0, 1.0, 1.0, 0.1),
                grid_label_color: Color::rgba(1.0, 1.0, 1.0, 0.5),
                axis_label_color: Color::rgb(1.0, 1.0, 1.0),
                marker_outline_color: Color::from_rgb8(0x1a, 0x1a, 0x2e),
            },
        }
    }
}
