use serde::{Deserialize, Serialize};

use crate::core::Vertex;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rgb` or `#rrggbb` hex notation, the form application
    /// datasets typically declare marker colors in.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let expand = |nibble: u8| nibble << 4 | nibble;
        match digits.len() {
            3 => {
                let value = u16::from_str_radix(digits, 16).map_err(|_| invalid_hex(hex))?;
                Ok(Self::from_rgb8(
                    expand((value >> 8) as u8 & 0x0f),
                    expand((value >> 4) as u8 & 0x0f),
                    expand(value as u8 & 0x0f),
                ))
            }
            6 => {
                let value = u32::from_str_radix(digits, 16).map_err(|_| invalid_hex(hex))?;
                Ok(Self::from_rgb8(
                    (value >> 16) as u8,
                    (value >> 8) as u8,
                    value as u8,
                ))
            }
            _ => Err(invalid_hex(hex)),
        }
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn invalid_hex(hex: &str) -> ChartError {
    ChartError::InvalidData(format!("`{hex}` is not a #rgb or #rrggbb color"))
}

/// Stroke dash pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    Solid,
    Dashed { on_px: f64, off_px: f64 },
}

impl LineStrokeStyle {
    pub fn validate(self) -> ChartResult<()> {
        if let Self::Dashed { on_px, off_px } = self {
            if !on_px.is_finite() || !off_px.is_finite() || on_px <= 0.0 || off_px <= 0.0 {
                return Err(ChartError::InvalidData(
                    "dash segment lengths must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Visual property animated by an entrance [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimatedProperty {
    Opacity,
    Radius,
}

/// Declarative entrance interpolation: animate one visual property from
/// `from` to `to` over `duration_ms`, starting after `delay_ms`.
///
/// Transitions are carried on primitives and resolved by the host's timer or
/// animation facility. Cancellation is implicit: a rebuilt scene supersedes
/// any in-flight transition. Static backends rasterize the settled value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub property: AnimatedProperty,
    pub from: f64,
    pub to: f64,
    pub delay_ms: f64,
    pub duration_ms: f64,
}

impl Transition {
    #[must_use]
    pub const fn new(property: AnimatedProperty, from: f64, to: f64) -> Self {
        Self {
            property,
            from,
            to,
            delay_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    #[must_use]
    pub const fn with_timing(mut self, delay_ms: f64, duration_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self.duration_ms = duration_ms;
        self
    }

    /// Value of the animated property once the transition has finished.
    #[must_use]
    pub const fn settled_value(self) -> f64 {
        self.to
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ChartError::InvalidData(
                "transition endpoints must be finite".to_owned(),
            ));
        }
        if !self.delay_ms.is_finite()
            || !self.duration_ms.is_finite()
            || self.delay_ms < 0.0
            || self.duration_ms < 0.0
        {
            return Err(ChartError::InvalidData(
                "transition timing must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one unfilled reference circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingPrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub stroke_width: f64,
    pub stroke_style: LineStrokeStyle,
    pub color: Color,
}

impl RingPrimitive {
    #[must_use]
    pub const fn new(
        cx: f64,
        cy: f64,
        radius: f64,
        stroke_width: f64,
        stroke_style: LineStrokeStyle,
        color: Color,
    ) -> Self {
        Self {
            cx,
            cy,
            radius,
            stroke_width,
            stroke_style,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() || !self.radius.is_finite() {
            return Err(ChartError::InvalidData(
                "ring geometry must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "ring stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.stroke_style.validate()?;
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Two-stop radial gradient in pixel space.
///
/// The inner stop sits at `(cx, cy)` and the outer stop at distance
/// `radius` from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub inner: Color,
    pub outer: Color,
}

impl RadialGradient {
    #[must_use]
    pub const fn new(cx: f64, cy: f64, radius: f64, inner: Color, outer: Color) -> Self {
        Self {
            cx,
            cy,
            radius,
            inner,
            outer,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() || !self.radius.is_finite() {
            return Err(ChartError::InvalidData(
                "gradient geometry must be finite".to_owned(),
            ));
        }
        self.inner.validate()?;
        self.outer.validate()
    }
}

/// Draw command for the closed, gradient-filled area polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonPrimitive {
    pub vertices: Vec<Vertex>,
    pub fill: RadialGradient,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub entrance: Option<Transition>,
}

impl PolygonPrimitive {
    #[must_use]
    pub fn new(
        vertices: Vec<Vertex>,
        fill: RadialGradient,
        stroke_color: Color,
        stroke_width: f64,
    ) -> Self {
        Self {
            vertices,
            fill,
            stroke_color,
            stroke_width,
            entrance: None,
        }
    }

    #[must_use]
    pub fn with_entrance(mut self, entrance: Transition) -> Self {
        self.entrance = Some(entrance);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.vertices.is_empty() {
            return Err(ChartError::InvalidData(
                "polygon must have at least one vertex".to_owned(),
            ));
        }
        for vertex in &self.vertices {
            if !vertex.x.is_finite() || !vertex.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "polygon vertices must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "polygon stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.stroke_color.validate()?;
        if let Some(entrance) = self.entrance {
            entrance.validate()?;
        }
        Ok(())
    }
}

/// Draw command for one filled data-point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub entrance: Option<Transition>,
}

impl MarkerPrimitive {
    #[must_use]
    pub const fn new(
        cx: f64,
        cy: f64,
        radius: f64,
        fill_color: Color,
        stroke_color: Color,
        stroke_width: f64,
    ) -> Self {
        Self {
            cx,
            cy,
            radius,
            fill_color,
            stroke_color,
            stroke_width,
            entrance: None,
        }
    }

    #[must_use]
    pub const fn with_entrance(mut self, entrance: Transition) -> Self {
        self.entrance = Some(entrance);
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.cx.is_finite() || !self.cy.is_finite() || !self.radius.is_finite() {
            return Err(ChartError::InvalidData(
                "marker geometry must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.stroke_color.validate()?;
        if let Some(entrance) = self.entrance {
            entrance.validate()?;
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn hex_parsing_accepts_short_and_long_forms() {
        let long = Color::from_hex("#06b6d4").expect("long form");
        assert!((long.red - 6.0 / 255.0).abs() <= 1e-12);
        assert!((long.blue - 212.0 / 255.0).abs() <= 1e-12);

        let short = Color::from_hex("#fff").expect("short form");
        assert_eq!(short, Color::rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("nope").is_err());
    }
}
