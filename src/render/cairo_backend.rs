use std::f64::consts::TAU;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LineStrokeStyle, MarkerPrimitive, PolygonPrimitive, RenderFrame, Renderer, RingPrimitive,
    TextHAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rings_drawn: usize,
    pub lines_drawn: usize,
    pub polygons_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo raster backend.
///
/// Entrance transitions are time-driven host concerns; a static raster pass
/// draws every animated property at its settled end value.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for layer in &frame.layers {
            for ring in &layer.rings {
                draw_ring(context, *ring)?;
                stats.rings_drawn += 1;
            }
            for line in &layer.lines {
                apply_color(context, line.color);
                context.set_line_width(line.stroke_width);
                context.move_to(line.x1, line.y1);
                context.line_to(line.x2, line.y2);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke line", err))?;
                stats.lines_drawn += 1;
            }
            for polygon in &layer.polygons {
                draw_polygon(context, polygon)?;
                stats.polygons_drawn += 1;
            }
            for text in &layer.texts {
                let layout = pangocairo::functions::create_layout(context);
                let font_description =
                    FontDescription::from_string(&format!("Sans {}", text.font_size_px));
                layout.set_font_description(Some(&font_description));
                layout.set_text(&text.text);

                let (text_width, _text_height) = layout.pixel_size();
                let x = match text.h_align {
                    TextHAlign::Left => text.x,
                    TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                    TextHAlign::Right => text.x - f64::from(text_width),
                };

                apply_color(context, text.color);
                context.move_to(x, text.y);
                pangocairo::functions::show_layout(context, &layout);
                stats.texts_drawn += 1;
            }
            for marker in &layer.markers {
                draw_marker(context, *marker)?;
                stats.markers_drawn += 1;
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn draw_ring(context: &Context, ring: RingPrimitive) -> ChartResult<()> {
    if ring.radius <= 0.0 {
        return Ok(());
    }
    apply_color(context, ring.color);
    context.set_line_width(ring.stroke_width);
    match ring.stroke_style {
        LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
        LineStrokeStyle::Dashed { on_px, off_px } => context.set_dash(&[on_px, off_px], 0.0),
    }
    context.new_sub_path();
    context.arc(ring.cx, ring.cy, ring.radius, 0.0, TAU);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke ring", err))?;
    context.set_dash(&[], 0.0);
    Ok(())
}

fn draw_polygon(context: &Context, polygon: &PolygonPrimitive) -> ChartResult<()> {
    let Some(first) = polygon.vertices.first() else {
        return Ok(());
    };

    context.new_path();
    context.move_to(first.x, first.y);
    for vertex in &polygon.vertices[1..] {
        context.line_to(vertex.x, vertex.y);
    }
    context.close_path();

    let gradient = cairo::RadialGradient::new(
        polygon.fill.cx,
        polygon.fill.cy,
        0.0,
        polygon.fill.cx,
        polygon.fill.cy,
        polygon.fill.radius.max(f64::EPSILON),
    );
    add_color_stop(&gradient, 0.0, polygon.fill.inner);
    add_color_stop(&gradient, 1.0, polygon.fill.outer);
    context
        .set_source(&gradient)
        .map_err(|err| map_backend_error("failed to set gradient source", err))?;
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill polygon", err))?;

    apply_color(context, polygon.stroke_color);
    context.set_line_width(polygon.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke polygon", err))?;
    Ok(())
}

fn draw_marker(context: &Context, marker: MarkerPrimitive) -> ChartResult<()> {
    let radius = marker
        .entrance
        .map_or(marker.radius, |entrance| entrance.settled_value());
    if radius <= 0.0 {
        return Ok(());
    }

    context.new_sub_path();
    context.arc(marker.cx, marker.cy, radius, 0.0, TAU);
    apply_color(context, marker.fill_color);
    context
        .fill_preserve()
        .map_err(|err| map_backend_error("failed to fill marker", err))?;
    apply_color(context, marker.stroke_color);
    context.set_line_width(marker.stroke_width);
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke marker", err))?;
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn add_color_stop(gradient: &cairo::RadialGradient, offset: f64, color: Color) {
    gradient.add_color_stop_rgba(offset, color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
