// File: crates/gapminder-core/src/render/raster.rs
// Summary: Headless scene rasterization using Skia CPU raster surfaces (PNG bytes / files, RGBA8 buffers).

use skia_safe as skia;

use crate::error::{DashboardError, Result};
use crate::scene::{Scene, SceneNode};
use crate::text::TextShaper;
use crate::theme::{Rgba, Theme};

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    pub theme: Theme,
    /// Off in snapshot tests to avoid font variance across platforms.
    pub draw_text: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_text: true }
    }
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn raster_surface(scene: &Scene) -> Result<skia::Surface> {
    let w = scene.width.max(1) as i32;
    let h = scene.height.max(1) as i32;
    skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| DashboardError::Render(format!("failed to create {w}x{h} raster surface")))
}

/// Draw every node of `scene` onto `canvas`.
pub fn paint_scene(canvas: &skia::Canvas, scene: &Scene, opts: &RasterOptions) {
    let theme = &opts.theme;
    canvas.clear(color(theme.resolve(scene.background)));
    let shaper = opts.draw_text.then(TextShaper::new);

    for node in &scene.nodes {
        match node {
            SceneNode::Line { from, to, ink, width } => {
                let mut paint = stroke_paint(color(theme.resolve(*ink)), *width);
                paint.set_anti_alias(true);
                canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &paint);
            }
            SceneNode::Rect { rect, fill } => {
                let paint = fill_paint(color(theme.resolve(*fill)));
                let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                canvas.draw_rect(r, &paint);
            }
            SceneNode::Circle { center, r, stroke, fill, stroke_width, .. } => {
                if !node.is_visible() || !r.is_finite() || *r <= 0.0 {
                    continue;
                }
                let c = (center.x as f32, center.y as f32);
                canvas.draw_circle(c, *r as f32, &fill_paint(color(theme.resolve(*fill))));
                canvas.draw_circle(c, *r as f32, &stroke_paint(color(theme.resolve(*stroke)), *stroke_width));
            }
            SceneNode::Path { points, stroke, width } => {
                if points.len() < 2 {
                    continue;
                }
                let mut path = skia::Path::new();
                path.move_to((points[0].x as f32, points[0].y as f32));
                for p in points.iter().skip(1) {
                    path.line_to((p.x as f32, p.y as f32));
                }
                canvas.draw_path(&path, &stroke_paint(color(theme.resolve(*stroke)), *width));
            }
            SceneNode::Text { pos, content, size_px, anchor, dy_em, rotate_deg, ink } => {
                let Some(shaper) = shaper.as_ref() else { continue };
                let c = color(theme.resolve(*ink));
                if *rotate_deg != 0.0 {
                    canvas.save();
                    canvas.translate((pos.x as f32, pos.y as f32));
                    canvas.rotate(*rotate_deg, None);
                    shaper.draw_anchored(canvas, content, 0.0, 0.0, *size_px, *anchor, *dy_em, c);
                    canvas.restore();
                } else {
                    shaper.draw_anchored(canvas, content, pos.x as f32, pos.y as f32, *size_px, *anchor, *dy_em, c);
                }
            }
        }
    }
}

fn stroke_paint(c: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(c);
    paint
}

fn fill_paint(c: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(c);
    paint
}

/// Render to straight-alpha RGBA8. Returns `(pixels, width, height, stride)`.
pub fn render_to_rgba8(scene: &Scene, opts: &RasterOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = raster_surface(scene)?;
    paint_scene(surface.canvas(), scene, opts);

    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(DashboardError::Render("read_pixels failed".into()));
    }
    Ok((pixels, w as u32, h as u32, stride))
}

pub fn render_to_png_bytes(scene: &Scene, opts: &RasterOptions) -> Result<Vec<u8>> {
    let mut surface = raster_surface(scene)?;
    paint_scene(surface.canvas(), scene, opts);
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| DashboardError::Render("encode PNG failed".into()))?;
    Ok(data.as_bytes().to_vec())
}

/// Render the scene to a PNG at `output_png_path`, creating parent directories.
pub fn render_to_png(scene: &Scene, opts: &RasterOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
    let bytes = render_to_png_bytes(scene, opts)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    Ok(())
}
