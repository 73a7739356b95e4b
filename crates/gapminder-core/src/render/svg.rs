// File: crates/gapminder-core/src/render/svg.rs
// Summary: Emit a scene as a standalone SVG document.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::scene::{Scene, SceneNode, TextAnchor};
use crate::theme::{Rgba, Theme};

const FONT_FAMILY: &str = "sans-serif";

pub fn to_svg(scene: &Scene, theme: &Theme) -> String {
    let mut out = String::with_capacity(256 + scene.nodes.len() * 96);
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, scene, theme);
    out
}

pub fn write_svg(scene: &Scene, theme: &Theme, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg(scene, theme))?;
    Ok(())
}

fn write_document(out: &mut String, scene: &Scene, theme: &Theme) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{FONT_FAMILY}">"#,
        w = scene.width,
        h = scene.height,
    )?;
    writeln!(out, r#"  <rect width="100%" height="100%"{}/>"#, fill_attr(theme.resolve(scene.background)))?;
    for node in &scene.nodes {
        write_node(out, node, theme)?;
    }
    out.push_str("</svg>\n");
    Ok(())
}

fn write_node(out: &mut String, node: &SceneNode, theme: &Theme) -> std::fmt::Result {
    match node {
        SceneNode::Line { from, to, ink, width } => writeln!(
            out,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{}"{}/>"#,
            num(from.x), num(from.y), num(to.x), num(to.y), num(*width as f64),
            stroke_attr(theme.resolve(*ink)),
        ),
        SceneNode::Rect { rect, fill } => writeln!(
            out,
            r#"  <rect x="{}" y="{}" width="{}" height="{}"{}/>"#,
            num(rect.left), num(rect.top), num(rect.width()), num(rect.height()),
            fill_attr(theme.resolve(*fill)),
        ),
        SceneNode::Circle { center, r, stroke, fill, stroke_width, mark, display } => {
            write!(
                out,
                r#"  <circle class="circles" cx="{}" cy="{}" r="{}" stroke-width="{}"{}{}"#,
                num(center.x), num(center.y), num(*r), num(*stroke_width as f64),
                stroke_attr(theme.resolve(*stroke)),
                fill_attr(theme.resolve(*fill)),
            )?;
            if let Some(m) = mark {
                write!(out, r#" data-mark="{}""#, m.0)?;
            }
            if let Some(d) = display {
                write!(out, r#" display="{}""#, d.as_str())?;
            }
            out.push_str("/>\n");
            Ok(())
        }
        SceneNode::Path { points, stroke, width } => {
            if points.is_empty() {
                return Ok(());
            }
            let mut d = String::with_capacity(points.len() * 16);
            for (i, p) in points.iter().enumerate() {
                write!(d, "{}{},{}", if i == 0 { 'M' } else { 'L' }, num(p.x), num(p.y))?;
            }
            writeln!(
                out,
                r#"  <path d="{d}" fill="none" stroke-width="{}"{}/>"#,
                num(*width as f64),
                stroke_attr(theme.resolve(*stroke)),
            )
        }
        SceneNode::Text { pos, content, size_px, anchor, dy_em, rotate_deg, ink } => {
            let placement = if *rotate_deg != 0.0 {
                format!(r#"transform="translate({},{}) rotate({})""#, num(pos.x), num(pos.y), num(*rotate_deg as f64))
            } else {
                format!(r#"x="{}" y="{}""#, num(pos.x), num(pos.y))
            };
            write!(out, "  <text {placement} font-size=\"{}\"", num(*size_px as f64))?;
            match anchor {
                TextAnchor::Start => {}
                TextAnchor::Middle => out.push_str(r#" text-anchor="middle""#),
                TextAnchor::End => out.push_str(r#" text-anchor="end""#),
            }
            if *dy_em != 0.0 {
                write!(out, r#" dy="{}em""#, num(*dy_em as f64))?;
            }
            writeln!(out, "{}>{}</text>", fill_attr(theme.resolve(*ink)), escape(content))
        }
    }
}

fn stroke_attr(c: Rgba) -> String {
    if c.a == 255 {
        format!(r#" stroke="{}""#, c.hex())
    } else {
        format!(r#" stroke="{}" stroke-opacity="{}""#, c.hex(), num(c.opacity() as f64))
    }
}

fn fill_attr(c: Rgba) -> String {
    if c.a == 255 {
        format!(r#" fill="{}""#, c.hex())
    } else {
        format!(r#" fill="{}" fill-opacity="{}""#, c.hex(), num(c.opacity() as f64))
    }
}

/// Up to three decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
