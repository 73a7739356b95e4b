// File: crates/gapminder-core/src/render/mod.rs
// Summary: Scene backends: standalone SVG text and Skia CPU raster (PNG / RGBA8).

pub mod raster;
pub mod svg;

pub use raster::{render_to_png, render_to_png_bytes, render_to_rgba8, RasterOptions};
pub use svg::{to_svg, write_svg};
