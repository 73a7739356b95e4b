// File: crates/gapminder-core/src/text.rs
// Summary: Label drawing with Skia textlayout; horizontal placement follows SVG text-anchor semantics.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use crate::scene::TextAnchor;

const FAMILIES: [&str; 5] = ["Helvetica", "Arial", "DejaVu Sans", "Liberation Sans", "sans-serif"];

/// Owns the font collection shared by every label of one paint pass.
pub struct TextShaper {
    collection: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut collection = FontCollection::new();
        collection.set_default_font_manager(skia::FontMgr::default(), None);
        Self { collection }
    }

    fn shape(&self, content: &str, size_px: f32, color: skia::Color) -> Paragraph {
        let mut para_style = ParagraphStyle::new();
        para_style.set_text_align(TextAlign::Left);

        let mut run = TextStyle::new();
        run.set_font_families(&FAMILIES);
        run.set_font_size(size_px.max(1.0));
        run.set_color(color);

        let mut builder = ParagraphBuilder::new(&para_style, &self.collection);
        builder.push_style(&run);
        builder.add_text(content);
        let mut shaped = builder.build();
        // single line; width only bounds wrapping
        shaped.layout(100_000.0);
        shaped
    }

    /// Paint `content` with its baseline at `y + dy_em * size_px`, `x` resolved per `anchor`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        content: &str,
        x: f32,
        y: f32,
        size_px: f32,
        anchor: TextAnchor,
        dy_em: f32,
        color: skia::Color,
    ) {
        let shaped = self.shape(content, size_px, color);
        let advance = shaped.longest_line();
        let left = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - advance * 0.5,
            TextAnchor::End => x - advance,
        };
        let baseline = y + dy_em * size_px;
        shaped.paint(canvas, (left, baseline - shaped.alphabetic_baseline()));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
