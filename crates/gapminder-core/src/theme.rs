// File: crates/gapminder-core/src/theme.rs
// Summary: Light/Dark theming; resolves scene inks to colors for every backend.

use crate::scene::Ink;

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// `#rrggbb`, alpha dropped (emitted separately as opacity).
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn opacity(&self) -> f32 { self.a as f32 / 255.0 }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub axis: Rgba,
    pub tick_label: Rgba,
    pub label: Rgba,
    pub mark_stroke: Rgba,
    pub mark_fill: Rgba,
    pub series: Rgba,
    pub panel_background: Rgba,
    pub message: Rgba,
}

impl Theme {
    /// Page defaults: white ground, skyblue-outlined white marks, blue trend line.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(255, 255, 255),
            axis: Rgba::rgb(0, 0, 0),
            tick_label: Rgba::rgb(0, 0, 0),
            label: Rgba::rgb(0, 0, 0),
            mark_stroke: Rgba::rgb(0x87, 0xce, 0xeb), // skyblue
            mark_fill: Rgba::rgb(255, 255, 255),
            series: Rgba::rgb(0, 0, 255),
            panel_background: Rgba::rgba(255, 255, 255, 240),
            message: Rgba::rgb(180, 30, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            axis: Rgba::rgb(180, 180, 190),
            tick_label: Rgba::rgb(150, 150, 160),
            label: Rgba::rgb(235, 235, 245),
            mark_stroke: Rgba::rgb(0x87, 0xce, 0xeb),
            mark_fill: Rgba::rgb(30, 30, 36),
            series: Rgba::rgb(64, 160, 255),
            panel_background: Rgba::rgba(28, 28, 32, 240),
            message: Rgba::rgb(255, 120, 120),
        }
    }

    pub fn resolve(&self, ink: Ink) -> Rgba {
        match ink {
            Ink::Background => self.background,
            Ink::Axis => self.axis,
            Ink::TickLabel => self.tick_label,
            Ink::Label => self.label,
            Ink::MarkStroke => self.mark_stroke,
            Ink::MarkFill => self.mark_fill,
            Ink::Series => self.series,
            Ink::PanelBackground => self.panel_background,
            Ink::Message => self.message,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    tracing::warn!(name, "unknown theme; using light");
    Theme::light()
}
