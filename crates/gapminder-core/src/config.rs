// File: crates/gapminder-core/src/config.rs
// Summary: TOML-backed dashboard configuration; every field has a default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DashboardError, Result};
use crate::types::{Canvas, PANEL_PADDING};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub primary: Canvas,
    pub drilldown: DrilldownConfig,
    pub default_year: i32,
    /// Pixel radius for the smallest and largest population.
    pub radius_range: (f64, f64),
    pub overlay: OverlayConfig,
    /// Re-partition mark visibility whenever the selected year changes.
    pub live_year_filter: bool,
    pub theme: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct DrilldownConfig {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub panel_padding: u32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct OverlayConfig {
    pub fade_in_ms: u64,
    pub fade_out_ms: u64,
    /// Vertical offset of the panel from the pointer.
    pub offset_y: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("gapminder.csv"),
            primary: Canvas::primary(),
            drilldown: DrilldownConfig::default(),
            default_year: 1980,
            radius_range: (2.0, 40.0),
            overlay: OverlayConfig::default(),
            live_year_filter: false,
            theme: "light".to_string(),
        }
    }
}

impl Default for DrilldownConfig {
    fn default() -> Self {
        let c = Canvas::drilldown();
        Self { width: c.width, height: c.height, margin: c.margin, panel_padding: PANEL_PADDING }
    }
}

impl DrilldownConfig {
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height, self.margin)
    }

    /// Panel surface size: chart plus padding.
    pub fn panel_size(&self) -> (u32, u32) {
        (self.width.saturating_add(self.panel_padding), self.height.saturating_add(self.panel_padding))
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self { fade_in_ms: 200, fade_out_ms: 500, offset_y: -30.0 }
    }
}

impl DashboardConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| DashboardError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            DashboardError::Config { message, .. } => DashboardError::Config { path: path.to_path_buf(), message },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| DashboardError::Config {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts with no plotting area and inverted radius ranges.
    pub fn validate(&self) -> Result<()> {
        let bad = |message: String| DashboardError::Config { path: PathBuf::from("<inline>"), message };
        for (name, c) in [("primary", self.primary), ("drilldown", self.drilldown.canvas())] {
            let fits = c.margin.checked_mul(2).is_some_and(|both| both < c.width.min(c.height));
            if !fits {
                return Err(bad(format!("{name}: margin {} leaves no plotting area", c.margin)));
            }
        }
        let (r0, r1) = self.radius_range;
        if !(r0 >= 0.0 && r1 >= r0) {
            return Err(bad(format!("radius_range ({r0}, {r1}) must satisfy 0 <= min <= max")));
        }
        Ok(())
    }
}
