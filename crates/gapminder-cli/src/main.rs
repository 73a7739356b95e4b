// File: crates/gapminder-cli/src/main.rs
// Summary: `gapminder` CLI: render the scatter view, a country drill-down, or list the selectable years.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gapminder_core::render::{render_to_png, write_svg, RasterOptions};
use gapminder_core::theme::{self, Theme};
use gapminder_core::{build_drilldown, Dashboard, DashboardConfig, DashboardState, Dataset, Scene};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration; defaults are used when omitted
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Override the CSV path from the configuration
    #[arg(short, long, value_name = "FILE", global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
    Both,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the fertility vs life expectancy scatter view
    Render {
        #[arg(short, long, value_name = "DIR", default_value = "target/out")]
        out: PathBuf,
        #[arg(short, long, value_enum, default_value = "both")]
        format: Format,
        /// Select this year before rendering
        #[arg(short, long)]
        year: Option<i32>,
        /// Let the year selection hide marks of other years
        #[arg(long)]
        live: bool,
    },
    /// Render one country's population over time
    Drilldown {
        #[arg(long)]
        country: String,
        #[arg(short, long, value_name = "DIR", default_value = "target/out")]
        out: PathBuf,
        #[arg(short, long, value_enum, default_value = "both")]
        format: Format,
    },
    /// List the selectable years in dataset order
    Years,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::load_from_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(data) = &cli.data {
        config.data_path = data.clone();
    }
    let theme = theme::find(&config.theme);

    match cli.command {
        Commands::Render { out, format, year, live } => {
            config.live_year_filter |= live;
            let (w, h) = (config.primary.width, config.primary.height);
            let scene = match DashboardState::load(None, config) {
                DashboardState::Ready(mut dash) => {
                    if let Some(year) = year {
                        if !dash.select_year(year) {
                            warn!(year, options = ?dash.selector().options(), "year not in dataset; keeping selection");
                        }
                    }
                    dash.scene().clone()
                }
                failed => failed.scene(w, h),
            };
            write_scene(&scene, &theme, &out, "primary", format)?;
        }
        Commands::Drilldown { country, out, format } => {
            let dataset = Dataset::load(&config.data_path)?;
            let scene = build_drilldown(&dataset, &country, &config.drilldown)
                .with_context(|| format!("drill-down for '{country}'"))?;
            write_scene(&scene, &theme, &out, &format!("drilldown_{}", file_stem(&country)), format)?;
        }
        Commands::Years => {
            let dataset = Dataset::load(&config.data_path)?;
            let dash = Dashboard::new(Arc::new(dataset), config)?;
            let selected = dash.selector().selected();
            for year in dash.selector().options() {
                let mark = if Some(*year) == selected { "*" } else { " " };
                println!("{mark} {year}");
            }
            println!("{} of {} marks visible", dash.scene().visible_mark_count(), dash.dataset().len());
        }
    }
    Ok(())
}

fn write_scene(scene: &Scene, theme: &Theme, dir: &Path, name: &str, format: Format) -> Result<()> {
    if format != Format::Svg {
        let path = dir.join(format!("{name}.png"));
        render_to_png(scene, &RasterOptions { theme: *theme, draw_text: true }, &path)?;
        info!(path = %path.display(), "wrote");
    }
    if format != Format::Png {
        let path = dir.join(format!("{name}.svg"));
        write_svg(scene, theme, &path)?;
        info!(path = %path.display(), "wrote");
    }
    Ok(())
}

/// Lowercase, filesystem-safe form of a country name.
fn file_stem(country: &str) -> String {
    country
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}
