// File: crates/gapminder-core/src/lib.rs
// Summary: Core library entry point; exports the dataset, scale, scene and dashboard API.

pub mod axis;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod drilldown;
pub mod error;
pub mod extent;
pub mod geometry;
pub mod overlay;
pub mod primary;
pub mod render;
pub mod scale;
pub mod scene;
pub mod text;
pub mod theme;
pub mod types;
pub mod year_filter;

pub use axis::{draw_axes, make_labels, AxisFrame};
pub use config::DashboardConfig;
pub use dashboard::{Dashboard, DashboardState, HoverEvent, PointerEvent};
pub use data::{Dataset, Observation};
pub use drilldown::{build_drilldown, country_series};
pub use error::DashboardError;
pub use extent::{find_min_max, AxisLimits, Extent};
pub use overlay::Overlay;
pub use primary::{build_primary_view, PrimaryView};
pub use scale::{LinearScale, ScaleTransform, SqrtScale};
pub use scene::{Display, MarkId, Scene, SceneNode};
pub use theme::Theme;
pub use types::Canvas;
pub use year_filter::{VisibilityPartition, YearSelector};
