// File: crates/insight-core/src/config.rs
// Summary: Dashboard configuration loaded from TOML with INSIGHT_* environment overrides.

use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakpoint::{Breakpoint, BreakpointSpec};
use crate::error::Result;
use crate::grid::GridMetrics;
use crate::layout::{default_views, validate_views, GridConfig, ViewDescriptor, DEFAULT_HEIGHT};
use crate::theme::{self, Theme};

/// Per-breakpoint replacements for the built-in specs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointOverrides {
    pub xs: Option<BreakpointSpec>,
    pub sm: Option<BreakpointSpec>,
    pub md: Option<BreakpointSpec>,
    pub lg: Option<BreakpointSpec>,
}

impl BreakpointOverrides {
    fn get(&self, bp: Breakpoint) -> Option<BreakpointSpec> {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    pub row_height: Option<f32>,
    pub margin: Option<f32>,
    pub container_padding: Option<f32>,
    pub default_height: Option<u32>,
    #[serde(default)]
    pub breakpoints: BreakpointOverrides,
    #[serde(default)]
    pub views: Vec<ViewDescriptor>,
}

fn default_theme() -> String {
    "light".to_owned()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            row_height: None,
            margin: None,
            container_padding: None,
            default_height: None,
            breakpoints: BreakpointOverrides::default(),
            views: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Load `path`, then apply `INSIGHT_*` variables (e.g. `INSIGHT_THEME=dark`,
    /// `INSIGHT_ROW_HEIGHT=120`). View ids must be unique.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("INSIGHT").try_parsing(true))
            .build()?;
        let cfg: Self = settings.try_deserialize()?;
        validate_views(&cfg.views)?;
        debug!(path = %path.display(), views = cfg.views.len(), theme = %cfg.theme, "loaded dashboard config");
        Ok(cfg)
    }

    /// Parse a TOML document. No environment overrides are applied.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let settings = Config::builder().add_source(File::from_str(src, FileFormat::Toml)).build()?;
        let cfg: Self = settings.try_deserialize()?;
        validate_views(&cfg.views)?;
        Ok(cfg)
    }

    /// Built-in specs with any overrides applied, validated.
    pub fn grid_config(&self) -> Result<GridConfig> {
        let specs = Breakpoint::ALL.map(|bp| self.breakpoints.get(bp).unwrap_or(BreakpointSpec::default_for(bp)));
        GridConfig::new(specs, self.default_height.unwrap_or(DEFAULT_HEIGHT))
    }

    pub fn metrics(&self) -> GridMetrics {
        let base = GridMetrics::default();
        GridMetrics {
            row_height: self.row_height.unwrap_or(base.row_height),
            margin: self.margin.unwrap_or(base.margin),
            padding: self.container_padding.unwrap_or(base.padding),
        }
    }

    /// Configured views, or the built-in dashboard when none are listed.
    pub fn views(&self) -> Vec<ViewDescriptor> {
        if self.views.is_empty() {
            default_views()
        } else {
            self.views.clone()
        }
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}
