// File: crates/insight-demo/src/main.rs
// Summary: Demo renders the dashboard grid and every configured chart to PNGs; optionally prints the layout table.

use anyhow::{Context, Result};
use clap::Parser;
use insight_core::chart::{BarChart, GlyphKind, PieChart, TimeSeriesChart};
use insight_core::data::{browser_usage, BarContent};
use insight_core::types::Margin;
use insight_core::{render_to_png, ChartKind, DashboardConfig, RenderOptions, ResponsiveGrid};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render the insight dashboard headlessly.
#[derive(Parser)]
#[command(name = "insight-demo")]
#[command(version, about = "Render the insight dashboard to PNG files")]
struct Cli {
    /// Dashboard TOML file; the built-in dashboard when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container width in pixels; picks the active breakpoint
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Output directory for PNG files
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Print the per-breakpoint layout table as JSON
    #[arg(long)]
    layouts: bool,

    /// Theme name (light or dark); overrides the config file
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut cfg = match &cli.config {
        Some(path) => DashboardConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(theme) = &cli.theme {
        cfg.theme = theme.clone();
    }
    let theme = cfg.theme();

    let mut grid = ResponsiveGrid::new(cfg.grid_config()?, cfg.metrics(), cfg.views())?;
    if cli.layouts {
        println!("{}", serde_json::to_string_pretty(grid.layouts())?);
    }

    grid.relayout(cli.width);
    info!(width = cli.width, breakpoint = %grid.breakpoint(), height = grid.content_height(), "laid out dashboard");

    let dashboard = grid.render_to_png_bytes(&theme, true)?;
    let out_grid = cli.out.join("dashboard.png");
    write_png(&out_grid, &dashboard)?;
    println!("Wrote {}", out_grid.display());

    // One PNG per mounted slot, at the size its Sizer measured
    for inst in grid.instances() {
        let Some(size) = grid.cache().get(&inst.view.id) else { continue };
        let (width, height) = size.to_pixels();
        let opts = RenderOptions { width, height, theme, ..RenderOptions::default() };
        let out = cli.out.join(format!("{}.png", inst.view.id));
        render_to_png(inst.chart(), &opts, &out)?;
        println!("Wrote {} ({})", out.display(), inst.kind);
    }

    // Alternate content for the stock components
    let opts = RenderOptions { theme, ..RenderOptions::default() };
    let letters = BarChart::default().with_content(BarContent::letter_frequency()).with_margin(Margin::ZERO);
    let out_letters = cli.out.join("letter-frequency.png");
    render_to_png(&letters, &opts, &out_letters)?;
    println!("Wrote {}", out_letters.display());

    let stars = TimeSeriesChart::default().with_glyph(GlyphKind::Star);
    let out_stars = cli.out.join("time-series-stars.png");
    render_to_png(&stars, &opts, &out_stars)?;
    println!("Wrote {}", out_stars.display());

    // The dashboard again with the first bar and pie slots showing other content
    let top_browsers = PieChart::default().with_data(browser_usage().into_iter().take(3).collect());
    let mut swapped = 0;
    if let Some(id) = first_of_kind(&grid, ChartKind::Bar) {
        swapped += usize::from(grid.set_component(&id, Box::new(letters)));
    }
    if let Some(id) = first_of_kind(&grid, ChartKind::Pie) {
        swapped += usize::from(grid.set_component(&id, Box::new(top_browsers)));
    }
    if swapped > 0 {
        let alternate = grid.render_to_png_bytes(&theme, true)?;
        let out_alt = cli.out.join("dashboard-alternate.png");
        write_png(&out_alt, &alternate)?;
        println!("Wrote {}", out_alt.display());
    }

    Ok(())
}

fn first_of_kind(grid: &ResponsiveGrid, kind: ChartKind) -> Option<String> {
    grid.instances().iter().find(|i| i.kind == kind).map(|i| i.view.id.clone())
}

fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    if bytes.is_empty() {
        info!(path = %path.display(), "nothing to draw");
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write '{}'", path.display()))
}
