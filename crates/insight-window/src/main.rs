// File: crates/insight-window/src/main.rs
// Summary: Windowed dashboard that renders the responsive grid via RGBA blit (CPU) using winit + softbuffer.

use anyhow::{Context, Result};
use insight_core::{DashboardConfig, Point, ResponsiveGrid, Theme};
use std::num::NonZeroU32;
use std::time::Instant;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Arg: optional dashboard TOML
    let cfg = match std::env::args().nth(1) {
        Some(path) => DashboardConfig::load(&path).with_context(|| format!("failed to load config '{path}'"))?,
        None => DashboardConfig::default(),
    };
    let theme = cfg.theme();
    let mut grid = ResponsiveGrid::new(cfg.grid_config()?, cfg.metrics(), cfg.views())?;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Insight Grid")
        .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut size = window.inner_size();
    grid.relayout(size.width);
    info!(width = size.width, breakpoint = %grid.breakpoint(), "dashboard ready");

    event_loop.run(move |event, _, cf| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                    return;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    let changed = grid.relayout(size.width);
                    debug!(changed = changed.len(), "window resized");
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    grid.pointer_move(Point::new(position.x as f32, position.y as f32), Instant::now());
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    grid.pointer_leave(Instant::now());
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(e) = draw(&grid, &theme, &mut surface, size.width, size.height) {
                    error!("redraw failed: {e:#}");
                }
            }
            _ => {}
        }

        if grid.tick(Instant::now()) {
            window.request_redraw();
        }
        *cf = match grid.next_deadline() {
            Some(at) => ControlFlow::WaitUntil(at),
            None => ControlFlow::Wait,
        };
    });
}

/// Render the grid to RGBA and blit it, top-aligned, into the window buffer.
fn draw(grid: &ResponsiveGrid, theme: &Theme, surface: &mut softbuffer::Surface, w: u32, h: u32) -> Result<()> {
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return Ok(()) };
    surface.resize(nw, nh).map_err(|e| anyhow::anyhow!("resize surface: {e}"))?;

    let (rgba, fw, fh, stride) = grid.render_to_rgba8(theme, true)?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    let bg = theme.background;
    let fill = (u32::from(bg.r()) << 16) | (u32::from(bg.g()) << 8) | u32::from(bg.b());
    frame.fill(fill);

    let rows = fh.min(h) as usize;
    let cols = fw.min(w) as usize;
    for y in 0..rows {
        let src = &rgba[y * stride..y * stride + cols * 4];
        let dst = &mut frame[y * w as usize..y * w as usize + cols];
        for (out, px) in dst.iter_mut().zip(src.chunks_exact(4)) {
            // softbuffer pixels are 0RGB
            *out = (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))
}
