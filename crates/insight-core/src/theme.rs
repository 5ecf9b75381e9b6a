// File: crates/insight-core/src/theme.rs
// Summary: Light/Dark theming for chart and grid colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub panel: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub crosshair: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_text: skia::Color,
    pub glyph_outline: skia::Color,
    /// Fill where the first threshold series is above the second.
    pub above: skia::Color,
    /// Fill where it is below.
    pub below: skia::Color,
    /// Categorical colors for series and pie arcs.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            panel: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(26, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            crosshair: skia::Color::from_argb(255, 120, 120, 130),
            tooltip_fill: skia::Color::from_argb(230, 0, 0, 0),
            tooltip_text: skia::Color::from_argb(255, 255, 255, 255),
            glyph_outline: skia::Color::from_argb(255, 255, 255, 255),
            above: skia::Color::from_argb(102, 53, 92, 185),
            below: skia::Color::from_argb(102, 163, 51, 103),
            palette: [
                skia::Color::from_argb(255, 0x34, 0x88, 0xa8),
                skia::Color::from_argb(255, 0xb4, 0xc5, 0x30),
                skia::Color::from_argb(255, 0x9f, 0x1a, 0x62),
                skia::Color::from_argb(255, 0xf2, 0x8f, 0x38),
                skia::Color::from_argb(255, 0x6c, 0x5b, 0x7b),
                skia::Color::from_argb(255, 0x35, 0x5c, 0x7d),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            panel: skia::Color::from_argb(255, 28, 28, 32),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_fill: skia::Color::from_argb(235, 240, 240, 245),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
            glyph_outline: skia::Color::from_argb(255, 18, 18, 20),
            above: skia::Color::from_argb(110, 64, 160, 255),
            below: skia::Color::from_argb(110, 220, 80, 80),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 255, 200, 60),
                skia::Color::from_argb(255, 170, 120, 255),
                skia::Color::from_argb(255, 90, 210, 220),
            ],
        }
    }

    /// Categorical color for index `i`, cycling through the palette.
    pub fn series_color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
