// File: crates/tgchart-core/src/theme.rs
// Summary: Day/Night theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub title: skia::Color,
    pub crosshair: skia::Color,
    pub hover_fill: skia::Color,
    pub track_mask: skia::Color,
    pub thumb: skia::Color,
    pub legend_border: skia::Color,
    pub legend_text: skia::Color,
    /// Used when a series color string does not parse.
    pub fallback_series: skia::Color,
}

impl Theme {
    pub fn day() -> Self {
        Self {
            name: "day",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 0xe0, 0xe0, 0xe0),
            axis_label: skia::Color::from_argb(255, 0x96, 0xa2, 0xaa),
            title: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            crosshair: skia::Color::from_argb(255, 0xdf, 0xe6, 0xeb),
            hover_fill: skia::Color::from_argb(255, 255, 255, 255),
            track_mask: skia::Color::from_argb(150, 0xf2, 0xf7, 0xf9),
            thumb: skia::Color::from_argb(130, 0xc0, 0xd1, 0xe1),
            legend_border: skia::Color::from_argb(255, 0xe6, 0xec, 0xf0),
            legend_text: skia::Color::from_argb(255, 0x43, 0x48, 0x4b),
            fallback_series: skia::Color::from_argb(255, 0x3d, 0xc2, 0x3f),
        }
    }

    pub fn night() -> Self {
        Self {
            name: "night",
            background: skia::Color::from_argb(255, 0x24, 0x2f, 0x3e),
            grid: skia::Color::from_argb(255, 0x31, 0x3d, 0x4d),
            axis_label: skia::Color::from_argb(255, 0x54, 0x6a, 0x7f),
            title: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            crosshair: skia::Color::from_argb(255, 0x3b, 0x4a, 0x5a),
            hover_fill: skia::Color::from_argb(255, 0x24, 0x2f, 0x3e),
            track_mask: skia::Color::from_argb(150, 0x1f, 0x2a, 0x38),
            thumb: skia::Color::from_argb(130, 0x40, 0x56, 0x6b),
            legend_border: skia::Color::from_argb(255, 0x34, 0x44, 0x58),
            legend_text: skia::Color::from_argb(255, 0xe8, 0xec, 0xee),
            fallback_series: skia::Color::from_argb(255, 0x3d, 0xc2, 0x3f),
        }
    }

    /// Resolve a series color string against this theme.
    pub fn series_color(&self, css: &str) -> skia::Color {
        parse_hex_color(css).unwrap_or(self.fallback_series)
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::day(), Theme::night()]
}

/// Find a theme by its `name`, falling back to day.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::day()
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(s: &str) -> Option<skia::Color> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let mut c = hex.chars().map(|ch| ch.to_digit(16).map(|d| (d * 17) as u8));
            let (r, g, b) = (c.next()??, c.next()??, c.next()??);
            Some(skia::Color::from_argb(255, r, g, b))
        }
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}
