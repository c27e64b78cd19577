// File: crates/tgchart-core/src/text.rs
// Summary: Label measurement: Skia textlayout shaper plus a fixed-advance fallback for headless layout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Measures rendered label widths for axis layout.
pub trait LabelMetrics {
    /// Width of the widest of `labels` at `font_size`.
    fn measure(&self, labels: &[String], font_size: f32) -> f32;
}

/// Every character advances by `font_size * ratio`. Deterministic, font-free.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvance {
    pub ratio: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self { Self { ratio: 0.6 } }
}

impl LabelMetrics for FixedAdvance {
    fn measure(&self, labels: &[String], font_size: f32) -> f32 {
        labels
            .iter()
            .map(|l| l.chars().count() as f32 * font_size * self.ratio)
            .fold(0.0, f32::max)
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        p.longest_line()
    }
}

impl LabelMetrics for TextShaper {
    fn measure(&self, labels: &[String], font_size: f32) -> f32 {
        labels.iter().map(|l| self.measure_width(l, font_size)).fold(0.0, f32::max)
    }
}
