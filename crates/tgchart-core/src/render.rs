// File: crates/tgchart-core/src/render.rs
// Summary: Headless frame rendering of a chart layout to SVG or PNG through Skia canvases.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;

use crate::chart::{Chart, ChartLayout, Overview};
use crate::geometry::{Point, RectF, SeriesGeometry};
use crate::grid::x_grid;
use crate::text::TextShaper;
use crate::theme::Theme;

pub struct RenderOptions {
    pub theme: Theme,
    /// Skip all text; snapshots stay independent of installed fonts.
    pub draw_labels: bool,
    pub line_width: f32,
    pub overview_line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::day(), draw_labels: true, line_width: 2.0, overview_line_width: 1.0 }
    }
}

impl Chart {
    /// Render the current layout to an SVG document.
    pub fn render_to_svg_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let layout = self.layout();
        let bounds = skia::Rect::from_wh(layout.width, layout.height);
        let canvas = skia::svg::Canvas::new(bounds, None);
        Painter::new(opts).frame(&canvas, self);
        Ok(canvas.end().as_bytes().to_vec())
    }

    pub fn render_to_svg(&self, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_svg_bytes(opts)?;
        write_output(output_svg_path.as_ref(), &bytes)
    }

    /// Render the current layout into a CPU raster surface and encode it as PNG.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let layout = self.layout();
        let size = (layout.width.ceil() as i32, layout.height.ceil() as i32);
        let mut surface = skia::surfaces::raster_n32_premul(size)
            .ok_or_else(|| anyhow!("failed to create {}x{} raster surface", size.0, size.1))?;
        Painter::new(opts).frame(surface.canvas(), self);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        write_output(output_png_path.as_ref(), &bytes)
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

struct Painter<'a> {
    opts: &'a RenderOptions,
    shaper: Option<TextShaper>,
}

impl<'a> Painter<'a> {
    fn new(opts: &'a RenderOptions) -> Self {
        Self { opts, shaper: opts.draw_labels.then(TextShaper::new) }
    }

    fn frame(&self, canvas: &skia::Canvas, chart: &Chart) {
        let layout = chart.layout();
        let theme = &self.opts.theme;
        canvas.clear(theme.background);

        self.grid(canvas, chart, layout);
        for g in &layout.series {
            self.polylines(canvas, g, self.opts.line_width);
        }
        self.hover(canvas, chart, layout);
        if let Some(overview) = &layout.overview {
            self.overview(canvas, overview);
        }
        self.x_labels(canvas, chart, layout);
        self.legend(canvas, chart, layout.regions.legend);
        if let (Some(title), Some(rect)) = (&chart.config().title, layout.regions.title) {
            self.text(canvas, title, chart.config().title_height * 0.5, theme.title, (rect.left, rect.top));
        }
    }

    fn grid(&self, canvas: &skia::Canvas, chart: &Chart, layout: &ChartLayout) {
        let plot = layout.regions.plot;
        let cfg = chart.config();
        let paint = stroke(self.opts.theme.grid, 1.0);
        if cfg.y_axis.show_grid {
            for tick in &layout.y_ticks {
                canvas.draw_line((plot.left, tick.y), (plot.right, tick.y), &paint);
            }
        }
        if cfg.x_axis.show_grid {
            for x in x_grid(&layout.x) {
                canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
            }
        }
        for tick in &layout.y_ticks {
            let size = cfg.y_axis.font_size;
            self.text(canvas, &tick.label, size, self.opts.theme.axis_label, (plot.left, tick.y - size - 4.0));
        }
    }

    fn x_labels(&self, canvas: &skia::Canvas, chart: &Chart, layout: &ChartLayout) {
        let Some(shaper) = &self.shaper else { return };
        let cfg = &chart.config().x_axis;
        let top = layout.regions.plot.bottom + cfg.label_margin_top - cfg.font_size;
        for label in layout.x.labels() {
            let p = shaper.layout(&label.text, cfg.font_size, self.opts.theme.axis_label);
            p.paint(canvas, (label.x - p.longest_line() / 2.0, top));
        }
    }

    fn polylines(&self, canvas: &skia::Canvas, g: &SeriesGeometry, width: f32) {
        let paint = stroke(self.opts.theme.series_color(&g.color), width);
        for line in &g.polylines {
            if let Some(path) = polyline_path(line) {
                canvas.draw_path(&path, &paint);
            }
        }
    }

    fn hover(&self, canvas: &skia::Canvas, chart: &Chart, layout: &ChartLayout) {
        let Some(tooltip) = chart.hover_tooltip() else { return };
        let plot = layout.regions.plot;
        let theme = &self.opts.theme;
        canvas.draw_line((tooltip.x, plot.top), (tooltip.x, plot.bottom), &stroke(theme.crosshair, 1.0));
        let inner = fill(theme.hover_fill);
        for entry in &tooltip.entries {
            canvas.draw_circle((tooltip.x, entry.y), 4.0, &inner);
            canvas.draw_circle((tooltip.x, entry.y), 4.0, &stroke(theme.series_color(&entry.color), 2.0));
        }
    }

    fn overview(&self, canvas: &skia::Canvas, overview: &Overview) {
        let theme = &self.opts.theme;
        for g in &overview.series {
            self.polylines(canvas, g, self.opts.overview_line_width);
        }
        let mask = fill(theme.track_mask);
        canvas.draw_rect(rect(overview.left_mask), &mask);
        canvas.draw_rect(rect(overview.right_mask), &mask);

        let thumb = fill(theme.thumb);
        canvas.draw_rect(rect(overview.left_handle), &thumb);
        canvas.draw_rect(rect(overview.right_handle), &thumb);
        let t = overview.thumb;
        let edge = stroke(theme.thumb, 1.0);
        canvas.draw_line((t.left, t.top), (t.right, t.top), &edge);
        canvas.draw_line((t.left, t.bottom), (t.right, t.bottom), &edge);
    }

    fn legend(&self, canvas: &skia::Canvas, chart: &Chart, area: RectF) {
        let theme = &self.opts.theme;
        let height = 30.0f32.min(area.height());
        let top = area.top + (area.height() - height) / 2.0;
        let mut x = area.left;
        for item in chart.legend_items() {
            let width = 40.0 + item.name.chars().count() as f32 * 7.0;
            let pill = skia::RRect::new_rect_xy(skia::Rect::from_xywh(x, top, width, height), height / 2.0, height / 2.0);
            canvas.draw_rrect(pill, &stroke(theme.legend_border, 1.0));

            let color = theme.series_color(&item.color);
            let center = (x + height / 2.0, top + height / 2.0);
            canvas.draw_circle(center, height / 2.0 - 6.0, &stroke(color, 2.0));
            if item.visible {
                canvas.draw_circle(center, height / 2.0 - 6.0, &fill(color));
            }
            self.text(canvas, &item.name, 13.0, theme.legend_text, (x + height, top + (height - 13.0) / 2.0 - 2.0));
            x += width + 10.0;
        }
    }

    fn text(&self, canvas: &skia::Canvas, text: &str, size: f32, color: skia::Color, top_left: (f32, f32)) {
        if let Some(shaper) = &self.shaper {
            shaper.layout(text, size, color).paint(canvas, top_left);
        }
    }
}

fn polyline_path(points: &[Point]) -> Option<skia::Path> {
    let (first, rest) = points.split_first()?;
    let mut path = skia::Path::new();
    path.move_to((first.x, first.y));
    for p in rest {
        path.line_to((p.x, p.y));
    }
    Some(path)
}

fn rect(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}
