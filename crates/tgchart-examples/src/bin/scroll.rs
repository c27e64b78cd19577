// File: crates/tgchart-examples/src/bin/scroll.rs
// Summary: Scripted scroll-box session: drag the handles and pan, rendering one SVG per step.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tgchart_core::{CategoryLabel, Chart, ChartConfig, ChartEvent, ChartLayout, ChartListener, RenderOptions, Series, TextShaper};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logs every event with the window it produced.
struct Narrator;

impl ChartListener for Narrator {
    fn on_event(&mut self, event: &ChartEvent, layout: &ChartLayout) {
        match event {
            ChartEvent::AxisRangeChanged(t) => {
                info!(top = t.to.top, bottom = t.to.bottom, direction = ?t.direction(), "y range changed")
            }
            other => info!(event = ?other, start = layout.x.start(), end = layout.x.end(), "chart event"),
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let n = 120;
    let categories = (0..n).map(|i| CategoryLabel::plain(format!("W{}", i + 1))).collect();
    let spike: Vec<Option<f64>> = (0..n).map(|i| Some(if (40..50).contains(&i) { 4_000.0 } else { 300.0 + i as f64 })).collect();
    let base: Vec<Option<f64>> = (0..n).map(|i| Some(150.0 + 100.0 * (i as f64 / 8.0).sin())).collect();
    let series = vec![Series::new("y0", "Visits", "#3497ED", spike), Series::new("y1", "Signups", "#F34C44", base)];

    let config = ChartConfig { title: Some("Weekly traffic".into()), ..ChartConfig::default() };
    let mut chart = Chart::from_parts(config, categories, series, Box::new(TextShaper::new()))?;
    chart.add_listener(Narrator);

    let track = chart.layout().regions.track.context("120 weekly labels should not fit without scrolling")?;
    let y = track.top + track.height() / 2.0;
    let out = PathBuf::from("target/out/scroll");
    let opts = RenderOptions::default();
    let mut frame = 0;
    let mut snap = |chart: &Chart| -> Result<()> {
        chart.render_to_svg(&opts, out.join(format!("step_{frame:02}.svg")))?;
        frame += 1;
        Ok(())
    };
    snap(&chart)?;

    // Narrow the window from the left, one handle at a time.
    chart.pointer_down(track.left, y);
    for x in [100.0, 200.0, 300.0] {
        chart.pointer_move(track.left + x, y);
        snap(&chart)?;
    }
    chart.pointer_up();

    // Pan the window back through the spike.
    let window = chart.viewport().window();
    let grab = track.left + (window.left_edge() + window.right_edge()) / 2.0;
    chart.pointer_down(grab, y);
    for dx in [-60.0, -120.0, -180.0, -240.0] {
        chart.pointer_move(grab + dx, y);
        snap(&chart)?;
    }
    chart.pointer_up();

    // Too narrow: ignored, the frame repeats the previous window.
    let right = track.left + chart.viewport().window().right_edge() - 1.0;
    chart.pointer_down(right, y);
    chart.pointer_move(track.left + chart.viewport().window().left_edge() + 10.0, y);
    chart.pointer_up();
    snap(&chart)?;

    chart.toggle_series("y0");
    snap(&chart)?;
    info!(frames = frame, dir = %out.display(), "done");
    Ok(())
}
