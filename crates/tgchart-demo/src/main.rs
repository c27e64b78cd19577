// File: crates/tgchart-demo/src/main.rs
// Summary: Demo loads contest JSON (or a CSV table) and renders every chart to SVG and PNG frames.

mod load;
mod logging;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tgchart_core::{theme, Chart, ChartConfig, RenderOptions, TextShaper};
use tracing::{info, warn};

struct Args {
    input: PathBuf,
    out_dir: PathBuf,
    theme: String,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        input: PathBuf::from("demos/followers.json"),
        out_dir: PathBuf::from("target/out"),
        theme: String::from("day"),
        config: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" => args.out_dir = it.next().context("--out needs a directory")?.into(),
            "--theme" => args.theme = it.next().context("--theme needs a name")?,
            "--config" => args.config = Some(it.next().context("--config needs a file")?.into()),
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            _ => args.input = arg.into(),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    logging::init();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            ChartConfig::from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => ChartConfig::default(),
    };
    let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };

    let charts = load::charts(&args.input, &config)?;
    info!(input = %args.input.display(), charts = charts.len(), "loaded");
    if charts.is_empty() {
        bail!("no charts in {}", args.input.display());
    }

    let stem = args.input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    for (i, parts) in charts.into_iter().enumerate() {
        let mut chart = match Chart::from_parts(config.clone(), parts.categories, parts.series, Box::new(TextShaper::new())) {
            Ok(chart) => chart,
            Err(e) => {
                warn!(chart = i, error = %e, "chart skipped");
                continue;
            }
        };
        render_pair(&chart, &opts, &out_name(&args.out_dir, stem, i, "full"))?;

        // Second frame: the last third of the domain, as after dragging the left handle.
        if let Some(track) = chart.layout().regions.track {
            if chart.set_viewport(Some(track.width() * 2.0 / 3.0), None) {
                render_pair(&chart, &opts, &out_name(&args.out_dir, stem, i, "scrolled"))?;
            }
        }
    }
    Ok(())
}

fn render_pair(chart: &Chart, opts: &RenderOptions, png: &Path) -> Result<()> {
    chart.render_to_png(opts, png)?;
    chart.render_to_svg(opts, png.with_extension("svg"))?;
    info!(path = %png.display(), x_start = chart.layout().x.start(), x_end = chart.layout().x.end(), "wrote frame");
    Ok(())
}

/// Output file name like target/out/<stem>_<index>_<suffix>.png
fn out_name(dir: &Path, stem: &str, index: usize, suffix: &str) -> PathBuf {
    dir.join(format!("{stem}_{index}_{suffix}.png"))
}
