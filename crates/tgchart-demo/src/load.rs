// File: crates/tgchart-demo/src/load.rs
// Summary: Input loaders: contest JSON (one chart or an array) and CSV tables (first column = categories).

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tgchart_core::data::PALETTE;
use tgchart_core::format::{format_axis_date, format_tooltip_date, parse_date};
use tgchart_core::{CategoryLabel, ChartConfig, ChartData, ParsedData, Series};
use tracing::{debug, warn};

pub fn charts(raw: &Path, config: &ChartConfig) -> Result<Vec<ParsedData>> {
    let (path, used_alt) = resolve_path(raw)?;
    if used_alt {
        warn!(path = %path.display(), "extension swapped between .csv/.cvs");
    }
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "csv" | "cvs" => Ok(vec![load_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?]),
        _ => load_json(&path, config),
    }
}

fn load_json(path: &Path, config: &ChartConfig) -> Result<Vec<ParsedData>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let charts = if text.trim_start().starts_with('[') {
        ChartData::many_from_json(&text)?
    } else {
        vec![ChartData::from_json(&text)?]
    };
    let mut out = Vec::with_capacity(charts.len());
    for (i, data) in charts.iter().enumerate() {
        match data.parse(&config.x_axis) {
            Ok(parsed) => out.push(parsed),
            Err(e) => warn!(chart = i, error = %e, "chart data rejected"),
        }
    }
    Ok(out)
}

/// Header row names the series; empty cells are gaps.
fn load_csv(path: &Path) -> Result<ParsedData> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    debug!(?headers, "csv headers");
    if headers.len() < 2 {
        bail!("expected a category column and at least one series column");
    }

    let mut categories = Vec::new();
    let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len() - 1];
    for rec in rdr.records() {
        let rec = rec?;
        let Some(head) = rec.get(0) else { continue };
        categories.push(category_label(head));
        for (k, column) in columns.iter_mut().enumerate() {
            let cell = rec.get(k + 1).map(str::trim).unwrap_or("");
            column.push(if cell.is_empty() { None } else { Some(cell.parse::<f64>().with_context(|| format!("bad value '{cell}'"))?) });
        }
    }

    let series = headers[1..]
        .iter()
        .zip(columns)
        .enumerate()
        .map(|(k, (name, data))| Series::new(format!("y{k}"), name.as_str(), PALETTE[k % PALETTE.len()], data))
        .collect();
    Ok(ParsedData { categories, series })
}

fn category_label(s: &str) -> CategoryLabel {
    match parse_date(s) {
        Some(d) => CategoryLabel { axis: format_axis_date(d), tooltip: format_tooltip_date(d) },
        None => CategoryLabel::plain(s.trim()),
    }
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    Some(alt)
}
