use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tgchart_core::{CategoryLabel, Chart, ChartConfig, FixedAdvance, RenderOptions, Series};

fn build_chart(n: usize) -> Chart {
    let categories = (0..n).map(|i| CategoryLabel::plain(format!("c{i}"))).collect();
    let series = (0..4)
        .map(|k| {
            let data = (0..n).map(|i| Some((i as f64 * 0.01 + k as f64).sin() * 100.0 + 150.0)).collect();
            Series::new(format!("y{k}"), format!("Series {k}"), "#3DC23F", data)
        })
        .collect();
    let config = ChartConfig { width: 800.0, height: 500.0, ..ChartConfig::default() };
    Chart::from_parts(config, categories, series, Box::new(FixedAdvance::default())).expect("build chart")
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    for &n in &[365usize, 5_000usize] {
        let ch = build_chart(n);
        let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
        group.bench_function(format!("png_{n}"), |b| {
            b.iter(|| -> Result<()> {
                black_box(ch.render_to_png_bytes(&opts)?);
                Ok(())
            });
        });
        group.bench_function(format!("svg_{n}"), |b| {
            b.iter(|| -> Result<()> {
                black_box(ch.render_to_svg_bytes(&opts)?);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
