use anyhow::Result;
use pctrip_ga::Logbook;
use plotters::prelude::*;
use std::path::Path;

/// Plots min, max and average fitness per generation.
pub fn plot_evolution(logbook: &Logbook, path: &Path) -> Result<()> {
    let records = logbook.records();
    let last_gen = records.last().map(|s| s.gen).unwrap_or(0).max(1);

    let mut y_min = records.iter().map(|s| s.min).fold(f64::INFINITY, f64::min);
    let mut y_max = records.iter().map(|s| s.max).fold(f64::NEG_INFINITY, f64::max);
    if !y_min.is_finite() || !y_max.is_finite() {
        (y_min, y_max) = (0.0, 1.0);
    }
    let pad = ((y_max - y_min) * 0.05).max(1.0);

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Fitness per generation", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..last_gen, (y_min - pad)..(y_max + pad))?;
    chart
        .configure_mesh()
        .x_desc("Generation")
        .y_desc("Fitness")
        .draw()?;

    chart
        .draw_series(LineSeries::new(records.iter().map(|s| (s.gen, s.min)), &BLUE))?
        .label("Min")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(records.iter().map(|s| (s.gen, s.max)), &RED))?
        .label("Max")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(LineSeries::new(records.iter().map(|s| (s.gen, s.avg)), &BLACK))?
        .label("Avg")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
