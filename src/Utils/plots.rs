use crate::numerical::spline_api::Spline;
use log::info;
use std::error::Error;

/// PNG of the spline: the dense curve as a line and the knots as circles.
pub fn plot_spline(
    spline: &Spline,
    samples: usize,
    filename: &str,
    caption: &str,
) -> Result<(), Box<dyn Error>> {
    use plotters::prelude::*;
    let (x, y) = spline.sample_grid(samples)?;
    let knots = spline.knots();
    let (x_min, x_max) = spline.domain();
    let y_min = knots.iter().map(|k| k.1).fold(y.min(), f64::min);
    let y_max = knots.iter().map(|k| k.1).fold(y.max(), f64::max);
    // flat curves still need a non-empty vertical range
    let pad = ((y_max - y_min) * 0.05).max(1e-6);

    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root_area)
        .caption(caption, ("sans-serif", 40))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_min..x_max, (y_min - pad)..(y_max + pad))?;
    chart.configure_mesh().x_desc("x").y_desc("y").draw()?;

    let series: Vec<(f64, f64)> = x.iter().zip(y.iter()).map(|(&x, &y)| (x, y)).collect();
    chart
        .draw_series(LineSeries::new(series, &Palette99::pick(0)))?
        .label(format!(" {} spline", spline.method()))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], Palette99::pick(0)));
    chart
        .draw_series(
            knots
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 4, BLACK.filled())),
        )?
        .label(" knots")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, BLACK.filled()));
    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root_area.present()?;
    info!("spline plot saved to {}", filename);
    Ok(())
}
