//! PNG magnetization charts.

use ferro_analysis::SweepPoint;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

const SIMULATION_COLOR: RGBColor = RGBColor(65, 105, 225);
const THEORY_COLOR: RGBColor = RGBColor(205, 92, 92);

/// Plot simulated sweep points against the mean-field curve.
///
/// Simulated points are drawn in royal blue as `|mean_spin|`: below the
/// critical temperature the broken-symmetry sign is seed luck, so the
/// magnitude is the quantity comparable with theory. The mean-field
/// curve is an indian-red line, with a grey vertical marker at
/// `critical_temperature` when it falls inside the plotted range.
pub fn save_magnetization_chart(
    path: &Path,
    simulated: &[SweepPoint],
    theory: &[(f64, f64)],
    critical_temperature: f64,
) -> Result<(), Box<dyn Error>> {
    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    for point in simulated {
        t_min = t_min.min(point.temperature);
        t_max = t_max.max(point.temperature);
    }
    for &(t, _) in theory {
        t_min = t_min.min(t);
        t_max = t_max.max(t);
    }
    if !t_min.is_finite() || !t_max.is_finite() || t_min >= t_max {
        t_min = 0.0;
        t_max = 5.0;
    }

    let root = BitMapBackend::new(path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Magnetization vs temperature", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(t_min..t_max, -0.1f64..1.1f64)?;

    chart
        .configure_mesh()
        .x_desc("Temperature")
        .y_desc("Mean spin")
        .draw()?;

    if critical_temperature > t_min && critical_temperature < t_max {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(critical_temperature, -0.1), (critical_temperature, 1.1)],
            BLACK.mix(0.3),
        )))?;
    }

    chart
        .draw_series(LineSeries::new(theory.iter().copied(), &THEORY_COLOR))?
        .label("mean-field theory")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], THEORY_COLOR));

    chart
        .draw_series(simulated.iter().map(|p| {
            Circle::new(
                (p.temperature, p.mean_spin.abs()),
                2,
                SIMULATION_COLOR.filled(),
            )
        }))?
        .label("simulation")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, SIMULATION_COLOR.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
