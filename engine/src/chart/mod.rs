// Line chart of annual investment per administrative scope, rendered with
// plotters to a static PNG.
use crate::error::EngineError;
use plotters::prelude::*;
use shared::models::AggregatedPoint;
use std::collections::BTreeSet;

pub const CHART_TITLE: &str = "Tendência Anual de Investimento em Obras (R$ Bilhões) por Âmbito";
pub const X_LABEL: &str = "Ano do Contrato";
pub const Y_LABEL: &str = "Valor Total do Contrato (R$ Bilhões)";

const LINE_WIDTH: u32 = 2;
const MARKER_SIZE: i32 = 4;

/// Draws one line (with circle markers) per scope across the years present
/// in `points` and writes the chart to `output_path`, overwriting any
/// previous image.
pub fn render_trend_chart(
    points: &[AggregatedPoint],
    output_path: &str,
    width: u32,
    height: u32,
) -> Result<(), EngineError> {
    if points.is_empty() {
        return Err(EngineError::EmptyDataset);
    }

    let years: BTreeSet<i32> = points.iter().map(|p| p.year).collect();
    let scopes: BTreeSet<&str> = points.iter().map(|p| p.scope.as_str()).collect();

    let min_year = *years.iter().next().unwrap_or(&0);
    let max_year = *years.iter().next_back().unwrap_or(&0);
    let y_max = points
        .iter()
        .map(|p| p.value_billions)
        .fold(0.0_f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(46)
        .y_label_area_size(70)
        // Pad one year on each side so single-year datasets still get a
        // non-degenerate axis.
        .build_cartesian_2d((min_year - 1)..(max_year + 1), 0.0_f64..y_max)
        .map_err(draw_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh() // horizontal grid lines only
        .x_labels(years.len() + 2)
        .x_label_formatter(&|year| year.to_string())
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(draw_error)?;

    for (idx, &scope) in scopes.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let series = scope_series(points, scope);

        chart
            .draw_series(LineSeries::new(
                series.iter().copied(),
                color.stroke_width(LINE_WIDTH),
            ))
            .map_err(draw_error)?
            .label(scope.to_string())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
            });

        chart
            .draw_series(
                series
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), MARKER_SIZE, color.filled())),
            )
            .map_err(draw_error)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()
        .map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

/// (year, value_billions) pairs for one scope, in ascending year order.
fn scope_series(points: &[AggregatedPoint], scope: &str) -> Vec<(i32, f64)> {
    let mut series: Vec<(i32, f64)> = points
        .iter()
        .filter(|p| p.scope == scope)
        .map(|p| (p.year, p.value_billions))
        .collect();
    series.sort_by_key(|&(year, _)| year);
    series
}

fn draw_error<E: std::error::Error>(e: E) -> EngineError {
    EngineError::ChartError(e.to_string())
}
