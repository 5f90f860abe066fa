use crate::ChartRenderer;
use crate::error::ChartError;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use selection::ChartSpec;

/// Line colours in series order: subject, competitor, market, then spares.
const PALETTE: [RGBColor; 5] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
];

const REFERENCE_COLOR: RGBColor = RGBColor(128, 128, 128);

/// Renders charts as standalone SVG documents of a fixed pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgRenderer {
    pub width: u32,
    pub height: u32,
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(960, 540)
    }
}

impl ChartRenderer for SvgRenderer {
    type Output = String;

    fn render(&self, spec: &ChartSpec) -> Result<String, ChartError> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidSize { width: self.width, height: self.height });
        }
        check_lengths(spec)?;
        let (lo, hi) = padded_range(spec)?;

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (self.width, self.height)).into_drawing_area();
            draw(&root, spec, lo, hi)?;
            root.present()?;
        }

        tracing::debug!(title = %spec.title, bytes = svg.len(), "Rendered SVG chart.");
        Ok(svg)
    }
}

fn check_lengths(spec: &ChartSpec) -> Result<(), ChartError> {
    let expected = spec.x_values.len();
    if expected == 0 || spec.series.is_empty() {
        return Err(ChartError::EmptyChart(spec.title.clone()));
    }
    for series in &spec.series {
        if series.values.len() != expected {
            return Err(ChartError::LengthMismatch {
                series: series.name.clone(),
                expected,
                actual: series.values.len(),
            });
        }
    }
    Ok(())
}

/// The y range of the chart with a 10% margin above and below.
fn padded_range(spec: &ChartSpec) -> Result<(f64, f64), ChartError> {
    let (lo, hi) = spec.y_range().ok_or_else(|| ChartError::EmptyChart(spec.title.clone()))?;
    let span = hi - lo;
    let pad = if span > 0.0 { span * 0.1 } else { lo.abs().max(1.0) * 0.1 };
    Ok((lo - pad, hi + pad))
}

/// Month label for an x tick, blank between categories.
fn category_label(labels: &[String], x: f64) -> String {
    let index = x.round();
    if (x - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    spec: &ChartSpec,
    lo: f64,
    hi: f64,
) -> Result<(), ChartError>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let count = spec.x_values.len();
    let x_range = -0.5..(count as f64 - 0.5);

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, FontDesc::new(FontFamily::SansSerif, 22.0, FontStyle::Normal))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 50)
        .build_cartesian_2d(x_range.clone(), lo..hi)?;

    chart
        .configure_mesh()
        .x_labels(count)
        .x_label_formatter(&|x| category_label(&spec.x_values, *x))
        .y_label_formatter(&|y| format!("{y:.2}"))
        .x_desc(spec.x_label.as_str())
        .y_desc(spec.y_label.as_str())
        .draw()?;

    if let Some(guide) = &spec.reference_line {
        chart
            .draw_series(LineSeries::new(
                [(x_range.start, guide.y), (x_range.end, guide.y)],
                REFERENCE_COLOR.stroke_width(1),
            ))?
            .label(guide.label.as_str())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], REFERENCE_COLOR));
    }

    for (i, series) in spec.series.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        let points: Vec<(f64, f64)> = series
            .values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(x, v)| (x as f64, *v))
            .collect();

        chart
            .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))?
            .label(series.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(2)));
        chart.draw_series(points.iter().map(|&point| Circle::new(point, 4, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal))
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}
