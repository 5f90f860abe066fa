use serde::Serialize;

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend label.
    pub name: String,
    /// One value per x position.
    pub values: Vec<f64>,
}

/// A horizontal guide drawn across the whole chart, e.g. index parity at 1.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub y: f64,
    pub label: String,
}

/// Everything a rendering backend needs to draw one line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Section heading shown above the chart, e.g. "Occupancy Trends (Solo)".
    pub subheader: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Month labels, in plotting order.
    pub x_values: Vec<String>,
    pub series: Vec<Series>,
    pub reference_line: Option<ReferenceLine>,
}

impl ChartSpec {
    /// Smallest and largest y value across every series and the reference line.
    /// `None` when nothing finite is plotted.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .chain(self.reference_line.iter().map(|r| r.y))
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}
