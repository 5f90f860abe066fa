use crate::error::AnalyticsError;
use serde::Serialize;

/// A single notable point of a series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremum {
    pub month: String,
    pub value: f64,
}

/// Descriptive statistics for one plotted series: the figures the analysis text quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub average: f64,
    pub peak: Extremum,
    pub trough: Extremum,
}

/// Summarizes `values`, which are aligned with `months`.
///
/// Ties resolve to the earliest month.
pub fn summarize(months: &[String], values: &[f64]) -> Result<SeriesSummary, AnalyticsError> {
    if values.is_empty() {
        return Err(AnalyticsError::NotEnoughData("cannot summarize an empty series".to_string()));
    }
    if months.len() != values.len() {
        return Err(AnalyticsError::NotEnoughData(format!(
            "series has {} values but {} month labels",
            values.len(),
            months.len()
        )));
    }

    let mut peak = 0;
    let mut trough = 0;
    for (i, &value) in values.iter().enumerate() {
        if value > values[peak] {
            peak = i;
        }
        if value < values[trough] {
            trough = i;
        }
    }
    let average = values.iter().sum::<f64>() / values.len() as f64;

    Ok(SeriesSummary {
        average,
        peak: Extremum { month: months[peak].clone(), value: values[peak] },
        trough: Extremum { month: months[trough].clone(), value: values[trough] },
    })
}
