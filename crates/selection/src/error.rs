use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error(transparent)]
    Parse(#[from] core_types::CoreError),

    #[error("Metric '{metric}' is not available in {mode} mode")]
    MetricNotAvailable { metric: String, mode: String },

    #[error("'{0}' cannot be selected as a comparison target")]
    InvalidCompetitor(String),

    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("No analysis text is registered for {mode} / {metric}")]
    MissingNarrative { mode: String, metric: String },

    #[error("Derived table has {derived} rows but the base table has {base}")]
    Misaligned { base: usize, derived: usize },

    #[error("Value {0} cannot be plotted")]
    NotPlottable(String),
}

impl SelectionError {
    /// True when the caller asked for something that does not exist, as opposed to
    /// the data or the narrative store being inconsistent.
    pub fn is_invalid_request(&self) -> bool {
        matches!(
            self,
            SelectionError::Parse(_)
                | SelectionError::MetricNotAvailable { .. }
                | SelectionError::InvalidCompetitor(_)
        )
    }
}
