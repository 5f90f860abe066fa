use crate::error::AnalyticsError;
use crate::report::{DerivedRow, DerivedTable};
use core_types::{BaseTable, MonthlyRecord, Property};
use rust_decimal::Decimal;

/// A stateless calculator for deriving competitive-set metrics from the base table.
#[derive(Debug, Default)]
pub struct MetricEngine {}

impl MetricEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating derived metrics.
    ///
    /// # Arguments
    ///
    /// * `table` - The validated monthly base table.
    ///
    /// # Returns
    ///
    /// A `DerivedTable` with one row per month, in table order, or
    /// `AnalyticsError::DivisionByZero` naming the first metric and month whose
    /// divisor is zero.
    pub fn derive(&self, table: &BaseTable) -> Result<DerivedTable, AnalyticsError> {
        let rows = table
            .records()
            .iter()
            .map(|record| self.derive_row(record))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = rows.len(), "Derived metric table computed.");
        Ok(DerivedTable { rows })
    }

    fn derive_row(&self, record: &MonthlyRecord) -> Result<DerivedRow, AnalyticsError> {
        let month = record.month.as_str();
        let subject = record.property(Property::Subject);
        let competitor = record.property(Property::Competitor);
        let market = record.property(Property::Market);

        let revpar_per_occ = record.metrics.try_map(|property, m| {
            ratio(m.revpar, m.occupancy, &format!("revpar_per_occ.{property}"), month)
        })?;

        // --- Indices against the market property ---
        let occupancy_index = ratio(subject.occupancy, market.occupancy, "occupancy_index", month)?;
        let adr_index = ratio(subject.adr, market.adr, "adr_index", month)?;
        let revpar_index = ratio(subject.revpar, market.revpar, "revpar_index", month)?;

        // --- Share and gap ---
        let total_market_revpar = subject.revpar + competitor.revpar + market.revpar;
        let market_share = ratio(subject.revpar, total_market_revpar, "market_share", month)?;
        let revpar_gap = subject.revpar - competitor.revpar;

        Ok(DerivedRow {
            month: record.month.clone(),
            revpar_per_occ,
            occupancy_index,
            adr_index,
            revpar_index,
            total_market_revpar,
            market_share,
            revpar_gap,
        })
    }
}

fn ratio(numerator: Decimal, denominator: Decimal, metric: &str, month: &str) -> Result<Decimal, AnalyticsError> {
    numerator
        .checked_div(denominator)
        .ok_or_else(|| AnalyticsError::DivisionByZero {
            metric: metric.to_string(),
            month: month.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{PropertyMetrics, PropertyNames};
    use rust_decimal_macros::dec;

    fn table(subject: PropertyMetrics, competitor: PropertyMetrics, market: PropertyMetrics) -> BaseTable {
        BaseTable::new(
            PropertyNames::new("S", "C", "M"),
            vec![MonthlyRecord::new("2024-01", subject, competitor, market)],
        )
        .unwrap()
    }

    #[test]
    fn derives_every_column_for_a_single_month() {
        let derived = MetricEngine::new()
            .derive(&table(
                PropertyMetrics::new(dec!(50), dec!(200), dec!(100)),
                PropertyMetrics::new(dec!(40), dec!(250), dec!(100)),
                PropertyMetrics::new(dec!(25), dec!(100), dec!(25)),
            ))
            .unwrap();
        let row = &derived.rows[0];

        assert_eq!(row.month, "2024-01");
        assert_eq!(row.revpar_per_occ.subject, dec!(2));
        assert_eq!(row.revpar_per_occ.competitor, dec!(2.5));
        assert_eq!(row.revpar_per_occ.market, dec!(1));
        assert_eq!(row.occupancy_index, dec!(2));
        assert_eq!(row.adr_index, dec!(2));
        assert_eq!(row.revpar_index, dec!(4));
        assert_eq!(row.total_market_revpar, dec!(225));
        assert_eq!(row.market_share, dec!(100) / dec!(225));
        assert_eq!(row.revpar_gap, dec!(0));
    }

    #[test]
    fn zero_occupancy_is_a_division_error() {
        let err = MetricEngine::new()
            .derive(&table(
                PropertyMetrics::new(dec!(0), dec!(200), dec!(0)),
                PropertyMetrics::new(dec!(40), dec!(250), dec!(100)),
                PropertyMetrics::new(dec!(25), dec!(100), dec!(25)),
            ))
            .unwrap_err();

        assert_eq!(
            err,
            AnalyticsError::DivisionByZero {
                metric: "revpar_per_occ.subject".to_string(),
                month: "2024-01".to_string(),
            }
        );
    }

    #[test]
    fn zero_market_occupancy_fails_the_index_or_per_occupancy_ratio() {
        let result = MetricEngine::new().derive(&table(
            PropertyMetrics::new(dec!(50), dec!(200), dec!(100)),
            PropertyMetrics::new(dec!(40), dec!(250), dec!(100)),
            PropertyMetrics::new(dec!(0), dec!(100), dec!(0)),
        ));
        assert!(matches!(result, Err(AnalyticsError::DivisionByZero { .. })));
    }

    #[test]
    fn all_zero_revpar_fails_market_share() {
        let err = MetricEngine::new()
            .derive(&table(
                PropertyMetrics::new(dec!(50), dec!(200), dec!(0)),
                PropertyMetrics::new(dec!(40), dec!(250), dec!(0)),
                PropertyMetrics::new(dec!(25), dec!(100), dec!(0)),
            ))
            .unwrap_err();
        // The revpar index divides by market RevPAR first.
        assert_eq!(
            err.to_string(),
            "Calculation error: Division by zero encountered in metric 'revpar_index' for 2024-01"
        );
    }
}
