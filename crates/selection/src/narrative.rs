use core_types::{Metric, Mode};

/// Keyed lookup of the pre-written analysis shown beneath a chart.
pub trait NarrativeStore {
    /// The analysis block for `metric` in `mode`, or `None` if nothing is registered.
    fn analysis(&self, mode: Mode, metric: Metric) -> Option<&str>;
}

/// The analyst's commentary on the 2024 figures, compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticNarratives;

impl NarrativeStore for StaticNarratives {
    fn analysis(&self, mode: Mode, metric: Metric) -> Option<&str> {
        let text = match (mode, metric) {
            (Mode::Solo, Metric::Occupancy) => SOLO_OCCUPANCY,
            (Mode::Solo, Metric::Adr) => SOLO_ADR,
            (Mode::Solo, Metric::Revpar) => SOLO_REVPAR,
            (Mode::Solo, _) => return None,
            (Mode::Comparison, Metric::Occupancy) => COMPARISON_OCCUPANCY,
            (Mode::Comparison, Metric::Revpar) => COMPARISON_REVPAR,
            (Mode::Comparison, Metric::Adr) => COMPARISON_ADR,
            (Mode::Comparison, Metric::RevparPerOccupancy) => REVPAR_PER_OCCUPANCY,
            (Mode::Comparison, Metric::PerformanceIndices) => PERFORMANCE_INDICES,
            (Mode::Comparison, Metric::MarketShare) => MARKET_SHARE,
            (Mode::Comparison, Metric::RevparGap) => REVPAR_GAP,
        };
        Some(text)
    }
}

const SOLO_OCCUPANCY: &str = "\
**Analysis**:
- **Overall Performance**: BNBME had an average occupancy rate of 52.25%.
- **Highs and Lows**: The highest occupancy was in April (87%), while the lowest was in July (15%).
- **Patterns**: BNBME struggled during the summer months, indicating a need for targeted strategies to maintain occupancy.";

const SOLO_ADR: &str = "\
**Analysis**:
- **Overall Performance**: BNBME maintained a strong ADR of $783.50.
- **Highs and Lows**: The highest ADR was in March ($1096), while the lowest was in August ($410).
- **Patterns**: BNBME's pricing strategy was effective during peak periods but faced challenges in maintaining high ADR during off-peak months.";

const SOLO_REVPAR: &str = "\
**Analysis**:
- **Overall Performance**: BNBME's average RevPAR was $446.88.
- **Highs and Lows**: The peak RevPAR was in March ($812), while the lowest was in July ($79).
- **Patterns**: BNBME outperformed during peak periods but struggled significantly in off-peak months.";

const COMPARISON_OCCUPANCY: &str = "\
**Analysis**:
- **Overall Performance**: BNBME had an average occupancy rate of 52.25%, slightly above the market (Anantara) average but below Luxe's 58.00%.
- **Highs and Lows**: The highest occupancy was in April (87%), while the lowest was in July (15%).
- **Patterns**: BNBME struggled during the summer months, indicating a need for targeted strategies to maintain occupancy.";

const COMPARISON_REVPAR: &str = "\
**Analysis**:
- **Overall Performance**: BNBME's average RevPAR was $446.88, higher than the market average but slightly lower than Luxe's.
- **Highs and Lows**: The peak RevPAR was in March ($812), while the lowest was in July ($79).
- **Patterns**: BNBME outperformed the market during peak periods but struggled significantly in off-peak months.";

const COMPARISON_ADR: &str = "\
**Analysis**:
- **Overall Performance**: BNBME maintained a strong ADR of $783.50, nearly identical to Luxe's and higher than the market average.
- **Highs and Lows**: The highest ADR was in March ($1096), while the lowest was in August ($410).
- **Patterns**: BNBME's pricing strategy was effective during peak periods but faced challenges in maintaining high ADR during off-peak months.";

const REVPAR_PER_OCCUPANCY: &str = "\
**Analysis**:
- **Overall Efficiency**: BNBME's RevPAR per Occupancy Point was $7.84, showing high revenue efficiency comparable to Luxe.
- **Highs and Lows**: The highest efficiency was in March ($10.97), and the lowest was in July ($4.06).
- **Patterns**: The drop in efficiency during the summer suggests a need for strategies to maintain performance in off-peak periods.";

const PERFORMANCE_INDICES: &str = "\
**Analysis**:
- **Overall Performance**: BNBME generally outperformed the market, with strong indices in March and April.
- **Highs and Lows**: The highest RevPAR Index was in March (1.49), showing a 49% higher RevPAR compared to the market. The lowest was in July (0.52), indicating underperformance during the summer.
- **Patterns**: BNBME showed strong performance in peak months but struggled to maintain this advantage during the off-peak season, particularly in July.";

const MARKET_SHARE: &str = "\
**Analysis**:
- **Overall Market Share**: BNBME captured an average of 32.65% of the total market RevPAR, with the highest share in March (38.78%) and the lowest in July (22.51%).
- **Highs and Lows**: The market share was strongest in peak months like March and April, but significantly weakened in the summer months.
- **Patterns**: The decline in market share during off-peak months suggests that BNBME needs to strengthen its strategies to maintain or grow its share during these periods.";

const REVPAR_GAP: &str = "\
**Analysis**:
- **Overall Gap**: On average, BNBME's RevPAR trailed Luxe by $27.75, with the largest gap in February (-$303) and the smallest gap in March (+$96).
- **Highs and Lows**: BNBME outperformed Luxe in March and April, but lagged significantly in February and during the summer months.
- **Patterns**: The data suggests that while BNBME can compete effectively during peak periods, it struggles to maintain this competitiveness during off-peak periods, especially in comparison to Luxe.";
