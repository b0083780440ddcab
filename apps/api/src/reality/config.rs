/// Heuristic split of a CTC figure into pay components, plus a two-bracket tax guess.
/// Not a tax calculator; the numbers are deliberately coarse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialHeuristics {
    /// Base pay share of CTC when the offer carries no explicit `base`.
    pub base_ratio: f64,
    /// Variable pay share, only for offers with `has_bonus`.
    pub bonus_ratio: f64,
    pub equity_ratio_with_bonus: f64,
    pub equity_ratio_without_bonus: f64,
    /// Taxable income strictly above this (LPA) uses `high_tax_rate`.
    pub tax_threshold_lpa: f64,
    pub low_tax_rate: f64,
    pub high_tax_rate: f64,
    /// In-hand percentage assumed when the company is not in the catalog.
    pub default_in_hand_percent: f64,
}

impl Default for FinancialHeuristics {
    fn default() -> Self {
        Self {
            base_ratio: 0.6,
            bonus_ratio: 0.15,
            equity_ratio_with_bonus: 0.15,
            equity_ratio_without_bonus: 0.05,
            tax_threshold_lpa: 20.0,
            low_tax_rate: 0.20,
            high_tax_rate: 0.25,
            default_in_hand_percent: 75.0,
        }
    }
}

/// Points and thresholds of the adaptive headline score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub tier1_brand_points: f64,
    pub high_learning_points: f64,
    pub green_wlb_points: f64,
    /// A slider strictly above this value is "dominant" for the headline rationale.
    pub dominance_threshold: u8,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tier1_brand_points: 20.0,
            high_learning_points: 15.0,
            green_wlb_points: 15.0,
            dominance_threshold: 70,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RealityConfig {
    pub financial: FinancialHeuristics,
    pub scoring: ScoringWeights,
}
