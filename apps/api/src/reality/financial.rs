//! Financial breakdown: splits a CTC figure into base / variable / equity and
//! estimates monthly take-home. All figures are LPA unless stated otherwise.

use crate::companies::CompanyRecord;
use crate::reality::config::FinancialHeuristics;
use crate::reality::offer::Offer;
use crate::reality::scoring::Side;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialBreakdown {
    pub ctc: f64,
    pub base: f64,
    pub bonus: f64,
    /// Paper money: stock grants or ESOPs, not spendable this year.
    pub equity: f64,
    pub joining_bonus: Option<f64>,
    pub taxable_income: f64,
    pub tax_rate: f64,
    /// Annual take-home divided by 12, still in lakhs.
    pub monthly_take_home: f64,
    /// Monthly in-hand using the company's typical in-hand percentage.
    pub company_norm_monthly: f64,
}

pub fn compute_breakdown(
    offer: &Offer,
    company: Option<&CompanyRecord>,
    heuristics: &FinancialHeuristics,
) -> FinancialBreakdown {
    let ctc = offer.ctc;
    let base = offer.base.unwrap_or(ctc * heuristics.base_ratio);
    let bonus = if offer.has_bonus {
        ctc * heuristics.bonus_ratio
    } else {
        0.0
    };
    let estimated_equity = if offer.has_bonus {
        ctc * heuristics.equity_ratio_with_bonus
    } else {
        ctc * heuristics.equity_ratio_without_bonus
    };
    let equity = offer.stocks.unwrap_or(estimated_equity);

    let taxable_income = base + bonus;
    let tax_rate = if taxable_income > heuristics.tax_threshold_lpa {
        heuristics.high_tax_rate
    } else {
        heuristics.low_tax_rate
    };
    let monthly_take_home = taxable_income * (1.0 - tax_rate) / 12.0;

    let in_hand_percent = company
        .map(|c| c.salary.in_hand_percent)
        .unwrap_or(heuristics.default_in_hand_percent);
    let company_norm_monthly = ctc * in_hand_percent / 100.0 / 12.0;

    FinancialBreakdown {
        ctc,
        base,
        bonus,
        equity,
        joining_bonus: offer.joining_bonus,
        taxable_income,
        tax_rate,
        monthly_take_home,
        company_norm_monthly,
    }
}

/// Outcome of comparing the two monthly take-home estimates.
#[derive(Debug, Clone, PartialEq)]
pub enum TakeHomeGap {
    /// At least one offer has no CTC; no numeric claim is made.
    InsufficientData { missing: Vec<Side> },
    /// CTC present but a take-home estimate is zero, so a ratio is meaningless.
    Incomparable { zero_side: Side },
    Equal,
    Higher { side: Side, percent: f64 },
}

pub fn take_home_gap(
    offer_a: &Offer,
    offer_b: &Offer,
    a: &FinancialBreakdown,
    b: &FinancialBreakdown,
) -> TakeHomeGap {
    let missing: Vec<Side> = [(Side::A, offer_a), (Side::B, offer_b)]
        .into_iter()
        .filter(|(_, offer)| !offer.has_ctc())
        .map(|(side, _)| side)
        .collect();
    if !missing.is_empty() {
        return TakeHomeGap::InsufficientData { missing };
    }

    let (ma, mb) = (a.monthly_take_home, b.monthly_take_home);
    if ma <= 0.0 || mb <= 0.0 {
        let zero_side = if ma <= 0.0 { Side::A } else { Side::B };
        return TakeHomeGap::Incomparable { zero_side };
    }

    if (ma - mb).abs() < f64::EPSILON {
        return TakeHomeGap::Equal;
    }

    let (side, higher, lower) = if ma > mb {
        (Side::A, ma, mb)
    } else {
        (Side::B, mb, ma)
    };
    TakeHomeGap::Higher {
        side,
        percent: (higher - lower) / lower * 100.0,
    }
}

pub fn format_lpa(value: f64) -> String {
    format!("{value:.1} LPA")
}

/// Monthly lakhs rendered as thousands of rupees, e.g. 0.8 → "~₹80.0k".
pub fn format_monthly(lakhs: f64) -> String {
    format!("~₹{:.1}k", lakhs * 100.0)
}
