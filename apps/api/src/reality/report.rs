//! Report generation: the reality engine pipeline.
//!
//! Flow: resolve companies → adaptive score + headline → financial breakdown →
//!       trajectory → community signals → verdict + advice.
//!
//! Emission order is part of the output contract: the document viewer renders blocks
//! exactly in the order they are produced here. The function is total: unresolved
//! companies and zero CTC degrade to flagged, generic text and never abort the report.

use tracing::debug;

use crate::companies::{CompanyDirectory, CompanyRecord};
use crate::reality::blocks::{BlockBody, BlockWriter, ComparisonCard, ContentBlock, Metric, VerdictCard};
use crate::reality::config::{FinancialHeuristics, RealityConfig};
use crate::reality::financial::{
    compute_breakdown, format_lpa, format_monthly, take_home_gap, FinancialBreakdown, TakeHomeGap,
};
use crate::reality::offer::{Offer, OfferPriorities};
use crate::reality::rules::{
    all_matches, RationaleContext, COMMON_REGRET, HEADLINE_RATIONALE, LIMITED_DATA, MAX_CONS,
    POSITIVE_SIGNALS, RED_FLAGS, SENIOR_ADVICE, TRAJECTORY,
};
use crate::reality::scoring::{adaptive_score, Classification, Scores, Side, Standing};

/// Adaptive score gaps at or above these values are reported as high / moderate confidence.
const HIGH_CONFIDENCE_GAP: f64 = 10.0;
const MODERATE_CONFIDENCE_GAP: f64 = 3.0;

/// Take-home differences above this percentage name a clear financial winner.
const CLEAR_WINNER_PAY_GAP: f64 = 25.0;

/// One side of the comparison after company resolution.
struct Party<'a> {
    offer: &'a Offer,
    name: String,
    company: Option<CompanyRecord>,
    class: Classification,
}

impl<'a> Party<'a> {
    fn resolve(offer: &'a Offer, directory: &dyn CompanyDirectory) -> Self {
        let company = directory.lookup(&offer.company);
        if company.is_none() {
            debug!("Company '{}' not in directory, using generic signals", offer.company);
        }
        let class = Classification::of(company.as_ref());
        Self {
            offer,
            name: display_name(offer),
            company,
            class,
        }
    }
}

fn display_name(offer: &Offer) -> String {
    let company = offer.company.trim();
    if !company.is_empty() {
        company.to_string()
    } else if !offer.id.trim().is_empty() {
        format!("Offer {}", offer.id.trim().to_uppercase())
    } else {
        "Unnamed offer".to_string()
    }
}

struct Comparison<'a> {
    a: Party<'a>,
    b: Party<'a>,
}

impl<'a> Comparison<'a> {
    fn party(&self, side: Side) -> &Party<'a> {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

/// Generates the full reality-check document for two offers.
pub fn generate_report(
    offer_a: &Offer,
    offer_b: &Offer,
    priorities: &OfferPriorities,
    directory: &dyn CompanyDirectory,
    config: &RealityConfig,
) -> Vec<ContentBlock> {
    // Phase 1: resolution
    let cmp = Comparison {
        a: Party::resolve(offer_a, directory),
        b: Party::resolve(offer_b, directory),
    };

    // Phase 2: adaptive headline score
    let scores = Scores {
        a: adaptive_score(offer_a, &cmp.a.class, priorities, &config.scoring),
        b: adaptive_score(offer_b, &cmp.b.class, priorities, &config.scoring),
    };
    let standing = scores.standing();
    debug!(
        "Adaptive scores: {}={:.2}, {}={:.2}",
        cmp.a.name, scores.a, cmp.b.name, scores.b
    );

    let mut out = BlockWriter::new();
    write_headline(&mut out, &cmp, priorities, config, &scores, standing);

    // Phase 3: financial breakdown
    let fin_a = compute_breakdown(offer_a, cmp.a.company.as_ref(), &config.financial);
    let fin_b = compute_breakdown(offer_b, cmp.b.company.as_ref(), &config.financial);
    write_financials(&mut out, &cmp, &fin_a, &fin_b, &config.financial);

    // Phase 4: trajectory
    write_trajectory(&mut out, &cmp);

    // Phase 5: community signals
    out.heading2("Community Signals");
    write_signals(&mut out, &cmp.a);
    write_signals(&mut out, &cmp.b);

    // Phase 6: verdict
    let gap = take_home_gap(offer_a, offer_b, &fin_a, &fin_b);
    write_verdict(&mut out, &cmp, &scores, standing, &gap);

    out.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 2
// ────────────────────────────────────────────────────────────────────────────

fn write_headline(
    out: &mut BlockWriter,
    cmp: &Comparison<'_>,
    priorities: &OfferPriorities,
    config: &RealityConfig,
    scores: &Scores,
    standing: Standing,
) {
    out.heading1(format!("Reality Check: {} vs {}", cmp.a.name, cmp.b.name));

    let ctx = RationaleContext {
        priorities: *priorities,
        threshold: config.scoring.dominance_threshold,
    };
    let rationale = HEADLINE_RATIONALE.select(&ctx);
    debug!("Headline rationale: {}", HEADLINE_RATIONALE.matched(&ctx));

    let headline = match standing {
        Standing::Winner { side, .. } => format!(
            "🏆 **Adaptive pick: {}** ({:.1} vs {:.1} on your priorities). {rationale}",
            cmp.party(side).name,
            scores.get(side),
            scores.get(side.other()),
        ),
        Standing::Tie => format!(
            "⚖️ **Dead heat:** {} and {} both score {:.1} on your priorities. {rationale}",
            cmp.a.name, cmp.b.name, scores.a,
        ),
    };
    out.callout(headline);

    if let Some(warning) = missing_ctc_warning(cmp) {
        out.callout(warning);
    }
}

fn missing_ctc_warning(cmp: &Comparison<'_>) -> Option<String> {
    match (cmp.a.offer.has_ctc(), cmp.b.offer.has_ctc()) {
        (true, true) => None,
        (false, false) => Some(
            "⚠️ **Insufficient data:** No CTC provided for either offer. The pick above rests on company signals only; financial figures below are placeholders."
                .to_string(),
        ),
        (false, true) => Some(insufficient_for(&cmp.a.name)),
        (true, false) => Some(insufficient_for(&cmp.b.name)),
    }
}

fn insufficient_for(name: &str) -> String {
    format!(
        "⚠️ **Insufficient data:** No CTC provided for {name}. Add it to get a fair financial comparison."
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 3
// ────────────────────────────────────────────────────────────────────────────

fn write_financials(
    out: &mut BlockWriter,
    cmp: &Comparison<'_>,
    a: &FinancialBreakdown,
    b: &FinancialBreakdown,
    heuristics: &FinancialHeuristics,
) {
    out.heading2("The Financial Truth");

    let mut metrics = vec![
        Metric::new("Paper CTC", format_lpa(a.ctc), format_lpa(b.ctc)),
        Metric::new("Base Pay", format_lpa(a.base), format_lpa(b.base)),
        Metric::new("Variable / Bonus", format_lpa(a.bonus), format_lpa(b.bonus)),
        Metric::new("Equity (Paper Money)", format_lpa(a.equity), format_lpa(b.equity)),
    ];
    if a.joining_bonus.is_some() || b.joining_bonus.is_some() {
        let one_time = |v: Option<f64>| v.map(format_lpa).unwrap_or_else(|| "-".to_string());
        metrics.push(Metric::new(
            "Joining Bonus (one-time)",
            one_time(a.joining_bonus),
            one_time(b.joining_bonus),
        ));
    }
    metrics.push(
        Metric::new(
            "Est. Monthly Take-Home",
            format_monthly(a.monthly_take_home),
            format_monthly(b.monthly_take_home),
        )
        .highlighted(),
    );
    metrics.push(Metric::new(
        "Typical In-Hand (company norm)",
        format_monthly(a.company_norm_monthly),
        format_monthly(b.company_norm_monthly),
    ));

    out.push(BlockBody::ComparisonCard(ComparisonCard {
        company_a: cmp.a.name.clone(),
        company_b: cmp.b.name.clone(),
        metrics,
    }));

    out.paragraph(format!(
        "Take-home assumes a flat {:.0}% tax on base + variable up to {:.0} LPA and {:.0}% above it. Equity is paper money until it vests and is sold.",
        heuristics.low_tax_rate * 100.0,
        heuristics.tax_threshold_lpa,
        heuristics.high_tax_rate * 100.0,
    ));
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 4
// ────────────────────────────────────────────────────────────────────────────

fn write_trajectory(out: &mut BlockWriter, cmp: &Comparison<'_>) {
    out.heading2("3-Year Trajectory");

    let ta = TRAJECTORY.select(&cmp.a.class);
    let tb = TRAJECTORY.select(&cmp.b.class);
    let culture = |party: &Party<'_>, pick: fn(&CompanyRecord) -> String| {
        party.company.as_ref().map(pick).unwrap_or_else(|| "-".to_string())
    };

    out.push(BlockBody::ComparisonCard(ComparisonCard {
        company_a: cmp.a.name.clone(),
        company_b: cmp.b.name.clone(),
        metrics: vec![
            Metric::new("Likely Role", ta.role, tb.role),
            Metric::new("Resume Signal", ta.resume_signal, tb.resume_signal),
            Metric::new("Exit Options", ta.exit_options, tb.exit_options),
            Metric::new(
                "Work-Life Balance",
                culture(&cmp.a, |c| c.culture.wlb.to_string()),
                culture(&cmp.b, |c| c.culture.wlb.to_string()),
            ),
            Metric::new(
                "Learning Culture",
                culture(&cmp.a, |c| c.culture.learning.to_string()),
                culture(&cmp.b, |c| c.culture.learning.to_string()),
            ),
        ],
    }));
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 5
// ────────────────────────────────────────────────────────────────────────────

/// Positive signals shown per company from the catalog's `whyJoin` list.
const MAX_WHY_JOIN: usize = 2;

fn write_signals(out: &mut BlockWriter, party: &Party<'_>) {
    out.heading3(format!("{} Analysis", party.name));

    let Some(company) = &party.company else {
        out.paragraph(LIMITED_DATA);
        return;
    };

    for reason in company.why_join.iter().take(MAX_WHY_JOIN) {
        out.todo(format!("✅ {reason}"), true);
    }
    if company.why_join.is_empty() {
        if let Some(description) = &company.description {
            out.quote(description.clone());
        }
    }
    for signal in all_matches(POSITIVE_SIGNALS, &party.class) {
        out.todo(*signal, true);
    }

    debug!(
        "Regret rule for {}: {}",
        party.name,
        COMMON_REGRET.matched(&party.class)
    );
    out.callout(*COMMON_REGRET.select(&party.class));

    let cons = company.cons();
    if cons.is_empty() {
        for flag in all_matches(RED_FLAGS, &party.class).into_iter().flat_map(|f| f.iter()) {
            out.todo(*flag, false);
        }
    } else {
        for con in cons.iter().take(MAX_CONS) {
            out.todo(format!("⚠️ {con}"), false);
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Phase 6
// ────────────────────────────────────────────────────────────────────────────

fn write_verdict(
    out: &mut BlockWriter,
    cmp: &Comparison<'_>,
    scores: &Scores,
    standing: Standing,
    gap: &TakeHomeGap,
) {
    out.divider();
    out.heading2("The Verdict");

    let winner = match standing {
        Standing::Winner { side, .. } => cmp.party(side).name.clone(),
        Standing::Tie => format!("Tie: {} and {}", cmp.a.name, cmp.b.name),
    };

    out.push(BlockBody::VerdictCard(VerdictCard {
        winner,
        financial_diff: financial_sentence(cmp, gap),
        growth_winner: growth_sentence(cmp, scores, standing),
        wlb_winner: wlb_sentence(cmp, standing),
        network_sentiment: confidence_sentence(scores),
    }));

    let advice = SENIOR_ADVICE.select(&(cmp.a.class, cmp.b.class));
    out.paragraph(*advice);
}

fn financial_sentence(cmp: &Comparison<'_>, gap: &TakeHomeGap) -> String {
    match gap {
        TakeHomeGap::InsufficientData { missing } if missing.len() > 1 => {
            "Insufficient data: no CTC provided for either offer. Enter both CTCs to compare take-home pay.".to_string()
        }
        TakeHomeGap::InsufficientData { missing } => {
            let name = missing
                .first()
                .map(|side| cmp.party(*side).name.as_str())
                .unwrap_or("one offer");
            format!("Insufficient data: no CTC provided for {name}. Add it for a fair financial comparison.")
        }
        TakeHomeGap::Incomparable { zero_side } => format!(
            "Incomparable: the estimated take-home for {} is zero, so no percentage difference is shown.",
            cmp.party(*zero_side).name
        ),
        TakeHomeGap::Equal => "Both offers leave the same estimated monthly take-home.".to_string(),
        TakeHomeGap::Higher { side, percent } if *percent > CLEAR_WINNER_PAY_GAP => format!(
            "{} is the clear winner, putting ~{percent:.0}% more in hand each month than {}.",
            cmp.party(*side).name,
            cmp.party(side.other()).name
        ),
        TakeHomeGap::Higher { side, percent } => format!(
            "The pay gap is small (~{percent:.0}% in favour of {}). Focus on the role and culture instead of the money.",
            cmp.party(*side).name
        ),
    }
}

fn growth_sentence(cmp: &Comparison<'_>, scores: &Scores, standing: Standing) -> String {
    match standing {
        Standing::Winner { side, .. } => format!(
            "{} leads on your weighted priorities ({:.1} vs {:.1}).",
            cmp.party(side).name,
            scores.get(side),
            scores.get(side.other())
        ),
        Standing::Tie => format!(
            "{} and {} score the same on your priorities. The specific team will decide growth.",
            cmp.a.name, cmp.b.name
        ),
    }
}

/// Total over every WLB combination, unresolved companies included.
///
/// The side with the strictly better rank wins. Equal ranks go to the adaptive
/// winner (offer A on a tie) with the "stress-free work" wording.
fn wlb_sentence(cmp: &Comparison<'_>, standing: Standing) -> String {
    let (ra, rb) = (cmp.a.class.wlb_rank(), cmp.b.class.wlb_rank());
    let better = match ra.cmp(&rb) {
        std::cmp::Ordering::Greater => &cmp.a,
        std::cmp::Ordering::Less => &cmp.b,
        std::cmp::Ordering::Equal => match standing {
            Standing::Winner { side, .. } => cmp.party(side),
            Standing::Tie => &cmp.a,
        },
    };
    if ra != rb && better.class.is_green() {
        format!("{} (Green work-life balance)", better.name)
    } else {
        format!("{} (likely better for stress-free work)", better.name)
    }
}

fn confidence_sentence(scores: &Scores) -> String {
    let gap = scores.gap();
    let level = if gap >= HIGH_CONFIDENCE_GAP {
        "High"
    } else if gap >= MODERATE_CONFIDENCE_GAP {
        "Moderate"
    } else {
        "Low"
    };
    format!("{level} confidence: the adaptive scores differ by {gap:.1} points.")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::companies::StaticCompanyDirectory;
    use crate::reality::blocks::BlockBody;
    use serde_json::json;

    fn record(name: &str, tier: &str, company_type: &str, wlb: &str, learning: &str) -> CompanyRecord {
        serde_json::from_value(json!({
            "id": name.to_lowercase(),
            "name": name,
            "tier": tier,
            "companyType": company_type,
            "culture": { "wlb": wlb, "learning": learning },
            "salary": { "minLPA": 10, "maxLPA": 30, "inHandPercent": 80 },
            "description": format!("{name} description"),
            "whyJoin": ["Reason one", "Reason two", "Reason three"],
            "detailedAnalysis": { "cons": ["Slow hiring"] }
        }))
        .unwrap()
    }

    fn stub(records: Vec<CompanyRecord>) -> impl Fn(&str) -> Option<CompanyRecord> + Send + Sync {
        move |name: &str| {
            records
                .iter()
                .find(|r| r.name.eq_ignore_ascii_case(name))
                .cloned()
        }
    }

    fn scenario_priorities() -> OfferPriorities {
        OfferPriorities {
            money: 80,
            learning: 20,
            wlb: 20,
            brand: 20,
            stability: 50,
        }
    }

    fn verdict(blocks: &[ContentBlock]) -> VerdictCard {
        blocks
            .iter()
            .find_map(|b| match &b.body {
                BlockBody::VerdictCard(v) => Some(v.clone()),
                _ => None,
            })
            .expect("report has a verdict card")
    }

    /// Blocks between "{name} Analysis" and the next heading or divider.
    fn section<'b>(blocks: &'b [ContentBlock], name: &str) -> &'b [ContentBlock] {
        let title = format!("{name} Analysis");
        let start = blocks
            .iter()
            .position(|b| b.body == BlockBody::Heading3(title.clone()))
            .expect("section heading present")
            + 1;
        let len = blocks[start..]
            .iter()
            .position(|b| {
                matches!(
                    b.body,
                    BlockBody::Heading1(_)
                        | BlockBody::Heading2(_)
                        | BlockBody::Heading3(_)
                        | BlockBody::Divider
                )
            })
            .unwrap_or(blocks.len() - start);
        &blocks[start..start + len]
    }

    fn todo_count(blocks: &[ContentBlock]) -> usize {
        blocks
            .iter()
            .filter(|b| matches!(b.body, BlockBody::Todo { .. }))
            .count()
    }

    #[test]
    fn test_end_to_end_google_vs_zerodha() {
        let directory = StaticCompanyDirectory::embedded().unwrap();
        let a = Offer::new("a", "Google India", 40.0, true);
        let b = Offer::new("b", "Zerodha", 20.0, false);

        let blocks = generate_report(
            &a,
            &b,
            &scenario_priorities(),
            &directory,
            &RealityConfig::default(),
        );

        let v = verdict(&blocks);
        assert_eq!(v.winner, "Google India");
        assert!(v.financial_diff.starts_with("Google India is the clear winner"));
        assert!(v.financial_diff.contains("~134%"));
        assert!(v.growth_winner.starts_with("Google India leads"));
        // Both are Green, so the adaptive pick takes the balance line
        assert_eq!(v.wlb_winner, "Google India (likely better for stress-free work)");
        // 42.0 vs 22.0
        assert!(v.network_sentiment.contains("20.0 points"));
        assert!(v.network_sentiment.starts_with("High"));

        // Cash Flow rationale because money > 70 and learning is not
        let BlockBody::Callout(headline) = &blocks[1].body else {
            panic!("second block is the headline callout");
        };
        assert!(headline.contains("Adaptive pick: Google India"));
        assert!(headline.contains("Cash Flow"));
    }

    #[test]
    fn test_phase_order_is_stable() {
        let directory = StaticCompanyDirectory::embedded().unwrap();
        let blocks = generate_report(
            &Offer::new("a", "Google India", 40.0, true),
            &Offer::new("b", "Zerodha", 20.0, false),
            &scenario_priorities(),
            &directory,
            &RealityConfig::default(),
        );

        let headings: Vec<&str> = blocks
            .iter()
            .filter_map(|b| match &b.body {
                BlockBody::Heading1(t) | BlockBody::Heading2(t) | BlockBody::Heading3(t) => {
                    Some(t.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            headings,
            vec![
                "Reality Check: Google India vs Zerodha",
                "The Financial Truth",
                "3-Year Trajectory",
                "Community Signals",
                "Google India Analysis",
                "Zerodha Analysis",
                "The Verdict",
            ]
        );
        assert_eq!(blocks.first().unwrap().type_tag(), "heading-1");
        assert_eq!(blocks.last().unwrap().type_tag(), "paragraph");
    }

    #[test]
    fn test_financial_card_carries_breakdown() {
        let directory = StaticCompanyDirectory::embedded().unwrap();
        let blocks = generate_report(
            &Offer::new("a", "Google India", 40.0, true),
            &Offer::new("b", "Zerodha", 20.0, false),
            &scenario_priorities(),
            &directory,
            &RealityConfig::default(),
        );

        let card = blocks
            .iter()
            .find_map(|b| match &b.body {
                BlockBody::ComparisonCard(c) => Some(c),
                _ => None,
            })
            .unwrap();
        let labels: Vec<&str> = card.metrics.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Paper CTC",
                "Base Pay",
                "Variable / Bonus",
                "Equity (Paper Money)",
                "Est. Monthly Take-Home",
                "Typical In-Hand (company norm)",
            ]
        );
        let monthly = &card.metrics[4];
        assert!(monthly.highlight);
        assert_eq!(monthly.value_a, "~₹187.5k");
        assert_eq!(monthly.value_b, "~₹80.0k");
        assert_eq!(card.metrics[1].value_b, "12.0 LPA");
        assert_eq!(card.metrics[3].value_b, "1.0 LPA");
    }

    #[test]
    fn test_joining_bonus_row_only_when_supplied() {
        let lookup = stub(vec![]);
        let a = Offer {
            joining_bonus: Some(3.0),
            ..Offer::new("a", "Alpha", 20.0, false)
        };
        let b = Offer::new("b", "Beta", 20.0, false);
        let blocks = generate_report(&a, &b, &OfferPriorities::default(), &lookup, &RealityConfig::default());
        let card = blocks
            .iter()
            .find_map(|b| match &b.body {
                BlockBody::ComparisonCard(c) => Some(c),
                _ => None,
            })
            .unwrap();
        let row = card
            .metrics
            .iter()
            .find(|m| m.label == "Joining Bonus (one-time)")
            .unwrap();
        assert_eq!(row.value_a, "3.0 LPA");
        assert_eq!(row.value_b, "-");
    }

    #[test]
    fn test_determinism_ignoring_ids() {
        let lookup = stub(vec![record("Alpha", "Tier 1", "Product", "Green", "High")]);
        let a = Offer::new("a", "Alpha", 30.0, true);
        let b = Offer::new("b", "Beta", 35.0, false);
        let p = OfferPriorities::default();
        let config = RealityConfig::default();

        let first = generate_report(&a, &b, &p, &lookup, &config);
        let second = generate_report(&a, &b, &p, &lookup, &config);

        let bodies = |blocks: &[ContentBlock]| blocks.iter().map(|b| b.body.clone()).collect::<Vec<_>>();
        assert_eq!(bodies(&first), bodies(&second));
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn test_totality_over_missing_data_grid() {
        let lookup = stub(vec![
            record("Alpha", "Tier 1", "Product", "Green", "High"),
            record("Beta", "Tier 3", "Startup", "Red", "Low"),
        ]);
        let config = RealityConfig::default();

        for ctc_a in [0.0, 25.0] {
            for ctc_b in [0.0, 18.0] {
                for name_a in ["Alpha", "Unknown A"] {
                    for name_b in ["Beta", "Unknown B"] {
                        for bonus_a in [true, false] {
                            for bonus_b in [true, false] {
                                let a = Offer::new("a", name_a, ctc_a, bonus_a);
                                let b = Offer::new("b", name_b, ctc_b, bonus_b);
                                let blocks = generate_report(
                                    &a,
                                    &b,
                                    &OfferPriorities::default(),
                                    &lookup,
                                    &config,
                                );
                                assert!(!blocks.is_empty());
                                // every block survives the wire form
                                let json = serde_json::to_string(&blocks).unwrap();
                                let back: Vec<ContentBlock> = serde_json::from_str(&json).unwrap();
                                assert_eq!(back.len(), blocks.len());
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_company_emits_only_fallback_paragraph() {
        let lookup = stub(vec![record("Alpha", "Tier 1", "Startup", "Green", "High")]);
        let blocks = generate_report(
            &Offer::new("a", "Alpha", 20.0, false),
            &Offer::new("b", "Mystery Corp", 20.0, false),
            &OfferPriorities::default(),
            &lookup,
            &RealityConfig::default(),
        );

        let missing = section(&blocks, "Mystery Corp");
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].body, BlockBody::Paragraph(LIMITED_DATA.to_string()));

        let resolved = section(&blocks, "Alpha");
        // 2 whyJoin + tier-1 + startup + green + 1 con
        assert_eq!(todo_count(resolved), 6);
        let callouts: Vec<&BlockBody> = resolved
            .iter()
            .map(|b| &b.body)
            .filter(|b| matches!(b, BlockBody::Callout(_)))
            .collect();
        assert_eq!(callouts.len(), 1);
        let BlockBody::Callout(regret) = callouts[0] else { unreachable!() };
        assert!(regret.contains("Burnout"), "startup regret wins over tier-1");
        assert_eq!(
            resolved.last().unwrap().body,
            BlockBody::Todo {
                text: "⚠️ Slow hiring".to_string(),
                checked: false
            }
        );
    }

    fn unchecked(blocks: &[ContentBlock]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| match &b.body {
                BlockBody::Todo {
                    text,
                    checked: false,
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_cons_render_as_unchecked_todos() {
        let mut listed = record("Alpha", "Tier 3", "Service", "Yellow", "Low");
        listed.detailed_analysis = serde_json::from_value(json!({
            "cons": ["Night shifts", "Slow appraisals", "Bench time"]
        }))
        .unwrap();
        let mut derived = record("Beta", "Tier 3", "Service", "Yellow", "Low");
        derived.detailed_analysis = None;
        let lookup = stub(vec![listed, derived]);

        let blocks = generate_report(
            &Offer::new("a", "Alpha", 10.0, false),
            &Offer::new("b", "Beta", 10.0, false),
            &OfferPriorities::default(),
            &lookup,
            &RealityConfig::default(),
        );

        // Catalog cons win over derived cautions, capped at two
        assert_eq!(
            unchecked(section(&blocks, "Alpha")),
            vec!["⚠️ Night shifts", "⚠️ Slow appraisals"]
        );

        let cautions = unchecked(section(&blocks, "Beta"));
        assert_eq!(cautions.len(), 3);
        assert!(cautions[0].contains("legacy projects"));
        assert!(cautions[1].contains("mass-hiring"));
        assert!(cautions[2].contains("stagnate"));
    }

    #[test]
    fn test_description_fills_in_for_empty_why_join() {
        let mut bare = record("Gamma", "Tier 2", "Service", "Yellow", "Medium");
        bare.why_join.clear();
        bare.detailed_analysis = None;
        let lookup = stub(vec![bare]);

        let blocks = generate_report(
            &Offer::new("a", "Gamma", 10.0, false),
            &Offer::new("b", "Nobody", 10.0, false),
            &OfferPriorities::default(),
            &lookup,
            &RealityConfig::default(),
        );
        let gamma = section(&blocks, "Gamma");
        assert_eq!(gamma[0].body, BlockBody::Quote("Gamma description".to_string()));
        // Only the derived service-company cautions
        assert_eq!(todo_count(gamma), 2);
        assert_eq!(unchecked(gamma).len(), 2);
        assert!(matches!(&gamma[1].body, BlockBody::Callout(t) if t.contains("Legacy codebases")));
    }

    #[test]
    fn test_zero_ctc_is_flagged_not_compared() {
        let lookup = stub(vec![]);
        let blocks = generate_report(
            &Offer::new("a", "Alpha", 0.0, false),
            &Offer::new("b", "Beta", 0.0, true),
            &OfferPriorities::default(),
            &lookup,
            &RealityConfig::default(),
        );

        let v = verdict(&blocks);
        assert!(v.financial_diff.contains("Insufficient data"));
        assert!(!v.financial_diff.contains('%'));

        let flagged = blocks.iter().any(|b| {
            matches!(&b.body, BlockBody::Callout(t) if t.contains("Insufficient data") && t.contains("either offer"))
        });
        assert!(flagged, "headline section must warn about missing CTC");
    }

    #[test]
    fn test_one_missing_ctc_names_the_offer() {
        let lookup = stub(vec![]);
        let blocks = generate_report(
            &Offer::new("a", "Alpha", 0.0, false),
            &Offer::new("b", "Beta", 12.0, false),
            &OfferPriorities::default(),
            &lookup,
            &RealityConfig::default(),
        );
        let v = verdict(&blocks);
        assert!(v.financial_diff.contains("Insufficient data"));
        assert!(v.financial_diff.contains("Alpha"));
    }

    #[test]
    fn test_zero_take_home_does_not_divide() {
        let lookup = stub(vec![]);
        let a = Offer {
            base: Some(0.0),
            ..Offer::new("a", "Alpha", 10.0, false)
        };
        let blocks = generate_report(
            &a,
            &Offer::new("b", "Beta", 10.0, false),
            &OfferPriorities::default(),
            &lookup,
            &RealityConfig::default(),
        );
        let v = verdict(&blocks);
        assert!(v.financial_diff.starts_with("Incomparable"));
        assert!(!v.financial_diff.contains("inf"));
    }

    #[test]
    fn test_exact_tie_is_reported_as_tie() {
        let lookup = stub(vec![]);
        let blocks = generate_report(
            &Offer::new("a", "Alpha", 20.0, false),
            &Offer::new("b", "Beta", 20.0, false),
            &OfferPriorities::default(),
            &lookup,
            &RealityConfig::default(),
        );
        let v = verdict(&blocks);
        assert_eq!(v.winner, "Tie: Alpha and Beta");
        assert!(v.network_sentiment.starts_with("Low"));
        assert!(matches!(&blocks[1].body, BlockBody::Callout(t) if t.contains("Dead heat")));
    }

    #[test]
    fn test_wlb_sentence_is_total() {
        fn rank(wlb: Option<&str>) -> u8 {
            match wlb {
                Some("Green") => 3,
                Some("Yellow") => 2,
                Some("Red") => 1,
                _ => 0,
            }
        }

        // None means the company is not in the directory
        let wlbs = [Some("Green"), Some("Yellow"), Some("Red"), None];
        for wa in wlbs {
            for wb in wlbs {
                let records = [("Alpha", wa), ("Beta", wb)]
                    .into_iter()
                    .filter_map(|(name, wlb)| {
                        wlb.map(|w| record(name, "Tier 2", "Product", w, "Medium"))
                    })
                    .collect();
                let lookup = stub(records);
                let v = verdict(&generate_report(
                    &Offer::new("a", "Alpha", 20.0, false),
                    &Offer::new("b", "Beta", 10.0, false),
                    &OfferPriorities::default(),
                    &lookup,
                    &RealityConfig::default(),
                ));

                let expected = if rank(wa) > rank(wb) {
                    match wa {
                        Some("Green") => "Alpha (Green work-life balance)",
                        _ => "Alpha (likely better for stress-free work)",
                    }
                } else if rank(wb) > rank(wa) {
                    match wb {
                        Some("Green") => "Beta (Green work-life balance)",
                        _ => "Beta (likely better for stress-free work)",
                    }
                } else {
                    // Equal ranks go to the adaptive pick, which is Alpha on CTC
                    "Alpha (likely better for stress-free work)"
                };
                assert_eq!(v.wlb_winner, expected, "wlb {wa:?} vs {wb:?}");
            }
        }
    }

    #[test]
    fn test_small_pay_gap_points_at_role_and_culture() {
        let lookup = stub(vec![]);
        let blocks = generate_report(
            &Offer::new("a", "Alpha", 20.0, false),
            &Offer::new("b", "Beta", 18.0, false),
            &OfferPriorities::default(),
            &lookup,
            &RealityConfig::default(),
        );
        let v = verdict(&blocks);
        // 0.8 vs 0.72 lakhs a month
        assert!(v.financial_diff.starts_with("The pay gap is small (~11% in favour of Alpha)"));
        assert!(!v.financial_diff.contains("clear winner"));
    }

    #[test]
    fn test_learning_rationale_and_startup_advice() {
        let lookup = stub(vec![record("Beta", "Tier 3", "Startup", "Red", "High")]);
        let priorities = OfferPriorities {
            learning: 90,
            money: 90,
            ..OfferPriorities::default()
        };
        let blocks = generate_report(
            &Offer::new("a", "Alpha", 10.0, false),
            &Offer::new("b", "Beta", 10.0, false),
            &priorities,
            &lookup,
            &RealityConfig::default(),
        );
        assert!(matches!(&blocks[1].body, BlockBody::Callout(t) if t.contains("Learning & Growth")));
        assert!(matches!(&blocks.last().unwrap().body, BlockBody::Paragraph(t) if t.contains("Startups accelerate learning")));
    }

    #[test]
    fn test_blank_company_name_falls_back_to_offer_label() {
        let lookup = stub(vec![]);
        let blocks = generate_report(
            &Offer::new("a", "", 10.0, false),
            &Offer::new("b", "  ", 12.0, false),
            &OfferPriorities::default(),
            &lookup,
            &RealityConfig::default(),
        );
        assert_eq!(
            blocks[0].body,
            BlockBody::Heading1("Reality Check: Offer A vs Offer B".to_string())
        );
    }

    #[test]
    fn test_overridden_heuristics_flow_into_report() {
        let lookup = stub(vec![]);
        let mut config = RealityConfig::default();
        config.financial.base_ratio = 0.5;
        let blocks = generate_report(
            &Offer::new("a", "Alpha", 20.0, false),
            &Offer::new("b", "Beta", 10.0, false),
            &OfferPriorities::default(),
            &lookup,
            &config,
        );
        let card = blocks
            .iter()
            .find_map(|b| match &b.body {
                BlockBody::ComparisonCard(c) => Some(c),
                _ => None,
            })
            .unwrap();
        assert_eq!(card.metrics[1].value_a, "10.0 LPA");
    }
}
