//! Priority-ordered text selection.
//!
//! Every place the report picks one of several fixed texts is a `RuleSet`: an ordered
//! list of `(predicate, outcome)` pairs evaluated top to bottom, first match wins,
//! with an explicit fallback. Non-exclusive lists (positive signals) use `all_matches`.

use crate::companies::{CompanyType, Learning, Tier, Wlb};
use crate::reality::offer::OfferPriorities;
use crate::reality::scoring::Classification;

pub struct Rule<C, T> {
    pub name: &'static str,
    pub applies: fn(&C) -> bool,
    pub outcome: T,
}

pub struct RuleSet<C: 'static, T: 'static> {
    pub rules: &'static [Rule<C, T>],
    pub fallback: T,
}

impl<C: 'static, T: 'static> RuleSet<C, T> {
    pub fn select(&self, ctx: &C) -> &T {
        first_match(self.rules, ctx)
            .map(|r| &r.outcome)
            .unwrap_or(&self.fallback)
    }

    /// Name of the rule that fired, `"fallback"` when none did.
    pub fn matched(&self, ctx: &C) -> &'static str {
        first_match(self.rules, ctx)
            .map(|r| r.name)
            .unwrap_or("fallback")
    }

    /// Rule names in evaluation order.
    #[cfg(test)]
    pub fn order(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name).collect()
    }
}

pub fn first_match<'r, C, T>(rules: &'r [Rule<C, T>], ctx: &C) -> Option<&'r Rule<C, T>> {
    rules.iter().find(|r| (r.applies)(ctx))
}

pub fn all_matches<'r, C, T>(rules: &'r [Rule<C, T>], ctx: &C) -> Vec<&'r T> {
    rules
        .iter()
        .filter(|r| (r.applies)(ctx))
        .map(|r| &r.outcome)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Headline rationale (phase 2)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct RationaleContext {
    pub priorities: OfferPriorities,
    /// Slider value that must be strictly exceeded to count as dominant.
    pub threshold: u8,
}

pub static HEADLINE_RATIONALE: RuleSet<RationaleContext, &str> = RuleSet {
    rules: &[
        Rule {
            name: "learning",
            applies: |c| c.priorities.learning > c.threshold,
            outcome: "You weighted **Learning & Growth** heavily, so the steeper learning curve counts for more than the paycheck.",
        },
        Rule {
            name: "money",
            applies: |c| c.priorities.money > c.threshold,
            outcome: "You weighted **Cash Flow** heavily, so monthly in-hand pay drives this pick.",
        },
    ],
    fallback: "With no single dominant priority, **Work-Life Balance** and culture tip the scales between otherwise comparable offers.",
};

// ────────────────────────────────────────────────────────────────────────────
// Trajectory (phase 4)
// ────────────────────────────────────────────────────────────────────────────

/// Qualitative 3-year outlook derived from company classification only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trajectory {
    pub role: &'static str,
    pub resume_signal: &'static str,
    pub exit_options: &'static str,
}

pub static TRAJECTORY: RuleSet<Classification, Trajectory> = RuleSet {
    rules: &[
        Rule {
            name: "tier-1",
            applies: |c| c.is_tier1(),
            outcome: Trajectory {
                role: "Specialist/Senior IC",
                resume_signal: "Global/Very High",
                exit_options: "Any major company.",
            },
        },
        Rule {
            name: "startup",
            applies: |c| c.is_startup(),
            outcome: Trajectory {
                role: "Tech Lead/Manager",
                resume_signal: "High impact/high risk",
                exit_options: "Founder/early-stage roles.",
            },
        },
    ],
    fallback: Trajectory {
        role: "Senior Engineer",
        resume_signal: "Moderate/regional",
        exit_options: "Similar-scale enterprise.",
    },
};

// ────────────────────────────────────────────────────────────────────────────
// Community signals (phase 5)
// ────────────────────────────────────────────────────────────────────────────

/// Classification-derived green flags. Not exclusive: every match is emitted.
pub static POSITIVE_SIGNALS: &[Rule<Classification, &str>] = &[
    Rule {
        name: "tier-1",
        applies: |c| c.is_tier1(),
        outcome: "✅ Internal tooling at scale: you learn how production systems run for millions of users",
    },
    Rule {
        name: "startup",
        applies: |c| c.is_startup(),
        outcome: "✅ High ownership: you ship end-to-end features in your first year",
    },
    Rule {
        name: "green-wlb",
        applies: |c| c.is_green(),
        outcome: "✅ Low attrition: teams stay stable and sustainable hours are the norm",
    },
];

pub static COMMON_REGRET: RuleSet<Classification, &str> = RuleSet {
    rules: &[
        Rule {
            name: "startup",
            applies: |c| c.is_startup(),
            outcome: "**Common regret:** Burnout and funding uncertainty. Many joiners wish they had negotiated more cash instead of ESOPs.",
        },
        Rule {
            name: "tier-1",
            applies: |c| c.is_tier1(),
            outcome: "**Common regret:** Slow promotions and narrow scope. Being one of thousands of engineers can stall visible impact.",
        },
    ],
    fallback: "**Common regret:** Legacy codebases and a slow promotion pace. Verify the team's tech stack before signing.",
};

/// Derived cautions for companies whose catalog entry lists no cons.
/// Not exclusive: every match is emitted, each line as an unchecked todo.
pub static RED_FLAGS: &[Rule<Classification, &[&str]>] = &[
    Rule {
        name: "legacy-or-service",
        applies: |c| c.tier == Some(Tier::Tier3) || c.company_type == Some(CompanyType::Service),
        outcome: &[
            "⚠️ Risk of legacy projects or support roles",
            "⚠️ Verify the role is distinct from mass-hiring profiles",
        ],
    },
    Rule {
        name: "startup-red-wlb",
        applies: |c| c.is_startup() && c.wlb == Some(Wlb::Red),
        outcome: &["⚠️ Expect 10-12 hour workdays (hustle culture)"],
    },
    Rule {
        name: "low-learning",
        applies: |c| c.learning == Some(Learning::Low),
        outcome: &["⚠️ Growth might stagnate after 2 years"],
    },
];

/// Catalog cons shown per company.
pub const MAX_CONS: usize = 2;

pub const LIMITED_DATA: &str = "Limited data available for this company. Generally, verify team allocation and tech stack before joining.";

// ────────────────────────────────────────────────────────────────────────────
// Closing advice (phase 6)
// ────────────────────────────────────────────────────────────────────────────

pub static SENIOR_ADVICE: RuleSet<(Classification, Classification), &str> = RuleSet {
    rules: &[Rule {
        name: "startup-involved",
        applies: |(a, b)| a.is_startup() || b.is_startup(),
        outcome: "**Senior Advice:** Startups accelerate learning but risk burnout. If you have the energy, take the risk. If you want stability, choose the established company.",
    }],
    fallback: "**Senior Advice:** In big companies, your **Team** matters more than the **Brand**. Talk to a current employee about the specific team culture before you sign.",
};
