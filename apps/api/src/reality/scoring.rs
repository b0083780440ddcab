//! Adaptive headline score: weights an offer's CTC and its company's classification
//! by the user's priority sliders.

use crate::companies::{CompanyRecord, CompanyType, Learning, Tier, Wlb};
use crate::reality::config::ScoringWeights;
use crate::reality::offer::{weight, Offer, OfferPriorities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// Company signals the engine branches on. All `None` when the company is unresolved,
/// which lets every rule table handle missing data without special cases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub tier: Option<Tier>,
    pub company_type: Option<CompanyType>,
    pub wlb: Option<Wlb>,
    pub learning: Option<Learning>,
}

impl Classification {
    pub fn of(company: Option<&CompanyRecord>) -> Self {
        match company {
            Some(c) => Self {
                tier: Some(c.tier),
                company_type: Some(c.company_type),
                wlb: Some(c.culture.wlb),
                learning: Some(c.culture.learning),
            },
            None => Self::default(),
        }
    }

    pub fn is_tier1(&self) -> bool {
        self.tier == Some(Tier::Tier1)
    }

    pub fn is_startup(&self) -> bool {
        self.company_type == Some(CompanyType::Startup)
    }

    pub fn is_green(&self) -> bool {
        self.wlb == Some(Wlb::Green)
    }

    pub fn is_high_learning(&self) -> bool {
        self.learning == Some(Learning::High)
    }

    /// Green > Yellow > Red > unknown.
    pub fn wlb_rank(&self) -> u8 {
        match self.wlb {
            Some(Wlb::Green) => 3,
            Some(Wlb::Yellow) => 2,
            Some(Wlb::Red) => 1,
            None => 0,
        }
    }
}

pub fn adaptive_score(
    offer: &Offer,
    class: &Classification,
    priorities: &OfferPriorities,
    weights: &ScoringWeights,
) -> f64 {
    let award = |applies: bool, points: f64| if applies { points } else { 0.0 };

    offer.ctc * weight(priorities.money)
        + award(class.is_tier1(), weights.tier1_brand_points) * weight(priorities.brand)
        + award(class.is_high_learning(), weights.high_learning_points)
            * weight(priorities.learning)
        + award(class.is_green(), weights.green_wlb_points) * weight(priorities.wlb)
}

/// Result of the adaptive comparison.
///
/// Exact ties are reported as `Tie` rather than silently favouring either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Standing {
    Winner { side: Side, gap: f64 },
    Tie,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scores {
    pub a: f64,
    pub b: f64,
}

impl Scores {
    pub fn standing(&self) -> Standing {
        if self.a > self.b {
            Standing::Winner {
                side: Side::A,
                gap: self.a - self.b,
            }
        } else if self.b > self.a {
            Standing::Winner {
                side: Side::B,
                gap: self.b - self.a,
            }
        } else {
            Standing::Tie
        }
    }

    pub fn gap(&self) -> f64 {
        (self.a - self.b).abs()
    }

    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }
}
