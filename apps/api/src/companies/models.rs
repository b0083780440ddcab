use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    #[serde(rename = "Tier 1")]
    Tier1,
    #[serde(rename = "Tier 2")]
    Tier2,
    #[serde(rename = "Tier 3")]
    Tier3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CompanyType {
    Product,
    Startup,
    Service,
    #[serde(rename = "PSU")]
    Psu,
}

/// Work-life balance signal, traffic-light style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Wlb {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Learning {
    High,
    Medium,
    Low,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Tier1 => "Tier 1",
            Tier::Tier2 => "Tier 2",
            Tier::Tier3 => "Tier 3",
        };
        f.write_str(label)
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompanyType::Product => "Product",
            CompanyType::Startup => "Startup",
            CompanyType::Service => "Service",
            CompanyType::Psu => "PSU",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Wlb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Wlb::Green => "Green",
            Wlb::Yellow => "Yellow",
            Wlb::Red => "Red",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Learning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Learning::High => "High",
            Learning::Medium => "Medium",
            Learning::Low => "Low",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Culture {
    pub wlb: Wlb,
    pub learning: Learning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryBand {
    #[serde(rename = "minLPA")]
    pub min_lpa: f64,
    #[serde(rename = "maxLPA")]
    pub max_lpa: f64,
    /// Share of CTC that typically reaches the bank account, in percent.
    pub in_hand_percent: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub recent_developments: Vec<String>,
    pub highlight: Option<String>,
}

/// One catalog entry. Owned by the directory; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    pub company_type: CompanyType,
    pub culture: Culture,
    pub salary: SalaryBand,
    pub description: Option<String>,
    #[serde(default)]
    pub why_join: Vec<String>,
    pub detailed_analysis: Option<DetailedAnalysis>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub role_types: Vec<String>,
    pub location: Option<String>,
    pub difficulty: Option<String>,
    #[serde(default)]
    pub intern_friendly: bool,
    pub careers_url: Option<String>,
}

impl CompanyRecord {
    /// Negative community signals, empty when the catalog has no detailed analysis.
    pub fn cons(&self) -> &[String] {
        self.detailed_analysis
            .as_ref()
            .map(|d| d.cons.as_slice())
            .unwrap_or(&[])
    }
}
