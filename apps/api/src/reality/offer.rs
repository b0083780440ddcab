use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    Internship,
    Fte,
}

/// One side of a comparison, as entered by the user.
///
/// Money fields are in LPA (lakhs per annum). `ctc == 0.0` means "not provided yet".
/// Only `company`, `ctc`, `has_bonus` and the optional overrides feed the engine;
/// the remaining fields are carried for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    pub id: String,
    pub company: String,
    pub role: String,
    pub ctc: f64,
    pub location: String,
    #[serde(rename = "type")]
    pub employment_type: Option<EmploymentType>,
    pub work_mode: Option<WorkMode>,
    pub experience_level: String,
    pub has_bonus: bool,
    pub base: Option<f64>,
    pub stocks: Option<f64>,
    pub joining_bonus: Option<f64>,
}

impl Offer {
    #[cfg(test)]
    pub fn new(id: &str, company: &str, ctc: f64, has_bonus: bool) -> Self {
        Self {
            id: id.to_string(),
            company: company.to_string(),
            ctc,
            has_bonus,
            ..Default::default()
        }
    }

    pub fn has_ctc(&self) -> bool {
        self.ctc > 0.0
    }
}

fn default_weight() -> u8 {
    50
}

/// Independent 0–100 sliders. They are not normalised against each other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfferPriorities {
    #[serde(default = "default_weight")]
    pub money: u8,
    #[serde(default = "default_weight")]
    pub learning: u8,
    #[serde(default = "default_weight")]
    pub wlb: u8,
    #[serde(default = "default_weight")]
    pub brand: u8,
    #[serde(default = "default_weight")]
    pub stability: u8,
}

impl Default for OfferPriorities {
    fn default() -> Self {
        Self {
            money: 50,
            learning: 50,
            wlb: 50,
            brand: 50,
            stability: 50,
        }
    }
}

/// Slider value as a 0.0–1.0 multiplier. Values above 100 saturate.
pub fn weight(slider: u8) -> f64 {
    f64::from(slider.min(100)) / 100.0
}
