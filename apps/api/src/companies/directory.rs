//! Company Directory: resolves free-text company names from offers to catalog records.
//!
//! The catalog is loaded once at startup (embedded JSON, or a file given by
//! `COMPANY_DATA_PATH`) and never mutated, so it is shared as a plain `Arc`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::companies::models::{CompanyRecord, CompanyType, Tier};

const EMBEDDED_CATALOG: &str = include_str!("../../data/companies.json");

/// Lookup capability consumed by the reality engine.
///
/// Implementations must be side-effect-free: the engine may call `lookup` from
/// many concurrent report generations.
pub trait CompanyDirectory: Send + Sync {
    fn lookup(&self, name_or_id: &str) -> Option<CompanyRecord>;
}

/// Closures act as directories, which keeps test stubs one line long.
impl<F> CompanyDirectory for F
where
    F: Fn(&str) -> Option<CompanyRecord> + Send + Sync,
{
    fn lookup(&self, name_or_id: &str) -> Option<CompanyRecord> {
        self(name_or_id)
    }
}

/// Filters accepted by the catalog listing endpoint.
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    pub tier: Option<Tier>,
    pub company_type: Option<CompanyType>,
    /// Case-insensitive substring over name and domains.
    pub query: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StaticCompanyDirectory {
    companies: Vec<CompanyRecord>,
}

impl StaticCompanyDirectory {
    pub fn new(companies: Vec<CompanyRecord>) -> Self {
        Self { companies }
    }

    /// Loads the catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG).context("Embedded company catalog is malformed")
    }

    /// Loads a catalog from an external JSON file (array of company records).
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read company catalog at {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Company catalog at {} is malformed", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let companies: Vec<CompanyRecord> = serde_json::from_str(raw)?;
        info!("Loaded company catalog with {} entries", companies.len());
        Ok(Self::new(companies))
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn get(&self, id: &str) -> Option<&CompanyRecord> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// Case-insensitive exact match on name, or match on id.
    pub fn find(&self, name_or_id: &str) -> Option<&CompanyRecord> {
        let needle = name_or_id.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.companies
            .iter()
            .find(|c| c.name.to_lowercase() == needle || c.id == needle)
    }

    pub fn filter(&self, filter: &CompanyFilter) -> Vec<&CompanyRecord> {
        let query = filter
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.companies
            .iter()
            .filter(|c| filter.tier.map_or(true, |t| c.tier == t))
            .filter(|c| filter.company_type.map_or(true, |t| c.company_type == t))
            .filter(|c| match &query {
                Some(q) => {
                    c.name.to_lowercase().contains(q)
                        || c.domains.iter().any(|d| d.to_lowercase().contains(q))
                }
                None => true,
            })
            .collect()
    }
}

impl CompanyDirectory for StaticCompanyDirectory {
    fn lookup(&self, name_or_id: &str) -> Option<CompanyRecord> {
        self.find(name_or_id).cloned()
    }
}
