use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::reality::RealityConfig;

/// Application configuration loaded from environment variables.
/// Everything has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Documents go to Redis when set, otherwise they live in memory.
    pub redis_url: Option<String>,
    /// External company catalog; the embedded one is used when unset.
    pub company_data_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
    pub reality: RealityConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: optional_env("REDIS_URL"),
            company_data_path: optional_env("COMPANY_DATA_PATH").map(PathBuf::from),
            port: parse_env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            reality: reality_from_env()?,
        })
    }
}

/// Engine heuristics, each overridable by a `REALITY_*` variable.
fn reality_from_env() -> Result<RealityConfig> {
    reality_from(&optional_env)
}

fn reality_from(env: &dyn Fn(&str) -> Option<String>) -> Result<RealityConfig> {
    let mut reality = RealityConfig::default();

    let fin = &mut reality.financial;
    fin.base_ratio = lookup_or(env, "REALITY_BASE_RATIO", fin.base_ratio)?;
    fin.bonus_ratio = lookup_or(env, "REALITY_BONUS_RATIO", fin.bonus_ratio)?;
    fin.equity_ratio_with_bonus =
        lookup_or(env, "REALITY_EQUITY_RATIO_BONUS", fin.equity_ratio_with_bonus)?;
    fin.equity_ratio_without_bonus =
        lookup_or(env, "REALITY_EQUITY_RATIO_NO_BONUS", fin.equity_ratio_without_bonus)?;
    fin.tax_threshold_lpa = lookup_or(env, "REALITY_TAX_THRESHOLD_LPA", fin.tax_threshold_lpa)?;
    fin.low_tax_rate = lookup_or(env, "REALITY_TAX_RATE_LOW", fin.low_tax_rate)?;
    fin.high_tax_rate = lookup_or(env, "REALITY_TAX_RATE_HIGH", fin.high_tax_rate)?;
    fin.default_in_hand_percent =
        lookup_or(env, "REALITY_DEFAULT_IN_HAND_PERCENT", fin.default_in_hand_percent)?;

    let scoring = &mut reality.scoring;
    scoring.tier1_brand_points =
        lookup_or(env, "REALITY_TIER1_BRAND_POINTS", scoring.tier1_brand_points)?;
    scoring.high_learning_points =
        lookup_or(env, "REALITY_HIGH_LEARNING_POINTS", scoring.high_learning_points)?;
    scoring.green_wlb_points =
        lookup_or(env, "REALITY_GREEN_WLB_POINTS", scoring.green_wlb_points)?;
    scoring.dominance_threshold =
        lookup_or(env, "REALITY_DOMINANCE_THRESHOLD", scoring.dominance_threshold)?;

    Ok(reality)
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup_or(&optional_env, key, default)
}

fn lookup_or<T>(env: &dyn Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'"))
}
