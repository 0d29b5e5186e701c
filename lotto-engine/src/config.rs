use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceConfig {
    pub min_odd: usize,
    pub max_odd: usize,
    pub min_low: usize,
    pub max_low: usize,
    /// Un numéro est "bas" s'il est <= ce seuil.
    pub low_threshold: u8,
    pub min_sum: u32,
    pub max_sum: u32,
}

impl BalanceConfig {
    pub fn odd_range(&self) -> RangeInclusive<usize> {
        self.min_odd..=self.max_odd
    }

    pub fn low_range(&self) -> RangeInclusive<usize> {
        self.min_low..=self.max_low
    }

    pub fn sum_range(&self) -> RangeInclusive<u32> {
        self.min_sum..=self.max_sum
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            min_odd: 2,
            max_odd: 4,
            min_low: 2,
            max_low: 4,
            low_threshold: 22,
            min_sum: 100,
            max_sum: 170,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub frequency_weight: f64,
    pub hot_weight: f64,
    pub markov_weight: f64,
    /// Nombre de tirages récents pris en compte pour les numéros chauds.
    pub hot_window: usize,
    /// Taille du vivier de la recherche exhaustive (meilleurs numéros du classement).
    pub candidate_pool: usize,
    pub result_count: usize,
    pub max_attempts: usize,
    pub liked_multiplier: u32,
    pub balance: BalanceConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frequency_weight: 35.0,
            hot_weight: 35.0,
            markov_weight: 30.0,
            hot_window: 10,
            candidate_pool: 20,
            result_count: 5,
            max_attempts: 5000,
            liked_multiplier: 3,
            balance: BalanceConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire la configuration {:?}", path))?;
    let config: EngineConfig = serde_json::from_str(&json)
        .with_context(|| format!("Configuration invalide {:?}", path))?;
    log::debug!("Configuration chargée depuis {:?}: {:?}", path, config);
    Ok(config)
}
