//! # Configuração do Motor
//!
//! A única opção configurável é a **estratégia de defuzzificação**,
//! global ou por variável de saída:
//!
//! ```json
//! { "strategy": "centroid", "overrides": { "Power": "mom" } }
//! ```
//!
//! A estratégia global também pode vir da variável de ambiente
//! `FUZZY_DEFUZZ` (ex: `FUZZY_DEFUZZ=mom cargo run`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyError, Result};
use crate::inference::DefuzzStrategy;

/// Variável de ambiente com a estratégia global.
pub const STRATEGY_ENV: &str = "FUZZY_DEFUZZ";

/// Configuração do [`InferenceEngine`](crate::inference::InferenceEngine).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Estratégia global (padrão: `Centroid`).
    #[serde(default)]
    pub strategy: DefuzzStrategy,
    /// Estratégia por variável de saída; prevalece sobre a global.
    #[serde(default)]
    pub overrides: HashMap<String, DefuzzStrategy>,
}

impl EngineConfig {
    /// Lê a configuração de um documento JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| FuzzyError::InvalidConfig(e.to_string()))
    }

    /// Configuração padrão com a estratégia global de `FUZZY_DEFUZZ`, se definida.
    pub fn from_env() -> Result<Self> {
        match std::env::var(STRATEGY_ENV) {
            Ok(value) => Ok(Self {
                strategy: value.parse()?,
                ..Self::default()
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Estratégia efetiva para uma variável de saída.
    pub fn strategy_for(&self, output: &str) -> DefuzzStrategy {
        self.overrides.get(output).copied().unwrap_or(self.strategy)
    }
}
