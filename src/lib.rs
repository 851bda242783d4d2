//! # Fuzzy Engine — Motor de Inferência Fuzzy
//!
//! Biblioteca in-process que recebe **variáveis linguísticas** com suas
//! formas fuzzy, um conjunto de **regras SE/ENTÃO** e valores nítidos de
//! entrada, e calcula valores nítidos de saída.
//!
//! ## Camadas
//!
//! ```text
//! core       → Degree, MembershipFunction, LinguisticVariable
//! inference  → RuleExpression, Rule, AggregatedSet, InferenceEngine
//! config     → EngineConfig (estratégia de defuzzificação)
//! error      → FuzzyError
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use fuzzy_engine::core::LinguisticVariable;
//! use fuzzy_engine::inference::{InferenceEngine, Rule};
//!
//! # fn main() -> fuzzy_engine::error::Result<()> {
//! let mut water = LinguisticVariable::new("Water");
//! let cold = water.add_trapezoid("Cold", 0.0, 0.0, 20.0, 40.0)?;
//! let warm = water.add_triangle("Warm", 30.0, 50.0, 70.0)?;
//! let hot = water.add_trapezoid("Hot", 50.0, 80.0, 100.0, 100.0)?;
//!
//! let mut power = LinguisticVariable::new("Power");
//! let low = power.add_triangle("Low", 0.0, 25.0, 50.0)?;
//! let high = power.add_triangle("High", 25.0, 50.0, 75.0)?;
//!
//! let rules = [
//!     Rule::when(water.is(&cold).or(water.is(&warm))).then(&high),
//!     Rule::when(water.is(&hot)).then(&low),
//! ];
//!
//! let mut engine = InferenceEngine::new();
//! engine.add_variables([water, power])?;
//! engine.add_rules(rules)?;
//!
//! let out = engine.defuzzify(&HashMap::from([("water".to_string(), 10.0)]))?;
//! assert_eq!(out["Power"], Ok(50.0));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod inference;

pub use config::EngineConfig;
pub use error::{FuzzyError, Result};
