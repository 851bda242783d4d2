//! # Módulo Inference — Motor de Inferência Fuzzy
//!
//! Este módulo transforma **entradas nítidas** em **saídas nítidas**
//! passando por regras fuzzy SE/ENTÃO.
//!
//! ## Peças
//!
//! | Peça | Papel |
//! |------|-------|
//! | [`RuleExpression`] | Antecedente: árvore de átomos com AND/OR/NOT |
//! | [`Rule`] | Antecedente + consequentes |
//! | [`AggregatedSet`] | Conjunto de saída após o disparo (max-min) |
//! | [`DefuzzStrategy`] | Centroid ou MiddleOfMaximum |
//! | [`InferenceEngine`] | Dono de variáveis e regras; avalia entradas |
//!
//! ## Exemplo
//!
//! ```text
//! Water = 10  →  Cold = 1.0, Warm = 0.0, Hot = 0.0
//! Regra 1: SE Cold OU Warm ENTÃO Power é High   (força 1.0)
//! Regra 2: SE Hot ENTÃO Power é Low             (força 0.0)
//! Power = centroide(High) = 50
//! ```

/// Sub-módulo com a árvore de expressão [`RuleExpression`].
pub mod expression;

/// Sub-módulo com [`Rule`], [`RuleBuilder`] e [`Consequent`].
pub mod rules;

/// Sub-módulo com [`DefuzzStrategy`] e [`AggregatedSet`].
pub mod defuzzify;

/// Sub-módulo com o [`InferenceEngine`].
pub mod engine;

pub use defuzzify::{AggregatedSet, Contribution, DefuzzStrategy};
pub use engine::{InferenceEngine, Outputs};
pub use expression::{Inputs, RuleExpression};
pub use rules::{Consequent, Rule, RuleBuilder};
