//! # Defuzzificação — Do Conjunto Agregado ao Número Nítido
//!
//! Depois que as regras disparam, cada variável de saída tem um
//! [`AggregatedSet`]: a lista de formas de saída que receberam força de
//! disparo. A defuzzificação reduz esse conjunto a um único número.
//!
//! ## Estratégias ([`DefuzzStrategy`])
//!
//! | Estratégia | Ponto de cada forma | Combinação |
//! |------------|---------------------|------------|
//! | `Centroid` | centroide em forma fechada | média ponderada pela força |
//! | `MiddleOfMaximum` | meio do platô | média ponderada pela força |
//!
//! ```text
//! saída = Σ (forçaᵢ × pontoᵢ) / Σ forçaᵢ
//! ```
//!
//! Nenhuma integração numérica é feita: cada forma contribui com seu
//! ponto analítico. Se `Σ forçaᵢ = 0`, a variável não tem regra
//! aplicável e o resultado é [`FuzzyError::NoApplicableRule`].

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::core::{Degree, MembershipFunction};
use crate::error::{FuzzyError, Result};

/// Estratégia de defuzzificação. Padrão: `Centroid`.
///
/// Serializa em snake_case; na leitura aceita qualquer grafia de
/// [`FromStr`] (`Centroid`, `MiddleOfMaximum`, `cog`, `mom`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefuzzStrategy {
    /// Centro de gravidade.
    #[default]
    Centroid,
    /// Meio do máximo.
    MiddleOfMaximum,
}

impl<'de> Deserialize<'de> for DefuzzStrategy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

impl DefuzzStrategy {
    /// Ponto representativo de uma forma para esta estratégia.
    pub fn point(self, function: &MembershipFunction) -> f64 {
        match self {
            DefuzzStrategy::Centroid => function.centroid(),
            DefuzzStrategy::MiddleOfMaximum => function.middle_of_maximum(),
        }
    }
}

impl FromStr for DefuzzStrategy {
    type Err = FuzzyError;

    /// Aceita `centroid`/`cog` e `middle_of_maximum`/`middleofmaximum`/`mom`,
    /// sem distinção de caixa.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "centroid" | "cog" => Ok(DefuzzStrategy::Centroid),
            "middle_of_maximum" | "middleofmaximum" | "mom" => Ok(DefuzzStrategy::MiddleOfMaximum),
            other => Err(FuzzyError::InvalidConfig(format!(
                "estratégia de defuzzificação desconhecida: '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for DefuzzStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefuzzStrategy::Centroid => write!(f, "centroid"),
            DefuzzStrategy::MiddleOfMaximum => write!(f, "middle_of_maximum"),
        }
    }
}

/// Contribuição de uma forma de saída ao conjunto agregado.
#[derive(Clone, Debug, PartialEq)]
pub struct Contribution {
    pub shape: String,
    pub function: MembershipFunction,
    pub strength: Degree,
}

/// Conjunto fuzzy de saída de uma variável, após o disparo das regras.
#[derive(Clone, Debug, PartialEq)]
pub struct AggregatedSet {
    variable: String,
    contributions: Vec<Contribution>,
}

impl AggregatedSet {
    /// Conjunto vazio para a variável de saída.
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            contributions: Vec::new(),
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn contributions(&self) -> &[Contribution] {
        &self.contributions
    }

    /// Registra a força de disparo de uma forma de saída.
    ///
    /// Forças nulas são ignoradas. Se a forma já recebeu contribuição de
    /// outra regra, fica a maior força (composição max-min sobre a mesma forma).
    pub fn record(&mut self, shape: &str, function: MembershipFunction, strength: Degree) {
        if !strength.is_positive() {
            return;
        }
        match self.contributions.iter_mut().find(|c| c.shape == shape) {
            Some(existing) => existing.strength = existing.strength.or(strength),
            None => self.contributions.push(Contribution {
                shape: shape.to_string(),
                function,
                strength,
            }),
        }
    }

    /// Soma das forças de disparo registradas.
    pub fn total_strength(&self) -> f64 {
        self.contributions.iter().map(|c| c.strength.value()).sum()
    }

    /// Pertinência agregada de um candidato `y` (composição max-min):
    /// `max over (forma, s) de min(s, forma.fuzzify(y))`.
    pub fn membership(&self, y: f64) -> Degree {
        self.contributions
            .iter()
            .map(|c| c.strength.and(Degree::new(c.function.fuzzify(y))))
            .fold(Degree::ZERO, Degree::or)
    }

    /// Reduz o conjunto a um número nítido.
    ///
    /// # Erros
    ///
    /// [`FuzzyError::NoApplicableRule`] se nenhuma forma recebeu força positiva.
    pub fn defuzzify(&self, strategy: DefuzzStrategy) -> Result<f64> {
        let total = self.total_strength();
        if total <= 0.0 {
            return Err(FuzzyError::NoApplicableRule(self.variable.clone()));
        }
        let weighted: f64 = self
            .contributions
            .iter()
            .map(|c| c.strength.value() * strategy.point(&c.function))
            .sum();
        Ok(weighted / total)
    }
}
