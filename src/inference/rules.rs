//! # Regras Fuzzy SE/ENTÃO
//!
//! Uma [`Rule`] junta um **antecedente** ([`RuleExpression`]) a um ou mais
//! **consequentes** `(variável de saída, forma de saída)`.
//!
//! ## Construção
//!
//! ```rust
//! use fuzzy_engine::core::LinguisticVariable;
//! use fuzzy_engine::inference::Rule;
//!
//! let mut water = LinguisticVariable::new("Water");
//! let cold = water.add_trapezoid("Cold", 0.0, 0.0, 20.0, 40.0).unwrap();
//! let warm = water.add_triangle("Warm", 30.0, 50.0, 70.0).unwrap();
//! let mut power = LinguisticVariable::new("Power");
//! let high = power.add_triangle("High", 25.0, 50.0, 75.0).unwrap();
//!
//! // SE Water é Cold OU Water é Warm ENTÃO Power é High
//! let rule = Rule::when(water.is(&cold).or(water.is(&warm))).then(&high);
//! assert_eq!(rule.consequents().len(), 1);
//! ```
//!
//! O builder garante pelo tipo que toda regra tem pelo menos um
//! consequente: [`Rule::when`] devolve um [`RuleBuilder`], e só
//! [`RuleBuilder::then`] produz uma [`Rule`].

use super::expression::RuleExpression;
use crate::core::ShapeHandle;

/// Consequente de uma regra: "variável de saída é forma".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Consequent {
    pub variable: String,
    pub shape: String,
}

impl From<&ShapeHandle> for Consequent {
    fn from(handle: &ShapeHandle) -> Self {
        Self {
            variable: handle.variable.clone(),
            shape: handle.shape.clone(),
        }
    }
}

/// Regra imutável: antecedente + consequentes (≥ 1).
#[derive(Clone, Debug, PartialEq)]
pub struct Rule {
    antecedent: RuleExpression,
    consequents: Vec<Consequent>,
}

/// Regra em construção, ainda sem consequente.
#[derive(Clone, Debug)]
pub struct RuleBuilder {
    antecedent: RuleExpression,
}

impl Rule {
    /// Inicia uma regra com o antecedente dado ("SE ...").
    pub fn when(antecedent: RuleExpression) -> RuleBuilder {
        RuleBuilder { antecedent }
    }

    /// Acrescenta mais um consequente ("... E saída é forma").
    pub fn and_then(mut self, shape: &ShapeHandle) -> Rule {
        self.consequents.push(shape.into());
        self
    }

    pub fn antecedent(&self) -> &RuleExpression {
        &self.antecedent
    }

    pub fn consequents(&self) -> &[Consequent] {
        &self.consequents
    }
}

impl RuleBuilder {
    /// Fecha a regra com o primeiro consequente ("ENTÃO ...").
    pub fn then(self, shape: &ShapeHandle) -> Rule {
        Rule {
            antecedent: self.antecedent,
            consequents: vec![shape.into()],
        }
    }
}
