//! # RuleExpression — Árvore de Antecedentes
//!
//! Um antecedente de regra é uma árvore cujas **folhas** são átomos
//! "variável é forma" e cujos **nós internos** são `AND`, `OR` e `NOT`.
//!
//! ```text
//!            OR
//!           /  \
//!   Water is   Water is
//!     Cold       Warm
//! ```
//!
//! ## Avaliação (dobra recursiva pura)
//!
//! | Nó | Resultado |
//! |----|-----------|
//! | `Is(var, forma)` | `forma.fuzzify(entrada[var])` |
//! | `And(l, r)` | `min(l, r)` |
//! | `Or(l, r)` | `max(l, r)` |
//! | `Not(e)` | `1 − e` |
//!
//! A árvore não guarda estado: pode ser reavaliada com entradas
//! diferentes quantas vezes for preciso.

use std::collections::{BTreeMap, HashMap};

use crate::core::{Degree, LinguisticVariable, ShapeHandle};
use crate::error::{FuzzyError, Result};

/// Entradas nítidas de uma avaliação: nome da variável → valor.
pub type Inputs = HashMap<String, f64>;

/// Busca o valor de entrada de uma variável.
///
/// Tenta o nome exato primeiro e depois uma comparação sem distinção
/// de maiúsculas/minúsculas (`"water"` encontra `"Water"`). Se várias
/// chaves casarem só pela caixa, vence a menor em ordem lexicográfica.
pub(crate) fn input_value(inputs: &Inputs, variable: &str) -> Option<f64> {
    inputs.get(variable).copied().or_else(|| {
        let lower = variable.to_lowercase();
        inputs
            .iter()
            .filter(|(name, _)| name.to_lowercase() == lower)
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, value)| *value)
    })
}

/// Árvore de expressão fuzzy.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleExpression {
    /// Átomo "variável é forma".
    ///
    /// `declared_in` é a variável que declarou a forma do handle usado na
    /// construção; difere de `variable` quando o handle é de outra variável.
    Is {
        variable: String,
        shape: String,
        declared_in: String,
    },
    And(Box<RuleExpression>, Box<RuleExpression>),
    Or(Box<RuleExpression>, Box<RuleExpression>),
    Not(Box<RuleExpression>),
}

impl RuleExpression {
    /// Cria um átomo a partir dos nomes da variável e da forma.
    pub fn is(variable: impl Into<String>, shape: impl Into<String>) -> Self {
        let variable = variable.into();
        RuleExpression::Is {
            declared_in: variable.clone(),
            variable,
            shape: shape.into(),
        }
    }

    /// Átomo montado a partir de um handle, lembrando de onde ele veio.
    pub(crate) fn is_handle(variable: impl Into<String>, handle: &ShapeHandle) -> Self {
        RuleExpression::Is {
            variable: variable.into(),
            shape: handle.shape.clone(),
            declared_in: handle.variable.clone(),
        }
    }

    /// `self AND other`.
    pub fn and(self, other: RuleExpression) -> Self {
        RuleExpression::And(Box::new(self), Box::new(other))
    }

    /// `self OR other`.
    pub fn or(self, other: RuleExpression) -> Self {
        RuleExpression::Or(Box::new(self), Box::new(other))
    }

    /// `NOT self`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        RuleExpression::Not(Box::new(self))
    }

    /// Átomos `(variável, forma)` da árvore, da esquerda para a direita.
    pub fn atoms(&self) -> Vec<(&str, &str)> {
        let mut out = Vec::new();
        self.collect_atoms(&mut out);
        out
    }

    /// Primeiro átomo cujo handle pertence a outra variável, se houver.
    pub fn foreign_atom(&self) -> Option<(&str, &str)> {
        match self {
            RuleExpression::Is {
                variable,
                shape,
                declared_in,
            } => (variable != declared_in).then(|| (variable.as_str(), shape.as_str())),
            RuleExpression::And(l, r) | RuleExpression::Or(l, r) => {
                l.foreign_atom().or_else(|| r.foreign_atom())
            }
            RuleExpression::Not(e) => e.foreign_atom(),
        }
    }

    fn collect_atoms<'a>(&'a self, out: &mut Vec<(&'a str, &'a str)>) {
        match self {
            RuleExpression::Is { variable, shape, .. } => {
                out.push((variable.as_str(), shape.as_str()))
            }
            RuleExpression::And(l, r) | RuleExpression::Or(l, r) => {
                l.collect_atoms(out);
                r.collect_atoms(out);
            }
            RuleExpression::Not(e) => e.collect_atoms(out),
        }
    }

    /// Avalia a árvore contra as entradas.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::UnknownVariable`] — entrada sem valor para um átomo
    /// - [`FuzzyError::UndeclaredVariable`] / [`FuzzyError::UnknownShape`] —
    ///   só ocorrem se a árvore não passou pela validação do motor
    pub fn evaluate(
        &self,
        variables: &BTreeMap<String, LinguisticVariable>,
        inputs: &Inputs,
    ) -> Result<Degree> {
        match self {
            RuleExpression::Is { variable, shape, .. } => {
                let var = variables
                    .get(variable)
                    .ok_or_else(|| FuzzyError::UndeclaredVariable(variable.clone()))?;
                let function = var.term(shape).ok_or_else(|| FuzzyError::UnknownShape {
                    variable: variable.clone(),
                    shape: shape.clone(),
                })?;
                let x = input_value(inputs, variable)
                    .ok_or_else(|| FuzzyError::UnknownVariable(variable.clone()))?;
                Ok(Degree::new(function.fuzzify(x)))
            }
            RuleExpression::And(l, r) => {
                Ok(l.evaluate(variables, inputs)?.and(r.evaluate(variables, inputs)?))
            }
            RuleExpression::Or(l, r) => {
                Ok(l.evaluate(variables, inputs)?.or(r.evaluate(variables, inputs)?))
            }
            RuleExpression::Not(e) => Ok(e.evaluate(variables, inputs)?.not()),
        }
    }
}
