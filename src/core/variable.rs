//! # LinguisticVariable — Variável Linguística
//!
//! Uma [`LinguisticVariable`] é um contêiner nomeado de formas fuzzy
//! ([`Term`]s). A mesma estrutura serve como domínio de **entrada**
//! (fuzzificação) e de **saída** (defuzzificação).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use fuzzy_engine::core::LinguisticVariable;
//!
//! let mut water = LinguisticVariable::new("Water");
//! let cold = water.add_trapezoid("Cold", 0.0, 0.0, 20.0, 40.0).unwrap();
//! let warm = water.add_triangle("Warm", 30.0, 50.0, 70.0).unwrap();
//!
//! // Expressão "Water is Cold OR Water is Warm"
//! let expr = water.is(&cold).or(water.is(&warm));
//! ```
//!
//! ## Invariantes
//!
//! - Nomes de formas são únicos dentro da variável
//! - Formas são imutáveis depois de declaradas
//! - A ordem de declaração é preservada (fuzzificação determinística)

use serde::{Deserialize, Serialize};

use super::membership::MembershipFunction;
use crate::error::{FuzzyError, Result};
use crate::inference::RuleExpression;

/// Forma nomeada declarada em uma variável.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Nome da forma (ex: "Cold").
    pub name: String,
    /// Função de pertinência da forma.
    pub function: MembershipFunction,
}

/// Referência leve a uma forma de uma variável.
///
/// Devolvida por [`add_trapezoid`](LinguisticVariable::add_trapezoid) e
/// [`add_triangle`](LinguisticVariable::add_triangle); usada para montar
/// expressões e consequentes de regras.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeHandle {
    /// Variável dona da forma.
    pub variable: String,
    /// Nome da forma.
    pub shape: String,
}

/// Variável linguística: nome + coleção ordenada de formas nomeadas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinguisticVariable {
    name: String,
    terms: Vec<Term>,
}

impl LinguisticVariable {
    /// Cria uma variável sem formas.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
        }
    }

    /// Nome da variável.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formas declaradas, em ordem de declaração.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Busca a função de pertinência de uma forma pelo nome.
    pub fn term(&self, name: &str) -> Option<&MembershipFunction> {
        self.terms
            .iter()
            .find(|t| t.name == name)
            .map(|t| &t.function)
    }

    /// Declara um trapézio `(a, b, c, d)`.
    ///
    /// # Erros
    ///
    /// - [`FuzzyError::InvalidShape`] — parâmetros não finitos ou decrescentes
    /// - [`FuzzyError::DuplicateShape`] — nome já declarado nesta variável
    pub fn add_trapezoid(
        &mut self,
        name: impl Into<String>,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    ) -> Result<ShapeHandle> {
        self.add_term(name.into(), MembershipFunction::Trapezoid { a, b, c, d })
    }

    /// Declara um triângulo `(a, b, c)`. Mesmos erros de
    /// [`add_trapezoid`](LinguisticVariable::add_trapezoid).
    pub fn add_triangle(
        &mut self,
        name: impl Into<String>,
        a: f64,
        b: f64,
        c: f64,
    ) -> Result<ShapeHandle> {
        self.add_term(name.into(), MembershipFunction::Triangle { a, b, c })
    }

    /// Declara uma forma já construída.
    pub fn add_term(&mut self, name: String, function: MembershipFunction) -> Result<ShapeHandle> {
        function.check().map_err(|reason| FuzzyError::InvalidShape {
            shape: name.clone(),
            reason: reason.to_string(),
        })?;
        if self.term(&name).is_some() {
            return Err(FuzzyError::DuplicateShape {
                variable: self.name.clone(),
                shape: name,
            });
        }
        tracing::debug!(variable = %self.name, shape = %name, ?function, "forma declarada");
        let handle = ShapeHandle {
            variable: self.name.clone(),
            shape: name.clone(),
        };
        self.terms.push(Term { name, function });
        Ok(handle)
    }

    /// Átomo "variável é forma".
    ///
    /// A existência da forma nesta variável é validada quando a regra
    /// é adicionada ao motor, não aqui. Um handle declarado em outra
    /// variável é rejeitado nessa validação com `UnknownShape`.
    pub fn is(&self, shape: &ShapeHandle) -> RuleExpression {
        RuleExpression::is_handle(self.name.clone(), shape)
    }

    /// Átomo negado "variável não é forma" — açúcar para `is(shape).not()`.
    pub fn is_not(&self, shape: &ShapeHandle) -> RuleExpression {
        self.is(shape).not()
    }

    /// Grau de pertinência de `x` em cada forma, em ordem de declaração.
    pub fn fuzzify(&self, x: f64) -> Vec<(&str, f64)> {
        self.terms
            .iter()
            .map(|t| (t.name.as_str(), t.function.fuzzify(x)))
            .collect()
    }
}
