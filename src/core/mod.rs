//! # Módulo Core — Tipos Fundamentais do Domínio Fuzzy
//!
//! Este módulo agrupa os **tipos fundamentais** sobre os quais o motor
//! de inferência opera:
//!
//! - [`Degree`] — Grau de pertinência em `[0, 1]` com operadores de Zadeh
//! - [`MembershipFunction`] — Forma fuzzy (triângulo, trapézio)
//! - [`LinguisticVariable`] — Variável nomeada dona de um conjunto de formas
//! - [`Term`] — Forma nomeada dentro de uma variável
//! - [`ShapeHandle`] — Referência (variável, forma) usada para montar regras
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use fuzzy_engine::core::LinguisticVariable;
//!
//! let mut power = LinguisticVariable::new("Power");
//! let high = power.add_triangle("High", 25.0, 50.0, 75.0).unwrap();
//! assert_eq!(power.term("High").unwrap().centroid(), 50.0);
//! ```

/// Sub-módulo com [`Degree`] — grau de pertinência.
pub mod degree;

/// Sub-módulo com [`MembershipFunction`] — formas e suas operações.
pub mod membership;

/// Sub-módulo com [`LinguisticVariable`], [`Term`] e [`ShapeHandle`].
pub mod variable;

pub use degree::Degree;
pub use membership::MembershipFunction;
pub use variable::{LinguisticVariable, ShapeHandle, Term};
