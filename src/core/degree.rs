//! # Degree — Grau de Pertinência
//!
//! Um [`Degree`] é um número em `[0, 1]` que expressa **o quanto** um valor
//! nítido (crisp) pertence a uma forma fuzzy, ou o quanto um antecedente
//! de regra é verdadeiro.
//!
//! ## Operadores de Zadeh
//!
//! | Operador | Fórmula | Significado |
//! |----------|---------|-------------|
//! | **AND** | `min(a, b)` | Ambos precisam ser verdadeiros |
//! | **OR** | `max(a, b)` | Basta um ser verdadeiro |
//! | **NOT** | `1 − a` | Complemento |
//!
//! Estes são os operadores min/max clássicos, **não** o produto
//! probabilístico. As saídas do motor dependem exatamente deles.
//!
//! ## Exemplo
//!
//! ```rust
//! use fuzzy_engine::core::Degree;
//!
//! let frio = Degree::new(0.5);
//! let morno = Degree::new(0.25);
//! assert_eq!(frio.or(morno).value(), 0.5);
//! assert_eq!(frio.and(morno).value(), 0.25);
//! assert_eq!(morno.not().value(), 0.75);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grau de pertinência fuzzy, sempre limitado a `[0, 1]`.
///
/// O formato de exibição é `⟨grau⟩`, por exemplo: `⟨0.75⟩`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Degree(f64);

impl Degree {
    /// Grau zero — pertinência nula.
    pub const ZERO: Degree = Degree(0.0);

    /// Grau um — pertinência total.
    pub const ONE: Degree = Degree(1.0);

    /// Cria um grau a partir de um `f64`, limitando (clamp) a `[0, 1]`.
    ///
    /// `NaN` vira `0.0`: um valor indefinido não pertence a nenhuma forma.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    /// Retorna o valor numérico do grau.
    pub fn value(self) -> f64 {
        self.0
    }

    /// **AND fuzzy** (t-norma mínima).
    pub fn and(self, other: Degree) -> Degree {
        Degree(self.0.min(other.0))
    }

    /// **OR fuzzy** (t-conorma máxima).
    pub fn or(self, other: Degree) -> Degree {
        Degree(self.0.max(other.0))
    }

    /// **NOT fuzzy** — complemento `1 − a`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Degree {
        Degree(1.0 - self.0)
    }

    /// `true` se o grau for estritamente positivo (a regra "disparou").
    pub fn is_positive(self) -> bool {
        self.0 > 0.0
    }
}

impl From<Degree> for f64 {
    fn from(d: Degree) -> f64 {
        d.0
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "⟨{:.2}⟩", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Valores fora de [0, 1] e NaN são limitados
    #[test]
    fn test_clamp() {
        assert_eq!(Degree::new(1.7).value(), 1.0);
        assert_eq!(Degree::new(-0.3).value(), 0.0);
        assert_eq!(Degree::new(f64::NAN).value(), 0.0);
    }

    /// AND/OR são comutativos e associativos; NOT é involutivo
    #[test]
    fn test_zadeh_laws() {
        let samples = [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
        for &a in &samples {
            for &b in &samples {
                let (da, db) = (Degree::new(a), Degree::new(b));
                assert_eq!(da.and(db), db.and(da));
                assert_eq!(da.or(db), db.or(da));
                for &c in &samples {
                    let dc = Degree::new(c);
                    assert_eq!(da.and(db).and(dc), da.and(db.and(dc)));
                    assert_eq!(da.or(db).or(dc), da.or(db.or(dc)));
                }
            }
            let da = Degree::new(a);
            assert!((da.not().not().value() - a).abs() < 1e-12);
        }
    }

    /// Exibição no formato ⟨grau⟩
    #[test]
    fn test_display() {
        assert_eq!(Degree::new(0.5).to_string(), "⟨0.50⟩");
    }
}
