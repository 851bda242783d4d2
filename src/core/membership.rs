//! # MembershipFunction — Formas Fuzzy
//!
//! Uma [`MembershipFunction`] é o avaliador puro de uma forma: recebe um
//! valor nítido `x` e devolve o grau de pertinência em `[0, 1]`.
//!
//! ## Formas Suportadas
//!
//! ```text
//!  Trapézio (a, b, c, d)            Triângulo (a, b, c)
//!
//!  1 ┤    ┌───────┐                  1 ┤      ╱╲
//!    │   ╱         ╲                   │     ╱  ╲
//!  0 ┼──┘           └──              0 ┼────╱    ╲────
//!       a  b       c  d                    a   b   c
//! ```
//!
//! O triângulo é um trapézio com platô degenerado (`b = c`): as três
//! operações são calculadas sobre os quatro parâmetros equivalentes.
//!
//! ## Operações
//!
//! - [`fuzzify`](MembershipFunction::fuzzify) — grau de pertinência de `x`
//! - [`centroid`](MembershipFunction::centroid) — centro de gravidade em forma fechada
//! - [`middle_of_maximum`](MembershipFunction::middle_of_maximum) — meio do platô
//!
//! Adicionar uma forma significa adicionar uma variante e suas três funções.

use serde::{Deserialize, Serialize};

/// Forma fuzzy imutável. Parâmetros sempre não-decrescentes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MembershipFunction {
    /// Triângulo: sobe de `a` até o pico `b`, desce até `c`.
    Triangle { a: f64, b: f64, c: f64 },
    /// Trapézio: sobe de `a` até `b`, platô em `[b, c]`, desce até `d`.
    Trapezoid { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    /// Parâmetros equivalentes de trapézio `(a, b, c, d)`.
    pub fn params(&self) -> (f64, f64, f64, f64) {
        match *self {
            MembershipFunction::Triangle { a, b, c } => (a, b, b, c),
            MembershipFunction::Trapezoid { a, b, c, d } => (a, b, c, d),
        }
    }

    /// Valida os parâmetros: todos finitos e em ordem não-decrescente.
    ///
    /// Retorna o motivo da rejeição, em texto, quando inválidos.
    pub fn check(&self) -> std::result::Result<(), &'static str> {
        let (a, b, c, d) = self.params();
        if ![a, b, c, d].iter().all(|p| p.is_finite()) {
            return Err("parâmetros precisam ser finitos");
        }
        if !(a <= b && b <= c && c <= d) {
            return Err("parâmetros precisam ser não-decrescentes");
        }
        Ok(())
    }

    /// Calcula o grau de pertinência de um valor nítido.
    ///
    /// Regra de fronteira (resolve empates sem contar um ponto duas vezes):
    ///
    /// | Faixa | Grau |
    /// |-------|------|
    /// | `a ≤ x < b` | `(x − a) / (b − a)` |
    /// | `b ≤ x ≤ c` | `1` |
    /// | `c < x ≤ d` | `(d − x) / (d − c)` |
    /// | resto | `0` |
    ///
    /// As rampas nunca dividem por zero: com `a = b` (ou `c = d`) a faixa
    /// correspondente é vazia.
    pub fn fuzzify(&self, x: f64) -> f64 {
        let (a, b, c, d) = self.params();
        if a <= x && x < b {
            (x - a) / (b - a)
        } else if b <= x && x <= c {
            1.0
        } else if c < x && x <= d {
            (d - x) / (d - c)
        } else {
            0.0
        }
    }

    /// **Centroide** (centro de gravidade) em forma fechada, O(1).
    ///
    /// Decompõe a área do trapézio:
    ///
    /// ```text
    /// meio do topo  = b + (c − b) / 2
    /// meio da base  = a + (d − a) / 2
    /// y = (2·topo + base) / (topo + base) / 3
    /// reta pelos dois meios: m = meio_topo − meio_base, q = 1 − meio_topo·m
    /// centroide = (y − q) / m
    /// ```
    ///
    /// Quando os dois meios coincidem (forma simétrica, inclinação
    /// indefinida), devolve esse meio diretamente, sem dividir por zero.
    pub fn centroid(&self) -> f64 {
        let (a, b, c, d) = self.params();
        let top = c - b;
        let bottom = d - a;

        let top_midpoint = b + top / 2.0;
        let bottom_midpoint = a + bottom / 2.0;
        if top_midpoint == bottom_midpoint {
            return top_midpoint;
        }

        let y = ((2.0 * top) + bottom) / (top + bottom) / 3.0;
        let m = top_midpoint - bottom_midpoint;
        let q = 1.0 - top_midpoint * m;

        (y - q) / m
    }

    /// **Meio do máximo** — ponto médio do platô onde o grau vale 1.
    pub fn middle_of_maximum(&self) -> f64 {
        let (_, b, c, _) = self.params();
        b + (c - b) / 2.0
    }

    /// Suporte: intervalo `[a, d]` fora do qual o grau é zero.
    pub fn support(&self) -> (f64, f64) {
        let (a, _, _, d) = self.params();
        (a, d)
    }

    /// Núcleo: intervalo `[b, c]` onde o grau vale 1.
    pub fn core(&self) -> (f64, f64) {
        let (_, b, c, _) = self.params();
        (b, c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn trapezoid(a: f64, b: f64, c: f64, d: f64) -> MembershipFunction {
        MembershipFunction::Trapezoid { a, b, c, d }
    }

    /// Fronteiras do trapézio: 0 em a e d, 1 em b e c
    #[test]
    fn test_trapezoid_boundaries() {
        let t = trapezoid(10.0, 20.0, 30.0, 40.0);
        assert_eq!(t.fuzzify(10.0), 0.0);
        assert_eq!(t.fuzzify(20.0), 1.0);
        assert_eq!(t.fuzzify(30.0), 1.0);
        assert_eq!(t.fuzzify(40.0), 0.0);
        assert!((t.fuzzify(15.0) - 0.5).abs() < EPS);
        assert!((t.fuzzify(37.5) - 0.25).abs() < EPS);
        assert_eq!(t.fuzzify(5.0), 0.0);
        assert_eq!(t.fuzzify(45.0), 0.0);
    }

    /// Ombro esquerdo (a = b): x = a cai no platô
    #[test]
    fn test_left_shoulder() {
        let cold = trapezoid(0.0, 0.0, 20.0, 40.0);
        assert_eq!(cold.fuzzify(0.0), 1.0);
        assert_eq!(cold.fuzzify(10.0), 1.0);
        assert!((cold.fuzzify(25.0) - 0.75).abs() < EPS);
        assert_eq!(cold.fuzzify(45.0), 0.0);
        assert_eq!(cold.fuzzify(-1.0), 0.0);
    }

    /// Grau sempre em [0, 1] numa varredura
    #[test]
    fn test_degree_in_range() {
        let shapes = [
            trapezoid(0.0, 0.0, 20.0, 40.0),
            trapezoid(50.0, 80.0, 100.0, 100.0),
            MembershipFunction::Triangle { a: 30.0, b: 50.0, c: 70.0 },
        ];
        for shape in &shapes {
            for i in -20..=240 {
                let x = i as f64 * 0.5;
                let mu = shape.fuzzify(x);
                assert!((0.0..=1.0).contains(&mu), "{:?} em {} = {}", shape, x, mu);
            }
        }
    }

    /// Triângulo equivale ao trapézio com b = c
    #[test]
    fn test_triangle_matches_trapezoid() {
        let tri = MembershipFunction::Triangle { a: 30.0, b: 50.0, c: 70.0 };
        let trap = trapezoid(30.0, 50.0, 50.0, 70.0);
        for i in 0..=100 {
            let x = i as f64;
            assert_eq!(tri.fuzzify(x), trap.fuzzify(x));
        }
        assert_eq!(tri.centroid(), trap.centroid());
        assert_eq!(tri.middle_of_maximum(), trap.middle_of_maximum());
    }

    /// Forma simétrica: centroide é o meio coincidente, sem divisão por zero
    #[test]
    fn test_centroid_degenerate() {
        let high = MembershipFunction::Triangle { a: 25.0, b: 50.0, c: 75.0 };
        assert_eq!(high.centroid(), 50.0);
        let sym = trapezoid(0.0, 10.0, 30.0, 40.0);
        assert_eq!(sym.centroid(), 20.0);
        let point = trapezoid(5.0, 5.0, 5.0, 5.0);
        assert_eq!(point.centroid(), 5.0);
    }

    /// Centroide assimétrico segue a forma fechada
    #[test]
    fn test_centroid_closed_form() {
        // topo = 20, base = 40, meio_topo = 10, meio_base = 20
        let cold = trapezoid(0.0, 0.0, 20.0, 40.0);
        let y = (2.0 * 20.0 + 40.0) / (20.0 + 40.0) / 3.0;
        let m = 10.0 - 20.0;
        let q = 1.0 - 10.0 * m;
        assert!((cold.centroid() - (y - q) / m).abs() < EPS);

        // triângulo: topo = 0, y = 1/3
        let tri = MembershipFunction::Triangle { a: 0.0, b: 10.0, c: 40.0 };
        let expected = (1.0 / 3.0 - 101.0) / -10.0;
        assert!((tri.centroid() - expected).abs() < EPS);
    }

    /// Meio do máximo é o centro do platô
    #[test]
    fn test_middle_of_maximum() {
        assert_eq!(trapezoid(50.0, 80.0, 100.0, 100.0).middle_of_maximum(), 90.0);
        assert_eq!(
            MembershipFunction::Triangle { a: 0.0, b: 25.0, c: 50.0 }.middle_of_maximum(),
            25.0
        );
    }

    /// Parâmetros decrescentes ou não finitos são rejeitados
    #[test]
    fn test_check() {
        assert!(trapezoid(0.0, 0.0, 20.0, 40.0).check().is_ok());
        assert!(trapezoid(0.0, 30.0, 20.0, 40.0).check().is_err());
        assert!(trapezoid(f64::NAN, 0.0, 20.0, 40.0).check().is_err());
        assert!(MembershipFunction::Triangle { a: 0.0, b: f64::INFINITY, c: 1.0 }
            .check()
            .is_err());
    }

    /// Suporte e núcleo
    #[test]
    fn test_support_and_core() {
        let t = trapezoid(1.0, 2.0, 3.0, 4.0);
        assert_eq!(t.support(), (1.0, 4.0));
        assert_eq!(t.core(), (2.0, 3.0));
    }
}
