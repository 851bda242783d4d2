//! # Erros — Taxonomia de Falhas do Motor Fuzzy
//!
//! Todas as falhas da biblioteca são reportadas como [`FuzzyError`].
//! Nenhuma falha é fatal para o processo: o chamador sempre recebe
//! um `Result` tipado.
//!
//! | Variante | Quando ocorre | Momento |
//! |----------|---------------|---------|
//! | `UnknownVariable` | Entrada sem valor para variável usada num antecedente | Avaliação |
//! | `UndeclaredVariable` | Regra cita variável não registrada no motor | Construção |
//! | `UnknownShape` | Regra cita forma não declarada na variável | Construção |
//! | `NoApplicableRule` | Variável de saída sem nenhuma força de disparo | Avaliação (por variável) |
//! | `InvalidShape` | Parâmetros não finitos ou decrescentes | Construção |
//! | `DuplicateVariable` / `DuplicateShape` | Nomes repetidos | Construção |
//! | `InvalidConfig` | Estratégia de defuzzificação desconhecida | Configuração |

use thiserror::Error;

/// Erro tipado do motor de inferência fuzzy.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FuzzyError {
    /// A entrada da avaliação não tem valor para a variável citada.
    #[error("variável '{0}' sem valor na entrada")]
    UnknownVariable(String),

    /// Uma regra cita uma variável que não foi registrada no motor.
    #[error("variável '{0}' não registrada no motor")]
    UndeclaredVariable(String),

    /// Uma regra cita uma forma inexistente na variável.
    #[error("forma '{shape}' não declarada na variável '{variable}'")]
    UnknownShape { variable: String, shape: String },

    /// Nenhuma regra disparou para esta variável de saída.
    #[error("nenhuma regra aplicável à variável de saída '{0}'")]
    NoApplicableRule(String),

    #[error("forma '{shape}' inválida: {reason}")]
    InvalidShape { shape: String, reason: String },

    #[error("variável '{0}' já registrada")]
    DuplicateVariable(String),

    #[error("forma '{shape}' já declarada na variável '{variable}'")]
    DuplicateShape { variable: String, shape: String },

    #[error("configuração inválida: {0}")]
    InvalidConfig(String),
}

/// Alias de `Result` usado em toda a biblioteca.
pub type Result<T> = std::result::Result<T, FuzzyError>;
