//! # Fuzzy Engine — Driver de Demonstração
//!
//! Monta o modelo clássico **Water → Power** e avalia uma série de
//! temperaturas de água, imprimindo uma linha JSON por entrada.
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Varredura padrão: 0, 10, ..., 100
//! cargo run
//!
//! # Valores específicos, com meio do máximo e logs detalhados
//! FUZZY_DEFUZZ=mom RUST_LOG=debug cargo run -- 10 35 65
//! ```
//!
//! ## Saída
//!
//! ```text
//! {"input":10.0,"output":{"Power":50.0}}
//! {"input":65.0,"output":{"Power":33.333333333333336}}
//! ```

use std::collections::{BTreeMap, HashMap};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fuzzy_engine::core::LinguisticVariable;
use fuzzy_engine::inference::{InferenceEngine, Inputs, Rule};
use fuzzy_engine::EngineConfig;

/// Linha de saída impressa para cada entrada.
#[derive(Serialize)]
struct Report {
    input: f64,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    output: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

/// Monta o motor com as variáveis Water/Power e as duas regras.
fn build_engine(config: EngineConfig) -> Result<InferenceEngine> {
    let mut water = LinguisticVariable::new("Water");
    let cold = water.add_trapezoid("Cold", 0.0, 0.0, 20.0, 40.0)?;
    let warm = water.add_triangle("Warm", 30.0, 50.0, 70.0)?;
    let hot = water.add_trapezoid("Hot", 50.0, 80.0, 100.0, 100.0)?;

    let mut power = LinguisticVariable::new("Power");
    let low = power.add_triangle("Low", 0.0, 25.0, 50.0)?;
    let high = power.add_triangle("High", 25.0, 50.0, 75.0)?;

    let rules = [
        Rule::when(water.is(&cold).or(water.is(&warm))).then(&high),
        Rule::when(water.is(&hot)).then(&low),
    ];

    let mut engine = InferenceEngine::with_config(config);
    engine.add_variables([water, power])?;
    engine.add_rules(rules)?;
    Ok(engine)
}

/// Lê as temperaturas dos argumentos ou usa a varredura padrão.
fn parse_inputs() -> Result<Vec<f64>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        return Ok((0..=10).map(|i| f64::from(i) * 10.0).collect());
    }
    args.iter()
        .map(|a| {
            a.parse::<f64>()
                .with_context(|| format!("Valor de entrada inválido: '{}'", a))
        })
        .collect()
}

fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível (padrão: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = EngineConfig::from_env().context("Falha ao ler FUZZY_DEFUZZ")?;
    tracing::info!(strategy = %config.strategy, "Montando modelo Water → Power");
    let engine = build_engine(config).context("Falha ao montar o modelo")?;

    let values = parse_inputs()?;
    let rows: Vec<Inputs> = values
        .iter()
        .map(|&v| HashMap::from([("water".to_string(), v)]))
        .collect();

    let results = engine.defuzzify_batch(&rows);
    for (input, result) in values.into_iter().zip(results) {
        let mut report = Report {
            input,
            output: BTreeMap::new(),
            errors: Vec::new(),
        };
        match result {
            Ok(outputs) => {
                for (name, value) in outputs {
                    match value {
                        Ok(v) => {
                            report.output.insert(name, v);
                        }
                        Err(e) => report.errors.push(e.to_string()),
                    }
                }
            }
            Err(e) => report.errors.push(e.to_string()),
        }
        println!(
            "{}",
            serde_json::to_string(&report).context("Falha ao serializar resultado")?
        );
    }

    tracing::info!(rows = rows.len(), "Avaliação concluída");
    Ok(())
}
