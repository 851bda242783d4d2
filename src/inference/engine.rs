//! # InferenceEngine — Disparo, Agregação e Defuzzificação
//!
//! O [`InferenceEngine`] é dono das variáveis linguísticas e da sequência
//! ordenada de regras. Depois de montado, é consultado repetidamente,
//! sem estado, com entradas diferentes.
//!
//! ## Fluxo de uma Avaliação
//!
//! ```text
//! entradas nítidas
//!   ├── 1. Fuzzificação + antecedentes → força sᵢ de cada regra
//!   ├── 2. Para cada consequente (saída, forma): registra (forma, sᵢ)
//!   ├── 3. Agregação max-min por variável de saída (AggregatedSet)
//!   └── 4. Defuzzificação (Centroid | MiddleOfMaximum) → número nítido
//! ```
//!
//! ## Tratamento de Erros
//!
//! - Entrada ausente aborta **aquela** avaliação com `UnknownVariable`
//! - Saída sem força alguma vira `Err(NoApplicableRule)` **só naquela
//!   variável**; as outras saídas continuam resolvidas
//! - Referências inválidas em regras são rejeitadas na montagem
//!
//! ## Concorrência
//!
//! Avaliar não muta nada, então o motor é `Sync` e pode ser
//! compartilhado entre threads. [`defuzzify_batch`](InferenceEngine::defuzzify_batch)
//! distribui linhas independentes com rayon.

use std::collections::{BTreeMap, BTreeSet};

use rayon::prelude::*;

use super::defuzzify::{AggregatedSet, DefuzzStrategy};
use super::expression::Inputs;
use super::rules::Rule;
use crate::config::EngineConfig;
use crate::core::{Degree, LinguisticVariable, MembershipFunction};
use crate::error::{FuzzyError, Result};

/// Saídas de uma avaliação: variável de saída → valor nítido ou erro.
pub type Outputs = BTreeMap<String, Result<f64>>;

/// Motor de inferência fuzzy (Mamdani, operadores de Zadeh).
#[derive(Clone, Debug, Default)]
pub struct InferenceEngine {
    variables: BTreeMap<String, LinguisticVariable>,
    rules: Vec<Rule>,
    config: EngineConfig,
}

impl InferenceEngine {
    /// Motor vazio com configuração padrão (Centroid).
    pub fn new() -> Self {
        Self::default()
    }

    /// Motor vazio com a configuração dada.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Define a estratégia global de defuzzificação.
    pub fn set_strategy(&mut self, strategy: DefuzzStrategy) {
        self.config.strategy = strategy;
    }

    /// Define a estratégia de uma variável de saída específica.
    pub fn set_output_strategy(&mut self, output: impl Into<String>, strategy: DefuzzStrategy) {
        self.config.overrides.insert(output.into(), strategy);
    }

    /// Registra uma variável linguística.
    ///
    /// Nomes são únicos sem distinção de caixa, porque as entradas
    /// também são casadas assim.
    pub fn add_variable(&mut self, variable: LinguisticVariable) -> Result<()> {
        let lower = variable.name().to_lowercase();
        if self.variables.keys().any(|k| k.to_lowercase() == lower) {
            return Err(FuzzyError::DuplicateVariable(variable.name().to_string()));
        }
        tracing::debug!(
            variable = %variable.name(),
            terms = variable.terms().len(),
            "variável registrada"
        );
        self.variables.insert(variable.name().to_string(), variable);
        Ok(())
    }

    /// Registra várias variáveis, parando no primeiro erro.
    pub fn add_variables(
        &mut self,
        variables: impl IntoIterator<Item = LinguisticVariable>,
    ) -> Result<()> {
        variables.into_iter().try_for_each(|v| self.add_variable(v))
    }

    pub fn variable(&self, name: &str) -> Option<&LinguisticVariable> {
        self.variables.get(name)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Adiciona uma regra após validar todas as suas referências.
    pub fn add_rule(&mut self, rule: Rule) -> Result<()> {
        self.validate(&rule)?;
        tracing::debug!(
            index = self.rules.len(),
            consequents = rule.consequents().len(),
            "regra adicionada"
        );
        self.rules.push(rule);
        Ok(())
    }

    /// Adiciona várias regras. Todas são validadas antes: se uma falhar,
    /// nenhuma é adicionada.
    pub fn add_rules(&mut self, rules: impl IntoIterator<Item = Rule>) -> Result<()> {
        let rules: Vec<Rule> = rules.into_iter().collect();
        for rule in &rules {
            self.validate(rule)?;
        }
        for rule in rules {
            self.add_rule(rule)?;
        }
        Ok(())
    }

    /// Resolve (variável, forma) para a função de pertinência declarada.
    fn resolve(&self, variable: &str, shape: &str) -> Result<&MembershipFunction> {
        let var = self
            .variables
            .get(variable)
            .ok_or_else(|| FuzzyError::UndeclaredVariable(variable.to_string()))?;
        var.term(shape).ok_or_else(|| FuzzyError::UnknownShape {
            variable: variable.to_string(),
            shape: shape.to_string(),
        })
    }

    fn validate(&self, rule: &Rule) -> Result<()> {
        if let Some((variable, shape)) = rule.antecedent().foreign_atom() {
            return Err(FuzzyError::UnknownShape {
                variable: variable.to_string(),
                shape: shape.to_string(),
            });
        }
        for (variable, shape) in rule.antecedent().atoms() {
            self.resolve(variable, shape)?;
        }
        for consequent in rule.consequents() {
            self.resolve(&consequent.variable, &consequent.shape)?;
        }
        Ok(())
    }

    /// Variáveis de saída (citadas em algum consequente), em ordem alfabética.
    pub fn output_variables(&self) -> Vec<&str> {
        self.rules
            .iter()
            .flat_map(|r| r.consequents())
            .map(|c| c.variable.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Força de disparo de cada regra, na ordem de inserção.
    pub fn firing_strengths(&self, inputs: &Inputs) -> Result<Vec<Degree>> {
        self.rules
            .iter()
            .map(|rule| rule.antecedent().evaluate(&self.variables, inputs))
            .collect()
    }

    /// Dispara todas as regras e agrega as contribuições por variável de saída.
    ///
    /// Toda variável de saída aparece no mapa, mesmo sem contribuições.
    pub fn aggregate(&self, inputs: &Inputs) -> Result<BTreeMap<String, AggregatedSet>> {
        let mut sets: BTreeMap<String, AggregatedSet> = self
            .output_variables()
            .into_iter()
            .map(|name| (name.to_string(), AggregatedSet::new(name)))
            .collect();

        for (index, rule) in self.rules.iter().enumerate() {
            let strength = rule.antecedent().evaluate(&self.variables, inputs)?;
            tracing::debug!(rule = index, strength = %strength, "regra avaliada");
            if !strength.is_positive() {
                continue;
            }
            for consequent in rule.consequents() {
                let function = *self.resolve(&consequent.variable, &consequent.shape)?;
                tracing::trace!(
                    output = %consequent.variable,
                    shape = %consequent.shape,
                    strength = %strength,
                    "contribuição registrada"
                );
                if let Some(set) = sets.get_mut(&consequent.variable) {
                    set.record(&consequent.shape, function, strength);
                }
            }
        }

        Ok(sets)
    }

    /// Avalia as entradas e devolve um valor nítido por variável de saída.
    ///
    /// # Erros
    ///
    /// - `Err(UnknownVariable)` global se faltar uma entrada usada por alguma regra
    /// - `Err(NoApplicableRule)` por variável, dentro do mapa de saída
    pub fn defuzzify(&self, inputs: &Inputs) -> Result<Outputs> {
        let sets = self.aggregate(inputs)?;
        let outputs = sets
            .into_iter()
            .map(|(name, set)| {
                let strategy = self.config.strategy_for(&name);
                let value = set.defuzzify(strategy);
                match &value {
                    Ok(v) => tracing::debug!(output = %name, %strategy, value = v, "saída defuzzificada"),
                    Err(e) => tracing::debug!(output = %name, error = %e, "saída sem regra aplicável"),
                }
                (name, value)
            })
            .collect();
        Ok(outputs)
    }

    /// Avalia várias linhas de entrada em paralelo (rayon).
    ///
    /// Cada linha é independente: o erro de uma não afeta as outras.
    /// O resultado preserva a ordem das linhas.
    pub fn defuzzify_batch(&self, rows: &[Inputs]) -> Vec<Result<Outputs>> {
        rows.par_iter().map(|row| self.defuzzify(row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::ShapeHandle;
    use crate::inference::RuleExpression;

    const EPS: f64 = 1e-9;

    struct Model {
        engine: InferenceEngine,
        cold: ShapeHandle,
        high: ShapeHandle,
        fast: ShapeHandle,
        hot: ShapeHandle,
        water: LinguisticVariable,
    }

    /// Modelo Water/Power: Cold/Warm → High, Hot → Low.
    fn water_power() -> Model {
        let mut water = LinguisticVariable::new("Water");
        let cold = water.add_trapezoid("Cold", 0.0, 0.0, 20.0, 40.0).unwrap();
        let warm = water.add_triangle("Warm", 30.0, 50.0, 70.0).unwrap();
        let hot = water.add_trapezoid("Hot", 50.0, 80.0, 100.0, 100.0).unwrap();

        let mut power = LinguisticVariable::new("Power");
        let low = power.add_triangle("Low", 0.0, 25.0, 50.0).unwrap();
        let high = power.add_triangle("High", 25.0, 50.0, 75.0).unwrap();

        let mut fan = LinguisticVariable::new("Fan");
        let fast = fan.add_trapezoid("Fast", 50.0, 80.0, 100.0, 100.0).unwrap();

        let mut engine = InferenceEngine::new();
        engine
            .add_variables([water.clone(), power, fan])
            .unwrap();
        engine
            .add_rules([
                Rule::when(water.is(&cold).or(water.is(&warm))).then(&high),
                Rule::when(water.is(&hot)).then(&low),
            ])
            .unwrap();

        Model {
            engine,
            cold,
            high,
            fast,
            hot,
            water,
        }
    }

    fn input(x: f64) -> Inputs {
        HashMap::from([("Water".to_string(), x)])
    }

    /// Water = 10: só a regra 1 dispara e a saída é o centroide de High
    #[test]
    fn test_end_to_end_cold() {
        let model = water_power();
        let strengths = model.engine.firing_strengths(&input(10.0)).unwrap();
        assert_eq!(strengths, vec![Degree::ONE, Degree::ZERO]);

        let out = model.engine.defuzzify(&input(10.0)).unwrap();
        assert_eq!(out.len(), 1);
        assert!((*out["Power"].as_ref().unwrap() - 50.0).abs() < EPS);
    }

    /// Water = 65: High com 0.25 e Low com 0.5
    #[test]
    fn test_end_to_end_mixed() {
        let model = water_power();
        let out = model.engine.defuzzify(&input(65.0)).unwrap();
        let expected = (0.25 * 50.0 + 0.5 * 25.0) / 0.75;
        assert!((*out["Power"].as_ref().unwrap() - expected).abs() < EPS);
    }

    /// Entrada com nome em minúsculas, como no driver original
    #[test]
    fn test_lowercase_input_name() {
        let model = water_power();
        let inputs = HashMap::from([("water".to_string(), 25.0)]);
        let out = model.engine.defuzzify(&inputs).unwrap();
        assert!((*out["Power"].as_ref().unwrap() - 50.0).abs() < EPS);
    }

    /// Entrada ausente aborta a avaliação
    #[test]
    fn test_missing_input() {
        let model = water_power();
        assert_eq!(
            model.engine.defuzzify(&Inputs::new()),
            Err(FuzzyError::UnknownVariable("Water".into()))
        );
    }

    /// Saída sem força: erro só naquela variável
    #[test]
    fn test_no_applicable_rule_per_variable() {
        let mut model = water_power();
        let rule = Rule::when(model.water.is(&model.hot)).then(&model.fast);
        model.engine.add_rule(rule).unwrap();

        let out = model.engine.defuzzify(&input(10.0)).unwrap();
        assert!(out["Power"].is_ok());
        assert_eq!(out["Fan"], Err(FuzzyError::NoApplicableRule("Fan".into())));
    }

    /// Nenhuma regra dispara: NoApplicableRule, nunca um 0 fabricado
    #[test]
    fn test_no_rule_fires() {
        let model = water_power();
        let mut engine = InferenceEngine::new();
        engine
            .add_variables(model.engine.variables.values().cloned())
            .unwrap();
        engine.add_rule(model.engine.rules()[1].clone()).unwrap();
        let out = engine.defuzzify(&input(10.0)).unwrap();
        assert_eq!(out["Power"], Err(FuzzyError::NoApplicableRule("Power".into())));
    }

    /// Estratégia por variável prevalece sobre a global
    #[test]
    fn test_output_strategy_override() {
        let mut model = water_power();
        let rule = Rule::when(model.water.is(&model.hot)).then(&model.fast);
        model.engine.add_rule(rule).unwrap();

        // Fast = (50, 80, 100, 100): topo = 20, base = 50, meios 90 e 75
        let y = (2.0 * 20.0 + 50.0) / (20.0 + 50.0) / 3.0;
        let m = 90.0 - 75.0;
        let centroid = (y - (1.0 - 90.0 * m)) / m;

        let out = model.engine.defuzzify(&input(100.0)).unwrap();
        assert!((*out["Fan"].as_ref().unwrap() - centroid).abs() < EPS);

        model
            .engine
            .set_output_strategy("Fan", DefuzzStrategy::MiddleOfMaximum);
        let out = model.engine.defuzzify(&input(100.0)).unwrap();
        assert_eq!(*out["Fan"].as_ref().unwrap(), 90.0);

        model.engine.set_strategy(DefuzzStrategy::MiddleOfMaximum);
        assert_eq!(model.engine.config().strategy_for("Power"), DefuzzStrategy::MiddleOfMaximum);
    }

    /// Forma inexistente é rejeitada na montagem
    #[test]
    fn test_unknown_shape_rejected() {
        let mut model = water_power();
        let bogus = ShapeHandle {
            variable: "Power".into(),
            shape: "Medium".into(),
        };
        let rule = Rule::when(model.water.is(&model.hot)).then(&bogus);
        assert_eq!(
            model.engine.add_rule(rule),
            Err(FuzzyError::UnknownShape {
                variable: "Power".into(),
                shape: "Medium".into()
            })
        );
        assert_eq!(model.engine.rules().len(), 2);
    }

    /// Forma inexistente no antecedente é rejeitada na montagem
    #[test]
    fn test_unknown_antecedent_shape_rejected() {
        let mut model = water_power();
        let rule = Rule::when(RuleExpression::is("Water", "Tepid")).then(&model.high);
        assert_eq!(
            model.engine.add_rule(rule),
            Err(FuzzyError::UnknownShape {
                variable: "Water".into(),
                shape: "Tepid".into()
            })
        );
        assert_eq!(model.engine.rules().len(), 2);
    }

    /// Handle de outra variável não casa com forma homônima desta variável
    #[test]
    fn test_foreign_handle_rejected() {
        let mut water = LinguisticVariable::new("Water");
        water.add_triangle("High", 60.0, 80.0, 100.0).unwrap();
        let mut power = LinguisticVariable::new("Power");
        let power_high = power.add_triangle("High", 25.0, 50.0, 75.0).unwrap();

        let mut engine = InferenceEngine::new();
        engine.add_variables([water.clone(), power]).unwrap();
        let rule = Rule::when(water.is(&power_high)).then(&power_high);
        assert_eq!(
            engine.add_rules([rule]),
            Err(FuzzyError::UnknownShape {
                variable: "Water".into(),
                shape: "High".into()
            })
        );
        assert!(engine.rules().is_empty());
    }

    /// Forma repetida conta com a maior força ao lado de outra forma
    #[test]
    fn test_duplicate_shape_weighting() {
        let mut model = water_power();
        // Em 65: NOT Cold = 1.0 → High; Warm = 0.25 → High; Hot = 0.5 → Low
        let rule = Rule::when(model.water.is_not(&model.cold)).then(&model.high);
        model.engine.add_rule(rule).unwrap();

        let sets = model.engine.aggregate(&input(65.0)).unwrap();
        assert_eq!(sets["Power"].contributions().len(), 2);

        let out = model.engine.defuzzify(&input(65.0)).unwrap();
        let expected = (1.0 * 50.0 + 0.5 * 25.0) / 1.5;
        assert!((*out["Power"].as_ref().unwrap() - expected).abs() < EPS);
    }

    /// Variável não registrada é rejeitada; add_rules é tudo-ou-nada
    #[test]
    fn test_undeclared_variable_rejected() {
        let mut model = water_power();
        let mut air = LinguisticVariable::new("Air");
        let humid = air.add_triangle("Humid", 50.0, 75.0, 100.0).unwrap();
        let ok = Rule::when(model.water.is(&model.hot)).then(&model.fast);
        let bad = Rule::when(air.is(&humid)).then(&model.fast);
        assert_eq!(
            model.engine.add_rules([ok, bad]),
            Err(FuzzyError::UndeclaredVariable("Air".into()))
        );
        assert_eq!(model.engine.rules().len(), 2);
    }

    /// Nome de variável repetido, sem distinção de caixa
    #[test]
    fn test_duplicate_variable() {
        let mut model = water_power();
        assert_eq!(
            model.engine.add_variable(LinguisticVariable::new("water")),
            Err(FuzzyError::DuplicateVariable("water".into()))
        );
    }

    /// Agregação expõe o conjunto fuzzy de saída
    #[test]
    fn test_aggregate() {
        let model = water_power();
        let sets = model.engine.aggregate(&input(65.0)).unwrap();
        let power = &sets["Power"];
        assert_eq!(power.contributions().len(), 2);
        assert!((power.membership(50.0).value() - 0.25).abs() < EPS);
        assert!((power.membership(25.0).value() - 0.5).abs() < EPS);
    }

    /// Lote em paralelo preserva a ordem e isola erros
    #[test]
    fn test_batch() {
        let model = water_power();
        let rows = vec![input(10.0), Inputs::new(), input(65.0)];
        let results = model.engine.defuzzify_batch(&rows);
        assert_eq!(results.len(), 3);
        assert!((*results[0].as_ref().unwrap()["Power"].as_ref().unwrap() - 50.0).abs() < EPS);
        assert!(results[1].is_err());
        assert_eq!(results[2], model.engine.defuzzify(&input(65.0)));
    }
}
