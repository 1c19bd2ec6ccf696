use anyhow::Result;
use std::path::Path;

pub mod catalog;

use catalog::catalog_scenarios;

/// Inputs for one scenario iteration.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioCtx<'a> {
    pub seed: u64,
    pub iteration: usize,
    pub store_path: &'a Path,
    pub verbose: bool,
}

/// Runs one iteration; returns a short detail line on success.
pub type ScenarioCheck = fn(&ScenarioCtx<'_>) -> Result<String>;

#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Seeded scenarios run `iterations` times per seed; the rest run once.
    pub seeded: bool,
    pub check: ScenarioCheck,
}

pub fn get_scenario(key: &str) -> Option<TestScenario> {
    catalog_scenarios()
        .into_iter()
        .find(|scenario| scenario.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog_scenarios()
        .iter()
        .map(|scenario| (scenario.key, scenario.description))
        .collect()
}

/// Expand `all` into every scenario key, keeping explicit keys in order.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for key in requested {
        if key == "all" {
            for scenario in catalog_scenarios() {
                if !keys.iter().any(|k| k == scenario.key) {
                    keys.push(scenario.key.to_string());
                }
            }
        } else if !keys.contains(key) {
            keys.push(key.clone());
        }
    }
    keys
}
