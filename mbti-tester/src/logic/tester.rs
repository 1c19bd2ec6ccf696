use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::common::scenario::{ScenarioCtx, TestScenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: Option<u64>,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester {
    store_path: PathBuf,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(store_path: PathBuf, verbose: bool) -> Self {
        Self {
            store_path,
            verbose,
        }
    }

    /// Run a scenario once, or `iterations` times per seed when it is seeded.
    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        if !scenario.seeded {
            return vec![self.run_iterations(scenario, None, 1)];
        }
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {seed})",
                        scenario.name.bright_white()
                    );
                }
                self.run_iterations(scenario, Some(seed), iterations)
            })
            .collect()
    }

    fn run_iterations(
        &self,
        scenario: &TestScenario,
        seed: Option<u64>,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut timings = Vec::with_capacity(iterations);
        let mut detail = None;

        for iteration in 0..iterations {
            let ctx = ScenarioCtx {
                seed: seed.unwrap_or_default(),
                iteration,
                store_path: &self.store_path,
                verbose: self.verbose,
            };
            let start = Instant::now();
            let outcome = (scenario.check)(&ctx);
            timings.push(start.elapsed());

            match outcome {
                Ok(line) => {
                    successes += 1;
                    detail = Some(line);
                }
                Err(err) => {
                    log::warn!("{} iteration {} failed: {err:#}", scenario.key, iteration + 1);
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{} failed: {}",
                            iteration + 1,
                            iterations,
                            format!("{err:#}").red()
                        );
                    }
                    failures.push(format!("Iteration {}: {err:#}", iteration + 1));
                }
            }
        }

        let average_duration = if timings.is_empty() {
            Duration::ZERO
        } else {
            timings.iter().sum::<Duration>() / u32::try_from(timings.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty() && iterations > 0,
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            detail: if iterations == 1 { detail } else { None },
            average_duration,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(u64::MAX)))
    }
}
