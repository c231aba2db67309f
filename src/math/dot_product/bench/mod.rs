//! The benchmark harness run.
//!
//! One run generates the input pair once, executes each selected strategy on
//! it (optionally after untimed warm-up, optionally in shuffled order), and
//! summarizes timings, results and speedups. The vectors live only for the
//! duration of [`run_harness`].

use std::hint::black_box;
use std::time::Duration;

use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use super::code::{AGGREGATION, ELEMENTWISE, VECTORIZED};
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::measure;
use crate::registry::{Strategy, StrategyRegistry};
use crate::utils::export::RawSample;
use crate::utils::report::{relative_error, Speedups};
use crate::utils::timer::SampleStats;
use crate::utils::vectors::{generate_pair, seeded_rng, time_seed, VectorPair};
use crate::utils::CpuPinGuard;

/// What one strategy produced over all of its repetitions
#[derive(Clone, Debug)]
pub struct StrategyOutcome {
    pub name: &'static str,
    pub description: &'static str,
    /// Value returned by the last execution
    pub result: f64,
    /// Relative error of `result` against the reference strategy's result
    pub relative_error: f64,
    pub stats: SampleStats,
}

/// Everything a run reports
#[derive(Clone, Debug)]
pub struct HarnessRun {
    pub len: usize,
    pub seed: u64,
    pub pinned_core: Option<usize>,
    /// Outcomes in registration order
    pub outcomes: Vec<StrategyOutcome>,
    pub speedups: Speedups,
    /// Every timed execution, in execution order
    pub samples: Vec<RawSample>,
}

impl HarnessRun {
    pub fn outcome(&self, name: &str) -> Option<&StrategyOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    /// Largest relative error across strategies
    pub fn max_relative_error(&self) -> f64 {
        self.outcomes
            .iter()
            .map(|o| o.relative_error)
            .fold(0.0, f64::max)
    }
}

/// Generate the input pair and run the selected strategies on it.
pub fn run_harness(config: &HarnessConfig, registry: &StrategyRegistry) -> Result<HarnessRun> {
    config.validate()?;
    let strategies = registry.select(&config.only)?;
    let seed = config.seed.unwrap_or_else(time_seed);

    info!(len = config.len, seed, "generating input vectors");
    let pair = generate_pair(config.len, &mut seeded_rng(seed))?;
    debug!(bytes = pair.footprint_bytes(), "input vectors allocated");

    run_on_pair(&pair, &strategies, config, seed)
}

/// Run strategies on an existing pair. `config.len` is ignored; the pair's
/// common length is reported instead.
pub fn run_on_pair(
    pair: &VectorPair,
    strategies: &[&Strategy],
    config: &HarnessConfig,
    seed: u64,
) -> Result<HarnessRun> {
    config.validate()?;
    let len = pair.common_len();

    let pin = if config.pin {
        let guard = CpuPinGuard::pin_current();
        match guard.core_id() {
            Some(core) => debug!(core, "measuring thread pinned"),
            None => warn!("could not pin measuring thread; timings may be noisier"),
        }
        guard
    } else {
        CpuPinGuard::unpinned()
    };

    for strategy in strategies {
        for _ in 0..config.warmup_iterations {
            black_box((strategy.function)(black_box(pair.a()), black_box(pair.b())));
        }
    }

    // (strategy index, repetition)
    let mut tasks: Vec<(usize, usize)> = (0..strategies.len())
        .flat_map(|s| (0..config.repetitions).map(move |r| (s, r)))
        .collect();
    if config.shuffle {
        tasks.shuffle(&mut seeded_rng(seed.wrapping_add(1)));
    }

    let mut durations: Vec<Vec<Duration>> = strategies
        .iter()
        .map(|_| Vec::with_capacity(config.repetitions))
        .collect();
    let mut results: Vec<f64> = vec![0.0; strategies.len()];
    let mut samples = Vec::with_capacity(tasks.len());

    for (idx, repetition) in tasks {
        let strategy = strategies[idx];
        info!(strategy = strategy.name, repetition, "running");
        let (timing, result) = measure!((strategy.function)(pair.a(), pair.b()));
        let elapsed = timing.elapsed();
        debug!(strategy = strategy.name, elapsed_ns = elapsed.as_nanos() as u64, result, "sample");

        durations[idx].push(elapsed);
        results[idx] = result;
        samples.push(RawSample {
            strategy: strategy.name,
            repetition,
            len,
            elapsed_ns: elapsed.as_nanos(),
            result,
        });
    }
    let pinned_core = pin.core_id();
    drop(pin);

    // Reference for agreement: elementwise when selected, otherwise the first.
    let reference = strategies
        .iter()
        .position(|s| s.name == ELEMENTWISE)
        .unwrap_or(0);
    let expected = results.get(reference).copied().unwrap_or(0.0);

    let outcomes: Vec<StrategyOutcome> = strategies
        .iter()
        .zip(durations)
        .zip(&results)
        .filter_map(|((strategy, times), &result)| {
            let stats = SampleStats::from_durations(&times)?;
            Some(StrategyOutcome {
                name: strategy.name,
                description: strategy.description,
                result,
                relative_error: relative_error(result, expected),
                stats,
            })
        })
        .collect();

    for outcome in &outcomes {
        if outcome.relative_error > config.tolerance {
            warn!(
                strategy = outcome.name,
                result = outcome.result,
                expected,
                relative_error = outcome.relative_error,
                "strategy disagrees with reference result"
            );
        }
    }

    let median_of = |name: &str| {
        outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| o.stats.median)
    };
    let speedups = Speedups::compute(
        median_of(ELEMENTWISE),
        median_of(AGGREGATION),
        median_of(VECTORIZED),
        config.epsilon,
    );

    Ok(HarnessRun {
        len,
        seed,
        pinned_core,
        outcomes,
        speedups,
        samples,
    })
}
