//! Tests for the dot product strategies and the harness run.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use crate::config::HarnessConfig;
    use crate::error::HarnessError;
    use crate::math::dot_product::bench::{run_harness, run_on_pair};
    use crate::math::dot_product::code::*;
    use crate::registry::build_registry;
    use crate::utils::report::{relative_error, Speedup};
    use crate::utils::vectors::{generate_pair, seeded_rng, VectorPair};

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64, msg: &str) {
        let diff = (actual - expected).abs();
        assert!(
            diff < EPSILON,
            "{}: expected {}, got {}, diff = {}",
            msg,
            expected,
            actual,
            diff
        );
    }

    fn small_config(len: usize) -> HarnessConfig {
        HarnessConfig {
            len,
            seed: Some(42),
            pin: false,
            ..HarnessConfig::default()
        }
    }

    #[test]
    fn test_all_basic() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        for v in available_variants() {
            assert_close((v.function)(&a, &b), 70.0, v.name);
        }
    }

    #[test]
    fn test_all_single() {
        for v in available_variants() {
            assert_close((v.function)(&[2.5], &[4.0]), 10.0, v.name);
        }
    }

    #[test]
    fn test_all_empty() {
        let empty: [f64; 0] = [];
        for v in available_variants() {
            assert_eq!((v.function)(&empty, &empty), 0.0, "{}", v.name);
        }
    }

    #[test]
    fn test_all_truncate_to_shorter() {
        let long = [1.0, 2.0, 3.0, 4.0, 100.0];
        let short = [5.0, 6.0, 7.0, 8.0];
        for v in available_variants() {
            assert_close((v.function)(&long, &short), 70.0, v.name);
            assert_close((v.function)(&short, &long), 70.0, v.name);
            assert_eq!((v.function)(&long, &[]), 0.0, "{}", v.name);
        }
    }

    #[test]
    fn test_registry_verify() {
        let registry = build_registry();
        registry.verify(1023, 0xdeadbeef, 1e-6).unwrap();
    }

    proptest! {
        #[test]
        fn prop_strategies_agree(
            values in prop::collection::vec((0.0f64..1.0, 0.0f64..1.0), 1..2048)
        ) {
            let (a, b): (Vec<f64>, Vec<f64>) = values.into_iter().unzip();
            let expected = dot_elementwise(&a, &b);
            for v in available_variants() {
                let actual = (v.function)(&a, &b);
                let rel = (actual - expected).abs() / expected.abs().max(f64::MIN_POSITIVE);
                prop_assert!(rel < 1e-6, "{}: {} vs {}", v.name, actual, expected);
            }
        }

        #[test]
        fn prop_mismatched_lengths_use_common_prefix(
            a in prop::collection::vec(0.0f64..1.0, 0..256),
            b in prop::collection::vec(0.0f64..1.0, 0..256),
        ) {
            let n = a.len().min(b.len());
            let expected = dot_elementwise(&a[..n], &b[..n]);
            for v in available_variants() {
                let actual = (v.function)(&a, &b);
                prop_assert!((actual - expected).abs() <= 1e-9 * (1.0 + expected.abs()),
                    "{}: {} vs {}", v.name, actual, expected);
            }
        }
    }

    #[test]
    fn test_run_harness_reports_every_strategy() {
        let registry = build_registry();
        let run = run_harness(&small_config(10_000), &registry).unwrap();

        assert_eq!(run.len, 10_000);
        assert_eq!(run.seed, 42);
        let names: Vec<_> = run.outcomes.iter().map(|o| o.name).collect();
        assert_eq!(names, vec![ELEMENTWISE, AGGREGATION, VECTORIZED]);
        assert!(run.max_relative_error() < 1e-6);
        assert_eq!(run.samples.len(), 3);
        assert!(run.pinned_core.is_none());
    }

    #[test]
    fn test_run_harness_is_reproducible_for_a_seed() {
        let registry = build_registry();
        let first = run_harness(&small_config(1000), &registry).unwrap();
        let second = run_harness(&small_config(1000), &registry).unwrap();
        assert_eq!(
            first.outcome(ELEMENTWISE).unwrap().result,
            second.outcome(ELEMENTWISE).unwrap().result
        );
    }

    #[test]
    fn test_run_harness_repetitions_and_shuffle() {
        let registry = build_registry();
        let config = HarnessConfig {
            repetitions: 5,
            warmup_iterations: 2,
            shuffle: true,
            ..small_config(512)
        };
        let run = run_harness(&config, &registry).unwrap();

        assert_eq!(run.samples.len(), 15);
        for outcome in &run.outcomes {
            assert_eq!(outcome.stats.samples, 5);
            assert!(outcome.stats.min <= outcome.stats.median);
            assert!(outcome.stats.median <= outcome.stats.max);
            let reps: Vec<_> = run
                .samples
                .iter()
                .filter(|s| s.strategy == outcome.name)
                .map(|s| s.repetition)
                .collect();
            assert_eq!(reps.len(), 5);
        }
    }

    #[test]
    fn test_run_harness_subset() {
        let registry = build_registry();
        let config = HarnessConfig {
            only: vec![VECTORIZED.to_string()],
            ..small_config(256)
        };
        let run = run_harness(&config, &registry).unwrap();
        assert_eq!(run.outcomes.len(), 1);
        assert_eq!(run.speedups.aggregation_over_elementwise, Speedup::Undefined);
        assert_eq!(run.speedups.vectorized_over_best_scalar, Speedup::Undefined);
    }

    #[test]
    fn test_run_harness_rejects_unknown_strategy() {
        let registry = build_registry();
        let config = HarnessConfig {
            only: vec!["numpy".to_string()],
            ..small_config(16)
        };
        assert!(matches!(
            run_harness(&config, &registry),
            Err(HarnessError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_run_on_pair_concrete_vectors() {
        let registry = build_registry();
        let strategies = registry.select(&[]).unwrap();
        let pair = VectorPair::from_vecs(vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]);

        let run = run_on_pair(&pair, &strategies, &small_config(4), 7).unwrap();
        for outcome in &run.outcomes {
            assert_close(outcome.result, 70.0, outcome.name);
            assert_eq!(outcome.relative_error, 0.0);
        }
    }

    #[test]
    fn test_huge_epsilon_makes_every_ratio_undefined() {
        let registry = build_registry();
        let config = HarnessConfig {
            epsilon: Duration::from_secs(3600),
            ..small_config(1000)
        };
        let run = run_harness(&config, &registry).unwrap();
        assert_eq!(run.speedups.aggregation_over_elementwise, Speedup::Undefined);
        assert_eq!(run.speedups.vectorized_over_best_scalar, Speedup::Undefined);
    }

    #[test]
    fn test_vectorized_matches_on_large_input() {
        let pair = generate_pair(1_000_000, &mut seeded_rng(2024)).unwrap();
        let expected = dot_elementwise(pair.a(), pair.b());
        let actual = dot_vectorized(pair.a(), pair.b());
        assert!(
            relative_error(actual, expected) < 1e-9,
            "vectorized: expected {}, got {}",
            expected,
            actual
        );
    }
}
