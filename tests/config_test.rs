// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/config_test.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file validates configuration handling: the defined failure kinds
// for degenerate values, CLI argument defaults and bounds, and the derived
// durations.
//
// Tree Location:
// - tests/config_test.rs (configuration validation tests)
// - Depends on: core/types, clap

use clap::Parser;
use hashgauge::HashRateEstimator;
use hashgauge::core::types::{Args, EstimatorConfig, EstimatorError};
use std::time::Duration;

#[test]
fn test_zero_duration_is_defined_failure() {
    println!("🧪 Testing Zero Duration Rejection");
    println!("===================================");

    assert_eq!(
        EstimatorConfig::new(0, 10).validate().unwrap_err(),
        EstimatorError::ZeroDuration
    );

    let mut estimator = HashRateEstimator::new(0, 10);
    assert_eq!(
        estimator.run().unwrap_err(),
        EstimatorError::ZeroDuration,
        "No trial may run with a zero duration"
    );
    println!("  ✅ ZeroDuration failure kind verified");
}

#[test]
fn test_zero_tries_is_defined_failure() {
    println!("🧪 Testing Zero Tries Rejection");
    println!("================================");

    assert_eq!(
        EstimatorConfig::new(1000, 0).validate().unwrap_err(),
        EstimatorError::ZeroTries
    );

    let mut estimator = HashRateEstimator::new(1000, 0);
    assert_eq!(
        estimator.run().unwrap_err(),
        EstimatorError::ZeroTries,
        "No trial may run with zero tries"
    );
    println!("  ✅ ZeroTries failure kind verified");
}

#[test]
fn test_args_defaults_match_contract() {
    println!("🧪 Testing CLI Defaults");
    println!("========================");

    let args = Args::try_parse_from(["hashgauge"]).expect("defaults must parse");
    assert_eq!(args.duration, 1000, "Default trial duration is 1000 ms");
    assert_eq!(args.tries, 10, "Default try count is 10");
    assert!(!args.json, "JSON output is opt-in");
    assert!(args.validate().is_ok(), "Defaults must validate");
    println!("  ✅ Defaults of 1000 ms x 10 tries verified");
}

#[test]
fn test_args_bounds() {
    println!("🧪 Testing CLI Argument Bounds");
    println!("===============================");

    let cases: [(&[&str], &str); 4] = [
        (&["hashgauge", "--duration", "0"], "greater than 0"),
        (&["hashgauge", "--duration", "3600001"], "cannot exceed 1 hour"),
        (&["hashgauge", "--tries", "0"], "greater than 0"),
        (&["hashgauge", "--tries", "100001"], "cannot exceed 100000"),
    ];

    for (argv, expected) in cases {
        let args = Args::try_parse_from(argv.iter().copied()).expect("argv must parse");
        let err = args.validate().expect_err("out-of-bounds value must fail");
        println!("  {:?} -> {}", &argv[1..], err);
        assert!(
            err.contains(expected),
            "Error should mention the violated bound"
        );
    }
    println!("  ✅ Bounds verified");
}

#[test]
fn test_derived_durations() {
    println!("🧪 Testing Derived Durations");
    println!("=============================");

    let config = EstimatorConfig::new(1000, 10);
    assert_eq!(config.trial_duration(), Duration::from_secs(1));
    assert_eq!(config.intended_total(), Duration::from_secs(10));

    let quick = EstimatorConfig::new(250, 4);
    assert_eq!(quick.intended_total(), Duration::from_secs(1));
    println!("  ✅ Trial and intended totals verified");
}

// Changelog:
// - v1.0.0 (2025-07-10): Initial configuration tests.
//   - Defined failure kinds for zero values, CLI defaults and bounds,
//     derived trial/intended durations.
