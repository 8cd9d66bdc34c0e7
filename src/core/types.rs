// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/types.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file defines core data structures for hashgauge, located in the core
// subdirectory. It includes types for command-line arguments, estimator
// configuration, the estimate report, and the estimator error surface.
//
// Tree Location:
// - src/core/types.rs (core data structures)
// - Depends on: clap, serde, thiserror

use clap::Parser;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::utils::format::FormatUtils;

/// Command-line arguments for hashgauge
#[derive(Parser, Debug)]
#[command(
    name = "hashgauge",
    author = "HashGauge Team",
    version = "1.1.0",
    about = "SHA-256 host hash rate estimator with paced sampling trials",
    long_about = "HashGauge estimates how many SHA-256 hashes the host performs per second by\n\
                  running a fixed number of paced trials. Each trial digests one 64-byte filler\n\
                  buffer and then sleeps out the remainder of the trial duration, so a run takes\n\
                  roughly duration * tries milliseconds of wall-clock time.\n\n\
                  Examples:\n\
                    Default run: hashgauge\n\
                    Quick run: hashgauge --duration 100 --tries 5\n\
                    JSON report: hashgauge --json\n\n\
                  For detailed help, use: hashgauge --help"
)]
pub struct Args {
    /// Target wall-clock time per trial, in milliseconds
    /// Each trial is paced to at least this long; the run takes about
    /// duration * tries milliseconds in total
    #[arg(
        short = 'd',
        long = "duration",
        default_value = "1000",
        value_name = "MILLIS",
        help = "Per-trial duration in milliseconds [default: 1000]"
    )]
    pub duration: u64,

    /// Number of trials to run sequentially
    /// More tries lengthen the run without changing the expected rate
    #[arg(
        short = 't',
        long = "tries",
        default_value = "10",
        value_name = "COUNT",
        help = "Number of sampling trials [default: 10]"
    )]
    pub tries: u64,

    /// Emit the full estimate report as JSON instead of the one-line summary
    #[arg(long, help = "Print the estimate report as JSON")]
    pub json: bool,
}

impl Args {
    /// Validate arguments and return helpful errors
    pub fn validate(&self) -> Result<(), String> {
        if self.duration == 0 {
            return Err("Trial duration must be greater than 0 milliseconds".to_string());
        }
        if self.duration > 3_600_000 {
            return Err("Trial duration cannot exceed 1 hour (3600000 milliseconds)".to_string());
        }
        if self.tries == 0 {
            return Err("Try count must be greater than 0".to_string());
        }
        if self.tries > 100_000 {
            return Err("Try count cannot exceed 100000".to_string());
        }
        Ok(())
    }
}

/// Immutable estimator configuration, supplied once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimatorConfig {
    /// Target wall-clock time per trial, in milliseconds
    pub duration_ms: u64,

    /// Number of sequential trials to run
    pub tries: u64,
}

impl EstimatorConfig {
    pub fn new(duration_ms: u64, tries: u64) -> Self {
        Self { duration_ms, tries }
    }

    /// Reject degenerate configurations before any trial runs.
    ///
    /// Zero values would otherwise produce a zero-trial loop or a division
    /// by zero in the rate formula, so both are defined failure kinds.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if self.duration_ms == 0 {
            return Err(EstimatorError::ZeroDuration);
        }
        if self.tries == 0 {
            return Err(EstimatorError::ZeroTries);
        }
        Ok(())
    }

    /// Target duration of a single trial
    pub fn trial_duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Total intended duration of the whole run (duration * tries)
    pub fn intended_total(&self) -> Duration {
        Duration::from_millis(self.duration_ms.saturating_mul(self.tries))
    }
}

/// Estimator failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EstimatorError {
    /// Configuration error: non-positive trial duration
    #[error("configuration error: trial duration must be greater than zero")]
    ZeroDuration,

    /// Configuration error: non-positive try count
    #[error("configuration error: try count must be greater than zero")]
    ZeroTries,

    /// The SHA-256 primitive could not be acquired on this host
    #[error("SHA-256 digest primitive is unavailable on this host")]
    DigestUnavailable,
}

/// Results of one estimation run
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    /// Total hashes computed (one per trial)
    pub total_hashes: u64,

    /// Number of trials that ran
    pub tries: u64,

    /// Configured per-trial duration in milliseconds
    pub trial_duration_ms: u64,

    /// Intended run duration (trial duration * tries)
    pub intended_duration: Duration,

    /// Measured wall-clock run duration
    pub measured_duration: Duration,

    /// Average hashes per second over the intended duration
    pub hashes_per_second: f64,
}

impl EstimateReport {
    /// Rate over the total *intended* elapsed time, not the measured time.
    /// Callers must reject zero duration or tries before calling this.
    pub fn intended_rate(total_hashes: u64, duration_ms: u64, tries: u64) -> f64 {
        total_hashes as f64 / (duration_ms as f64 * tries as f64 / 1000.0)
    }

    /// Format the rate for display
    pub fn format_hashrate(&self) -> String {
        FormatUtils::format_hashrate(self.hashes_per_second)
    }
}

// Changelog:
// - v1.1.0 (2025-07-18): Made EstimateReport serializable.
//   - Derived Serialize for the --json CLI output.
//   - Added --json flag to Args.
// - v1.0.1 (2025-07-10): Added defined configuration failure kinds.
//   - EstimatorConfig::validate rejects zero duration and zero tries with
//     ZeroDuration/ZeroTries instead of degenerate arithmetic.
// - v1.0.0 (2025-07-02): Initial core types.
//   - Args with validation bounds, EstimatorConfig, EstimateReport with the
//     intended-time rate formula, EstimatorError via thiserror.
