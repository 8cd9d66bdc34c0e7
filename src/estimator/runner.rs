// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/estimator/runner.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the estimation engine. It runs a fixed number of
// sequential trials; each trial digests one 64-byte filler buffer, then
// sleeps out the remainder of the trial duration. The reported rate divides
// total hashes by the total intended time, so the figure reflects paced
// per-trial sampling, not saturated digest throughput.

use crate::core::sha256::{DigestEngine, Sha256Provider, SystemSha256};
use crate::core::types::{EstimateReport, EstimatorConfig, EstimatorError};
use crate::estimator::filler::{FILLER_LEN, FillerSource, ThreadRngFiller};
use crate::estimator::pacing::{Pacer, ThreadPacer};
use std::time::Instant;
use tracing::{debug, info, warn};

const LOG_TARGET: &str = "hashgauge::estimator::runner";

/// Main estimation runner
///
/// Single-threaded and blocking by contract: a run occupies the calling
/// thread for roughly duration * tries milliseconds and runs to completion
/// once started.
pub struct HashRateEstimator {
    config: EstimatorConfig,
    provider: Box<dyn Sha256Provider>,
    filler: Box<dyn FillerSource>,
    pacer: Box<dyn Pacer>,
}

impl HashRateEstimator {
    /// Create an estimator with the production seams (sha2 digest,
    /// thread-RNG filler, thread::sleep pacing)
    pub fn new(duration_ms: u64, tries: u64) -> Self {
        Self::with_parts(
            EstimatorConfig::new(duration_ms, tries),
            Box::new(SystemSha256),
            Box::new(ThreadRngFiller),
            Box::new(ThreadPacer),
        )
    }

    /// Create an estimator with explicit seams, for deterministic tests
    pub fn with_parts(
        config: EstimatorConfig,
        provider: Box<dyn Sha256Provider>,
        filler: Box<dyn FillerSource>,
        pacer: Box<dyn Pacer>,
    ) -> Self {
        Self {
            config,
            provider,
            filler,
            pacer,
        }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Run all trials and return the full estimate report.
    ///
    /// Fails fast on a degenerate configuration, and with DigestUnavailable
    /// when the hashing primitive cannot be acquired; no trial runs in
    /// either case. An interrupted pacing sleep is logged and skipped, not
    /// retried.
    pub fn run(&mut self) -> Result<EstimateReport, EstimatorError> {
        self.config.validate()?;

        let mut engine = match self.provider.acquire() {
            Ok(engine) => engine,
            Err(err) => {
                warn!(target: LOG_TARGET, "❌ Could not acquire SHA-256 engine: {}", err);
                return Err(err);
            }
        };

        info!(target: LOG_TARGET,
            "🧪 Starting estimation: {} trials of {} ms each",
            self.config.tries, self.config.duration_ms
        );

        let trial_duration = self.config.trial_duration();
        let mut total_hashes: u64 = 0;
        let run_started = Instant::now();

        for trial in 0..self.config.tries {
            let started = Instant::now();
            let mut buf = [0u8; FILLER_LEN];
            self.filler.fill(&mut buf);
            let digest = engine.digest(&buf);
            let elapsed = started.elapsed();
            total_hashes += 1;

            debug!(target: LOG_TARGET,
                "Trial {}: digest {} in {:?}",
                trial,
                hex::encode(&digest[..8]),
                elapsed
            );

            // Pace out the remainder; never a negative or zero sleep
            if elapsed < trial_duration {
                if self.pacer.pause(trial_duration - elapsed).is_err() {
                    warn!(target: LOG_TARGET,
                        "⏸️ Pacing sleep interrupted on trial {}, continuing without re-sleep",
                        trial
                    );
                }
            }
        }

        let measured_duration = run_started.elapsed();
        let hashes_per_second = EstimateReport::intended_rate(
            total_hashes,
            self.config.duration_ms,
            self.config.tries,
        );

        info!(target: LOG_TARGET,
            "✅ Estimation complete: {} hashes in {:.2}s measured ({:.2}s intended)",
            total_hashes,
            measured_duration.as_secs_f64(),
            self.config.intended_total().as_secs_f64()
        );

        Ok(EstimateReport {
            total_hashes,
            tries: self.config.tries,
            trial_duration_ms: self.config.duration_ms,
            intended_duration: self.config.intended_total(),
            measured_duration,
            hashes_per_second,
        })
    }

    /// Run all trials and return just the average hashes per second
    pub fn estimate(&mut self) -> Result<f64, EstimatorError> {
        Ok(self.run()?.hashes_per_second)
    }
}

// Changelog:
// - v1.0.1 (2025-07-10): Made digest acquisition a seam.
//   - Acquisition failure now returns DigestUnavailable after one warning
//     instead of a sentinel rate.
// - v1.0.0 (2025-07-02): Initial estimation engine.
//   - Sequential paced trials, one digest per trial, intended-time rate.
