// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/estimator/pacing.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides the pacing seam for the estimator. After each trial's
// digest, the runner pauses out the remainder of the trial duration so that
// successive trials are spaced at least one duration apart. Interruption
// policy: an interrupted pause is reported to the caller, logged there, and
// never re-slept; the loop continues immediately with the next trial.
//
// Tree Location:
// - src/estimator/pacing.rs (trial pacing)
// - Depends on: std

use std::thread;
use std::time::Duration;

/// Reported when a pause ended before the requested time elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepInterrupted;

/// Pacing seam. `pause` is only called with a positive remainder; the
/// runner skips it entirely when a trial already met its duration.
pub trait Pacer {
    fn pause(&mut self, remaining: Duration) -> Result<(), SleepInterrupted>;
}

/// Production pacer over std::thread::sleep, which always sleeps at least
/// the requested time and cannot be interrupted
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, remaining: Duration) -> Result<(), SleepInterrupted> {
        thread::sleep(remaining);
        Ok(())
    }
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial pacing seam.
//   - ThreadPacer for production; interruption surfaced as SleepInterrupted
//     so the runner owns the log-and-continue policy.
