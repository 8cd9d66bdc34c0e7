// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/estimator/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file declares the estimator module for hashgauge. It provides the
// paced trial loop along with the filler-data and pacing seams it depends
// on.
//
// Tree Location:
// - src/estimator/mod.rs (estimator module entry point)
// - Submodules: runner, filler, pacing

pub mod filler;
pub mod pacing;
pub mod runner;

// Re-export key estimator types and functions
pub use filler::{FILLER_LEN, FillerSource, SeededFiller, ThreadRngFiller};
pub use pacing::{Pacer, SleepInterrupted, ThreadPacer};
pub use runner::HashRateEstimator;

// Changelog:
// - v1.0.0 (2025-07-02): Initial estimator module creation.
//   - Declares runner, filler, and pacing submodules with re-exports for
//     easy access to the estimation loop and its injectable seams.
