// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/lib.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file serves as the main library entry point for hashgauge, located
// at the root of the source tree. It exports all public modules and types
// that other crates or binaries can use.
//
// Tree Location:
// - src/lib.rs (root library file)
// - Exports modules: core, estimator, utils

pub mod core;
pub mod estimator;
pub mod utils;

// Re-export commonly used types at the crate root for convenience
pub use crate::core::types::{EstimateReport, EstimatorConfig, EstimatorError};
pub use crate::estimator::runner::HashRateEstimator;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Changelog:
// - v1.1.0 (2025-07-18): Re-exported EstimateReport for JSON output support.
//   - Maintained all existing estimation functionality.
// - v1.0.0 (2025-07-02): Initial library layout.
//   - Purpose: Establishes the library root, organizing the project into
//     core, estimator, and utils modules.
//   - Features: Exports key types (HashRateEstimator, EstimatorConfig) for
//     easy access and defines a common Result type for the binary.
