// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/mod.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file is the module declaration for the core functionality of
// hashgauge, located in the core subdirectory. It declares submodules and
// re-exports key types for use throughout the project.

pub mod sha256;
pub mod types;

// Re-export the most commonly used items
pub use sha256::{DigestEngine, Sha256Engine, Sha256Provider, SystemSha256, sha256_hash};
pub use types::{Args, EstimateReport, EstimatorConfig, EstimatorError};

// Changelog:
// - v1.0.0 (2025-07-02): Initial core module.
//   - Declares the sha256 and types submodules and re-exports the digest
//     seam plus the shared estimator types.
