// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/core/sha256.rs
// Version: 1.0.1
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file implements the SHA-256 digest primitive used by the estimator,
// along with the acquisition seam that lets tests simulate a host where the
// primitive is unavailable. Each call hashes one filler buffer and counts
// as exactly one hash operation.

use crate::core::types::EstimatorError;
use sha2::{Digest, Sha256};
use tracing::debug;

const LOG_TARGET: &str = "hashgauge::core::sha256";

/// Compute one SHA-256 digest over the given data.
pub fn sha256_hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result: [u8; 32] = hasher.finalize().into();

    debug!(target: LOG_TARGET, "SHA-256 digest: {}", hex::encode(result));
    result
}

/// A held instance of the hashing primitive. One `digest` call is one hash.
pub trait DigestEngine {
    fn digest(&mut self, data: &[u8]) -> [u8; 32];
}

/// Production engine backed by the sha2 crate.
pub struct Sha256Engine;

impl DigestEngine for Sha256Engine {
    fn digest(&mut self, data: &[u8]) -> [u8; 32] {
        sha256_hash(data)
    }
}

/// Acquisition seam for the hashing primitive. Acquisition happens once per
/// estimation run, before any trial executes; a failed acquisition must not
/// abort the process.
pub trait Sha256Provider {
    fn acquire(&self) -> Result<Box<dyn DigestEngine>, EstimatorError>;
}

/// Default provider. sha2 is compiled into the binary, so acquisition on a
/// real host always succeeds.
pub struct SystemSha256;

impl Sha256Provider for SystemSha256 {
    fn acquire(&self) -> Result<Box<dyn DigestEngine>, EstimatorError> {
        debug!(target: LOG_TARGET, "Acquired SHA-256 engine");
        Ok(Box::new(Sha256Engine))
    }
}

// Changelog:
// - v1.0.1 (2025-07-10): Split acquisition from digestion.
//   - Added Sha256Provider so the unavailable-primitive path is testable.
// - v1.0.0 (2025-07-02): Initial SHA-256 primitive.
//   - Single-digest function over a filler buffer with debug logging.
