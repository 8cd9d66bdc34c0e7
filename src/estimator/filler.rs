// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/estimator/filler.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides the filler-data seam for the estimator. Each trial
// digests one freshly generated filler buffer; the buffer's content is
// irrelevant to the measurement, only its presence as digest input matters.
// The source is injectable so tests can substitute deterministic bytes.
//
// Tree Location:
// - src/estimator/filler.rs (filler-data generation)
// - Depends on: rand

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Filler buffer size in bytes, matching the digest input of one trial
pub const FILLER_LEN: usize = 64;

/// Source of filler data for one trial's digest input
pub trait FillerSource {
    fn fill(&mut self, buf: &mut [u8; FILLER_LEN]);
}

/// Production source backed by the thread-local RNG
pub struct ThreadRngFiller;

impl FillerSource for ThreadRngFiller {
    fn fill(&mut self, buf: &mut [u8; FILLER_LEN]) {
        rand::thread_rng().fill_bytes(buf);
    }
}

/// Deterministic source seeded once, for reproducible runs and tests
pub struct SeededFiller {
    rng: StdRng,
}

impl SeededFiller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl FillerSource for SeededFiller {
    fn fill(&mut self, buf: &mut [u8; FILLER_LEN]) {
        self.rng.fill_bytes(buf);
    }
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial filler seam.
//   - ThreadRngFiller for production, SeededFiller for deterministic runs.
