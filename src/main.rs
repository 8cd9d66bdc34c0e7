// HashGauge - Free and Open Source Software Statement
//
// File: src/main.rs
// Version: 1.1.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// Command-line entry point for the SHA-256 host hash rate estimator.

use clap::Parser;
use hashgauge::utils::format::FormatUtils;
use hashgauge::{EstimatorError, HashRateEstimator, Result, core::types::Args};
use tracing::{info, warn};

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate arguments
    if let Err(err) = args.validate() {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }

    tracing_subscriber::fmt::init();

    info!("🚀 Starting HashGauge - SHA-256 hash rate estimation");
    info!("⏱️ Trial duration: {} ms", args.duration);
    info!("🔁 Tries: {}", args.tries);

    let mut estimator = HashRateEstimator::new(args.duration, args.tries);

    match estimator.run() {
        Ok(report) => {
            info!("📊 Estimation Complete!");
            info!("📈 Total hashes: {}", FormatUtils::format_number(report.total_hashes));
            info!(
                "⏱️ Measured: {} (intended {})",
                FormatUtils::format_elapsed(report.measured_duration),
                FormatUtils::format_elapsed(report.intended_duration)
            );
            info!("⚡ Average rate: {}", report.format_hashrate());

            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Estimated Hash Rate: {:.2} hashes per second",
                    report.hashes_per_second
                );
            }
        }
        Err(EstimatorError::DigestUnavailable) => {
            // Degrade to a zero rate rather than a non-zero exit
            warn!("⚠️ SHA-256 unavailable on this host, reporting zero rate");
            println!("Estimated Hash Rate: {:.2} hashes per second", 0.0);
        }
        Err(err) => {
            // Configuration errors are caught by Args::validate above, but
            // keep the estimator's own kinds fatal if they ever surface
            eprintln!("❌ Error: {}", err);
            std::process::exit(1);
        }
    }

    Ok(())
}

// Changelog:
// - v1.1.0 (2025-07-18): Added --json report output.
// - v1.0.0 (2025-07-02): Initial CLI entry point.
//   - Default run: 10 trials of 1000 ms, one-line rate summary, exit 0.
