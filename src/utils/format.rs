// HashGauge - Free and Open Source Software Statement
//
// This project, hashgauge, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/utils/format.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file provides utility functions for formatting estimator output,
// located in the utils subdirectory. It formats hashrate, elapsed spans,
// and numbers for consistent output in logs and displays.
//
// Tree Location:
// - src/utils/format.rs (formatting utilities)
// - Depends on: std

use std::time::Duration;

/// Utility functions for formatting estimator statistics
pub struct FormatUtils;

impl FormatUtils {
    /// Format hashrate in appropriate units (H/s, KH/s, MH/s, GH/s)
    pub fn format_hashrate(hashrate: f64) -> String {
        if hashrate >= 1_000_000_000.0 {
            format!("{:.2} GH/s", hashrate / 1_000_000_000.0)
        } else if hashrate >= 1_000_000.0 {
            format!("{:.2} MH/s", hashrate / 1_000_000.0)
        } else if hashrate >= 1_000.0 {
            format!("{:.2} KH/s", hashrate / 1_000.0)
        } else {
            format!("{:.2} H/s", hashrate)
        }
    }

    /// Format an elapsed span for human-readable output
    pub fn format_elapsed(duration: Duration) -> String {
        let secs = duration.as_secs_f64();
        if secs < 60.0 {
            format!("{:.2}s", secs)
        } else if secs < 3600.0 {
            format!("{}m {:02}s", duration.as_secs() / 60, duration.as_secs() % 60)
        } else {
            format!("{}h {:02}m", duration.as_secs() / 3600, (duration.as_secs() % 3600) / 60)
        }
    }

    /// Format large numbers with suffixes (K, M, B)
    pub fn format_number(num: u64) -> String {
        if num >= 1_000_000_000 {
            format!("{:.1}B", num as f64 / 1_000_000_000.0)
        } else if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashrate_units() {
        assert_eq!(FormatUtils::format_hashrate(1.0), "1.00 H/s");
        assert_eq!(FormatUtils::format_hashrate(1_500.0), "1.50 KH/s");
        assert_eq!(FormatUtils::format_hashrate(2_000_000.0), "2.00 MH/s");
        assert_eq!(FormatUtils::format_hashrate(3_000_000_000.0), "3.00 GH/s");
    }

    #[test]
    fn test_elapsed_spans() {
        assert_eq!(FormatUtils::format_elapsed(Duration::from_millis(1500)), "1.50s");
        assert_eq!(FormatUtils::format_elapsed(Duration::from_secs(125)), "2m 05s");
        assert_eq!(FormatUtils::format_elapsed(Duration::from_secs(3660)), "1h 01m");
    }

    #[test]
    fn test_number_suffixes() {
        assert_eq!(FormatUtils::format_number(999), "999");
        assert_eq!(FormatUtils::format_number(12_000), "12.0K");
        assert_eq!(FormatUtils::format_number(3_400_000), "3.4M");
    }
}

// Changelog:
// - v1.0.0 (2025-07-02): Initial formatting utilities.
//   - Hashrate units, elapsed spans, and K/M/B number suffixes for logs.
