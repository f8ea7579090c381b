//! Benchmark harness measuring how each algorithm scales with text size.
//!
//! For each requested size one random lowercase-alphabet text and one
//! random pattern are generated and shared by every algorithm and every
//! trial, so all four algorithms face identical inputs. Tracing is
//! disabled during timing; trials run sequentially and the median
//! elapsed time per (size, algorithm) is reported.

use crate::config::BenchmarkConfig;
use crate::error::{Result, SentinelError};
use crate::matcher::{self, Algorithm};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

/// Per-algorithm median times aligned 1:1 with the sizes actually run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    /// Algorithm wire name to median elapsed seconds, one entry per
    /// text size.
    pub results: BTreeMap<String, Vec<f64>>,
    /// The sizes that were run, in request order. A requested size of 0
    /// is skipped as degenerate; everything else is kept.
    pub text_sizes: Vec<usize>,
}

/// Run the scaling benchmark described by `config`.
pub fn run(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    if config.num_trials == 0 {
        return Err(SentinelError::InvalidBenchmarkSpec(
            "num_trials must be at least 1".to_string(),
        ));
    }
    if config.pattern_size == 0 {
        return Err(SentinelError::InvalidBenchmarkSpec(
            "pattern_size must be at least 1".to_string(),
        ));
    }

    let mut rng = rand::thread_rng();
    let mut results: BTreeMap<String, Vec<f64>> = Algorithm::ALL
        .iter()
        .map(|a| (a.as_str().to_string(), Vec::new()))
        .collect();
    let mut text_sizes = Vec::with_capacity(config.text_sizes.len());

    for &size in &config.text_sizes {
        if size == 0 {
            tracing::warn!("skipping degenerate text size 0");
            continue;
        }

        // One input pair per size, shared across algorithms and trials.
        let text = random_lowercase(&mut rng, size);
        let pattern = random_lowercase(&mut rng, config.pattern_size);

        for algorithm in Algorithm::ALL {
            let mut times = Vec::with_capacity(config.num_trials);
            for _ in 0..config.num_trials {
                let start = Instant::now();
                matcher::search(algorithm, &text, &pattern, false);
                times.push(start.elapsed().as_secs_f64());
            }
            if let Some(series) = results.get_mut(algorithm.as_str()) {
                series.push(median(&mut times));
            }
        }
        text_sizes.push(size);
    }

    Ok(BenchmarkReport { results, text_sizes })
}

fn random_lowercase(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
        .collect()
}

fn median(times: &mut [f64]) -> f64 {
    times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    times[times.len() / 2]
}
