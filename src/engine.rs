//! Primary engine interface.
//!
//! [`SentinelEngine`] is the boundary object a thin shell (HTTP handler,
//! CLI, ...) talks to. It wraps the matcher set, the detection pipeline,
//! and the benchmark harness behind serializable request/response
//! shapes, and measures wall-clock time for each operation.
//!
//! Error policy at this boundary: an unknown algorithm name is reported
//! inside the response rather than failing the call, so a shell can
//! always render something; batch detection never aborts on a single
//! bad log/pattern pair.

use crate::benchmark;
use crate::catalog::PatternCatalog;
use crate::config::{BenchmarkConfig, EngineConfig};
use crate::error::Result;
use crate::matcher::{self, Algorithm};
use crate::pipeline::{self, DetectionRecord};
use crate::trace::TraceFrame;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// Batch detection request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    /// Log lines, scanned in order.
    pub logs: Vec<String>,
    /// Fallback matcher for signatures that fail the substring fast path.
    pub algorithm: Algorithm,
}

/// Batch detection response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    pub detections: Vec<DetectionRecord>,
    pub total_detections: usize,
    pub total_occurrences: usize,
    /// Wall-clock seconds for the whole batch.
    pub execution_time: f64,
    /// Uppercased algorithm name, for display.
    pub algorithm_used: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Single search request. The algorithm arrives as a string so that an
/// unknown name can be answered with an in-response error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub text: String,
    pub pattern: String,
    pub algorithm: String,
    /// Record trace frames for step-by-step replay.
    pub visualize: bool,
}

/// Single search response. `error` is set (and everything else empty)
/// when the request could not be run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub algorithm: String,
    pub matches: Vec<usize>,
    pub visualization_frames: Vec<TraceFrame>,
    pub execution_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Benchmark request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRequest {
    pub pattern_size: usize,
    pub num_trials: usize,
    pub text_sizes: Vec<usize>,
}

/// Benchmark response; chart rendering is the shell's responsibility.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResponse {
    pub benchmark_results: BTreeMap<String, Vec<f64>>,
    pub text_sizes: Vec<usize>,
}

/// Detection engine over an immutable signature catalog.
pub struct SentinelEngine {
    catalog: PatternCatalog,
    config: EngineConfig,
}

impl SentinelEngine {
    /// Create an engine over `catalog` with default configuration.
    pub fn new(catalog: PatternCatalog) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(catalog: PatternCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// Engine over the builtin attack-signature catalog.
    pub fn builtin() -> Self {
        Self::new(PatternCatalog::builtin())
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one algorithm over one (text, pattern) pair. An unknown
    /// algorithm name yields an error response, never a failure.
    pub fn search(&self, request: &SearchRequest) -> SearchResponse {
        let started = Instant::now();
        match Algorithm::from_name(&request.algorithm) {
            Ok(algorithm) => {
                let outcome =
                    matcher::search(algorithm, &request.text, &request.pattern, request.visualize);
                SearchResponse {
                    algorithm: algorithm.as_str().to_string(),
                    matches: outcome.matches,
                    visualization_frames: outcome.frames,
                    execution_time: started.elapsed().as_secs_f64(),
                    error: None,
                }
            }
            Err(err) => SearchResponse {
                algorithm: request.algorithm.clone(),
                matches: Vec::new(),
                visualization_frames: Vec::new(),
                execution_time: started.elapsed().as_secs_f64(),
                error: Some(err.to_string()),
            },
        }
    }

    /// Run several algorithms over the same (text, pattern) pair and
    /// report each result under its algorithm name. `None` selects all
    /// four; unknown names in an explicit subset are skipped.
    pub fn compare(
        &self,
        text: &str,
        pattern: &str,
        algorithms: Option<&[String]>,
    ) -> BTreeMap<String, SearchResponse> {
        let selected: Vec<Algorithm> = match algorithms {
            Some(names) => names
                .iter()
                .filter_map(|name| Algorithm::from_name(name).ok())
                .collect(),
            None => Algorithm::ALL.to_vec(),
        };

        selected
            .into_iter()
            .map(|algorithm| {
                let request = SearchRequest {
                    text: text.to_string(),
                    pattern: pattern.to_string(),
                    algorithm: algorithm.as_str().to_string(),
                    visualize: false,
                };
                (algorithm.as_str().to_string(), self.search(&request))
            })
            .collect()
    }

    /// Scan a batch of log lines against the catalog.
    pub fn detect(&self, request: &DetectRequest) -> Result<DetectResponse> {
        let started = Instant::now();
        let detections = pipeline::detect_with_config(
            &request.logs,
            &self.catalog,
            request.algorithm,
            &self.config.detection,
        )?;
        let execution_time = started.elapsed().as_secs_f64();

        let total_occurrences: usize = detections.iter().map(|d| d.count).sum();
        let note = (total_occurrences > 1).then(|| {
            "Multiple intrusion attacks detected. Scroll down to find all detections.".to_string()
        });

        Ok(DetectResponse {
            total_detections: detections.len(),
            total_occurrences,
            execution_time,
            algorithm_used: request.algorithm.as_str().to_uppercase(),
            note,
            detections,
        })
    }

    /// Measure algorithm scaling over synthetic inputs.
    pub fn benchmark(&self, request: &BenchmarkRequest) -> Result<BenchmarkResponse> {
        let config = BenchmarkConfig {
            text_sizes: request.text_sizes.clone(),
            pattern_size: request.pattern_size,
            num_trials: request.num_trials,
        };
        let report = benchmark::run(&config)?;
        Ok(BenchmarkResponse {
            benchmark_results: report.results,
            text_sizes: report.text_sizes,
        })
    }
}
