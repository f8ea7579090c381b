//! # Sentinel Detection Engine
//!
//! A Rust library for detecting intrusion attempts in log batches using
//! exact string-matching algorithms, each instrumented to emit a
//! deterministic, replayable trace of its internal decisions.
//!
//! Four algorithms — naive scan, Knuth-Morris-Pratt, Boyer-Moore
//! (bad-character rule), and Horspool — share one contract and return
//! identical match offsets for any input; they differ only in comparison
//! order and shift strategy, which the trace makes visible. On top of
//! them sit a prioritized attack-signature catalog, a first-match-wins
//! detection pipeline, and a benchmark harness measuring scaling
//! behavior over synthetic inputs.
//!
//! ## Quick Start
//!
//! ### Searching
//!
//! ```rust,ignore
//! use sentinel_engine::{search, Algorithm};
//!
//! let outcome = search(Algorithm::BoyerMoore, "aaaa", "aa", true);
//! assert_eq!(outcome.matches, vec![0, 1, 2]);
//! for frame in &outcome.frames {
//!     println!("{}: {}", frame.kind(), frame.message());
//! }
//! ```
//!
//! ### Detecting intrusions
//!
//! ```rust,ignore
//! use sentinel_engine::{Algorithm, DetectRequest, SentinelEngine};
//!
//! let engine = SentinelEngine::builtin();
//! let response = engine.detect(&DetectRequest {
//!     logs: vec!["GET /index.php?id=1' OR '1'='1 HTTP/1.1".to_string()],
//!     algorithm: Algorithm::Kmp,
//! })?;
//!
//! for detection in &response.detections {
//!     println!("{} -> {}", detection.pattern, detection.category);
//! }
//! # Ok::<(), sentinel_engine::SentinelError>(())
//! ```
//!
//! ### Benchmarking
//!
//! ```rust,ignore
//! use sentinel_engine::{BenchmarkRequest, SentinelEngine};
//!
//! let engine = SentinelEngine::builtin();
//! let response = engine.benchmark(&BenchmarkRequest {
//!     pattern_size: 5,
//!     num_trials: 10,
//!     text_sizes: vec![100, 500, 1000],
//! })?;
//!
//! for (algorithm, medians) in &response.benchmark_results {
//!     println!("{algorithm}: {medians:?}");
//! }
//! # Ok::<(), sentinel_engine::SentinelError>(())
//! ```

pub mod benchmark;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod pipeline;
pub mod prefilter;
pub mod trace;

// Primary engine interface
pub use engine::{
    BenchmarkRequest, BenchmarkResponse, DetectRequest, DetectResponse, SearchRequest,
    SearchResponse, SentinelEngine,
};

// Core types and errors
pub use catalog::{AttackCategory, PatternCatalog};
pub use config::{BenchmarkConfig, DetectionConfig, EngineConfig};
pub use error::{Result, SentinelError};

// Matcher set
pub use matcher::{search, Algorithm, SearchOutcome};

// Detection pipeline
pub use pipeline::{detect, detect_with_config, read_log_lines, DetectionRecord};

// Tracing and prefiltering collaborators
pub use benchmark::BenchmarkReport;
pub use prefilter::SignaturePrefilter;
pub use trace::{TraceFrame, TraceRecorder};
