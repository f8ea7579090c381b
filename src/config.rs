//! Engine configuration.
//!
//! [`EngineConfig`] groups the tunables for the two batch-shaped
//! operations: detection over log batches and the scaling benchmark.
//! Builder methods allow call-site tweaks without spelling out whole
//! structs.

/// Detection pipeline tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionConfig {
    /// Skip log lines the catalog automaton proves clean before running
    /// the per-signature scan.
    pub enable_prefilter: bool,
    /// Process batch lines on the rayon thread pool. Output order and
    /// per-line semantics are unaffected.
    pub enable_parallel: bool,
    /// Minimum batch size before the parallel path is taken.
    pub min_logs_for_parallelism: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            enable_prefilter: true,
            enable_parallel: false,
            min_logs_for_parallelism: 100,
        }
    }
}

/// Benchmark harness tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    /// Text lengths to generate, measured in characters.
    pub text_sizes: Vec<usize>,
    /// Length of the random pattern searched at every size.
    pub pattern_size: usize,
    /// Trials per (size, algorithm); the median is reported.
    pub num_trials: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            text_sizes: vec![100, 500, 1000, 2000, 5000, 10000],
            pattern_size: 5,
            num_trials: 10,
        }
    }
}

/// Comprehensive engine configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Detection pipeline configuration.
    pub detection: DetectionConfig,
    /// Benchmark harness configuration.
    pub benchmark: BenchmarkConfig,
}

impl EngineConfig {
    /// Create a new engine configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for high-throughput log scanning: parallel batches
    /// with a low activation threshold.
    pub fn high_throughput() -> Self {
        Self {
            detection: DetectionConfig {
                enable_prefilter: true,
                enable_parallel: true,
                min_logs_for_parallelism: 50,
            },
            ..Default::default()
        }
    }

    /// Configuration for development and debugging: everything
    /// sequential, no prefilter, so every line takes the observable
    /// scan path.
    pub fn development() -> Self {
        Self {
            detection: DetectionConfig {
                enable_prefilter: false,
                enable_parallel: false,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Enable or disable the catalog prefilter.
    pub fn with_prefilter(mut self, enable: bool) -> Self {
        self.detection.enable_prefilter = enable;
        self
    }

    /// Enable or disable parallel batch detection.
    pub fn with_parallel_detection(mut self, enable: bool) -> Self {
        self.detection.enable_parallel = enable;
        self
    }

    /// Set the minimum batch size for the parallel path.
    pub fn with_min_logs_for_parallelism(mut self, min_logs: usize) -> Self {
        self.detection.min_logs_for_parallelism = min_logs;
        self
    }

    /// Set the benchmark text sizes.
    pub fn with_text_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.benchmark.text_sizes = sizes;
        self
    }

    /// Set the benchmark pattern size.
    pub fn with_pattern_size(mut self, size: usize) -> Self {
        self.benchmark.pattern_size = size;
        self
    }

    /// Set the benchmark trial count.
    pub fn with_num_trials(mut self, trials: usize) -> Self {
        self.benchmark.num_trials = trials;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();

        assert!(config.detection.enable_prefilter);
        assert!(!config.detection.enable_parallel);
        assert_eq!(config.detection.min_logs_for_parallelism, 100);

        assert_eq!(
            config.benchmark.text_sizes,
            vec![100, 500, 1000, 2000, 5000, 10000]
        );
        assert_eq!(config.benchmark.pattern_size, 5);
        assert_eq!(config.benchmark.num_trials, 10);
    }

    #[test]
    fn test_high_throughput_config() {
        let config = EngineConfig::high_throughput();

        assert!(config.detection.enable_parallel);
        assert_eq!(config.detection.min_logs_for_parallelism, 50);
    }

    #[test]
    fn test_development_config() {
        let config = EngineConfig::development();

        assert!(!config.detection.enable_prefilter);
        assert!(!config.detection.enable_parallel);
    }

    #[test]
    fn test_builder_methods() {
        let config = EngineConfig::new()
            .with_prefilter(false)
            .with_parallel_detection(true)
            .with_min_logs_for_parallelism(10)
            .with_text_sizes(vec![50, 100])
            .with_pattern_size(3)
            .with_num_trials(7);

        assert!(!config.detection.enable_prefilter);
        assert!(config.detection.enable_parallel);
        assert_eq!(config.detection.min_logs_for_parallelism, 10);
        assert_eq!(config.benchmark.text_sizes, vec![50, 100]);
        assert_eq!(config.benchmark.pattern_size, 3);
        assert_eq!(config.benchmark.num_trials, 7);
    }
}
