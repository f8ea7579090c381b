//! Boundary tests for the engine's request/response surface.

use sentinel_engine::{
    Algorithm, BenchmarkRequest, DetectRequest, EngineConfig, PatternCatalog, SearchRequest,
    SentinelEngine,
};

fn engine() -> SentinelEngine {
    SentinelEngine::builtin()
}

#[test]
fn test_search_each_algorithm_by_name() {
    for name in ["naive", "kmp", "boyer_moore", "horspool"] {
        let response = engine().search(&SearchRequest {
            text: "the quick brown fox jumps over the lazy dog. A quick fox is hard to catch."
                .to_string(),
            pattern: "quick fox".to_string(),
            algorithm: name.to_string(),
            visualize: false,
        });

        assert!(response.error.is_none(), "{name} errored");
        assert_eq!(response.algorithm, name);
        assert_eq!(response.matches, vec![47]);
    }
}

#[test]
fn test_unknown_algorithm_is_error_response_not_failure() {
    let response = engine().search(&SearchRequest {
        text: "abc".to_string(),
        pattern: "b".to_string(),
        algorithm: "xyz".to_string(),
        visualize: true,
    });

    assert!(response.matches.is_empty());
    assert!(response.visualization_frames.is_empty());
    let error = response.error.expect("error string must be present");
    assert!(!error.is_empty());
    assert!(error.contains("xyz"));
}

#[test]
fn test_visualization_frames_only_when_requested() {
    let without = engine().search(&SearchRequest {
        text: "aaaa".to_string(),
        pattern: "aa".to_string(),
        algorithm: "kmp".to_string(),
        visualize: false,
    });
    assert!(without.visualization_frames.is_empty());

    let with = engine().search(&SearchRequest {
        text: "aaaa".to_string(),
        pattern: "aa".to_string(),
        algorithm: "kmp".to_string(),
        visualize: true,
    });
    assert!(!with.visualization_frames.is_empty());
    assert_eq!(with.matches, without.matches);
}

#[test]
fn test_trace_completeness_via_api() {
    for name in ["naive", "kmp", "boyer_moore", "horspool"] {
        let response = engine().search(&SearchRequest {
            text: "abcabcabc".to_string(),
            pattern: "abc".to_string(),
            algorithm: name.to_string(),
            visualize: true,
        });

        let match_frames = response
            .visualization_frames
            .iter()
            .filter(|f| f.is_match())
            .count();
        assert_eq!(match_frames, response.matches.len(), "{name}");
    }
}

#[test]
fn test_compare_full_set() {
    let results = engine().compare("aaaa", "aa", None);

    assert_eq!(results.len(), 4);
    for (name, response) in &results {
        assert_eq!(response.matches, vec![0, 1, 2], "{name} disagreed");
        assert!(response.error.is_none());
    }
}

#[test]
fn test_compare_subset_and_unknown_names() {
    let names = vec!["horspool".to_string(), "nope".to_string()];
    let results = engine().compare("aaaa", "aa", Some(&names));

    assert_eq!(results.len(), 1);
    assert_eq!(results["horspool"].matches, vec![0, 1, 2]);
}

#[test]
fn test_detect_end_to_end() {
    let request = DetectRequest {
        logs: vec![
            "GET /index.php?id=1' OR '1'='1 HTTP/1.1".to_string(),
            "NORMAL log line".to_string(),
        ],
        algorithm: Algorithm::BoyerMoore,
    };

    let response = engine().detect(&request).unwrap();
    assert_eq!(response.total_detections, 1);
    assert_eq!(response.algorithm_used, "BOYER_MOORE");
    assert_eq!(response.detections[0].pattern, "' OR '1'='1");
    assert!(response.execution_time >= 0.0);
}

#[test]
fn test_detect_with_parallel_config() {
    let config = EngineConfig::high_throughput().with_min_logs_for_parallelism(1);
    let engine = SentinelEngine::with_config(PatternCatalog::builtin(), config);

    let logs: Vec<String> = (0..64)
        .map(|i| format!("request {i} calls system(reboot)"))
        .collect();
    let response = engine
        .detect(&DetectRequest {
            logs,
            algorithm: Algorithm::Naive,
        })
        .unwrap();

    assert_eq!(response.total_detections, 64);
    // Records come back in input order even on the parallel path.
    assert!(response.detections[0].log.starts_with("request 0 "));
    assert!(response.detections[63].log.starts_with("request 63 "));
}

#[test]
fn test_benchmark_request_shape() {
    let response = engine()
        .benchmark(&BenchmarkRequest {
            pattern_size: 3,
            num_trials: 3,
            text_sizes: vec![100, 50, 200],
        })
        .unwrap();

    assert_eq!(response.text_sizes, vec![100, 50, 200]);
    assert_eq!(response.benchmark_results.len(), 4);
    for name in ["naive", "kmp", "boyer_moore", "horspool"] {
        assert_eq!(response.benchmark_results[name].len(), 3);
    }
}

#[test]
fn test_benchmark_rejects_zero_trials() {
    let result = engine().benchmark(&BenchmarkRequest {
        pattern_size: 3,
        num_trials: 0,
        text_sizes: vec![100],
    });
    assert!(result.is_err());
}

#[test]
fn test_response_serialization_shapes() {
    let search = engine().search(&SearchRequest {
        text: "aaaa".to_string(),
        pattern: "aa".to_string(),
        algorithm: "naive".to_string(),
        visualize: true,
    });
    let json = serde_json::to_value(&search).unwrap();
    assert_eq!(json["matches"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["visualization_frames"][0]["type"], "alignment");

    let detect = engine()
        .detect(&DetectRequest {
            logs: vec!["wget http://evil".to_string()],
            algorithm: Algorithm::Kmp,
        })
        .unwrap();
    let json = serde_json::to_value(&detect).unwrap();
    assert_eq!(json["total_detections"], 1);
    assert_eq!(json["detections"][0]["pattern"], "wget");
    assert_eq!(json["detections"][0]["category"], "Command Injection");
}
