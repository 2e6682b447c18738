// パフォーマンス関連の統合テスト
use dispatch_bench::benchmarks::DispatchComparison;
use dispatch_bench::{BenchConfig, DispatchStrategy};
use std::time::Duration;

fn quick_comparison(loops: Vec<usize>) -> DispatchComparison {
    let config = BenchConfig::new()
        .with_loops(loops)
        .with_iterations(100)
        .with_warmup_iterations(10);
    DispatchComparison::new(config).unwrap()
}

#[test]
fn test_full_comparison_covers_all_loops_and_strategies() {
    let mut comparison = quick_comparison(vec![5, 500]);
    comparison.run_full_comparison().unwrap();

    let results = comparison.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].loops, 5);
    assert_eq!(results[1].loops, 500);

    for metrics in results {
        for strategy in DispatchStrategy::ALL {
            assert!(metrics.timings.contains_key(&strategy));
        }
    }
}

#[test]
fn test_report_serializes_strategy_keys() {
    let mut comparison = quick_comparison(vec![5]);
    comparison.run_full_comparison().unwrap();

    let report = comparison.build_report();
    let json = serde_json::to_value(&report).unwrap();
    let timings = &json["results"][0]["timings"];

    assert!(timings.get("baseline").is_some());
    assert!(timings.get("closure").is_some());
    assert!(timings.get("dynamic_dispatch").is_some());
    assert!(timings.get("static_dispatch").is_some());
    assert_eq!(json["dispatch_sizes"]["static_dispatch"], 0);
}

#[test]
fn test_larger_loops_take_measurable_time() {
    let mut comparison = quick_comparison(vec![500]);
    let metrics = comparison.benchmark_loops(500).unwrap();

    // 100回 × 500要素の計測が完全にゼロになることはない
    let total: Duration = metrics.timings.values().sum();
    assert!(total > Duration::ZERO);
}
