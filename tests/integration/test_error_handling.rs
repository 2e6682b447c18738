// エラーハンドリングの統合テスト
use dispatch_bench::cli::{resolve_config, RunOptions};
use dispatch_bench::{verify_loops, BenchConfig, BenchError, BinaryOpFixture};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_loops_beyond_length_rejected_at_configuration() {
    let mut fixture = BinaryOpFixture::new();
    fixture.set_loops(5).unwrap();

    let error = fixture.set_loops(1000).unwrap_err();
    assert!(matches!(
        error,
        BenchError::LoopsOutOfRange {
            loops: 1000,
            length: 500
        }
    ));
    assert!(error.is_recoverable());
    // 拒否された場合は以前の値が維持される
    assert_eq!(fixture.loops(), 5);
}

#[test]
fn test_verify_stops_at_first_invalid_loops() {
    let mut fixture = BinaryOpFixture::with_length(16);
    let result = verify_loops(&mut fixture, &[4, 17, 8]);

    assert!(matches!(result, Err(BenchError::LoopsOutOfRange { loops: 17, .. })));
    assert_eq!(fixture.loops(), 4);
}

#[test]
fn test_config_file_with_invalid_loops() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "length": 10, "loops": [5, 20] }"#).unwrap();

    let result = BenchConfig::load(file.path());
    assert!(matches!(result, Err(BenchError::LoopsOutOfRange { .. })));
}

#[test]
fn test_run_options_with_missing_config_file() {
    let options = RunOptions {
        config: Some(PathBuf::from("/nonexistent/dispatch_bench.json")),
        ..RunOptions::default()
    };

    let error = resolve_config(&options).unwrap_err();
    assert!(error.to_string().contains("/nonexistent/dispatch_bench.json"));
}
