use crate::benchmarks::DispatchComparison;
use crate::config::BenchConfig;
use crate::verification::verify_loops;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// Configuration struct for run command to reduce argument count
#[derive(Debug, Default)]
pub struct RunOptions {
    pub loops: Vec<usize>,
    pub iterations: Option<usize>,
    pub warmup: Option<usize>,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub skip_verify: bool,
}

/// Merge the optional config file with command-line overrides
pub fn resolve_config(options: &RunOptions) -> Result<BenchConfig> {
    let mut config = match &options.config {
        Some(path) => BenchConfig::load(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?,
        None => BenchConfig::default(),
    };

    if !options.loops.is_empty() {
        config = config.with_loops(options.loops.clone());
    }
    if let Some(iterations) = options.iterations {
        config = config.with_iterations(iterations);
    }
    if let Some(warmup) = options.warmup {
        config = config.with_warmup_iterations(warmup);
    }

    config.validate().context("設定が不正です")?;
    Ok(config)
}

/// Execute run command
pub fn execute_run(options: RunOptions) -> Result<()> {
    let config = resolve_config(&options)?;

    println!("⚙️  設定:");
    println!("   - 配列長: {}", config.length);
    println!("   - ループ回数: {:?}", config.loops);
    println!("   - 計測回数: {}", config.iterations);
    println!("   - ウォームアップ: {}", config.warmup_iterations);

    let mut comparison = DispatchComparison::new(config.clone())?;

    if options.skip_verify {
        warn!("計算結果の検証をスキップします");
    } else {
        let reports = verify_loops(comparison.fixture_mut(), &config.loops)
            .context("計算結果の検証に失敗しました")?;
        println!("✅ {}通りのループ回数で全方式の結果が一致しました", reports.len());
    }

    comparison.run_full_comparison()?;

    if let Some(path) = &options.output {
        comparison
            .export_json_report(path)
            .with_context(|| format!("レポートを書き込めません: {}", path.display()))?;
    }

    info!(results = comparison.results().len(), "計測が完了しました");
    Ok(())
}
