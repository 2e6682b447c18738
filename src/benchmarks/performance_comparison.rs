//! 呼び出し方式ごとのパフォーマンス測定
//!
//! criterion を使わずにプロセス内で手早く比較し、レポートを生成する

use crate::config::BenchConfig;
use crate::core::{BenchError, BenchResult, BinaryOp, DispatchStrategy};
use crate::fixture::BinaryOpFixture;
use crate::operations::{AddOperation, InlineAddOperation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hint::black_box;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// ループ回数ごとのパフォーマンス測定結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchMetrics {
    pub loops: usize,
    pub iterations: usize,
    pub timings: BTreeMap<DispatchStrategy, Duration>,
    pub best_strategy: DispatchStrategy,
    /// ベースラインに対する所要時間の比（ベースラインが0の場合は空）
    pub relative_to_baseline: BTreeMap<DispatchStrategy, f64>,
}

impl DispatchMetrics {
    pub fn new(
        loops: usize,
        iterations: usize,
        timings: BTreeMap<DispatchStrategy, Duration>,
    ) -> Self {
        let best_strategy = timings
            .iter()
            .min_by_key(|(_, elapsed)| **elapsed)
            .map(|(&strategy, _)| strategy)
            .unwrap_or(DispatchStrategy::Baseline);

        let baseline = timings
            .get(&DispatchStrategy::Baseline)
            .map(Duration::as_secs_f64)
            .unwrap_or_default();

        let relative_to_baseline = if baseline > 0.0 {
            timings
                .iter()
                .map(|(&strategy, elapsed)| (strategy, elapsed.as_secs_f64() / baseline))
                .collect()
        } else {
            BTreeMap::new()
        };

        Self {
            loops,
            iterations,
            timings,
            best_strategy,
            relative_to_baseline,
        }
    }

    pub fn get_best_time(&self) -> Duration {
        self.timings
            .get(&self.best_strategy)
            .copied()
            .unwrap_or_default()
    }

    /// 1回の呼び出しあたりの平均時間（ナノ秒）
    pub fn nanos_per_call(&self, strategy: DispatchStrategy) -> Option<f64> {
        if self.iterations == 0 {
            return None;
        }
        self.timings
            .get(&strategy)
            .map(|elapsed| elapsed.as_nanos() as f64 / self.iterations as f64)
    }
}

/// JSONレポートの形式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub timestamp: String,
    pub config: BenchConfig,
    pub dispatch_sizes: BTreeMap<String, usize>,
    pub results: Vec<DispatchMetrics>,
}

/// 呼び出し方式の比較テストスイート
pub struct DispatchComparison {
    config: BenchConfig,
    fixture: BinaryOpFixture,
    results: Vec<DispatchMetrics>,
}

impl DispatchComparison {
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        config.validate()?;
        let fixture = BinaryOpFixture::with_length(config.length);
        Ok(Self {
            config,
            fixture,
            results: Vec::new(),
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn fixture_mut(&mut self) -> &mut BinaryOpFixture {
        &mut self.fixture
    }

    pub fn results(&self) -> &[DispatchMetrics] {
        &self.results
    }

    /// 指定したループ回数で全方式を計測
    pub fn benchmark_loops(&mut self, loops: usize) -> BenchResult<DispatchMetrics> {
        self.fixture.set_loops(loops)?;
        let iterations = self.config.iterations;
        let warmup = self.config.warmup_iterations;

        println!("🔬 二項演算ディスパッチ比較 (loops={loops}, {iterations} iterations)");
        info!(loops, iterations, warmup, "計測を開始します");

        let mut timings = BTreeMap::new();
        for strategy in DispatchStrategy::ALL {
            let elapsed = match strategy {
                DispatchStrategy::Baseline => {
                    self.time_runs(BinaryOpFixture::run_baseline, iterations, warmup)
                }
                DispatchStrategy::Closure => {
                    self.time_runs(BinaryOpFixture::run_via_closure, iterations, warmup)
                }
                DispatchStrategy::DynamicDispatch => self.time_runs(
                    BinaryOpFixture::run_via_dynamic_dispatch,
                    iterations,
                    warmup,
                ),
                DispatchStrategy::StaticDispatch => self.time_runs(
                    BinaryOpFixture::run_via_static_dispatch,
                    iterations,
                    warmup,
                ),
            };
            debug!(%strategy, loops, ?elapsed, "計測完了");
            println!("  ⏱️  {strategy}: {elapsed:?}");
            timings.insert(strategy, elapsed);
        }

        let metrics = DispatchMetrics::new(loops, iterations, timings);
        println!(
            "  🏆 Best: {} ({:?})",
            metrics.best_strategy,
            metrics.get_best_time()
        );

        self.results.push(metrics.clone());
        Ok(metrics)
    }

    fn time_runs<F>(&mut self, mut run: F, iterations: usize, warmup: usize) -> Duration
    where
        F: FnMut(&mut BinaryOpFixture),
    {
        for _ in 0..warmup {
            run(&mut self.fixture);
        }

        let start = Instant::now();
        for _ in 0..iterations {
            run(&mut self.fixture);
            black_box(self.fixture.output());
        }
        start.elapsed()
    }

    /// 設定された全てのループ回数で比較を実行
    pub fn run_full_comparison(&mut self) -> BenchResult<()> {
        println!("🚀 二項演算ディスパッチ方式の比較");
        println!("{}", "=".repeat(60));

        let loops = self.config.loops.clone();
        for n in loops {
            self.benchmark_loops(n)?;
            println!();
        }

        self.print_summary();
        Ok(())
    }

    /// 結果サマリーの表示
    pub fn print_summary(&self) {
        println!("📊 パフォーマンス比較サマリー");
        println!("{}", "=".repeat(60));

        for metrics in &self.results {
            println!("🎯 loops = {}", metrics.loops);
            for (strategy, elapsed) in &metrics.timings {
                let per_call = metrics.nanos_per_call(*strategy).unwrap_or_default();
                let elapsed = format!("{elapsed:?}");
                match metrics.relative_to_baseline.get(strategy) {
                    Some(ratio) => println!(
                        "   {strategy:<18} {elapsed:>12}  {per_call:>10.2} ns/call  x{ratio:.2}"
                    ),
                    None => println!("   {strategy:<18} {elapsed:>12}  {per_call:>10.2} ns/call"),
                }
            }
            println!(
                "   🏆 Best: {} ({:?})",
                metrics.best_strategy,
                metrics.get_best_time()
            );
            println!();
        }
    }

    /// 演算オブジェクトのサイズ（ディスパッチ方式ごと）
    pub fn dispatch_sizes() -> BTreeMap<String, usize> {
        let mut sizes = BTreeMap::new();
        sizes.insert(
            "dynamic_dispatch".to_string(),
            std::mem::size_of::<AddOperation>(),
        );
        sizes.insert(
            "dynamic_dispatch_handle".to_string(),
            std::mem::size_of::<Box<dyn BinaryOp>>(),
        );
        sizes.insert(
            "static_dispatch".to_string(),
            std::mem::size_of::<InlineAddOperation>(),
        );
        sizes
    }

    /// JSON形式でのレポート生成
    pub fn build_report(&self) -> ComparisonReport {
        ComparisonReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            config: self.config.clone(),
            dispatch_sizes: Self::dispatch_sizes(),
            results: self.results.clone(),
        }
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &std::path::Path) -> BenchResult<()> {
        let json = serde_json::to_string_pretty(&self.build_report())?;
        std::fs::write(path, json).map_err(|e| BenchError::io(path.display().to_string(), e))?;

        println!("📄 詳細レポートを出力しました: {}", path.display());
        Ok(())
    }
}
