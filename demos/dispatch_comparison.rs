//! 二項演算ディスパッチ方式のパフォーマンス比較実行例
//!
//! 使用方法:
//! ```
//! cargo run --release --example dispatch_comparison
//! ```

use dispatch_bench::{benchmarks::DispatchComparison, verify_loops, BenchConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 二項演算ディスパッチ比較");
    println!("ベースライン / クロージャ / 動的ディスパッチ / 静的ディスパッチ の性能測定を開始します...\n");

    let config = BenchConfig::default().with_iterations(200_000);
    let mut comparison = DispatchComparison::new(config.clone())?;

    verify_loops(comparison.fixture_mut(), &config.loops)?;
    comparison.run_full_comparison()?;

    // レポートをJSONで出力
    let report_path = std::path::Path::new("dispatch_report.json");
    match comparison.export_json_report(report_path) {
        Ok(()) => println!("\n✅ 詳細レポートが {} に出力されました", report_path.display()),
        Err(e) => eprintln!("⚠️  レポート出力エラー: {e}"),
    }

    println!("\n🎯 パフォーマンス比較完了！");

    Ok(())
}
