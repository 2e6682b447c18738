//! パフォーマンス測定とベンチマークモジュール
//!
//! 4種類の呼び出し方式の性能比較を提供

pub mod performance_comparison;

pub use performance_comparison::{ComparisonReport, DispatchComparison, DispatchMetrics};
