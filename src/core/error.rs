// ベンチマークハーネスのカスタムエラー型定義

use super::types::DispatchStrategy;
use thiserror::Error;

/// ベンチマーク固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("ループ回数が範囲外です: loops={loops} (配列長: {length})")]
    LoopsOutOfRange { loops: usize, length: usize },

    #[error("設定エラー: {field} - {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error(
        "計算結果の不一致: {strategy} index={index} expected={expected} actual={actual}"
    )]
    EquivalenceMismatch {
        strategy: DispatchStrategy,
        index: usize,
        expected: f64,
        actual: f64,
    },

    #[error("シリアライズエラー: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/Oエラー: {path} - {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// ベンチマーク処理の結果型
pub type BenchResult<T> = Result<T, BenchError>;

impl BenchError {
    /// ループ回数範囲外エラーの作成
    pub fn loops_out_of_range(loops: usize, length: usize) -> Self {
        Self::LoopsOutOfRange { loops, length }
    }

    /// 設定エラーの作成
    pub fn invalid_configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// I/Oエラーの作成
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 計算結果の不一致は計測そのものが無意味になるため回復不能
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::LoopsOutOfRange { .. } | Self::InvalidConfiguration { .. } => true,
            Self::Io { .. } | Self::Serialization { .. } => true,
            Self::EquivalenceMismatch { .. } => false,
        }
    }
}
