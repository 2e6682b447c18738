// ディスパッチ方式に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 二項演算の呼び出し方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStrategy {
    /// 抽象化なしでループ内に演算を直接記述
    Baseline,
    /// クロージャ経由で演算を呼び出し
    Closure,
    /// トレイトオブジェクト経由（実行時解決）
    DynamicDispatch,
    /// ジェネリクス経由（コンパイル時解決）
    StaticDispatch,
}

impl DispatchStrategy {
    /// 全ての方式（計測・表示順）
    pub const ALL: [DispatchStrategy; 4] = [
        Self::Baseline,
        Self::Closure,
        Self::DynamicDispatch,
        Self::StaticDispatch,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Closure => "closure",
            Self::DynamicDispatch => "dynamic_dispatch",
            Self::StaticDispatch => "static_dispatch",
        }
    }

    /// 比較の基準となる方式かどうか
    pub const fn is_baseline(&self) -> bool {
        matches!(self, Self::Baseline)
    }
}

impl fmt::Display for DispatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
