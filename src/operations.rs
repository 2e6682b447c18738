//! 計測対象の加算演算
//!
//! 同じ `lhs + rhs` を呼び出し方式ごとに別の型として提供する
//! （ベースラインとクロージャはフィクスチャ側で `+` を直接使う）：
//! - `AddOperation`: トレイトオブジェクト経由で呼ばれる実装
//! - `InlineAddOperation`: ジェネリクス経由で単相化されるゼロサイズ型

use crate::core::BinaryOp;

/// 動的ディスパッチ用の加算演算
#[derive(Debug, Clone, Default)]
pub struct AddOperation;

impl AddOperation {
    pub fn new() -> Self {
        Self
    }
}

impl BinaryOp for AddOperation {
    fn perform(&self, lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }
}

/// 静的ディスパッチ用の加算演算（ゼロサイズ型）
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineAddOperation;

impl BinaryOp for InlineAddOperation {
    #[inline(always)]
    fn perform(&self, lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }
}
