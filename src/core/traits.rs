// ディスパッチ比較のためのトレイト定義
// 計測対象となる二項演算の抽象化インターフェース

use mockall::automock;

/// 二項演算を抽象化するトレイト
///
/// 動的ディスパッチ（`&dyn BinaryOp`）と静的ディスパッチ（ジェネリクス）の
/// 両方から同じ演算を呼び出すための共通インターフェース
#[automock]
pub trait BinaryOp {
    /// 2つのオペランドに演算を適用して結果を返す
    fn perform(&self, lhs: f64, rhs: f64) -> f64;
}
