//! 呼び出し方式間の計算結果の一致検証
//!
//! タイミングを信頼する前に、4つの方式が `lhs[i] + rhs[i]` と
//! ビット単位で同じ値を書き込むことを確認する

use crate::core::{BenchError, BenchResult, DispatchStrategy};
use crate::fixture::BinaryOpFixture;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// 検証結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub loops: usize,
    pub length: usize,
    pub strategies: Vec<DispatchStrategy>,
}

/// 現在の `loops` で全方式の計算結果を検証
///
/// 各方式の実行前に計算対象範囲を NaN で埋めるため、書き込みを
/// 行わない実装も検出できる。`loops` 以降の要素には触れない
pub fn verify_equivalence(fixture: &mut BinaryOpFixture) -> BenchResult<VerificationReport> {
    let loops = fixture.loops();
    let expected: Vec<f64> = fixture
        .lhs()
        .iter()
        .zip(fixture.rhs())
        .take(loops)
        .map(|(a, b)| a + b)
        .collect();

    for strategy in DispatchStrategy::ALL {
        fixture.poison_active_output();
        fixture.run(strategy);

        let mismatch = fixture
            .active_output()
            .iter()
            .zip(&expected)
            .position(|(actual, expected)| actual.to_bits() != expected.to_bits());

        if let Some(index) = mismatch {
            return Err(BenchError::EquivalenceMismatch {
                strategy,
                index,
                expected: expected[index],
                actual: fixture.active_output()[index],
            });
        }
        debug!(%strategy, loops, "計算結果が一致しました");
    }

    info!(loops, length = fixture.len(), "全方式の計算結果が一致しました");

    Ok(VerificationReport {
        loops,
        length: fixture.len(),
        strategies: DispatchStrategy::ALL.to_vec(),
    })
}

/// 複数のループ回数について検証
pub fn verify_loops(
    fixture: &mut BinaryOpFixture,
    loops: &[usize],
) -> BenchResult<Vec<VerificationReport>> {
    loops
        .iter()
        .map(|&n| {
            fixture.set_loops(n)?;
            verify_equivalence(fixture)
        })
        .collect()
}
