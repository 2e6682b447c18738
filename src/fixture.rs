//! 二項演算ベンチマークのフィクスチャ
//!
//! 2つの入力配列と1つの出力配列を所有し、同じ要素ごとの加算を
//! 4種類の呼び出し方式で実行する。各実行は `output[..loops]` のみを書き換え、
//! それ以降の要素は前回の実行結果のまま残す（計測区間外の余計な処理を避けるため）。

use crate::core::{BenchError, BenchResult, BinaryOp, DispatchStrategy};
use crate::operations::{AddOperation, InlineAddOperation};
use std::hint::black_box;
use tracing::debug;

/// 基準となる配列長
pub const DEFAULT_LENGTH: usize = 500;

/// 基準となるループ回数の組
pub const REFERENCE_LOOPS: [usize; 2] = [5, 500];

/// 二項演算ベンチマークのフィクスチャ
#[derive(Debug, Clone)]
pub struct BinaryOpFixture {
    lhs: Vec<f64>,
    rhs: Vec<f64>,
    output: Vec<f64>,
    loops: usize,
}

impl BinaryOpFixture {
    /// 基準構成（長さ500）のフィクスチャを作成
    pub fn new() -> Self {
        Self::with_length(DEFAULT_LENGTH)
    }

    /// 指定した長さのフィクスチャを作成
    ///
    /// `lhs[i] = i / 10.0`, `rhs[i] = 10.0 - i / 5.0` で決定的に初期化する
    pub fn with_length(length: usize) -> Self {
        let lhs = (0..length).map(|i| i as f64 / 10.0).collect();
        let rhs = (0..length).map(|i| 10.0 - i as f64 / 5.0).collect();
        let loops = REFERENCE_LOOPS[0].min(length);

        debug!(length, loops, "フィクスチャを作成しました");

        Self {
            lhs,
            rhs,
            output: vec![0.0; length],
            loops,
        }
    }

    pub fn len(&self) -> usize {
        self.lhs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lhs.is_empty()
    }

    pub fn loops(&self) -> usize {
        self.loops
    }

    /// ループ回数を設定
    ///
    /// 配列長を超える値は拒否する。実行メソッドはこの不変条件を前提に
    /// スライスするため、ここを迂回した範囲外アクセスはパニックになる
    pub fn set_loops(&mut self, loops: usize) -> BenchResult<()> {
        if loops > self.len() {
            return Err(BenchError::loops_out_of_range(loops, self.len()));
        }
        debug!(loops, "ループ回数を設定しました");
        self.loops = loops;
        Ok(())
    }

    pub fn lhs(&self) -> &[f64] {
        &self.lhs
    }

    pub fn rhs(&self) -> &[f64] {
        &self.rhs
    }

    /// 出力配列全体（`loops` 以降は前回の値が残る）
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// 直近の実行で計算対象となる出力範囲
    pub fn active_output(&self) -> &[f64] {
        &self.output[..self.loops]
    }

    /// 指定した方式で1回実行
    pub fn run(&mut self, strategy: DispatchStrategy) {
        match strategy {
            DispatchStrategy::Baseline => self.run_baseline(),
            DispatchStrategy::Closure => self.run_via_closure(),
            DispatchStrategy::DynamicDispatch => self.run_via_dynamic_dispatch(),
            DispatchStrategy::StaticDispatch => self.run_via_static_dispatch(),
        }
    }

    // ========================================
    // 計測対象の実行メソッド
    // ========================================

    /// 抽象化なしのループ（基準）
    pub fn run_baseline(&mut self) {
        let loops = self.loops;
        let lhs = &self.lhs[..loops];
        let rhs = &self.rhs[..loops];
        let output = &mut self.output[..loops];

        for ((out, &a), &b) in output.iter_mut().zip(lhs).zip(rhs) {
            *out = a + b;
        }
    }

    /// クロージャ経由のループ
    pub fn run_via_closure(&mut self) {
        self.perform_with_closure(|lhs, rhs| lhs + rhs);
    }

    /// トレイトオブジェクト経由のループ
    ///
    /// 演算オブジェクトはループの外で1度だけ生成し、`black_box` で
    /// 最適化による脱仮想化を防ぐ
    pub fn run_via_dynamic_dispatch(&mut self) {
        let op: Box<dyn BinaryOp> = Box::new(AddOperation::new());
        self.perform_dynamic(black_box(op.as_ref()));
    }

    /// ジェネリクス経由のループ
    pub fn run_via_static_dispatch(&mut self) {
        self.perform_static::<InlineAddOperation>();
    }

    // ========================================
    // 呼び出し方式ごとの共通ループ
    // ========================================

    /// 任意のクロージャで要素ごとに演算
    pub fn perform_with_closure<F>(&mut self, function: F)
    where
        F: Fn(f64, f64) -> f64,
    {
        let loops = self.loops;
        let lhs = &self.lhs[..loops];
        let rhs = &self.rhs[..loops];
        let output = &mut self.output[..loops];

        for ((out, &a), &b) in output.iter_mut().zip(lhs).zip(rhs) {
            *out = function(a, b);
        }
    }

    /// 実行時に解決される演算オブジェクトで要素ごとに演算
    pub fn perform_dynamic(&mut self, op: &dyn BinaryOp) {
        let loops = self.loops;
        let lhs = &self.lhs[..loops];
        let rhs = &self.rhs[..loops];
        let output = &mut self.output[..loops];

        for ((out, &a), &b) in output.iter_mut().zip(lhs).zip(rhs) {
            *out = op.perform(a, b);
        }
    }

    /// コンパイル時に解決される演算型で要素ごとに演算
    pub fn perform_static<T>(&mut self)
    where
        T: BinaryOp + Default,
    {
        let loops = self.loops;
        let lhs = &self.lhs[..loops];
        let rhs = &self.rhs[..loops];
        let output = &mut self.output[..loops];
        let op = T::default();

        for ((out, &a), &b) in output.iter_mut().zip(lhs).zip(rhs) {
            *out = op.perform(a, b);
        }
    }

    /// 計算対象範囲を NaN で埋める（検証専用、計測区間では使わない）
    pub(crate) fn poison_active_output(&mut self) {
        let loops = self.loops;
        self.output[..loops].fill(f64::NAN);
    }
}

impl Default for BinaryOpFixture {
    fn default() -> Self {
        Self::new()
    }
}
