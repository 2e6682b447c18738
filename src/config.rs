// ベンチマーク設定
// JSONファイルから読み込み、CLI引数で上書きする

use crate::core::{BenchError, BenchResult};
use crate::fixture::{DEFAULT_LENGTH, REFERENCE_LOOPS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// ベンチマーク設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// 入出力配列の長さ
    pub length: usize,
    /// 計測するループ回数の組
    pub loops: Vec<usize>,
    /// 方式ごとの計測呼び出し回数
    pub iterations: usize,
    /// 計測前のウォームアップ呼び出し回数
    pub warmup_iterations: usize,
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_loops(mut self, loops: Vec<usize>) -> Self {
        self.loops = loops;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_warmup_iterations(mut self, warmup_iterations: usize) -> Self {
        self.warmup_iterations = warmup_iterations;
        self
    }

    /// 設定の妥当性をチェック
    pub fn validate(&self) -> BenchResult<()> {
        if self.length == 0 {
            return Err(BenchError::invalid_configuration(
                "length",
                "配列長は1以上である必要があります",
            ));
        }
        if self.loops.is_empty() {
            return Err(BenchError::invalid_configuration(
                "loops",
                "ループ回数を1つ以上指定してください",
            ));
        }
        if let Some(&loops) = self.loops.iter().find(|&&n| n > self.length) {
            warn!(loops, length = self.length, "配列長を超えるループ回数が指定されました");
            return Err(BenchError::loops_out_of_range(loops, self.length));
        }
        if self.iterations == 0 {
            return Err(BenchError::invalid_configuration(
                "iterations",
                "計測回数は1以上である必要があります",
            ));
        }
        Ok(())
    }

    /// JSONから設定をデシリアライズ
    pub fn from_json(json: &str) -> BenchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 設定をJSONにシリアライズ
    pub fn to_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 設定ファイルを読み込む
    pub fn load(path: &Path) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BenchError::io(path.display().to_string(), e))?;
        let config = Self::from_json(&content)?;
        debug!(path = %path.display(), ?config, "設定ファイルを読み込みました");
        Ok(config)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            loops: REFERENCE_LOOPS.to_vec(),
            iterations: 100_000,
            warmup_iterations: 1_000,
        }
    }
}
