use std::fs::File;
use std::io::BufReader;

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// 全ての語彙が後続として観測されている履歴語（正規化の分母が 0 になる）の扱い。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegenerateBackoffPolicy {
    /// バックオフ重みを 0 として出力し、単語ごとに警告を出す。
    Zero,
    /// 学習をエラーで中断する。
    Fail,
}

/// 学習パラメータ。YAML ファイルから読み込める。
///
/// ```yaml
/// retention: 0.99
/// degenerate_backoff: zero
/// chunk_lines: 100000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// シングルトンを含まない履歴で観測済みの確率質量に掛ける係数 (γ)。
    pub retention: f64,
    pub degenerate_backoff: DegenerateBackoffPolicy,
    /// 並列カウントの 1 チャンクあたりの行数。0 ならシングルスレッドで数える。
    pub chunk_lines: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        TrainingConfig {
            retention: 0.99,
            degenerate_backoff: DegenerateBackoffPolicy::Zero,
            chunk_lines: 0,
        }
    }
}

impl TrainingConfig {
    pub fn load(path: &str) -> Result<TrainingConfig> {
        info!("Loading config: {}", path);
        let file = File::open(path).with_context(|| format!("Config file: {path}"))?;
        let config: TrainingConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("Parsing config: {path}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.retention > 0.0 && self.retention < 1.0) {
            bail!(
                "retention must be between 0 and 1 (exclusive): {}",
                self.retention
            );
        }
        Ok(())
    }
}
