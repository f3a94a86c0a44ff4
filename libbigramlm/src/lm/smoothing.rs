use log::debug;

use crate::lm::history_index::{BigramEntry, HistoryIndex};
use crate::wordcnt::WordCounts;

/// コーパス全体での count-of-counts。履歴ごとではなく全 bigram について数える。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GoodTuringStats {
    /// ちょうど 1 回出現した bigram の種類数
    pub n1: u64,
    /// ちょうど 2 回出現した bigram の種類数
    pub n2: u64,
}

impl GoodTuringStats {
    pub fn from_index(index: &HistoryIndex) -> GoodTuringStats {
        let mut stats = GoodTuringStats::default();
        for entry in index.entries() {
            match entry.count {
                1 => stats.n1 += 1,
                2 => stats.n2 += 1,
                _ => {}
            }
        }
        stats
    }

    /// 一度だけ出現した bigram の Good-Turing 再推定値 2·n2 / (n1·count(h))。
    ///
    /// n1 == 0 では定義できないので None を返す。呼び出し側は γ 割引に切り替える。
    /// 再推定値は生の確率を上回ることもあり、その場合は履歴の確率の和が 1 以上になる。
    pub fn singleton_estimate(&self, history_count: u32) -> Option<f64> {
        if self.n1 == 0 || history_count == 0 {
            return None;
        }
        Some((2.0 * self.n2 as f64) / (self.n1 as f64 * history_count as f64))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingBranch {
    /// 観測済みの全ての後続に γ を掛ける。
    Retention,
    /// シングルトンの後続だけを Good-Turing 再推定値で置き換える。
    GoodTuring,
}

/// 平滑化前後の bigram 確率。どちらも `HistoryIndex` と同じ並び。
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedBigrams {
    pub raw: Vec<f64>,
    pub smoothed: Vec<f64>,
}

pub struct Smoother {
    retention: f64,
    stats: GoodTuringStats,
}

impl Smoother {
    pub fn new(retention: f64, stats: GoodTuringStats) -> Smoother {
        Smoother { retention, stats }
    }

    pub fn retention(&self) -> f64 {
        self.retention
    }

    pub fn stats(&self) -> GoodTuringStats {
        self.stats
    }

    /// 履歴語の後続一覧からどちらの平滑化を使うか決める。
    pub fn branch(&self, history_count: u32, continuations: &[BigramEntry]) -> SmoothingBranch {
        let has_singleton = continuations.iter().any(|e| e.count == 1);
        if has_singleton && self.stats.singleton_estimate(history_count).is_some() {
            SmoothingBranch::GoodTuring
        } else {
            SmoothingBranch::Retention
        }
    }

    pub fn smooth(&self, counts: &WordCounts, index: &HistoryIndex, raw: Vec<f64>) -> SmoothedBigrams {
        let mut smoothed = raw.clone();
        let entries = index.entries();

        for (history, range) in index.runs() {
            let history_count = counts.unigram_count(history).unwrap_or(0);
            let continuations = &entries[range.clone()];
            match self.branch(history_count, continuations) {
                SmoothingBranch::Retention => {
                    for p in &mut smoothed[range] {
                        *p *= self.retention;
                    }
                }
                SmoothingBranch::GoodTuring => {
                    // branch() が GoodTuring を返すのは再推定値がある場合だけ。
                    let Some(estimate) = self.stats.singleton_estimate(history_count) else {
                        continue;
                    };
                    for (entry, p) in continuations.iter().zip(&mut smoothed[range]) {
                        if entry.count == 1 {
                            *p = estimate;
                        }
                    }
                    debug!("Good-Turing: {} -> {}", history, estimate);
                }
            }
        }

        SmoothedBigrams { raw, smoothed }
    }
}
