use anyhow::anyhow;

use crate::lm::history_index::HistoryIndex;
use crate::wordcnt::WordCounts;

/// 最尤推定による unigram / bigram 確率。
pub struct ProbabilityEstimator<'a> {
    counts: &'a WordCounts,
    index: &'a HistoryIndex,
}

impl<'a> ProbabilityEstimator<'a> {
    pub fn new(counts: &'a WordCounts, index: &'a HistoryIndex) -> ProbabilityEstimator<'a> {
        ProbabilityEstimator { counts, index }
    }

    /// count(w) / 総単語数。未知語は 0。
    pub fn unigram_probability(&self, word: &str) -> f64 {
        let total = self.counts.total_words();
        match self.counts.unigram_count(word) {
            Some(cnt) if total > 0 => cnt as f64 / total as f64,
            _ => 0.0,
        }
    }

    /// count(h, w) / count(h)
    pub fn bigram_probability(&self, history: &str, word: &str) -> Option<f64> {
        let cnt = self.counts.bigram_count(history, word)?;
        let history_cnt = self.counts.unigram_count(history)?;
        Some(cnt as f64 / history_cnt as f64)
    }

    /// インデックスと同じ並びの生の bigram 確率。
    ///
    /// bigram の first が unigram として数えられていない場合は集計の不整合としてエラーにする。
    pub fn raw_bigram_probabilities(&self) -> anyhow::Result<Vec<f64>> {
        self.index
            .entries()
            .iter()
            .map(|e| {
                let history_cnt = self.counts.unigram_count(&e.key.first).ok_or_else(|| {
                    anyhow!("Bigram '{}' has no unigram count for its history", e.key)
                })?;
                Ok(e.count as f64 / history_cnt as f64)
            })
            .collect()
    }

    /// `history` の後に一度でも出現した単語の unigram 確率の和。
    ///
    /// バックオフ重みの正規化に使う。bigram 確率（平滑化後のものも含む）は読まない。
    pub fn mle_continuation_mass(&self, history: &str) -> f64 {
        self.index
            .continuations(history)
            .iter()
            .map(|e| self.unigram_probability(&e.key.second))
            .sum()
    }
}
