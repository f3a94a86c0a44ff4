use std::time::Instant;

use anyhow::{bail, Result};
use log::{info, warn};

use crate::config::{DegenerateBackoffPolicy, TrainingConfig};
use crate::lm::backoff::{BackoffWeight, BackoffWeightCalculator};
use crate::lm::estimator::ProbabilityEstimator;
use crate::lm::history_index::HistoryIndex;
use crate::lm::smoothing::{GoodTuringStats, Smoother};
use crate::tokenizer::CorpusTokenizer;
use crate::wordcnt::wordcnt_bigram::BigramKey;
use crate::wordcnt::WordCounts;

#[derive(Debug, Clone, PartialEq)]
pub struct UnigramRecord {
    pub word: String,
    pub count: u32,
    pub probability: f64,
    pub backoff: BackoffWeight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BigramRecord {
    pub key: BigramKey,
    pub count: u32,
    /// count(w1, w2) / count(w1)
    pub raw_probability: f64,
    /// 平滑化後の確率。出力されるのはこちら。
    pub probability: f64,
}

/// 学習済みのバックオフ付き bigram 言語モデル。
///
/// unigrams / bigrams はどちらも辞書順に並んでいるので、
/// 同じ入力からは常に同じ順序で出力される。
#[derive(Debug, Clone)]
pub struct BigramLanguageModel {
    unigrams: Vec<UnigramRecord>,
    bigrams: Vec<BigramRecord>,
    stats: GoodTuringStats,
    total_words: u64,
}

impl BigramLanguageModel {
    pub fn from_lines<T, S>(tokenizer: &T, lines: &[S], config: &TrainingConfig) -> Result<Self>
    where
        T: CorpusTokenizer + Sync,
        S: AsRef<str> + Sync,
    {
        let t = Instant::now();
        let counts = if config.chunk_lines > 0 {
            WordCounts::count_lines_parallel(tokenizer, lines, config.chunk_lines)
        } else {
            WordCounts::count_lines(tokenizer, lines)
        };
        info!(
            "Counted {} words ({} unique, {} bigrams) in {:?}",
            counts.total_words(),
            counts.unigram.unique_words(),
            counts.bigram.len(),
            t.elapsed()
        );
        Self::train(&counts, config)
    }

    pub fn train(counts: &WordCounts, config: &TrainingConfig) -> Result<Self> {
        config.validate()?;

        let t = Instant::now();
        let index = HistoryIndex::build(&counts.bigram);
        info!("Built history index: {} bigrams in {:?}", index.len(), t.elapsed());

        let t = Instant::now();
        let estimator = ProbabilityEstimator::new(counts, &index);
        let stats = GoodTuringStats::from_index(&index);
        info!("Good-Turing stats: n1={} n2={}", stats.n1, stats.n2);
        let smoother = Smoother::new(config.retention, stats);
        let smoothed = smoother.smooth(counts, &index, estimator.raw_bigram_probabilities()?);
        info!("Smoothed bigram probabilities in {:?}", t.elapsed());

        let t = Instant::now();
        let calculator =
            BackoffWeightCalculator::new(counts, &index, &estimator, &smoother, &smoothed);
        let mut unigrams: Vec<UnigramRecord> = Vec::with_capacity(counts.unigram.unique_words());
        for (word, count) in counts.unigram.iter() {
            let backoff = calculator.weight(word);
            if let BackoffWeight::Degenerate { reserved_mass } = backoff {
                match config.degenerate_backoff {
                    DegenerateBackoffPolicy::Fail => bail!(
                        "Cannot normalize back-off weight for '{}': every word in the vocabulary follows it",
                        word
                    ),
                    DegenerateBackoffPolicy::Zero => warn!(
                        "Degenerate back-off weight for '{}' (reserved mass {}); writing 0",
                        word, reserved_mass
                    ),
                }
            }
            unigrams.push(UnigramRecord {
                word: word.to_string(),
                count,
                probability: estimator.unigram_probability(word),
                backoff,
            });
        }
        unigrams.sort_by(|a, b| a.word.cmp(&b.word));
        info!("Computed {} back-off weights in {:?}", unigrams.len(), t.elapsed());

        let bigrams = index
            .entries()
            .iter()
            .zip(smoothed.raw.iter().zip(&smoothed.smoothed))
            .map(|(entry, (raw, smoothed))| BigramRecord {
                key: entry.key.clone(),
                count: entry.count,
                raw_probability: *raw,
                probability: *smoothed,
            })
            .collect();

        Ok(BigramLanguageModel {
            unigrams,
            bigrams,
            stats,
            total_words: counts.total_words(),
        })
    }

    pub fn unigrams(&self) -> &[UnigramRecord] {
        &self.unigrams
    }

    pub fn bigrams(&self) -> &[BigramRecord] {
        &self.bigrams
    }

    pub fn unigram(&self, word: &str) -> Option<&UnigramRecord> {
        self.unigrams
            .binary_search_by(|r| r.word.as_str().cmp(word))
            .ok()
            .map(|i| &self.unigrams[i])
    }

    pub fn bigram(&self, first: &str, second: &str) -> Option<&BigramRecord> {
        self.bigrams
            .binary_search_by(|r| {
                r.key
                    .first
                    .as_str()
                    .cmp(first)
                    .then_with(|| r.key.second.as_str().cmp(second))
            })
            .ok()
            .map(|i| &self.bigrams[i])
    }

    pub fn good_turing_stats(&self) -> GoodTuringStats {
        self.stats
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// バックオフ重みを正規化できなかった履歴語。
    pub fn degenerate_histories(&self) -> Vec<&str> {
        self.unigrams
            .iter()
            .filter(|r| r.backoff.is_degenerate())
            .map(|r| r.word.as_str())
            .collect()
    }
}
