use crate::lm::estimator::ProbabilityEstimator;
use crate::lm::history_index::HistoryIndex;
use crate::lm::smoothing::{SmoothedBigrams, Smoother, SmoothingBranch};
use crate::wordcnt::WordCounts;

/// 正規化の分母 1 - mle_continuation_mass(h) がこれ以下なら縮退とみなす。
pub const DEGENERATE_DENOMINATOR: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackoffWeight {
    Weight(f64),
    /// 語彙のほぼ全てが h の後続として観測されていて、未観測の後続に
    /// 配る unigram 質量が残っていない。
    Degenerate { reserved_mass: f64 },
}

impl BackoffWeight {
    pub fn value(&self) -> Option<f64> {
        match self {
            BackoffWeight::Weight(alpha) => Some(*alpha),
            BackoffWeight::Degenerate { .. } => None,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, BackoffWeight::Degenerate { .. })
    }
}

pub struct BackoffWeightCalculator<'a> {
    counts: &'a WordCounts,
    index: &'a HistoryIndex,
    estimator: &'a ProbabilityEstimator<'a>,
    smoother: &'a Smoother,
    bigrams: &'a SmoothedBigrams,
}

impl<'a> BackoffWeightCalculator<'a> {
    pub fn new(
        counts: &'a WordCounts,
        index: &'a HistoryIndex,
        estimator: &'a ProbabilityEstimator<'a>,
        smoother: &'a Smoother,
        bigrams: &'a SmoothedBigrams,
    ) -> BackoffWeightCalculator<'a> {
        BackoffWeightCalculator {
            counts,
            index,
            estimator,
            smoother,
            bigrams,
        }
    }

    /// 未観測の後続のために残した確率質量。
    pub fn reserved_mass(&self, history: &str) -> f64 {
        let range = self.index.locate(history);
        let history_count = self.counts.unigram_count(history).unwrap_or(0);
        match self
            .smoother
            .branch(history_count, &self.index.entries()[range.clone()])
        {
            SmoothingBranch::Retention => 1.0 - self.smoother.retention(),
            SmoothingBranch::GoodTuring => {
                let sum: f64 = self.bigrams.smoothed[range].iter().sum();
                (1.0 - sum).max(0.0)
            }
        }
    }

    /// alpha(h) = reserved_mass(h) / (1 - mle_continuation_mass(h))
    pub fn weight(&self, history: &str) -> BackoffWeight {
        let reserved_mass = self.reserved_mass(history);
        let denominator = 1.0 - self.estimator.mle_continuation_mass(history);
        if denominator <= DEGENERATE_DENOMINATOR {
            BackoffWeight::Degenerate { reserved_mass }
        } else {
            BackoffWeight::Weight(reserved_mass / denominator)
        }
    }
}
