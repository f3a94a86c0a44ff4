//! コーパスから unigram / bigram の出現回数を数え上げる。

use log::info;
use rayon::prelude::*;

use crate::tokenizer::CorpusTokenizer;
use crate::wordcnt::wordcnt_bigram::BigramCounts;
use crate::wordcnt::wordcnt_unigram::UnigramCounts;

pub mod wordcnt_bigram;
pub mod wordcnt_unigram;

/// コーパス全体の頻度表。
///
/// 各行は一度だけトーカナイズされ、unigram は全トークンから、
/// bigram は行内の隣接ペアだけから数える。
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WordCounts {
    pub unigram: UnigramCounts,
    pub bigram: BigramCounts,
}

impl WordCounts {
    pub fn add_line<T: CorpusTokenizer>(&mut self, tokenizer: &T, line: &str) {
        let words = tokenizer.tokenize(line);
        for word in &words {
            self.unigram.add(word);
        }
        self.bigram.add_line(&words);
    }

    pub fn count_lines<T, S>(tokenizer: &T, lines: &[S]) -> WordCounts
    where
        T: CorpusTokenizer,
        S: AsRef<str>,
    {
        let mut counts = WordCounts::default();
        for line in lines {
            counts.add_line(tokenizer, line.as_ref());
        }
        counts
    }

    /// 行を `chunk_lines` ごとに分割して並列に数え、最後にマージする。
    /// マージが終わるまで確率計算には進まない。
    pub fn count_lines_parallel<T, S>(tokenizer: &T, lines: &[S], chunk_lines: usize) -> WordCounts
    where
        T: CorpusTokenizer + Sync,
        S: AsRef<str> + Sync,
    {
        let chunk_lines = chunk_lines.max(1);
        info!(
            "Counting {} lines in chunks of {}",
            lines.len(),
            chunk_lines
        );
        lines
            .par_chunks(chunk_lines)
            .map(|chunk| WordCounts::count_lines(tokenizer, chunk))
            .reduce(WordCounts::default, |mut acc, partial| {
                acc.merge(partial);
                acc
            })
    }

    pub fn merge(&mut self, other: WordCounts) {
        self.unigram.merge(other.unigram);
        self.bigram.merge(other.bigram);
    }

    pub fn unigram_count(&self, word: &str) -> Option<u32> {
        self.unigram.get(word)
    }

    pub fn bigram_count(&self, first: &str, second: &str) -> Option<u32> {
        self.bigram.get(first, second)
    }

    pub fn total_words(&self) -> u64 {
        self.unigram.total_words()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WhitespaceTokenizer;

    #[test]
    fn test_count_single_line() {
        let counts = WordCounts::count_lines(&WhitespaceTokenizer, &["a b a b a c"]);
        assert_eq!(counts.unigram_count("a"), Some(3));
        assert_eq!(counts.unigram_count("b"), Some(2));
        assert_eq!(counts.unigram_count("c"), Some(1));
        assert_eq!(counts.total_words(), 6);
        assert_eq!(counts.bigram_count("a", "b"), Some(2));
        assert_eq!(counts.bigram_count("b", "a"), Some(2));
        assert_eq!(counts.bigram_count("a", "c"), Some(1));
    }

    #[test]
    fn test_bigrams_do_not_cross_lines() {
        let counts = WordCounts::count_lines(&WhitespaceTokenizer, &["x y", "z x"]);
        assert_eq!(counts.total_words(), 4);
        assert_eq!(counts.unigram_count("x"), Some(2));
        assert_eq!(counts.bigram_count("x", "y"), Some(1));
        assert_eq!(counts.bigram_count("z", "x"), Some(1));
        assert_eq!(counts.bigram_count("y", "z"), None);
        assert_eq!(counts.bigram.len(), 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let lines: Vec<String> = (0..50)
            .map(|i| format!("w{} w{} shared w{}", i % 7, i % 3, i % 5))
            .collect();
        let sequential = WordCounts::count_lines(&WhitespaceTokenizer, &lines);
        for chunk_lines in [1, 3, 16, 1000] {
            let parallel = WordCounts::count_lines_parallel(&WhitespaceTokenizer, &lines, chunk_lines);
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_parallel_zero_chunk_size() {
        let lines = vec!["a b", "b c"];
        let counts = WordCounts::count_lines_parallel(&WhitespaceTokenizer, &lines, 0);
        assert_eq!(counts.total_words(), 4);
    }
}
