use rustc_hash::FxHashMap;

/// 単語ごとの出現回数と総単語数。
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UnigramCounts {
    counts: FxHashMap<String, u32>,
    /// 総単語出現数
    total_words: u64,
}

impl UnigramCounts {
    pub fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(cnt) => *cnt += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
            }
        }
        self.total_words += 1;
    }

    pub fn merge(&mut self, other: UnigramCounts) {
        for (word, cnt) in other.counts {
            *self.counts.entry(word).or_insert(0) += cnt;
        }
        self.total_words += other.total_words;
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.counts.get(word).copied()
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// ユニーク単語数
    pub fn unique_words(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, cnt)| (word.as_str(), *cnt))
    }
}
