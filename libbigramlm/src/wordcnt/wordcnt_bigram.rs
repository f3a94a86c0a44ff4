use std::fmt::{Display, Formatter};

use rustc_hash::FxHashMap;

/// 隣接する二単語。first が履歴（条件側）の単語。
///
/// 順序は (first, second) の辞書順。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigramKey {
    pub first: String,
    pub second: String,
}

impl BigramKey {
    pub fn new(first: &str, second: &str) -> BigramKey {
        BigramKey {
            first: first.to_string(),
            second: second.to_string(),
        }
    }
}

impl Display for BigramKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// (w1, w2) -> 出現回数
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BigramCounts {
    counts: FxHashMap<BigramKey, u32>,
}

impl BigramCounts {
    /// 一行分の単語列から bigram を数える。行をまたぐペアは作らない。
    pub fn add_line(&mut self, words: &[&str]) {
        for pair in words.windows(2) {
            *self.counts.entry(BigramKey::new(pair[0], pair[1])).or_insert(0) += 1;
        }
    }

    pub fn merge(&mut self, other: BigramCounts) {
        for (key, cnt) in other.counts {
            *self.counts.entry(key).or_insert(0) += cnt;
        }
    }

    pub fn get(&self, first: &str, second: &str) -> Option<u32> {
        self.counts.get(&BigramKey::new(first, second)).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&BigramKey, u32)> {
        self.counts.iter().map(|(key, cnt)| (key, *cnt))
    }
}
