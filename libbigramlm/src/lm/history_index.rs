use std::ops::Range;

use crate::wordcnt::wordcnt_bigram::{BigramCounts, BigramKey};

#[derive(Debug, Clone, PartialEq)]
pub struct BigramEntry {
    pub key: BigramKey,
    pub count: u32,
}

/// (first, second) の辞書順に並べた bigram 一覧。
///
/// 同じ履歴語 (first) を持つ bigram は必ず連続した区間に並ぶので、
/// 左端を二分探索すれば履歴ごとの区間をそのまま取り出せる。
#[derive(Debug, Default, Clone)]
pub struct HistoryIndex {
    entries: Vec<BigramEntry>,
}

impl HistoryIndex {
    pub fn build(bigram: &BigramCounts) -> HistoryIndex {
        let mut entries: Vec<BigramEntry> = bigram
            .iter()
            .map(|(key, count)| BigramEntry {
                key: key.clone(),
                count,
            })
            .collect();
        // キーは重複しないので unstable で十分。
        entries.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        HistoryIndex { entries }
    }

    /// `history` を first に持つ区間 [lo, hi) を返す。無ければ空区間。
    pub fn locate(&self, history: &str) -> Range<usize> {
        let lo = self
            .entries
            .partition_point(|e| e.key.first.as_str() < history);
        let hi = lo
            + self.entries[lo..].partition_point(|e| e.key.first.as_str() == history);
        lo..hi
    }

    pub fn continuations(&self, history: &str) -> &[BigramEntry] {
        &self.entries[self.locate(history)]
    }

    /// 履歴語ごとの区間を先頭から順に返す。
    pub fn runs(&self) -> impl Iterator<Item = (&str, Range<usize>)> + '_ {
        let mut lo = 0;
        std::iter::from_fn(move || {
            let first = self.entries.get(lo)?.key.first.as_str();
            let range = self.locate(first);
            lo = range.end;
            Some((first, range))
        })
    }

    pub fn entries(&self) -> &[BigramEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(lines: &[&[&str]]) -> HistoryIndex {
        let mut counts = BigramCounts::default();
        for line in lines {
            counts.add_line(line);
        }
        HistoryIndex::build(&counts)
    }

    #[test]
    fn test_sorted() {
        let index = build(&[&["b", "a", "c"], &["a", "c", "a", "b"]]);
        let keys: Vec<String> = index.entries().iter().map(|e| e.key.to_string()).collect();
        assert_eq!(keys, vec!["a b", "a c", "b a", "c a"]);
    }

    #[test]
    fn test_locate_returns_whole_run() {
        // 履歴 "m" の区間が配列の中央に来るようにしておく。
        // 中点から前方へだけ走査すると先頭側の要素を取りこぼす配置。
        let index = build(&[
            &["a", "x"],
            &["m", "a"],
            &["m", "b"],
            &["m", "c"],
            &["m", "d"],
            &["m", "e"],
            &["z", "x"],
        ]);
        let range = index.locate("m");
        assert_eq!(range, 1..6);
        let seconds: Vec<&str> = index
            .continuations("m")
            .iter()
            .map(|e| e.key.second.as_str())
            .collect();
        assert_eq!(seconds, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_locate_missing() {
        let index = build(&[&["a", "b"], &["c", "d"]]);
        assert!(index.locate("b").is_empty());
        assert!(index.locate("0").is_empty());
        assert!(index.locate("zz").is_empty());
        assert!(index.continuations("b").is_empty());

        let empty = HistoryIndex::default();
        assert!(empty.locate("a").is_empty());
    }

    #[test]
    fn test_runs() {
        let index = build(&[&["a", "b", "a", "c"], &["c", "c"]]);
        let runs: Vec<(&str, Range<usize>)> = index.runs().collect();
        assert_eq!(runs, vec![("a", 0..2), ("b", 2..3), ("c", 3..4)]);
    }
}
