/// コーパスの一行を単語列に分割する。
///
/// unigram と bigram の数え上げは同じトーカナイザの結果を使うので、
/// 単語境界は常に一致する。
pub trait CorpusTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str>;
}

/// 空白区切りのトーカナイザ。大文字小文字の正規化などは一切しない。
#[derive(Debug, Default, Clone, Copy)]
pub struct WhitespaceTokenizer;

impl CorpusTokenizer for WhitespaceTokenizer {
    fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        line.split_whitespace().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_any_whitespace() {
        let tokens = WhitespaceTokenizer.tokenize("  a\tb  c\u{3000}d ");
        assert_eq!(tokens, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_case_sensitive() {
        let tokens = WhitespaceTokenizer.tokenize("The the THE");
        assert_eq!(tokens, vec!["The", "the", "THE"]);
    }

    #[test]
    fn test_empty_line() {
        assert!(WhitespaceTokenizer.tokenize("").is_empty());
        assert!(WhitespaceTokenizer.tokenize(" \t ").is_empty());
    }
}
