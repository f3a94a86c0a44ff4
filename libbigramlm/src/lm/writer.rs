//! 学習済みモデルをテキスト形式で書き出す。
//!
//! ```text
//! unigrams:
//! <alpha> <word> <log2 p(word)>
//! bigrams:
//! <log2 p(w2|w1)> <w1> <w2>
//! ```
//!
//! 単語中の空白はエスケープしない。

use anyhow::Result;

use crate::lm::backoff::BackoffWeight;
use crate::lm::model::{BigramLanguageModel, BigramRecord, UnigramRecord};

/// 整形済みの行を受け取る出力先。
pub trait LmSink {
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl LmSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

pub fn format_unigram(record: &UnigramRecord) -> String {
    let alpha = match record.backoff {
        BackoffWeight::Weight(alpha) => alpha,
        // 縮退した履歴語は 0 として書く。学習時に警告済み。
        BackoffWeight::Degenerate { .. } => 0.0,
    };
    format!("{} {} {}", alpha, record.word, record.probability.log2())
}

pub fn format_bigram(record: &BigramRecord) -> String {
    format!(
        "{} {} {}",
        record.probability.log2(),
        record.key.first,
        record.key.second
    )
}

pub fn write_model<S: LmSink>(model: &BigramLanguageModel, sink: &mut S) -> Result<()> {
    sink.write_line("unigrams:")?;
    for record in model.unigrams() {
        sink.write_line(&format_unigram(record))?;
    }
    sink.write_line("bigrams:")?;
    for record in model.bigrams() {
        sink.write_line(&format_bigram(record))?;
    }
    Ok(())
}
