use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::Context;
use log::info;

/// コーパスを最後まで読み込んで行ごとに返す。
///
/// 途中で読めなくなった場合は何も返さずにエラーにする。
pub fn read_corpus(path: &str) -> anyhow::Result<Vec<String>> {
    info!("Reading corpus: {}", path);
    let file = File::open(path).with_context(|| format!("Reading corpus: {path}"))?;

    let mut lines = Vec::new();
    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Scanning corpus: {path}:{}", lineno + 1))?;
        lines.push(line);
    }
    info!("Read {} lines from {}", lines.len(), path);
    Ok(lines)
}
