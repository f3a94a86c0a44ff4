use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::Context;
use log::info;

use libbigramlm::lm::writer::LmSink;

/// 言語モデルの出力ファイル。
///
/// `<path>.tmp` に書いて `commit()` で置き換えるので、
/// 途中で失敗しても `<path>` に中途半端なモデルは残らない。
pub struct LmFile {
    path: String,
    tmp_path: String,
    writer: Option<BufWriter<File>>,
}

impl LmFile {
    pub fn create(path: &str) -> anyhow::Result<LmFile> {
        let tmp_path = path.to_string() + ".tmp";
        let file =
            File::create(&tmp_path).with_context(|| format!("Creating output file: {tmp_path}"))?;
        Ok(LmFile {
            path: path.to_string(),
            tmp_path,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// 一時ファイルを `<path>` に置き換える。
    /// 失敗した場合は drop 時に一時ファイルが消される。
    pub fn commit(mut self) -> anyhow::Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer
                .flush()
                .with_context(|| format!("Writing {}", self.tmp_path))?;
        }
        info!("Write to {}", self.path);
        fs::rename(&self.tmp_path, &self.path)
            .with_context(|| format!("Renaming {} to {}", self.tmp_path, self.path))?;
        self.writer.take();
        Ok(())
    }
}

impl LmSink for LmFile {
    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writeln!(writer, "{line}").with_context(|| format!("Writing {}", self.tmp_path))?;
        }
        Ok(())
    }
}

impl Drop for LmFile {
    fn drop(&mut self) {
        // commit されずに破棄された場合は一時ファイルを消す。
        if self.writer.take().is_some() {
            let _ = fs::remove_file(&self.tmp_path);
        }
    }
}
