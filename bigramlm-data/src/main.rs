use std::io::Write;

use clap::Parser;

use crate::subcmd::train::{train, TrainOptions};

mod corpus_reader;
mod lm_file;
mod subcmd;

/// コーパスからバックオフ付き bigram 言語モデルを学習する。
#[derive(Debug, Parser)]
#[clap(
name = "bigram-train",
version = env ! ("CARGO_PKG_VERSION"),
about = env ! ("CARGO_PKG_DESCRIPTION"),
arg_required_else_help = true,
)]
struct Args {
    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// 言語モデルの出力先
    #[arg(long)]
    lm: String,
    /// 学習用コーパス（一行一文、空白区切り）
    #[arg(long)]
    text: String,
    /// 学習パラメータの YAML ファイル
    #[arg(long)]
    config: Option<String>,
    /// γ: シングルトンの無い履歴で残す確率質量（設定ファイルより優先）
    #[arg(long)]
    retention: Option<f64>,
    /// 並列カウントの 1 チャンクあたりの行数。0 ならシングルスレッド
    #[arg(long)]
    chunk_lines: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            // show thread id
            writeln!(
                buf,
                "{}: {:?}: {}: {}",
                ts,
                std::thread::current().id(),
                record.level(),
                record.args()
            )
        })
        .init();

    train(TrainOptions {
        lm_file: args.lm.as_str(),
        text_file: args.text.as_str(),
        config_file: args.config.as_deref(),
        retention: args.retention,
        chunk_lines: args.chunk_lines,
    })
}
