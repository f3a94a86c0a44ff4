use std::time::Instant;

use log::info;

use libbigramlm::config::TrainingConfig;
use libbigramlm::lm::model::BigramLanguageModel;
use libbigramlm::lm::writer::write_model;
use libbigramlm::tokenizer::WhitespaceTokenizer;

use crate::corpus_reader::read_corpus;
use crate::lm_file::LmFile;

pub struct TrainOptions<'a> {
    pub lm_file: &'a str,
    pub text_file: &'a str,
    pub config_file: Option<&'a str>,
    pub retention: Option<f64>,
    pub chunk_lines: Option<usize>,
}

fn load_config(opts: &TrainOptions) -> anyhow::Result<TrainingConfig> {
    let mut config = match opts.config_file {
        Some(path) => TrainingConfig::load(path)?,
        None => TrainingConfig::default(),
    };
    if let Some(retention) = opts.retention {
        config.retention = retention;
    }
    if let Some(chunk_lines) = opts.chunk_lines {
        config.chunk_lines = chunk_lines;
    }
    config.validate()?;
    Ok(config)
}

/// コーパスを読み込んで言語モデルを学習し、テキスト形式で書き出す。
pub fn train(opts: TrainOptions) -> anyhow::Result<()> {
    info!("train: {} => {}", opts.text_file, opts.lm_file);
    let started = Instant::now();

    let config = load_config(&opts)?;
    info!("{:?}", config);

    let lines = read_corpus(opts.text_file)?;
    // 出力先が作れない場合は学習前に失敗させる。
    let mut ofp = LmFile::create(opts.lm_file)?;

    let model = BigramLanguageModel::from_lines(&WhitespaceTokenizer, &lines, &config)?;
    write_model(&model, &mut ofp)?;
    ofp.commit()?;

    info!(
        "Wrote {} unigrams and {} bigrams in {:?}",
        model.unigrams().len(),
        model.bigrams().len(),
        started.elapsed()
    );
    Ok(())
}
