use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn bigram_train() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bigram-train"))
}

#[test]
fn test_usage_without_arguments() -> anyhow::Result<()> {
    let output = bigram_train().output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
    Ok(())
}

#[test]
fn test_usage_with_one_argument() -> anyhow::Result<()> {
    let output = bigram_train().args(["--lm", "model.lm"]).output()?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_usage_with_extra_argument() -> anyhow::Result<()> {
    let output = bigram_train()
        .args(["--lm", "model.lm", "--text", "corpus.txt", "extra"])
        .output()?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_train_to_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let text = dir.path().join("corpus.txt");
    let lm = dir.path().join("model.lm");
    fs::write(&text, "the cat sat\nthe dog sat\n")?;

    let status = bigram_train()
        .arg("--lm")
        .arg(&lm)
        .arg("--text")
        .arg(&text)
        .status()?;
    assert!(status.success());

    let got = fs::read_to_string(&lm)?;
    let lines: Vec<&str> = got.lines().collect();
    assert_eq!(lines[0], "unigrams:");
    // cat dog sat the
    assert_eq!(lines[5], "bigrams:");
    let bigrams: Vec<&str> = lines[6..]
        .iter()
        .map(|l| l.split_once(' ').unwrap().1)
        .collect();
    assert_eq!(bigrams, vec!["cat sat", "dog sat", "the cat", "the dog"]);
    Ok(())
}

#[test]
fn test_missing_corpus() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let lm = dir.path().join("model.lm");
    let output = bigram_train()
        .arg("--lm")
        .arg(&lm)
        .arg("--text")
        .arg(dir.path().join("missing.txt"))
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Reading corpus"));
    assert!(!lm.exists());
    Ok(())
}
