pub mod config;
pub mod lm;
pub mod tokenizer;
pub mod wordcnt;
