//! Text preprocessing

pub mod tokenizer;
