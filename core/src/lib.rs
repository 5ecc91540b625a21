pub mod config;
pub mod determinism;
pub mod extractor;
pub mod normalizer;
pub mod storage;
pub mod text;

pub mod error;
