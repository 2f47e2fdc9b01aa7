//! Keyword ranking and selection

pub mod ranker;
