//! Graph construction
//!
//! This module builds the vocabulary, the windowed co-occurrence pairs and
//! the normalized co-occurrence graph.

pub mod builder;
pub mod cooccurrence;
pub mod matrix;
pub mod vocabulary;
