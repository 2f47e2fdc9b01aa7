//! Token-level processing of annotated input
//!
//! This module provides stopword configuration and candidate selection.

pub mod filter;
pub mod stopwords;
