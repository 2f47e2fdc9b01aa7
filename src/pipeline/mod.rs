//! Staged keyword pipeline
//!
//! The pipeline runs five stages over an annotated document: preprocess
//! (stopword overlay), candidate selection, graph construction, ranking and
//! formatting. Each stage is a trait in [`traits`]; [`runner::Pipeline`]
//! composes them and reports progress to a [`observer::PipelineObserver`].

pub mod artifacts;
pub mod observer;
pub mod request;
pub mod runner;
pub mod traits;
pub mod validation;
