//! Keyword extractor
//!
//! [`KeywordExtractor`] pairs a validated [`TextRankConfig`] with the default
//! pipeline. It holds no per-run state, so one extractor can serve any number
//! of analyses, from any number of threads.

use crate::annotator::{Annotator, AnnotatorSettings};
use crate::error::{KeywordError, Result};
use crate::pipeline::artifacts::KeywordAnalysis;
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::TextRankPipeline;
use crate::pipeline::validation::validate_config;
use crate::types::{AnnotatedSentence, TextRankConfig};

#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    config: TextRankConfig,
    pipeline: TextRankPipeline,
}

impl KeywordExtractor {
    /// An extractor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `config` and build an extractor around it.
    ///
    /// Every problem in the config is reported at once through
    /// [`KeywordError::InvalidConfig`].
    pub fn with_config(config: TextRankConfig) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self {
            config,
            pipeline: TextRankPipeline::textrank(),
        })
    }

    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Rank the candidates of an already annotated document.
    pub fn analyze(&self, sentences: &[AnnotatedSentence]) -> KeywordAnalysis {
        self.analyze_with_observer(sentences, &mut NoopObserver)
    }

    pub fn analyze_with_observer(
        &self,
        sentences: &[AnnotatedSentence],
        observer: &mut impl PipelineObserver,
    ) -> KeywordAnalysis {
        self.pipeline.run(sentences, &self.config, observer)
    }

    /// Annotate `text` with `annotator`, then analyze the result.
    pub fn analyze_text<A: Annotator>(&self, annotator: &A, text: &str) -> Result<KeywordAnalysis> {
        let settings = AnnotatorSettings::from_config(&self.config);
        let sentences = annotator
            .annotate(text, &settings)
            .map_err(|err| KeywordError::Annotation {
                source: Box::new(err),
            })?;
        trace_debug!(sentences = sentences.len(), "text annotated");
        Ok(self.analyze(&sentences))
    }
}
