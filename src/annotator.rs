//! Annotator seam
//!
//! Tokenization, sentence segmentation and POS tagging are provided by the
//! caller through [`Annotator`]. The extractor hands every call an explicit
//! [`AnnotatorSettings`] rather than relying on shared annotator state.

use crate::nlp::stopwords::StopwordFilter;
use crate::types::{AnnotatedSentence, PosTag, TextRankConfig};

/// Per-call settings derived from a [`TextRankConfig`]
#[derive(Debug, Clone)]
pub struct AnnotatorSettings {
    pub candidate_pos: Vec<PosTag>,
    pub window_size: usize,
    pub lowercase: bool,
    /// Base language list merged with the config's extra stopwords
    pub stopwords: StopwordFilter,
}

impl AnnotatorSettings {
    pub fn from_config(cfg: &TextRankConfig) -> Self {
        Self {
            candidate_pos: cfg.candidate_pos.clone(),
            window_size: cfg.window_size,
            lowercase: cfg.lowercase,
            stopwords: StopwordFilter::from_config(cfg),
        }
    }

    /// Whether the annotator should flag `word` as a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.is_stopword(word)
    }
}

/// Turns raw text into annotated sentences.
pub trait Annotator {
    type Error: std::error::Error + Send + Sync + 'static;

    fn annotate(
        &self,
        text: &str,
        settings: &AnnotatorSettings,
    ) -> Result<Vec<AnnotatedSentence>, Self::Error>;
}

impl<A: Annotator + ?Sized> Annotator for &A {
    type Error = A::Error;

    fn annotate(
        &self,
        text: &str,
        settings: &AnnotatorSettings,
    ) -> Result<Vec<AnnotatedSentence>, Self::Error> {
        (**self).annotate(text, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnnotatedToken;

    struct Whitespace;

    impl Annotator for Whitespace {
        type Error = std::convert::Infallible;

        fn annotate(
            &self,
            text: &str,
            settings: &AnnotatorSettings,
        ) -> Result<Vec<AnnotatedSentence>, Self::Error> {
            Ok(vec![text
                .split_whitespace()
                .map(|w| AnnotatedToken {
                    text: w.to_string(),
                    pos: PosTag::Noun,
                    is_stopword: settings.is_stopword(w),
                })
                .collect()])
        }
    }

    #[test]
    fn test_settings_from_config() {
        let cfg = TextRankConfig::default()
            .with_window_size(3)
            .with_extra_stopwords(["graph"]);
        let settings = AnnotatorSettings::from_config(&cfg);

        assert_eq!(settings.window_size, 3);
        assert_eq!(settings.candidate_pos, cfg.candidate_pos);
        assert!(settings.is_stopword("graph"));
        assert!(settings.is_stopword("The"));
        assert!(!settings.is_stopword("vertex"));
    }

    #[test]
    fn test_settings_without_base_list() {
        let cfg = TextRankConfig::default().with_stopword_language(None);
        let settings = AnnotatorSettings::from_config(&cfg);
        assert!(!settings.is_stopword("the"));
    }

    #[test]
    fn test_annotator_by_reference() {
        let settings = AnnotatorSettings::from_config(&TextRankConfig::default());
        let annotator = &Whitespace;
        let sentences = annotator.annotate("the graph", &settings).unwrap();
        assert!(sentences[0][0].is_stopword);
        assert!(!sentences[0][1].is_stopword);
    }
}
