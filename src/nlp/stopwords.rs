//! Stopword configuration
//!
//! A base list from the `stop-words` crate merged with caller-supplied words.
//! The merged filter is what the annotator receives through
//! [`crate::AnnotatorSettings`]; annotated input only gets the caller's extra
//! words marked.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::types::{AnnotatedSentence, TextRankConfig};

/// Language codes accepted by [`StopwordFilter::for_language`]
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "en", "de", "fr", "es", "it", "pt", "nl", "ru", "sv", "no", "da", "fi", "hu", "tr", "pl", "ar",
];

/// A set of stopwords
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Stored lower-cased unless the filter is case-sensitive
    stopwords: FxHashSet<String>,
    case_sensitive: bool,
}

impl StopwordFilter {
    /// A filter with no stopwords
    pub fn empty() -> Self {
        Self::default()
    }

    /// Base list for a language, `None` when the language isn't supported
    pub fn for_language(language: &str) -> Option<Self> {
        let lang = language_of(language)?;
        Some(Self {
            stopwords: get(lang).iter().map(|s| s.to_lowercase()).collect(),
            case_sensitive: false,
        })
    }

    /// Build from an explicit word list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Build the merged filter for one run: base language list (if any) plus
    /// `extra_stopwords`. An unsupported language contributes no base list;
    /// validation rejects it before a run gets here.
    pub fn from_config(cfg: &TextRankConfig) -> Self {
        let mut filter = cfg
            .stopword_language
            .as_deref()
            .and_then(Self::for_language)
            .unwrap_or_default();
        filter.add_stopwords(&cfg.extra_stopwords);
        filter
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word = word.as_ref();
            if self.case_sensitive {
                self.stopwords.insert(word.to_string());
            } else {
                self.stopwords.insert(word.to_lowercase());
            }
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    /// Mark every token whose text is in the set. Tokens the annotator already
    /// marked stay marked.
    pub fn apply(&self, sentences: &mut [AnnotatedSentence]) -> usize {
        if self.is_empty() {
            return 0;
        }
        let mut marked = 0;
        for token in sentences.iter_mut().flat_map(|s| s.iter_mut()) {
            if !token.is_stopword && self.is_stopword(&token.text) {
                token.is_stopword = true;
                marked += 1;
            }
        }
        marked
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

/// Whether `language` names a supported base list
pub fn is_supported_language(language: &str) -> bool {
    language_of(language).is_some()
}

fn language_of(language: &str) -> Option<LANGUAGE> {
    let lang = match language.to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "pl" | "polish" => LANGUAGE::Polish,
        "ar" | "arabic" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnnotatedToken, PosTag};

    #[test]
    fn test_english_base_list() {
        let filter = StopwordFilter::for_language("en").unwrap();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword("graph"));
    }

    #[test]
    fn test_unsupported_language() {
        assert!(StopwordFilter::for_language("klingon").is_none());
        assert!(!is_supported_language("klingon"));
        assert!(is_supported_language("German"));
    }

    #[test]
    fn test_config_merges_extra_words() {
        let cfg = TextRankConfig::default().with_extra_stopwords(["Springfield"]);
        let filter = StopwordFilter::from_config(&cfg);

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("springfield"));
        assert!(filter.is_stopword("Springfield"));
    }

    #[test]
    fn test_config_without_base_language() {
        let cfg = TextRankConfig::default()
            .with_stopword_language(None)
            .with_extra_stopwords(["year"]);
        let filter = StopwordFilter::from_config(&cfg);

        assert_eq!(filter.len(), 1);
        assert!(!filter.is_stopword("the"));
        assert!(filter.is_stopword("year"));
    }

    #[test]
    fn test_case_sensitive_filter() {
        let mut filter = StopwordFilter::empty().with_case_sensitive(true);
        filter.add_stopwords(&["Lincoln"]);

        assert!(filter.is_stopword("Lincoln"));
        assert!(!filter.is_stopword("lincoln"));
    }

    #[test]
    fn test_apply_marks_tokens() {
        let mut sentences = vec![vec![
            AnnotatedToken::new("people", PosTag::Noun),
            AnnotatedToken::new("time", PosTag::Noun),
            AnnotatedToken::stopword("the", PosTag::Determiner),
        ]];
        let filter = StopwordFilter::from_list(&["Time", "the"]);

        let marked = filter.apply(&mut sentences);

        assert_eq!(marked, 1);
        assert!(!sentences[0][0].is_stopword);
        assert!(sentences[0][1].is_stopword);
        assert!(sentences[0][2].is_stopword);
    }

    #[test]
    fn test_empty_filter_is_noop() {
        let mut sentences = vec![vec![AnnotatedToken::new("the", PosTag::Noun)]];
        assert_eq!(StopwordFilter::empty().apply(&mut sentences), 0);
        assert!(!sentences[0][0].is_stopword);
    }
}
