//! Candidate token selection
//!
//! Keeps tokens whose part of speech is allowed and which are not stopwords.

use crate::types::{AnnotatedSentence, PosTag};

/// Per-sentence candidate tokens, sentence boundaries preserved
pub type CandidateSentences = Vec<Vec<String>>;

/// Select the candidate tokens of one sentence, in sentence order.
pub fn select_candidates(
    sentence: &AnnotatedSentence,
    candidate_pos: &[PosTag],
    lowercase: bool,
) -> Vec<String> {
    sentence
        .iter()
        .filter(|t| !t.is_stopword && candidate_pos.contains(&t.pos))
        .map(|t| {
            if lowercase {
                t.text.to_lowercase()
            } else {
                t.text.clone()
            }
        })
        .collect()
}

/// Select candidates for every sentence. Sentences with no candidates stay in
/// the output as empty entries.
pub fn select_all(
    sentences: &[AnnotatedSentence],
    candidate_pos: &[PosTag],
    lowercase: bool,
) -> CandidateSentences {
    sentences
        .iter()
        .map(|s| select_candidates(s, candidate_pos, lowercase))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AnnotatedToken;

    fn sentence() -> AnnotatedSentence {
        vec![
            AnnotatedToken::new("Lincoln", PosTag::ProperNoun),
            AnnotatedToken::new("moved", PosTag::Verb),
            AnnotatedToken::stopword("a", PosTag::Determiner),
            AnnotatedToken::new("Nation", PosTag::Noun),
            AnnotatedToken::stopword("something", PosTag::Noun),
        ]
    }

    #[test]
    fn test_filters_by_pos_and_stopword() {
        let selected = select_candidates(&sentence(), &[PosTag::Noun, PosTag::ProperNoun], false);
        assert_eq!(selected, vec!["Lincoln", "Nation"]);
    }

    #[test]
    fn test_verbs_when_allowed() {
        let selected = select_candidates(
            &sentence(),
            &[PosTag::Noun, PosTag::ProperNoun, PosTag::Verb],
            false,
        );
        assert_eq!(selected, vec!["Lincoln", "moved", "Nation"]);
    }

    #[test]
    fn test_lowercase() {
        let selected = select_candidates(&sentence(), &[PosTag::Noun, PosTag::ProperNoun], true);
        assert_eq!(selected, vec!["lincoln", "nation"]);
    }

    #[test]
    fn test_empty_pos_set_selects_nothing() {
        assert!(select_candidates(&sentence(), &[], false).is_empty());
    }

    #[test]
    fn test_sentence_boundaries_kept() {
        let sentences = vec![
            sentence(),
            vec![AnnotatedToken::new("and", PosTag::CoordConjunction)],
            vec![AnnotatedToken::new("war", PosTag::Noun)],
        ];
        let selected = select_all(&sentences, &[PosTag::Noun], false);
        assert_eq!(selected.len(), 3);
        assert_eq!(selected[0], vec!["Nation"]);
        assert!(selected[1].is_empty());
        assert_eq!(selected[2], vec!["war"]);
    }

    #[test]
    fn test_duplicates_preserved() {
        let s = vec![
            AnnotatedToken::new("hope", PosTag::Noun),
            AnnotatedToken::new("hope", PosTag::Noun),
        ];
        assert_eq!(select_candidates(&s, &[PosTag::Noun], false), vec!["hope", "hope"]);
    }
}
