//! Word → node index mapping
//!
//! Indices are dense and assigned in first-seen order.

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Bijective mapping between candidate words and node IDs in `[0, len)`
#[derive(Debug, Clone, Default, Serialize)]
pub struct Vocabulary {
    #[serde(skip)]
    word_to_id: FxHashMap<String, u32>,
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan sentences in order, then tokens in order, assigning each new word
    /// the next ID.
    pub fn from_sentences<S: AsRef<[String]>>(sentences: &[S]) -> Self {
        let mut vocab = Self::new();
        for word in sentences.iter().flat_map(|s| s.as_ref()) {
            vocab.get_or_insert(word);
        }
        vocab
    }

    /// Return the ID of `word`, inserting it when unseen
    pub fn get_or_insert(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = self.words.len() as u32;
        self.word_to_id.insert(word.to_string(), id);
        self.words.push(word.to_string());
        id
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.word_to_id.get(word).copied()
    }

    pub fn word(&self, id: u32) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    /// Words in ID order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Map each sentence's words to IDs. Words missing from the vocabulary are
    /// skipped, which can't happen for the sentences it was built from.
    pub fn encode<S: AsRef<[String]>>(&self, sentences: &[S]) -> Vec<Vec<u32>> {
        sentences
            .iter()
            .map(|s| s.as_ref().iter().filter_map(|w| self.get(w)).collect())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
