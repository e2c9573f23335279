//! Text processing utilities for tokenization
//!
//! Tag strings are split into runs of word characters, lowercased, and
//! filtered against an English stop-word list and a minimum token length.

mod stop_words;

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub use stop_words::ENGLISH_STOP_WORDS;

/// Word-character runs (letters, digits, underscore; unicode aware)
static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"\w+").expect("word pattern is a valid regex"))
}

/// Tokenizer shared by the vocabulary builder and the vectorizer
///
/// Both sides must tokenize identically, so the engine builds one tokenizer
/// from its configuration and hands it to each stage.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    min_token_len: usize,
    stop_words: HashSet<String>,
}

impl Tokenizer {
    /// Create a tokenizer with the built-in stop words plus `extra_stop_words`
    pub fn new(min_token_len: usize, extra_stop_words: &[String]) -> Self {
        let mut stop_words: HashSet<String> =
            ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect();
        stop_words.extend(extra_stop_words.iter().map(|w| w.to_lowercase()));

        Tokenizer {
            min_token_len: min_token_len.max(1),
            stop_words,
        }
    }

    /// Split `text` into lowercase tokens, dropping stop words and short tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        word_pattern()
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|s| s.chars().count() >= self.min_token_len)
            .filter(|s| !self.stop_words.contains(*s))
            .map(|s| s.to_string())
            .collect()
    }

    /// Whether `text` yields no tokens at all
    pub fn is_blank(&self, text: &str) -> bool {
        self.tokenize(text).is_empty()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new(2, &[])
    }
}
