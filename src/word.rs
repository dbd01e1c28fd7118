use serde::{Deserialize, Serialize};

/// Longest text accepted for a general practice word
pub const MAX_WORD_LEN: usize = 6;
/// Longest text accepted for a practice sentence
pub const MAX_SENTENCE_LEN: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordCategory {
    General,
    Sentence,
}

impl WordCategory {
    /// Inclusive upper bound on the character length of a valid entry
    pub fn max_len(&self) -> usize {
        match self {
            WordCategory::General => MAX_WORD_LEN,
            WordCategory::Sentence => MAX_SENTENCE_LEN,
        }
    }
}

/// A catalog entry together with the length policy of its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    category: WordCategory,
}

impl Word {
    pub fn new(text: impl Into<String>, category: WordCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn general(text: impl Into<String>) -> Self {
        Self::new(text, WordCategory::General)
    }

    pub fn sentence(text: impl Into<String>) -> Self {
        Self::new(text, WordCategory::Sentence)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> WordCategory {
        self.category
    }

    /// Length in characters, not bytes
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        (1..=self.category.max_len()).contains(&self.len())
    }
}
