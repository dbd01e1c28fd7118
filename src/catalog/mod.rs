use crate::word::{Word, WordCategory};
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;
use thiserror::Error;

static CATALOG_DIR: Dir = include_dir!("src/catalog");

/// Name of the embedded short-word table
pub const WORDS: &str = "words";
/// Name of the embedded sentence table
pub const SENTENCES: &str = "sentences";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog not found: {0}")]
    NotFound(String),
    #[error("catalog {0} is not valid utf-8")]
    NotUtf8(String),
    #[error("unable to parse catalog {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fixed list of candidate words or sentences a generator draws from
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Catalog {
    pub name: String,
    pub category: WordCategory,
    pub entries: Vec<String>,
}

impl Catalog {
    pub fn from_entries<S: Into<String>>(
        name: impl Into<String>,
        category: WordCategory,
        entries: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Load one of the tables embedded at build time
    pub fn builtin(name: &str) -> Result<Self, CatalogError> {
        read_catalog_from_file(&format!("{name}.json"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as validated words; anything outside the category's length policy is dropped
    pub fn words(&self) -> Vec<Word> {
        let (valid, invalid): (Vec<Word>, Vec<Word>) = self
            .entries
            .iter()
            .map(|entry| Word::new(entry.as_str(), self.category))
            .partition(Word::is_valid);

        if !invalid.is_empty() {
            log::warn!(
                "dropped {} invalid entries from catalog {}",
                invalid.len(),
                self.name
            );
        }
        valid
    }
}

fn read_catalog_from_file(file_name: &str) -> Result<Catalog, CatalogError> {
    let file = CATALOG_DIR
        .get_file(file_name)
        .ok_or_else(|| CatalogError::NotFound(file_name.to_string()))?;

    let file_as_str = file
        .contents_utf8()
        .ok_or_else(|| CatalogError::NotUtf8(file_name.to_string()))?;

    from_str(file_as_str).map_err(|source| CatalogError::Parse {
        name: file_name.to_string(),
        source,
    })
}
