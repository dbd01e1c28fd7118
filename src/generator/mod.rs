pub mod mixed_case;
pub mod random_words;
pub mod sentences;

pub use mixed_case::MixedCaseGenerator;
pub use random_words::RandomWordGenerator;
pub use sentences::SentenceGenerator;

use crate::catalog::{Catalog, CatalogError, SENTENCES, WORDS};
use crate::word::Word;
use clap::ValueEnum;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Produces practice text under one strategy
pub trait TextGenerator {
    /// `count` tokens joined by single spaces, or an empty string when `count <= 0`
    /// or the catalog is empty
    fn generate_text(&mut self, count: i64) -> String;

    fn kind(&self) -> GeneratorKind;
}

#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GeneratorKind {
    #[default]
    RandomWords,
    Sentences,
    MixedCase,
}

impl GeneratorKind {
    /// Map a host-side integer code; unknown codes fall back to random words
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => GeneratorKind::Sentences,
            2 => GeneratorKind::MixedCase,
            _ => GeneratorKind::RandomWords,
        }
    }

    pub fn index(&self) -> i32 {
        match self {
            GeneratorKind::RandomWords => 0,
            GeneratorKind::Sentences => 1,
            GeneratorKind::MixedCase => 2,
        }
    }

    /// Token count that makes a typical one-minute run
    pub fn default_count(&self) -> usize {
        match self {
            GeneratorKind::Sentences => 3,
            GeneratorKind::RandomWords | GeneratorKind::MixedCase => 25,
        }
    }

    /// Construct this variant over its embedded catalog
    pub fn build(&self, seed: Option<u64>) -> Result<Box<dyn TextGenerator>, CatalogError> {
        log::debug!("building {self} generator (seed: {seed:?})");
        let generator: Box<dyn TextGenerator> = match self {
            GeneratorKind::RandomWords => Box::new(RandomWordGenerator::new(
                &Catalog::builtin(WORDS)?,
                seed,
            )),
            GeneratorKind::Sentences => Box::new(SentenceGenerator::new(
                &Catalog::builtin(SENTENCES)?,
                seed,
            )),
            GeneratorKind::MixedCase => Box::new(MixedCaseGenerator::new(
                &Catalog::builtin(WORDS)?,
                seed,
            )),
        };
        Ok(generator)
    }
}

/// One generator instance is seeded once and reused across calls
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw `count` entries uniformly with replacement, render each, and join with spaces
pub(crate) fn draw_joined<R, F>(rng: &mut R, words: &[Word], count: i64, mut render: F) -> String
where
    R: Rng,
    F: FnMut(&mut R, &Word) -> String,
{
    if count <= 0 || words.is_empty() {
        return String::new();
    }

    (0..count)
        .filter_map(|_| {
            let word = words.choose(&mut *rng)?;
            Some(render(&mut *rng, word))
        })
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index() {
        assert_eq!(GeneratorKind::from_index(0), GeneratorKind::RandomWords);
        assert_eq!(GeneratorKind::from_index(1), GeneratorKind::Sentences);
        assert_eq!(GeneratorKind::from_index(2), GeneratorKind::MixedCase);
        assert_eq!(GeneratorKind::from_index(7), GeneratorKind::RandomWords);
        assert_eq!(GeneratorKind::from_index(-1), GeneratorKind::RandomWords);
    }

    #[test]
    fn test_index_roundtrip() {
        for kind in GeneratorKind::value_variants() {
            assert_eq!(GeneratorKind::from_index(kind.index()), *kind);
        }
    }

    #[test]
    fn test_display_matches_cli_names() {
        assert_eq!(GeneratorKind::RandomWords.to_string(), "random-words");
        assert_eq!(GeneratorKind::Sentences.to_string(), "sentences");
        assert_eq!(GeneratorKind::MixedCase.to_string(), "mixed-case");
    }

    #[test]
    fn test_default_count() {
        assert_eq!(GeneratorKind::RandomWords.default_count(), 25);
        assert_eq!(GeneratorKind::MixedCase.default_count(), 25);
        assert_eq!(GeneratorKind::Sentences.default_count(), 3);
    }

    #[test]
    fn test_build_every_kind() {
        for kind in GeneratorKind::value_variants() {
            let mut generator = kind.build(Some(7)).unwrap();
            assert_eq!(generator.kind(), *kind);
            assert_eq!(generator.generate_text(0), "");
            assert!(!generator.generate_text(2).is_empty());
        }
    }

    #[test]
    fn test_build_with_seed_is_reproducible() {
        for kind in GeneratorKind::value_variants() {
            let mut a = kind.build(Some(42)).unwrap();
            let mut b = kind.build(Some(42)).unwrap();
            assert_eq!(a.generate_text(10), b.generate_text(10));
            assert_eq!(a.generate_text(3), b.generate_text(3));
        }
    }

    #[test]
    fn test_draw_joined_degenerate() {
        let mut rng = seeded_rng(Some(1));
        let words = vec![Word::general("cat")];

        assert_eq!(draw_joined(&mut rng, &words, 0, |_, w| w.text().to_string()), "");
        assert_eq!(draw_joined(&mut rng, &words, -3, |_, w| w.text().to_string()), "");
        assert_eq!(draw_joined(&mut rng, &[], 4, |_, w| w.text().to_string()), "");
    }

    #[test]
    fn test_draw_joined_is_roughly_uniform() {
        let mut rng = seeded_rng(Some(99));
        let words = vec![Word::general("left"), Word::general("right")];

        let text = draw_joined(&mut rng, &words, 2000, |_, w| w.text().to_string());
        let lefts = text.split(' ').filter(|t| *t == "left").count();

        assert!(lefts > 800 && lefts < 1200, "lefts = {lefts}");
    }
}
