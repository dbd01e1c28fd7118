use super::{draw_joined, seeded_rng, GeneratorKind, TextGenerator};
use crate::catalog::Catalog;
use crate::word::Word;
use rand::rngs::StdRng;

/// Emits catalog words verbatim
pub struct RandomWordGenerator {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomWordGenerator {
    pub fn new(catalog: &Catalog, seed: Option<u64>) -> Self {
        Self {
            words: catalog.words(),
            rng: seeded_rng(seed),
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl TextGenerator for RandomWordGenerator {
    fn generate_text(&mut self, count: i64) -> String {
        draw_joined(&mut self.rng, &self.words, count, |_, word| {
            word.text().to_string()
        })
    }

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::RandomWords
    }
}
