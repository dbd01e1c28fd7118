use super::{draw_joined, seeded_rng, GeneratorKind, TextGenerator};
use crate::catalog::Catalog;
use crate::word::Word;
use rand::rngs::StdRng;

/// Emits whole catalog sentences verbatim
pub struct SentenceGenerator {
    sentences: Vec<Word>,
    rng: StdRng,
}

impl SentenceGenerator {
    pub fn new(catalog: &Catalog, seed: Option<u64>) -> Self {
        Self {
            sentences: catalog.words(),
            rng: seeded_rng(seed),
        }
    }

    pub fn sentences(&self) -> &[Word] {
        &self.sentences
    }
}

impl TextGenerator for SentenceGenerator {
    fn generate_text(&mut self, count: i64) -> String {
        draw_joined(&mut self.rng, &self.sentences, count, |_, sentence| {
            sentence.text().to_string()
        })
    }

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Sentences
    }
}
