use super::{draw_joined, seeded_rng, GeneratorKind, TextGenerator};
use crate::catalog::Catalog;
use crate::word::Word;
use rand::rngs::StdRng;
use rand::Rng;

/// Emits catalog words with every character's case flipped by a coin toss
pub struct MixedCaseGenerator {
    words: Vec<Word>,
    rng: StdRng,
}

impl MixedCaseGenerator {
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

impl TextGenerator for MixedCaseGenerator {
    fn generate_text(&mut self, count: i64) -> String {
        draw_joined(&mut self.rng, &self.words, count, |rng, word| {
            randomize_case(rng, word.text())
        })
    }

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::MixedCase
    }
}

/// Case of each char is chosen independently of its original case
fn randomize_case<R: Rng + ?Sized>(rng: &mut R, text: &str) -> String {
    text.chars()
        .map(|c| {
            if rng.gen_bool(0.5) {
                single_char(c.to_uppercase(), c)
            } else {
                single_char(c.to_lowercase(), c)
            }
        })
        .collect()
}

/// Keep `c` when its case mapping is not exactly one char ('ß' uppercases to "SS")
fn single_char(mut mapped: impl Iterator<Item = char>, c: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
