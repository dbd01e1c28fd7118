/// Characters per word in the wpm convention
pub const CHARS_PER_WORD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Active,
}

/// Live comparison of typed input against a target text.
///
/// Counts are recomputed from the whole input on every update, so backspacing and
/// out-of-order edits need no special handling. Callers must feed snapshots in the
/// order the keystrokes happened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypingSession {
    target_text: String,
    user_input: String,
    correct_chars: usize,
    total_chars: usize,
}

impl TypingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new target; any text, including the empty string, is accepted
    pub fn start_session(&mut self, text: impl Into<String>) {
        self.target_text = text.into();
        self.user_input.clear();
        self.correct_chars = 0;
        self.total_chars = 0;
    }

    pub fn update_input(&mut self, typed: impl Into<String>) {
        self.user_input = typed.into();
        self.total_chars = self.user_input.chars().count();
        self.correct_chars = self
            .user_input
            .chars()
            .zip(self.target_text.chars())
            .filter(|(typed, expected)| typed == expected)
            .count();
    }

    /// Percentage of typed characters that match; 100 before anything is typed
    pub fn accuracy(&self) -> f64 {
        if self.total_chars == 0 {
            return 100.0;
        }
        (self.correct_chars as f64 / self.total_chars as f64) * 100.0
    }

    /// Correct characters per minute divided by five, rounded half away from zero
    pub fn wpm(&self, seconds_elapsed: f64) -> u32 {
        if seconds_elapsed <= 0.0 || seconds_elapsed.is_nan() {
            return 0;
        }
        let minutes = seconds_elapsed / 60.0;
        let wpm = ((self.correct_chars as f64 / CHARS_PER_WORD) / minutes).round();
        // Vanishingly small durations blow up the rate; pin it at the top of the range
        wpm.min(f64::from(u32::MAX)) as u32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn phase(&self) -> SessionPhase {
        if self.target_text.is_empty() {
            SessionPhase::Idle
        } else {
            SessionPhase::Active
        }
    }

    /// The whole target has been covered by input, right or wrong
    pub fn is_complete(&self) -> bool {
        !self.target_text.is_empty() && self.total_chars >= self.target_text.chars().count()
    }

    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn correct_chars(&self) -> usize {
        self.correct_chars
    }

    pub fn total_chars(&self) -> usize {
        self.total_chars
    }
}
