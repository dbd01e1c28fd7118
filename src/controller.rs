use crate::catalog::CatalogError;
use crate::config::Config;
use crate::generator::{seeded_rng, GeneratorKind, TextGenerator};
use crate::session::TypingSession;
use crate::timer::{Clock, MonotonicClock, Timer};
use rand::rngs::StdRng;
use rand::Rng;

/// Snapshot of a finished run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub wpm: u32,
    pub accuracy: f64,
    pub elapsed_secs: f64,
    pub correct_chars: usize,
    pub total_chars: usize,
    /// The run hit the time limit; `elapsed_secs` is clamped to it
    pub timed_out: bool,
}

/// Owns the active generator, session and timer for one practice surface.
///
/// Every operation completes immediately; the host calls them in the order its
/// UI events happen.
pub struct PracticeController<C: Clock = MonotonicClock> {
    config: Config,
    generator: Box<dyn TextGenerator>,
    session: TypingSession,
    timer: Timer<C>,
    // Seeds generators rebuilt on a kind switch so a seeded run never replays a stream
    seeder: StdRng,
}

impl PracticeController {
    pub fn new(config: Config) -> Result<Self, CatalogError> {
        Self::with_clock(config, MonotonicClock)
    }
}

impl<C: Clock> PracticeController<C> {
    pub fn with_clock(config: Config, clock: C) -> Result<Self, CatalogError> {
        let generator = config.generator.build(config.seed)?;
        let seeder = seeded_rng(config.seed);
        Ok(Self {
            config,
            generator,
            session: TypingSession::new(),
            timer: Timer::with_clock(clock),
            seeder,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn generator_kind(&self) -> GeneratorKind {
        self.generator.kind()
    }

    /// Switch strategy; selecting the active kind keeps its random stream
    pub fn set_generator_kind(&mut self, kind: GeneratorKind) -> Result<(), CatalogError> {
        if kind == self.generator.kind() {
            return Ok(());
        }
        log::debug!("switching generator {} -> {kind}", self.generator.kind());
        let seed = self.config.seed.map(|_| self.seeder.gen::<u64>());
        self.generator = kind.build(seed)?;
        self.config.generator = kind;
        Ok(())
    }

    pub fn generate_text(&mut self, count: i64) -> String {
        self.generator.generate_text(count)
    }

    /// Text sized by the configured count for the active kind
    pub fn next_prompt(&mut self) -> String {
        let count = self.config.count_for(self.generator.kind());
        self.generate_text(i64::try_from(count).unwrap_or(i64::MAX))
    }

    /// Install a new target and start timing it
    pub fn start_session(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("starting session over {} chars", text.chars().count());
        self.session.start_session(text);
        self.timer.start();
    }

    /// Feed the latest snapshot of the typed text; control characters are dropped
    pub fn update_input(&mut self, text: &str) {
        self.session.update_input(strip_control_chars(text));
    }

    pub fn accuracy(&self) -> f64 {
        self.session.accuracy()
    }

    pub fn wpm(&self, elapsed_secs: f64) -> u32 {
        self.session.wpm(elapsed_secs)
    }

    /// Wpm measured against the running timer
    pub fn live_wpm(&self) -> u32 {
        self.session.wpm(self.timer.elapsed_seconds())
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.timer.elapsed_seconds()
    }

    pub fn reset_session(&mut self) {
        log::debug!("resetting session");
        self.session.reset();
        self.timer.stop();
    }

    pub fn session(&self) -> &TypingSession {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// The whole target is typed or the time limit has passed
    pub fn is_finished(&self) -> bool {
        let timed_out = self.config.time_limit_secs.is_some_and(|limit| {
            self.timer.is_running() && self.elapsed_seconds() >= limit as f64
        });
        self.session.is_complete() || timed_out
    }

    /// Stop the clock and take the final numbers; time past the limit is not counted
    pub fn finish(&mut self) -> RunSummary {
        self.timer.stop();
        let measured = self.timer.elapsed_seconds();
        let limit = self.config.time_limit_secs.map(|secs| secs as f64);
        let timed_out = limit.is_some_and(|limit| measured >= limit);
        let elapsed_secs = limit.map_or(measured, |limit| measured.min(limit));
        let summary = RunSummary {
            wpm: self.session.wpm(elapsed_secs),
            accuracy: self.session.accuracy(),
            elapsed_secs,
            correct_chars: self.session.correct_chars(),
            total_chars: self.session.total_chars(),
            timed_out,
        };
        log::debug!("run finished: {summary:?}");
        summary
    }
}

/// Drop C0 and C1 control characters that some keyboards slip into the input
pub fn strip_control_chars(text: &str) -> String {
    text.chars().filter(|c| !c.is_control()).collect()
}
