// Library surface shared by the binary and integration tests.
pub mod app_dirs;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod generator;
pub mod session;
pub mod timer;
pub mod word;

pub use controller::{PracticeController, RunSummary};
pub use generator::{GeneratorKind, TextGenerator};
pub use session::TypingSession;
pub use timer::Timer;
