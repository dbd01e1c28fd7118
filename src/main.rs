use clap::{Parser, Subcommand};
use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};
use typedrill::{
    config::{Config, ConfigStore, FileConfigStore},
    controller::{PracticeController, RunSummary},
    generator::GeneratorKind,
    timer::Clock,
};

/// typing practice: generate text, score typed input, run a quick round
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// config file to read instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// text generation strategy
    #[clap(short = 'g', long, value_enum)]
    generator: Option<GeneratorKind>,

    /// number of words for the word generators
    #[clap(short = 'w', long)]
    number_of_words: Option<usize>,

    /// number of sentences for the sentence generator
    #[clap(short = 'f', long = "full-sentences")]
    number_of_sentences: Option<usize>,

    /// seconds before a practice round is cut off
    #[clap(short = 's', long)]
    number_of_secs: Option<u64>,

    /// fixed seed for reproducible text
    #[clap(long)]
    seed: Option<u64>,

    /// write the effective settings back to the config file
    #[clap(long)]
    save_config: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// print generated practice text
    Generate {
        /// number of tokens, defaults to the configured count
        #[clap(short = 'n', long, allow_hyphen_values = true)]
        count: Option<i64>,
    },
    /// score typed text against a target
    Score {
        #[clap(short = 't', long)]
        target: String,
        #[clap(short = 'i', long)]
        input: String,
        /// elapsed seconds used for wpm
        #[clap(long, default_value_t = 60.0, allow_hyphen_values = true)]
        secs: f64,
    },
    /// print a prompt, read one line from stdin and report the result
    Practice,
}

impl Cli {
    /// Overlay command line flags on top of stored settings
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(generator) = self.generator {
            config.generator = generator;
        }
        if let Some(words) = self.number_of_words {
            config.word_count = words;
        }
        if let Some(sentences) = self.number_of_sentences {
            config.sentence_count = sentences;
        }
        if let Some(secs) = self.number_of_secs {
            config.time_limit_secs = Some(secs);
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let store = cli.config_store();
    let config = cli.apply_to(store.load());

    if cli.save_config {
        store.save(&config)?;
        log::info!("saved settings to {}", store.path().display());
    }

    let mut controller = PracticeController::new(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Generate { count } => {
            let text = match count {
                Some(count) => controller.generate_text(count),
                None => controller.next_prompt(),
            };
            writeln!(out, "{text}")?;
        }
        Command::Score {
            target,
            input,
            secs,
        } => {
            controller.start_session(target);
            controller.update_input(&input);
            write_score(&mut out, &controller, secs)?;
        }
        Command::Practice => {
            let stdin = io::stdin();
            let summary = run_practice(&mut controller, stdin.lock(), &mut out)?;
            write_summary(&mut out, &summary)?;
        }
    }

    Ok(())
}

/// One round: show a prompt, time the reply line, stop at the first line.
/// A reply that lands after the time limit is scored over the limit only.
fn run_practice<C: Clock, R: BufRead, W: Write>(
    controller: &mut PracticeController<C>,
    mut input: R,
    out: &mut W,
) -> io::Result<RunSummary> {
    let prompt = controller.next_prompt();
    writeln!(out, "{prompt}")?;
    out.flush()?;

    controller.start_session(prompt);
    let mut line = String::new();
    input.read_line(&mut line)?;
    controller.update_input(line.trim_end_matches(['\r', '\n']));

    if controller.is_finished() && !controller.session().is_complete() {
        log::debug!("practice round cut off at the time limit");
    }
    Ok(controller.finish())
}

fn write_score<C: Clock, W: Write>(
    out: &mut W,
    controller: &PracticeController<C>,
    secs: f64,
) -> io::Result<()> {
    let session = controller.session();
    writeln!(out, "accuracy: {:.2}%", controller.accuracy())?;
    writeln!(out, "wpm: {}", controller.wpm(secs))?;
    writeln!(
        out,
        "correct: {}/{}",
        session.correct_chars(),
        session.total_chars()
    )
}

fn write_summary<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    writeln!(
        out,
        "wpm: {} accuracy: {:.1}% time: {:.1}s ({}/{} correct)",
        summary.wpm,
        summary.accuracy,
        summary.elapsed_secs,
        summary.correct_chars,
        summary.total_chars
    )?;
    if summary.timed_out {
        writeln!(out, "time limit reached")?;
    }
    Ok(())
}
