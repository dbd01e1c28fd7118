use crate::app_dirs::AppDirs;
use crate::generator::GeneratorKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default length of a run before it is finished automatically
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorKind,
    pub word_count: usize,
    pub sentence_count: usize,
    pub time_limit_secs: Option<u64>,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generator: GeneratorKind::RandomWords,
            word_count: GeneratorKind::RandomWords.default_count(),
            sentence_count: GeneratorKind::Sentences.default_count(),
            time_limit_secs: Some(DEFAULT_TIME_LIMIT_SECS),
            seed: None,
        }
    }
}

impl Config {
    /// Number of tokens to request from a generator of `kind`
    pub fn count_for(&self, kind: GeneratorKind) -> usize {
        match kind {
            GeneratorKind::Sentences => self.sentence_count,
            GeneratorKind::RandomWords | GeneratorKind::MixedCase => self.word_count,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> io::Result<()>;
}

/// Settings kept as pretty JSON in a single file
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

const FALLBACK_FILE_NAME: &str = "typedrill_config.json";

impl FileConfigStore {
    /// Store under the platform config dir, or the working dir when there is none
    pub fn new() -> Self {
        Self::with_path(AppDirs::config_path().unwrap_or_else(|| FALLBACK_FILE_NAME.into()))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when nothing has been saved yet
    fn read(&self) -> Result<Option<Config>, Box<dyn std::error::Error>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        self.read()
            .unwrap_or_else(|e| {
                log::warn!("ignoring unreadable config {}: {e}", self.path.display());
                None
            })
            .unwrap_or_default()
    }

    /// Written next to the target first and renamed over it
    fn save(&self, cfg: &Config) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut staged = self.path.clone().into_os_string();
        staged.push(".tmp");
        let staged = PathBuf::from(staged);
        fs::write(&staged, serde_json::to_string_pretty(cfg)?)?;
        fs::rename(&staged, &self.path)
    }
}
