use crate::games::unscramble::words::WordBank;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const MAX_NO_OF_WORDS: usize = 10;
pub const SCORE_INCREASE: u32 = 20;

/// On-disk config. Every field is optional; missing ones keep the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub max_words: Option<usize>,
    pub score_increase: Option<u32>,
    pub words: Option<Vec<String>>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

/// Validated settings for one play session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub max_words: usize,
    pub score_increase: u32,
    pub words: WordBank,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_words: MAX_NO_OF_WORDS,
            score_increase: SCORE_INCREASE,
            words: WordBank::builtin(),
        }
    }
}

impl GameConfig {
    /// Layer a file config over the defaults
    pub fn from_file(file: FileConfig) -> Result<Self> {
        let defaults = Self::default();
        let words = match file.words {
            Some(entries) => WordBank::new(entries).context("invalid word list in config")?,
            None => defaults.words,
        };
        let config = Self {
            max_words: file.max_words.unwrap_or(defaults.max_words),
            score_increase: file.score_increase.unwrap_or(defaults.score_increase),
            words,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_words == 0 {
            bail!("max_words must be at least 1");
        }
        if self.score_increase == 0 {
            bail!("score_increase must be at least 1");
        }
        // Words never repeat within a game
        if self.words.len() < self.max_words {
            bail!(
                "word bank has {} words but a game needs {}",
                self.words.len(),
                self.max_words
            );
        }
        Ok(())
    }
}
