use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use thiserror::Error;

pub const DEFAULT_LEVELS: &str = "levels/boxban_levels.txt";
pub const DEFAULT_LOG_FILE: &str = "logs/boxban.log";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Play the pack in the terminal
    #[default]
    Play,
    /// Print the pack as JSON and exit
    Export,
}

/// Terminal box-pushing puzzles.
///
/// Controls: W/A/S/D or arrow keys move, R restarts the level,
/// P/[ and N/] change level, Q quits.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(value_enum, default_value_t = Mode::Play)]
    pub mode: Mode,

    /// Level pack file
    #[arg(short, long, default_value = DEFAULT_LEVELS)]
    pub levels: PathBuf,

    /// Level to start on, counting from 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub level: u32,

    /// Where to write logs; the terminal is taken by the game
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("--level {level} is out of range: the pack has {count} levels")]
    LevelOutOfRange { level: u32, count: usize },
}

impl Cli {
    /// Zero-based index of `--level` in a pack of `level_count` levels.
    pub fn start_index(&self, level_count: usize) -> Result<usize, ConfigError> {
        let index = self.level as usize - 1;
        if index >= level_count {
            return Err(ConfigError::LevelOutOfRange {
                level: self.level,
                count: level_count,
            });
        }
        Ok(index)
    }
}
