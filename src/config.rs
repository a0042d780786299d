//! Host configuration for the terminal front end.
//!
//! Gameplay constants are fixed; only pacing, the random seed and where
//! logs go can be changed.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::entities::FRAME_RATE;

pub const MAX_FPS: u32 = 240;
pub const DEFAULT_LOG_FILE: &str = "space_bats.log";

#[derive(Debug, Clone, Parser)]
#[command(name = "space_bats")]
#[command(about = "Defend your tank against waves of space bats")]
pub struct Config {
    /// Ticks per second
    #[arg(long, default_value_t = FRAME_RATE as u32)]
    pub fps: u32,

    /// Seed for reproducible enemy spawns; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// File receiving the tracing output (the terminal belongs to the game)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("fps must be between 1 and {max}, got {fps}")]
    InvalidFps { fps: u32, max: u32 },
    #[error("log file path is empty")]
    EmptyLogPath,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps == 0 || self.fps > MAX_FPS {
            return Err(ConfigError::InvalidFps {
                fps: self.fps,
                max: MAX_FPS,
            });
        }
        if self.log_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyLogPath);
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_micros(1_000_000 / self.fps.max(1) as u64)
    }
}
