//! Command-line configuration for the GUI binary
//!
//! Defaults come from environment variables when set, CLI flags win.

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

use gomoku::{SearchConfig, Stone, DEFAULT_BRANCHING_LIMIT, DEFAULT_SEARCH_DEPTH};

fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

fn default_depth() -> u32 {
    env_or("GOMOKU_DEPTH", DEFAULT_SEARCH_DEPTH)
}

fn default_branching() -> usize {
    env_or("GOMOKU_BRANCHING", DEFAULT_BRANCHING_LIMIT)
}

fn default_log_level() -> String {
    env_or("GOMOKU_LOG_LEVEL", "info".to_string())
}

/// Color the human plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "gomoku")]
#[command(about = "Five in a row with pair captures against a minimax opponent")]
pub struct Config {
    /// Plies the computer looks ahead
    #[arg(long, default_value_t = default_depth())]
    pub depth: u32,

    /// Candidate moves kept per search node
    #[arg(long, default_value_t = default_branching())]
    pub branching: usize,

    /// Seed for the computer's move shuffling (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Color played by the human
    #[arg(long, value_enum, default_value_t = Side::Black)]
    pub human_color: Side,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = default_log_level())]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(anyhow!("depth must be at least 1"));
        }
        if self.branching == 0 {
            return Err(anyhow!("branching must be at least 1"));
        }
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }
        Ok(())
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.depth,
            branching_limit: self.branching,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let config = Config::parse_from([
            "gomoku",
            "--depth",
            "2",
            "--branching",
            "7",
            "--seed",
            "3",
            "--human-color",
            "white",
            "--log-level",
            "debug",
        ]);
        config.validate().unwrap();
        assert_eq!(config.human_color, Side::White);
        assert_eq!(
            config.search_config(),
            SearchConfig {
                depth: 2,
                branching_limit: 7,
                seed: Some(3),
            }
        );
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_depth = Config::parse_from(["gomoku", "--depth", "0"]);
        assert!(zero_depth.validate().is_err());

        let bad_level = Config::parse_from(["gomoku", "--log-level", "loud"]);
        assert!(bad_level.validate().is_err());
    }
}
