//! Command line configuration for the terminal game
//!
//! Every option can also be set through an environment variable; command line
//! arguments take priority.

use anyhow::{anyhow, Result};
use clap::Parser;

use std::path::PathBuf;

use connect4_tutor::search::DEFAULT_DEPTH;

/// Deeper searches take too long to play interactively
pub const MAX_DEPTH: usize = 10;

#[derive(Parser, Debug, Clone)]
#[command(name = "connect4", about = "Play Connect 4 against the computer, with a strategy tutor")]
pub struct Config {
    /// Number of plies the computer searches
    #[arg(long, env = "CONNECT4_DEPTH", default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Let the computer make the first move
    #[arg(long, env = "CONNECT4_COMPUTER_FIRST")]
    pub computer_first: bool,

    /// Directory holding the tutor's strategy notes
    #[arg(long, env = "CONNECT4_KNOWLEDGE_BASE", default_value = "knowledge_base")]
    pub knowledge_base: PathBuf,

    /// Log level used when RUST_LOG is not set
    #[arg(long, env = "CONNECT4_LOG", default_value = "warn")]
    pub log_level: String,

    /// Print the full tutor prompt alongside each hint
    #[arg(long)]
    pub prompt: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(anyhow!(
                "search depth must be between 1 and {}, got {}",
                MAX_DEPTH,
                self.depth
            ));
        }
        if self.log_level.parse::<tracing::Level>().is_err() {
            return Err(anyhow!("unknown log level '{}'", self.log_level));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() -> Result<()> {
        let config = Config::try_parse_from(["connect4"])?;
        config.validate()?;
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert!(!config.computer_first);
        assert_eq!(config.knowledge_base, PathBuf::from("knowledge_base"));
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_depth() -> Result<()> {
        let config = Config::try_parse_from(["connect4", "--depth", "0"])?;
        assert!(config.validate().is_err());

        let config = Config::try_parse_from(["connect4", "--depth", "11"])?;
        assert!(config.validate().is_err());

        let config = Config::try_parse_from(["connect4", "--depth", "6", "--computer-first"])?;
        config.validate()?;
        assert!(config.computer_first);
        Ok(())
    }

    #[test]
    fn rejects_unknown_log_level() -> Result<()> {
        let config = Config::try_parse_from(["connect4", "--log-level", "chatty"])?;
        assert!(config.validate().is_err());
        Ok(())
    }
}
