//! Command line options and the validated settings the demos run with.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "rx-basics")]
#[command(about = "Runs the single value, emitter, interval and disposal demos", long_about = None)]
pub struct Cli {
    /// Value emitted by the single value and disposal demos
    #[arg(long, default_value = "Hello")]
    pub greeting: String,

    /// Comma separated values pushed by the emitter demo
    #[arg(long, value_delimiter = ',', default_values = ["A", "B", "C"])]
    pub letters: Vec<String>,

    /// Milliseconds between two interval ticks
    #[arg(long, default_value_t = 1000)]
    pub interval_ms: u64,

    /// Number of interval ticks before the sequence completes
    #[arg(long, default_value_t = 10)]
    pub count: usize,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("interval period must be greater than zero")]
    ZeroInterval,
}

/// Settings for one run of the demos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub greeting: String,
    pub letters: Vec<String>,
    pub interval: Duration,
    pub interval_count: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            greeting: "Hello".to_owned(),
            letters: vec!["A".to_owned(), "B".to_owned(), "C".to_owned()],
            interval: Duration::from_secs(1),
            interval_count: 10,
        }
    }
}

impl TryFrom<Cli> for DemoConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(DemoConfig {
            greeting: cli.greeting,
            letters: cli.letters,
            interval: Duration::from_millis(cli.interval_ms),
            interval_count: cli.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_config_default() {
        let cli = Cli::try_parse_from(["rx-basics"]).unwrap();
        assert_eq!(DemoConfig::try_from(cli).unwrap(), DemoConfig::default());
    }

    #[test]
    fn letters_are_split_on_commas() {
        let cli = Cli::try_parse_from(["rx-basics", "--letters", "x,y", "--count", "3"]).unwrap();
        let config = DemoConfig::try_from(cli).unwrap();

        assert_eq!(config.letters, vec!["x", "y"]);
        assert_eq!(config.interval_count, 3);
    }

    #[test]
    fn zero_interval_is_rejected() {
        let cli = Cli::try_parse_from(["rx-basics", "--interval-ms", "0"]).unwrap();
        assert_eq!(DemoConfig::try_from(cli), Err(ConfigError::ZeroInterval));
    }
}
