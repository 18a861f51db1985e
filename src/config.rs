use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flexbox-arena")]
#[command(version, about = "Learn CSS flexbox one declaration at a time")]
pub struct Cli {
    /// Directory of level_*.toml files to play instead of the built-in levels
    #[arg(long, value_name = "DIR")]
    pub levels: Option<PathBuf>,

    /// Seconds allowed per level before the game returns to level 1
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub round_seconds: u32,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn rules(&self) -> Rules {
        Rules {
            round_seconds: self.round_seconds,
            ..Rules::default()
        }
    }
}

/// Scoring and timing rules the game controller applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub round_seconds: u32,
    pub correct_reward: i32,
    pub retry_penalty: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            round_seconds: 60,
            correct_reward: 5,
            retry_penalty: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_rules() {
        let cli = Cli::try_parse_from(["flexbox-arena"]).unwrap();
        assert!(cli.levels.is_none());
        assert!(cli.log_file.is_none());
        assert_eq!(cli.rules(), Rules::default());
    }

    #[test]
    fn round_seconds_is_configurable() {
        let cli = Cli::try_parse_from(["flexbox-arena", "--round-seconds", "30", "--levels", "my-levels"])
            .unwrap();
        assert_eq!(cli.rules().round_seconds, 30);
        assert_eq!(cli.rules().correct_reward, 5);
        assert_eq!(cli.levels, Some(PathBuf::from("my-levels")));
    }

    #[test]
    fn round_seconds_is_capped_at_a_minute() {
        assert!(Cli::try_parse_from(["flexbox-arena", "--round-seconds", "61"]).is_err());
        assert!(Cli::try_parse_from(["flexbox-arena", "--round-seconds", "0"]).is_err());
    }
}
