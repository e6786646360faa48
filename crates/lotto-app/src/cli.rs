use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

use lotto_core::AppInfo;

use crate::config::{BoundsConfig, FilterConfig, QuickPickConfig};

/// Enumerate every six-number ticket from a pool and filter it by even count and sum.
#[derive(Debug, Parser)]
#[command(
    name = AppInfo::name(),
    author,
    version = AppInfo::version(),
    about = "Exhaustive 6-of-N ticket filter"
)]
pub struct Cli {
    /// Path to a YAML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Pool numbers, comma separated (e.g. 3,8,15,22,29,36,41).
    #[arg(short, long, value_name = "LIST", value_delimiter = ',', conflicts_with = "quick_pick")]
    pub numbers: Vec<u8>,

    /// Draw a random pool of this many numbers instead of listing them.
    #[arg(long, value_name = "SIZE")]
    pub quick_pick: Option<usize>,

    /// Seed for --quick-pick.
    #[arg(long, value_name = "SEED", default_value_t = 0, requires = "quick_pick")]
    pub seed: u64,

    /// Allowed count of even numbers, as MIN..MAX.
    #[arg(long, value_name = "MIN..MAX")]
    pub even: Option<BoundsArg>,

    /// Allowed ticket sum, as MIN..MAX.
    #[arg(long, value_name = "MIN..MAX")]
    pub sum: Option<BoundsArg>,

    /// Print only the final statistics, not every accepted combination.
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write the statistics as JSON to this path.
    #[arg(long, value_name = "FILE")]
    pub summary_json: Option<PathBuf>,

    /// Exit after validating the configuration (no sweep is run).
    #[arg(long)]
    pub validate_only: bool,

    /// Write JSON logs to the configured log file regardless of config.
    #[arg(long)]
    pub log_structured: bool,
}

impl Cli {
    /// Layer command-line overrides on top of a loaded (or default) config.
    pub fn apply(&self, config: &mut FilterConfig) {
        if !self.numbers.is_empty() {
            config.pool = Some(self.numbers.clone());
            config.quick_pick = None;
        }

        if let Some(size) = self.quick_pick {
            config.quick_pick = Some(QuickPickConfig {
                size,
                seed: self.seed,
            });
            config.pool = None;
        }

        if let Some(even) = self.even {
            config.even = Some(BoundsConfig {
                // Anything past u8 is out of the 0..=6 domain; keep it failing validation.
                min: u8::try_from(even.min).unwrap_or(u8::MAX),
                max: u8::try_from(even.max).unwrap_or(u8::MAX),
            });
        }

        if let Some(sum) = self.sum {
            config.sum = Some(BoundsConfig {
                min: sum.min,
                max: sum.max,
            });
        }

        if self.quiet {
            config.output.print_combinations = false;
        }

        if let Some(path) = self.summary_json.as_ref() {
            config.output.summary_json = Some(path.display().to_string());
        }

        if self.log_structured {
            config.logging.enable_structured = true;
        }
    }
}

/// `MIN..MAX` (also `MIN..=MAX` or `MIN-MAX`) from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsArg {
    pub min: u16,
    pub max: u16,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected MIN..MAX, got '{0}'")]
pub struct BoundsArgError(String);

impl FromStr for BoundsArg {
    type Err = BoundsArgError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || BoundsArgError(raw.to_string());
        let (min, max) = raw
            .split_once("..=")
            .or_else(|| raw.split_once(".."))
            .or_else(|| raw.split_once('-'))
            .ok_or_else(invalid)?;
        let min = min.trim().parse().map_err(|_| invalid())?;
        let max = max.trim().parse().map_err(|_| invalid())?;
        Ok(BoundsArg { min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bounds_forms() {
        let expected = BoundsArg { min: 2, max: 4 };
        assert_eq!("2..4".parse::<BoundsArg>(), Ok(expected));
        assert_eq!("2..=4".parse::<BoundsArg>(), Ok(expected));
        assert_eq!("2-4".parse::<BoundsArg>(), Ok(expected));
        assert_eq!(" 2 .. 4 ".parse::<BoundsArg>(), Ok(expected));
        assert!("2".parse::<BoundsArg>().is_err());
        assert!("a..4".parse::<BoundsArg>().is_err());
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "lotto-filter",
            "--numbers",
            "1,2,3,4,5,6,7",
            "--even",
            "2..3",
            "--sum",
            "21..27",
            "--quiet",
            "--summary-json",
            "out/summary.json",
        ])
        .expect("parse");

        let mut config = FilterConfig {
            quick_pick: Some(QuickPickConfig { size: 9, seed: 1 }),
            ..FilterConfig::default()
        };
        cli.apply(&mut config);
        config.validate().expect("valid");

        assert_eq!(config.pool, Some(vec![1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(config.quick_pick, None);
        assert_eq!(config.even, Some(BoundsConfig { min: 2, max: 3 }));
        assert_eq!(config.sum, Some(BoundsConfig { min: 21, max: 27 }));
        assert!(!config.output.print_combinations);
        assert_eq!(config.output.summary_json.as_deref(), Some("out/summary.json"));
    }

    #[test]
    fn quick_pick_replaces_configured_pool() {
        let cli = Cli::try_parse_from(["lotto-filter", "--quick-pick", "12", "--seed", "9"])
            .expect("parse");
        let mut config = FilterConfig {
            pool: Some(vec![1, 2, 3, 4, 5, 6, 7]),
            ..FilterConfig::default()
        };
        cli.apply(&mut config);
        assert_eq!(config.pool, None);
        assert_eq!(config.quick_pick, Some(QuickPickConfig { size: 12, seed: 9 }));
    }

    #[test]
    fn numbers_and_quick_pick_conflict() {
        let result = Cli::try_parse_from([
            "lotto-filter",
            "--numbers",
            "1,2,3,4,5,6,7",
            "--quick-pick",
            "10",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn command_carries_app_metadata() {
        let command = <Cli as clap::CommandFactory>::command();
        assert_eq!(command.get_name(), AppInfo::name());
        assert_eq!(command.get_version(), Some(AppInfo::version()));
    }

    #[test]
    fn out_of_domain_even_flag_fails_validation() {
        let cli = Cli::try_parse_from(["lotto-filter", "--even", "0..9"]).expect("parse");
        let mut config = FilterConfig::default();
        cli.apply(&mut config);
        assert!(config.validate().is_err());
    }
}
