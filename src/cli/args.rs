//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::domain::{District, FilterCriteria, Health};

/// Urban tree inventory explorer: filtering, aggregation, and CO2 goal estimation
#[derive(Parser, Debug)]
#[command(name = "treedash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the inventory comes from.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Load records from a JSON file instead of generating them
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Number of records to generate (default from config)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Generator seed for a reproducible inventory
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Filter criteria; omitted flags mean "All".
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only trees with this health value (Good, Moderate, Poor)
    #[arg(long)]
    pub health: Option<Health>,

    /// Only trees in this district (e.g. "V. Ker." or "V")
    #[arg(long)]
    pub district: Option<District>,

    /// Only trees whose address contains this text (case-insensitive)
    #[arg(long)]
    pub street: Option<String>,
}

impl FilterArgs {
    pub fn to_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            health: self.health,
            district: self.district,
            street_query: self.street.clone().unwrap_or_default(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List filtered trees as cards
    List {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Show at most this many cards
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show species distribution and district CO2 totals
    Summary {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// How many top districts to rank
        #[arg(long, default_value_t = 5)]
        top: usize,
    },

    /// Estimate trees required to offset a yearly CO2 goal (tonnes)
    Goal {
        /// Goal in tonnes CO2/year
        goal: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export filtered trees to a CSV file
    Export {
        /// Output file path
        #[arg(value_hint = ValueHint::FilePath)]
        output: PathBuf,

        /// Add Age, YearlyTonnes, Size and TenYearTonnes columns
        #[arg(long)]
        expanded: bool,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
