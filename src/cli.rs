use clap::{Parser, Subcommand, ValueEnum};

use crate::extract::GenderMode;
use crate::services::Scope;

#[derive(Parser, Debug)]
#[command(author, version, about = "fbref.com football competitions scraper")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Scrape the competitions listing into JSON and CSV artifacts
    Scrape {
        /// Which gender slice to keep
        #[arg(short, long, value_enum, default_value_t = GenderArg::All)]
        gender: GenderArg,
        /// Club or national-team table sections
        #[arg(long, value_enum, default_value_t = ScopeArg::All)]
        scope: ScopeArg,
        /// Season as YYYY or YYYY-YYYY (defaults to the current season)
        #[arg(short, long)]
        season: Option<String>,
        /// Visit each competition's page for champion/top-scorer info
        #[arg(long)]
        details: bool,
    },
    /// Scrape one league's season history
    History {
        /// League name as shown on the competitions page
        league: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderArg {
    All,
    Men,
    Women,
}

impl From<GenderArg> for GenderMode {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::All => GenderMode::All,
            GenderArg::Men => GenderMode::Men,
            GenderArg::Women => GenderMode::Women,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    All,
    Club,
    National,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::All => Scope::All,
            ScopeArg::Club => Scope::Club,
            ScopeArg::National => Scope::NationalTeam,
        }
    }
}
