//! Flags shared by project creation and `completions`.
//!
//! Every flag here is `global`, so it may appear on either side of the
//! subcommand: `create-go-app -c my.toml completions bash` and
//! `create-go-app completions bash -c my.toml` parse the same way.

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors and per-file failures
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain output without ANSI colours
    ///
    /// `NO_COLOR` set to any value other than an empty string, `0`, `false`,
    /// `no` or `off` has the same effect.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the per-user config file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output style; `json` prints the creation report or dry-run plan
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise
    #[default]
    Auto,
    /// Coloured text
    Human,
    /// Text without colours
    Plain,
    /// Machine-readable document on stdout
    Json,
}
