//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Installed binary name, used for help and completion scripts.
pub const BIN_NAME: &str = "create-go-app";

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand the tool creates a project; `completions` is the
/// only subcommand.
#[derive(Debug, Parser)]
#[command(
    name     = "create-go-app",
    bin_name = "create-go-app",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a Go application from the gostartkit stub",
    long_about = "create-go-app generates a ready-to-build Go application: module \
                  path, database settings and fresh credentials are filled in for \
                  you. Missing values are prompted for when running in a terminal.",
    after_help = "EXAMPLES:\n\
        \x20 create-go-app\n\
        \x20 create-go-app shop --prefix example.com/acme\n\
        \x20 create-go-app shop -p example.com/acme --dry-run\n\
        \x20 create-go-app completions bash > ~/.local/share/bash-completion/completions/create-go-app",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Project creation arguments.
    #[command(flatten)]
    pub create: CreateArgs,

    /// Optional subcommand.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 create-go-app completions bash > ~/.local/share/bash-completion/completions/create-go-app\n\
            \x20 create-go-app completions zsh  > ~/.zfunc/_create-go-app\n\
            \x20 create-go-app completions fish > ~/.config/fish/completions/create-go-app.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for creating a project.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project name.  Only the last path component is used as the name; it
    /// must start with a letter and contain only letters and underscores.
    #[arg(value_name = "PROJECT_NAME", help = "Name of the project to create")]
    pub name: Option<String>,

    /// Module path prefix; the module becomes `<prefix>/<name>`.
    #[arg(
        short = 'p',
        long = "prefix",
        value_name = "PREFIX",
        help = "Module prefix, e.g. example.com/acme"
    )]
    pub prefix: Option<String>,

    /// Directory the project folder is created in.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output_dir: Option<PathBuf>,

    /// Use a local stub directory instead of the embedded one.
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "Local stub directory to generate from"
    )]
    pub template_dir: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Exit with an error if any file could not be created.
    #[arg(long = "strict", help = "Fail if any file could not be created")]
    pub strict: bool,

    /// Never prompt; missing values are an error unless configured.
    #[arg(short = 'y', long = "yes", help = "Do not prompt for missing values")]
    pub yes: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `create-go-app completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["create-go-app"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.create.name.is_none());
        assert!(cli.create.prefix.is_none());
    }

    #[test]
    fn parse_name_and_prefix() {
        let cli = Cli::parse_from([
            "create-go-app",
            "shop",
            "--prefix",
            "example.com/acme",
            "--dry-run",
            "-y",
        ]);
        assert_eq!(cli.create.name.as_deref(), Some("shop"));
        assert_eq!(cli.create.prefix.as_deref(), Some("example.com/acme"));
        assert!(cli.create.dry_run);
        assert!(cli.create.yes);
        assert!(!cli.create.strict);
    }

    #[test]
    fn short_prefix_flag() {
        let cli = Cli::parse_from(["create-go-app", "shop", "-p", "example.com"]);
        assert_eq!(cli.create.prefix.as_deref(), Some("example.com"));
    }

    #[test]
    fn completions_subcommand() {
        let cli = Cli::parse_from(["create-go-app", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions(CompletionsArgs { shell: Shell::Zsh }))
        ));
    }

    #[test]
    fn global_flags_before_subcommand() {
        let cli =
            Cli::try_parse_from(["create-go-app", "--config", "c.toml", "-v", "completions", "bash"])
                .unwrap();
        assert_eq!(cli.global.config.as_deref(), Some(std::path::Path::new("c.toml")));
        assert_eq!(cli.global.verbose, 1);
        assert!(matches!(cli.command, Some(Commands::Completions(_))));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["create-go-app", "completions", "fish", "--no-color", "-c", "c.toml"])
            .unwrap();
        assert!(cli.global.no_color);
        assert!(cli.global.config.is_some());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["create-go-app", "--quiet", "--verbose", "shop"]);
        assert!(result.is_err());
    }
}
