//! Interactive prompts for values missing from the command line.
//!
//! Prompting needs the `interactive` feature, a terminal on stdin and
//! stderr, and no `--yes`.  Otherwise a missing value is a usage error.

use std::io::IsTerminal as _;

use crate::{
    error::{CliError, CliResult},
    validation::{split_project_arg, validate_name, validate_prefix},
};

/// Suggested project name.
pub const DEFAULT_PROJECT_NAME: &str = "demo";

/// Suggested module prefix.
pub const DEFAULT_PREFIX: &str = "app.gostartkit.com/go";

pub struct Prompter {
    enabled: bool,
    #[cfg_attr(not(feature = "interactive"), allow(dead_code))]
    color: bool,
}

impl Prompter {
    /// `allow` is false when the user passed `--yes`.
    pub fn new(allow: bool, color: bool) -> Self {
        let terminal = std::io::stdin().is_terminal() && console::Term::stderr().is_term();
        Self {
            enabled: allow && terminal,
            color,
        }
    }

    pub fn project_name(&self) -> CliResult<String> {
        self.ask(
            "What is your project named?",
            DEFAULT_PROJECT_NAME,
            |input| {
                split_project_arg(input)
                    .and_then(|target| validate_name(target.name))
                    .map_err(|_| format!("Invalid project name: {input}"))
            },
            CliError::MissingArgument {
                what: "project name",
                example: "create-go-app demo",
            },
        )
    }

    pub fn prefix(&self) -> CliResult<String> {
        self.ask(
            "What is your prefix?",
            DEFAULT_PREFIX,
            |input| validate_prefix(input).map_err(|_| format!("Invalid prefix: {input}")),
            CliError::MissingArgument {
                what: "module prefix",
                example: "create-go-app demo --prefix app.gostartkit.com/go",
            },
        )
    }

    #[cfg(feature = "interactive")]
    fn ask(
        &self,
        prompt: &str,
        default: &str,
        validate: fn(&str) -> Result<(), String>,
        missing: CliError,
    ) -> CliResult<String> {
        use dialoguer::{
            Input,
            theme::{ColorfulTheme, SimpleTheme, Theme},
        };

        if !self.enabled {
            return Err(missing);
        }

        let colorful = ColorfulTheme::default();
        let theme: &dyn Theme = if self.color { &colorful } else { &SimpleTheme };

        let answer: String = Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .default(default.to_owned())
            .validate_with(|input: &String| validate(input.trim()))
            .interact_text()
            .map_err(prompt_error)?;

        Ok(answer.trim().to_owned())
    }

    #[cfg(not(feature = "interactive"))]
    fn ask(
        &self,
        _prompt: &str,
        _default: &str,
        _validate: fn(&str) -> Result<(), String>,
        missing: CliError,
    ) -> CliResult<String> {
        let _ = self.enabled;
        Err(missing)
    }
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        dialoguer::Error::IO(e) => CliError::IoError {
            message: "failed to read answer".into(),
            source: e,
        },
    }
}
