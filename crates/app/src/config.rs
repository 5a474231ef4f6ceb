use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Tryunfo";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("invalid --title value: {raw:?}")]
    InvalidTitle { raw: String },
    #[error("invalid {name} value: {raw:?} (expected 1/0, true/false, yes/no)")]
    InvalidSwitch { name: &'static str, raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub demo: bool,
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Config),
    Help,
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_switch(name: &'static str, raw: &str) -> Result<bool, ArgsError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ArgsError::InvalidSwitch {
            name,
            raw: raw.to_string(),
        }),
    }
}

impl Config {
    /// Resolve configuration from environment lookups, then command-line flags.
    ///
    /// Flags win over environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ArgsError` for unknown flags, missing values or malformed values.
    pub fn load(
        env: impl Fn(&str) -> Option<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Result<Command, ArgsError> {
        let mut title = env("TRYUNFO_TITLE")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let mut demo = match env("TRYUNFO_DEMO") {
            Some(raw) => parse_switch("TRYUNFO_DEMO", &raw)?,
            None => false,
        };
        let mut log_filter = env("TRYUNFO_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--title" => {
                    let value = require_value(&mut args, "--title")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidTitle { raw: value });
                    }
                    title = value;
                }
                "--demo" => demo = true,
                "--log" => log_filter = require_value(&mut args, "--log")?,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self {
            title,
            demo,
            log_filter,
        }))
    }
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--title <text>] [--demo] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --title {DEFAULT_TITLE}");
    eprintln!("  --log {DEFAULT_LOG_FILTER}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRYUNFO_TITLE, TRYUNFO_DEMO, TRYUNFO_LOG");
}
