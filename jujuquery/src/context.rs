//! Application context that holds resolved settings
//!
//! The context is built following the precedence order:
//! 1. Default values
//! 2. Environment variables (`NO_COLOR`)
//! 3. CLI flags
//!
//! Once built, the context is passed as read-only throughout the command.

use crate::format::{ColorChoice, OutputFormat};
use clap::Args;
use libjujuquery::client::{ClientConfig, DEFAULT_CHARMSTORE_URL};
use std::env;

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;

/// Verbosity of diagnostic output on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Errors and results only
    Normal,
    /// `-v`
    Verbose,
    /// `-vv`
    VeryVerbose,
    /// `-vvv` and above
    Trace,
}

impl VerbosityLevel {
    /// Maps the number of `-v` flags to a level.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }

    /// tracing filter directive used when `RUST_LOG` is unset.
    pub fn log_directive(self) -> &'static str {
        match self {
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "warn,libjujuquery=info",
            VerbosityLevel::VeryVerbose => "warn,libjujuquery=debug",
            VerbosityLevel::Trace => "warn,libjujuquery=trace",
        }
    }
}

/// Flags shared by `juju-search` and `juju-info`.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, default_value = "auto")]
    pub color: String,

    /// Output format: pretty, json, yaml
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Charmstore API endpoint
    #[arg(long, default_value = DEFAULT_CHARMSTORE_URL, hide_default_value = true)]
    pub charmstore_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

/// Application context with resolved settings
#[derive(Debug, Clone)]
pub struct AppContext {
    pub color: ColorChoice,
    pub verbosity: VerbosityLevel,
    pub format: OutputFormat,
    pub charmstore_url: String,
    pub client: ClientConfig,
}

impl Default for AppContext {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            verbosity: VerbosityLevel::Normal,
            format: OutputFormat::Pretty,
            charmstore_url: DEFAULT_CHARMSTORE_URL.to_string(),
            client: ClientConfig::default(),
        }
    }
}

impl AppContext {
    /// Build context with precedence: defaults > env vars > CLI flags
    pub fn build(cli_color: ColorChoice, verbosity: VerbosityLevel) -> Self {
        let mut ctx = Self {
            verbosity,
            ..Self::default()
        };

        if env::var("NO_COLOR").is_ok() {
            ctx.color = ColorChoice::Never;
        }

        // An explicit --color beats NO_COLOR; auto keeps whatever the env said
        if cli_color != ColorChoice::Auto {
            ctx.color = cli_color;
        }

        ctx
    }

    /// Build context from the shared command-line flags.
    pub fn from_args(args: &GlobalArgs) -> Self {
        let mut ctx = Self::build(
            ColorChoice::from(args.color.as_str()),
            VerbosityLevel::from_count(args.verbose),
        );
        ctx.format = OutputFormat::from(args.format.as_str());
        ctx.charmstore_url = args.charmstore_url.clone();
        ctx.client = ctx.client.with_timeout(args.timeout);
        ctx
    }

    /// Creates the charmstore query handle for this invocation.
    pub fn query(&self) -> Result<libjujuquery::Query, String> {
        libjujuquery::Query::builder()
            .base_url(&self.charmstore_url)
            .with_config(self.client.clone())
            .build()
            .map_err(|e| format!("Failed to create charmstore client: {}", e))
    }
}
