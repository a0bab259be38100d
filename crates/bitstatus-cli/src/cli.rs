//! CLI argument definitions for bitstatus.
//!
//! Without a subcommand the interactive console starts. Global options
//! override the `BITSTATUS_*` environment variables.
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `https://api.coindesk.com` | BPI service root |
//! | `--timeout-ms` | `3000` | Per-request timeout |
//! | `--history-days` | `30` | Length of the historical window |
//! | `--user-agent` | `bitstatus/<version>` | `User-Agent` header value |
//! | `--format` | `text` | Output format (text, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--no-banner` | `false` | Skip the console banner |
//!
//! # Examples
//!
//! ```bash
//! bitstatus
//! bitstatus quote EUR
//! bitstatus quote usd --format json --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Current Bitcoin rate and its trailing range from the CoinDesk BPI.
#[derive(Debug, Parser)]
#[command(
    name = "bitstatus",
    author,
    version,
    about = "Current Bitcoin rate and 30-day range per currency"
)]
pub struct Cli {
    /// BPI service root URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Number of days covered by the historical range.
    #[arg(long, global = true)]
    pub history_days: Option<u16>,

    /// `User-Agent` header sent to the service.
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Do not print the banner when the console starts.
    #[arg(long, global = true, default_value_t = false)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per lookup.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one currency and exit.
    ///
    /// # Examples
    ///
    ///   bitstatus quote USD
    ///   bitstatus quote eur --format json
    Quote(QuoteArgs),
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// ISO 4217 currency code (e.g., USD, EUR, GBP).
    pub currency: String,
}
