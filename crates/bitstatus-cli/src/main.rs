mod cli;
mod console;
mod error;
mod output;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use bitstatus_core::{PriceLookup, ReqwestHttpClient, ServiceConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::console::Console;
use crate::error::CliError;
use crate::output::Renderer;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;
    tracing::debug!(base_url = config.base_url(), timeout_ms = config.timeout_ms(), "configuration loaded");

    let renderer = Renderer {
        format: cli.format,
        pretty: cli.pretty,
        history_days: config.history_days(),
    };
    let http_client = ReqwestHttpClient::new(config.user_agent());
    let lookup = PriceLookup::new(Arc::new(http_client), config);

    match &cli.command {
        Some(Command::Quote(args)) => {
            let code = quote(&lookup, &renderer, &args.currency, || io::stdout().lock()).await?;
            Ok(ExitCode::from(code))
        }
        None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            Console::new(&lookup, renderer, io::stdout())
                .run(stdin, !cli.no_banner)
                .await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// One-shot lookup; the output is opened only once the lookup has finished.
async fn quote<W, F>(
    lookup: &PriceLookup,
    renderer: &Renderer,
    currency: &str,
    open_output: F,
) -> Result<u8, CliError>
where
    W: Write,
    F: FnOnce() -> W,
{
    let outcome = lookup.lookup(&currency.trim().to_ascii_uppercase()).await;
    let mut out = open_output();
    match outcome {
        Ok(report) => {
            renderer.report(&mut out, &report)?;
            Ok(0)
        }
        Err(error) => {
            renderer.error(&mut out, &error)?;
            Ok(CliError::from(error).exit_code())
        }
    }
}

fn build_config(cli: &Cli) -> Result<ServiceConfig, CliError> {
    let mut config = ServiceConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms)?;
    }
    if let Some(history_days) = cli.history_days {
        config = config.with_history_days(history_days)?;
    }
    if let Some(user_agent) = &cli.user_agent {
        config = config.with_user_agent(user_agent)?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use bitstatus_core::{HttpResponse, ScriptedHttpClient};

    use super::*;
    use crate::cli::OutputFormat;

    fn renderer() -> Renderer {
        Renderer {
            format: OutputFormat::Text,
            pretty: false,
            history_days: 30,
        }
    }

    #[tokio::test]
    async fn quote_opens_output_after_both_requests() {
        let client = Arc::new(
            ScriptedHttpClient::new()
                .with_response(
                    "currentprice/GBP.json",
                    HttpResponse::ok_json(r#"{"bpi":{"GBP":{"rate_float":50123.5}}}"#),
                )
                .with_response(
                    "historical",
                    HttpResponse::ok_json(r#"{"bpi":{"2024-01-01":49000,"2024-01-02":51000.25}}"#),
                ),
        );
        let lookup = PriceLookup::new(client.clone(), ServiceConfig::default());
        let mut out = Vec::new();
        let sink = &mut out;
        let requests_seen = Arc::clone(&client);

        let code = quote(&lookup, &renderer(), " gbp ", move || {
            assert_eq!(requests_seen.request_count(), 2);
            sink
        })
        .await
        .expect("quote should render");

        assert_eq!(code, 0);
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Current bitcoin rate = 50123.5 GBP"));
        assert!(text.contains("Maximum bitcoin rate in last 30 days = 51000.25 GBP"));
    }

    #[tokio::test]
    async fn quote_failure_is_rendered_with_its_exit_code() {
        let client = Arc::new(ScriptedHttpClient::new());
        let lookup = PriceLookup::new(client.clone(), ServiceConfig::default());
        let mut out = Vec::new();
        let sink = &mut out;

        let code = quote(&lookup, &renderer(), "USD", move || sink)
            .await
            .expect("error should render");

        assert_eq!(code, 3);
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("error: current_price service is unavailable"));
    }

    #[test]
    fn user_agent_flag_reaches_config() {
        let cli = Cli::try_parse_from(["bitstatus", "--user-agent", "desk-monitor/1.0"])
            .expect("valid args");
        let config = build_config(&cli).expect("valid config");
        assert_eq!(config.user_agent(), "desk-monitor/1.0");
    }
}
