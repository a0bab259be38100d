use std::io::Write;

use bitstatus_core::{LookupError, LookupReport};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct ErrorPayload<'a> {
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    kind: &'a str,
    message: String,
    retryable: bool,
}

/// Rendering options shared by the console and one-shot commands.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub format: OutputFormat,
    pub pretty: bool,
    pub history_days: u16,
}

impl Renderer {
    pub fn report<W: Write>(&self, out: &mut W, report: &LookupReport) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Json => self.json(out, report),
            OutputFormat::Text => {
                let code = &report.quote.currency;
                writeln!(
                    out,
                    "{} - Current bitcoin rate = {} {code}",
                    report.quote.observed_at, report.quote.amount
                )?;
                writeln!(
                    out,
                    "Minimum bitcoin rate in last {} days = {} {code}",
                    self.history_days, report.range.min
                )?;
                writeln!(
                    out,
                    "Maximum bitcoin rate in last {} days = {} {code}",
                    self.history_days, report.range.max
                )?;
                Ok(())
            }
        }
    }

    pub fn error<W: Write>(&self, out: &mut W, error: &LookupError) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Json => self.json(
                out,
                &ErrorPayload {
                    error: ErrorBody {
                        kind: error.kind().as_str(),
                        message: error.to_string(),
                        retryable: error.retryable(),
                    },
                },
            ),
            OutputFormat::Text => {
                writeln!(out, "error: {error}")?;
                Ok(())
            }
        }
    }

    fn json<W: Write, T: Serialize>(&self, out: &mut W, value: &T) -> Result<(), CliError> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        writeln!(out, "{payload}")?;
        Ok(())
    }
}
