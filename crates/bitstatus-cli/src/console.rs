//! Interactive read loop.
//!
//! Each line is trimmed and upper-cased. `HELP` and `QUIT` are handled here
//! and never reach the lookup; everything else is treated as a currency code.
//! Lookup failures and undecodable lines are printed and the loop continues.

use std::io::Write;

use bitstatus_core::PriceLookup;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::error::CliError;
use crate::output::Renderer;

pub const QUIT: &str = "QUIT";
pub const HELP: &str = "HELP";

const BANNER: &str = r"
 _     _ _       _        _
| |__ (_) |_ ___| |_ __ _| |_ _   _ ___
| '_ \| | __/ __| __/ _` | __| | | / __|
| |_) | | |_\__ \ || (_| | |_| |_| \__ \
|_.__/|_|\__|___/\__\__,_|\__|\__,_|___/
";

const PROMPT: &str = "\nIf you need help, type 'HELP'\nType 'QUIT' to exit\nOr type currency code to continue:";

pub struct Console<'a, W> {
    lookup: &'a PriceLookup,
    renderer: Renderer,
    out: W,
}

impl<'a, W: Write> Console<'a, W> {
    pub fn new(lookup: &'a PriceLookup, renderer: Renderer, out: W) -> Self {
        Self {
            lookup,
            renderer,
            out,
        }
    }

    pub async fn run<R>(&mut self, mut input: R, show_banner: bool) -> Result<(), CliError>
    where
        R: AsyncBufRead + Unpin,
    {
        if show_banner {
            writeln!(self.out, "{BANNER}")?;
        }
        writeln!(self.out, "Welcome to bitstatus!")?;

        let mut buffer = Vec::new();
        loop {
            writeln!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            buffer.clear();
            if input.read_until(b'\n', &mut buffer).await? == 0 {
                break;
            }
            let Ok(line) = std::str::from_utf8(&buffer) else {
                tracing::info!(bytes = buffer.len(), "console line is not valid UTF-8");
                writeln!(self.out, "error: input is not valid UTF-8")?;
                continue;
            };
            let command = line.trim().to_ascii_uppercase();

            match command.as_str() {
                "" => continue,
                QUIT => break,
                HELP => self.help()?,
                code => self.lookup_and_render(code).await?,
            }
        }

        writeln!(self.out, "Thanks for using bitstatus. Bye...")?;
        Ok(())
    }

    fn help(&mut self) -> Result<(), CliError> {
        writeln!(self.out, "These are the commands that you can use:")?;
        writeln!(self.out, "1. Currency codes: 'USD', 'EUR', 'GBP', etc.")?;
        writeln!(self.out, "2. Type 'QUIT' to exit from program")?;
        Ok(())
    }

    async fn lookup_and_render(&mut self, code: &str) -> Result<(), CliError> {
        match self.lookup.lookup(code).await {
            Ok(report) => self.renderer.report(&mut self.out, &report),
            Err(error) => {
                tracing::info!(kind = error.kind().as_str(), %error, "lookup failed");
                self.renderer.error(&mut self.out, &error)
            }
        }
    }
}
