//! Export the **ElevenLabs** voice catalog.
//!
//! One authenticated GET against `https://api.elevenlabs.io/v1/voices`, then two files:
//! + `voices.json`: the full response, pretty-printed, non-ASCII kept verbatim.
//! + `voices.csv`: one fully quoted row per voice with the columns
//!   `voice_id,name,category,gender,age,accent,description`.
//!
//! # How to use
//! The binary takes the API key as its only argument:
//! ```text
//! elevenlabs-voices sk_0123456789abcdef
//! ```
//! The same pipeline is available as a library through [run], which takes any
//! [Transport](transport::Transport) so the network can be replaced:
//! ```no_run
//! use elevenlabs_voices::{config::ExportConfig, run, transport::HttpTransport};
//!
//! fn main() {
//!     let transport = HttpTransport::new().unwrap();
//!     let code = run(
//!         ["elevenlabs-voices", "sk_0123456789abcdef"],
//!         &transport,
//!         &ExportConfig::default(),
//!         &mut std::io::stdout(),
//!     );
//!     std::process::exit(code);
//! }
//! ```
//! The stages can also be called one at a time with [fetch_voices](voice::fetch_voices),
//! [VoiceCollection::validate](voice::VoiceCollection::validate),
//! [write_json](export::write_json) and [write_csv](export::write_csv).

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod transport;
pub mod voice;

use crate::{
    cli::{Cli, Credential, Invocation, USAGE},
    config::ExportConfig,
    error::{Error, FetchError, Result, SchemaError, UsageError},
    transport::Transport,
    voice::{VoiceCollection, fetch_voices},
};
use std::{ffi::OsString, io::Write};

/// Run the whole program: parse `args`, fetch, validate, write both exports.
///
/// Everything meant for the user goes to `out`. Returns the process exit code:
/// 0 once both files are written, 1 on any failure.
pub fn run<I, T, W>(args: I, transport: &dyn Transport, config: &ExportConfig, out: &mut W) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let result = match Cli::parse_invocation(args) {
        Ok(Invocation::Info(text)) => {
            say(out, format_args!("{}", text.trim_end()));
            return 0;
        }
        Ok(Invocation::Export(credential)) => export(&credential, transport, config, out),
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            if let Err(io) = report(&e, out) {
                tracing::error!("could not print diagnostics: {io}");
            }
            1
        }
    }
}

fn export<W: Write>(
    credential: &Credential,
    transport: &dyn Transport,
    config: &ExportConfig,
    out: &mut W,
) -> Result<()> {
    say(out, format_args!("Fetching voices from ElevenLabs..."));
    let raw = fetch_voices(transport, &config.voices_url, credential)?;
    let voices = VoiceCollection::validate(raw)?;

    let json_path = config.json_path();
    export::write_json(&json_path, &voices)?;
    say(out, format_args!("Wrote raw JSON to {}", json_path.display()));

    let csv_path = config.csv_path();
    let count = export::write_csv(&csv_path, &voices)?;
    say(
        out,
        format_args!("Wrote CSV with {count} voices to {}", csv_path.display()),
    );
    Ok(())
}

/// Progress lines are informational; a closed stdout must not fail the export.
fn say<W: Write>(out: &mut W, line: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(out, "{line}") {
        tracing::debug!("stdout write failed: {e}");
    }
}

fn report<W: Write>(error: &Error, out: &mut W) -> std::io::Result<()> {
    match error {
        Error::UsageError(UsageError::EmptyKey) => writeln!(out, "Error: empty API key."),
        Error::UsageError(UsageError::Clap(e)) => {
            tracing::debug!("argument parsing failed: {e}");
            writeln!(out, "{USAGE}")
        }
        Error::FetchError(FetchError::Transport(e)) => {
            tracing::debug!("transport failure: {e}");
            writeln!(out, "Connection error: {}", e.reason)
        }
        Error::FetchError(FetchError::Provider {
            status,
            reason,
            body,
        }) => {
            writeln!(out, "HTTP error: {} {reason}", status.as_u16())?;
            if let Some(body) = body {
                writeln!(out, "Response body: {body}")?;
            }
            Ok(())
        }
        Error::SchemaError(SchemaError::MissingVoices { raw }) => {
            tracing::warn!("response has no 'voices' key");
            writeln!(out, "Warning: 'voices' key not in response. Raw response:")?;
            let dump = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
            writeln!(out, "{dump}")
        }
        other => {
            tracing::error!("{other}");
            writeln!(out, "Error: {other}")
        }
    }
}
