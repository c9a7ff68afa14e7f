//! Command line parsing.

use crate::error::UsageError;
use clap::{Parser, error::ErrorKind};
use std::ffi::OsString;

pub const USAGE: &str = "Usage: elevenlabs-voices ELEVENLABS_API_KEY";

#[derive(Parser, Debug)]
#[command(name = "elevenlabs-voices", version, about, long_about = None)]
pub struct Cli {
    /// ElevenLabs API key, sent as the `xi-api-key` header
    #[arg(value_name = "ELEVENLABS_API_KEY", allow_hyphen_values = true)]
    pub api_key: String,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Invocation {
    Export(Credential),
    /// `--help` or `--version`; the rendered text is printed and the program exits 0.
    Info(String),
}

impl Cli {
    pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(Invocation::Export(Credential::parse(&cli.api_key)?)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Ok(Invocation::Info(e.render().to_string()))
            }
            Err(e) => Err(UsageError::Clap(e)),
        }
    }
}

/// API key with surrounding whitespace removed. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn parse(raw: &str) -> Result<Self, UsageError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(UsageError::EmptyKey);
        }
        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}
