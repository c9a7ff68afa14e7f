//! Voice Type and Fetch function
//!
//! Use [fetch_voices] to get the raw voice catalog, then [VoiceCollection::validate] to check it
//! has the shape the exporters expect.

use crate::{
    cli::Credential,
    config::API_KEY_HEADER,
    error::{FetchError, SchemaError},
    transport::Transport,
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;

/// Demographic labels attached to a voice
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Labels {
    #[serde(deserialize_with = "text")]
    pub gender: String,
    #[serde(deserialize_with = "text")]
    pub age: String,
    #[serde(deserialize_with = "text")]
    pub accent: String,
}

/// Voice get from the ElevenLabs voices API.
///
/// Every field defaults to an empty string, so a sparse record still produces a full row.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VoiceRecord {
    #[serde(deserialize_with = "text")]
    pub voice_id: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(deserialize_with = "text")]
    pub category: String,
    #[serde(deserialize_with = "text")]
    pub description: String,
    #[serde(deserialize_with = "labels")]
    pub labels: Labels,
}

impl VoiceRecord {
    /// Read a record out of one element of `voices`. Anything that is not a mapping gives an
    /// empty record.
    pub fn from_value(value: &Value) -> Self {
        Self::deserialize(value).unwrap_or_default()
    }
}

/// `null` reads as empty, other scalars as their JSON text.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn labels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Labels, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => Labels::deserialize(&value).unwrap_or_default(),
        _ => Labels::default(),
    })
}

/// Top-level voices API response.
///
/// Kept as the raw JSON value so keys other than `voices` reach the JSON export untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceCollection {
    raw: Value,
}

impl VoiceCollection {
    /// Require a top-level mapping with a `voices` key. Nothing else is checked.
    pub fn validate(raw: Value) -> Result<Self, SchemaError> {
        match raw.get("voices") {
            Some(_) => Ok(Self { raw }),
            None => Err(SchemaError::MissingVoices { raw }),
        }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }
}

/// Get the voice catalog with `credential` sent as the `xi-api-key` header.
pub fn fetch_voices(
    transport: &dyn Transport,
    url: &str,
    credential: &Credential,
) -> Result<Value, FetchError> {
    tracing::info!(url, "requesting voices");
    let mut response = transport.get(url, &[(API_KEY_HEADER, credential.as_str())])?;

    if !response.status.is_success() {
        let status = response.status;
        let reason = response.reason_phrase();
        let body = read_body_lossy(&mut response.body);
        tracing::debug!(status = status.as_u16(), has_body = body.is_some(), "provider error");
        return Err(FetchError::Provider {
            status,
            reason,
            body,
        });
    }

    let text = std::io::read_to_string(&mut response.body)?;
    tracing::debug!(bytes = text.len(), "received voices body");
    Ok(serde_json::from_str(&text)?)
}

/// Best-effort read of an error body. A failed read yields `None` and is otherwise ignored.
fn read_body_lossy(body: &mut dyn Read) -> Option<String> {
    let mut bytes = Vec::new();
    match body.read_to_end(&mut bytes) {
        Ok(_) => String::from_utf8(bytes).ok(),
        Err(e) => {
            tracing::debug!("could not read error body: {e}");
            None
        }
    }
}
