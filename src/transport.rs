//! HTTP transport
//!
//! [Transport] is the one place the program touches the network. [HttpTransport] is the
//! reqwest blocking implementation used by the binary.

use crate::error::TransportError;
use std::io::Read;

/// Status line and unread body of an HTTP response.
///
/// The body is left unread so that the caller decides whether a failed read matters.
pub struct HttpResponse {
    pub status: http::StatusCode,
    /// Reason phrase as sent by the server, when it differs from the canonical one.
    pub reason: Option<String>,
    pub body: Box<dyn Read>,
}

impl HttpResponse {
    pub fn new(status: http::StatusCode, body: impl Read + 'static) -> Self {
        Self {
            status,
            reason: None,
            body: Box::new(body),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// The server's phrase, else the canonical phrase for the status, else empty.
    pub fn reason_phrase(&self) -> String {
        match &self.reason {
            Some(reason) => reason.clone(),
            None => self
                .status
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
        }
    }
}

impl std::fmt::Debug for HttpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResponse")
            .field("status", &self.status)
            .field("reason", &self.reason)
            .finish_non_exhaustive()
    }
}

pub trait Transport {
    /// Send a GET request. Only failures below HTTP are errors; any status code,
    /// 4xx and 5xx included, comes back as `Ok`.
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError>;
}

/// Blocking reqwest client. No timeout is configured.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(None::<std::time::Duration>)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<HttpResponse, TransportError> {
        let mut builder = self.client.get(url);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let response = builder.send()?;
        tracing::debug!(url, status = %response.status(), "received response");
        // hyper only records the phrase when it is not the canonical one
        let reason = response
            .extensions()
            .get::<hyper::ext::ReasonPhrase>()
            .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
        let status = response.status();
        let mut http_response = HttpResponse::new(status, response);
        http_response.reason = reason;
        Ok(http_response)
    }
}
