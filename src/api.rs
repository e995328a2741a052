// API transport: a small blocking HTTP client that executes the
// request descriptors built by the `request` module. It is
// intentionally synchronous since the program issues exactly one
// request per invocation.

use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use thiserror::Error;

use crate::request::RequestSpec;

/// A network-level fault, distinct from the service answering with an
/// unsuccessful body. Reported to the user as text, never a panic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("could not reach the service: {0}")]
    Send(String),
    #[error("could not read the service response: {0}")]
    Body(String),
}

/// Raw result of one executed request.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

/// Executes a `RequestSpec`. The production implementation is
/// `ApiClient`; tests substitute a recording double.
pub trait Transport {
    fn execute(&self, request: &RequestSpec) -> Result<WireResponse, TransportError>;
}

/// Blocking reqwest client with a bounded timeout so a stalled
/// connection cannot hang the invocation indefinitely.
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client })
    }
}

impl Transport for ApiClient {
    fn execute(&self, request: &RequestSpec) -> Result<WireResponse, TransportError> {
        let mut builder = self.client.request(request.method.clone(), request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        // Show a spinner while the request is in flight; cleared before
        // any output is printed.
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message("Contacting pixe.la...");

        let sent = builder.send();
        spinner.finish_and_clear();

        let response = sent.map_err(|e| TransportError::Send(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(WireResponse { status, body })
    }
}
