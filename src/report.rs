// Response reporter: decides what, if anything, to tell the user about
// a completed request. Remote failures are ordinary output here, not
// errors; the service saying "no" is a normal outcome of a call.

use serde::Deserialize;
use thiserror::Error;

use crate::api::WireResponse;
use crate::dispatch::Action;

/// JSON body returned by the mutation endpoints.
#[derive(Debug, Deserialize)]
pub struct ServiceResponse {
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The service was expected to answer with JSON but did not.
    #[error("unexpected response from the service: {0}")]
    MalformedBody(String),
}

/// What the user should see for one completed call.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The call succeeded; nothing to print.
    Silent,
    /// Informational lines, printed in order (delete and get_user).
    Lines(Vec<String>),
    /// The service rejected the call; the message is printed and the
    /// process still exits zero.
    RemoteFailure(String),
}

/// Interpret a wire response for the action that produced it.
/// `request_url` is echoed back for `get_user`, whose useful output is
/// the resolved profile address.
pub fn interpret(
    action: Action,
    request_url: &str,
    response: &WireResponse,
) -> Result<Outcome, ReportError> {
    match action {
        Action::CreateUser => json_outcome(response, Some("Pick a new username.")),
        Action::CreateGraph => json_outcome(response, Some("Pick a new Graph ID.")),
        Action::AddPixel => json_outcome(response, None),
        Action::DeleteGraph => Ok(Outcome::Lines(vec![
            response.body.clone(),
            response.status.to_string(),
        ])),
        Action::GetUser => Ok(Outcome::Lines(vec![
            response.status.to_string(),
            request_url.to_string(),
        ])),
    }
}

fn json_outcome(response: &WireResponse, hint: Option<&str>) -> Result<Outcome, ReportError> {
    let parsed: ServiceResponse = serde_json::from_str(&response.body)
        .map_err(|e| ReportError::MalformedBody(e.to_string()))?;
    if parsed.is_success {
        return Ok(Outcome::Silent);
    }
    let message = match hint {
        Some(hint) => format!("{} {}", parsed.message, hint),
        None => parsed.message,
    };
    Ok(Outcome::RemoteFailure(message))
}
