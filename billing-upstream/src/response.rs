//! Shared response handling for upstream calls.

use billing_types::UpstreamError;
use serde::de::DeserializeOwned;

/// Where the message of a failed call comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureMessage {
    /// The provider's error envelope (`{"error": {"message": ..}}`), falling
    /// back to the status line when the body has none.
    Envelope,
    /// Always `Request failed with status code <n>`.
    StatusLine,
}

pub(crate) fn transport(err: reqwest::Error) -> UpstreamError {
    UpstreamError::Transport(err.to_string())
}

fn status_line(status: u16) -> String {
    format!("Request failed with status code {}", status)
}

/// Decodes a success body, or turns a failure into an [`UpstreamError::Api`].
pub(crate) async fn handle_response<T: DeserializeOwned>(
    resp: reqwest::Response,
    failure: FailureMessage,
) -> Result<T, UpstreamError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(|e| UpstreamError::Decode(e.to_string()));
    }

    let message = match failure {
        FailureMessage::StatusLine => status_line(status.as_u16()),
        FailureMessage::Envelope => serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.pointer("/error/message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| status_line(status.as_u16())),
    };

    tracing::debug!(status = status.as_u16(), %message, "upstream call failed");

    Err(UpstreamError::Api {
        status: status.as_u16(),
        message,
    })
}
