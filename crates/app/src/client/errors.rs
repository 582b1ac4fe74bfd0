//! Client errors.

use cardapio::drafts::RequiredField;
use thiserror::Error;

/// Errors raised by the transport underneath the products client.
#[derive(Debug, Error)]
pub enum TransportError {
    /// An HTTP transport error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors returned by [`ProductsApi`](super::ProductsApi) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required field is missing; nothing was sent.
    #[error("{0}")]
    Validation(#[from] RequiredField),

    /// The API answered with a non-2xx status.
    #[error("Erro HTTP {status}: {}", .body.as_deref().unwrap_or("sem mensagem"))]
    Http { status: u16, body: Option<String> },

    /// The request was cancelled before it completed.
    #[error("request cancelled")]
    Cancelled,

    /// The API promised JSON and sent something else.
    #[error("invalid response body")]
    Parse(#[source] serde_json::Error),

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    /// Whether the error only reports a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_mentions_status_and_body() {
        let error = ClientError::Http {
            status: 404,
            body: Some("not found".to_string()),
        };

        assert_eq!(error.to_string(), "Erro HTTP 404: not found");
    }

    #[test]
    fn http_error_without_body_has_placeholder() {
        let error = ClientError::Http {
            status: 500,
            body: None,
        };

        assert_eq!(error.to_string(), "Erro HTTP 500: sem mensagem");
    }
}
