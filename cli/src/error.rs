//! Error type shared by the RPC client, the action table and the printers.

use crate::actions::Action;
use reqwest::StatusCode;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// The HTTP client could not be constructed
    #[error("Failed to create HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connection refused, DNS failure, timeout and the like
    #[error("Cannot reach node at {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The node answered with a non-2xx status
    #[error("Node at {url} returned HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    /// The response body was not JSON
    #[error("Failed to parse RPC response")]
    Decode(#[source] reqwest::Error),

    /// JSON-RPC error object in the response body
    #[error("RPC error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error("RPC response for '{method}' has no result")]
    MissingResult { method: String },

    /// The result did not match the expected schema
    #[error("Malformed '{method}' result")]
    MalformedResult {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No handler registered for action '{0}'")]
    UnsupportedAction(Action),

    #[error("Failed to write output")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// Join an error and its causes into one line. A cause whose text already
/// appears earlier in the line is skipped, since some client errors embed
/// their source in their own message.
pub fn render_chain(error: &dyn StdError) -> String {
    let mut line = error.to_string();
    let mut cause = error.source();
    while let Some(err) = cause {
        let text = err.to_string();
        if !text.is_empty() && !line.contains(&text) {
            line.push_str(": ");
            line.push_str(&text);
        }
        cause = err.source();
    }
    line
}
