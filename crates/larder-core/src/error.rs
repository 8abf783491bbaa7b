// ── Core error types ──
//
// User-facing errors from larder-core. These are NOT API-specific --
// consumers never see HTTP status codes or JSON parse failures directly.
// The `From<larder_store::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach document store: {reason}")]
    ConnectionFailed { reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Store request timed out")]
    Timeout,

    // ── Store errors (wrapped, not exposed raw) ──────────────────────
    #[error("Store operation failed: {message}")]
    Store {
        message: String,
        /// The store-specific error code (e.g., "not_found").
        code: Option<String>,
        /// HTTP status code (if applicable).
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<larder_store::Error> for CoreError {
    fn from(err: larder_store::Error) -> Self {
        match err {
            larder_store::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            larder_store::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Store {
                        message: e.to_string(),
                        code: None,
                        status: e.status().map(|s| s.as_u16()),
                    }
                }
            }
            larder_store::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            larder_store::Error::Tls(msg) => CoreError::ConnectionFailed {
                reason: format!("TLS error: {msg}"),
            },
            larder_store::Error::Api {
                message,
                code,
                status,
            } => CoreError::Store {
                message,
                code,
                status: Some(status),
            },
            larder_store::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
            larder_store::Error::StoreOffline => CoreError::ConnectionFailed {
                reason: "store is offline".into(),
            },
        }
    }
}
