use std::fmt;

use ladle_types::Envelope;

/// Categories of client errors for consistent handling at call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection-level failure (DNS, refused, reset).
    Network,
    /// The fixed 10-second request timeout elapsed.
    Timeout,
    /// Non-401 HTTP error status reported by the server.
    HttpStatus,
    /// 401 that survived the one-shot refresh (or the refresh itself failed).
    AuthExpired,
    /// Local key-value store read or write failed.
    Storage,
    /// Response body did not parse as the expected envelope.
    Parse,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network"),
            ErrorKind::Timeout => write!(f, "timeout"),
            ErrorKind::HttpStatus => write!(f, "http_status"),
            ErrorKind::AuthExpired => write!(f, "auth_expired"),
            ErrorKind::Storage => write!(f, "storage"),
            ErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured client error with a kind, a displayable message, and optional
/// raw details (e.g. the error body).
#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub details: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
        }
    }

    /// Creates an HTTP status error, extracting the envelope `message` from
    /// the body when it parses.
    pub fn http_status(status: u16, body: &str) -> Self {
        if let Ok(envelope) = serde_json::from_str::<Envelope>(body)
            && let Some(msg) = envelope.message
        {
            return Self {
                kind: ErrorKind::HttpStatus,
                message: format!("HTTP {status}: {msg}"),
                details: Some(body.to_string()),
            };
        }
        Self {
            kind: ErrorKind::HttpStatus,
            message: format!("HTTP {status}"),
            details: if body.is_empty() {
                None
            } else {
                Some(body.to_string())
            },
        }
    }

    /// Creates the error for a 401 that could not be renewed.
    pub fn auth_expired() -> Self {
        Self::new(ErrorKind::AuthExpired, "authentication expired")
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Maps a transport error from reqwest onto the taxonomy.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::new(ErrorKind::Timeout, "request timed out")
        } else if err.is_decode() {
            Self::new(ErrorKind::Parse, err.to_string())
        } else {
            Self::new(ErrorKind::Network, err.to_string())
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
