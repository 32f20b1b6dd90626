// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// Request failed before a usable body was received.
    Network(NetworkError),
    /// Bytes were received but could not be decoded into an image.
    Decode(String),
}

/// Specific failure modes when fetching a remote image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The request did not complete within the configured timeout.
    Timeout,

    /// The server answered with a non-success status code.
    Status(u16),

    /// The server answered but the body was empty.
    EmptyBody,

    /// Connection, TLS or protocol failure.
    Transport(String),
}

impl NetworkError {
    /// Short label used in the card's error placeholder.
    pub fn label(&self) -> &'static str {
        match self {
            NetworkError::Timeout => "Timed out",
            NetworkError::Status(_) => "Server error",
            NetworkError::EmptyBody => "Empty response",
            NetworkError::Transport(_) => "Connection failed",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Timeout => write!(f, "request timed out"),
            NetworkError::Status(code) => write!(f, "HTTP status: {}", code),
            NetworkError::EmptyBody => write!(f, "empty response body"),
            NetworkError::Transport(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network(NetworkError::Timeout)
        } else if let Some(status) = err.status() {
            Error::Network(NetworkError::Status(status.as_u16()))
        } else {
            Error::Network(NetworkError::Transport(err.to_string()))
        }
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn network_status_is_displayed_with_code() {
        let err: Error = NetworkError::Status(404).into();
        assert_eq!(format!("{}", err), "Network Error: HTTP status: 404");
    }

    #[test]
    fn network_error_labels_are_short() {
        assert_eq!(NetworkError::Timeout.label(), "Timed out");
        assert_eq!(NetworkError::Status(500).label(), "Server error");
        assert_eq!(NetworkError::EmptyBody.label(), "Empty response");
        assert_eq!(
            NetworkError::Transport("dns".into()).label(),
            "Connection failed"
        );
    }

    #[test]
    fn decode_error_from_image_error() {
        let bytes = [0u8, 1, 2, 3];
        let image_err = image_rs::load_from_memory(&bytes).expect_err("garbage must not decode");
        let err: Error = image_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
