//! Error classification - the decision input for retry vs. fallback vs. fail.
//!
//! The upstream inference dependency does not expose a typed error
//! hierarchy, so network failures are recognized by substring match against
//! a fixed signature list. The list lives here, in one place, so it stays
//! auditable and testable independently of the retry loop.

use crate::error::ExtractionError;

/// Closed classification of a pipeline failure.
///
/// The kind decides the downstream branch: `Network` skips retries and
/// triggers demo fallback, `Parse` and `SizeLimit` fail hard immediately,
/// and `Unknown` is the only kind worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Upstream unreachable: timeouts, resets, DNS, gateway errors.
    Network,
    /// Inference succeeded but the response wasn't structured data.
    Parse,
    /// Pre-flight size rejection.
    SizeLimit,
    /// Anything else - plausibly transient, eligible for retry.
    Unknown,
}

/// Case-insensitive substrings that mark a failure as network-level.
pub const NETWORK_SIGNATURES: &[&str] = &[
    "network",
    "fetch failed",
    "timeout",
    "timed out",
    "connection reset",
    "econnreset",
    "connection refused",
    "econnrefused",
    "socket hang up",
    "dns",
    "enotfound",
    "unreachable",
    "bad gateway",
    "gateway",
    "502",
    "503",
    "504",
];

/// Classify an error into its retry/fallback/fail kind.
pub fn classify(error: &ExtractionError) -> ErrorKind {
    match error {
        ExtractionError::SizeLimitExceeded { .. } => ErrorKind::SizeLimit,
        ExtractionError::Parse(_) => ErrorKind::Parse,
        ExtractionError::Inference(message) if is_network_message(message) => ErrorKind::Network,
        _ => ErrorKind::Unknown,
    }
}

/// True if the message carries any known network failure signature.
pub fn is_network_message(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    NETWORK_SIGNATURES.iter().any(|sig| lower.contains(sig))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_signatures_match() {
        for message in [
            "fetch failed",
            "502 Bad Gateway",
            "request timed out after 30s",
            "ECONNRESET",
            "getaddrinfo ENOTFOUND api.example.com",
            "Network error while sending request",
            "connection refused (os error 111)",
        ] {
            assert!(is_network_message(message), "should match: {message}");
        }
    }

    #[test]
    fn test_non_network_messages_are_unknown() {
        for message in ["rate limit exceeded", "internal error", "model overloaded"] {
            let err = ExtractionError::Inference(message.to_string());
            assert_eq!(classify(&err), ErrorKind::Unknown, "message: {message}");
        }
    }

    #[test]
    fn test_classify_network() {
        let err = ExtractionError::Inference("upstream timeout".to_string());
        assert_eq!(classify(&err), ErrorKind::Network);
    }

    #[test]
    fn test_classify_parse() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        assert_eq!(classify(&ExtractionError::from(json_err)), ErrorKind::Parse);
    }

    #[test]
    fn test_classify_size_limit() {
        let err = ExtractionError::SizeLimitExceeded {
            approx_bytes: 1,
            limit: 0,
        };
        assert_eq!(classify(&err), ErrorKind::SizeLimit);
    }
}
