//! Fetch outcome types and the HTTP status classifier
//!
//! The classifier maps every integer status code to exactly one [`Outcome`].
//! Codes outside the known table fail closed as [`Outcome::FatalFailure`].

mod classifier;

pub use classifier::{classify, describe};

use std::fmt;

/// Status observed for a fetch attempt
///
/// Either the raw code from a server response, or a sentinel for a transport
/// failure that never produced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    /// HTTP status code returned by the server
    Http(i32),

    /// Request timed out before a response arrived. Name resolution
    /// failures are reported under this sentinel as well.
    Timeout,
}

impl FetchStatus {
    /// Returns the HTTP status code, if a response was received
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Http(code) => Some(*code),
            Self::Timeout => None,
        }
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(code) => write!(f, "{}", code),
            Self::Timeout => write!(f, "timeout"),
        }
    }
}

/// Why a fetch was skipped without raising an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The cached copy is still valid (HTTP 304 or a transport short-circuit)
    NotModified,

    /// The server answered but its content must be treated as absent (405, 406)
    ContentRejected { status: i32 },

    /// An unexpected runtime error interrupted the request; it was logged and swallowed
    TransportRuntime,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotModified => write!(f, "not modified"),
            Self::ContentRejected { status } => {
                write!(f, "content rejected by server (status {})", status)
            }
            Self::TransportRuntime => write!(f, "transport runtime error"),
        }
    }
}

/// Classification of one fetch attempt
///
/// The scheduler branches on this to accept, skip, requeue or drop a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Response body is usable as-is
    Success,

    /// Request went through but the content should be ignored
    Skip(SkipReason),

    /// Transient condition; the URL should be requeued with backoff
    RetryableFailure { reason: String, status: FetchStatus },

    /// Permanent condition; the URL should not be retried
    FatalFailure { reason: String, status: FetchStatus },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Self::Skip(_))
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RetryableFailure { .. })
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FatalFailure { .. })
    }

    /// Returns true for timeout-class retryable failures
    ///
    /// This includes name resolution failures, which are reported as timeouts.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::RetryableFailure {
                status: FetchStatus::Timeout,
                ..
            }
        )
    }

    /// Returns the failure status, if this is a failure outcome
    pub fn status(&self) -> Option<FetchStatus> {
        match self {
            Self::RetryableFailure { status, .. } | Self::FatalFailure { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    /// Returns the failure reason, if this is a failure outcome
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::RetryableFailure { reason, .. } | Self::FatalFailure { reason, .. } => {
                Some(reason)
            }
            _ => None,
        }
    }

    /// Short label for logs and CLI output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Skip(_) => "skip",
            Self::RetryableFailure { .. } => "retryable",
            Self::FatalFailure { .. } => "fatal",
        }
    }

    /// Builds the timeout-class retryable failure
    pub(crate) fn timeout(reason: impl Into<String>) -> Self {
        Self::RetryableFailure {
            reason: reason.into(),
            status: FetchStatus::Timeout,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Skip(reason) => write!(f, "skip: {}", reason),
            Self::RetryableFailure { reason, status } => {
                write!(f, "retryable failure [{}]: {}", status, reason)
            }
            Self::FatalFailure { reason, status } => {
                write!(f, "fatal failure [{}]: {}", status, reason)
            }
        }
    }
}
