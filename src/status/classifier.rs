//! HTTP status classification table
//!
//! Retryable codes are conditions that may clear on their own (overload,
//! locks, gateway trouble, request timeouts). Fatal codes will not change
//! for the same URL (bad request, auth, forbidden, conflict, gone, size limits).

use super::{FetchStatus, Outcome, SkipReason};

/// Classifies an HTTP status code into a fetch outcome
///
/// Total over `i32`: codes missing from the table are treated as
/// unrecognized and fail closed.
///
/// # Examples
///
/// ```
/// use fetch_verdict::status::{classify, Outcome, SkipReason};
///
/// assert_eq!(classify(200), Outcome::Success);
/// assert_eq!(classify(304), Outcome::Skip(SkipReason::NotModified));
/// assert!(classify(503).is_retryable());
/// assert!(classify(410).is_fatal());
/// assert!(classify(999).is_fatal());
/// ```
pub fn classify(code: i32) -> Outcome {
    match code {
        100..=103
        | 200..=207
        | 300..=303
        | 305..=307
        | 402
        | 411
        | 412
        | 415..=417
        | 422
        | 425
        | 426
        | 449
        | 600 => Outcome::Success,

        304 => Outcome::Skip(SkipReason::NotModified),

        405 | 406 => Outcome::Skip(SkipReason::ContentRejected { status: code }),

        400 | 401 | 403 | 407 | 409 | 410 | 413 | 414 => Outcome::FatalFailure {
            reason: failure_reason(code),
            status: FetchStatus::Http(code),
        },

        404 | 408 | 421 | 423 | 424 | 500..=510 => Outcome::RetryableFailure {
            reason: failure_reason(code),
            status: FetchStatus::Http(code),
        },

        _ => Outcome::FatalFailure {
            reason: format!("Unrecognized status code {}", code),
            status: FetchStatus::Http(code),
        },
    }
}

fn failure_reason(code: i32) -> String {
    format!("{} (status {})", describe(code), code)
}

/// Returns a human readable name for a status code in the table
pub fn describe(code: i32) -> &'static str {
    match code {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        103 => "Early Hints",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        306 => "Switch Proxy",
        307 => "Temporary Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        421 => "Too Many Connections",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        425 => "Too Early",
        426 => "Upgrade Required",
        449 => "Retry With",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        509 => "Bandwidth Limit Exceeded",
        510 => "Not Extended",
        600 => "Unparseable Response Headers",
        _ => "Unknown",
    }
}
