//! User agent sniffing
//!
//! Ordered substring matching against well-known browser tokens. Order
//! matters: Chrome user agents also carry `Safari`, Opera ones carry `Chrome`.

use std::fmt;

/// Browser family detected from a user agent header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserLabel {
    Opera,
    Chrome,
    Firefox,
    Safari,
    Se360,
    Green,
    QQ,
    Maxthon,
    /// Internet Explorer with its major version (6 through 11)
    InternetExplorer(u8),
    /// Non-empty header matching no known token
    Other,
    /// Missing or blank header
    Unknown,
}

impl fmt::Display for BrowserLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opera => write!(f, "Opera"),
            Self::Chrome => write!(f, "Chrome"),
            Self::Firefox => write!(f, "Firefox"),
            Self::Safari => write!(f, "Safari"),
            Self::Se360 => write!(f, "360SE"),
            Self::Green => write!(f, "GreenBrowser"),
            Self::QQ => write!(f, "QQBrowser"),
            Self::Maxthon => write!(f, "Maxthon"),
            Self::InternetExplorer(version) => write!(f, "IE {}", version),
            Self::Other => write!(f, "Other"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Tokens checked in order; first match wins
const BROWSER_TOKENS: &[(&str, BrowserLabel)] = &[
    ("Opera", BrowserLabel::Opera),
    ("Chrome", BrowserLabel::Chrome),
    ("Firefox", BrowserLabel::Firefox),
    ("Safari", BrowserLabel::Safari),
    ("360SE", BrowserLabel::Se360),
    ("GreenBrowser", BrowserLabel::Green),
    ("QQBrowser", BrowserLabel::QQ),
    ("Maxthon", BrowserLabel::Maxthon),
];

/// IE version tokens, newest first
const IE_TOKENS: &[(&str, u8)] = &[
    ("rv:11.0", 11),
    ("MSIE 10.0", 10),
    ("MSIE 9.0", 9),
    ("MSIE 8.0", 8),
    ("MSIE 7.0", 7),
    ("MSIE 6.0", 6),
];

/// Detects the browser family from a user agent header
///
/// # Examples
///
/// ```
/// use fetch_verdict::browser::{detect_browser, BrowserLabel};
///
/// let ua = "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/37.0.2062.102 Safari/537.36";
/// assert_eq!(detect_browser(Some(ua)), BrowserLabel::Chrome);
/// assert_eq!(detect_browser(None), BrowserLabel::Unknown);
/// ```
pub fn detect_browser(user_agent: Option<&str>) -> BrowserLabel {
    let user_agent = match user_agent {
        Some(ua) if !ua.trim().is_empty() => ua,
        _ => return BrowserLabel::Unknown,
    };

    if let Some((_, label)) = BROWSER_TOKENS
        .iter()
        .find(|(token, _)| user_agent.contains(token))
    {
        return *label;
    }

    IE_TOKENS
        .iter()
        .find(|(token, _)| user_agent.contains(token))
        .map(|(_, version)| BrowserLabel::InternetExplorer(*version))
        .unwrap_or(BrowserLabel::Other)
}

/// Returns true if the user agent looks like Internet Explorer
///
/// A token at the very start of the header does not count.
pub fn is_ie(user_agent: &str) -> bool {
    let lower = user_agent.to_lowercase();
    ["msie", "rv:11.0"]
        .iter()
        .any(|token| matches!(lower.find(token), Some(pos) if pos > 0))
}

/// Returns the Internet Explorer major version, if the header names one
pub fn ie_version(user_agent: &str) -> Option<u8> {
    let lower = user_agent.to_lowercase();
    IE_TOKENS
        .iter()
        .find(|(token, _)| matches!(lower.find(&token.to_lowercase()), Some(pos) if pos > 0))
        .map(|(_, version)| *version)
}
