//! Query string conversion
//!
//! `key=value` pairs joined by `&`, in `application/x-www-form-urlencoded`
//! form. Reserved characters in keys and values are percent-encoded, so any
//! map survives an encode/decode round trip.

use crate::{ParamsError, ParamsResult};
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Encodes parameters as `k1=v1&k2=v2`, keys in sorted order
///
/// An empty map encodes to the empty string.
///
/// # Examples
///
/// ```
/// use fetch_verdict::params::encode_params;
/// use std::collections::BTreeMap;
///
/// let mut params = BTreeMap::new();
/// params.insert("q".to_string(), "rock&roll".to_string());
/// assert_eq!(encode_params(&params), "q=rock%26roll");
/// ```
pub fn encode_params(params: &BTreeMap<String, String>) -> String {
    if params.is_empty() {
        tracing::warn!("Parameter map is empty, encoding to an empty string");
        return String::new();
    }

    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Decodes `k1=v1&k2=v2` into a map
///
/// Blank input decodes to an empty map. Empty sections (e.g. a trailing `&`)
/// are ignored, a repeated key keeps its last value, and only the first `=`
/// in a section separates key from value. Percent escapes and `+` are decoded.
///
/// # Examples
///
/// ```
/// use fetch_verdict::params::decode_params;
///
/// let params = decode_params("sex=男&age=24&name=rency").unwrap();
/// assert_eq!(params["age"], "24");
/// assert_eq!(params["sex"], "男");
/// ```
pub fn decode_params(query: &str) -> ParamsResult<BTreeMap<String, String>> {
    let mut params = BTreeMap::new();

    if query.trim().is_empty() {
        tracing::warn!("Parameter string is empty, decoding to an empty map");
        return Ok(params);
    }

    for section in query.split('&').filter(|s| !s.is_empty()) {
        let (key, _) = section
            .split_once('=')
            .ok_or_else(|| ParamsError::MissingSeparator(section.to_string()))?;

        if key.is_empty() {
            return Err(ParamsError::EmptyKey(section.to_string()));
        }

        if let Some((key, value)) = form_urlencoded::parse(section.as_bytes()).next() {
            params.insert(key.into_owned(), value.into_owned());
        }
    }

    Ok(params)
}
