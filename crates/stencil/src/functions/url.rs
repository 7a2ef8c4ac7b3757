//! Query-string escaping.

use std::borrow::Cow;

use crate::functions::FunctionError;

/// Escape `s` for a URL query: reserved bytes become `%XX`, spaces `+`.
pub fn urlencode(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

/// Reverse [`urlencode`]. `+` decodes to a space.
///
/// A `%` not followed by two hex digits, or an escape that does not
/// decode to UTF-8, is an error.
pub fn urldecode(s: &str) -> Result<String, FunctionError> {
    let invalid = || FunctionError::UrlDecode {
        input: s.to_string(),
    };
    let bytes = s.as_bytes();
    for (i, _) in s.match_indices('%') {
        let well_formed = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(invalid());
        }
    }
    let spaced = s.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|_| invalid())
}
