//! Fragment Component
//!
//! See [[RFC3986, Section 3.5](https://tools.ietf.org/html/rfc3986#section-3.5)].

use crate::utility::trim;

/// Strips whitespace and any leading or trailing `'#'` from a decoded fragment.
pub(crate) fn normalize_fragment(value: &str) -> String {
    trim(value, "#").to_owned()
}
