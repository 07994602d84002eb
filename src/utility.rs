use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters stripped from both ends of every component.
const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0B', '\0'];

/// Everything except the RFC 3986 unreserved characters.
const UNRESERVED_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn is_trimmed(character: char, extra: &str) -> bool {
    WHITESPACE.contains(&character) || extra.contains(character)
}

/// Trims whitespace and any of the `extra` characters from both ends of `value`.
pub(crate) fn trim<'value>(value: &'value str, extra: &str) -> &'value str {
    value.trim_matches(|character| is_trimmed(character, extra))
}

/// Trims whitespace and any of the `extra` characters from the end of `value`.
pub(crate) fn trim_end<'value>(value: &'value str, extra: &str) -> &'value str {
    value.trim_end_matches(|character| is_trimmed(character, extra))
}

/// Decodes percent escapes. Malformed escapes are kept as they are and invalid UTF-8 is
/// replaced.
pub(crate) fn percent_decode(value: &str) -> Cow<'_, str> {
    percent_decode_str(value).decode_utf8_lossy()
}

/// Encodes everything outside of the unreserved set.
pub(crate) fn percent_encode(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, UNRESERVED_ENCODE_SET).into()
}
