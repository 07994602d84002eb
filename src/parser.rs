use tracing::{debug, trace};

use crate::authority::{parse_authority, RawAuthority};
use crate::error::UriError;
use crate::scheme::split_scheme;

/// The slots of a raw URI string, before any decoding or validation.
///
/// Each slot is `None` when it was absent from the input, which is distinct from being present
/// but empty: a `"?"` with nothing after it is an empty query, not a missing one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct RawUri<'uri> {
    pub(crate) scheme: Option<&'uri str>,
    pub(crate) authority: Option<RawAuthority<'uri>>,
    pub(crate) path: Option<&'uri str>,
    pub(crate) query: Option<&'uri str>,
    pub(crate) fragment: Option<&'uri str>,
}

/// Splits a raw URI into its slots.
///
/// The path slot is only present when it is non-empty, except for an entirely empty input which
/// is an empty path. Fails if a `"//"` is not followed by a usable host.
pub(crate) fn parse_uri(value: &str) -> Result<RawUri<'_>, UriError> {
    trace!(uri = value, "splitting uri");

    let (scheme, rest) = match split_scheme(value) {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, value),
    };

    let (authority, rest) = match rest.strip_prefix("//") {
        Some(rest) => match parse_authority(rest) {
            Some((authority, rest)) => (Some(authority), rest),
            None => {
                debug!(uri = value, "rejected uri with malformed authority");
                return Err(UriError::InvalidUri(value.to_owned()));
            }
        },
        None => (None, rest),
    };

    let (rest, fragment) = match rest.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (rest, None),
    };

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let path = if !path.is_empty() || value.is_empty() {
        Some(path)
    } else {
        None
    };

    Ok(RawUri {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}
