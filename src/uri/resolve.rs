//! Applying a raw URI onto an existing [`Uri`].
//!
//! Construction, relative resolution and authority replacement all go through here.

use tracing::trace;

use super::Uri;
use crate::authority::{normalize_host, parse_port};
use crate::error::{Result, UriError};
use crate::fragment::normalize_fragment;
use crate::parser::{parse_uri, RawUri};
use crate::path::Path;
use crate::query::Query;
use crate::scheme::parse_scheme;
use crate::utility::{percent_decode, trim};

impl Uri {
    /// Returns a new `Uri` with `uri` resolved against this one.
    ///
    /// - A `uri` with an authority (`"scheme://host"` or `"//host"`) starts from scratch: the
    ///   scheme, user info, port and path are cleared before the new ones are applied, so nothing
    ///   of the old authority carries over.
    /// - A path starting with `'/'` replaces the path; any other path is joined onto the current
    ///   path as if it were a directory, and dot-segments are removed.
    /// - Whenever a host or a path is given, the query and fragment are cleared before the new
    ///   ones, if any, are applied.
    ///
    /// # Errors
    ///
    /// [`UriError::InvalidUri`] if `uri` cannot be split, or the error of whichever component is
    /// invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::convert::TryFrom;
    ///
    /// use uricow::Uri;
    ///
    /// let base = Uri::try_from("http://domain.com/path/deep?a=1").unwrap();
    /// let resolve = |relative| base.resolve_relative_uri(relative).unwrap().to_string();
    ///
    /// assert_eq!(resolve("more"), "http://domain.com/path/deep/more");
    /// assert_eq!(resolve("../new"), "http://domain.com/path/new");
    /// assert_eq!(resolve("/new"), "http://domain.com/new");
    /// assert_eq!(resolve("https://test.com"), "https://test.com/");
    /// assert_eq!(resolve("?b=2"), "http://domain.com/path/deep?b=2");
    /// ```
    pub fn resolve_relative_uri(&self, uri: &str) -> Result<Uri> {
        let raw = parse_uri(uri)?;
        self.apply(&raw)
    }

    /// Returns a new `Uri` with the authority replaced by `authority`.
    ///
    /// `authority` is usually of the form `[user[:password]@]host[:port]`; a leading
    /// `"scheme://"` is accepted and sets the scheme. The scheme, user info and port that are not
    /// given are cleared. The path, query and fragment are kept.
    ///
    /// # Errors
    ///
    /// [`UriError::InvalidAuthority`] if no host can be found in `authority`, or the error of
    /// whichever component is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::convert::TryFrom;
    ///
    /// use uricow::Uri;
    ///
    /// let uri = Uri::try_from("http://domain.com/path").unwrap();
    /// let uri = uri.with_authority("user:password@test.com:3000").unwrap();
    /// assert_eq!(uri.as_str(), "user:password@test.com:3000/path");
    ///
    /// let uri = uri.with_authority("https://test.com").unwrap();
    /// assert_eq!(uri.as_str(), "https://test.com/path");
    /// ```
    pub fn with_authority(&self, authority: &str) -> Result<Uri> {
        let input = if !authority.is_empty() && !authority.contains("://") {
            format!("//{}", authority.trim_start_matches('/'))
        } else {
            authority.to_owned()
        };

        let invalid = || UriError::InvalidAuthority(authority.to_owned());
        let raw = parse_uri(&input).map_err(|_| invalid())?;
        let parsed = raw.authority.ok_or_else(invalid)?;

        trace!(?parsed, "replacing authority");

        let scheme = match raw.scheme {
            Some(scheme) => parse_scheme(scheme)?,
            None => None,
        };
        let host = normalize_host(parsed.host)?;
        let port = parsed.port.map(parse_port).transpose()?;
        let user = decode_user_info(parsed.user.unwrap_or(""));
        let password = decode_user_info(parsed.password.unwrap_or(""));

        Ok(self.derive(|uri| {
            uri.scheme = scheme;
            uri.host = host;
            uri.port = port;
            uri.user = user;
            uri.password = password;
        }))
    }

    /// Applies the slots of `raw` onto a copy of `self`.
    ///
    /// Nothing is returned unless every slot is valid, so a failure never leaves a partially
    /// updated value behind.
    pub(super) fn apply(&self, raw: &RawUri) -> Result<Uri> {
        trace!(?raw, "applying uri");

        let mut uri = self.clone();

        if raw.authority.is_some() {
            uri.scheme = None;
            uri.port = None;
            uri.user.clear();
            uri.password.clear();
            uri.path = Path::default();
        }

        if raw.authority.is_some() || raw.path.is_some() {
            uri.query = Query::default();
            uri.fragment.clear();
        }

        if let Some(scheme) = raw.scheme {
            uri.scheme = parse_scheme(scheme)?;
        }

        if let Some(authority) = raw.authority {
            if let Some(user) = authority.user {
                uri.user = decode_user_info(user);
                uri.password = decode_user_info(authority.password.unwrap_or(""));
            }

            uri.host = normalize_host(authority.host)?;

            if let Some(port) = authority.port {
                uri.port = Some(parse_port(port)?);
            }
        }

        if let Some(path) = raw.path.filter(|path| !path.is_empty()) {
            uri.path = uri.path.join(&percent_decode(path));
        }

        if let Some(query) = raw.query {
            uri.query = Query::parse(query);
        }

        if let Some(fragment) = raw.fragment {
            uri.fragment = normalize_fragment(&percent_decode(fragment));
        }

        Ok(uri.assemble())
    }
}

fn decode_user_info(value: &str) -> String {
    trim(&percent_decode(value), "").to_owned()
}
