//! An immutable URI value type.
//!
//! A [`Uri`] is parsed from a string into its scheme, user info, host, port, path, query and
//! fragment. Paths have their dot-segments removed, components are held percent-decoded and
//! encoded again on output, and the default port of the scheme is left out of the string form.
//! New values are derived with the `with_*` methods or resolved against a relative reference
//! with [`Uri::resolve_relative_uri`]; the original is never modified.
//!
//! ```
//! use std::convert::TryFrom;
//!
//! use uricow::Uri;
//!
//! let base = Uri::try_from("http://domain.com:80/path/deep").unwrap();
//! assert_eq!(base.as_str(), "http://domain.com/path/deep");
//!
//! let resolved = base.resolve_relative_uri("../new").unwrap().with_added_query("page", "2");
//! assert_eq!(resolved.as_str(), "http://domain.com/path/new?page=2");
//! ```

mod authority;
mod fragment;
mod parser;
mod utility;

pub mod error;
pub mod path;
pub mod query;
pub mod scheme;
pub mod uri;

pub use self::error::{Result, UriError};
pub use self::path::{normalize_path, Path};
pub use self::query::Query;
pub use self::scheme::Scheme;
pub use self::uri::Uri;
