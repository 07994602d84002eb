use thiserror::Error;

/// An error representing a rejected URI or URI component.
///
/// Every variant carries the input that was rejected.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
pub enum UriError {
    /// An authority string that did not yield a host.
    #[error("invalid authority: {0}")]
    InvalidAuthority(String),

    /// A host outside of the registered name / bracketed IPv6 grammar.
    #[error("invalid host: {0}")]
    InvalidHost(String),

    /// A port that was non-numeric or outside of `1..=65535`.
    #[error("invalid port: {0}")]
    InvalidPort(String),

    /// A scheme that is not in the known scheme table.
    #[error("invalid scheme: {0}")]
    InvalidScheme(String),

    /// A URI string that could not be split into its components.
    #[error("invalid URI: {0}")]
    InvalidUri(String),
}

pub type Result<T, E = UriError> = std::result::Result<T, E>;
