//! Scheme Component
//!
//! Only a fixed set of schemes is understood, each with the port that is assumed when none is
//! given explicitly.

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use fnv::FnvHashMap;
use lazy_static::lazy_static;
use tracing::debug;

use crate::error::UriError;
use crate::utility::trim;

#[rustfmt::skip]
const SCHEME_CHAR_MAP: [u8; 256] = [
 // 0     1     2     3     4     5     6     7     8     9     A     B     C     D     E     F
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 0
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 1
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, b'+',    0, b'-', b'.',    0, // 2
 b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',    0,    0,    0,    0,    0,    0, // 3
    0, b'A', b'B', b'C', b'D', b'E', b'F', b'G', b'H', b'I', b'J', b'K', b'L', b'M', b'N', b'O', // 4
 b'P', b'Q', b'R', b'S', b'T', b'U', b'V', b'W', b'X', b'Y', b'Z',    0,    0,    0,    0,    0, // 5
    0, b'a', b'b', b'c', b'd', b'e', b'f', b'g', b'h', b'i', b'j', b'k', b'l', b'm', b'n', b'o', // 6
 b'p', b'q', b'r', b's', b't', b'u', b'v', b'w', b'x', b'y', b'z',    0,    0,    0,    0,    0, // 7
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 8
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 9
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // A
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // B
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // C
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // D
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // E
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // F
];

macro_rules! schemes {
    (
        $(
            ($variant:ident, $name:expr, $port:expr);
        )+
    ) => {
        lazy_static! {
            static ref SCHEME_NAME_MAP: FnvHashMap<&'static str, Scheme> = {
                let mut map = FnvHashMap::default();

            $(
                map.insert($name, Scheme::$variant);
            )+

                map
            };
        }

        /// A scheme with a known default port.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum Scheme {
        $(
            $variant,
        )+
        }

        impl Scheme {
            /// Returns the lowercase name of the scheme.
            pub fn as_str(&self) -> &'static str {
                use self::Scheme::*;

                match self {
                $(
                    $variant => $name,
                )+
                }
            }

            /// Returns the port that is implied when a URI with this scheme has none.
            ///
            /// ```
            /// use uricow::Scheme;
            ///
            /// assert_eq!(Scheme::Http.default_port(), 80);
            /// assert_eq!(Scheme::Sftp.default_port(), 22);
            /// ```
            pub fn default_port(&self) -> u16 {
                use self::Scheme::*;

                match self {
                $(
                    $variant => $port,
                )+
                }
            }
        }
    }
}

schemes! {
    (Ftp, "ftp", 21);
    (Http, "http", 80);
    (Https, "https", 443);
    (Sftp, "sftp", 22);
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Display for Scheme {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = UriError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Scheme::try_from(value)
    }
}

impl PartialEq<str> for Scheme {
    fn eq(&self, other: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(other)
    }
}

impl<'a> PartialEq<&'a str> for Scheme {
    fn eq(&self, other: &&'a str) -> bool {
        self.as_str().eq_ignore_ascii_case(other)
    }
}

impl<'scheme> TryFrom<&'scheme str> for Scheme {
    type Error = UriError;

    fn try_from(value: &'scheme str) -> Result<Self, Self::Error> {
        parse_scheme(value)?.ok_or_else(|| UriError::InvalidScheme(value.to_owned()))
    }
}

/// Normalizes a scheme: lowercased, stripped of whitespace and trailing `":"` / `"/"`.
///
/// An empty result means "no scheme". Anything else must be a known scheme.
pub(crate) fn parse_scheme(value: &str) -> Result<Option<Scheme>, UriError> {
    let value = value.to_ascii_lowercase();
    let value = trim(&value, ":/");

    if value.is_empty() {
        return Ok(None);
    }

    match SCHEME_NAME_MAP.get(value) {
        Some(&scheme) => Ok(Some(scheme)),
        None => {
            debug!(scheme = value, "rejected unknown scheme");
            Err(UriError::InvalidScheme(value.to_owned()))
        }
    }
}

/// Splits a leading `scheme ":"` off of a raw URI.
///
/// Returns the scheme (without the colon) and the remainder after the colon, or `None` if
/// the value does not start with a syntactically valid scheme.
pub(crate) fn split_scheme(value: &str) -> Option<(&str, &str)> {
    let mut bytes = value.bytes();

    if !bytes.next()?.is_ascii_alphabetic() {
        return None;
    }

    let mut end_index = 1;

    for byte in bytes {
        match SCHEME_CHAR_MAP[byte as usize] {
            0 if byte == b':' => return Some((&value[..end_index], &value[end_index + 1..])),
            0 => return None,
            _ => end_index += 1,
        }
    }

    None
}
