//! Authority Component
//!
//! See [[RFC3986, Section 3.2](https://tools.ietf.org/html/rfc3986#section-3.2)].

use std::fmt::{self, Display, Formatter, Write};

use tracing::debug;

use crate::error::UriError;
use crate::utility::{percent_encode, trim};

/// A map of byte characters that determines if a character is valid in a registered name or an
/// IPv4 address.
#[rustfmt::skip]
const HOST_CHAR_MAP: [u8; 256] = [
 // 0     1     2     3     4     5     6     7     8     9     A     B     C     D     E     F
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 0
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, // 1
    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0,    0, b'-', b'.',    0, // 2
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

/// The pieces of an authority as they appear in a raw URI, before any decoding or validation.
///
/// `user` is present only if the authority contained an `'@'`, `password` only if the user info
/// contained a `':'`, and `port` only if a non-empty port followed the host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RawAuthority<'authority> {
    pub(crate) user: Option<&'authority str>,
    pub(crate) password: Option<&'authority str>,
    pub(crate) host: &'authority str,
    pub(crate) port: Option<&'authority str>,
}

/// A formatting view over the authority fields of a [`Uri`](crate::Uri).
///
/// The port is expected to already have default-port suppression applied.
pub(crate) struct Authority<'uri> {
    pub(crate) user_info: UserInfo<'uri>,
    pub(crate) host: &'uri str,
    pub(crate) port: Option<u16>,
}

impl<'uri> Display for Authority<'uri> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Ok(());
        }

        if !self.user_info.user.is_empty() {
            self.user_info.fmt(formatter)?;
            formatter.write_char('@')?;
        }

        formatter.write_str(self.host)?;

        if let Some(port) = self.port {
            formatter.write_char(':')?;
            port.fmt(formatter)?;
        }

        Ok(())
    }
}

/// A formatting view over the user and password of a [`Uri`](crate::Uri).
///
/// A password of `None` is not displayed.
pub(crate) struct UserInfo<'uri> {
    pub(crate) user: &'uri str,
    pub(crate) password: Option<&'uri str>,
}

impl<'uri> Display for UserInfo<'uri> {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        if self.user.is_empty() {
            return Ok(());
        }

        formatter.write_str(&percent_encode(self.user))?;

        match self.password {
            Some(password) if !password.is_empty() => {
                formatter.write_char(':')?;
                formatter.write_str(&percent_encode(password))
            }
            _ => Ok(()),
        }
    }
}

/// Validates a port number.
pub(crate) fn check_port(port: u32) -> Result<u16, UriError> {
    match u16::try_from(port) {
        Ok(port) if port > 0 => Ok(port),
        _ => {
            debug!(port, "rejected port out of range");
            Err(UriError::InvalidPort(port.to_string()))
        }
    }
}

/// Trims and validates a host.
///
/// An empty host is accepted and means "no authority". Anything else must be a registered name
/// or IPv4 address made of ASCII letters, digits, `'.'` and `'-'`, or an IPv6 address in
/// brackets.
pub(crate) fn normalize_host(value: &str) -> Result<String, UriError> {
    let host = trim(value, "");

    if host.is_empty() || check_host(host.as_bytes()) {
        Ok(host.to_owned())
    } else {
        debug!(host, "rejected invalid host");
        Err(UriError::InvalidHost(host.to_owned()))
    }
}

fn check_host(value: &[u8]) -> bool {
    match value {
        [b'[', ipv6 @ .., b']'] => check_ipv6(ipv6),
        _ => value
            .iter()
            .all(|&byte| HOST_CHAR_MAP[byte as usize] != 0),
    }
}

fn check_ipv6(value: &[u8]) -> bool {
    !value.is_empty()
        && value
            .iter()
            .all(|&byte| byte.is_ascii_hexdigit() || byte == b':')
}

/// Parses and validates a port from its textual form.
pub(crate) fn parse_port(value: &str) -> Result<u16, UriError> {
    let digits = trim(value, "");

    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        debug!(port = value, "rejected non-numeric port");
        return Err(UriError::InvalidPort(value.to_owned()));
    }

    match digits.parse::<u32>() {
        Ok(port) => check_port(port).map_err(|_| UriError::InvalidPort(value.to_owned())),
        Err(_) => {
            debug!(port = value, "rejected port out of range");
            Err(UriError::InvalidPort(value.to_owned()))
        }
    }
}

/// Splits a raw authority off of the front of `value`, which must directly follow the `"//"`.
///
/// The authority ends at the first `'/'`, `'?'` or `'#'`. Returns `None` if the authority is
/// structurally broken: an empty host, or trailing garbage after a bracketed host.
pub(crate) fn parse_authority(value: &str) -> Option<(RawAuthority<'_>, &str)> {
    let end_index = value
        .find(|character| matches!(character, '/' | '?' | '#'))
        .unwrap_or(value.len());
    let (value, rest) = value.split_at(end_index);

    let (user, password, host_port) = match value.rfind('@') {
        Some(index) => {
            let user_info = &value[..index];
            let (user, password) = match user_info.split_once(':') {
                Some((user, password)) => (user, Some(password)),
                None => (user_info, None),
            };

            (Some(user), password, &value[index + 1..])
        }
        None => (None, None, value),
    };

    let (host, port) = if host_port.starts_with('[') {
        let close_index = host_port.find(']')?;
        let (host, after) = host_port.split_at(close_index + 1);

        match after.strip_prefix(':') {
            Some(port) => (host, port),
            None if after.is_empty() => (host, ""),
            None => return None,
        }
    } else {
        match host_port.rsplit_once(':') {
            Some((host, port)) => (host, port),
            None => (host_port, ""),
        }
    };

    if host.is_empty() {
        return None;
    }

    let authority = RawAuthority {
        user,
        password,
        host,
        port: if port.is_empty() { None } else { Some(port) },
    };

    Some((authority, rest))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_authority() {
        let (authority, rest) = parse_authority("user:pass@domain.com:3000/path?q#f").unwrap();
        assert_eq!(
            authority,
            RawAuthority {
                user: Some("user"),
                password: Some("pass"),
                host: "domain.com",
                port: Some("3000"),
            }
        );
        assert_eq!(rest, "/path?q#f");

        let (authority, rest) = parse_authority("domain.com").unwrap();
        assert_eq!(authority.user, None);
        assert_eq!(authority.password, None);
        assert_eq!(authority.host, "domain.com");
        assert_eq!(authority.port, None);
        assert_eq!(rest, "");

        let (authority, _) = parse_authority("user@domain.com:").unwrap();
        assert_eq!(authority.user, Some("user"));
        assert_eq!(authority.password, None);
        assert_eq!(authority.port, None);

        let (authority, _) = parse_authority("a@b:c@domain.com").unwrap();
        assert_eq!(authority.user, Some("a"));
        assert_eq!(authority.password, Some("b:c"));
        assert_eq!(authority.host, "domain.com");
    }

    #[test]
    fn test_parse_authority_ipv6() {
        let (authority, rest) = parse_authority("[::1]:8080/").unwrap();
        assert_eq!(authority.host, "[::1]");
        assert_eq!(authority.port, Some("8080"));
        assert_eq!(rest, "/");

        let (authority, _) = parse_authority("[fe80::1]").unwrap();
        assert_eq!(authority.host, "[fe80::1]");
        assert_eq!(authority.port, None);

        assert!(parse_authority("[::1]x").is_none());
        assert!(parse_authority("[::1").is_none());
    }

    #[test]
    fn test_parse_authority_empty_host() {
        assert!(parse_authority("").is_none());
        assert!(parse_authority("/domain.com/").is_none());
        assert!(parse_authority("user@").is_none());
        assert!(parse_authority(":80").is_none());
    }

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host(" domain.com ").unwrap(), "domain.com");
        assert_eq!(normalize_host("Sub-Domain.EXAMPLE.com").unwrap(), "Sub-Domain.EXAMPLE.com");
        assert_eq!(normalize_host("127.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(normalize_host("[::1]").unwrap(), "[::1]");
        assert_eq!(normalize_host("[FE80::a1]").unwrap(), "[FE80::a1]");
        assert_eq!(normalize_host("").unwrap(), "");
        assert_eq!(
            normalize_host("domain_com").unwrap_err(),
            UriError::InvalidHost("domain_com".to_owned())
        );
        assert!(normalize_host("[]").is_err());
        assert!(normalize_host("[::g]").is_err());
        assert!(normalize_host("dömain.com").is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("1").unwrap(), 1);
        assert_eq!(parse_port("3000").unwrap(), 3000);
        assert_eq!(parse_port("65535").unwrap(), 65535);
        assert_eq!(parse_port("0").unwrap_err(), UriError::InvalidPort("0".to_owned()));
        assert_eq!(
            parse_port("65536").unwrap_err(),
            UriError::InvalidPort("65536".to_owned())
        );
        assert!(parse_port("99999999999").is_err());
        assert!(parse_port("http").is_err());
        assert!(parse_port("-1").is_err());
    }

    #[test]
    fn test_check_port() {
        assert_eq!(check_port(1).unwrap(), 1);
        assert_eq!(check_port(65535).unwrap(), 65535);
        assert!(check_port(0).is_err());
        assert!(check_port(65536).is_err());
    }

    #[test]
    fn test_display_authority() {
        let authority = Authority {
            user_info: UserInfo {
                user: "user",
                password: Some("p@ss"),
            },
            host: "domain.com",
            port: Some(3000),
        };
        assert_eq!(authority.to_string(), "user:p%40ss@domain.com:3000");

        let authority = Authority {
            user_info: UserInfo {
                user: "",
                password: Some("pass"),
            },
            host: "domain.com",
            port: None,
        };
        assert_eq!(authority.to_string(), "domain.com");

        let authority = Authority {
            user_info: UserInfo {
                user: "user",
                password: None,
            },
            host: "",
            port: Some(3000),
        };
        assert_eq!(authority.to_string(), "");
    }
}
