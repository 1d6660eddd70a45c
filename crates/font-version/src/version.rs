//! Font version numbers and operator version directives.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;

use crate::error::Error;

/// Highest value a release counter's minor component can hold.
pub const MAX_MINOR: u16 = 999;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.(\d{2,3})$").unwrap());

static REQUEST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:keep|[12]\.\d{3})$").unwrap());

/// A font version: major.minor with a zero-padded minor component.
///
/// The minor component renders as two digits for 1.x versions ("1.23") and
/// three digits otherwise ("2.040"). Ordering is lexicographic on
/// (major, minor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16) -> Version {
        Version { major, minor }
    }

    /// Parse "major.minor" where minor has 2 or 3 digits.
    pub fn parse(text: &str) -> Result<Version, Error> {
        let bad = || Error::BadVersion(text.to_string());
        let caps = VERSION_RE.captures(text).ok_or_else(bad)?;
        let major = caps[1].parse().map_err(|_| bad())?;
        let minor = caps[2].parse().map_err(|_| bad())?;
        Ok(Version { major, minor })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.major == 1 {
            write!(f, "{}.{:02}", self.major, self.minor)
        } else {
            write!(f, "{}.{:03}", self.major, self.minor)
        }
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Version, Error> {
        Version::parse(s)
    }
}

/// An operator-supplied version directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionRequest {
    /// Keep the released version as-is.
    Keep,
    /// Force this exact version.
    Explicit(Version),
}

impl VersionRequest {
    /// Parse a `--version` flag value: the literal `keep`, or an explicit
    /// version restricted to `[12].ddd`.
    pub fn parse(text: &str) -> Result<VersionRequest, Error> {
        if !REQUEST_RE.is_match(text) {
            return Err(Error::BadVersionRequest(text.to_string()));
        }
        if text == "keep" {
            Ok(VersionRequest::Keep)
        } else {
            Ok(VersionRequest::Explicit(Version::parse(text)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical() {
        assert_eq!(Version::parse("1.23").unwrap(), Version::new(1, 23));
        assert_eq!(Version::parse("2.040").unwrap(), Version::new(2, 40));
        assert_eq!(Version::parse("2.000").unwrap(), Version::new(2, 0));
    }

    #[test]
    fn test_format_padding() {
        assert_eq!(Version::new(1, 2).to_string(), "1.02");
        assert_eq!(Version::new(1, 23).to_string(), "1.23");
        assert_eq!(Version::new(2, 40).to_string(), "2.040");
        assert_eq!(Version::new(3, 5).to_string(), "3.005");
    }

    #[test]
    fn test_round_trip_canonical_text() {
        for text in ["1.00", "1.23", "1.99", "2.000", "2.040", "2.999", "3.005"] {
            assert_eq!(Version::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["2.1", "2.0400", "2", "2.", ".040", "abc", "", "2.04a", "-1.02"] {
            assert!(
                matches!(Version::parse(text), Err(Error::BadVersion(_))),
                "{text:?} should not parse"
            );
        }
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Version::new(1, 99) < Version::new(2, 0));
        assert!(Version::new(2, 39) < Version::new(2, 40));
        assert!(Version::new(2, 40) == Version::new(2, 40));
        assert!(Version::new(3, 0) > Version::new(2, 999));
    }

    #[test]
    fn test_request_keep() {
        assert_eq!(VersionRequest::parse("keep").unwrap(), VersionRequest::Keep);
    }

    #[test]
    fn test_request_explicit() {
        assert_eq!(
            VersionRequest::parse("2.001").unwrap(),
            VersionRequest::Explicit(Version::new(2, 1))
        );
        assert_eq!(
            VersionRequest::parse("1.000").unwrap(),
            VersionRequest::Explicit(Version::new(1, 0))
        );
    }

    #[test]
    fn test_request_rejects_malformed() {
        for text in ["1.02", "3.000", "Keep", "keep ", "2.40", ""] {
            assert!(
                matches!(VersionRequest::parse(text), Err(Error::BadVersionRequest(_))),
                "{text:?} should not parse"
            );
        }
    }
}
