use crate::constants::WWW_PREFIX;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// A syntactically valid hostname.
///
/// Accepted when it contains at least one `.`, starts and ends with an ASCII
/// letter or digit, and only uses ASCII letters, digits, `.` and `-` in between.
/// Case is kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Domain(String);

/// A candidate that failed hostname validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid domain: {candidate:?}")]
pub struct InvalidDomain {
    pub candidate: String,
}

impl Domain {
    /// Validates `candidate` as a hostname.
    ///
    /// ```rust
    /// use fweb_domain::Domain;
    ///
    /// assert!(Domain::parse("www.example.com").is_ok());
    /// assert!(Domain::parse("bad..").is_err());
    /// ```
    pub fn parse(candidate: impl Into<String>) -> Result<Self, InvalidDomain> {
        let candidate = candidate.into();
        if is_hostname(&candidate) { Ok(Self(candidate)) } else { Err(InvalidDomain { candidate }) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with a leading `www.` removed; plain prefix match, no public
    /// suffix knowledge.
    #[must_use]
    pub fn apex(&self) -> &str {
        self.0.strip_prefix(WWW_PREFIX).unwrap_or(&self.0)
    }
}

fn is_hostname(s: &str) -> bool {
    let bytes = s.as_bytes();
    let (Some(first), Some(last)) = (bytes.first(), bytes.last()) else {
        return false;
    };

    bytes.len() >= 2
        && s.contains('.')
        && first.is_ascii_alphanumeric()
        && last.is_ascii_alphanumeric()
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'.' || *b == b'-')
}

impl TryFrom<String> for Domain {
    type Error = InvalidDomain;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for Domain {
    type Error = InvalidDomain;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Domain> for String {
    fn from(domain: Domain) -> Self {
        domain.0
    }
}

impl Deref for Domain {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_hostnames() {
        for ok in ["a.io", "example.com", "www.example.com", "sub-1.Example.ORG", "1.2.3.4"] {
            assert!(Domain::parse(ok).is_ok(), "{ok} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_hostnames() {
        for bad in ["", "a", "localhost", "not a domain", "bad..", ".lead.com", "trail.com-", "x_y.com"]
        {
            assert!(Domain::parse(bad).is_err(), "{bad:?} should be invalid");
        }
    }

    #[test]
    fn case_is_preserved() {
        let d = Domain::parse("WWW.Example.COM").unwrap();
        assert_eq!(d.as_str(), "WWW.Example.COM");
        // prefix match is case-sensitive
        assert_eq!(d.apex(), "WWW.Example.COM");
    }

    #[test]
    fn apex_strips_only_leading_www() {
        assert_eq!(Domain::parse("www.example.com").unwrap().apex(), "example.com");
        assert_eq!(Domain::parse("example.com").unwrap().apex(), "example.com");
        assert_eq!(Domain::parse("api.www.example.com").unwrap().apex(), "api.www.example.com");
    }

    #[test]
    fn deserialization_validates() {
        let ok: Result<Domain, _> = serde_json::from_str("\"example.com\"");
        let bad: Result<Domain, _> = serde_json::from_str("\"nope\"");
        assert!(ok.is_ok());
        assert!(bad.is_err());
    }
}
