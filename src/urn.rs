//! RFC 2141 Uniform Resource Names
//!
//! This module provides the [`Urn`] value type: parsing from untrusted text,
//! normalization, canonical serialization and structural equality.

use crate::error::InvalidUrn;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// The NID `urn` is reserved so a URN can never be confused with its own scheme.
const RESERVED_NID: &str = "urn";

/// Anchored grammar for `urn:<nid>:<nss>`.
///
/// The scheme literal and NID accept either case; the NSS class is listed in
/// both cases because it is matched, and stored, verbatim.
static URN_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[Uu][Rr][Nn]:(?P<nid>[A-Za-z0-9][A-Za-z0-9-]{0,31}):(?P<nss>(?:[-A-Za-z0-9()+,.:=@;$_!*'&~/]|%[0-9A-Fa-f]{2})+)$",
    )
    .expect("URN grammar pattern must compile")
});

/// A Uniform Resource Name
///
/// The general form is `urn:<nid>:<nss>`, per RFC 2141.
///
/// Examples:
/// - `urn:isbn:0451450523`
/// - `urn:ietf:rfc:2141`
/// - `urn:foo:a123%2C456`
///
/// Values only come out of [`Urn::parse`] (or the conversions built on it), so
/// every live instance satisfies the grammar. The NID is always lowercase;
/// the NSS keeps its case exactly as parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Urn {
    nid: String,
    nss: String,
}

impl Urn {
    /// Parse a URN from its textual form
    ///
    /// Validation runs in two phases:
    /// 1. the whole input must match the URN grammar (no surrounding
    ///    whitespace, no trailing characters, `%` only as a full `%XX` triplet)
    /// 2. after the NID is lowercased it must not be the reserved `urn`
    ///
    /// Case handling:
    /// - Scheme literal: accepted in any case, always output as `urn`
    /// - NID: accepted in any case, normalized to lowercase
    /// - NSS: case preserved exactly as specified
    pub fn parse(s: &str) -> Result<Self, InvalidUrn> {
        let Some(captures) = URN_GRAMMAR.captures(s) else {
            debug!(phase = "grammar", len = s.len(), "rejected URN");
            return Err(InvalidUrn);
        };

        let mut urn = Self {
            nid: captures["nid"].to_string(),
            nss: captures["nss"].to_string(),
        };
        urn.normalize();

        // Not expressible in the grammar above, so it is checked on the captured NID
        if urn.nid == RESERVED_NID {
            debug!(phase = "reserved", len = s.len(), "rejected URN");
            return Err(InvalidUrn);
        }

        trace!(nid = %urn.nid, "parsed URN");
        Ok(urn)
    }

    /// Lowercase the NID. The NSS may hold `%XX` escapes and case-sensitive
    /// data, so it is never touched.
    fn normalize(&mut self) {
        self.nid.make_ascii_lowercase();
    }

    /// Get the namespace identifier, always lowercase
    pub fn nid(&self) -> &str {
        &self.nid
    }

    /// Get the namespace specific string, exactly as parsed
    pub fn nss(&self) -> &str {
        &self.nss
    }

    /// Consume the URN, returning `(nid, nss)`
    pub fn into_parts(self) -> (String, String) {
        (self.nid, self.nss)
    }

    /// Parse and re-serialize a URN string into its canonical form
    pub fn canonical(urn: &str) -> Result<String, InvalidUrn> {
        Ok(Urn::parse(urn)?.to_string())
    }

    /// Like [`Urn::canonical`], passing `None` through unchanged
    pub fn canonical_option(urn: Option<&str>) -> Result<Option<String>, InvalidUrn> {
        urn.map(Urn::canonical).transpose()
    }

    /// Build a URN from raw parts, skipping validation.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(nid: &str, nss: &str) -> Self {
        Self {
            nid: nid.to_string(),
            nss: nss.to_string(),
        }
    }
}

impl FromStr for Urn {
    type Err = InvalidUrn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urn::parse(s)
    }
}

impl TryFrom<&str> for Urn {
    type Error = InvalidUrn;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Urn::parse(s)
    }
}

impl TryFrom<String> for Urn {
    type Error = InvalidUrn;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Urn::parse(&s)
    }
}

impl From<Urn> for String {
    fn from(urn: Urn) -> Self {
        urn.to_string()
    }
}

/// Canonical form: `urn:` + NID + `:` + NSS
impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "urn:{}:{}", self.nid, self.nss)
    }
}

// Serde serialization support: a URN is a single JSON string in canonical form
impl Serialize for Urn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Re-parses the string, so a stored value that is no longer valid fails here.
///
/// The failure reaches serde as a message only. Use [`crate::json`] when the
/// caller needs to test for [`InvalidUrn`] itself.
impl<'de> Deserialize<'de> for Urn {
    fn deserialize<D>(deserializer: D) -> Result<Urn, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Urn::parse(&s).map_err(serde::de::Error::custom)
    }
}
