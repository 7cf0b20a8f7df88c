//! URNs issued by the German National Library (DNB) in the nbn:de namespace.
//!
//! A DNB URN is an NBN URN whose country code is "de" and whose final
//! character is a check digit over the preceding canonical form, e.g.
//! "urn:nbn:de:gbv:089-3321752945". A [`DnbUrn`] value can only come into
//! existence fully validated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::check_digit;
use crate::errors::UrnError;
use crate::nbn::NbnUrn;

const COUNTRY_CODE: &str = "de";

/// A validated URN of the German National Library.
///
/// Obtain instances through [`DnbUrn::parse`] for untrusted input,
/// [`DnbUrn::from_parts`] for component-wise assembly, or [`DnbUrn::create`]
/// for known-good literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnbUrn {
    nbn_urn: NbnUrn,
    check_digit: char,
}

impl DnbUrn {
    /// Parses a string into a DNB URN.
    ///
    /// A valid DNB URN carries the fixed namespace "nbn:de" as well as a
    /// valid check digit as its last character.
    ///
    /// # Arguments
    /// * `input` - URN literal such as "urn:nbn:de:gbv:089-3321752945"
    pub fn parse(input: &str) -> Result<Self, UrnError> {
        let mut chars = input.chars();
        let candidate = chars
            .next_back()
            .ok_or_else(|| UrnError::Syntax("empty URN".to_string()))?;
        let nbn_urn = NbnUrn::parse(chars.as_str())?;
        if nbn_urn.country_code() != COUNTRY_CODE {
            tracing::debug!(
                "Rejecting NBN URN with country code {}",
                nbn_urn.country_code()
            );
            return Err(UrnError::Namespace(nbn_urn.country_code().to_string()));
        }
        Self::with_verified_digit(nbn_urn, candidate)
    }

    /// Builds a DNB URN from its individual parts.
    ///
    /// # Arguments
    /// * `library_network_abbreviation` - e.g. "gbv"
    /// * `library_identifier` - e.g. "089"
    /// * `unique_number` - number assigned by the library, e.g. "332175294"
    /// * `check_digit` - the digit completing the URN
    pub fn from_parts(
        library_network_abbreviation: &str,
        library_identifier: &str,
        unique_number: &str,
        check_digit: char,
    ) -> Result<Self, UrnError> {
        let subnamespace = format!("{}:{}", library_network_abbreviation, library_identifier);
        let nbn_urn = NbnUrn::new(COUNTRY_CODE, &subnamespace, unique_number)?;
        Self::with_verified_digit(nbn_urn, check_digit)
    }

    /// Creates a DNB URN from a string literal known to be valid.
    ///
    /// This works as if by invoking [`DnbUrn::parse`], with any validation
    /// error escalated to a panic. Use it for URN constants declared within a
    /// program, where failing to parse is a programming error; input from
    /// users or other error-prone sources belongs to [`DnbUrn::parse`].
    ///
    /// # Panics
    /// Panics if the given string cannot be parsed into a DNB URN.
    pub fn create(input: &str) -> Self {
        match Self::parse(input) {
            Ok(urn) => urn,
            Err(e) => panic!("invalid DNB URN literal '{}': {}", input, e),
        }
    }

    fn with_verified_digit(nbn_urn: NbnUrn, candidate: char) -> Result<Self, UrnError> {
        let expected = check_digit::compute(&nbn_urn.to_string())?;
        if expected != candidate {
            return Err(UrnError::CheckDigit {
                expected,
                actual: candidate,
            });
        }
        tracing::debug!("Validated DNB URN {}{}", nbn_urn, candidate);
        Ok(Self {
            nbn_urn,
            check_digit: candidate,
        })
    }

    /// The check digit completing this URN.
    pub fn check_digit(&self) -> char {
        self.check_digit
    }

    /// The underlying generic NBN URN, without the check digit.
    pub fn nbn_urn(&self) -> &NbnUrn {
        &self.nbn_urn
    }
}

impl fmt::Display for DnbUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.nbn_urn, self.check_digit)
    }
}

impl FromStr for DnbUrn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DnbUrn::parse(s)
    }
}

impl Serialize for DnbUrn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DnbUrn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DnbUrn::parse(&s).map_err(serde::de::Error::custom)
    }
}
