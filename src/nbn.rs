//! Generic National Bibliographic Number (NBN) URNs.
//!
//! National libraries assign NBNs within the "nbn" URN namespace registered
//! by RFC 3188. An NBN URN has the form
//! `urn:nbn:<country>[:<subnamespace>]-<number>`: the prefix up to the first
//! hyphen names the issuing institution, the remainder is the national
//! bibliography number itself.

use std::fmt;
use std::str::FromStr;

use crate::errors::UrnError;

/// A parsed, syntactically valid NBN URN of any country.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NbnUrn {
    country_code: String,
    subnamespace_prefix: Option<String>,
    nbn: String,
}

impl NbnUrn {
    /// Parses a string of the form `urn:nbn:<prefix>-<number>`.
    ///
    /// The `urn` scheme and the `nbn` namespace identifier are matched
    /// case-insensitively and canonicalized to lowercase; the namespace
    /// specific string is kept verbatim.
    pub fn parse(input: &str) -> Result<Self, UrnError> {
        let mut parts = input.splitn(3, ':');
        let scheme = parts.next().unwrap_or("");
        let nid = parts
            .next()
            .ok_or_else(|| UrnError::Syntax("missing URN namespace identifier".to_string()))?;
        let nss = parts
            .next()
            .ok_or_else(|| UrnError::Syntax("missing namespace specific string".to_string()))?;

        if !scheme.eq_ignore_ascii_case("urn") {
            return Err(UrnError::Syntax(format!("scheme '{}' is not 'urn'", scheme)));
        }
        if !nid.eq_ignore_ascii_case("nbn") {
            return Err(UrnError::Syntax(format!(
                "namespace identifier '{}' is not 'nbn'",
                nid
            )));
        }
        validate_nss(nss)?;

        let (prefix, nbn) = nss.split_once('-').ok_or_else(|| {
            UrnError::Syntax(
                "missing '-' separator before the national bibliography number".to_string(),
            )
        })?;
        if nbn.is_empty() {
            return Err(UrnError::Syntax(
                "empty national bibliography number".to_string(),
            ));
        }

        let mut segments = prefix.split(':');
        let country_code = segments.next().unwrap_or("");
        validate_country_code(country_code)?;
        let rest: Vec<&str> = segments.collect();
        for segment in &rest {
            validate_prefix_segment(segment)?;
        }
        let subnamespace_prefix = if rest.is_empty() {
            None
        } else {
            Some(rest.join(":"))
        };

        Ok(Self {
            country_code: country_code.to_string(),
            subnamespace_prefix,
            nbn: nbn.to_string(),
        })
    }

    /// Builds an NBN URN from its components.
    ///
    /// # Arguments
    /// * `country_code` - two-letter ISO 3166 code, e.g. "de"
    /// * `subnamespace_prefix` - colon-separated institution segments, e.g. "gbv:089"
    /// * `nbn` - the national bibliography number, e.g. "332175294"
    pub fn new(
        country_code: &str,
        subnamespace_prefix: &str,
        nbn: &str,
    ) -> Result<Self, UrnError> {
        validate_country_code(country_code)?;
        for segment in subnamespace_prefix.split(':') {
            validate_prefix_segment(segment)?;
        }
        if nbn.is_empty() {
            return Err(UrnError::Syntax(
                "empty national bibliography number".to_string(),
            ));
        }
        validate_nss(nbn)?;

        Ok(Self {
            country_code: country_code.to_string(),
            subnamespace_prefix: Some(subnamespace_prefix.to_string()),
            nbn: nbn.to_string(),
        })
    }

    /// Two-letter country code of the issuing national library.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Institution segments between country code and number, if any.
    pub fn subnamespace_prefix(&self) -> Option<&str> {
        self.subnamespace_prefix.as_deref()
    }

    /// The national bibliography number following the '-' separator.
    pub fn national_bibliography_number(&self) -> &str {
        &self.nbn
    }
}

impl fmt::Display for NbnUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subnamespace_prefix {
            Some(prefix) => write!(f, "urn:nbn:{}:{}-{}", self.country_code, prefix, self.nbn),
            None => write!(f, "urn:nbn:{}-{}", self.country_code, self.nbn),
        }
    }
}

impl FromStr for NbnUrn {
    type Err = UrnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NbnUrn::parse(s)
    }
}

fn is_nss_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "()+,-.:=@;$_!*'".contains(c)
}

/// Namespace specific strings are limited to the RFC 2141 character set,
/// with '%' introducing a two-digit hex escape.
fn validate_nss(nss: &str) -> Result<(), UrnError> {
    if nss.is_empty() {
        return Err(UrnError::Syntax(
            "empty namespace specific string".to_string(),
        ));
    }
    let mut chars = nss.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            let valid = matches!(
                (chars.next(), chars.next()),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            );
            if !valid {
                return Err(UrnError::Syntax(
                    "incomplete percent escape in namespace specific string".to_string(),
                ));
            }
        } else if !is_nss_char(c) {
            return Err(UrnError::Syntax(format!(
                "illegal character '{}' in namespace specific string",
                c
            )));
        }
    }
    Ok(())
}

fn validate_country_code(code: &str) -> Result<(), UrnError> {
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(UrnError::Syntax(format!(
            "'{}' is not a two-letter country code",
            code
        )));
    }
    Ok(())
}

fn validate_prefix_segment(segment: &str) -> Result<(), UrnError> {
    if segment.is_empty()
        || !segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(UrnError::Syntax(format!(
            "invalid subnamespace segment '{}'",
            segment
        )));
    }
    Ok(())
}
