//! Parsing, validation and construction of URNs issued by the German
//! National Library (DNB) in the urn:nbn:de namespace.
//!
//! A DNB URN is a National Bibliographic Number URN whose last character is
//! a check digit over everything before it:
//!
//! ```
//! use dnb_urn::DnbUrn;
//!
//! let urn = DnbUrn::parse("urn:nbn:de:gbv:089-3321752945").unwrap();
//! assert_eq!(urn.check_digit(), '5');
//! assert_eq!(urn.to_string(), "urn:nbn:de:gbv:089-3321752945");
//! ```

pub mod check_digit;
pub mod dnb;
pub mod errors;
pub mod nbn;

// Re-exports for the common entry points
pub use dnb::DnbUrn;
pub use errors::UrnError;
pub use nbn::NbnUrn;
