use dnb_urn::{DnbUrn, UrnError};

// Component values of a real GBV URN
const LIBRARY_NETWORK_ABBREVIATION: &str = "gbv";
const LIBRARY_IDENTIFIER: &str = "089";
const UNIQUE_NUMBER: &str = "332175294";
const CHECK_DIGIT: char = '5';

#[test]
fn test_build_urn_from_individual_parts() {
    let urn = DnbUrn::from_parts(
        LIBRARY_NETWORK_ABBREVIATION,
        LIBRARY_IDENTIFIER,
        UNIQUE_NUMBER,
        CHECK_DIGIT,
    )
    .expect("should build");
    assert_eq!(urn.to_string(), "urn:nbn:de:gbv:089-3321752945");
}

#[test]
fn test_building_fails_if_check_digit_doesnt_match() {
    let result = DnbUrn::from_parts(
        LIBRARY_NETWORK_ABBREVIATION,
        LIBRARY_IDENTIFIER,
        UNIQUE_NUMBER,
        '4',
    );
    assert_eq!(
        result,
        Err(UrnError::CheckDigit {
            expected: '5',
            actual: '4'
        })
    );
}

#[test]
fn test_building_fails_on_malformed_components() {
    let result = DnbUrn::from_parts("GBV", LIBRARY_IDENTIFIER, UNIQUE_NUMBER, CHECK_DIGIT);
    assert!(matches!(result, Err(UrnError::Syntax(_))));
}

#[test]
fn test_built_urn_round_trips_through_parse() {
    let urn = DnbUrn::from_parts(
        LIBRARY_NETWORK_ABBREVIATION,
        LIBRARY_IDENTIFIER,
        UNIQUE_NUMBER,
        CHECK_DIGIT,
    )
    .expect("should build");
    let reparsed = DnbUrn::parse(&urn.to_string()).expect("should reparse");
    assert_eq!(urn, reparsed);
}
