use dnb_urn::DnbUrn;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const URN: &str = "urn:nbn:de:gbv:089-3321752945";

// Helper to get a value's hash
fn hash_of(urn: &DnbUrn) -> u64 {
    let mut hasher = DefaultHasher::new();
    urn.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_lexically_equivalent_urns_are_equal() {
    let a = DnbUrn::parse(URN).expect("should parse");
    let b = DnbUrn::parse(URN).expect("should parse");
    assert_eq!(a, b);
}

#[test]
fn test_lexically_equivalent_urns_hash_identically() {
    let a = DnbUrn::parse(URN).expect("should parse");
    let b = DnbUrn::parse(URN).expect("should parse");
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_cloned_urn_is_equal_to_original() {
    let a = DnbUrn::parse(URN).expect("should parse");
    let b = a.clone();
    assert_eq!(a, b);
}

#[test]
fn test_different_urns_are_not_equal() {
    let a = DnbUrn::create("urn:nbn:de:gbv:089-3321752945");
    let b = DnbUrn::create("urn:nbn:de:bsz:14-qucosa-329928");
    assert_ne!(a, b);
}
