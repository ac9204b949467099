//! Property tests for name laws.
//!
//! - Data string round-trip reconstructs an equal name
//! - `append` then `remove` of the last index is the identity
//! - `concat` adds component counts
//! - Equal names have equal hash codes
//! - Codec `split` inverts `join` for well-masked components

use proptest::prelude::*;
use segname_core::codec::{join, mask, split, unmask};
use segname_core::{Backing, Delimiter, Name, NameBuilder};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn backing() -> impl Strategy<Value = Backing> {
    prop_oneof![Just(Backing::Array), Just(Backing::String)]
}

/// Unmasked text drawn from an alphabet heavy in special characters
fn raw_component() -> impl Strategy<Value = String> {
    "[ab./#\\\\]{0,5}"
}

/// Components masked for `delimiter`
fn masked_components(delimiter: char, min: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(raw_component(), min..6)
        .prop_map(move |cs| cs.iter().map(|c| mask(c, delimiter)).collect())
}

fn build(components: Vec<String>, delimiter: char, backing: Backing) -> Name {
    NameBuilder::new()
        .delimiter(Delimiter::new(delimiter).unwrap())
        .backing(backing)
        .components(components)
        .build()
        .unwrap()
}

fn std_hash(name: &Name) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: parsing the data string of a dotted name gives back an equal name.
    #[test]
    fn prop_data_string_round_trip(cs in masked_components('.', 1), b in backing()) {
        let n = build(cs, '.', b);
        let back = Name::parse(&n.as_data_string(), Delimiter::DEFAULT).unwrap();
        prop_assert_eq!(back, n);
    }

    /// Property: round-trip also holds for other delimiters when no
    /// component carries an unescaped canonical delimiter.
    #[test]
    fn prop_data_string_round_trip_foreign_delimiter(
        cs in prop::collection::vec("[ab/#\\\\]{0,5}", 1..6),
        b in backing(),
    ) {
        let masked: Vec<String> = cs.iter().map(|c| mask(c, '/')).collect();
        let n = build(masked, '/', b);
        let back = Name::parse(&n.as_data_string(), Delimiter::DEFAULT).unwrap();
        prop_assert_eq!(back, n);
    }

    /// Property: append followed by removing the appended index is the identity.
    #[test]
    fn prop_append_remove_inverse(
        cs in masked_components('#', 0),
        extra in raw_component(),
        b in backing(),
    ) {
        let n = build(cs, '#', b);
        let grown = n.append(mask(&extra, '#')).unwrap();
        let shrunk = grown.remove(n.no_components()).unwrap();
        prop_assert_eq!(&shrunk, &n);
        prop_assert_eq!(shrunk.as_data_string(), n.as_data_string());
    }

    /// Property: concat count is the sum of both counts.
    #[test]
    fn prop_concat_additive(
        left in masked_components('.', 0),
        right in masked_components('/', 0),
        lb in backing(),
        rb in backing(),
    ) {
        let l = build(left, '.', lb);
        let r = build(right, '/', rb);
        let joined = l.concat(&r).unwrap();
        prop_assert_eq!(joined.no_components(), l.no_components() + r.no_components());
        prop_assert_eq!(joined.as_string(), {
            let mut parts = Vec::new();
            if !l.is_empty() { parts.push(l.as_string()); }
            if !r.is_empty() { parts.push(r.as_string_with('.')); }
            parts.join(".")
        });
    }

    /// Property: equal names hash equal, under both hash functions.
    #[test]
    fn prop_equal_names_hash_equal(cs in masked_components('.', 0)) {
        let array = build(cs.clone(), '.', Backing::Array);
        let string = build(cs, '.', Backing::String);
        prop_assert!(array.is_equal(&string));
        prop_assert_eq!(array.get_hash_code(), string.get_hash_code());
        prop_assert_eq!(std_hash(&array), std_hash(&string));
    }

    /// Property: both backings agree on every read.
    #[test]
    fn prop_backings_agree(cs in masked_components('/', 0)) {
        let array = build(cs.clone(), '/', Backing::Array);
        let string = build(cs, '/', Backing::String);
        prop_assert_eq!(array.no_components(), string.no_components());
        prop_assert_eq!(array.components(), string.components());
        prop_assert_eq!(array.as_string(), string.as_string());
        prop_assert_eq!(array.as_data_string(), string.as_data_string());
    }

    /// Property: split inverts join for well-masked, non-empty component lists.
    #[test]
    fn prop_split_inverts_join(cs in masked_components('#', 1)) {
        prop_assert_eq!(split(&join(&cs, '#'), '#'), cs);
    }

    /// Property: unmask inverts mask.
    #[test]
    fn prop_unmask_inverts_mask(raw in raw_component()) {
        prop_assert_eq!(unmask(&mask(&raw, '.')), raw);
    }

    /// Property: unmask is the identity on text without escapes.
    #[test]
    fn prop_unmask_identity_without_escapes(raw in "[ab./#]{0,8}") {
        prop_assert_eq!(unmask(&raw), raw.clone());
        prop_assert_eq!(unmask(&unmask(&raw)), raw);
    }
}
