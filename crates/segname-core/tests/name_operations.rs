use rstest::rstest;
use segname_core::{ArgumentError, Backing, Delimiter, Error, ErrorKind, Name, NameBuilder};

fn name(backing: Backing, components: &[&str], delimiter: char) -> Name {
    NameBuilder::new()
        .delimiter(Delimiter::new(delimiter).unwrap())
        .backing(backing)
        .components(components.iter().copied())
        .build()
        .unwrap()
}

fn parsed(backing: Backing, raw: &str, delimiter: char) -> Name {
    Name::parse_with(raw, Delimiter::new(delimiter).unwrap(), backing).unwrap()
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_oss_scenario(#[case] backing: Backing) {
    let n = parsed(backing, "oss\\.cs.fau.de", '.');
    assert_eq!(n.no_components(), 3);
    assert_eq!(n.component(0).unwrap(), "oss\\.cs");
    assert_eq!(n.component(1).unwrap(), "fau");
    assert_eq!(n.component(2).unwrap(), "de");
    assert_eq!(n.as_string_with('.'), "oss.cs.fau.de");
    assert_eq!(n.as_data_string(), "oss\\.cs.fau.de");
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_slashes_are_four_empty_components(#[case] backing: Backing) {
    let n = parsed(backing, "///", '/');
    assert_eq!(n.no_components(), 4);
    assert_eq!(n.components(), ["", "", "", ""]);
    assert_eq!(n.as_string(), "///");
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_empty_string_is_one_empty_component(#[case] backing: Backing) {
    let n = parsed(backing, "", '.');
    assert_eq!(n.no_components(), 1);
    assert!(!n.is_empty());
    assert_eq!(n.component(0).unwrap(), "");
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_concat_scenario(#[case] backing: Backing) {
    let left = name(backing, &["a", "b"], '.');
    let right = name(backing, &["c"], '.');
    let joined = left.concat(&right).unwrap();
    assert_eq!(joined.no_components(), 3);
    assert_eq!(joined.components(), ["a", "b", "c"]);
    assert_eq!(left.no_components(), 2);
}

#[test]
fn test_concat_mixed_backings_keeps_receiver_backing() {
    let left = name(Backing::String, &["a"], '.');
    let right = name(Backing::Array, &["b", "c"], '.');
    let joined = left.concat(&right).unwrap();
    assert_eq!(joined.backing(), Backing::String);
    assert_eq!(joined.components(), ["a", "b", "c"]);
}

#[test]
fn test_concat_remasks_foreign_delimiter() {
    let dotted = name(Backing::Array, &["a"], '.');
    let slashed = name(Backing::Array, &["x.y", "p\\/q"], '/');
    let joined = dotted.concat(&slashed).unwrap();
    assert_eq!(joined.components(), ["a", "x\\.y", "p/q"]);
    assert_eq!(joined.as_string(), "a.x.y.p/q");
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_persistent_edits_leave_receiver_unchanged(#[case] backing: Backing) {
    let n = name(backing, &["a", "b", "c"], '.');

    let set = n.set_component(1, "x").unwrap();
    let inserted = n.insert(0, "w").unwrap();
    let appended = n.append("d").unwrap();
    let removed = n.remove(2).unwrap();

    assert_eq!(set.components(), ["a", "x", "c"]);
    assert_eq!(inserted.components(), ["w", "a", "b", "c"]);
    assert_eq!(appended.components(), ["a", "b", "c", "d"]);
    assert_eq!(removed.components(), ["a", "b"]);
    assert_eq!(n.components(), ["a", "b", "c"]);
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_insert_at_end_appends(#[case] backing: Backing) {
    let n = name(backing, &["a", "b"], '.');
    let inserted = n.insert(2, "c").unwrap();
    assert_eq!(inserted, n.append("c").unwrap());
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_index_equal_to_count_is_rejected(#[case] backing: Backing) {
    let n = name(backing, &["a", "b"], '.');
    let expected = Error::Argument(ArgumentError::IndexOutOfBounds { index: 2, len: 2 });
    assert_eq!(n.component(2).unwrap_err(), expected);
    assert_eq!(n.remove(2).unwrap_err(), expected);
    assert_eq!(n.set_component(2, "x").unwrap_err(), expected);
    assert_eq!(n.insert(3, "x").unwrap_err().kind(), ErrorKind::Argument);
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_unmasked_components_are_rejected(#[case] backing: Backing) {
    let n = name(backing, &["a"], '/');
    for result in [n.append("x/y"), n.insert(0, "x/y"), n.set_component(0, "x/y")] {
        assert!(matches!(
            result,
            Err(Error::Argument(ArgumentError::UnmaskedDelimiter { delimiter: '/', .. }))
        ));
    }
    assert!(matches!(
        n.append("tail\\"),
        Err(Error::Argument(ArgumentError::DanglingEscape(_)))
    ));
    assert!(n.append("x\\/y").is_ok());
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_remove_down_to_empty_and_back(#[case] backing: Backing) {
    let n = name(backing, &["only"], '.');
    let empty = n.remove(0).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.as_data_string(), "");
    assert_eq!(empty.component(0).unwrap_err().kind(), ErrorKind::Argument);

    let one_empty = empty.append("").unwrap();
    assert_eq!(one_empty.no_components(), 1);
    assert_ne!(one_empty, empty);
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_in_place_edits(#[case] backing: Backing) {
    let mut n = name(backing, &["a", "b"], '.');
    n.append_mut("c").unwrap();
    n.insert_mut(0, "z").unwrap();
    n.set_component_mut(1, "y").unwrap();
    n.remove_mut(3).unwrap();
    n.concat_mut(&name(Backing::Array, &["q"], '.')).unwrap();
    assert_eq!(n.components(), ["z", "y", "b", "q"]);
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_failed_in_place_edit_changes_nothing(#[case] backing: Backing) {
    let mut n = name(backing, &["a", "b"], '.');
    let before = n.clone();

    assert!(n.remove_mut(5).is_err());
    assert!(n.insert_mut(0, "x.y").is_err());
    assert!(n.set_component_mut(9, "x").is_err());
    assert!(n.append_mut("bad\\").is_err());

    assert_eq!(n, before);
    assert_eq!(n.as_data_string(), "a.b");
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_clone_is_independent(#[case] backing: Backing) {
    let original = name(backing, &["a", "b"], '.');
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy.set_component_mut(0, "changed").unwrap();
    copy.append_mut("more").unwrap();

    assert_eq!(original.components(), ["a", "b"]);
    assert_eq!(copy.components(), ["changed", "b", "more"]);
}

#[test]
fn test_equality_ignores_delimiter_and_backing() {
    let dotted = name(Backing::Array, &["a", "b"], '.');
    let slashed = name(Backing::String, &["a", "b"], '/');
    assert!(dotted.is_equal(&slashed));
    assert_eq!(dotted.get_hash_code(), slashed.get_hash_code());
    assert_ne!(dotted, name(Backing::Array, &["a", "b", "c"], '.'));
    assert_ne!(dotted, name(Backing::Array, &["b", "a"], '.'));
}

#[test]
fn test_equality_of_long_string_backed_names() {
    use std::collections::HashSet;

    let raw: Vec<String> = (0..5000).map(|i| format!("seg{}", i)).collect();
    let left = Name::parse_with(&raw.join("."), Delimiter::DEFAULT, Backing::String).unwrap();
    let right = Name::parse_with(&raw.join("."), Delimiter::DEFAULT, Backing::String).unwrap();
    assert_eq!(left, right);
    assert_eq!(left.get_hash_code(), right.get_hash_code());

    let changed = right.set_component(4999, "other").unwrap();
    assert_ne!(left, changed);

    let seen: HashSet<Name> = [left].into_iter().collect();
    assert!(seen.contains(&right));
    assert!(!seen.contains(&changed));
}

#[test]
fn test_names_as_set_keys() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(name(Backing::Array, &["usr", "bin"], '/'));
    assert!(seen.contains(&name(Backing::String, &["usr", "bin"], '/')));
    assert!(!seen.contains(&name(Backing::String, &["usr", "lib"], '/')));
}

#[rstest]
#[case(Backing::Array)]
#[case(Backing::String)]
fn test_as_string_with_other_delimiter(#[case] backing: Backing) {
    let n = parsed(backing, "a\\#b#c\\\\d", '#');
    assert_eq!(n.components(), ["a\\#b", "c\\\\d"]);
    assert_eq!(n.as_string(), "a#b#c\\d");
    assert_eq!(n.as_string_with('|'), "a#b|c\\d");
    assert_eq!(n.as_data_string(), "a\\#b.c\\\\d");
}

#[test]
fn test_delimiter_preconditions() {
    assert_eq!(
        "".parse::<Delimiter>().unwrap_err(),
        ArgumentError::EmptyDelimiter
    );
    assert!(matches!(
        Delimiter::try_from("ab"),
        Err(ArgumentError::MultiCharDelimiter(_))
    ));
    assert_eq!(Delimiter::new('\\'), Err(ArgumentError::EscapeAsDelimiter));
}

#[test]
fn test_error_kinds_are_distinct() {
    let argument: Error = ArgumentError::EmptyDelimiter.into();
    let post = Error::Postcondition("x".to_string());
    let inv = Error::Invariant("x".to_string());
    assert_eq!(argument.kind(), ErrorKind::Argument);
    assert_eq!(post.kind(), ErrorKind::Postcondition);
    assert_eq!(inv.kind(), ErrorKind::Invariant);
    assert!(argument.is_argument());
    assert!(!post.is_argument());
    assert!(!inv.is_argument());
}
