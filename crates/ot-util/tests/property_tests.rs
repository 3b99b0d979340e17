use ot_util::{ErrorKind, format_human_duration, is_valid_filename, split_and_validate, validate_components};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_filename_fails_only_for_reserved_rules(name in "\\PC*") {
        let expected_invalid = name.is_empty() || name == "." || name == ".." || name.contains('/');
        prop_assert_eq!(is_valid_filename(&name).is_err(), expected_invalid);
    }

    #[test]
    fn test_single_component_roundtrip(name in "[^/]+") {
        prop_assume!(name != "." && name != "..");
        let components = split_and_validate(&name).unwrap();
        prop_assert_eq!(components, vec![name.as_str()]);
    }

    #[test]
    fn test_valid_path_component_count(parts in prop::collection::vec("[a-z0-9._:-]{1,8}", 1..10)) {
        prop_assume!(parts.iter().all(|p| p != "." && p != ".."));
        let path = parts.join("/");
        let components = split_and_validate(&path).unwrap();
        prop_assert_eq!(components.len(), path.split('/').count());
        prop_assert_eq!(&components, &parts);
        prop_assert!(validate_components(&components).is_ok());
    }

    #[test]
    fn test_parent_reference_always_rejected(
        before in prop::collection::vec("[a-z]{1,4}", 0..4),
        after in prop::collection::vec("[a-z]{1,4}", 0..4),
    ) {
        let mut parts = before.clone();
        parts.push("..".to_string());
        parts.extend(after);
        let err = split_and_validate(&parts.join("/")).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::ParentReference);
        prop_assert_eq!(err.index(), Some(before.len()));
    }

    #[test]
    fn test_formatter_is_total(magnitude in any::<u64>()) {
        let s = format_human_duration(magnitude);
        prop_assert!(s.ends_with('s'));
        prop_assert!(!s.starts_with('-'));
    }
}
