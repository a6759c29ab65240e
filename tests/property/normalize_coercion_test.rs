//! Property-based tests for bookmark normalization.
//!
//! For any raw record with a numeric-coercible id and a non-blank title,
//! normalization succeeds and preserves the id; records failing either
//! rule are rejected regardless of the rest of their shape.

use proptest::prelude::*;
use serde_json::json;

use lendhand::managers::bookmark_store::normalize;
use lendhand::services::image_table::ImageTable;

/// Strategy for titles: printable, starting with a letter, possibly
/// padded with whitespace that normalization must trim away.
fn arb_title() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn numeric_ids_normalize_and_are_preserved(
        id in -1_000_000i64..1_000_000,
        title in arb_title(),
    ) {
        let images = ImageTable::builtin();
        let raw = json!({"id": id, "title": title});

        let record = normalize(&raw, &images).expect("numeric id and title must normalize");
        prop_assert_eq!(record.id, id);
        prop_assert_eq!(record.title, title.trim().to_string());
        // Absent fields take their defaults
        prop_assert_eq!(record.status, "none");
        prop_assert_eq!(record.count, 0);
    }

    #[test]
    fn string_ids_coerce_like_numbers(
        id in 0i64..1_000_000,
        title in arb_title(),
    ) {
        let images = ImageTable::builtin();
        let raw = json!({"item_id": id.to_string(), "name": title});

        let record = normalize(&raw, &images).expect("numeric string id must normalize");
        prop_assert_eq!(record.id, id);
    }

    #[test]
    fn non_numeric_ids_are_rejected(
        id in "[a-zA-Z]{1,10}",
        title in arb_title(),
    ) {
        let images = ImageTable::builtin();
        let raw = json!({"id": id, "title": title});

        // Letter-only strings never coerce to a finite number ("inf" and
        // "nan" parse, but are filtered as non-finite)
        prop_assert!(normalize(&raw, &images).is_none());
    }

    #[test]
    fn blank_titles_are_rejected(
        id in 0i64..1_000_000,
        padding in " {0,6}",
    ) {
        let images = ImageTable::builtin();
        let raw = json!({"id": id, "title": padding});

        prop_assert!(normalize(&raw, &images).is_none());
    }

    #[test]
    fn title_falls_back_to_name(
        id in 0i64..1_000_000,
        title in arb_title(),
    ) {
        let images = ImageTable::builtin();
        let from_title = normalize(&json!({"id": id, "title": title}), &images).unwrap();
        let from_name = normalize(&json!({"id": id, "name": title}), &images).unwrap();

        prop_assert_eq!(from_title, from_name);
    }
}
