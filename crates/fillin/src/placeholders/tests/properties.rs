//! Property tests for the expansion laws

use proptest::prelude::*;

use super::*;

proptest! {
    /// The empty set leaves any template untouched, tokens included.
    #[test]
    fn prop_empty_set_is_identity(template in ".*") {
        prop_assert_eq!(Placeholders::empty().apply(&template), template);
    }

    /// Templates without the delimiter pass through any set unchanged.
    #[test]
    fn prop_no_delimiter_passthrough(
        template in "[^%]*",
        name in "[a-z]{1,8}",
        value in ".*",
    ) {
        let placeholders = Placeholders::single(name, value.as_str());
        prop_assert_eq!(placeholders.apply(&template), template);
    }

    /// A registered token expands to exactly the coerced value, with the
    /// surrounding text intact.
    #[test]
    fn prop_single_substitution(
        name in "[a-zA-Z0-9_]{1,12}",
        value in "[^%]*",
        prefix in "[^%]*",
        suffix in "[^%]*",
    ) {
        let placeholders = Placeholders::single(name.as_str(), value.as_str());
        let template = format!("{}%{}%{}", prefix, name, suffix);
        prop_assert_eq!(
            placeholders.apply(&template),
            format!("{}{}{}", prefix, value, suffix)
        );
    }

    /// Values are inserted verbatim even when they contain delimiters or
    /// tokens of their own - output is never re-scanned.
    #[test]
    fn prop_value_inserted_verbatim(name in "[a-z]{1,8}", value in ".*") {
        let placeholders = Placeholders::single(name.as_str(), value.as_str());
        let template = format!("%{}%", name);
        prop_assert_eq!(placeholders.apply(&template), value);
    }

    /// Under disjoint values the result does not depend on insertion order.
    #[test]
    fn prop_insertion_order_irrelevant(
        entries in prop::collection::btree_map("[a-z]{1,6}", "[^%]*", 1..8usize),
    ) {
        let forward: Placeholders = entries.clone().into_iter().collect();
        let reverse: Placeholders = entries.clone().into_iter().rev().collect();

        let template = entries
            .keys()
            .map(|name| format!("%{}%", name))
            .collect::<Vec<_>>()
            .join("|");
        let expected = entries.values().cloned().collect::<Vec<_>>().join("|");
        prop_assert_eq!(forward.apply(&template), expected.as_str());
        prop_assert_eq!(reverse.apply(&template), expected.as_str());
    }

    /// Strict and lenient expansion agree whenever every token is registered.
    #[test]
    fn prop_strict_agrees_when_registered(
        name in "[a-z]{1,8}",
        value in "[^%]*",
        prefix in "[^%]*",
        suffix in "[^%]*",
    ) {
        let placeholders = Placeholders::single(name.as_str(), value.as_str());
        let template = format!("{}%{}%{}", prefix, name, suffix);
        prop_assert_eq!(
            placeholders.apply_strict(&template).unwrap(),
            placeholders.apply(&template)
        );
    }
}
