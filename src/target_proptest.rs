//! Property-based tests for target parsing.
//!
//! These tests use proptest to generate random tokens and verify that
//! parsing invariants hold for all of them.

use crate::target::{parse_targets, Target};
use crate::verb::Verb;
use proptest::prelude::*;

proptest! {
    /// Property: everything after the first colon is the package name
    #[test]
    fn package_is_everything_after_first_colon(
        manager in "[a-z][a-z0-9_-]{0,12}",
        package in "[^\\s]{1,24}",
    ) {
        let target = Target::parse_package(&format!("{manager}:{package}")).unwrap();
        prop_assert_eq!(target.manager, manager);
        prop_assert_eq!(target.package, Some(package));
    }

    /// Property: tokens without a colon never parse as package targets
    #[test]
    fn colonless_tokens_are_rejected(token in "[^:]*") {
        prop_assert!(Target::parse_package(&token).is_err());
    }

    /// Property: manager-only parsing yields sorted, unique managers
    #[test]
    fn manager_targets_are_sorted_and_unique(
        managers in prop::collection::vec("[a-z]{1,6}", 1..16),
    ) {
        let targets = parse_targets(Verb::Outdated, &managers).unwrap();
        let names: Vec<&str> = targets.iter().map(|t| t.manager.as_str()).collect();

        let mut expected: Vec<&str> = managers.iter().map(String::as_str).collect();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(names, expected);
        prop_assert!(targets.iter().all(|t| t.package.is_none()));
    }

    /// Property: package verbs keep input order and length
    #[test]
    fn package_targets_keep_order(
        pairs in prop::collection::vec(("[a-z]{1,6}", "[a-z0-9:]{1,8}"), 1..16),
    ) {
        let tokens: Vec<String> = pairs.iter().map(|(m, p)| format!("{m}:{p}")).collect();
        let targets = parse_targets(Verb::Install, &tokens).unwrap();

        prop_assert_eq!(targets.len(), pairs.len());
        for (target, (manager, package)) in targets.iter().zip(&pairs) {
            prop_assert_eq!(&target.manager, manager);
            prop_assert_eq!(target.package.as_deref(), Some(package.as_str()));
        }
    }
}
