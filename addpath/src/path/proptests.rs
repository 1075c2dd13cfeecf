//! Property-based tests for membership and formatting.

use super::{format_path, PathList};
use crate::output::{Dialect, FormatConfig};
use proptest::prelude::*;

fn element_strategy() -> impl Strategy<Value = String> {
    "/[a-zA-Z0-9_.-]{1,12}(/[a-zA-Z0-9_.-]{1,12}){0,3}"
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(element_strategy(), 0..10)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every element of a joined value is found again.
    #[test]
    fn joined_elements_are_contained(elements in path_strategy()) {
        let joined = elements.join(":");
        let path = PathList::new(&joined, ':');
        for element in &elements {
            prop_assert!(path.contains(element));
        }
    }

    // Identity formatting keeps membership intact.
    #[test]
    fn identity_format_preserves_membership(elements in path_strategy()) {
        let joined = elements.join(":");
        let formatted = format_path(&joined, &FormatConfig::identity(':'));
        prop_assert_eq!(formatted.to_str(), Some(joined.as_str()));

        let path = PathList::new(&formatted, ':');
        for element in &elements {
            prop_assert!(path.contains(element));
        }
    }

    // Extra delimiters never change which elements are present.
    #[test]
    fn padding_delimiters_is_harmless(elements in path_strategy(), pad in 1usize..4) {
        let sep = ":".repeat(pad);
        let padded = format!("{sep}{}{sep}", elements.join(&sep));
        let path = PathList::new(&padded, ':');
        prop_assert_eq!(
            path.elements().collect::<Vec<_>>(),
            elements.iter().map(String::as_bytes).collect::<Vec<_>>()
        );
    }

    // Formatting maps characters one to one.
    #[test]
    fn format_preserves_char_count(elements in path_strategy()) {
        let joined = elements.join(":");
        for dialect in [Dialect::Bourne, Dialect::CShell, Dialect::CommandShell] {
            let formatted = format_path(&joined, &FormatConfig::for_dialect(dialect, ':'));
            let formatted = formatted.to_str().unwrap();
            prop_assert_eq!(formatted.chars().count(), joined.chars().count());
            prop_assert_eq!(
                formatted.matches(dialect.separator()).count(),
                joined.matches(':').count()
            );
        }
    }
}
