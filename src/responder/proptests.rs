//! Property-based tests for the intent responder
//!
//! - Lookup never panics, whatever the input
//! - A keyword hit always answers from the first matching category's pool
//! - Misses always answer from the fallback pool
//! - Category selection is deterministic; only the reply varies

use super::*;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Small lowercase keyword drawn from a narrow alphabet so collisions happen
fn arb_keyword() -> impl Strategy<Value = String> {
    "[a-e]{2,4}"
}

fn arb_category(index: usize) -> impl Strategy<Value = IntentCategory> {
    (
        proptest::collection::vec(arb_keyword(), 1..4),
        proptest::collection::vec("[A-Z][a-z ]{0,20}", 1..4),
    )
        .prop_map(move |(keywords, replies)| IntentCategory {
            id: format!("cat{index}"),
            keywords,
            // Prefix keeps category pools disjoint from the fallback pool
            replies: replies.into_iter().map(|r| format!("c{index}:{r}")).collect(),
        })
}

fn arb_catalog() -> impl Strategy<Value = IntentCatalog> {
    (1usize..6)
        .prop_flat_map(|n| {
            let categories: Vec<_> = (0..n).map(arb_category).collect();
            (
                categories,
                proptest::collection::vec("fallback [a-z]{1,10}", 1..4),
            )
        })
        .prop_map(|(categories, fallback)| {
            IntentCatalog::new(categories, fallback).expect("generated catalog is valid")
        })
}

/// Free text: plain ascii, markup-like payloads, unicode, whitespace
fn arb_input() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-eA-E ]{0,20}",
        "[ \\t\\n]{0,5}",
        Just("<script>alert(1)</script>".to_string()),
        "\\PC{0,40}",
        "[a-z]{200,400}",
    ]
}

fn seeded(catalog: IntentCatalog, seed: u64) -> IntentResponder {
    IntentResponder::new(catalog, Arc::new(SeededPicker::new(seed)))
}

/// First category whose keyword appears in the normalized input
fn expected_category<'a>(catalog: &'a IntentCatalog, input: &str) -> Option<&'a IntentCategory> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    catalog
        .categories()
        .iter()
        .find(|c| c.keywords.iter().any(|kw| normalized.contains(kw.as_str())))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_never_panics(catalog in arb_catalog(), input in arb_input(), seed in any::<u64>()) {
        let responder = seeded(catalog, seed);
        let reply = responder.get_response(&input);
        prop_assert!(!reply.is_empty());
    }

    #[test]
    fn prop_hit_answers_from_first_matching_category(
        catalog in arb_catalog(),
        input in arb_input(),
        seed in any::<u64>(),
    ) {
        let expected = expected_category(&catalog, &input).cloned();
        let responder = seeded(catalog, seed);
        let resolution = responder.resolve(&input);

        match expected {
            Some(category) => {
                prop_assert_eq!(resolution.intent, Some(category.id.as_str()));
                prop_assert!(category.replies.iter().any(|r| r == resolution.reply));
            }
            None => {
                prop_assert_eq!(resolution.intent, None);
                prop_assert!(responder.catalog().fallback().iter().any(|r| r == resolution.reply));
                for category in responder.catalog().categories() {
                    prop_assert!(!category.replies.iter().any(|r| r == resolution.reply));
                }
            }
        }
    }

    #[test]
    fn prop_embedded_keyword_always_matches(
        catalog in arb_catalog(),
        pick in any::<prop::sample::Index>(),
        prefix in "[ xyz]{0,5}",
        suffix in "[ xyz]{0,5}",
    ) {
        let categories = catalog.categories();
        let category = &categories[pick.index(categories.len())];
        let input = format!("{prefix}{}{suffix}", category.keywords[0].to_uppercase());

        let responder = seeded(catalog.clone(), 0);
        let matched = responder.match_category(&input);
        prop_assert!(matched.is_some());

        // The match may be an earlier category sharing a keyword, never a later one
        let matched_pos = categories.iter().position(|c| Some(c) == matched);
        let category_pos = categories.iter().position(|c| c == category);
        prop_assert!(matched_pos <= category_pos);
    }

    #[test]
    fn prop_category_selection_is_deterministic(
        catalog in arb_catalog(),
        input in arb_input(),
        seeds in (any::<u64>(), any::<u64>()),
    ) {
        let a = seeded(catalog.clone(), seeds.0);
        let b = seeded(catalog, seeds.1);
        prop_assert_eq!(a.resolve(&input).intent, b.resolve(&input).intent);
        prop_assert_eq!(a.resolve(&input).intent, a.resolve(&input).intent);
    }

    #[test]
    fn prop_case_and_padding_do_not_change_category(
        catalog in arb_catalog(),
        input in "[a-e ]{0,20}",
    ) {
        let responder = seeded(catalog, 1);
        let shouted = format!("  {}\t", input.to_uppercase());
        prop_assert_eq!(
            responder.match_category(&input).map(|c| c.id.clone()),
            responder.match_category(&shouted).map(|c| c.id.clone())
        );
    }
}
