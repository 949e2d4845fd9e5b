//! Property tests for augur-core value types.

use std::collections::HashMap;

use proptest::prelude::*;

use augur_core::models::{Content, ContentMetadata, PromptTemplate, Query, QueryToContents, TextSegment};

fn content_strategy() -> impl Strategy<Value = Content> {
    (
        "[a-z ]{0,12}",
        prop::collection::btree_map("[a-c]", "[x-z]{0,3}", 0..3),
        prop::option::of(0.0f64..1.0),
    )
        .prop_map(|(text, entries, score)| {
            let mut segment = TextSegment::new(text);
            for (key, value) in entries {
                segment = segment.with_entry(key, value);
            }
            let content = Content::new(segment);
            match score {
                Some(score) => content.with_entry(ContentMetadata::Score, score),
                None => content,
            }
        })
}

// =============================================================================
// Content fingerprint agrees with equality
// =============================================================================
proptest! {
    #[test]
    fn equal_contents_have_equal_fingerprints(content in content_strategy()) {
        let copy = content.clone();
        prop_assert_eq!(content.fingerprint(), copy.fingerprint());
    }

    #[test]
    fn fingerprint_collision_implies_equality(a in content_strategy(), b in content_strategy()) {
        if a.fingerprint() == b.fingerprint() {
            prop_assert_eq!(a, b);
        }
    }
}

// =============================================================================
// QueryToContents keeps first-insertion order and one entry per query
// =============================================================================
proptest! {
    #[test]
    fn query_map_keeps_first_insertion_order(texts in prop::collection::vec("q[0-4]", 0..12)) {
        let map: QueryToContents = texts
            .iter()
            .map(|t| (Query::new(t.as_str()), vec![vec![Content::from(t.as_str())]]))
            .collect();

        let mut expected: Vec<&str> = Vec::new();
        for t in &texts {
            if !expected.contains(&t.as_str()) {
                expected.push(t.as_str());
            }
        }
        let actual: Vec<&str> = map.queries().map(|q| q.text.as_str()).collect();
        prop_assert_eq!(actual, expected.clone());
        prop_assert_eq!(map.list_count(), expected.len());
        prop_assert_eq!(map.content_count(), expected.len());
    }
}

// =============================================================================
// PromptTemplate substitution
// =============================================================================
proptest! {
    #[test]
    fn substituted_values_appear_verbatim(
        query in "[a-zA-Z0-9 {}]{0,20}",
        prefix in "[a-z ]{0,10}",
    ) {
        let template = PromptTemplate::new(format!("{prefix}{{{{query}}}}!"));
        let variables = HashMap::from([("query", query.clone())]);
        let rendered = template.apply(&variables).unwrap();
        prop_assert_eq!(rendered, format!("{prefix}{query}!"));
    }

    #[test]
    fn templates_without_placeholders_are_unchanged(text in "[a-z {}]{0,30}") {
        prop_assume!(!text.contains("{{"));
        let template = PromptTemplate::new(text.clone());
        prop_assert_eq!(template.apply(&HashMap::new()).unwrap(), text);
    }
}
