use augur_core::models::*;

fn content_lists(texts: &[&[&str]]) -> Vec<Vec<Content>> {
    texts
        .iter()
        .map(|list| list.iter().map(|t| Content::from(*t)).collect())
        .collect()
}

#[test]
fn query_equality_includes_metadata() {
    let message = ChatMessage::user("query");
    let metadata = Metadata::from_message(message.clone());
    assert_eq!(
        Query::with_metadata("query", metadata.clone()),
        Query::with_metadata("query", metadata.clone())
    );
    assert_ne!(Query::new("query"), Query::with_metadata("query", metadata));
}

#[test]
fn rewritten_query_keeps_metadata() {
    let metadata = Metadata::new(
        ChatMessage::user("q"),
        Some(serde_json::json!("conversation-7")),
        vec![ChatMessage::user("hi"), ChatMessage::ai("hello")],
    );
    let original = Query::with_metadata("q", metadata.clone());
    let rewritten = original.rewritten("q2");
    assert_eq!(rewritten.text, "q2");
    assert_eq!(rewritten.metadata, Some(metadata));
    assert_eq!(rewritten.chat_memory().len(), 2);
    assert!(Query::new("bare").chat_memory().is_empty());
}

#[test]
fn chat_message_with_text_keeps_role_and_name() {
    let message = ChatMessage::user("hello").with_name("klaus");
    let changed = message.with_text("hello again");
    assert_eq!(changed.role, ChatRole::User);
    assert_eq!(changed.name.as_deref(), Some("klaus"));
    assert_eq!(message.text, "hello");
}

#[test]
fn augmentation_request_from_message_references_message() {
    let request = AugmentationRequest::from_message(ChatMessage::user("query"));
    assert_eq!(request.metadata.chat_message, request.chat_message);
    assert!(request.metadata.chat_memory.is_empty());
    assert!(request.metadata.chat_memory_id.is_none());
}

#[test]
fn query_to_contents_preserves_insertion_order() {
    let mut map = QueryToContents::new();
    map.insert(Query::new("q2"), content_lists(&[&["a"]]));
    map.insert(Query::new("q1"), content_lists(&[&["b"], &["c", "d"]]));

    let order: Vec<&str> = map.queries().map(|q| q.text.as_str()).collect();
    assert_eq!(order, vec!["q2", "q1"]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.list_count(), 3);
    assert_eq!(map.content_count(), 4);
}

#[test]
fn query_to_contents_replaces_equal_query_in_place() {
    let mut map = QueryToContents::new();
    map.insert(Query::new("q1"), content_lists(&[&["a"]]));
    map.insert(Query::new("q2"), content_lists(&[&["b"]]));
    let previous = map.insert(Query::new("q1"), content_lists(&[&["z"]]));

    assert_eq!(previous, Some(content_lists(&[&["a"]])));
    assert_eq!(map.len(), 2);
    assert_eq!(map.queries().next().map(|q| q.text.as_str()), Some("q1"));
    assert_eq!(
        map.get(&Query::new("q1")),
        Some(content_lists(&[&["z"]]).as_slice())
    );
}

#[test]
fn query_with_no_lists_counts_as_entry() {
    let map: QueryToContents = [(Query::new("q1"), Vec::new())].into_iter().collect();
    assert_eq!(map.len(), 1);
    assert_eq!(map.list_count(), 0);
    assert!(!map.is_empty());
}

#[test]
fn content_serializes_metadata_keys_in_snake_case() {
    let content = Content::from("x").with_entry(ContentMetadata::RerankedScore, 0.9);
    let json = serde_json::to_value(&content).unwrap();
    assert_eq!(json["metadata"]["reranked_score"], serde_json::json!(0.9));
    let back: Content = serde_json::from_value(json).unwrap();
    assert_eq!(back, content);
}
