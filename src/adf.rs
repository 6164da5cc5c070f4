//! Plain-text extraction from Atlassian Document Format trees.

use serde_json::Value;

/// Flattens an ADF document into normalized plain text.
///
/// Walks the tree collecting every text fragment, joins the fragments with
/// single spaces, collapses whitespace runs and trims the ends. Returns
/// `None` when nothing but whitespace remains. Unknown node shapes
/// contribute nothing; the walk never fails.
pub fn flatten(node: &Value) -> Option<String> {
    let mut fragments = Vec::new();
    collect_text(node, &mut fragments);

    let text = squeeze_whitespace(&fragments.join(" "));
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn collect_text<'a>(node: &'a Value, fragments: &mut Vec<&'a str>) {
    match node {
        Value::String(text) => fragments.push(text.as_str()),
        Value::Array(children) => {
            for child in children {
                collect_text(child, fragments);
            }
        }
        Value::Object(attrs) => {
            // Inline text before nested blocks. Jira nests document children
            // under "content" and comment-shaped subtrees under "body"; both
            // get walked.
            if let Some(Value::String(text)) = attrs.get("text") {
                fragments.push(text.as_str());
            }
            if let Some(children) = attrs.get("content") {
                collect_text(children, fragments);
            }
            if let Some(children) = attrs.get("body") {
                collect_text(children, fragments);
            }
        }
        _ => {}
    }
}

fn squeeze_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flattens_a_paragraph_document() {
        let doc = json!({
            "type": "doc",
            "content": [{
                "type": "paragraph",
                "content": [
                    { "type": "text", "text": "Line one" },
                    { "type": "text", "text": " and two" }
                ]
            }]
        });

        assert_eq!(flatten(&doc).as_deref(), Some("Line one and two"));
    }

    #[test]
    fn joins_block_elements_with_single_spaces() {
        let doc = json!({
            "type": "doc",
            "content": [
                { "type": "paragraph", "content": [{ "type": "text", "text": "first\nline" }] },
                { "type": "paragraph", "content": [{ "type": "text", "text": "\tsecond  line " }] }
            ]
        });

        assert_eq!(flatten(&doc).as_deref(), Some("first line second line"));
    }

    #[test]
    fn inline_text_precedes_nested_content() {
        let node = json!({
            "text": "heading",
            "content": [{ "type": "text", "text": "detail" }]
        });

        let text = flatten(&node).unwrap();
        assert!(text.starts_with("heading"));
        assert_eq!(text, "heading detail");
    }

    #[test]
    fn walks_body_attributes_like_content() {
        let node = json!({
            "body": { "content": [{ "type": "text", "text": "from a comment" }] }
        });

        assert_eq!(flatten(&node).as_deref(), Some("from a comment"));
    }

    #[test]
    fn whitespace_only_input_is_absent() {
        assert_eq!(flatten(&json!(" \n\t ")), None);
        assert_eq!(flatten(&json!({ "type": "doc", "content": [] })), None);
        assert_eq!(flatten(&json!("")), None);
    }

    #[test]
    fn unknown_shapes_contribute_nothing() {
        let doc = json!({
            "type": "doc",
            "content": [
                42,
                true,
                null,
                { "unknown": "attribute", "version": 1 },
                { "type": "text", "text": "kept" },
                { "text": 7 },
                [null, false]
            ]
        });

        assert_eq!(flatten(&doc).as_deref(), Some("kept"));
    }

    #[test]
    fn total_over_arbitrary_scalars() {
        assert_eq!(flatten(&json!(null)), None);
        assert_eq!(flatten(&json!(3.5)), None);
        assert_eq!(flatten(&json!(false)), None);
        assert_eq!(flatten(&json!([])), None);
        assert_eq!(flatten(&json!({})), None);
    }

    #[test]
    fn flattening_is_idempotent_on_its_output() {
        let doc = json!({
            "content": [
                { "text": "a\n b" },
                { "text": "c" },
                [{ "text": "  d\te" }]
            ]
        });

        let once = flatten(&doc).unwrap();
        let twice = flatten(&json!(once)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn tolerates_deep_nesting() {
        let mut node = json!({ "type": "text", "text": "leaf" });
        for _ in 0..100 {
            node = json!({ "content": [node] });
        }

        assert_eq!(flatten(&node).as_deref(), Some("leaf"));
    }
}
