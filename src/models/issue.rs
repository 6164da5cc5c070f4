use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adf;

// Upstream shapes. Every field defaults so a sparse issue still
// deserializes; descriptions and comment bodies stay raw ADF values for
// the flattener.

#[derive(Debug, Deserialize)]
pub struct JiraIssue {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Default, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub status: Option<IssueStatus>,
    #[serde(default)]
    pub assignee: Option<JiraUser>,
    #[serde(default)]
    pub reporter: Option<JiraUser>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    #[serde(default)]
    pub comment: Option<CommentPage>,
}

#[derive(Debug, Deserialize)]
pub struct IssueStatus {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JiraUser {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<JiraComment>,
}

#[derive(Debug, Deserialize)]
pub struct JiraComment {
    #[serde(default)]
    pub author: Option<JiraUser>,
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub created: Option<String>,
}

// Wire shape returned to callers.

#[derive(Debug, Serialize)]
pub struct NormalizedIssue {
    pub key: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub assignee: Option<String>,
    pub reporter: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub comments: Vec<NormalizedComment>,
}

#[derive(Debug, Serialize)]
pub struct NormalizedComment {
    pub author: Option<String>,
    pub body: Option<String>,
    pub created_at: Option<String>,
}

impl NormalizedIssue {
    /// Projects the verbose upstream issue onto the compact wire shape.
    /// Absent upstream attributes become null rather than failing the
    /// request; comments keep their upstream order.
    pub fn from_upstream(requested_key: &str, issue: JiraIssue) -> Self {
        let fields = issue.fields;

        let comments = fields
            .comment
            .map(|page| page.comments)
            .unwrap_or_default()
            .into_iter()
            .map(|comment| NormalizedComment {
                author: comment.author.and_then(|author| author.display_name),
                body: comment.body.as_ref().and_then(adf::flatten),
                created_at: comment.created,
            })
            .collect();

        NormalizedIssue {
            key: issue
                .key
                .filter(|key| !key.is_empty())
                .unwrap_or_else(|| requested_key.to_string()),
            summary: fields.summary,
            description: fields.description.as_ref().and_then(adf::flatten),
            status: fields.status.and_then(|status| status.name),
            assignee: fields.assignee.and_then(|user| user.display_name),
            reporter: fields.reporter.and_then(|user| user.display_name),
            created_at: fields.created,
            updated_at: fields.updated,
            comments,
        }
    }
}
