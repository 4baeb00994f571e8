// SPDX-License-Identifier: MPL-2.0
//! Wire types exchanged with the content backend.

use crate::domain::content::{ContentDraft, ContentType};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The backend answered with a non-success status.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// A well-formed response without the success marker.
    #[error("response did not confirm the operation")]
    MissingMessage,
}

impl ApiError {
    /// User-facing failure reason, when the error carries one.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        match self {
            ApiError::Transport(message) | ApiError::Decode(message) => Some(message.clone()),
            ApiError::Rejected { message, .. } => message.clone(),
            ApiError::MissingMessage => None,
        }
    }
}

/// Body of `POST /api/v1/content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateContentRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "type", serialize_with = "serialize_content_type")]
    pub content_type: ContentType,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CreateContentRequest {
    /// Builds the request payload from a draft.
    ///
    /// The body is only included for documents and the link only for
    /// linked types.
    #[must_use]
    pub fn from_draft(draft: &ContentDraft) -> Self {
        Self {
            title: draft.title.trim().to_string(),
            link: draft.link().map(String::from),
            content_type: draft.content_type,
            tags: draft.tags(),
            content: draft.body().map(String::from),
        }
    }
}

fn serialize_content_type<S: Serializer>(
    content_type: &ContentType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(content_type.as_str())
}

/// Confirmed creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContentResponse {
    /// The backend's confirmation message.
    pub message: String,
}

impl CreateContentResponse {
    /// Interprets a decoded response body.
    ///
    /// The creation only counts as confirmed when the body carries a truthy
    /// `message` field: present, not `null`, `false`, `0` or `""`.
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        match body.get("message") {
            Some(value) if is_truthy(value) => Ok(Self {
                message: match value {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                },
            }),
            _ => Err(ApiError::MissingMessage),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Tag attached to a stored item.
///
/// Older backends return plain strings, newer ones tag objects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Name(String),
    Object { title: String },
}

impl Tag {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Tag::Name(name) => name,
            Tag::Object { title } => title,
        }
    }
}

/// Stored content item as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    #[serde(default, rename = "_id", alias = "id")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ContentItem {
    /// Known content type, if the backend sent one we understand.
    #[must_use]
    pub fn content_type(&self) -> Option<ContentType> {
        self.kind.as_deref().and_then(|kind| kind.parse().ok())
    }
}

/// Body of `GET /api/v1/content`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListContentResponse {
    #[serde(default)]
    pub content: Vec<ContentItem>,
}
