// SPDX-License-Identifier: MPL-2.0
//! Content items as the user composes them.
//!
//! A [`ContentDraft`] is the in-progress item behind the "Add Content" form.
//! It knows which fields are required for its [`ContentType`] and how the
//! raw comma-separated tag input maps to a tag list.

use std::fmt;
use std::str::FromStr;

/// Kind of content the user is saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    /// Free-text note written in the app.
    #[default]
    Document,
    /// YouTube video link.
    Youtube,
    /// Tweet link.
    Twitter,
    /// Any other web link.
    Link,
}

impl ContentType {
    /// All content types, in the order they are offered to the user.
    pub const ALL: [ContentType; 4] = [
        ContentType::Document,
        ContentType::Youtube,
        ContentType::Twitter,
        ContentType::Link,
    ];

    /// Wire identifier used by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Document => "document",
            ContentType::Youtube => "youtube",
            ContentType::Twitter => "twitter",
            ContentType::Link => "link",
        }
    }

    /// i18n key of the human-readable label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ContentType::Document => "content-type-document",
            ContentType::Youtube => "content-type-youtube",
            ContentType::Twitter => "content-type-twitter",
            ContentType::Link => "content-type-link",
        }
    }

    /// Whether items of this type point at an external URL.
    #[must_use]
    pub fn has_link(self) -> bool {
        !matches!(self, ContentType::Document)
    }

    /// Whether items of this type carry a written body.
    #[must_use]
    pub fn has_body(self) -> bool {
        matches!(self, ContentType::Document)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown content type identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContentType(pub String);

impl fmt::Display for UnknownContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown content type: {}", self.0)
    }
}

impl std::error::Error for UnknownContentType {}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "document" => Ok(ContentType::Document),
            "youtube" => Ok(ContentType::Youtube),
            "twitter" => Ok(ContentType::Twitter),
            "link" => Ok(ContentType::Link),
            other => Err(UnknownContentType(other.to_string())),
        }
    }
}

/// Splits raw tag input on `,` and trims every segment.
///
/// Blank segments are dropped, so an empty input yields no tags.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// A required field that is missing from a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Title,
    Content,
}

/// In-progress content item.
///
/// Field values are kept as typed, even for fields the current
/// [`ContentType`] does not use, so switching type back and forth
/// does not lose input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentDraft {
    pub title: String,
    pub link: String,
    pub content_type: ContentType,
    pub content: String,
    /// Raw comma-separated tag input.
    pub tags: String,
}

impl ContentDraft {
    /// Returns the first required field that is still empty, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<MissingField> {
        if self.title.trim().is_empty() {
            return Some(MissingField::Title);
        }
        if self.content_type.has_body() && self.content.trim().is_empty() {
            return Some(MissingField::Content);
        }
        None
    }

    /// Whether the draft satisfies the required-field rules of its type.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.missing_field().is_none()
    }

    /// Parsed tag list.
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    /// Link to send, if the type uses one and the user entered something.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        let link = self.link.trim();
        (self.content_type.has_link() && !link.is_empty()).then_some(link)
    }

    /// Body to send, only for types that carry one.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.content_type.has_body().then_some(self.content.as_str())
    }

    /// Whether every field is back to its initial value.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}
