// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the content backend.
//!
//! The backend is reached through two endpoints sharing the same path:
//!
//! - `POST /api/v1/content` creates an item ([`ContentClient::create_content`])
//! - `GET /api/v1/content` lists the user's items ([`ContentClient::list_content`])
//!
//! Both forward the caller-supplied token verbatim in the `authorization`
//! header. Errors are flattened into [`ApiError`], which is `Clone` so that
//! results can be carried by iced messages.

mod client;
mod types;

pub use client::{ContentClient, CONTENT_PATH};
pub use types::{
    ApiError, ContentItem, CreateContentRequest, CreateContentResponse, ListContentResponse, Tag,
};
