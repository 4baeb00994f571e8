// SPDX-License-Identifier: MPL-2.0
use super::types::{
    ApiError, ContentItem, CreateContentRequest, CreateContentResponse, ListContentResponse,
};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

/// Path of the content collection on the backend.
pub const CONTENT_PATH: &str = "/api/v1/content";

/// Client for the content endpoints.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its pool.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: Client,
    base_url: String,
    token: String,
}

impl ContentClient {
    /// Creates a client for `base_url`, authenticating with `token`.
    pub fn new(
        base_url: &str,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Backend root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn content_url(&self) -> String {
        format!("{}{}", self.base_url, CONTENT_PATH)
    }

    /// Creates a content item.
    ///
    /// Succeeds only when the backend confirms with a truthy `message`.
    pub async fn create_content(
        &self,
        request: &CreateContentRequest,
    ) -> Result<CreateContentResponse, ApiError> {
        tracing::debug!(
            title = %request.title,
            content_type = %request.content_type,
            tags = request.tags.len(),
            "creating content"
        );

        let response = self
            .http
            .post(self.content_url())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.token.as_str())
            .json(request)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let body = read_body(response).await?;
        CreateContentResponse::from_body(&body)
    }

    /// Lists the user's content items.
    pub async fn list_content(&self) -> Result<Vec<ContentItem>, ApiError> {
        let response = self
            .http
            .get(self.content_url())
            .header(AUTHORIZATION, self.token.as_str())
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let body = read_body(response).await?;
        let list: ListContentResponse =
            serde_json::from_value(body).map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(list.content)
    }
}

/// Decodes a JSON body, mapping non-success statuses to [`ApiError::Rejected`].
async fn read_body(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(Value::as_str)
                    .map(String::from)
            });
        return Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client =
            ContentClient::new("http://localhost:3000/", "token", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.content_url(), "http://localhost:3000/api/v1/content");
    }
}
