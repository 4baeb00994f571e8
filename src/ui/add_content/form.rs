// SPDX-License-Identifier: MPL-2.0
//! Submission state machine for the "Add Content" popover.
//!
//! The form owns the draft and decides what happens on submit and on
//! completion, but never performs side effects itself. Every transition
//! returns a list of [`Effect`]s that the application shell executes:
//! showing a toast, sending the request, refreshing the library and
//! navigating.
//!
//! ```text
//!            submit (valid)
//!   Idle ──────────────────────▶ Submitting
//!    ▲                               │
//!    └───────── finish(outcome) ─────┘
//! ```

use crate::api::{ApiError, CreateContentRequest, CreateContentResponse};
use crate::domain::content::{ContentDraft, ContentType};
use crate::ui::notifications::Notification;

/// Submission phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Side effect requested by a form transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show a toast.
    Notify(Notification),
    /// Send exactly one create-content request with this payload.
    Submit(CreateContentRequest),
    /// Reload the content list.
    RefreshLibrary,
    /// Return to the dashboard.
    NavigateToDashboard,
}

/// Field state and submission phase of the popover form.
#[derive(Debug, Clone, Default)]
pub struct Form {
    draft: ContentDraft,
    phase: Phase,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &ContentDraft {
        &self.draft
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Whether the URL input is shown for the active type.
    #[must_use]
    pub fn url_field_visible(&self) -> bool {
        self.draft.content_type.has_link()
    }

    /// Whether the body editor is shown for the active type.
    #[must_use]
    pub fn body_field_visible(&self) -> bool {
        self.draft.content_type.has_body()
    }

    /// Switches the content type. Entered values are kept.
    pub fn select_type(&mut self, content_type: ContentType) {
        if self.draft.content_type != content_type {
            tracing::debug!(from = %self.draft.content_type, to = %content_type, "content type changed");
        }
        self.draft.content_type = content_type;
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_link(&mut self, link: String) {
        self.draft.link = link;
    }

    pub fn set_tags(&mut self, tags: String) {
        self.draft.tags = tags;
    }

    /// Replaces the document body.
    pub fn update_content(&mut self, content: String) {
        self.draft.content = content;
    }

    /// Attempts to submit the draft.
    ///
    /// A draft missing a required field only produces an error toast.
    /// While a submission is in flight the call is ignored.
    pub fn submit(&mut self) -> Vec<Effect> {
        if self.is_submitting() {
            tracing::debug!("submit ignored, request already in flight");
            return Vec::new();
        }

        if let Some(field) = self.draft.missing_field() {
            tracing::debug!(?field, "draft is missing a required field");
            return vec![Effect::Notify(Notification::error(
                "notification-missing-fields-title",
                "notification-missing-fields",
            ))];
        }

        self.phase = Phase::Submitting;
        let request = CreateContentRequest::from_draft(&self.draft);
        tracing::debug!(content_type = %request.content_type, "submitting draft");

        vec![Effect::Submit(request)]
    }

    /// Completes the in-flight submission with the backend's outcome.
    ///
    /// The draft is reset to its defaults whatever the outcome.
    pub fn finish(&mut self, outcome: Result<CreateContentResponse, ApiError>) -> Vec<Effect> {
        if !self.is_submitting() {
            tracing::debug!("completion received while idle");
        }

        let effects = match outcome {
            Ok(response) => {
                tracing::info!(message = %response.message, "content added");
                vec![
                    Effect::Notify(Notification::success(
                        "notification-success-title",
                        "notification-content-added",
                    )),
                    Effect::RefreshLibrary,
                    Effect::NavigateToDashboard,
                ]
            }
            Err(err) => {
                tracing::warn!(error = %err, "adding content failed");
                vec![Effect::Notify(failure_notification(&err))]
            }
        };

        self.reset();
        effects
    }

    /// Clears every field and returns to `Idle`.
    pub fn reset(&mut self) {
        self.draft = ContentDraft::default();
        self.phase = Phase::Idle;
    }
}

fn failure_notification(err: &ApiError) -> Notification {
    match err.reason().filter(|reason| !reason.trim().is_empty()) {
        Some(reason) => Notification::error("notification-error-title", "notification-submit-failed")
            .with_arg("reason", reason),
        None => Notification::error(
            "notification-error-title",
            "notification-submit-failed-generic",
        ),
    }
}
