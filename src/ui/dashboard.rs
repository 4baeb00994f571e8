// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen listing the user's stored content.

use crate::api::{ApiError, ContentItem};
use crate::i18n::fluent::I18n;
use crate::library::Library;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font,
    widget::{button, scrollable, text, Column, Container, Row, Space, Text},
    Element, Font, Length,
};

/// Longest body excerpt shown on a card, in characters.
const EXCERPT_CHARS: usize = 160;

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub library: &'a Library,
}

/// Messages emitted by the dashboard.
#[derive(Debug, Clone)]
pub enum Message {
    Refresh,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Refresh,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Refresh => Event::Refresh,
    }
}

/// Render the dashboard.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("dashboard-title")).size(typography::TITLE_LG);

    let loading = ctx.library.is_loading();
    let refresh_label = if loading {
        ctx.i18n.tr("dashboard-refreshing")
    } else {
        ctx.i18n.tr("dashboard-refresh")
    };
    let refresh = button(Text::new(refresh_label))
        .on_press_maybe((!loading).then_some(Message::Refresh))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(refresh);

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(header);

    if let Some(err) = ctx.library.last_error() {
        content = content.push(
            text(load_error_text(ctx.i18n, err))
                .size(typography::BODY_SM)
                .style(text::danger),
        );
    }

    if ctx.library.is_empty() {
        let message = if loading {
            ctx.i18n.tr("dashboard-loading")
        } else {
            ctx.i18n.tr("dashboard-empty")
        };
        content = content.push(
            Container::new(Text::new(message).size(typography::BODY_LG))
                .width(Length::Fill)
                .padding(spacing::XL)
                .align_x(Horizontal::Center),
        );
    } else {
        content = ctx
            .library
            .items()
            .iter()
            .fold(content, |column, item| column.push(build_card(ctx.i18n, item)));
    }

    scrollable(content).height(Length::Fill).into()
}

fn load_error_text(i18n: &I18n, err: &ApiError) -> String {
    match err.reason() {
        Some(reason) => i18n.tr_with_args("dashboard-load-failed", &[("reason", reason.as_str())]),
        None => i18n.tr("dashboard-load-failed-generic"),
    }
}

fn build_card<'a>(i18n: &'a I18n, item: &'a ContentItem) -> Element<'a, Message> {
    let kind = item
        .content_type()
        .map(|content_type| i18n.tr(content_type.label_key()))
        .or_else(|| item.kind.clone())
        .unwrap_or_default();

    let heading = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(item.title.as_str())
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                })
                .width(Length::Fill),
        )
        .push(text(kind).size(typography::CAPTION));

    let mut card = Column::new().spacing(spacing::XS).push(heading);

    if let Some(link) = item.link.as_deref().filter(|link| !link.is_empty()) {
        card = card.push(text(link).size(typography::BODY_SM).style(text::primary));
    }

    if let Some(body) = item.content.as_deref().filter(|body| !body.trim().is_empty()) {
        card = card.push(text(excerpt(body)).size(typography::BODY));
    }

    if !item.tags.is_empty() {
        let tags = item.tags.iter().fold(Row::new().spacing(spacing::XXS), |row, tag| {
            row.push(
                Container::new(text(format!("#{}", tag.name())).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::tag),
            )
        });
        card = card.push(tags);
    }

    Container::new(card)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

/// First [`EXCERPT_CHARS`] characters of `body`, with an ellipsis when cut.
fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", body[..cut].trim_end()),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn library_with(items: serde_json::Value) -> Library {
        let items: Vec<ContentItem> = serde_json::from_value(items).expect("valid items");
        let mut library = Library::new();
        library.begin_refresh();
        library.apply(Ok(items));
        library
    }

    #[test]
    fn excerpt_keeps_short_bodies() {
        assert_eq!(excerpt("  short  "), "short");
    }

    #[test]
    fn excerpt_cuts_on_char_boundary() {
        let long = "é".repeat(EXCERPT_CHARS + 10);
        let cut = excerpt(&long);
        assert!(cut.ends_with('…'));
        assert_eq!(cut.chars().count(), EXCERPT_CHARS + 1);
    }

    #[test]
    fn view_renders_empty_loading_and_populated() {
        let i18n = I18n::default();

        let mut library = Library::new();
        let _ = view(ViewContext {
            i18n: &i18n,
            library: &library,
        });

        library.begin_refresh();
        let _ = view(ViewContext {
            i18n: &i18n,
            library: &library,
        });

        let library = library_with(json!([
            {"_id": "1", "title": "Doc", "type": "document", "content": "body", "tags": ["x"]},
            {"_id": "2", "title": "Vid", "type": "youtube", "link": "https://youtu.be/a", "tags": [{"title": "y"}]},
            {"title": "Odd", "type": "podcast"}
        ]));
        let _populated = view(ViewContext {
            i18n: &i18n,
            library: &library,
        });
    }

    #[test]
    fn load_error_mentions_reason() {
        let i18n = I18n::new(Some("en-US".into()), &crate::app::config::Config::default());
        let text = load_error_text(&i18n, &ApiError::Transport("offline".into()));
        assert!(text.contains("offline"));
    }

    #[test]
    fn refresh_message_maps_to_event() {
        assert_eq!(update(&Message::Refresh), Event::Refresh);
    }
}
