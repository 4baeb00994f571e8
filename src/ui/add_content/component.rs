// SPDX-License-Identifier: MPL-2.0
//! iced component wrapping the submission [`Form`] in a popover.

use super::form::{Effect, Form};
use crate::api::{ApiError, CreateContentResponse};
use crate::domain::content::ContentType;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::animated_spinner::{self, AnimatedSpinner};
use iced::widget::{
    button, container, mouse_area, opaque, text, text_editor, text_input, Column, Container, Row,
    Space, Stack, Text,
};
use iced::{alignment, font, Element, Font, Length};
use std::fmt;

/// Contextual data needed to render the popover.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the popover widgets.
#[derive(Debug, Clone)]
pub enum Message {
    TypeSelected(ContentType),
    TitleChanged(String),
    LinkChanged(String),
    TagsChanged(String),
    ContentEdited(text_editor::Action),
    Submit,
    Cancel,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Side effects the shell must carry out.
    Effects(Vec<Effect>),
    /// The user closed the popover.
    Closed,
}

/// Popover state: the form, the body editor buffer and visibility.
pub struct State {
    form: Form,
    body: text_editor::Content,
    open: bool,
    spinner_rotation: f32,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("form", &self.form)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl Default for State {
    fn default() -> Self {
        Self {
            form: Form::new(),
            body: text_editor::Content::new(),
            open: false,
            spinner_rotation: 0.0,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.form.is_submitting()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the popover. The draft is kept for the next opening.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TypeSelected(content_type) => {
                self.form.select_type(content_type);
                Event::None
            }
            Message::TitleChanged(value) => {
                self.form.set_title(value);
                Event::None
            }
            Message::LinkChanged(value) => {
                self.form.set_link(value);
                Event::None
            }
            Message::TagsChanged(value) => {
                self.form.set_tags(value);
                Event::None
            }
            Message::ContentEdited(action) => {
                let is_edit = action.is_edit();
                self.body.perform(action);
                if is_edit {
                    self.form.update_content(self.body.text());
                }
                Event::None
            }
            Message::Submit => {
                let effects = self.form.submit();
                if effects.is_empty() {
                    Event::None
                } else {
                    Event::Effects(effects)
                }
            }
            Message::Cancel => {
                self.close();
                Event::Closed
            }
        }
    }

    /// Feeds the backend outcome into the form and clears the editor buffer.
    pub fn finish(&mut self, outcome: Result<CreateContentResponse, ApiError>) -> Vec<Effect> {
        let effects = self.form.finish(outcome);
        self.body = text_editor::Content::new();
        self.spinner_rotation = 0.0;
        effects
    }

    /// Advances the busy spinner.
    pub fn tick(&mut self) {
        if self.form.is_submitting() {
            self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
        }
    }

    /// Renders the popover over a dimmed backdrop. Clicking the backdrop closes it.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        // Opaque so the screen underneath gets neither clicks nor hover
        let backdrop = opaque(
            mouse_area(
                Container::new(Space::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::backdrop),
            )
            .on_press(Message::Cancel),
        );

        let card = Container::new(self.view_form(ctx.i18n))
            .width(Length::Fixed(sizing::POPOVER_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::popover);

        let positioned = Container::new(opaque(card))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding([spacing::XL * 2.0, spacing::MD])
            .align_y(alignment::Vertical::Top);

        Stack::new().push(backdrop).push(positioned).into()
    }

    fn view_form<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let draft = self.form.draft();

        let heading = Text::new(i18n.tr("add-content-heading"))
            .size(typography::TITLE_MD)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            });

        let type_row = ContentType::ALL
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, &content_type| {
                row.push(
                    button(Text::new(i18n.tr(content_type.label_key())).size(typography::BODY_SM))
                        .on_press(Message::TypeSelected(content_type))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::button::toggle(draft.content_type == content_type)),
                )
            });

        let mut form = Column::new()
            .spacing(spacing::SM)
            .push(heading)
            .push(type_row)
            .push(labeled(
                required_label(i18n.tr("add-content-title-label")),
                text_input(&i18n.tr("add-content-title-placeholder"), &draft.title)
                    .on_input(Message::TitleChanged)
                    .on_submit(Message::Submit)
                    .padding(spacing::XS)
                    .size(typography::BODY),
            ));

        if self.form.url_field_visible() {
            form = form.push(labeled(
                i18n.tr("add-content-url-label"),
                text_input(&i18n.tr("add-content-url-placeholder"), &draft.link)
                    .on_input(Message::LinkChanged)
                    .on_submit(Message::Submit)
                    .padding(spacing::XS)
                    .size(typography::BODY),
            ));
        }

        if self.form.body_field_visible() {
            form = form.push(labeled(
                required_label(i18n.tr("add-content-body-label")),
                text_editor(&self.body)
                    .placeholder(i18n.tr("add-content-body-placeholder"))
                    .on_action(Message::ContentEdited)
                    .height(Length::Fixed(sizing::BODY_EDITOR_HEIGHT))
                    .padding(spacing::XS)
                    .size(typography::BODY),
            ));
        }

        form = form.push(labeled(
            i18n.tr("add-content-tags-label"),
            text_input(&i18n.tr("add-content-tags-placeholder"), &draft.tags)
                .on_input(Message::TagsChanged)
                .on_submit(Message::Submit)
                .padding(spacing::XS)
                .size(typography::BODY),
        ));

        form.push(self.view_actions(i18n)).into()
    }

    fn view_actions<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let submitting = self.form.is_submitting();

        let submit_label: Element<'a, Message> = if submitting {
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(
                    AnimatedSpinner::new(palette::WHITE, self.spinner_rotation)
                        .with_size(sizing::ICON_SM)
                        .into_element(),
                )
                .push(Text::new(i18n.tr("add-content-submitting")))
                .into()
        } else {
            Text::new(i18n.tr("add-content-submit")).into()
        };

        let cancel = button(Text::new(i18n.tr("add-content-cancel")))
            .on_press(Message::Cancel)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::secondary);

        let submit = button(submit_label)
            .on_press_maybe((!submitting).then_some(Message::Submit))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::primary);

        Row::new()
            .spacing(spacing::SM)
            .push(Space::new().width(Length::Fill))
            .push(cancel)
            .push(submit)
            .into()
    }
}

fn required_label(label: String) -> String {
    format!("{label} *")
}

fn labeled<'a>(
    label: String,
    input: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(container(input).width(Length::Fill))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::add_content::form::Phase;

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            state.update(Message::ContentEdited(text_editor::Action::Edit(
                text_editor::Edit::Insert(c),
            )));
        }
    }

    #[test]
    fn starts_closed_and_idle() {
        let state = State::new();
        assert!(!state.is_open());
        assert_eq!(state.form().phase(), Phase::Idle);
    }

    #[test]
    fn cancel_closes_and_keeps_draft() {
        let mut state = State::new();
        state.open();
        state.update(Message::TitleChanged("Draft".into()));

        let event = state.update(Message::Cancel);

        assert_eq!(event, Event::Closed);
        assert!(!state.is_open());
        assert_eq!(state.form().draft().title, "Draft");
    }

    #[test]
    fn editor_actions_update_document_body() {
        let mut state = State::new();
        type_text(&mut state, "hi");
        assert_eq!(state.form().draft().content.trim_end(), "hi");
    }

    #[test]
    fn invalid_submit_emits_notification_effect() {
        let mut state = State::new();
        match state.update(Message::Submit) {
            Event::Effects(effects) => {
                assert!(matches!(effects.as_slice(), [Effect::Notify(_)]));
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(!state.is_submitting());
    }

    #[test]
    fn second_submit_while_busy_emits_nothing() {
        let mut state = State::new();
        state.update(Message::TitleChanged("Title".into()));
        type_text(&mut state, "body");

        assert!(matches!(state.update(Message::Submit), Event::Effects(_)));
        assert!(state.is_submitting());
        assert_eq!(state.update(Message::Submit), Event::None);
    }

    #[test]
    fn finish_clears_editor_buffer() {
        let mut state = State::new();
        state.update(Message::TitleChanged("Title".into()));
        type_text(&mut state, "body");
        state.update(Message::Submit);

        state.finish(Err(ApiError::MissingMessage));

        assert!(!state.is_submitting());
        assert!(state.form().draft().is_pristine());
        assert!(state.body.text().trim().is_empty());
    }

    #[test]
    fn tick_only_spins_while_submitting() {
        let mut state = State::new();
        state.tick();
        assert_eq!(state.spinner_rotation, 0.0);

        state.update(Message::TitleChanged("Title".into()));
        state.update(Message::TypeSelected(ContentType::Link));
        state.update(Message::Submit);
        state.tick();
        assert!(state.spinner_rotation > 0.0);
    }

    #[test]
    fn view_renders_for_every_type_and_phase() {
        let i18n = I18n::default();
        let mut state = State::new();
        state.open();
        for content_type in ContentType::ALL {
            state.update(Message::TypeSelected(content_type));
            let _element = state.view(ViewContext { i18n: &i18n });
        }

        state.update(Message::TitleChanged("Title".into()));
        state.update(Message::Submit);
        let _busy = state.view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn required_label_carries_marker() {
        assert_eq!(required_label("Title".into()), "Title *");
    }
}
