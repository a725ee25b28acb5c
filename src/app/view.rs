// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One scrollable page: header with the language selector, the patient form,
//! and the result card once an assessment exists. Toasts float above it.

use super::Message;
use crate::application::session::Session;
use crate::domain::patient::PatientForm;
use crate::i18n::{I18n, UiText};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::result_panel::{self, ResultSummary};
use crate::ui::{form, language_bar};
use iced::widget::{Column, Container, Id, Row, Scrollable, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub form: &'a PatientForm,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(header(ctx.i18n, ctx.session))
        .push(
            form::view(form::ViewContext {
                i18n: ctx.i18n,
                form: ctx.form,
                pending: ctx.session.is_prediction_pending(),
            })
            .map(Message::Form),
        );

    if let Some(prediction) = ctx.session.last_prediction() {
        page = page.push(
            result_panel::view(result_panel::ViewContext {
                i18n: ctx.i18n,
                summary: ResultSummary::from_prediction(prediction),
                download: ctx.session.download_state(),
                pending: ctx.session.is_prediction_pending(),
            })
            .map(Message::ResultPanel),
        );
    }

    let scrollable = Scrollable::new(
        Container::new(page)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .id(Id::new(result_panel::PAGE_SCROLLABLE_ID))
    .width(Length::Fill)
    .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable)
        .push(toasts)
        .into()
}

fn header<'a>(i18n: &'a I18n, session: &'a Session) -> Element<'a, Message> {
    let titles = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr(UiText::MainTitle)).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr(UiText::Subtitle)).size(typography::BODY_LG));

    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Top)
        .push(titles)
        .push(Space::new().width(Length::Fill))
        .push(language_bar::view(session.language()).map(Message::LanguageBar))
        .into()
}
