// SPDX-License-Identifier: MPL-2.0
//! Patient form: numeric inputs, yes/no choices and the submit button.

use crate::domain::patient::{FieldKind, FormField, PatientForm};
use crate::i18n::{I18n, UiText};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, radio, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a PatientForm,
    /// A prediction request is in flight; inputs and the submit button are locked.
    pub pending: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(FormField, String),
    YesNoSelected(FormField, bool),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SubmitRequested,
}

/// Applies an edit to the form. Submission is left to the parent.
pub fn update(message: Message, form: &mut PatientForm) -> Event {
    match message {
        Message::FieldChanged(field, value) => {
            form.set(field, value);
            Event::None
        }
        Message::YesNoSelected(field, yes) => {
            form.set_yes_no(field, yes);
            Event::None
        }
        Message::Submit => Event::SubmitRequested,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let fields = FormField::ALL
        .into_iter()
        .map(|field| field_row(&ctx, field));

    let mut content = Column::with_children(fields).spacing(spacing::SM);
    content = content.push(submit_button(&ctx));

    Container::new(content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn field_row<'a>(ctx: &ViewContext<'a>, field: FormField) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(UiText::field_label(field))).size(typography::BODY);

    let input: Element<'a, Message> = match (field.kind(), UiText::yes_no_options(field)) {
        (FieldKind::YesNo, Some((no, yes))) => {
            let selected = Some(ctx.form.is_yes(field));
            Row::new()
                .spacing(spacing::LG)
                .push(radio(ctx.i18n.tr(no), false, selected, move |choice| {
                    Message::YesNoSelected(field, choice)
                }))
                .push(radio(ctx.i18n.tr(yes), true, selected, move |choice| {
                    Message::YesNoSelected(field, choice)
                }))
                .into()
        }
        _ => {
            let mut input = text_input("", ctx.form.value(field))
                .padding(spacing::XS)
                .size(typography::BODY);
            if !ctx.pending {
                input = input
                    .on_input(move |value| Message::FieldChanged(field, value))
                    .on_submit(Message::Submit);
            }
            input.into()
        }
    };

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(input)
        .into()
}

fn submit_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = if ctx.pending {
        UiText::SubmitProcessing
    } else {
        UiText::SubmitButton
    };

    let text = Container::new(Text::new(ctx.i18n.tr(label)).size(typography::BODY_LG))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    button(text)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .on_press_maybe((!ctx.pending).then_some(Message::Submit))
        .style(styles::button::primary)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_changes_update_the_form() {
        let mut form = PatientForm::new();
        let event = update(
            Message::FieldChanged(FormField::Hemoglobin, "13.5".into()),
            &mut form,
        );
        assert_eq!(event, Event::None);
        assert_eq!(form.value(FormField::Hemoglobin), "13.5");
    }

    #[test]
    fn yes_no_selection_sets_wire_value() {
        let mut form = PatientForm::new();
        update(Message::YesNoSelected(FormField::Hypertension, true), &mut form);
        assert!(form.is_yes(FormField::Hypertension));

        update(Message::YesNoSelected(FormField::Hypertension, false), &mut form);
        assert!(!form.is_yes(FormField::Hypertension));
    }

    #[test]
    fn submit_is_forwarded_without_touching_the_form() {
        let mut form = PatientForm::new();
        let before = form.clone();
        assert_eq!(update(Message::Submit, &mut form), Event::SubmitRequested);
        assert_eq!(form, before);
    }
}
