// SPDX-License-Identifier: MPL-2.0
//! Language selector shown at the top of the window.

use crate::domain::language::Language;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment::Vertical, Element, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    Selected(Language),
}

/// One control per language, flagged `true` for the active one.
#[must_use]
pub fn controls(current: Language) -> Vec<(Language, bool)> {
    Language::ALL
        .into_iter()
        .map(|language| (language, language == current))
        .collect()
}

pub fn view<'a>(current: Language) -> Element<'a, Message> {
    let buttons = controls(current).into_iter().map(|(language, active)| {
        let label = Text::new(language.native_name()).size(typography::BODY);
        let style: fn(&Theme, button::Status) -> button::Style = if active {
            styles::button::selected
        } else {
            styles::button::secondary
        };

        // Reselecting the active language is a no-op in the app.
        button(label)
            .padding([spacing::XXS, spacing::SM])
            .on_press(Message::Selected(language))
            .style(style)
            .into()
    });

    Row::with_children(buttons)
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_control_is_active() {
        for current in Language::ALL {
            let controls = controls(current);
            assert_eq!(controls.len(), Language::ALL.len());

            let active: Vec<_> = controls
                .iter()
                .filter(|(_, active)| *active)
                .map(|(language, _)| *language)
                .collect();
            assert_eq!(active, vec![current]);
        }
    }

    #[test]
    fn controls_follow_selector_order() {
        let order: Vec<_> = controls(Language::Hindi)
            .into_iter()
            .map(|(language, _)| language.code())
            .collect();
        assert_eq!(order, vec!["en", "kn", "hi"]);
    }
}
