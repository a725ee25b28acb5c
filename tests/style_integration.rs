// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use ckd_lens::domain::prediction::RiskLevel;
    use ckd_lens::ui::design_tokens::{palette, sizing, spacing};
    use ckd_lens::ui::notifications::Severity;
    use ckd_lens::ui::styles::{button, container};
    use ckd_lens::ui::theming::ThemeMode;
    use iced::widget::button::Status;
    use iced::Theme;

    #[test]
    fn all_button_styles_are_callable_for_every_status() {
        let styles: [fn(&Theme, Status) -> iced::widget::button::Style; 4] = [
            button::primary,
            button::selected,
            button::secondary,
            button::dismiss,
        ];
        for theme in [Theme::Light, Theme::Dark] {
            for style in styles {
                for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                    let _ = style(&theme, status);
                }
            }
        }
    }

    #[test]
    fn risk_card_matches_result_classification() {
        let high = container::risk_card(RiskLevel::from_label("High Risk"))(&Theme::Dark);
        let low = container::risk_card(RiskLevel::from_label("Low Risk"))(&Theme::Dark);
        assert_eq!(high.border.color, palette::RISK_HIGH);
        assert_eq!(low.border.color, palette::RISK_LOW);
    }

    #[test]
    fn toast_outline_follows_severity() {
        for severity in [Severity::Success, Severity::Warning, Severity::Error] {
            let style = container::toast(&Theme::Light, severity.color());
            assert_eq!(style.border.color, severity.color());
        }
    }

    #[test]
    fn layout_tokens_fit_together() {
        assert!(sizing::TOAST_WIDTH + 2.0 * spacing::MD < sizing::CONTENT_MAX_WIDTH);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ThemeMode::Light.theme();
        let dark = ThemeMode::Dark.theme();

        // Backgrounds should be visually opposite between light and dark
        assert!(light.palette().background.r > dark.palette().background.r);
        assert!(light.palette().text.r < dark.palette().text.r);
    }
}
