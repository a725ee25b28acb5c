// SPDX-License-Identifier: MPL-2.0
//! Result card shown after a successful prediction.
//!
//! [`ResultSummary`] holds everything the card displays and is derived purely
//! from a [`PredictionResult`], so the same result always renders the same way.

use crate::domain::prediction::{PredictionResult, RiskLevel};
use crate::domain::report::DownloadState;
use crate::i18n::{I18n, UiText};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{button, operation, Column, Container, Id, Row, Text};
use iced::{Element, Length, Task};

/// Id of the page scrollable the result card lives in.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Display values for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub risk_level: RiskLevel,
    pub label: String,
    pub probability: String,
    /// `None` hides the risk-factor line.
    pub risk_factors: Option<String>,
    pub confidence: String,
}

impl ResultSummary {
    #[must_use]
    pub fn from_prediction(prediction: &PredictionResult) -> Self {
        Self {
            risk_level: prediction.risk_level(),
            label: prediction.prediction.clone(),
            probability: prediction.formatted_probability(),
            risk_factors: prediction.joined_risk_factors(),
            confidence: prediction.confidence_or_na().to_string(),
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub summary: ResultSummary,
    pub download: DownloadState,
    /// A prediction request is in flight; starting over is not allowed.
    pub pending: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    DownloadReport,
    NewAssessment,
}

/// Scrolls the page so the result card, placed last, is visible.
pub fn reveal<T>() -> Task<T> {
    operation::snap_to(Id::new(PAGE_SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 1.0 })
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let summary = ctx.summary;

    let mut details = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr(UiText::ResultTitle)).size(typography::TITLE_SM))
        .push(Text::new(summary.label).size(typography::TITLE_MD))
        .push(labelled(i18n.tr(UiText::ResultProbability), summary.probability));

    if let Some(factors) = summary.risk_factors {
        details = details.push(labelled(i18n.tr(UiText::ResultRiskFactors), factors));
    }

    details = details
        .push(labelled(i18n.tr(UiText::ResultConfidence), summary.confidence))
        .push(Text::new(i18n.tr(UiText::ResultNote)).size(typography::CAPTION));

    let requesting = ctx.download.is_requesting();
    let download_label = if requesting {
        UiText::DownloadInProgress
    } else {
        UiText::DownloadButton
    };

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(i18n.tr(download_label)).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::MD])
                .on_press_maybe((!requesting).then_some(Message::DownloadReport))
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(i18n.tr(UiText::NewAssessmentButton)).size(typography::BODY))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::MD])
                .on_press_maybe((!ctx.pending).then_some(Message::NewAssessment))
                .style(styles::button::secondary),
        );

    Container::new(Column::new().spacing(spacing::MD).push(details).push(actions))
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::risk_card(summary.risk_level))
        .into()
}

fn labelled<'a>(label: String, value: String) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new(label).size(typography::BODY))
        .push(Text::new(value).size(typography::BODY))
        .into()
}
