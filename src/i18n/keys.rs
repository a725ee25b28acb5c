// SPDX-License-Identifier: MPL-2.0
//! Typed keys for every translatable string.
//!
//! Each variant maps to one Fluent message id. Views refer to text through
//! these keys only, so a typo is a compile error and tests can check that
//! every key exists in every embedded bundle.

use crate::domain::patient::FormField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiText {
    WindowTitle,
    MainTitle,
    Subtitle,
    LabelSerumCreatinine,
    LabelHemoglobin,
    LabelAlbumin,
    LabelSpecificGravity,
    LabelPackedCellVolume,
    LabelRedBloodCellCount,
    LabelDiabetesMellitus,
    LabelHypertension,
    DiabetesNo,
    DiabetesYes,
    HypertensionNo,
    HypertensionYes,
    SubmitButton,
    SubmitProcessing,
    DownloadButton,
    DownloadInProgress,
    NewAssessmentButton,
    ResultTitle,
    ResultProbability,
    ResultRiskFactors,
    ResultConfidence,
    ResultNote,
    AlertTitle,
    AlertRequestFailed,
    InvalidFields,
    ReportSaved,
    ReportSavedText,
    ReportSaveError,
    ConfigLoadError,
    ConfigSaveError,
    StateReadError,
    StateParseError,
    StateWriteError,
}

impl UiText {
    pub const ALL: [UiText; 36] = [
        UiText::WindowTitle,
        UiText::MainTitle,
        UiText::Subtitle,
        UiText::LabelSerumCreatinine,
        UiText::LabelHemoglobin,
        UiText::LabelAlbumin,
        UiText::LabelSpecificGravity,
        UiText::LabelPackedCellVolume,
        UiText::LabelRedBloodCellCount,
        UiText::LabelDiabetesMellitus,
        UiText::LabelHypertension,
        UiText::DiabetesNo,
        UiText::DiabetesYes,
        UiText::HypertensionNo,
        UiText::HypertensionYes,
        UiText::SubmitButton,
        UiText::SubmitProcessing,
        UiText::DownloadButton,
        UiText::DownloadInProgress,
        UiText::NewAssessmentButton,
        UiText::ResultTitle,
        UiText::ResultProbability,
        UiText::ResultRiskFactors,
        UiText::ResultConfidence,
        UiText::ResultNote,
        UiText::AlertTitle,
        UiText::AlertRequestFailed,
        UiText::InvalidFields,
        UiText::ReportSaved,
        UiText::ReportSavedText,
        UiText::ReportSaveError,
        UiText::ConfigLoadError,
        UiText::ConfigSaveError,
        UiText::StateReadError,
        UiText::StateParseError,
        UiText::StateWriteError,
    ];

    /// Fluent message id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            UiText::WindowTitle => "window-title",
            UiText::MainTitle => "main-title",
            UiText::Subtitle => "subtitle",
            UiText::LabelSerumCreatinine => "label-sc",
            UiText::LabelHemoglobin => "label-hemo",
            UiText::LabelAlbumin => "label-al",
            UiText::LabelSpecificGravity => "label-sg",
            UiText::LabelPackedCellVolume => "label-pcv",
            UiText::LabelRedBloodCellCount => "label-rbcc",
            UiText::LabelDiabetesMellitus => "label-dm",
            UiText::LabelHypertension => "label-htn",
            UiText::DiabetesNo => "dm-no",
            UiText::DiabetesYes => "dm-yes",
            UiText::HypertensionNo => "htn-no",
            UiText::HypertensionYes => "htn-yes",
            UiText::SubmitButton => "btn-text",
            UiText::SubmitProcessing => "btn-processing",
            UiText::DownloadButton => "download-btn",
            UiText::DownloadInProgress => "download-in-progress",
            UiText::NewAssessmentButton => "new-assessment-btn",
            UiText::ResultTitle => "result-title",
            UiText::ResultProbability => "result-probability",
            UiText::ResultRiskFactors => "result-risk-factors",
            UiText::ResultConfidence => "result-confidence",
            UiText::ResultNote => "result-note",
            UiText::AlertTitle => "alert-title",
            UiText::AlertRequestFailed => "alert-request-failed",
            UiText::InvalidFields => "notification-invalid-fields",
            UiText::ReportSaved => "notification-report-saved",
            UiText::ReportSavedText => "notification-report-saved-text",
            UiText::ReportSaveError => "notification-report-save-error",
            UiText::ConfigLoadError => "notification-config-load-error",
            UiText::ConfigSaveError => "notification-config-save-error",
            UiText::StateReadError => "notification-state-read-error",
            UiText::StateParseError => "notification-state-parse-error",
            UiText::StateWriteError => "notification-state-write-error",
        }
    }

    /// Label shown above a form field.
    #[must_use]
    pub const fn field_label(field: FormField) -> Self {
        match field {
            FormField::SerumCreatinine => UiText::LabelSerumCreatinine,
            FormField::Hemoglobin => UiText::LabelHemoglobin,
            FormField::Albumin => UiText::LabelAlbumin,
            FormField::SpecificGravity => UiText::LabelSpecificGravity,
            FormField::PackedCellVolume => UiText::LabelPackedCellVolume,
            FormField::RedBloodCellCount => UiText::LabelRedBloodCellCount,
            FormField::DiabetesMellitus => UiText::LabelDiabetesMellitus,
            FormField::Hypertension => UiText::LabelHypertension,
        }
    }

    /// Option labels `(no, yes)` for a yes/no field, `None` for numeric ones.
    #[must_use]
    pub const fn yes_no_options(field: FormField) -> Option<(Self, Self)> {
        match field {
            FormField::DiabetesMellitus => Some((UiText::DiabetesNo, UiText::DiabetesYes)),
            FormField::Hypertension => Some((UiText::HypertensionNo, UiText::HypertensionYes)),
            _ => None,
        }
    }
}
