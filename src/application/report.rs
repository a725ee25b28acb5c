// SPDX-License-Identifier: MPL-2.0
//! Report download with a locally generated fallback.
//!
//! The server document is preferred. When it cannot be obtained for any
//! reason, the same assessment is rendered as plain text so the user always
//! gets a report.

use super::port::PredictionService;
use crate::domain::patient::FormField;
use crate::domain::prediction::PredictionResult;
use crate::domain::report::{ReportArtifact, ReportKind};
use chrono::{DateTime, Local};
use std::fmt::Write as _;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

const DISCLAIMER: &str = "This report is generated by an AI prediction model and should not be used as a substitute for professional medical advice. Please consult with a qualified healthcare provider for proper diagnosis and treatment.";

const NO_RISK_FACTORS: &str = "None identified";

/// Obtains a report for `prediction`, falling back to text on any failure.
///
/// `now` names the file and dates the text report.
pub async fn fetch_report<S: PredictionService>(
    service: &S,
    prediction: &PredictionResult,
    now: DateTime<Local>,
) -> ReportArtifact {
    let epoch_millis = now.timestamp_millis();

    match service.download_report(prediction).await {
        Ok(document) => {
            tracing::info!(bytes = document.len(), "server report received");
            ReportArtifact::new(ReportKind::Pdf, epoch_millis, document)
        }
        Err(err) => {
            tracing::warn!(error = %err, "server report unavailable, using text report");
            text_report(prediction, now)
        }
    }
}

/// Builds the plain-text artifact without contacting the server.
#[must_use]
pub fn text_report(prediction: &PredictionResult, now: DateTime<Local>) -> ReportArtifact {
    let text = render_text_report(prediction, now);
    ReportArtifact::new(ReportKind::Text, now.timestamp_millis(), text.into_bytes())
}

/// Renders the plain-text report.
///
/// Field values are copied verbatim; a field that was not submitted renders
/// as an empty value.
#[must_use]
pub fn render_text_report(prediction: &PredictionResult, now: DateTime<Local>) -> String {
    let form = &prediction.form_data;
    let field = |f: FormField| form.get(f).unwrap_or_default();
    let yes_no = |f: FormField| if form.is_yes(f) { "Yes" } else { "No" };

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "CKD DETECTION REPORT");
    let _ = writeln!(out, "====================");
    let _ = writeln!(out, "Date: {}", now.format(DATE_FORMAT));
    let _ = writeln!(out, "Time: {}", now.format(TIME_FORMAT));
    let _ = writeln!(out);
    let _ = writeln!(out, "PATIENT DATA:");
    let _ = writeln!(out, "-------------");
    let _ = writeln!(out, "Serum Creatinine: {} mg/dL", field(FormField::SerumCreatinine));
    let _ = writeln!(out, "Hemoglobin: {} g/dL", field(FormField::Hemoglobin));
    let _ = writeln!(out, "Albumin Level: {}", field(FormField::Albumin));
    let _ = writeln!(out, "Specific Gravity: {}", field(FormField::SpecificGravity));
    let _ = writeln!(out, "Packed Cell Volume: {}%", field(FormField::PackedCellVolume));
    let _ = writeln!(
        out,
        "Red Blood Cell Count: {} millions/μL",
        field(FormField::RedBloodCellCount)
    );
    let _ = writeln!(out, "Diabetes Mellitus: {}", yes_no(FormField::DiabetesMellitus));
    let _ = writeln!(out, "Hypertension: {}", yes_no(FormField::Hypertension));
    let _ = writeln!(out);
    let _ = writeln!(out, "PREDICTION RESULTS:");
    let _ = writeln!(out, "------------------");
    let _ = writeln!(out, "Risk Assessment: {}", prediction.prediction);
    let _ = writeln!(out, "Probability: {}", prediction.formatted_probability());
    let _ = writeln!(
        out,
        "Risk Factors: {}",
        prediction
            .joined_risk_factors()
            .as_deref()
            .unwrap_or(NO_RISK_FACTORS)
    );
    let _ = writeln!(out, "Confidence: {}", prediction.confidence_or_na());
    let _ = writeln!(out);
    let _ = writeln!(out, "DISCLAIMER:");
    let _ = writeln!(out, "-----------");
    let _ = writeln!(out, "{DISCLAIMER}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Generated by CKD Detection System");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{ServiceError, ServiceResult};
    use crate::domain::patient::{FormData, PatientForm};
    use chrono::TimeZone;
    use std::future::{ready, Future};

    struct FixedService {
        report: ServiceResult<Vec<u8>>,
    }

    impl PredictionService for FixedService {
        fn predict(
            &self,
            _form: &FormData,
        ) -> impl Future<Output = ServiceResult<PredictionResult>> + Send {
            ready(Err(ServiceError::Status(500)))
        }

        fn download_report(
            &self,
            _prediction: &PredictionResult,
        ) -> impl Future<Output = ServiceResult<Vec<u8>>> + Send {
            ready(self.report.clone())
        }
    }

    fn fixed_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .single()
            .expect("unambiguous local time")
    }

    fn sample_prediction() -> PredictionResult {
        let mut form = PatientForm::new();
        form.set(FormField::SerumCreatinine, "3.4");
        form.set(FormField::Hemoglobin, "9.1");
        form.set(FormField::Albumin, "3");
        form.set(FormField::SpecificGravity, "1.010");
        form.set(FormField::PackedCellVolume, "29");
        form.set(FormField::RedBloodCellCount, "3.1");
        form.set_yes_no(FormField::DiabetesMellitus, true);

        PredictionResult {
            prediction: "High Risk".to_string(),
            probability: 87.46,
            risk_factors: Some(vec![
                "Elevated serum creatinine".to_string(),
                "Low hemoglobin".to_string(),
            ]),
            confidence: Some("Medium".to_string()),
            form_data: form.to_form_data(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn text_report_lists_patient_data_verbatim() {
        let report = render_text_report(&sample_prediction(), fixed_now());

        assert!(report.starts_with("CKD DETECTION REPORT\n====================\n"));
        assert!(report.contains("Date: 2024-03-09\nTime: 14:05:07\n"));
        assert!(report.contains("Serum Creatinine: 3.4 mg/dL\n"));
        assert!(report.contains("Hemoglobin: 9.1 g/dL\n"));
        assert!(report.contains("Albumin Level: 3\n"));
        assert!(report.contains("Specific Gravity: 1.010\n"));
        assert!(report.contains("Packed Cell Volume: 29%\n"));
        assert!(report.contains("Red Blood Cell Count: 3.1 millions/μL\n"));
        assert!(report.contains("Diabetes Mellitus: Yes\n"));
        assert!(report.contains("Hypertension: No\n"));
    }

    #[test]
    fn text_report_repeats_prediction() {
        let report = render_text_report(&sample_prediction(), fixed_now());

        assert!(report.contains("Risk Assessment: High Risk\n"));
        assert!(report.contains("Probability: 87.5%\n"));
        assert!(report.contains("Risk Factors: Elevated serum creatinine, Low hemoglobin\n"));
        assert!(report.contains("Confidence: Medium\n"));
        assert!(report.ends_with("Generated by CKD Detection System\n"));
    }

    #[test]
    fn text_report_handles_missing_optional_values() {
        let mut prediction = sample_prediction();
        prediction.risk_factors = Some(Vec::new());
        prediction.confidence = None;
        prediction.form_data = FormData::new();

        let report = render_text_report(&prediction, fixed_now());
        assert!(report.contains("Risk Factors: None identified\n"));
        assert!(report.contains("Confidence: N/A\n"));
        assert!(report.contains("Hemoglobin:  g/dL\n"));
        assert!(report.contains("Diabetes Mellitus: No\n"));
    }

    #[tokio::test]
    async fn server_document_is_used_when_available() {
        let service = FixedService {
            report: Ok(b"%PDF-1.7".to_vec()),
        };
        let artifact = fetch_report(&service, &sample_prediction(), fixed_now()).await;

        assert_eq!(artifact.kind, ReportKind::Pdf);
        assert_eq!(artifact.bytes, b"%PDF-1.7");
        assert_eq!(
            artifact.file_name,
            format!("CKD_Report_{}.pdf", fixed_now().timestamp_millis())
        );
    }

    #[tokio::test]
    async fn any_failure_falls_back_to_text() {
        let failures = [
            ServiceError::Transport("connection refused".into()),
            ServiceError::Status(503),
            ServiceError::Body("empty document".into()),
        ];

        for failure in failures {
            let service = FixedService {
                report: Err(failure),
            };
            let prediction = sample_prediction();
            let artifact = fetch_report(&service, &prediction, fixed_now()).await;

            assert_eq!(artifact.kind, ReportKind::Text);
            assert!(artifact.file_name.ends_with(".txt"));
            let text = String::from_utf8(artifact.bytes).expect("utf-8 report");
            assert_eq!(text, render_text_report(&prediction, fixed_now()));
        }
    }
}
