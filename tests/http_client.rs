// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter tests against a scripted single-request server.

use ckd_lens::application::port::{PredictionService, ServiceError};
use ckd_lens::application::report::{fetch_report, render_text_report};
use ckd_lens::domain::patient::{FormData, FormField, PatientForm};
use ckd_lens::domain::prediction::PredictionResult;
use ckd_lens::domain::report::ReportKind;
use ckd_lens::infrastructure::HttpPredictionService;
use serde_json::json;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

/// What the server saw.
struct Recorded {
    request_line: String,
    body: Vec<u8>,
}

/// Serves exactly one response and reports the request it answered.
fn serve_once(status: &str, content_type: &str, body: Vec<u8>) -> (String, mpsc::Receiver<Recorded>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let status = status.to_string();
    let content_type = content_type.to_string();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        let mut received = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut chunk).unwrap_or(0);
            if n == 0 {
                return;
            }
            received.extend_from_slice(&chunk[..n]);
            if let Some(pos) = received.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&received[..header_end]).to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while received.len() < header_end + content_length {
            let n = stream.read(&mut chunk).unwrap_or(0);
            if n == 0 {
                break;
            }
            received.extend_from_slice(&chunk[..n]);
        }

        let _ = tx.send(Recorded {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            body: received[header_end..].to_vec(),
        });

        let header = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );
        let _ = stream.write_all(header.as_bytes());
        let _ = stream.write_all(&body);
        let _ = stream.flush();
    });

    (format!("http://{addr}"), rx)
}

fn scenario_form() -> FormData {
    let mut form = PatientForm::new();
    form.set(FormField::SerumCreatinine, "1.2");
    form.set(FormField::Hemoglobin, "13.5");
    form.set(FormField::Albumin, "0");
    form.set(FormField::SpecificGravity, "1.02");
    form.set(FormField::PackedCellVolume, "44");
    form.set(FormField::RedBloodCellCount, "5.2");
    form.to_form_data()
}

fn scenario_prediction() -> PredictionResult {
    serde_json::from_value(json!({
        "prediction": "Low Risk",
        "probability": 12.3,
        "riskFactors": [],
        "confidence": "High",
        "formData": scenario_form(),
        "modelVersion": "2024.1"
    }))
    .unwrap()
}

#[tokio::test]
async fn predict_posts_form_and_parses_assessment() {
    let body = json!({
        "prediction": "Low Risk",
        "probability": 12.3,
        "riskFactors": [],
        "confidence": "High"
    });
    let (url, requests) = serve_once("200 OK", "application/json", body.to_string().into_bytes());
    let service = HttpPredictionService::new(&url, None).unwrap();

    let form = scenario_form();
    let result = service.predict(&form).await.unwrap();

    assert_eq!(result.prediction, "Low Risk");
    assert_eq!(result.formatted_probability(), "12.3%");
    assert_eq!(result.confidence_or_na(), "High");
    assert_eq!(result.joined_risk_factors(), None);
    assert_eq!(result.form_data, form);

    let recorded = requests.recv().unwrap();
    assert!(recorded.request_line.starts_with("POST /predict "));
    let sent: serde_json::Value = serde_json::from_slice(&recorded.body).unwrap();
    assert_eq!(
        sent,
        json!({
            "sc": "1.2", "hemo": "13.5", "al": "0", "sg": "1.02",
            "pcv": "44", "rbcc": "5.2", "dm": "0", "htn": "0"
        })
    );
}

#[tokio::test]
async fn predict_rejects_non_success_status() {
    let (url, _requests) = serve_once("500 Internal Server Error", "text/plain", b"boom".to_vec());
    let service = HttpPredictionService::new(&url, None).unwrap();

    let result = service.predict(&scenario_form()).await;
    assert_eq!(result, Err(ServiceError::Status(500)));
}

#[tokio::test]
async fn predict_rejects_malformed_body() {
    let (url, _requests) = serve_once("200 OK", "application/json", b"{\"prediction\":".to_vec());
    let service = HttpPredictionService::new(&url, None).unwrap();

    let result = service.predict(&scenario_form()).await;
    assert!(matches!(result, Err(ServiceError::Decode(_))));
}

#[tokio::test]
async fn download_report_echoes_full_prediction() {
    let (url, requests) = serve_once("200 OK", "application/pdf", b"%PDF-1.4 test".to_vec());
    let service = HttpPredictionService::new(&format!("{url}/"), None).unwrap();

    let document = service.download_report(&scenario_prediction()).await.unwrap();
    assert_eq!(document, b"%PDF-1.4 test");

    let recorded = requests.recv().unwrap();
    assert!(recorded.request_line.starts_with("POST /download_report "));
    let sent: serde_json::Value = serde_json::from_slice(&recorded.body).unwrap();
    assert_eq!(sent["prediction"], "Low Risk");
    assert_eq!(sent["formData"]["hemo"], "13.5");
    assert_eq!(sent["modelVersion"], "2024.1");
}

#[tokio::test]
async fn server_document_becomes_pdf_artifact() {
    let (url, _requests) = serve_once("200 OK", "application/pdf", b"%PDF-1.4".to_vec());
    let service = HttpPredictionService::new(&url, None).unwrap();
    let now = chrono::Local::now();

    let artifact = fetch_report(&service, &scenario_prediction(), now).await;
    assert_eq!(artifact.kind, ReportKind::Pdf);
    assert_eq!(
        artifact.file_name,
        format!("CKD_Report_{}.pdf", now.timestamp_millis())
    );
}

#[tokio::test]
async fn failed_report_falls_back_to_text_with_patient_values() {
    let (url, _requests) = serve_once("503 Service Unavailable", "text/plain", Vec::new());
    let service = HttpPredictionService::new(&url, None).unwrap();
    let prediction = scenario_prediction();
    let now = chrono::Local::now();

    let artifact = fetch_report(&service, &prediction, now).await;
    assert_eq!(artifact.kind, ReportKind::Text);
    assert!(artifact.file_name.ends_with(".txt"));

    let text = String::from_utf8(artifact.bytes).unwrap();
    assert_eq!(text, render_text_report(&prediction, now));
    for value in ["1.2 mg/dL", "13.5 g/dL", "1.02", "44%", "5.2 millions/μL"] {
        assert!(text.contains(value), "missing {value}");
    }
    assert!(text.contains("Risk Assessment: Low Risk"));
    assert!(text.contains("Probability: 12.3%"));
    assert!(text.contains("Risk Factors: None identified"));
    assert!(text.contains("Confidence: High"));
}

#[tokio::test]
async fn empty_document_falls_back_to_text() {
    let (url, _requests) = serve_once("200 OK", "application/pdf", Vec::new());
    let service = HttpPredictionService::new(&url, None).unwrap();

    let artifact = fetch_report(&service, &scenario_prediction(), chrono::Local::now()).await;
    assert!(artifact.is_fallback());
}
