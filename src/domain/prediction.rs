// SPDX-License-Identifier: MPL-2.0
//! Risk assessment returned by the prediction service.

use super::patient::FormData;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Label the service uses for a high-risk assessment.
pub const HIGH_RISK_LABEL: &str = "High Risk";

/// Shown when the service gives no confidence.
pub const NOT_AVAILABLE: &str = "N/A";

/// Visual classification of an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Low,
}

impl RiskLevel {
    /// `High` only for the exact [`HIGH_RISK_LABEL`]; any other label is `Low`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == HIGH_RISK_LABEL {
            RiskLevel::High
        } else {
            RiskLevel::Low
        }
    }
}

/// Result of one `/predict` call.
///
/// Fields the client does not know about are kept in `extra` so the result
/// can be sent back to the report endpoint unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    pub probability: f64,
    #[serde(
        rename = "riskFactors",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub risk_factors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
    #[serde(
        rename = "formData",
        default,
        deserialize_with = "deserialize_form_data"
    )]
    pub form_data: FormData,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PredictionResult {
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_label(&self.prediction)
    }

    /// Probability with one decimal place and a percent sign.
    #[must_use]
    pub fn formatted_probability(&self) -> String {
        format_probability(self.probability)
    }

    /// Risk factors joined for display, or `None` when there are none.
    ///
    /// A missing list and an empty list are treated the same way.
    #[must_use]
    pub fn joined_risk_factors(&self) -> Option<String> {
        self.risk_factors
            .as_deref()
            .filter(|factors| !factors.is_empty())
            .map(|factors| factors.join(", "))
    }

    /// Confidence as given, or [`NOT_AVAILABLE`] when missing or empty.
    #[must_use]
    pub fn confidence_or_na(&self) -> &str {
        self.confidence
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(NOT_AVAILABLE)
    }

    /// Fills in the submitted fields when the service did not echo them.
    #[must_use]
    pub fn with_submitted_form(mut self, submitted: &FormData) -> Self {
        if self.form_data.is_empty() {
            self.form_data = submitted.clone();
        }
        self
    }
}

/// Accepts `null` and scalar values in an echoed `formData`.
///
/// Numbers and booleans are kept as their JSON text; nested values are dropped.
fn deserialize_form_data<'de, D>(deserializer: D) -> Result<FormData, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Map<String, Value>>::deserialize(deserializer)?;
    let mut data = FormData::new();
    for (key, value) in raw.into_iter().flatten() {
        let text = match value {
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Null | Value::Array(_) | Value::Object(_) => continue,
        };
        data.insert_raw(key, text);
    }
    Ok(data)
}

/// Formats a percentage with one decimal place (`83.456` becomes `83.5%`).
#[must_use]
pub fn format_probability(value: f64) -> String {
    format!("{value:.1}%")
}
