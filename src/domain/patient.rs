// SPDX-License-Identifier: MPL-2.0
//! Patient form fields and the values submitted to the prediction service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire value for a "yes" answer.
pub const YES: &str = "1";
/// Wire value for a "no" answer.
pub const NO: &str = "0";

/// How a field is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free numeric input.
    Numeric,
    /// Two-choice select sent as [`YES`] or [`NO`].
    YesNo,
}

/// A clinical value collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    SerumCreatinine,
    Hemoglobin,
    Albumin,
    SpecificGravity,
    PackedCellVolume,
    RedBloodCellCount,
    DiabetesMellitus,
    Hypertension,
}

impl FormField {
    /// All fields, in display order.
    pub const ALL: [FormField; 8] = [
        FormField::SerumCreatinine,
        FormField::Hemoglobin,
        FormField::Albumin,
        FormField::SpecificGravity,
        FormField::PackedCellVolume,
        FormField::RedBloodCellCount,
        FormField::DiabetesMellitus,
        FormField::Hypertension,
    ];

    /// Key used in the JSON body sent to the service.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            FormField::SerumCreatinine => "sc",
            FormField::Hemoglobin => "hemo",
            FormField::Albumin => "al",
            FormField::SpecificGravity => "sg",
            FormField::PackedCellVolume => "pcv",
            FormField::RedBloodCellCount => "rbcc",
            FormField::DiabetesMellitus => "dm",
            FormField::Hypertension => "htn",
        }
    }

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            FormField::DiabetesMellitus | FormField::Hypertension => FieldKind::YesNo,
            _ => FieldKind::Numeric,
        }
    }
}

/// Flat string-keyed record of submitted field values.
///
/// Serialized as a plain JSON object (`{"sc": "1.2", ...}`). Unknown keys
/// received from the service are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, value: impl Into<String>) {
        self.0.insert(field.key().to_string(), value.into());
    }

    /// Stores a value under a key the client may not know about.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the raw value of a field, if it was submitted.
    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(field.key()).map(String::as_str)
    }

    /// Returns true when a yes/no field holds [`YES`].
    #[must_use]
    pub fn is_yes(&self, field: FormField) -> bool {
        self.get(field) == Some(YES)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Into<String>> FromIterator<(FormField, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (FormField, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (field, value) in iter {
            data.insert(field, value);
        }
        data
    }
}

/// Editable form state.
///
/// Numeric fields start empty; yes/no fields start at [`NO`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientForm {
    values: BTreeMap<FormField, String>,
}

impl Default for PatientForm {
    fn default() -> Self {
        let values = FormField::ALL
            .into_iter()
            .map(|field| {
                let initial = match field.kind() {
                    FieldKind::Numeric => String::new(),
                    FieldKind::YesNo => NO.to_string(),
                };
                (field, initial)
            })
            .collect();
        Self { values }
    }
}

impl PatientForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current raw text of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Sets a yes/no field.
    pub fn set_yes_no(&mut self, field: FormField, yes: bool) {
        self.set(field, if yes { YES } else { NO });
    }

    #[must_use]
    pub fn is_yes(&self, field: FormField) -> bool {
        self.value(field) == YES
    }

    /// Fields whose value would be rejected by the form.
    ///
    /// Numeric fields must hold a finite, non-negative number. Yes/no fields
    /// must hold [`YES`] or [`NO`].
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| {
                let value = self.value(*field);
                match field.kind() {
                    FieldKind::Numeric => !is_valid_number(value),
                    FieldKind::YesNo => value != YES && value != NO,
                }
            })
            .collect()
    }

    /// Collects every field into the record sent to the service.
    #[must_use]
    pub fn to_form_data(&self) -> FormData {
        FormField::ALL
            .into_iter()
            .map(|field| (field, self.value(field).trim().to_string()))
            .collect()
    }
}

fn is_valid_number(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite() && value >= 0.0)
}
