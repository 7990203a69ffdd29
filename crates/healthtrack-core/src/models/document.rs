// ABOUTME: Field extraction helpers for loosely-typed store documents
// ABOUTME: Missing or mistyped fields default; only an unusable date drops a record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

use chrono::NaiveDate;
use serde_json::Value;

/// String field, empty when missing or mistyped
pub(crate) fn str_field(doc: &Value, key: &str) -> String {
    doc.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Non-negative integer field, zero when missing, mistyped, or out of range
pub(crate) fn u32_field(doc: &Value, key: &str) -> u32 {
    doc.get(key)
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(0)
}

/// Float field, zero when missing or mistyped
pub(crate) fn f64_field(doc: &Value, key: &str) -> f64 {
    doc.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

/// Calendar date field in ISO `YYYY-MM-DD` form
///
/// Unlike the other helpers there is no usable default for a date, so `None`
/// here means the whole record must be dropped.
pub(crate) fn date_field(doc: &Value, key: &str) -> Option<NaiveDate> {
    doc.get(key)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<NaiveDate>().ok())
}
