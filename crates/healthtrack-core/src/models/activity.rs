// ABOUTME: Physical activity models for workout logging
// ABOUTME: ActivityRecord, ActivityType, and Intensity with lossy document decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::document::{date_field, str_field, u32_field};

/// Kind of physical activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Gym / strength session
    Gym,
    /// Running
    Running,
    /// Yoga
    Yoga,
    /// Anything else
    Other,
}

impl ActivityType {
    /// Parse activity type from string; unknown values map to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "gym" => Self::Gym,
            "running" => Self::Running,
            "yoga" => Self::Yoga,
            _ => Self::Other,
        }
    }
}

/// Reported effort level of an activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Light effort
    Low,
    /// Moderate effort
    Medium,
    /// Hard effort
    High,
}

impl Intensity {
    /// Parse intensity from string; unknown values map to `Medium`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }
}

/// One logged physical activity
///
/// Same mutation model as [`super::NutritionRecord`]: edit = full replacement
/// under the same identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityRecord {
    /// Unique identifier
    pub id: String,
    /// Activity name as entered by the user
    pub activity_name: String,
    /// Kind of activity
    pub activity_type: ActivityType,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Calories burned (kcal)
    pub calories_burned: u32,
    /// Reported effort level
    pub intensity: Intensity,
    /// Calendar date the activity was logged for (no time component)
    pub date: NaiveDate,
}

impl ActivityRecord {
    /// Decode a record from a loosely-typed store document
    ///
    /// Same policy as [`super::NutritionRecord::from_document`]: scalars
    /// default, an unusable date drops the document.
    #[must_use]
    pub fn from_document(id: impl Into<String>, doc: &Value) -> Option<Self> {
        let id = id.into();
        let Some(date) = date_field(doc, "date") else {
            debug!(record_id = %id, "dropping activity document with unusable date");
            return None;
        };

        Some(Self {
            id,
            activity_name: str_field(doc, "activityName"),
            activity_type: ActivityType::from_str_lossy(&str_field(doc, "activityType")),
            duration_minutes: u32_field(doc, "durationMinutes"),
            calories_burned: u32_field(doc, "caloriesBurned"),
            intensity: Intensity::from_str_lossy(&str_field(doc, "intensity")),
            date,
        })
    }
}
