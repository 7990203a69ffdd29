// ABOUTME: Physical profile model feeding the BMI/BMR converters
// ABOUTME: PhysicalMetrics with placeholder fallback profile and Sex dispatch enum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::defaults;

/// Biological sex category, used only to select BMR coefficients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male BMR coefficients
    Male,
    /// Female BMR coefficients
    Female,
}

impl Sex {
    /// Parse a stored sex value
    ///
    /// Anything other than `"male"` (case-insensitive) falls back to
    /// `Female`, including `"female"` and unrecognized values. The
    /// unrecognized-value fallback is inherited behavior from the stored data
    /// format and silently mis-categorizes unknown inputs; it is kept pending
    /// a product decision and is logged at debug level when taken.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            other => {
                debug!(value = other, "unrecognized sex value, using female BMR coefficients");
                Self::Female
            }
        }
    }
}

/// A user's physical profile
///
/// BMI and BMR are derived from this profile by the intelligence crate, never
/// stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhysicalMetrics {
    /// Body weight (kg)
    pub weight_kg: f64,
    /// Height (cm)
    pub height_cm: f64,
    /// Age (years)
    pub age_years: u32,
    /// Sex category for BMR coefficient selection
    pub sex: Sex,
    /// Self-reported total daily calories (kcal)
    pub reported_daily_calories: u32,
}

impl PhysicalMetrics {
    /// The fixed placeholder profile substituted when no profile is stored or
    /// the fetch fails
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            weight_kg: defaults::PLACEHOLDER_WEIGHT_KG,
            height_cm: defaults::PLACEHOLDER_HEIGHT_CM,
            age_years: defaults::PLACEHOLDER_AGE_YEARS,
            sex: Sex::Male,
            reported_daily_calories: defaults::PLACEHOLDER_DAILY_CALORIES,
        }
    }
}
