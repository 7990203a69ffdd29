// ABOUTME: Unit converters deriving BMI and BMR from a physical profile
// ABOUTME: Pure formulas with zero-height guard; sex selects BMR coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

//! BMI and BMR unit converters
//!
//! Pure functions over weight/height/age. Degenerate inputs (height at or
//! below zero) yield `None` rather than a division fault, per the platform's
//! fail-soft policy.

use serde::{Deserialize, Serialize};

use healthtrack_core::models::{PhysicalMetrics, Sex};

/// Centimeters per meter
const CM_PER_M: f64 = 100.0;

// Revised Harris-Benedict coefficients, male branch
const BMR_MALE_BASE: f64 = 88.36;
const BMR_MALE_WEIGHT: f64 = 13.4;
const BMR_MALE_HEIGHT: f64 = 4.8;
const BMR_MALE_AGE: f64 = 5.7;

// Revised Harris-Benedict coefficients, female branch
const BMR_FEMALE_BASE: f64 = 447.6;
const BMR_FEMALE_WEIGHT: f64 = 9.2;
const BMR_FEMALE_HEIGHT: f64 = 3.1;
const BMR_FEMALE_AGE: f64 = 4.3;

/// Body Mass Index: weight divided by height in meters squared
///
/// Returns `None` when `height_cm` is not strictly positive; the input
/// contract requires a positive height and division by zero must be guarded.
#[must_use]
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / CM_PER_M;
    Some(weight_kg / (height_m * height_m))
}

/// Basal Metabolic Rate estimate (kcal/day)
///
/// Coefficient selection dispatches on [`Sex`]; string-to-sex decoding (and
/// its female-branch fallback for unknown values) lives in
/// [`Sex::from_str_lossy`], so typed callers never hit the fallback.
#[must_use]
pub fn compute_bmr(weight_kg: f64, height_cm: f64, age_years: u32, sex: Sex) -> f64 {
    let age = f64::from(age_years);
    match sex {
        Sex::Male => {
            BMR_MALE_WEIGHT.mul_add(
                weight_kg,
                BMR_MALE_HEIGHT.mul_add(height_cm, BMR_MALE_BASE),
            ) - BMR_MALE_AGE * age
        }
        Sex::Female => {
            BMR_FEMALE_WEIGHT.mul_add(
                weight_kg,
                BMR_FEMALE_HEIGHT.mul_add(height_cm, BMR_FEMALE_BASE),
            ) - BMR_FEMALE_AGE * age
        }
    }
}

/// Derived body metrics for one profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BodyComposition {
    /// Body Mass Index, `None` when the profile's height is unusable
    pub bmi: Option<f64>,
    /// Basal Metabolic Rate estimate (kcal/day)
    pub bmr: f64,
}

impl BodyComposition {
    /// Derive BMI and BMR from a physical profile
    #[must_use]
    pub fn from_profile(metrics: &PhysicalMetrics) -> Self {
        Self {
            bmi: compute_bmi(metrics.weight_kg, metrics.height_cm),
            bmr: compute_bmr(
                metrics.weight_kg,
                metrics.height_cm,
                metrics.age_years,
                metrics.sex,
            ),
        }
    }
}
