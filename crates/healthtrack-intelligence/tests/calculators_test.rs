// ABOUTME: Tests for the BMI and BMR unit converters
// ABOUTME: Scale-consistency, zero-height guard, and literal coefficient checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use healthtrack_core::models::{PhysicalMetrics, Sex};
use healthtrack_intelligence::calculators::{compute_bmi, compute_bmr, BodyComposition};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// === BMI ===

#[test]
fn bmi_matches_weight_over_height_squared() {
    let bmi = compute_bmi(65.0, 170.0).unwrap();
    assert_close(bmi, 65.0 / (1.7 * 1.7));
}

#[test]
fn bmi_is_strictly_positive_for_positive_inputs() {
    for (w, h) in [(40.0, 150.0), (65.0, 170.0), (120.0, 200.0)] {
        assert!(compute_bmi(w, h).unwrap() > 0.0);
    }
}

#[test]
fn bmi_doubles_when_weight_doubles() {
    let base = compute_bmi(70.0, 180.0).unwrap();
    let doubled = compute_bmi(140.0, 180.0).unwrap();
    assert_close(doubled, base * 2.0);
}

#[test]
fn bmi_guards_non_positive_height() {
    assert!(compute_bmi(65.0, 0.0).is_none());
    assert!(compute_bmi(65.0, -170.0).is_none());
}

// === BMR ===

#[test]
fn bmr_male_matches_coefficient_formula() {
    // 88.36 + 13.4*65 + 4.8*170 - 5.7*25
    let expected = 88.36 + 13.4 * 65.0 + 4.8 * 170.0 - 5.7 * 25.0;
    assert_close(compute_bmr(65.0, 170.0, 25, Sex::Male), expected);
    assert_close(expected, 1632.86);
}

#[test]
fn bmr_female_matches_coefficient_formula() {
    // 447.6 + 9.2*65 + 3.1*170 - 4.3*25
    let expected = 447.6 + 9.2 * 65.0 + 3.1 * 170.0 - 4.3 * 25.0;
    assert_close(compute_bmr(65.0, 170.0, 25, Sex::Female), expected);
    assert_close(expected, 1465.1);
}

#[test]
fn bmr_branches_differ_for_identical_inputs() {
    let male = compute_bmr(65.0, 170.0, 25, Sex::Male);
    let female = compute_bmr(65.0, 170.0, 25, Sex::Female);
    assert!((male - female).abs() > 1.0);
}

// === BodyComposition ===

#[test]
fn body_composition_derives_from_placeholder_profile() {
    let profile = PhysicalMetrics::placeholder();
    let derived = BodyComposition::from_profile(&profile);
    assert_close(derived.bmi.unwrap(), 65.0 / (1.7 * 1.7));
    assert_close(derived.bmr, compute_bmr(65.0, 170.0, 25, Sex::Male));
}

#[test]
fn body_composition_reports_no_bmi_for_unusable_height() {
    let profile = PhysicalMetrics {
        height_cm: 0.0,
        ..PhysicalMetrics::placeholder()
    };
    let derived = BodyComposition::from_profile(&profile);
    assert!(derived.bmi.is_none());
    // BMR is still defined; only BMI divides by height
    assert!(derived.bmr > 0.0);
}
