// ABOUTME: Tests for document decoding, lossy enum parsing, and model defaults
// ABOUTME: Covers the silent-drop policy for records with unusable dates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use serde_json::json;

use healthtrack_core::constants::defaults;
use healthtrack_core::models::{
    ActivityRecord, ActivityType, Goal, Intensity, MealCategory, NutritionRecord,
    PhysicalMetrics, Sex,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// === Nutrition document decoding ===

#[test]
fn nutrition_document_decodes_all_fields() {
    let doc = json!({
        "foodName": "Oatmeal",
        "mealType": "Breakfast",
        "calories": 350,
        "protein": 12.5,
        "carbs": 60.0,
        "fat": 6.0,
        "servingSize": 80,
        "date": "2025-03-10"
    });

    let record = NutritionRecord::from_document("meal-1", &doc).unwrap();
    assert_eq!(record.id, "meal-1");
    assert_eq!(record.food_name, "Oatmeal");
    assert_eq!(record.meal_category, MealCategory::Breakfast);
    assert_eq!(record.calories, 350);
    assert!((record.protein_g - 12.5).abs() < f64::EPSILON);
    assert_eq!(record.serving_size_g, 80);
    assert_eq!(record.date, date(2025, 3, 10));
}

#[test]
fn nutrition_document_missing_fields_default() {
    let doc = json!({ "date": "2025-03-10" });

    let record = NutritionRecord::from_document("meal-2", &doc).unwrap();
    assert_eq!(record.food_name, "");
    assert_eq!(record.calories, 0);
    assert!((record.protein_g).abs() < f64::EPSILON);
    // free-form meal type strings fall back to Snack
    assert_eq!(record.meal_category, MealCategory::Snack);
}

#[test]
fn nutrition_document_unparsable_date_is_dropped() {
    let doc = json!({ "foodName": "Toast", "calories": 150, "date": "not-a-date" });
    assert!(NutritionRecord::from_document("meal-3", &doc).is_none());
}

#[test]
fn nutrition_document_missing_date_is_dropped() {
    let doc = json!({ "foodName": "Toast", "calories": 150 });
    assert!(NutritionRecord::from_document("meal-4", &doc).is_none());
}

// === Activity document decoding ===

#[test]
fn activity_document_decodes_all_fields() {
    let doc = json!({
        "activityName": "Morning run",
        "activityType": "Running",
        "durationMinutes": 45,
        "caloriesBurned": 400,
        "intensity": "High",
        "date": "2025-03-10"
    });

    let record = ActivityRecord::from_document("act-1", &doc).unwrap();
    assert_eq!(record.activity_type, ActivityType::Running);
    assert_eq!(record.duration_minutes, 45);
    assert_eq!(record.calories_burned, 400);
    assert_eq!(record.intensity, Intensity::High);
}

#[test]
fn activity_document_bad_date_is_dropped() {
    let doc = json!({ "activityName": "Swim", "date": "2025-13-40" });
    assert!(ActivityRecord::from_document("act-2", &doc).is_none());
}

// === Lossy enum parsing ===

#[test]
fn meal_category_parse_is_case_insensitive_and_lossy() {
    assert_eq!(MealCategory::from_str_lossy("BREAKFAST"), MealCategory::Breakfast);
    assert_eq!(MealCategory::from_str_lossy("dinner"), MealCategory::Dinner);
    assert_eq!(MealCategory::from_str_lossy("brunch"), MealCategory::Snack);
    assert_eq!(MealCategory::from_str_lossy(""), MealCategory::Snack);
}

#[test]
fn activity_type_and_intensity_parse_lossy() {
    assert_eq!(ActivityType::from_str_lossy("Gym"), ActivityType::Gym);
    assert_eq!(ActivityType::from_str_lossy("pilates"), ActivityType::Other);
    assert_eq!(Intensity::from_str_lossy("low"), Intensity::Low);
    assert_eq!(Intensity::from_str_lossy("extreme"), Intensity::Medium);
}

#[test]
fn sex_parse_defaults_unknown_values_to_female_branch() {
    assert_eq!(Sex::from_str_lossy("male"), Sex::Male);
    assert_eq!(Sex::from_str_lossy("MALE"), Sex::Male);
    assert_eq!(Sex::from_str_lossy("female"), Sex::Female);
    // inherited quirk: unknown values use the female coefficients
    assert_eq!(Sex::from_str_lossy("unspecified"), Sex::Female);
}

// === Defaults ===

#[test]
fn default_goal_matches_documented_targets() {
    let goal = Goal::default_active();
    assert!(goal.active);
    assert_eq!(goal.daily_calorie_target, 2000);
    assert!((goal.protein_target_g - 150.0).abs() < f64::EPSILON);
    assert!((goal.carbs_target_g - 250.0).abs() < f64::EPSILON);
    assert!((goal.fat_target_g - 65.0).abs() < f64::EPSILON);
    assert_eq!(goal.water_target_ml, 2000);
    assert!((goal.weight_target_kg - 70.0).abs() < f64::EPSILON);
    assert_eq!(goal.activity_minutes_target, 30);
    assert!(!goal.id.is_empty());
}

#[test]
fn distinct_default_goals_get_distinct_ids() {
    assert_ne!(Goal::default_active().id, Goal::default_active().id);
}

#[test]
fn goal_validation_rejects_zero_calorie_target() {
    let mut goal = Goal::default_active();
    goal.daily_calorie_target = 0;
    assert!(goal.validate().is_err());

    let mut goal = Goal::default_active();
    goal.protein_target_g = -1.0;
    assert!(goal.validate().is_err());

    assert!(Goal::default_active().validate().is_ok());
}

#[test]
fn placeholder_profile_matches_documented_values() {
    let profile = PhysicalMetrics::placeholder();
    assert!((profile.weight_kg - defaults::PLACEHOLDER_WEIGHT_KG).abs() < f64::EPSILON);
    assert!((profile.height_cm - 170.0).abs() < f64::EPSILON);
    assert_eq!(profile.age_years, 25);
    assert_eq!(profile.sex, Sex::Male);
    assert_eq!(profile.reported_daily_calories, 2200);
}
