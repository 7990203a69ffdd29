// ABOUTME: Tests for record aggregation: totals, empty input, order independence
// ABOUTME: Covers group_by_date partitioning for both record kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;

use healthtrack_core::models::{
    ActivityRecord, ActivityType, Intensity, MealCategory, NutritionRecord,
};
use healthtrack_intelligence::aggregator::{
    group_by_date, ActivityTotals, NutritionTotals,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn meal(id: &str, calories: u32, protein: f64, date_: NaiveDate) -> NutritionRecord {
    NutritionRecord {
        id: id.to_owned(),
        food_name: format!("food {id}"),
        meal_category: MealCategory::Lunch,
        calories,
        protein_g: protein,
        carbs_g: protein * 2.0,
        fat_g: protein / 2.0,
        serving_size_g: 100,
        date: date_,
    }
}

fn workout(id: &str, minutes: u32, burned: u32, date_: NaiveDate) -> ActivityRecord {
    ActivityRecord {
        id: id.to_owned(),
        activity_name: format!("workout {id}"),
        activity_type: ActivityType::Gym,
        duration_minutes: minutes,
        calories_burned: burned,
        intensity: Intensity::Medium,
        date: date_,
    }
}

// === Totals ===

#[test]
fn empty_lists_yield_all_zero_totals() {
    assert_eq!(NutritionTotals::from_records(&[]), NutritionTotals::default());
    assert_eq!(ActivityTotals::from_records(&[]), ActivityTotals::default());
}

#[test]
fn nutrition_totals_sum_all_fields() {
    let d = date(2025, 3, 10);
    let records = vec![meal("a", 500, 20.0, d), meal("b", 700, 30.0, d)];

    let totals = NutritionTotals::from_records(&records);
    assert_eq!(totals.calories, 1200);
    assert!((totals.protein_g - 50.0).abs() < f64::EPSILON);
    assert!((totals.carbs_g - 100.0).abs() < f64::EPSILON);
    assert!((totals.fat_g - 25.0).abs() < f64::EPSILON);
}

#[test]
fn activity_totals_sum_duration_burned_and_count() {
    let d = date(2025, 3, 10);
    let records = vec![workout("a", 30, 300, d), workout("b", 45, 250, d)];

    let totals = ActivityTotals::from_records(&records);
    assert_eq!(totals.duration_minutes, 75);
    assert_eq!(totals.calories_burned, 550);
    assert_eq!(totals.workouts, 2);
}

#[test]
fn totals_are_order_independent() {
    let d = date(2025, 3, 10);
    let mut records = vec![
        meal("a", 500, 20.0, d),
        meal("b", 700, 30.0, d),
        meal("c", 250, 10.0, d),
    ];
    let forward = NutritionTotals::from_records(&records);
    records.reverse();
    let reversed = NutritionTotals::from_records(&records);
    assert_eq!(forward, reversed);

    records.swap(0, 1);
    assert_eq!(forward, NutritionTotals::from_records(&records));
}

// === Grouping ===

#[test]
fn group_by_date_partitions_records() {
    let monday = date(2025, 3, 10);
    let tuesday = date(2025, 3, 11);
    let records = vec![
        meal("a", 500, 20.0, monday),
        meal("b", 700, 30.0, tuesday),
        meal("c", 250, 10.0, monday),
    ];

    let grouped = group_by_date(&records);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[&monday].len(), 2);
    assert_eq!(grouped[&tuesday].len(), 1);

    // grouped days reduce to the same totals as the matching slice
    let monday_totals = NutritionTotals::from_records(&grouped[&monday]);
    assert_eq!(monday_totals.calories, 750);
}

#[test]
fn group_by_date_works_for_activities() {
    let monday = date(2025, 3, 10);
    let tuesday = date(2025, 3, 11);
    let records = vec![workout("a", 30, 300, monday), workout("b", 60, 500, tuesday)];

    let grouped = group_by_date(&records);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped[&tuesday][0].calories_burned, 500);
}

#[test]
fn group_by_date_of_empty_input_is_empty() {
    let grouped = group_by_date::<NutritionRecord>(&[]);
    assert!(grouped.is_empty());
}
