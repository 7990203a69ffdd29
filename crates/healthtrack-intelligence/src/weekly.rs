// ABOUTME: Trailing 7-day rollup and single-day summaries over store snapshots
// ABOUTME: Per-day series, average calories, days-on-track count, macro shares
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

//! Weekly rollup
//!
//! Composes the aggregator over the trailing 7-day window `[today-6, today]`.
//! Each day is fetched and reduced independently; the rollup holds no state
//! and is recomputed from scratch on every invocation, so it can be re-run
//! whenever the underlying records change.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use healthtrack_core::constants::{goals, windows};
use healthtrack_core::errors::AppResult;
use healthtrack_core::models::Goal;
use healthtrack_store::HealthDataStore;

use crate::aggregator::{ActivityTotals, NutritionTotals};

/// One day of the weekly series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DaySummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Calories consumed (kcal)
    pub calories_consumed: u32,
    /// Calories burned via activity (kcal)
    pub calories_burned: u32,
    /// Protein consumed (grams)
    pub protein_g: f64,
    /// Carbohydrates consumed (grams)
    pub carbs_g: f64,
    /// Fat consumed (grams)
    pub fat_g: f64,
    /// Activity minutes logged
    pub activity_minutes: u32,
    /// Number of logged workouts
    pub workouts: usize,
}

impl DaySummary {
    /// Net calories: consumed minus burned (may be negative)
    #[must_use]
    pub fn net_calories(&self) -> i64 {
        i64::from(self.calories_consumed) - i64::from(self.calories_burned)
    }
}

/// Weekly macro totals with each macro's share of the combined total
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroBreakdown {
    /// Total protein (grams)
    pub protein_g: f64,
    /// Total carbohydrates (grams)
    pub carbs_g: f64,
    /// Total fat (grams)
    pub fat_g: f64,
    /// Protein share of the combined macro total (percent)
    pub protein_share_pct: f64,
    /// Carbohydrate share of the combined macro total (percent)
    pub carbs_share_pct: f64,
    /// Fat share of the combined macro total (percent)
    pub fat_share_pct: f64,
}

impl MacroBreakdown {
    /// Build a breakdown from macro totals
    ///
    /// A zero combined total reports 0% for every macro instead of dividing.
    #[must_use]
    pub fn from_totals(protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        let total = protein_g + carbs_g + fat_g;
        let share = |macro_g: f64| if total > 0.0 { macro_g / total * 100.0 } else { 0.0 };
        Self {
            protein_g,
            carbs_g,
            fat_g,
            protein_share_pct: share(protein_g),
            carbs_share_pct: share(carbs_g),
            fat_share_pct: share(fat_g),
        }
    }
}

/// Aggregated view of the trailing 7-day window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklySummary {
    /// Per-day series, oldest first
    pub days: Vec<DaySummary>,
    /// Mean calories consumed across the window
    pub average_calories: f64,
    /// Days whose net calories fall within the on-track band around the goal
    pub days_on_track: usize,
    /// Weekly macro totals and shares
    pub macros: MacroBreakdown,
    /// Workouts logged across the window
    pub total_workouts: usize,
    /// Activity minutes logged across the window
    pub total_activity_minutes: u32,
    /// Calories burned across the window
    pub total_calories_burned: u32,
}

/// Single-day aggregate combining nutrition and activity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Nutrition totals for the day
    pub nutrition: NutritionTotals,
    /// Activity totals for the day
    pub activity: ActivityTotals,
    /// Net calories: consumed minus burned (may be negative)
    pub net_calories: i64,
}

/// Aggregate one day's records into a [`DailySummary`]
///
/// # Errors
/// Propagates store fetch failures.
pub async fn daily_summary(
    store: &dyn HealthDataStore,
    user_id: &str,
    date: NaiveDate,
) -> AppResult<DailySummary> {
    let nutrition = NutritionTotals::from_records(&store.nutrition_for_date(user_id, date).await?);
    let activity = ActivityTotals::from_records(&store.activities_for_date(user_id, date).await?);
    Ok(DailySummary {
        date,
        nutrition,
        activity,
        net_calories: i64::from(nutrition.calories) - i64::from(activity.calories_burned),
    })
}

/// Roll up the trailing 7-day window ending at `today`
///
/// A day is on track when its net calories fall within
/// `goal ± WEEKLY_ON_TRACK_TOLERANCE`.
///
/// # Errors
/// Propagates store fetch failures.
pub async fn weekly_rollup(
    store: &dyn HealthDataStore,
    user_id: &str,
    today: NaiveDate,
    goal: &Goal,
) -> AppResult<WeeklySummary> {
    let window = windows::WEEKLY_WINDOW_DAYS;
    let mut days = Vec::with_capacity(window as usize);

    for offset in (0..i64::from(window)).rev() {
        let date = today - Duration::days(offset);
        let nutrition =
            NutritionTotals::from_records(&store.nutrition_for_date(user_id, date).await?);
        let activity =
            ActivityTotals::from_records(&store.activities_for_date(user_id, date).await?);
        days.push(DaySummary {
            date,
            calories_consumed: nutrition.calories,
            calories_burned: activity.calories_burned,
            protein_g: nutrition.protein_g,
            carbs_g: nutrition.carbs_g,
            fat_g: nutrition.fat_g,
            activity_minutes: activity.duration_minutes,
            workouts: activity.workouts,
        });
    }

    let average_calories = days
        .iter()
        .map(|d| f64::from(d.calories_consumed))
        .sum::<f64>()
        / f64::from(window);

    let target = i64::from(goal.daily_calorie_target);
    let tolerance = i64::from(goals::WEEKLY_ON_TRACK_TOLERANCE);
    let days_on_track = days
        .iter()
        .filter(|d| (target - tolerance..=target + tolerance).contains(&d.net_calories()))
        .count();

    let macros = MacroBreakdown::from_totals(
        days.iter().map(|d| d.protein_g).sum(),
        days.iter().map(|d| d.carbs_g).sum(),
        days.iter().map(|d| d.fat_g).sum(),
    );

    let summary = WeeklySummary {
        total_workouts: days.iter().map(|d| d.workouts).sum(),
        total_activity_minutes: days.iter().map(|d| d.activity_minutes).sum(),
        total_calories_burned: days.iter().map(|d| d.calories_burned).sum(),
        days,
        average_calories,
        days_on_track,
        macros,
    };

    debug!(
        user_id,
        %today,
        days_on_track = summary.days_on_track,
        average_calories = summary.average_calories,
        "computed weekly rollup"
    );

    Ok(summary)
}
