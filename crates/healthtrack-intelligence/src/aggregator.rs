// ABOUTME: Record aggregation reducing nutrition/activity lists into totals
// ABOUTME: Pure sums plus date partitioning; empty input yields all-zero totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

//! Record aggregation
//!
//! Inputs are record slices already filtered to a date or range by the store.
//! Totals are plain sums, so aggregation is order-independent and re-running
//! it on a fresh snapshot is always safe. Malformed records never arrive
//! here: they are dropped at document-decode time.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use healthtrack_core::models::{ActivityRecord, NutritionRecord};

/// A record carrying the calendar date it was logged for
pub trait DatedRecord {
    /// Calendar date of the record
    fn date(&self) -> NaiveDate;
}

impl DatedRecord for NutritionRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DatedRecord for ActivityRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Partition records by calendar date
///
/// Insertion order within a day is not significant; downstream consumers only
/// sum.
#[must_use]
pub fn group_by_date<R: DatedRecord + Clone>(records: &[R]) -> BTreeMap<NaiveDate, Vec<R>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<R>> = BTreeMap::new();
    for record in records {
        by_date.entry(record.date()).or_default().push(record.clone());
    }
    by_date
}

/// Summed nutrition for a day or range
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionTotals {
    /// Total calories consumed (kcal)
    pub calories: u32,
    /// Total protein (grams)
    pub protein_g: f64,
    /// Total carbohydrates (grams)
    pub carbs_g: f64,
    /// Total fat (grams)
    pub fat_g: f64,
}

impl NutritionTotals {
    /// Reduce a record list into totals; an empty list yields all zeros
    #[must_use]
    pub fn from_records(records: &[NutritionRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.calories += r.calories;
            acc.protein_g += r.protein_g;
            acc.carbs_g += r.carbs_g;
            acc.fat_g += r.fat_g;
            acc
        })
    }
}

/// Summed activity for a day or range
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityTotals {
    /// Total duration (minutes)
    pub duration_minutes: u32,
    /// Total calories burned (kcal)
    pub calories_burned: u32,
    /// Number of logged workouts
    pub workouts: usize,
}

impl ActivityTotals {
    /// Reduce a record list into totals; an empty list yields all zeros
    #[must_use]
    pub fn from_records(records: &[ActivityRecord]) -> Self {
        records.iter().fold(Self::default(), |mut acc, r| {
            acc.duration_minutes += r.duration_minutes;
            acc.calories_burned += r.calories_burned;
            acc.workouts += 1;
            acc
        })
    }
}
