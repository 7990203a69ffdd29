// ABOUTME: Domain constants organized by concern
// ABOUTME: Goal tolerances, progress bands, and default targets for HealthTrack
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

//! Constants module
//!
//! Pure data constants grouped by domain rather than kept in one large file.

/// Goal evaluation tolerances and progress-band thresholds
pub mod goals {
    /// Symmetric tolerance for the daily calorie target (kcal)
    pub const DAILY_CALORIE_TOLERANCE: u32 = 100;

    /// Symmetric tolerance for the weekly "on track" net-calorie check (kcal)
    pub const WEEKLY_ON_TRACK_TOLERANCE: u32 = 200;

    /// Upper clamp for progress ratios (150% of target)
    pub const PROGRESS_RATIO_MAX: f64 = 1.5;

    /// Ratios below this are "under" the goal
    pub const NEAR_BAND_LOWER: f64 = 0.8;

    /// Ratios at or above this are "over" the goal
    pub const OVER_BAND_LOWER: f64 = 1.0;
}

/// Default goal targets and the placeholder physical profile
pub mod defaults {
    /// Default daily calorie target (kcal)
    pub const DAILY_CALORIE_TARGET: u32 = 2000;
    /// Default daily protein target (grams)
    pub const PROTEIN_TARGET_G: f64 = 150.0;
    /// Default daily carbohydrate target (grams)
    pub const CARBS_TARGET_G: f64 = 250.0;
    /// Default daily fat target (grams)
    pub const FAT_TARGET_G: f64 = 65.0;
    /// Default daily water target (ml)
    pub const WATER_TARGET_ML: u32 = 2000;
    /// Default weight target (kg)
    pub const WEIGHT_TARGET_KG: f64 = 70.0;
    /// Default daily activity-minutes target
    pub const ACTIVITY_MINUTES_TARGET: u32 = 30;

    /// Placeholder profile weight (kg), used when no profile is stored
    pub const PLACEHOLDER_WEIGHT_KG: f64 = 65.0;
    /// Placeholder profile height (cm)
    pub const PLACEHOLDER_HEIGHT_CM: f64 = 170.0;
    /// Placeholder profile age (years)
    pub const PLACEHOLDER_AGE_YEARS: u32 = 25;
    /// Placeholder reported daily calories (kcal)
    pub const PLACEHOLDER_DAILY_CALORIES: u32 = 2200;
}

/// Time windows used by rollups
pub mod windows {
    /// Length of the trailing weekly window, in days
    pub const WEEKLY_WINDOW_DAYS: u32 = 7;
}
