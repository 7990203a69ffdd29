// ABOUTME: Goal model holding a user's daily nutrition and activity targets
// ABOUTME: At most one goal is active per user; a default goal is created lazily
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::defaults;
use crate::errors::{AppError, AppResult};

/// A user's daily nutrition and activity targets
///
/// Invariant: at most one goal may be active per user. Activating a goal must
/// atomically deactivate every other goal, which the store enforces as a
/// single transactional operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique identifier
    pub id: String,
    /// Daily calorie target (kcal, positive)
    pub daily_calorie_target: u32,
    /// Daily protein target (grams)
    pub protein_target_g: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_target_g: f64,
    /// Daily fat target (grams)
    pub fat_target_g: f64,
    /// Daily water target (ml)
    pub water_target_ml: u32,
    /// Weight target (kg)
    pub weight_target_kg: f64,
    /// Daily activity-minutes target
    pub activity_minutes_target: u32,
    /// Whether this goal is the user's active goal
    pub active: bool,
}

impl Goal {
    /// The default goal created the first time a user has none
    #[must_use]
    pub fn default_active() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            daily_calorie_target: defaults::DAILY_CALORIE_TARGET,
            protein_target_g: defaults::PROTEIN_TARGET_G,
            carbs_target_g: defaults::CARBS_TARGET_G,
            fat_target_g: defaults::FAT_TARGET_G,
            water_target_ml: defaults::WATER_TARGET_ML,
            weight_target_kg: defaults::WEIGHT_TARGET_KG,
            activity_minutes_target: defaults::ACTIVITY_MINUTES_TARGET,
            active: true,
        }
    }

    /// Validate field constraints before the goal is persisted
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when the calorie target is zero or a
    /// macro/weight target is negative.
    pub fn validate(&self) -> AppResult<()> {
        if self.daily_calorie_target == 0 {
            return Err(AppError::invalid_input("daily calorie target must be positive"));
        }
        if self.protein_target_g < 0.0 || self.carbs_target_g < 0.0 || self.fat_target_g < 0.0 {
            return Err(AppError::invalid_input("macro targets must be non-negative"));
        }
        Ok(())
    }
}
