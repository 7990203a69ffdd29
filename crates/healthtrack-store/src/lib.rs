// ABOUTME: Data-access seam for the HealthTrack platform
// ABOUTME: HealthDataStore trait (pull-based snapshot fetches) plus MemoryStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

#![deny(unsafe_code)]

//! # HealthTrack Store
//!
//! The data-access collaborator seam. The computation crates only ever ask a
//! store for the *current snapshot* of records matching a date or inclusive
//! date range; any push/streaming behavior a real backend offers (listeners,
//! change feeds) stays behind this trait — consumers simply re-fetch.
//!
//! [`MemoryStore`] is the in-process reference implementation used by tests.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::NaiveDate;

use healthtrack_core::errors::AppResult;
use healthtrack_core::models::{ActivityRecord, Goal, NutritionRecord, PhysicalMetrics};

/// Pull-based data access for a user's health records
///
/// # Shared Contract
///
/// - All queries are scoped by `user_id`; records belong to exactly one user.
/// - Date ranges are inclusive on both endpoints.
/// - An edit is a full replacement saved under the same record id.
/// - Failures surface as `AppError`; absence is `Ok(None)` / empty vectors,
///   never an error.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` for concurrent access across async
/// tasks.
#[async_trait]
pub trait HealthDataStore: Send + Sync {
    /// Nutrition records logged for exactly `date`
    async fn nutrition_for_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<NutritionRecord>>;

    /// Nutrition records logged within `[start, end]` inclusive
    async fn nutrition_for_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<NutritionRecord>>;

    /// Activity records logged for exactly `date`
    async fn activities_for_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<ActivityRecord>>;

    /// Activity records logged within `[start, end]` inclusive
    async fn activities_for_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ActivityRecord>>;

    /// The user's active goal, if any
    async fn active_goal(&self, user_id: &str) -> AppResult<Option<Goal>>;

    /// The user's physical profile
    ///
    /// Falls back to [`PhysicalMetrics::placeholder`] when no profile is
    /// stored, so callers always receive a usable profile.
    async fn physical_metrics(&self, user_id: &str) -> AppResult<PhysicalMetrics>;

    /// Insert or fully replace a nutrition record
    async fn upsert_nutrition(&self, user_id: &str, record: NutritionRecord) -> AppResult<()>;

    /// Delete a nutrition record by id
    async fn delete_nutrition(&self, user_id: &str, record_id: &str) -> AppResult<()>;

    /// Insert or fully replace an activity record
    async fn upsert_activity(&self, user_id: &str, record: ActivityRecord) -> AppResult<()>;

    /// Delete an activity record by id
    async fn delete_activity(&self, user_id: &str, record_id: &str) -> AppResult<()>;

    /// Insert or fully replace a goal
    ///
    /// When the goal is active, every other goal is deactivated in the same
    /// operation, preserving the at-most-one-active invariant.
    async fn upsert_goal(&self, user_id: &str, goal: Goal) -> AppResult<()>;

    /// Atomically make `goal_id` the single active goal
    ///
    /// # Errors
    /// Returns `AppError::NotFound` when no goal with that id exists.
    async fn set_active_goal(&self, user_id: &str, goal_id: &str) -> AppResult<()>;

    /// Create the default goal if the user has none, returning the active goal
    async fn ensure_default_goal(&self, user_id: &str) -> AppResult<Goal>;

    /// Insert or fully replace the user's physical profile
    async fn upsert_physical_metrics(
        &self,
        user_id: &str,
        metrics: PhysicalMetrics,
    ) -> AppResult<()>;
}
