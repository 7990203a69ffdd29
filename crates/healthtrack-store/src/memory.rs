// ABOUTME: In-memory reference implementation of HealthDataStore
// ABOUTME: RwLock-guarded per-user maps; document ingestion drops undecodable records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use healthtrack_core::errors::{AppError, AppResult};
use healthtrack_core::models::{ActivityRecord, Goal, NutritionRecord, PhysicalMetrics};

use crate::HealthDataStore;

/// Per-user record collections
#[derive(Debug, Default)]
struct UserData {
    nutrition: HashMap<String, NutritionRecord>,
    activities: HashMap<String, ActivityRecord>,
    goals: HashMap<String, Goal>,
    metrics: Option<PhysicalMetrics>,
}

/// In-memory [`HealthDataStore`] used by tests and local development
///
/// Uses `Arc<RwLock<..>>` so clones share state across async tasks. Every
/// trait operation takes the lock once, which also makes the goal-activation
/// invariant (`set_active_goal`, active `upsert_goal`) atomic: no reader can
/// observe two active goals.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<String, UserData>>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest raw nutrition documents `(id, fields)` for a user
    ///
    /// Documents that fail to decode (unusable date) are dropped silently,
    /// matching the remote store's fail-soft policy. Returns the number of
    /// records kept.
    pub async fn insert_nutrition_documents(
        &self,
        user_id: &str,
        docs: &[(String, Value)],
    ) -> usize {
        let mut users = self.users.write().await;
        let data = users.entry(user_id.to_owned()).or_default();
        let mut kept = 0;
        for (id, doc) in docs {
            if let Some(record) = NutritionRecord::from_document(id.clone(), doc) {
                data.nutrition.insert(record.id.clone(), record);
                kept += 1;
            }
        }
        if kept < docs.len() {
            debug!(
                user_id,
                dropped = docs.len() - kept,
                "dropped undecodable nutrition documents"
            );
        }
        kept
    }

    /// Ingest raw activity documents `(id, fields)` for a user
    ///
    /// Same drop policy as [`Self::insert_nutrition_documents`].
    pub async fn insert_activity_documents(
        &self,
        user_id: &str,
        docs: &[(String, Value)],
    ) -> usize {
        let mut users = self.users.write().await;
        let data = users.entry(user_id.to_owned()).or_default();
        let mut kept = 0;
        for (id, doc) in docs {
            if let Some(record) = ActivityRecord::from_document(id.clone(), doc) {
                data.activities.insert(record.id.clone(), record);
                kept += 1;
            }
        }
        if kept < docs.len() {
            debug!(
                user_id,
                dropped = docs.len() - kept,
                "dropped undecodable activity documents"
            );
        }
        kept
    }
}

#[async_trait]
impl HealthDataStore for MemoryStore {
    async fn nutrition_for_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<NutritionRecord>> {
        let users = self.users.read().await;
        let mut records: Vec<NutritionRecord> = users
            .get(user_id)
            .map(|d| {
                d.nutrition
                    .values()
                    .filter(|r| r.date == date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by(|a, b| a.meal_category.cmp(&b.meal_category).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    async fn nutrition_for_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<NutritionRecord>> {
        let users = self.users.read().await;
        let mut records: Vec<NutritionRecord> = users
            .get(user_id)
            .map(|d| {
                d.nutrition
                    .values()
                    .filter(|r| r.date >= start && r.date <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        // Newest first, matching the presentation layer's expectations
        records.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    async fn activities_for_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<ActivityRecord>> {
        let users = self.users.read().await;
        let mut records: Vec<ActivityRecord> = users
            .get(user_id)
            .map(|d| {
                d.activities
                    .values()
                    .filter(|r| r.date == date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    async fn activities_for_range(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<ActivityRecord>> {
        let users = self.users.read().await;
        let mut records: Vec<ActivityRecord> = users
            .get(user_id)
            .map(|d| {
                d.activities
                    .values()
                    .filter(|r| r.date >= start && r.date <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        Ok(records)
    }

    async fn active_goal(&self, user_id: &str) -> AppResult<Option<Goal>> {
        let users = self.users.read().await;
        Ok(users
            .get(user_id)
            .and_then(|d| d.goals.values().find(|g| g.active).cloned()))
    }

    async fn physical_metrics(&self, user_id: &str) -> AppResult<PhysicalMetrics> {
        let users = self.users.read().await;
        match users.get(user_id).and_then(|d| d.metrics.clone()) {
            Some(metrics) => Ok(metrics),
            None => {
                warn!(user_id, "no stored physical profile, using placeholder");
                Ok(PhysicalMetrics::placeholder())
            }
        }
    }

    async fn upsert_nutrition(&self, user_id: &str, record: NutritionRecord) -> AppResult<()> {
        let mut users = self.users.write().await;
        let data = users.entry(user_id.to_owned()).or_default();
        data.nutrition.insert(record.id.clone(), record);
        Ok(())
    }

    async fn delete_nutrition(&self, user_id: &str, record_id: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        if let Some(data) = users.get_mut(user_id) {
            data.nutrition.remove(record_id);
        }
        Ok(())
    }

    async fn upsert_activity(&self, user_id: &str, record: ActivityRecord) -> AppResult<()> {
        let mut users = self.users.write().await;
        let data = users.entry(user_id.to_owned()).or_default();
        data.activities.insert(record.id.clone(), record);
        Ok(())
    }

    async fn delete_activity(&self, user_id: &str, record_id: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        if let Some(data) = users.get_mut(user_id) {
            data.activities.remove(record_id);
        }
        Ok(())
    }

    async fn upsert_goal(&self, user_id: &str, goal: Goal) -> AppResult<()> {
        goal.validate()?;
        let mut users = self.users.write().await;
        let data = users.entry(user_id.to_owned()).or_default();
        if goal.active {
            for other in data.goals.values_mut() {
                other.active = false;
            }
        }
        data.goals.insert(goal.id.clone(), goal);
        Ok(())
    }

    async fn set_active_goal(&self, user_id: &str, goal_id: &str) -> AppResult<()> {
        let mut users = self.users.write().await;
        let data = users
            .get_mut(user_id)
            .ok_or_else(|| AppError::not_found(format!("user {user_id}")))?;
        if !data.goals.contains_key(goal_id) {
            return Err(AppError::not_found(format!("goal {goal_id}")));
        }
        for (id, goal) in &mut data.goals {
            goal.active = id == goal_id;
        }
        Ok(())
    }

    async fn ensure_default_goal(&self, user_id: &str) -> AppResult<Goal> {
        let mut users = self.users.write().await;
        let data = users.entry(user_id.to_owned()).or_default();
        if data.goals.is_empty() {
            let goal = Goal::default_active();
            data.goals.insert(goal.id.clone(), goal.clone());
            return Ok(goal);
        }
        data.goals
            .values()
            .find(|g| g.active)
            .cloned()
            .ok_or_else(|| AppError::not_found("no active goal"))
    }

    async fn upsert_physical_metrics(
        &self,
        user_id: &str,
        metrics: PhysicalMetrics,
    ) -> AppResult<()> {
        let mut users = self.users.write().await;
        let data = users.entry(user_id.to_owned()).or_default();
        data.metrics = Some(metrics);
        Ok(())
    }
}
