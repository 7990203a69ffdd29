// ABOUTME: Core data models and re-exports for the HealthTrack platform
// ABOUTME: NutritionRecord, ActivityRecord, Goal, PhysicalMetrics and their enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

//! # Data Models
//!
//! Core data structures shared by the intelligence and store crates.
//!
//! ## Design Principles
//!
//! - **Store Agnostic**: models decode from loosely-typed documents the way
//!   the remote document store returns them, but carry strong types afterwards
//! - **Fail Soft**: a document that cannot be decoded is dropped, never fatal
//! - **Serializable**: all models support JSON round-trips via serde
//!
//! ## Core Models
//!
//! - `NutritionRecord`: one logged meal
//! - `ActivityRecord`: one logged physical activity
//! - `Goal`: a user's nutrition/activity targets (at most one active)
//! - `PhysicalMetrics`: weight/height/age profile feeding BMI/BMR

mod activity;
mod document;
mod goal;
mod metrics;
mod nutrition;

pub use activity::{ActivityRecord, ActivityType, Intensity};
pub use goal::Goal;
pub use metrics::{PhysicalMetrics, Sex};
pub use nutrition::{MealCategory, NutritionRecord};
