// ABOUTME: Core types and constants for the HealthTrack platform
// ABOUTME: Foundation crate with data models, error handling, and domain constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

#![deny(unsafe_code)]

//! # HealthTrack Core
//!
//! Foundation crate providing the shared data model for the HealthTrack
//! health-tracking platform. This crate is designed to change infrequently so
//! the computation and storage crates can build on a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `AppResult`
//! - **constants**: Domain constants (goal tolerances, default targets)
//! - **models**: Core data models (`NutritionRecord`, `ActivityRecord`,
//!   `Goal`, `PhysicalMetrics`)

/// Unified error handling
pub mod errors;

/// Domain constants organized by concern
pub mod constants;

/// Core data models
pub mod models;
