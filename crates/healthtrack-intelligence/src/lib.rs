// ABOUTME: Derived-metrics and aggregation engine for the HealthTrack platform
// ABOUTME: Pure computation over fetched snapshots; no persistence or UI concerns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

#![deny(unsafe_code)]

//! # HealthTrack Intelligence
//!
//! Pure computation over already-fetched health records: unit converters
//! (BMI/BMR), daily aggregation, goal evaluation, and the trailing weekly
//! rollup. Nothing here holds state; every function recomputes its result
//! from the snapshot it is handed, so re-invoking after a data change is
//! always safe.
//!
//! ## Modules
//!
//! - **calculators**: BMI and BMR unit converters
//! - **aggregator**: per-day and per-range totals over record lists
//! - **goals**: target checks, progress ratios, and display bands
//! - **weekly**: trailing 7-day rollup and daily summaries

/// BMI and BMR unit converters
pub mod calculators;

/// Record aggregation into daily/range totals
pub mod aggregator;

/// Goal evaluation: target checks, progress ratios, display bands
pub mod goals;

/// Trailing weekly rollup and daily summaries
pub mod weekly;
