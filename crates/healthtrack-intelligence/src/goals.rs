// ABOUTME: Goal evaluation: target checks, clamped progress ratios, display bands
// ABOUTME: Calorie targets use symmetric tolerance bands, macro targets floor semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

//! Goal evaluation
//!
//! Compares aggregated totals against goal targets. Calorie-like targets are
//! "met" within a symmetric tolerance band; the tolerance is an independent
//! constant per call site ([`goals::DAILY_CALORIE_TOLERANCE`] for the daily
//! check, [`goals::WEEKLY_ON_TRACK_TOLERANCE`] for the weekly one). Macro
//! targets are floor checks.

use serde::{Deserialize, Serialize};

use healthtrack_core::constants::goals;

/// How a target is compared against the current total
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TargetKind {
    /// Calorie-like target: met within `target ± tolerance`
    Calories {
        /// Symmetric tolerance band (kcal)
        tolerance: u32,
    },
    /// Macro target (protein/carbs/fat): met when `current >= target`
    Macro,
}

/// Whether the current total meets the target under the given semantics
#[must_use]
pub fn is_met(current: f64, target: f64, kind: TargetKind) -> bool {
    match kind {
        TargetKind::Calories { tolerance } => (current - target).abs() <= f64::from(tolerance),
        TargetKind::Macro => current >= target,
    }
}

/// Progress toward a target, clamped to `[0, 1.5]`
///
/// A target at or below zero cannot produce a meaningful ratio; the defined
/// fallback is zero progress rather than a division fault.
#[must_use]
pub fn progress_ratio(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target).clamp(0.0, goals::PROGRESS_RATIO_MAX)
}

/// Display band for a progress ratio
///
/// Used uniformly wherever progress coloring or labeling is needed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// Ratio below 0.8
    Under,
    /// Ratio in `[0.8, 1.0)`
    Near,
    /// Ratio at or above 1.0
    Over,
}

impl ProgressBand {
    /// Band for a (already clamped or raw) progress ratio
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio < goals::NEAR_BAND_LOWER {
            Self::Under
        } else if ratio < goals::OVER_BAND_LOWER {
            Self::Near
        } else {
            Self::Over
        }
    }
}
