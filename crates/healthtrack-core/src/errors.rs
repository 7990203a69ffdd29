// ABOUTME: Unified error type and result alias for the HealthTrack crates
// ABOUTME: Thin thiserror enum; computation stays total, only stores surface errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

//! Unified error handling
//!
//! The aggregation and evaluation functions are total over their inputs and
//! use `Option`/defined fallbacks for degenerate numbers. `AppError` exists
//! for the data-access seam, where connectivity and consistency failures are
//! allowed to surface.

use thiserror::Error;

/// Result alias used across the HealthTrack crates
pub type AppResult<T> = Result<T, AppError>;

/// Application error for the data-access seam
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// The caller supplied an invalid value
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A referenced entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// The backing store failed
    #[error("storage error: {0}")]
    Storage(String),

    /// An unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Invalid caller-supplied value
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Missing entity
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Backing-store failure
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Unexpected internal failure
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
