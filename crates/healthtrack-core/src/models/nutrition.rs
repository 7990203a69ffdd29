// ABOUTME: Nutrition tracking models for food intake logging
// ABOUTME: NutritionRecord and MealCategory definitions with lossy document decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrack

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::document::{date_field, f64_field, str_field, u32_field};

/// Category of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealCategory {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealCategory {
    /// Parse meal category from string
    ///
    /// Unknown values map to `Snack`; stored documents carry free-form
    /// strings and a wrong category must not drop the record.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

/// One logged meal
///
/// Immutable once created; an edit is a full replacement saved under the same
/// identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionRecord {
    /// Unique identifier
    pub id: String,
    /// Food name as entered by the user
    pub food_name: String,
    /// Meal category
    pub meal_category: MealCategory,
    /// Calories consumed (kcal)
    pub calories: u32,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Serving size (grams)
    pub serving_size_g: u32,
    /// Calendar date the meal was logged for (no time component)
    pub date: NaiveDate,
}

impl NutritionRecord {
    /// Decode a record from a loosely-typed store document
    ///
    /// Missing scalar fields default to zero or empty. A missing or
    /// unparsable date makes the whole record unusable for aggregation, so
    /// the document is dropped (`None`) and logged at debug level.
    #[must_use]
    pub fn from_document(id: impl Into<String>, doc: &Value) -> Option<Self> {
        let id = id.into();
        let Some(date) = date_field(doc, "date") else {
            debug!(record_id = %id, "dropping nutrition document with unusable date");
            return None;
        };

        Some(Self {
            id,
            food_name: str_field(doc, "foodName"),
            meal_category: MealCategory::from_str_lossy(&str_field(doc, "mealType")),
            calories: u32_field(doc, "calories"),
            protein_g: f64_field(doc, "protein"),
            carbs_g: f64_field(doc, "carbs"),
            fat_g: f64_field(doc, "fat"),
            serving_size_g: u32_field(doc, "servingSize"),
            date,
        })
    }
}
