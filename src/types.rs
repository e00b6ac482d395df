//! Request and record types for the generation pipeline.
//!
//! Every record here is plain owned data created fresh per request: nothing
//! is cached, shared, or mutated in place after normalization. Wire names
//! are camelCase to match the consumer-app boundary.

use serde::{Deserialize, Serialize};

/// Persona/strategy selector for a generation request.
///
/// The mode picks the system instruction sent to the completion service;
/// it does not change the response shape except for `MealPlan`, which
/// produces a [`MealPlan`] instead of a single [`GeneratedRecipe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChefMode {
    Pantry,
    Master,
    Macros,
    Mixology,
    MealPlan,
}

impl ChefMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChefMode::Pantry => "pantry",
            ChefMode::Master => "master",
            ChefMode::Macros => "macros",
            ChefMode::Mixology => "mixology",
            ChefMode::MealPlan => "meal-plan",
        }
    }
}

/// Meal slot a recipe is intended for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Drink,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Drink => "drink",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "breakfast" => Some(MealType::Breakfast),
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            "snack" => Some(MealType::Snack),
            "drink" => Some(MealType::Drink),
            _ => None,
        }
    }
}

/// Requested daily macro targets, used by the macros and meal-plan modes.
///
/// All fields are optional; absent targets produce no prompt context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    #[serde(default)]
    pub calories: Option<u32>,
    /// Grams of protein per day.
    #[serde(default)]
    pub protein: Option<f64>,
    /// Grams of carbohydrates per day.
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Grams of fat per day.
    #[serde(default)]
    pub fat: Option<f64>,
}

impl MacroTargets {
    /// True when no target is set at all.
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
    }
}

/// Immutable input value for one generation call.
///
/// Every field beyond the mode is optional: an empty request still builds a
/// valid prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub chef_mode: ChefMode,
    /// Ingredients the model should work with (pantry contents, etc.).
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub meal_type: Option<MealType>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// Upper bound on total cooking time, in minutes.
    #[serde(default)]
    pub max_time_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    /// Number of days a meal plan should span.
    #[serde(default)]
    pub days: Option<u32>,
    #[serde(default)]
    pub macro_targets: Option<MacroTargets>,
}

impl GenerationRequest {
    /// Create an empty request for the given mode.
    pub fn new(chef_mode: ChefMode) -> Self {
        Self {
            chef_mode,
            ingredients: Vec::new(),
            meal_type: None,
            cuisine: None,
            dietary_restrictions: Vec::new(),
            max_time_minutes: None,
            servings: None,
            days: None,
            macro_targets: None,
        }
    }
}

/// Normalized macro breakdown in grams. Always fully populated and
/// non-negative; absent upstream values are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Macros {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

/// A fully-normalized recipe. Never partially well-formed: every list is
/// present (possibly empty), every number is present (possibly zero), and
/// the documented string defaults fill any gap the model left.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratedRecipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub calories: u32,
    pub macros: Macros,
    pub tags: Vec<String>,
    /// One of "easy", "medium", "hard"; defaults to "medium".
    pub difficulty: String,
    /// Defaults to "international".
    pub cuisine: String,
}

/// One planned meal: which day, which slot, the recipe, and the entry's
/// own calorie/macro totals as reported by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealPlanEntry {
    /// 1-based day number; falls back to the entry's position in the plan.
    pub day: u32,
    /// Meal slot name ("breakfast", "lunch", ...); defaults to "meal".
    pub meal_type: String,
    pub total_calories: u32,
    pub macros: Macros,
    pub recipe: GeneratedRecipe,
}

/// A multi-meal plan derived from a single completion call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealPlan {
    /// Calories per day across the plan.
    pub total_calories: u32,
    /// Per-day macro breakdown.
    pub daily_macros: Macros,
    /// Ordered (day, meal slot, recipe) entries.
    pub meals: Vec<MealPlanEntry>,
    /// Flat ingredient strings covering the whole plan.
    pub shopping_list: Vec<String>,
    /// Free-text advice from the model.
    pub tips: String,
}

/// A single food item detected in a photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodItem {
    pub name: String,
    /// Free-text portion description, e.g. "1 cup" or "2 slices".
    pub quantity: String,
    pub calories: u32,
    pub macros: Macros,
}

/// Nutrition estimate for a food photo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodAnalysis {
    pub items: Vec<FoodItem>,
    pub total_calories: u32,
    pub total_macros: Macros,
    /// Model-reported confidence, clamped to [0, 1].
    pub confidence: f64,
}
