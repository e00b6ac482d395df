//! Response normalization: coercing loose model output into fixed shapes.
//!
//! The completion service returns free text that should contain one JSON
//! value, often wrapped in markdown fences or prose. This module extracts
//! that value and repairs it field by field, so callers always receive a
//! fully-populated record. The only hard failure is text with no parseable
//! JSON at all.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::GenerateError;
use crate::types::{
    FoodAnalysis, FoodItem, GeneratedRecipe, GenerationRequest, Macros, MealPlan, MealPlanEntry,
};

/// Extract the first JSON value embedded in free text.
///
/// Takes the first `{` or `[`, whichever comes earlier, through the last
/// occurrence of the matching close bracket. This is a compatibility shim
/// for providers without a JSON response mode and breaks on JSON examples
/// embedded inside prose; request `json_response` where supported.
pub fn extract_json(text: &str) -> Result<Value, GenerateError> {
    let object_start = text.find('{');
    let array_start = text.find('[');

    let (start, close) = match (object_start, array_start) {
        (Some(obj), Some(arr)) if arr < obj => (arr, ']'),
        (Some(obj), _) => (obj, '}'),
        (None, Some(arr)) => (arr, ']'),
        (None, None) => {
            return Err(GenerateError::MalformedResponse(
                "no JSON object or array in response".to_string(),
            ))
        }
    };

    let end = text
        .rfind(close)
        .filter(|&end| end > start)
        .ok_or_else(|| {
            GenerateError::MalformedResponse(format!("no closing '{}' in response", close))
        })?;

    serde_json::from_str(&text[start..=end])
        .map_err(|e| GenerateError::MalformedResponse(e.to_string()))
}

/// Normalize a recipe response.
///
/// Missing servings and cook time fall back to what the request asked for;
/// everything else takes the documented defaults.
pub fn normalize_recipe(
    raw: &str,
    request: &GenerationRequest,
) -> Result<GeneratedRecipe, GenerateError> {
    let value = extract_json(raw)?;
    Ok(recipe_from_value(
        Some(&value),
        request.servings.unwrap_or(0),
        request.max_time_minutes.unwrap_or(0),
    ))
}

/// Normalize a meal plan response.
///
/// Accepts either the full plan object or a bare array of meal entries.
/// When the plan-level totals are absent they are derived from the entries.
pub fn normalize_meal_plan(raw: &str) -> Result<MealPlan, GenerateError> {
    let value = extract_json(raw)?;

    let (fields, meals) = match &value {
        Value::Array(items) => (None, entries_from_values(items)),
        Value::Object(fields) => {
            let meals = match fields.get("meals") {
                Some(Value::Array(items)) => entries_from_values(items),
                _ => Vec::new(),
            };
            (Some(fields), meals)
        }
        _ => (None, Vec::new()),
    };

    let (derived_calories, derived_macros) = derive_daily_totals(&meals);

    let total_calories = fields
        .and_then(|f| numeric(f.get("totalCalories")))
        .unwrap_or(derived_calories);
    let daily_macros = match fields.and_then(|f| f.get("dailyMacros")) {
        Some(value @ Value::Object(_)) => coerce_macros(Some(value)),
        _ => fields
            .and_then(flat_total_macros)
            .unwrap_or(derived_macros),
    };

    Ok(MealPlan {
        total_calories,
        daily_macros,
        meals,
        shopping_list: coerce_string_list(fields.and_then(|f| f.get("shoppingList"))),
        tips: tips_text(fields.and_then(|f| f.get("tips"))),
    })
}

/// Normalize a food photo analysis response.
///
/// Accepts either the full analysis object or a bare array of food items.
/// Absent totals are derived by summing the items; confidence is clamped
/// to [0, 1].
pub fn normalize_food_analysis(raw: &str) -> Result<FoodAnalysis, GenerateError> {
    let value = extract_json(raw)?;

    let (fields, items) = match &value {
        Value::Array(raw_items) => (None, raw_items.iter().map(food_item_from_value).collect()),
        Value::Object(fields) => {
            let items = match fields.get("items") {
                Some(Value::Array(raw_items)) => {
                    raw_items.iter().map(food_item_from_value).collect()
                }
                _ => Vec::new(),
            };
            (Some(fields), items)
        }
        _ => (None, Vec::new()),
    };

    let (derived_calories, derived_macros) = sum_item_totals(&items);

    let total_calories = fields
        .and_then(|f| numeric(f.get("totalCalories")))
        .unwrap_or(derived_calories);
    let total_macros = match fields.and_then(|f| f.get("totalMacros")) {
        Some(value @ Value::Object(_)) => coerce_macros(Some(value)),
        _ => derived_macros,
    };
    let confidence = fields
        .and_then(|f| float(f.get("confidence")))
        .unwrap_or(0.0)
        .clamp(0.0, 1.0);

    Ok(FoodAnalysis {
        items,
        total_calories,
        total_macros,
        confidence,
    })
}

fn recipe_from_value(
    value: Option<&Value>,
    servings_fallback: u32,
    cook_time_fallback: u32,
) -> GeneratedRecipe {
    let empty = Map::new();
    let fields = value.and_then(Value::as_object).unwrap_or(&empty);

    GeneratedRecipe {
        title: coerce_string(fields.get("title"), "Untitled Recipe"),
        description: coerce_string(fields.get("description"), ""),
        ingredients: coerce_string_list(fields.get("ingredients")),
        instructions: coerce_string_list(fields.get("instructions")),
        prep_time_minutes: coerce_u32(fields.get("prepTimeMinutes"), 0),
        cook_time_minutes: coerce_u32(fields.get("cookTimeMinutes"), cook_time_fallback),
        servings: coerce_u32(fields.get("servings"), servings_fallback),
        calories: coerce_u32(fields.get("calories"), 0),
        macros: coerce_macros(fields.get("macros")),
        tags: coerce_string_list(fields.get("tags")),
        difficulty: coerce_string(fields.get("difficulty"), "medium"),
        cuisine: coerce_string(fields.get("cuisine"), "international"),
    }
}

fn entries_from_values(items: &[Value]) -> Vec<MealPlanEntry> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| entry_from_value(item, position))
        .collect()
}

fn entry_from_value(value: &Value, position: usize) -> MealPlanEntry {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);

    // Entries without a nested recipe object carry the recipe fields inline.
    let recipe_value = fields.get("recipe").unwrap_or(value);

    MealPlanEntry {
        day: coerce_u32(fields.get("day"), position as u32 + 1),
        meal_type: coerce_string(fields.get("mealType"), "meal"),
        total_calories: coerce_u32(fields.get("totalCalories"), 0),
        macros: entry_macros(fields),
        recipe: recipe_from_value(Some(recipe_value), 0, 0),
    }
}

/// Entry macros come either as a nested object or as the flat
/// totalProtein/totalCarbs/totalFat/totalFiber keys.
fn entry_macros(fields: &Map<String, Value>) -> Macros {
    if fields.contains_key("macros") {
        return coerce_macros(fields.get("macros"));
    }
    flat_total_macros(fields).unwrap_or_default()
}

/// Reads `totalProtein`-style keys written next to the calorie total
/// instead of inside a nested macros object. Returns `None` when none
/// of the keys are present so callers can fall back to derived totals.
fn flat_total_macros(fields: &Map<String, Value>) -> Option<Macros> {
    const KEYS: [&str; 4] = ["totalProtein", "totalCarbs", "totalFat", "totalFiber"];
    if !KEYS.iter().any(|key| fields.contains_key(*key)) {
        return None;
    }
    Some(Macros {
        protein: coerce_f64(fields.get("totalProtein")),
        carbs: coerce_f64(fields.get("totalCarbs")),
        fat: coerce_f64(fields.get("totalFat")),
        fiber: coerce_f64(fields.get("totalFiber")),
    })
}

fn derive_daily_totals(meals: &[MealPlanEntry]) -> (u32, Macros) {
    if meals.is_empty() {
        return (0, Macros::default());
    }

    let day_count = meals
        .iter()
        .map(|m| m.day)
        .collect::<HashSet<_>>()
        .len()
        .max(1) as f64;

    let calories: f64 = meals.iter().map(|m| f64::from(m.total_calories)).sum();
    let totals = macro_sum(meals.iter().map(|m| m.macros));
    let macros = Macros {
        protein: totals.protein / day_count,
        carbs: totals.carbs / day_count,
        fat: totals.fat / day_count,
        fiber: totals.fiber / day_count,
    };

    ((calories / day_count).round() as u32, macros)
}

fn food_item_from_value(value: &Value) -> FoodItem {
    let empty = Map::new();
    let fields = value.as_object().unwrap_or(&empty);

    FoodItem {
        name: coerce_string(fields.get("name"), "unknown food"),
        quantity: coerce_string(fields.get("quantity"), "1 serving"),
        calories: coerce_u32(fields.get("calories"), 0),
        macros: coerce_macros(fields.get("macros")),
    }
}

fn sum_item_totals(items: &[FoodItem]) -> (u32, Macros) {
    // Sum in f64; the cast back to u32 saturates instead of wrapping.
    let calories: f64 = items.iter().map(|i| f64::from(i.calories)).sum();
    let macros = macro_sum(items.iter().map(|i| i.macros));
    (calories.round() as u32, macros)
}

/// Field-wise macro sum, saturating at f64::MAX to keep totals finite.
fn macro_sum(values: impl Iterator<Item = Macros>) -> Macros {
    values.fold(Macros::default(), |acc, m| Macros {
        protein: (acc.protein + m.protein).min(f64::MAX),
        carbs: (acc.carbs + m.carbs).min(f64::MAX),
        fat: (acc.fat + m.fat).min(f64::MAX),
        fiber: (acc.fiber + m.fiber).min(f64::MAX),
    })
}

fn coerce_string(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Non-array values become an empty list, and non-string elements are
/// dropped rather than stringified.
fn coerce_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Numbers and numeric strings parse; anything else is None.
fn float(value: Option<&Value>) -> Option<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            trimmed.parse().ok().or_else(|| leading_number(trimmed))
        }
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

/// Salvages the numeric prefix of strings like "450 kcal" or "30 minutes".
fn leading_number(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().ok()
}

fn numeric(value: Option<&Value>) -> Option<u32> {
    float(value).map(|f| f.max(0.0).round() as u32)
}

fn coerce_u32(value: Option<&Value>, fallback: u32) -> u32 {
    numeric(value).unwrap_or(fallback)
}

fn coerce_f64(value: Option<&Value>) -> f64 {
    float(value).map(|f| f.max(0.0)).unwrap_or(0.0)
}

fn coerce_macros(value: Option<&Value>) -> Macros {
    match value.and_then(Value::as_object) {
        Some(fields) => Macros {
            protein: coerce_f64(fields.get("protein")),
            carbs: coerce_f64(fields.get("carbs")),
            fat: coerce_f64(fields.get("fat")),
            fiber: coerce_f64(fields.get("fiber")),
        },
        None => Macros::default(),
    }
}

fn tips_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}
