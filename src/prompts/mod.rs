//! Prompt templates for the generation pipeline.

pub mod food_photo;
pub mod meal_plan;
pub mod recipe;

pub use food_photo::{render_food_photo_system_prompt, render_food_photo_user_prompt};
pub use meal_plan::{render_meal_plan_system_prompt, render_meal_plan_user_prompt};
pub use recipe::{render_recipe_system_prompt, render_recipe_user_prompt};

use crate::types::{GenerationRequest, MacroTargets};

/// Context lines for the optional request fields. Absent fields produce no
/// line at all, so the prompt never carries empty placeholders.
pub(crate) fn context_lines(request: &GenerationRequest) -> Vec<String> {
    let mut lines = Vec::new();

    if !request.ingredients.is_empty() {
        lines.push(format!(
            "Ingredients to use: {}",
            request.ingredients.join(", ")
        ));
    }
    if let Some(meal_type) = request.meal_type {
        lines.push(format!("Meal type: {}", meal_type.as_str()));
    }
    if let Some(cuisine) = &request.cuisine {
        lines.push(format!("Cuisine: {}", cuisine));
    }
    if !request.dietary_restrictions.is_empty() {
        lines.push(format!(
            "Dietary restrictions: {}",
            request.dietary_restrictions.join(", ")
        ));
    }
    if let Some(minutes) = request.max_time_minutes {
        lines.push(format!("Maximum total time: {} minutes", minutes));
    }
    if let Some(servings) = request.servings {
        lines.push(format!("Servings: {}", servings));
    }
    if let Some(targets) = &request.macro_targets {
        if let Some(formatted) = format_macro_targets(targets) {
            lines.push(format!("Macro targets: {}", formatted));
        }
    }

    lines
}

/// Format the present macro targets as "2000 kcal, 150g protein, ...".
/// Returns None when no target is set.
pub(crate) fn format_macro_targets(targets: &MacroTargets) -> Option<String> {
    let mut parts = Vec::new();

    if let Some(calories) = targets.calories {
        parts.push(format!("{} kcal", calories));
    }
    if let Some(protein) = targets.protein {
        parts.push(format!("{}g protein", protein));
    }
    if let Some(carbs) = targets.carbs {
        parts.push(format!("{}g carbs", carbs));
    }
    if let Some(fat) = targets.fat {
        parts.push(format!("{}g fat", fat));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChefMode, MealType};

    #[test]
    fn test_context_lines_empty_request() {
        let request = GenerationRequest::new(ChefMode::Pantry);
        assert!(context_lines(&request).is_empty());
    }

    #[test]
    fn test_context_lines_skip_absent_fields() {
        let mut request = GenerationRequest::new(ChefMode::Master);
        request.meal_type = Some(MealType::Dinner);
        request.servings = Some(4);

        let lines = context_lines(&request);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Meal type: dinner");
        assert_eq!(lines[1], "Servings: 4");
    }

    #[test]
    fn test_format_macro_targets_partial() {
        let targets = MacroTargets {
            calories: Some(2000),
            protein: Some(150.0),
            carbs: None,
            fat: None,
        };
        assert_eq!(
            format_macro_targets(&targets).unwrap(),
            "2000 kcal, 150g protein"
        );
    }

    #[test]
    fn test_format_macro_targets_all_absent() {
        assert_eq!(format_macro_targets(&MacroTargets::default()), None);
    }
}
