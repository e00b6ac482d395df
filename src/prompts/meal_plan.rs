//! Meal plan generation prompts.

use super::context_lines;
use crate::types::GenerationRequest;

/// Prompt name for logging.
pub const MEAL_PLAN_PROMPT_NAME: &str = "meal_plan";

/// Render the system prompt with the meal plan JSON shape.
pub fn render_meal_plan_system_prompt() -> String {
    r#"You are a meal planning nutritionist. Balance nutrition across every meal of the plan.

Respond with ONLY valid JSON matching this exact shape. No other text.

{
  "totalCalories": number,
  "dailyMacros": {"protein": number, "carbs": number, "fat": number, "fiber": number},
  "meals": [
    {
      "day": number,
      "mealType": "breakfast, lunch, dinner, or snack",
      "totalCalories": number,
      "macros": {"protein": number, "carbs": number, "fat": number, "fiber": number},
      "recipe": {
        "title": "string",
        "description": "string",
        "ingredients": ["string"],
        "instructions": ["string"],
        "prepTimeMinutes": number,
        "cookTimeMinutes": number,
        "servings": number,
        "calories": number,
        "macros": {"protein": number, "carbs": number, "fat": number, "fiber": number},
        "tags": ["string"],
        "difficulty": "easy, medium, or hard",
        "cuisine": "string"
      }
    }
  ],
  "shoppingList": ["string"],
  "tips": "string"
}"#
    .to_string()
}

/// Render the user message. The plan length folds into the task line; the
/// remaining optional fields each get a context line when present.
pub fn render_meal_plan_user_prompt(request: &GenerationRequest) -> String {
    let task = match request.days {
        Some(days) => format!("Create a {}-day meal plan.", days),
        None => "Create a meal plan.".to_string(),
    };

    let mut lines = vec![task];
    lines.extend(context_lines(request));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChefMode, MacroTargets};

    #[test]
    fn test_system_prompt_describes_plan_shape() {
        let prompt = render_meal_plan_system_prompt();
        assert!(prompt.contains("meal planning nutritionist"));
        assert!(prompt.contains("\"shoppingList\""));
        assert!(prompt.contains("\"dailyMacros\""));
        assert!(prompt.contains("\"tips\""));
    }

    #[test]
    fn test_user_prompt_with_days() {
        let mut request = GenerationRequest::new(ChefMode::MealPlan);
        request.days = Some(7);

        let prompt = render_meal_plan_user_prompt(&request);
        assert!(prompt.starts_with("Create a 7-day meal plan."));
    }

    #[test]
    fn test_user_prompt_without_days() {
        let request = GenerationRequest::new(ChefMode::MealPlan);
        let prompt = render_meal_plan_user_prompt(&request);
        assert_eq!(prompt, "Create a meal plan.");
    }

    #[test]
    fn test_user_prompt_includes_macro_targets() {
        let mut request = GenerationRequest::new(ChefMode::MealPlan);
        request.days = Some(3);
        request.macro_targets = Some(MacroTargets {
            calories: Some(1800),
            protein: Some(120.0),
            carbs: None,
            fat: None,
        });

        let prompt = render_meal_plan_user_prompt(&request);
        assert!(prompt.contains("Macro targets: 1800 kcal, 120g protein"));
        assert!(!prompt.contains("carbs"));
    }
}
