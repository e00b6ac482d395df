//! Recipe generation prompts for the single-recipe chef modes.

use super::context_lines;
use crate::types::{ChefMode, GenerationRequest};

/// Prompt name for logging.
pub const RECIPE_PROMPT_NAME: &str = "recipe";

/// Persona line for each chef mode.
fn persona(mode: ChefMode) -> &'static str {
    match mode {
        ChefMode::Pantry => {
            "You are a resourceful home chef. Use the available ingredients efficiently and minimize food waste."
        }
        ChefMode::Master => {
            "You are a master chef. Produce recipes with restaurant-quality technique."
        }
        ChefMode::Macros => {
            "You are a nutrition-focused chef. Hit the requested macro targets as precisely as possible."
        }
        ChefMode::Mixology => {
            "You are an expert mixologist. Create cocktail and beverage recipes."
        }
        ChefMode::MealPlan => {
            "You are a meal planning nutritionist. Balance nutrition across every meal of the plan."
        }
    }
}

/// Render the system prompt: the mode's persona plus a literal description
/// of the JSON shape the caller expects back.
pub fn render_recipe_system_prompt(mode: ChefMode) -> String {
    format!(
        r#"{persona}

Respond with ONLY valid JSON matching this exact shape. No other text.

{{
  "title": "string",
  "description": "string",
  "ingredients": ["string"],
  "instructions": ["string"],
  "prepTimeMinutes": number,
  "cookTimeMinutes": number,
  "servings": number,
  "calories": number,
  "macros": {{"protein": number, "carbs": number, "fat": number, "fiber": number}},
  "tags": ["string"],
  "difficulty": "easy, medium, or hard",
  "cuisine": "string"
}}"#,
        persona = persona(mode)
    )
}

/// Render the user message: the task line plus one context line per present
/// optional field.
pub fn render_recipe_user_prompt(request: &GenerationRequest) -> String {
    let mut lines = vec!["Create a recipe.".to_string()];
    lines.extend(context_lines(request));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MealType;

    #[test]
    fn test_pantry_persona_mentions_waste() {
        let prompt = render_recipe_system_prompt(ChefMode::Pantry);
        assert!(prompt.contains("waste"));
        assert!(prompt.contains("prepTimeMinutes"));
        assert!(prompt.contains("\"fiber\": number"));
    }

    #[test]
    fn test_each_mode_has_distinct_persona() {
        let pantry = render_recipe_system_prompt(ChefMode::Pantry);
        let master = render_recipe_system_prompt(ChefMode::Master);
        let macros = render_recipe_system_prompt(ChefMode::Macros);
        let mixology = render_recipe_system_prompt(ChefMode::Mixology);

        assert!(master.contains("restaurant-quality"));
        assert!(macros.contains("macro targets"));
        assert!(mixology.contains("mixologist"));
        assert_ne!(pantry, master);
        assert_ne!(macros, mixology);
    }

    #[test]
    fn test_user_prompt_includes_ingredients() {
        let mut request = GenerationRequest::new(ChefMode::Pantry);
        request.ingredients = vec!["egg".to_string(), "spinach".to_string()];

        let prompt = render_recipe_user_prompt(&request);
        assert!(prompt.contains("egg"));
        assert!(prompt.contains("spinach"));
        assert!(prompt.starts_with("Create a recipe."));
    }

    #[test]
    fn test_user_prompt_omits_absent_fields() {
        let request = GenerationRequest::new(ChefMode::Master);
        let prompt = render_recipe_user_prompt(&request);

        assert_eq!(prompt, "Create a recipe.");
        assert!(!prompt.contains("Cuisine:"));
        assert!(!prompt.contains("undefined"));
    }

    #[test]
    fn test_user_prompt_full_context() {
        let mut request = GenerationRequest::new(ChefMode::Master);
        request.meal_type = Some(MealType::Dinner);
        request.cuisine = Some("italian".to_string());
        request.dietary_restrictions = vec!["vegetarian".to_string()];
        request.max_time_minutes = Some(45);
        request.servings = Some(2);

        let prompt = render_recipe_user_prompt(&request);
        assert!(prompt.contains("Meal type: dinner"));
        assert!(prompt.contains("Cuisine: italian"));
        assert!(prompt.contains("Dietary restrictions: vegetarian"));
        assert!(prompt.contains("Maximum total time: 45 minutes"));
        assert!(prompt.contains("Servings: 2"));
    }
}
