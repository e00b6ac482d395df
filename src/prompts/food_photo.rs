//! Food photo analysis prompts.

/// Prompt name for logging.
pub const FOOD_PHOTO_PROMPT_NAME: &str = "food_photo";

/// Render the system prompt with the analysis JSON shape.
pub fn render_food_photo_system_prompt() -> String {
    r#"You are a nutrition analyst. Estimate the nutritional contents of the food shown in a photo.

Respond with ONLY valid JSON matching this exact shape. No other text.

{
  "items": [
    {
      "name": "string",
      "quantity": "string, e.g. '1 cup' or '2 slices'",
      "calories": number,
      "macros": {"protein": number, "carbs": number, "fat": number, "fiber": number}
    }
  ],
  "totalCalories": number,
  "totalMacros": {"protein": number, "carbs": number, "fat": number, "fiber": number},
  "confidence": number between 0 and 1
}"#
    .to_string()
}

/// Render the user message sent alongside the image.
pub fn render_food_photo_user_prompt() -> String {
    "Analyze the food in this photo. List every item you can identify with its estimated portion and nutrition.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_describes_analysis_shape() {
        let prompt = render_food_photo_system_prompt();
        assert!(prompt.contains("nutrition analyst"));
        assert!(prompt.contains("\"confidence\""));
        assert!(prompt.contains("\"totalMacros\""));
    }

    #[test]
    fn test_user_prompt_asks_for_items() {
        let prompt = render_food_photo_user_prompt();
        assert!(prompt.contains("Analyze the food"));
    }
}
