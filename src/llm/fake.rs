//! Fake completion provider for testing.
//!
//! This provider returns deterministic responses based on prompt matching,
//! allowing tests to run without network access or API costs.

use super::{CompletionProvider, CompletionRequest, LlmError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake completion provider for testing.
///
/// Responses are matched by checking if the prompt (system and user text
/// combined) contains a registered substring. If no match is found, returns
/// a default response or error.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
        }
    }
}

#[allow(dead_code)]
impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Create a FakeProvider with standard responses for generation testing.
    ///
    /// The recipe response is wrapped in markdown prose to exercise the
    /// JSON extraction path.
    pub fn with_generation_responses() -> Self {
        let mut provider = Self::new();

        provider.add_response(
            "Create a recipe",
            r#"Here is your recipe:
```json
{
    "title": "Garlic Butter Pasta",
    "description": "Quick weeknight pasta with a garlic butter sauce.",
    "ingredients": ["200g spaghetti", "3 cloves garlic", "2 tbsp butter"],
    "instructions": ["Boil the pasta.", "Melt butter and fry garlic.", "Toss together."],
    "prepTimeMinutes": 5,
    "cookTimeMinutes": 15,
    "servings": 2,
    "calories": 520,
    "macros": {"protein": 14.0, "carbs": 72.0, "fat": 18.0, "fiber": 3.0},
    "tags": ["pasta", "quick"],
    "difficulty": "easy",
    "cuisine": "italian"
}
```
Enjoy!"#,
        );

        provider.add_response(
            "meal plan",
            r#"{
                "totalCalories": 1800,
                "dailyMacros": {"protein": 120.0, "carbs": 180.0, "fat": 60.0, "fiber": 25.0},
                "meals": [
                    {
                        "day": 1,
                        "mealType": "breakfast",
                        "totalCalories": 450,
                        "macros": {"protein": 30.0, "carbs": 45.0, "fat": 15.0, "fiber": 6.0},
                        "recipe": {
                            "title": "Greek Yogurt Bowl",
                            "description": "Yogurt with berries and granola.",
                            "ingredients": ["1 cup greek yogurt", "1/2 cup berries", "1/4 cup granola"],
                            "instructions": ["Combine everything in a bowl."],
                            "prepTimeMinutes": 5,
                            "cookTimeMinutes": 0,
                            "servings": 1,
                            "calories": 450,
                            "macros": {"protein": 30.0, "carbs": 45.0, "fat": 15.0, "fiber": 6.0},
                            "tags": ["breakfast"],
                            "difficulty": "easy",
                            "cuisine": "greek"
                        }
                    }
                ],
                "shoppingList": ["greek yogurt", "berries", "granola"],
                "tips": "Prep the granola portions on Sunday."
            }"#,
        );

        provider.add_response(
            "Analyze the food",
            r#"{
                "items": [
                    {
                        "name": "grilled chicken breast",
                        "quantity": "1 piece",
                        "calories": 280,
                        "macros": {"protein": 42.0, "carbs": 0.0, "fat": 12.0, "fiber": 0.0}
                    },
                    {
                        "name": "steamed broccoli",
                        "quantity": "1 cup",
                        "calories": 55,
                        "macros": {"protein": 4.0, "carbs": 11.0, "fat": 0.5, "fiber": 5.0}
                    }
                ],
                "totalCalories": 335,
                "totalMacros": {"protein": 46.0, "carbs": 11.0, "fat": 12.5, "fiber": 5.0},
                "confidence": 0.85
            }"#,
        );

        provider
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = format!("{}\n{}", request.system, request.user).to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        // Return default or error
        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt_lower.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
