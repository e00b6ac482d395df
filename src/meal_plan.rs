//! Meal plan generation.

use crate::error::GenerateError;
use crate::llm::{CompletionProvider, CompletionRequest};
use crate::normalize::normalize_meal_plan;
use crate::prompts::meal_plan::{
    render_meal_plan_system_prompt, render_meal_plan_user_prompt, MEAL_PLAN_PROMPT_NAME,
};
use crate::types::{GenerationRequest, MealPlan};

/// Generate a multi-meal plan from a single completion call.
pub async fn generate_meal_plan(
    provider: &dyn CompletionProvider,
    request: &GenerationRequest,
) -> Result<MealPlan, GenerateError> {
    let completion = CompletionRequest::new(
        render_meal_plan_system_prompt(),
        render_meal_plan_user_prompt(request),
    )
    .with_json_response()
    .with_max_tokens(4096);

    tracing::debug!(
        prompt_name = MEAL_PLAN_PROMPT_NAME,
        days = request.days,
        provider = provider.provider_name(),
        "Generating meal plan"
    );

    let raw = provider.complete(&completion).await?;
    normalize_meal_plan(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use crate::types::ChefMode;

    #[tokio::test]
    async fn test_generate_meal_plan_end_to_end() {
        let provider = FakeProvider::with_generation_responses();
        let mut request = GenerationRequest::new(ChefMode::MealPlan);
        request.days = Some(3);

        let plan = generate_meal_plan(&provider, &request).await.unwrap();
        assert_eq!(plan.total_calories, 1800);
        assert_eq!(plan.meals.len(), 1);
        assert_eq!(plan.meals[0].recipe.title, "Greek Yogurt Bowl");
        assert_eq!(plan.shopping_list.len(), 3);
    }

    #[tokio::test]
    async fn test_generate_meal_plan_malformed_response() {
        let provider = FakeProvider::new().with_default_response("no plan for you");
        let request = GenerationRequest::new(ChefMode::MealPlan);

        let result = generate_meal_plan(&provider, &request).await;
        assert!(matches!(result, Err(GenerateError::MalformedResponse(_))));
    }
}
