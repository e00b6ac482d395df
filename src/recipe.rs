//! Recipe generation for the single-recipe chef modes.

use crate::error::GenerateError;
use crate::llm::{CompletionProvider, CompletionRequest};
use crate::normalize::normalize_recipe;
use crate::prompts::recipe::{
    render_recipe_system_prompt, render_recipe_user_prompt, RECIPE_PROMPT_NAME,
};
use crate::types::{GeneratedRecipe, GenerationRequest};

/// Generate a single recipe for the request's chef mode.
///
/// One outbound call, awaited, then normalized. For [`crate::types::ChefMode::MealPlan`]
/// use [`crate::meal_plan::generate_meal_plan`], which returns the full plan
/// shape instead of a single recipe.
pub async fn generate_recipe(
    provider: &dyn CompletionProvider,
    request: &GenerationRequest,
) -> Result<GeneratedRecipe, GenerateError> {
    let completion = CompletionRequest::new(
        render_recipe_system_prompt(request.chef_mode),
        render_recipe_user_prompt(request),
    )
    .with_json_response()
    .with_max_tokens(2048);

    tracing::debug!(
        prompt_name = RECIPE_PROMPT_NAME,
        mode = request.chef_mode.as_str(),
        provider = provider.provider_name(),
        "Generating recipe"
    );

    let raw = provider.complete(&completion).await?;
    normalize_recipe(&raw, request)
}
