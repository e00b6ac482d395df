//! Nutrition analysis of food photos.

use crate::error::GenerateError;
use crate::llm::{CompletionProvider, CompletionRequest, ImageData};
use crate::normalize::normalize_food_analysis;
use crate::prompts::food_photo::{
    render_food_photo_system_prompt, render_food_photo_user_prompt, FOOD_PHOTO_PROMPT_NAME,
};
use crate::types::FoodAnalysis;

/// Estimate the nutritional contents of the food in a photo.
pub async fn analyze_food_photo(
    provider: &dyn CompletionProvider,
    image: ImageData,
) -> Result<FoodAnalysis, GenerateError> {
    let completion = CompletionRequest::new(
        render_food_photo_system_prompt(),
        render_food_photo_user_prompt(),
    )
    .with_image(image)
    .with_json_response()
    .with_max_tokens(1024)
    .with_temperature(0.1);

    tracing::debug!(
        prompt_name = FOOD_PHOTO_PROMPT_NAME,
        provider = provider.provider_name(),
        "Analyzing food photo"
    );

    let raw = provider.complete(&completion).await?;
    normalize_food_analysis(&raw)
}
