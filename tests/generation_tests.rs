//! End-to-end tests for the generation pipeline.
//!
//! These drive the public API with a FakeProvider, so no network access or
//! API key is required.

use chefgpt_core::prompts::{render_recipe_system_prompt, render_recipe_user_prompt};
use chefgpt_core::{
    analyze_food_photo, create_provider_from_env, generate_meal_plan, generate_recipe,
    normalize_recipe, ChefMode, FakeProvider, GenerateError, GenerationRequest, ImageData,
    ProviderConfig,
};

fn pantry_request() -> GenerationRequest {
    let mut request = GenerationRequest::new(ChefMode::Pantry);
    request.ingredients = vec!["egg".to_string(), "spinach".to_string()];
    request
}

#[test]
fn test_pantry_prompt_contains_ingredients_and_persona() {
    let request = pantry_request();
    let system = render_recipe_system_prompt(request.chef_mode);
    let user = render_recipe_user_prompt(&request);

    assert!(system.contains("waste"));
    assert!(user.contains("egg"));
    assert!(user.contains("spinach"));
}

#[test]
fn test_response_missing_tags_normalizes_to_empty() {
    let raw = r#"{
        "title": "Spinach Omelette",
        "ingredients": ["2 eggs", "handful of spinach"],
        "instructions": ["Whisk eggs.", "Wilt spinach.", "Cook."],
        "servings": 1,
        "calories": 220
    }"#;

    let recipe = normalize_recipe(raw, &pantry_request()).unwrap();
    assert_eq!(recipe.tags, Vec::<String>::new());
    assert_eq!(recipe.title, "Spinach Omelette");
}

#[tokio::test]
async fn test_recipe_pipeline_with_fake_provider() {
    let provider = FakeProvider::with_generation_responses();
    let recipe = generate_recipe(&provider, &pantry_request()).await.unwrap();

    // The canned response wraps its JSON in markdown and prose.
    assert_eq!(recipe.title, "Garlic Butter Pasta");
    assert_eq!(recipe.ingredients.len(), 3);
    assert_eq!(recipe.calories, 520);
}

#[tokio::test]
async fn test_meal_plan_pipeline_with_fake_provider() {
    let provider = FakeProvider::with_generation_responses();
    let mut request = GenerationRequest::new(ChefMode::MealPlan);
    request.days = Some(3);

    let plan = generate_meal_plan(&provider, &request).await.unwrap();
    assert_eq!(plan.total_calories, 1800);
    assert_eq!(plan.meals[0].meal_type, "breakfast");
    assert_eq!(plan.tips, "Prep the granola portions on Sunday.");
}

#[tokio::test]
async fn test_food_photo_pipeline_with_fake_provider() {
    let provider = FakeProvider::with_generation_responses();
    let image = ImageData::from_bytes("image/jpeg", &[0xFF, 0xD8, 0xFF, 0xE0]);

    let analysis = analyze_food_photo(&provider, image).await.unwrap();
    assert_eq!(analysis.items.len(), 2);
    assert!(analysis.confidence > 0.0 && analysis.confidence <= 1.0);
}

#[test]
fn test_image_data_base64_encoding() {
    let image = ImageData::from_bytes("image/png", b"hello");
    assert_eq!(image.media_type, "image/png");
    assert_eq!(image.data, "aGVsbG8=");
}

#[tokio::test]
async fn test_refusal_text_is_malformed_response() {
    let provider =
        FakeProvider::new().with_default_response("I am not able to produce a recipe for that.");

    let result = generate_recipe(&provider, &pantry_request()).await;
    match result {
        Err(GenerateError::MalformedResponse(reason)) => {
            assert!(reason.contains("no JSON"));
        }
        other => panic!("expected MalformedResponse, got {:?}", other.map(|r| r.title)),
    }
}

// Environment cases run sequentially inside one test so they cannot race
// each other over the process environment.
#[test]
fn test_provider_and_config_from_env() {
    std::env::set_var("CHEFGPT_PROVIDER", "fake");
    let provider = create_provider_from_env().unwrap();
    assert_eq!(provider.provider_name(), "fake");

    std::env::set_var("CHEFGPT_PROVIDER", "llamafile");
    assert!(create_provider_from_env().is_err());
    std::env::remove_var("CHEFGPT_PROVIDER");

    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("CHEFGPT_BASE_URL");
    std::env::remove_var("CHEFGPT_TIMEOUT_SECS");
    assert!(ProviderConfig::from_env().is_err());

    std::env::set_var("OPENAI_API_KEY", "sk-test");
    std::env::set_var("CHEFGPT_MODEL", "gpt-4o");
    let config = ProviderConfig::from_env().unwrap();
    assert_eq!(config.api_key, "sk-test");
    assert_eq!(config.model, "gpt-4o");
    assert_eq!(config.base_url, "https://api.openai.com/v1");
    assert_eq!(config.timeout_secs, 60);
    std::env::remove_var("OPENAI_API_KEY");
    std::env::remove_var("CHEFGPT_MODEL");
}
