pub mod calorie;
pub mod config;
pub mod error;
pub mod food_photo;
pub mod llm;
pub mod meal_plan;
pub mod normalize;
pub mod prompts;
pub mod recipe;
pub mod types;

pub use calorie::{basal_metabolic_rate, daily_calorie_target, ActivityLevel, BiometricProfile, Sex};
pub use config::ProviderConfig;
pub use error::GenerateError;
pub use food_photo::analyze_food_photo;
pub use llm::{
    create_provider_from_env, CompletionProvider, CompletionRequest, FakeProvider, ImageData,
    LlmError, OpenAiProvider,
};
pub use meal_plan::generate_meal_plan;
pub use normalize::{extract_json, normalize_food_analysis, normalize_meal_plan, normalize_recipe};
pub use recipe::generate_recipe;
pub use types::{
    ChefMode, FoodAnalysis, FoodItem, GeneratedRecipe, GenerationRequest, MacroTargets, Macros,
    MealPlan, MealPlanEntry, MealType,
};
