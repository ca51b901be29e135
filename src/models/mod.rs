pub mod config;
pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodEntry, MealCategory, NutritionItem};
pub use plan::{DietPlan, StoredPlan};
pub use profile::UserProfile;
