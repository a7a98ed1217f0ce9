use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body of `POST /convert`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub text: String,
    // Accepted for client compatibility, never verified.
    #[allow(dead_code)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversionResponse {
    pub message: String,
    pub response: String,
}

impl ConversionResponse {
    pub fn completed(summary: String) -> Self {
        Self {
            message: "Prediction completed!".to_string(),
            response: summary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,  // external_service | parse | persistence
    pub detail: String,
}

/// One row of the `diet` table. Values are kept as the model wrote them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionRecord {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fats: String,
    pub date: NaiveDateTime,
}

impl NutritionRecord {
    pub fn summary(&self) -> String {
        format!(
            "Calories {} kcal, Protein {} g, Carbs {} g, Fats {} g",
            self.calories, self.protein, self.carbs, self.fats
        )
    }
}
