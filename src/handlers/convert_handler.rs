use std::sync::Arc;

use chrono::Local;

use crate::error::AppError;
use crate::models::NutritionRecord;
use crate::services::{parse_reply, CompletionService, DietStore, NUTRITION_PROMPT};

pub struct ConvertHandler {
    completion: Arc<dyn CompletionService>,
    store: Arc<dyn DietStore>,
}

impl ConvertHandler {
    pub fn new(completion: Arc<dyn CompletionService>, store: Arc<dyn DietStore>) -> Self {
        Self { completion, store }
    }

    /// Estimate nutrition for `text` and append it to the diet table.
    pub async fn convert(&self, text: &str) -> Result<NutritionRecord, AppError> {
        log::info!("📨 Conversion request: '{}'", text);

        let reply = self
            .completion
            .complete(NUTRITION_PROMPT, text)
            .await
            .map_err(AppError::ExternalService)?;

        let record = parse_reply(&reply, Local::now().naive_local())?;

        self.store
            .append(&record)
            .await
            .map_err(AppError::Persistence)?;

        log::info!("✅ Stored nutrition row: {}", record.summary());
        Ok(record)
    }
}
