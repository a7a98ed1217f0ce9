use chrono::NaiveDateTime;

use crate::error::AppError;
use crate::models::NutritionRecord;

const SEPARATOR: &str = ", ";
const FIELD_COUNT: usize = 4;

/// Split a completion reply of the form `"Calories, Protein, Carbs, Fats"`.
///
/// Tokens are stored as written (no numeric coercion); anything past the
/// fourth token is ignored.
pub fn parse_reply(reply: &str, date: NaiveDateTime) -> Result<NutritionRecord, AppError> {
    let tokens: Vec<&str> = reply.trim().split(SEPARATOR).collect();

    if tokens.len() < FIELD_COUNT {
        return Err(AppError::Parse {
            reply: reply.to_string(),
            found: tokens.len(),
        });
    }

    Ok(NutritionRecord {
        calories: tokens[0].to_string(),
        protein: tokens[1].to_string(),
        carbs: tokens[2].to_string(),
        fats: tokens[3].to_string(),
        date,
    })
}
