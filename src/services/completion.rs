use anyhow::Result;

/// Instruction sent ahead of every food description.
pub const NUTRITION_PROMPT: &str = "You are a health assistant. I will provide a list of food I ate and \
you need to sum up and return values in format: Calories, Protein, Carbs, Fats . \
Use only this format. Return only summed up values in this and nothing else. \
If you don't know write: 0, 0, 0, 0 . Approximate if you don't know exact values. \
Here are the items I ate:";

/// Trait for chat-completion backends (OpenAI, OpenAI-compatible proxies, etc.)
#[async_trait::async_trait]
pub trait CompletionService: Send + Sync {
    /// Send `system` + `user` as a two-message exchange and return the reply text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}
