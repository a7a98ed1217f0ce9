pub mod completion;
pub mod database;
pub mod openai; // OpenAI chat completions
pub mod reply_parser;

pub use completion::{CompletionService, NUTRITION_PROMPT};
pub use database::{Database, DietStore};
pub use openai::OpenAiService;
pub use reply_parser::parse_reply;
