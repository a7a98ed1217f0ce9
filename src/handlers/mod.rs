pub mod convert_handler;

pub use convert_handler::ConvertHandler;
