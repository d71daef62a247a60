pub use chat_markup::ChatError;

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, ChatError>;
