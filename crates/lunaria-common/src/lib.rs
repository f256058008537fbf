pub mod errors;

pub use errors::{ConfigError, LunariaError};

pub type Result<T> = std::result::Result<T, LunariaError>;
