pub mod errors;

pub use errors::{ChartkitError, ConfigError};

pub type Result<T> = std::result::Result<T, ChartkitError>;
