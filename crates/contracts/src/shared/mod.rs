pub mod config;
pub mod error;
pub mod money;
pub mod storage;
pub mod text;

pub use error::{ConfigError, ReviewError, StorageError, ValidationError};
pub use storage::{MemoryStorage, StoragePort};
