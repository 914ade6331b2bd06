//! Общие типы для всех агрегатов витрины

pub mod timestamp;
pub mod variant;

// Re-exports
pub use timestamp::lenient_timestamp;
pub use variant::SizeVariant;
