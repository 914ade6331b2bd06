use serde::{Deserialize, Serialize};

/// Выбранный вариант товара (пока только размер)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeVariant {
    pub size: String,
}

impl SizeVariant {
    pub fn new(size: impl Into<String>) -> Self {
        Self { size: size.into() }
    }
}
