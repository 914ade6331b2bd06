use serde::{Deserialize, Serialize};
use std::fmt;

/// Порядок карточек на странице избранного
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WishlistSort {
    #[default]
    Newest,
    Oldest,
    PriceHigh,
    PriceLow,
    Name,
}

impl WishlistSort {
    /// Значение `<option value>` и то, что лежит в `wishlist_sort`
    pub fn code(&self) -> &'static str {
        match self {
            WishlistSort::Newest => "newest",
            WishlistSort::Oldest => "oldest",
            WishlistSort::PriceHigh => "price-high",
            WishlistSort::PriceLow => "price-low",
            WishlistSort::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WishlistSort::Newest => "Newest first",
            WishlistSort::Oldest => "Oldest first",
            WishlistSort::PriceHigh => "Price: high to low",
            WishlistSort::PriceLow => "Price: low to high",
            WishlistSort::Name => "Name (A-Z)",
        }
    }

    pub fn all() -> Vec<WishlistSort> {
        vec![
            WishlistSort::Newest,
            WishlistSort::Oldest,
            WishlistSort::PriceHigh,
            WishlistSort::PriceLow,
            WishlistSort::Name,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "newest" => Some(WishlistSort::Newest),
            "oldest" => Some(WishlistSort::Oldest),
            "price-high" => Some(WishlistSort::PriceHigh),
            "price-low" => Some(WishlistSort::PriceLow),
            "name" => Some(WishlistSort::Name),
            _ => None,
        }
    }

    /// Сохранённое значение; всё незнакомое означает `newest`
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }
}

impl fmt::Display for WishlistSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for sort in WishlistSort::all() {
            assert_eq!(WishlistSort::from_code(sort.code()), Some(sort));
        }
    }

    #[test]
    fn test_unknown_code_defaults_to_newest() {
        assert_eq!(WishlistSort::from_code_or_default("cheapest"), WishlistSort::Newest);
        assert_eq!(WishlistSort::from_code_or_default(""), WishlistSort::Newest);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&WishlistSort::PriceHigh).unwrap(),
            "\"price-high\""
        );
    }
}
