use serde::{Deserialize, Serialize};

/// Группы фильтров боковой панели листинга
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Facet {
    Color,
    Size,
    Fit,
    Promotions,
    Discount,
    Brand,
    Design,
    Fabric,
    Category,
    SleeveLength,
    Wash,
    Type,
    Gender,
}

impl Facet {
    /// Заголовок группы в панели фильтров
    pub fn title(&self) -> &'static str {
        match self {
            Facet::Color => "Color",
            Facet::Size => "Size",
            Facet::Fit => "Fit",
            Facet::Promotions => "Promotions",
            Facet::Discount => "Discount",
            Facet::Brand => "Brand",
            Facet::Design => "Design",
            Facet::Fabric => "Fabric",
            Facet::Category => "Browse",
            Facet::SleeveLength => "Sleeve Length",
            Facet::Wash => "Wash",
            Facet::Type => "Type",
            Facet::Gender => "Gender",
        }
    }

    /// Ключ dataset карточки (camelCase, как в `element.dataset`)
    pub fn dataset_key(&self) -> &'static str {
        match self {
            Facet::Color => "color",
            Facet::Size => "size",
            Facet::Fit => "fit",
            Facet::Promotions => "promotionPercent",
            Facet::Discount => "discountPercent",
            Facet::Brand => "brand",
            Facet::Design => "design",
            Facet::Fabric => "fabric",
            Facet::Category => "category",
            Facet::SleeveLength => "sleeveLength",
            Facet::Wash => "wash",
            Facet::Type => "type",
            Facet::Gender => "gender",
        }
    }

    /// Промо и скидка сравниваются по порогу, остальные группы по пересечению множеств
    pub fn is_threshold(&self) -> bool {
        matches!(self, Facet::Promotions | Facet::Discount)
    }

    pub fn all() -> Vec<Facet> {
        vec![
            Facet::Color,
            Facet::Size,
            Facet::Fit,
            Facet::Promotions,
            Facet::Discount,
            Facet::Brand,
            Facet::Design,
            Facet::Fabric,
            Facet::Category,
            Facet::SleeveLength,
            Facet::Wash,
            Facet::Type,
            Facet::Gender,
        ]
    }

    /// Группы со списком значений (всё, кроме пороговых)
    pub fn dimensions() -> Vec<Facet> {
        Self::all().into_iter().filter(|f| !f.is_threshold()).collect()
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.title() == title)
    }
}
