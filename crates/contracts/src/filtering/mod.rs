//! Фильтрация листинга: извлечение атрибутов карточек и предикат видимости

pub mod card;
pub mod extractor;
pub mod facet;
pub mod matcher;
pub mod search;
pub mod selection;
pub mod strategy;

pub use card::{CardSource, ProductKey, StaticCard};
pub use extractor::{extract_facets, FacetExtractor, FacetVocabulary, ProductFacets};
pub use facet::Facet;
pub use matcher::{match_percent, matches};
pub use search::{PageSearchIndex, SearchOutcome};
pub use selection::{FilterSelection, PriceRange};
