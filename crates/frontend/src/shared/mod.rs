pub mod card;
pub mod dom;
pub mod notification;
pub mod storage;
pub mod timers;

use contracts::shared::config::{load_config, StorefrontConfig};
use contracts::shared::ConfigError;

const CONFIG_ELEMENT_ID: &str = "storefront-config";

/// Конфигурация из `<script type="application/json" id="storefront-config">`.
/// Нет блока - встроенные умолчания.
pub fn page_config() -> Result<StorefrontConfig, ConfigError> {
    let raw = dom::element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    load_config(raw.as_deref())
}
