//! Нормализация текста для сравнения подписей фильтров с текстом карточек

use unicode_normalization::UnicodeNormalization;

/// Схлопывает любые пробельные последовательности в один пробел и обрезает края
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Ключ сравнения: пробелы схлопнуты, нижний регистр, диакритика удалена
///
/// "  Café   Crème " -> "cafe creme"
pub fn normalize_text(s: &str) -> String {
    normalize_whitespace(s)
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Разбирает список через запятую, отбрасывая пустые элементы
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

/// Удаляет дубликаты, сохраняя порядок первого появления
pub fn unique(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

/// camelCase ключ dataset -> имя атрибута `data-kebab-case`
pub fn dataset_attribute(key: &str) -> String {
    let mut out = String::from("data-");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
