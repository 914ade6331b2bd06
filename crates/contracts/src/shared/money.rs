//! Разбор цен и процентов из текста карточек, форматирование сумм в рупиях

use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").expect("valid regex"));
static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*%").expect("valid regex"));
static FIRST_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)").expect("valid regex"));
static CURRENCY_AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:₹|Rs\.?\s*)?([0-9][0-9,]*(?:\.[0-9]+)?)").expect("valid regex")
});
static RUPEE_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"₹(\d+(?:,\d+)?)").expect("valid regex"));

/// Оставляет только цифры. `None`, если цифр нет
pub fn digits_only(s: &str) -> Option<u64> {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Первая последовательность цифр (с разделителями-запятыми) в тексте
///
/// "₹1,169 ₹1,299" -> 1169
pub fn first_integer_run(text: &str) -> Option<u64> {
    INTEGER_RUN.find(text).and_then(|m| digits_only(m.as_str()))
}

/// Число перед знаком процента: "Extra 10% off" -> 10
pub fn percent_in(text: &str) -> Option<u64> {
    PERCENT
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Первое целое в подписи: "Extra 10%" -> 10, "Any" -> None
pub fn first_integer(text: &str) -> Option<u64> {
    FIRST_INTEGER
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Цена для корзины: всё кроме цифр и точки удаляется, 0 если не разобрать
pub fn sanitize_price(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    leading_float(&cleaned).unwrap_or(0.0)
}

// Разбор как у parseFloat: берётся самый длинный корректный префикс
fn leading_float(s: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        end = i + c.len_utf8();
    }
    let candidate = s[..end].trim_end_matches('.');
    if candidate.is_empty() || candidate == "." {
        return None;
    }
    candidate.parse().ok().filter(|v: &f64| v.is_finite())
}

/// Первая денежная сумма в блоке цены ("₹1,169 ₹1,299" -> 1169.0), 0 если нет
pub fn extract_first_price(text: &str) -> f64 {
    CURRENCY_AMOUNT
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| sanitize_price(m.as_str()))
        .unwrap_or(0.0)
}

/// Сумма сразу после знака рупии, только первая запятая считается разделителем
pub fn rupee_price(text: &str) -> Option<f64> {
    let raw = RUPEE_AMOUNT.captures(text)?.get(1)?.as_str().replacen(',', "", 1);
    raw.parse().ok()
}

/// Форматирует сумму в рупиях с индийской группировкой разрядов
///
/// 123456.5 -> "₹1,23,456.50"
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{}₹{}.{}", sign, group_indian(integer), fraction)
}

fn group_indian(integer: &str) -> String {
    if integer.len() <= 3 {
        return integer.to_string();
    }
    let (head, last3) = integer.split_at(integer.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, t) = rest.split_at(rest.len() - 2);
        groups.push(t);
        rest = h;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{}", groups.join(","), last3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("₹1,169"), Some(1169));
        assert_eq!(digits_only("abc"), None);
        assert_eq!(digits_only(""), None);
    }

    #[test]
    fn test_first_integer_run() {
        assert_eq!(first_integer_run("₹1,169 ₹1,299"), Some(1169));
        assert_eq!(first_integer_run("Rs. 799 only"), Some(799));
        assert_eq!(first_integer_run("free"), None);
    }

    #[test]
    fn test_percent_in() {
        assert_eq!(percent_in("50% OFF"), Some(50));
        assert_eq!(percent_in("Extra 10 % off"), Some(10));
        assert_eq!(percent_in("Bestseller"), None);
    }

    #[test]
    fn test_first_integer() {
        assert_eq!(first_integer("Extra 10%"), Some(10));
        assert_eq!(first_integer("20% and above"), Some(20));
        assert_eq!(first_integer("Any"), None);
    }

    #[test]
    fn test_sanitize_price() {
        assert_eq!(sanitize_price("₹1,499"), 1499.0);
        assert_eq!(sanitize_price("Rs 699.50"), 699.5);
        assert_eq!(sanitize_price("1.2.3"), 1.2);
        assert_eq!(sanitize_price("n/a"), 0.0);
    }

    #[test]
    fn test_extract_first_price() {
        assert_eq!(extract_first_price("₹1,169 ₹1,299"), 1169.0);
        assert_eq!(extract_first_price("Rs. 699"), 699.0);
        assert_eq!(extract_first_price("1169"), 1169.0);
        assert_eq!(extract_first_price("Sold out"), 0.0);
    }

    #[test]
    fn test_rupee_price() {
        assert_eq!(rupee_price("₹1,169 ₹1,299"), Some(1169.0));
        assert_eq!(rupee_price("₹399"), Some(399.0));
        assert_eq!(rupee_price("399"), None);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(799.0), "₹799.00");
        assert_eq!(format_currency(1169.0), "₹1,169.00");
        assert_eq!(format_currency(123456.5), "₹1,23,456.50");
        assert_eq!(format_currency(12345678.0), "₹1,23,45,678.00");
        assert_eq!(format_currency(-1500.0), "-₹1,500.00");
    }
}
