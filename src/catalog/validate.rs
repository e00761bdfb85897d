//! Pure payload predicates, run before any store interaction.

use serde_json::Value;

/// True iff the field is present, a string, and non-empty.
pub fn valid_name(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

/// True iff the field is present, a JSON number (integer or float), and >= 0.
pub fn valid_price(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Number(n)) => n.as_f64().is_some_and(|p| p >= 0.0),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_requires_non_empty_string() {
        assert!(valid_name(Some(&json!("Widget"))));
        assert!(valid_name(Some(&json!(" "))));

        assert!(!valid_name(None));
        assert!(!valid_name(Some(&json!(""))));
        assert!(!valid_name(Some(&json!(123))));
        assert!(!valid_name(Some(&json!(null))));
        assert!(!valid_name(Some(&json!(["Widget"]))));
    }

    #[test]
    fn price_requires_non_negative_number() {
        assert!(valid_price(Some(&json!(0))));
        assert!(valid_price(Some(&json!(9.99))));
        assert!(valid_price(Some(&json!(10))));

        assert!(!valid_price(None));
        assert!(!valid_price(Some(&json!(-1))));
        assert!(!valid_price(Some(&json!(-0.01))));
        assert!(!valid_price(Some(&json!("free"))));
        assert!(!valid_price(Some(&json!(true))));
        assert!(!valid_price(Some(&json!(null))));
    }
}
