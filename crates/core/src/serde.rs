//! Serde helper functions for form deserialization.
//!
//! HTML forms submit every input, so an untouched field arrives as an empty
//! string. These helpers fold blank values into `None` so that presence checks
//! happen in one place.

use serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating empty or whitespace-only strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional scalar that may arrive as a string or a number.
///
/// Numbers are kept in their textual form so `2` and `"2"` are stored alike.
pub fn deserialize_optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    let value: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(match value {
        Some(Scalar::Text(s)) if !s.trim().is_empty() => Some(s),
        Some(Scalar::Integer(n)) => Some(n.to_string()),
        Some(Scalar::Float(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestForm {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_scalar")]
        quantity: Option<String>,
    }

    #[test]
    fn test_optional_string_empty_is_none() {
        let form: TestForm = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(form.name, None);
    }

    #[test]
    fn test_optional_string_whitespace_is_none() {
        let form: TestForm = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert_eq!(form.name, None);
    }

    #[test]
    fn test_optional_string_value_is_kept() {
        let form: TestForm = serde_json::from_str(r#"{"name": "Milk"}"#).unwrap();
        assert_eq!(form.name, Some("Milk".to_string()));
    }

    #[test]
    fn test_missing_fields_are_none() {
        let form: TestForm = serde_json::from_str("{}").unwrap();
        assert_eq!(
            form,
            TestForm {
                name: None,
                quantity: None
            }
        );
    }

    #[test]
    fn test_scalar_accepts_numbers_and_text() {
        let form: TestForm = serde_json::from_str(r#"{"quantity": 2}"#).unwrap();
        assert_eq!(form.quantity, Some("2".to_string()));

        let form: TestForm = serde_json::from_str(r#"{"quantity": "half a bag"}"#).unwrap();
        assert_eq!(form.quantity, Some("half a bag".to_string()));

        let form: TestForm = serde_json::from_str(r#"{"quantity": ""}"#).unwrap();
        assert_eq!(form.quantity, None);
    }
}
