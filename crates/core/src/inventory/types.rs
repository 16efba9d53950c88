use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A food item stored in the `entries` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned primary key.
    pub id: i64,
    pub name: String,
    /// Free-form quantity ("2", "500g", "half a bag").
    pub quantity: String,
    pub expiration_date: Option<NaiveDate>,
}

impl Entry {
    /// Returns the expiration date formatted for display, or an empty string.
    pub fn expiration_label(&self) -> String {
        self.expiration_date
            .map(|date| date.format(super::DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// A validated request to create a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub quantity: String,
    pub expiration_date: Option<NaiveDate>,
}

impl NewEntry {
    /// Creates a new entry without an expiration date.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            expiration_date: None,
        }
    }

    /// Sets the expiration date.
    pub fn with_expiration_date(mut self, date: NaiveDate) -> Self {
        self.expiration_date = Some(date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_label_formats_date() {
        let entry = Entry {
            id: 1,
            name: "Milk".to_string(),
            quantity: "2".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        };
        assert_eq!(entry.expiration_label(), "2025-01-01");
    }

    #[test]
    fn test_expiration_label_empty_when_absent() {
        let entry = Entry {
            id: 2,
            name: "Rice".to_string(),
            quantity: "1kg".to_string(),
            expiration_date: None,
        };
        assert_eq!(entry.expiration_label(), "");
    }

    #[test]
    fn test_entry_serializes_date_as_iso() {
        let entry = Entry {
            id: 3,
            name: "Eggs".to_string(),
            quantity: "12".to_string(),
            expiration_date: NaiveDate::from_ymd_opt(2024, 12, 31),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["expiration_date"], "2024-12-31");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn test_new_entry_builder() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let entry = NewEntry::new("Butter", "1").with_expiration_date(date);
        assert_eq!(entry.name, "Butter");
        assert_eq!(entry.expiration_date, Some(date));
    }
}
