use serde::Deserialize;

use pantry_core::inventory::{require, ValidationError};
use pantry_core::serde::deserialize_optional_scalar;

use crate::handlers::form::FromForm;

/// Raw body of `POST /search`.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default, deserialize_with = "deserialize_optional_scalar")]
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    pub barcode: String,
}

impl FromForm for Search {
    type Raw = SearchForm;

    fn from_form(raw: SearchForm) -> Result<Self, ValidationError> {
        let barcode = require(raw.barcode, "barcode")?;
        Ok(Self {
            barcode: barcode.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_trims_barcode() {
        let search = Search::from_form(SearchForm {
            barcode: Some(" 3017620422003 ".to_string()),
        })
        .unwrap();

        assert_eq!(search.barcode, "3017620422003");
    }

    #[test]
    fn test_search_requires_barcode() {
        assert_eq!(
            Search::from_form(SearchForm { barcode: None }),
            Err(ValidationError::MissingField("barcode"))
        );
    }
}
