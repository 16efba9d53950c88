use serde::Deserialize;

use pantry_core::inventory::{parse_item_id, require, ValidationError};
use pantry_core::serde::{deserialize_optional_scalar, deserialize_optional_string};

use crate::handlers::form::FromForm;

/// Raw body of `POST /add`.
#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_scalar")]
    pub quantity: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub expiration_date: Option<String>,
}

/// A new item as submitted. The expiration date is still raw text and is
/// checked when the item is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItem {
    pub name: String,
    pub quantity: String,
    pub expiration_date: Option<String>,
}

impl FromForm for AddItem {
    type Raw = AddItemForm;

    fn from_form(raw: AddItemForm) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require(raw.name, "name")?,
            quantity: require(raw.quantity, "quantity")?,
            expiration_date: raw.expiration_date,
        })
    }
}

/// Raw body of `POST /remove`.
#[derive(Debug, Deserialize)]
pub struct RemoveItemForm {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveItem {
    pub name: String,
}

impl FromForm for RemoveItem {
    type Raw = RemoveItemForm;

    fn from_form(raw: RemoveItemForm) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require(raw.name, "name")?,
        })
    }
}

/// Raw body of `POST /update-quantity`.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub item_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_scalar")]
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateQuantity {
    pub id: i64,
    pub quantity: String,
}

impl FromForm for UpdateQuantity {
    type Raw = UpdateQuantityForm;

    fn from_form(raw: UpdateQuantityForm) -> Result<Self, ValidationError> {
        Ok(Self {
            id: parse_item_id(raw.item_id)?,
            quantity: require(raw.quantity, "quantity")?,
        })
    }
}

/// Raw body of `POST /delete-item`.
#[derive(Debug, Deserialize)]
pub struct DeleteItemForm {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub item_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteItem {
    pub id: i64,
}

impl FromForm for DeleteItem {
    type Raw = DeleteItemForm;

    fn from_form(raw: DeleteItemForm) -> Result<Self, ValidationError> {
        Ok(Self {
            id: parse_item_id(raw.item_id)?,
        })
    }
}
