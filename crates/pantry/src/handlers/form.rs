//! Validated form extraction.
//!
//! Every mutating route reads its body through [`ValidForm`], so a missing
//! field, a blank field, or an unparseable body always ends as a 400 with a
//! JSON error instead of a bare rejection.

use axum::{
    extract::{FromRequest, Request},
    Form,
};
use pantry_core::inventory::ValidationError;
use serde::de::DeserializeOwned;

use super::AppError;

/// A typed command built from a raw urlencoded form.
pub trait FromForm: Sized {
    /// Raw form shape; every field optional.
    type Raw: DeserializeOwned + Send;

    fn from_form(raw: Self::Raw) -> Result<Self, ValidationError>;
}

/// Extractor that deserializes and validates a form body.
#[derive(Debug)]
pub struct ValidForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidForm<T>
where
    S: Send + Sync,
    T: FromForm + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(raw) = Form::<T::Raw>::from_request(req, state)
            .await
            .map_err(|e| ValidationError::MalformedForm(e.body_text()))?;

        Ok(Self(T::from_form(raw)?))
    }
}
