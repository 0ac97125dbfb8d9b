//! Custom Axum extractors
//!
//! Axum's own `Path` and `Query` reject malformed input with plain-text
//! bodies. These wrappers route the rejection through `ApiError` instead,
//! so a bad path id or query string comes back as the same JSON
//! field-error map the schema decoders produce.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// `axum::extract::Path` with the rejection mapped to a field-error map.
/// Every path parameter in this API is an integer id.
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) =
            axum::extract::Path::<T>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::field("id", "Not a valid integer."))?;

        Ok(Self(value))
    }
}

/// `axum::extract::Query` with the rejection mapped to a field-error map.
/// The failing parameter is not recoverable from the rejection, so the
/// message lands under the non-field `_schema` key.
pub struct Query<T>(pub T);

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| ApiError::field("_schema", &rejection.body_text()))?;

        Ok(Self(value))
    }
}
