use std::collections::HashMap;

use axum::{extract::FromRequestParts, http::request::Parts};
use concesionaria_core::domain::filter::FilterRequest;

/// Collects the raw query string into a [`FilterRequest`].
///
/// Never rejects: a malformed query string yields an empty request, and
/// unknown or unparseable keys are dropped later by the filter schema.
///
/// ```rust,ignore
/// async fn handler(FilterQuery(request): FilterQuery) -> Result<Response<T>, ApiError> {
///     // request.get("estado"), request.parse("precio_min", ValueKind::Decimal)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FilterQuery(pub FilterRequest);

impl<S> FromRequestParts<S> for FilterQuery
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(FilterQuery(FilterRequest::from(query_map)))
    }
}
