//! Record id path extraction

use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::SodaError;

/// The `{id}` path segment, parsed as an unsigned 64-bit integer
///
/// A missing segment, or one that is not made only of ASCII digits and
/// within `u64` range, is rejected with [`SodaError::InvalidRecordId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub u64);

impl std::str::FromStr for RecordId {
    type Err = SodaError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SodaError::InvalidRecordId);
        }
        segment
            .parse()
            .map(RecordId)
            .map_err(|_| SodaError::InvalidRecordId)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = SodaError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Couldn't decode input.");
                SodaError::InvalidRecordId
            })?;

        segment.parse().inspect_err(|_| {
            tracing::error!(id = %segment, "Couldn't decode input.");
        })
    }
}
