//! Request extractors

use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

/// JSON body extractor that never rejects.
///
/// Missing, empty, non-JSON or wrongly shaped bodies all yield
/// `T::default()`, so handlers fall back to synthesized values instead
/// of answering with a 4xx. The content type is not checked.
#[derive(Debug, Clone, Default)]
pub struct LenientJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(err) => {
                debug!(error = %err, "Unreadable request body, using defaults");
                return Ok(Self(T::default()));
            }
        };

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        match serde_json::from_slice(&body) {
            Ok(value) => Ok(Self(value)),
            Err(err) => {
                debug!(error = %err, "Malformed request body, using defaults");
                Ok(Self(T::default()))
            }
        }
    }
}
