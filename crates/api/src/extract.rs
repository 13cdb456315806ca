//! Entrant identity extractor.
//!
//! Mobile clients identify themselves with a device UUID in the
//! `X-Entrant-Id` header. This extractor is the seam where a real
//! authentication scheme would plug in.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use drawlist_core::types::EntrantId;

use crate::error::AppError;
use crate::state::AppState;

/// The calling entrant, resolved from the `X-Entrant-Id` header.
#[derive(Debug, Clone, Copy)]
pub struct Entrant {
    pub id: EntrantId,
}

impl FromRequestParts<AppState> for Entrant {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-entrant-id")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::BadRequest("Missing X-Entrant-Id header".into()))?;

        let id: EntrantId = header
            .parse()
            .map_err(|_| AppError::BadRequest("X-Entrant-Id must be a valid UUID".into()))?;

        Ok(Entrant { id })
    }
}
