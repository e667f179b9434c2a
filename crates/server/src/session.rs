// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! This module provides the Axum extractor that validates bearer session
//! tokens and resolves the caller before any handler runs.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use office_report_api::{AuthenticatedActor, AuthenticationService};
use office_report_persistence::EmployeeData;
use tracing::{debug, warn};

use crate::{AppState, ErrorResponse};

/// Extractor for authenticated callers.
///
/// Validates the session token from the `Authorization` header and returns
/// the authenticated actor together with the employee record behind it.
///
/// # Authentication Flow
///
/// 1. Extract `Authorization: Bearer <token>` header
/// 2. Validate the token via `AuthenticationService::validate_session`,
///    which rejects unknown and expired sessions and inactive employees
/// 3. Return `AuthenticatedActor` and `EmployeeData`
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if the header is missing or malformed, or
/// the session is rejected.
pub struct SessionEmployee(pub AuthenticatedActor, pub EmployeeData);

impl FromRequestParts<AppState> for SessionEmployee {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token: &str = bearer_token(&parts.headers)?;

        let mut persistence = state.persistence.lock().await;
        let (actor, employee): (AuthenticatedActor, EmployeeData) =
            AuthenticationService::validate_session(&mut persistence, token).map_err(|e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidSession(e.to_string())
            })?;
        drop(persistence);

        debug!(
            employee_id = employee.employee_id,
            role = %actor.role,
            "Session validated"
        );

        Ok(Self(actor, employee))
    }
}

/// Reads the bearer token from the request headers.
///
/// # Errors
///
/// Returns an error if the header is missing, not valid ASCII, or not a
/// bearer credential.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, SessionError> {
    let header: &str = headers
        .get(AUTHORIZATION)
        .ok_or_else(|| {
            debug!("Missing Authorization header");
            SessionError::MissingAuthorizationHeader
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid Authorization header encoding");
            SessionError::InvalidAuthorizationHeader
        })?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            warn!("Authorization header is not a bearer token");
            SessionError::InvalidAuthorizationHeader
        })
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAuthorizationHeader => write!(f, "Missing Authorization header"),
            Self::InvalidAuthorizationHeader => write!(
                f,
                "Invalid Authorization header format. Expected: 'Bearer <token>'"
            ),
            Self::InvalidSession(reason) => write!(f, "Session validation failed: {reason}"),
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let body: ErrorResponse = ErrorResponse {
            error: true,
            message: self.to_string(),
        };
        (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response()
    }
}
