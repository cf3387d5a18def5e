//! # Caller Identity
//!
//! Authentication lives outside this service: the gateway in front of the
//! API verifies the session and forwards the caller's identity as
//! `X-User-Id` and `X-User-Role` headers. This module turns those headers
//! into a typed [`Caller`] extractor and provides the role checks the
//! scheduling operations gate on.

use std::{fmt, str::FromStr};

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use serde::{Deserialize, Serialize};
use timetable_core::errors::{TimetableError, TimetableResult};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Professor,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Professor => "professor",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "admin" => Ok(Role::Admin),
            "professor" => Ok(Role::Professor),
            "student" => Ok(Role::Student),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// The authenticated caller, as asserted by the upstream gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub user_id: Uuid,
    pub role: Role,
}

impl Caller {
    /// Rejects with an authorization error unless the caller has `role`.
    pub fn require(&self, role: Role) -> TimetableResult<()> {
        if self.role != role {
            return Err(TimetableError::Authorization(format!(
                "{role} role required"
            )));
        }
        Ok(())
    }

    /// Rejects unless the caller has one of `roles`.
    pub fn require_any(&self, roles: &[Role]) -> TimetableResult<()> {
        if !roles.contains(&self.role) {
            let allowed = roles
                .iter()
                .map(Role::as_str)
                .collect::<Vec<_>>()
                .join(" or ");
            return Err(TimetableError::Authorization(format!(
                "{allowed} role required"
            )));
        }
        Ok(())
    }
}

/// Parses the identity headers from request parts, shared by the extractor
/// and its tests.
pub fn caller_from_parts(parts: &Parts) -> TimetableResult<Caller> {
    let user_id = parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            TimetableError::Authentication("Missing X-User-Id header".to_string())
        })?;
    let user_id = Uuid::parse_str(user_id).map_err(|_| {
        TimetableError::Authentication("X-User-Id is not a valid UUID".to_string())
    })?;

    let role = parts
        .headers
        .get(USER_ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            TimetableError::Authentication("Missing X-User-Role header".to_string())
        })?;
    let role = role
        .parse()
        .map_err(|err: String| TimetableError::Authentication(err))?;

    Ok(Caller { user_id, role })
}

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = crate::middleware::error_handling::AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        caller_from_parts(parts).map_err(Into::into)
    }
}
