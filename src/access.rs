use std::{fmt, str::FromStr};

use thiserror::Error;

pub const PERMISSION_DENIED_MESSAGE: &str = "Você não tem permissão para acessar esta página.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Usuario,
    Adm,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Usuario => "Usuario",
            Self::Adm => "Adm",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthorizationError;

    // Exact match only: profiles are stored verbatim by the session layer.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Usuario" => Ok(Self::Usuario),
            "Adm" => Ok(Self::Adm),
            other => Err(AuthorizationError::RoleNotPermitted(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("request carries no role")]
    MissingRole,
    #[error("role {0:?} is not permitted")]
    RoleNotPermitted(String),
}

impl AuthorizationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRole => "AUTH_MISSING_ROLE",
            Self::RoleNotPermitted(_) => "AUTH_ROLE_NOT_PERMITTED",
        }
    }

    pub fn user_message(&self) -> &'static str {
        PERMISSION_DENIED_MESSAGE
    }
}

/// Per-request caller data, passed explicitly into every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub user_id: i64,
    pub role: Option<String>,
}

impl RequestContext {
    pub fn new(user_id: i64, role: impl Into<String>) -> Self {
        Self {
            user_id,
            role: Some(role.into()),
        }
    }

    /// Caller with no session at all.
    pub fn anonymous() -> Self {
        Self {
            user_id: 0,
            role: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizedUser {
    pub user_id: i64,
    pub role: Role,
}

pub fn authorize(context: &RequestContext) -> Result<AuthorizedUser, AuthorizationError> {
    let result = context
        .role
        .as_deref()
        .ok_or(AuthorizationError::MissingRole)
        .and_then(Role::from_str);

    match result {
        Ok(role) => Ok(AuthorizedUser {
            user_id: context.user_id,
            role,
        }),
        Err(error) => {
            log::warn!(
                "SECURITY: access denied. user_id={} role={:?} code={}",
                context.user_id,
                context.role,
                error.code()
            );
            Err(error)
        }
    }
}
