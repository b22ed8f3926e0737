//! DTOs for admin authentication.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{AdminIdentity, Role};

/// `POST /api/auth/login` body.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// `GET /api/auth/session` response.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: SessionUser,
}

impl From<AdminIdentity> for SessionResponse {
    fn from(identity: AdminIdentity) -> Self {
        Self {
            user: SessionUser {
                id: identity.id,
                email: identity.email,
                role: identity.role,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation() {
        let ok = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "long-enough".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = LoginRequest {
            email: "admin@example.com".to_string(),
            password: "short".to_string(),
        };
        assert!(short.validate().is_err());

        let bad_email = LoginRequest {
            email: "admin".to_string(),
            password: "long-enough".to_string(),
        };
        assert!(bad_email.validate().is_err());
    }
}
