use crate::auth::jwt::verify_token;
use crate::config::Config;
use crate::error::AppError;
use crate::models::Claims;
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub employee_id: String,
    pub is_admin: bool,
    pub is_manager: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            employee_id: claims.employee_id,
            is_admin: claims.is_admin,
            is_manager: claims.is_manager,
        }
    }
}

impl FromRequest for AuthUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // Set by auth_middleware on protected scopes
        if let Some(user) = req.extensions().get::<AuthUser>() {
            return ready(Ok(user.clone()));
        }

        let token = match req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            Some(t) => t,
            None => return ready(Err(AppError::Unauthorized("Missing token".into()))),
        };

        let config = match req.app_data::<Data<Config>>() {
            Some(c) => c,
            None => return ready(Err(AppError::Internal("Config missing".into()))),
        };

        ready(
            verify_token(token, &config.jwt_secret)
                .map(AuthUser::from)
                .map_err(|_| AppError::Unauthorized("Invalid token".into())),
        )
    }
}

impl AuthUser {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::Forbidden("Admin only".into()))
        }
    }

    pub fn require_admin_or_manager(&self) -> Result<(), AppError> {
        if self.is_admin || self.is_manager {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Access denied. Only admins and managers can view this information.".into(),
            ))
        }
    }

    /// The owning employee, any admin, or any manager
    pub fn require_self_or_privileged(&self, employee_id: &str) -> Result<(), AppError> {
        if self.employee_id == employee_id || self.is_admin || self.is_manager {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "Access denied. You can only view your own records.".into(),
            ))
        }
    }
}
