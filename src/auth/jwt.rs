use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Claims;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error};
use uuid::Uuid;

fn now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as usize)
        .unwrap_or_default()
}

pub struct TokenSubject<'a> {
    pub employee_id: &'a str,
    pub is_admin: bool,
    pub is_manager: bool,
    pub hire_status: &'a str,
}

pub fn generate_access_token(
    subject: TokenSubject<'_>,
    secret: &str,
    ttl: usize,
) -> Result<String, Error> {
    let claims = Claims {
        sub: subject.employee_id.to_string(),
        employee_id: subject.employee_id.to_string(),
        is_admin: subject.is_admin,
        is_manager: subject.is_manager,
        hire_status: subject.hire_status.to_string(),
        exp: now() + ttl,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

/// `Authorization` header carrying a fresh token, for handler tests
#[cfg(test)]
pub fn bearer_header(
    employee_id: &str,
    is_admin: bool,
    is_manager: bool,
    secret: &str,
) -> (&'static str, String) {
    let subject = TokenSubject {
        employee_id,
        is_admin,
        is_manager,
        hire_status: "Active",
    };
    let token = generate_access_token(subject, secret, 900).unwrap();
    ("Authorization", format!("Bearer {token}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> TokenSubject<'static> {
        TokenSubject {
            employee_id: "E001",
            is_admin: false,
            is_manager: true,
            hire_status: "Active",
        }
    }

    #[test]
    fn issued_token_carries_role_claims() {
        let token = generate_access_token(subject(), "secret", 900).unwrap();
        let claims = verify_token(&token, "secret").unwrap();

        assert_eq!(claims.employee_id, "E001");
        assert!(claims.is_manager);
        assert!(!claims.is_admin);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_access_token(subject(), "secret", 900).unwrap();
        assert!(verify_token(&token, "other").is_err());
    }
}
