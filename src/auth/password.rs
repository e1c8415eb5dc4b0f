use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2.hash_password(password.as_bytes(), &salt)?.to_string())
}

pub fn verify_password(password: &str, hashed: &str) -> Result<(), argon2::password_hash::Error> {
    let argon2 = Argon2::default();
    let parsed = PasswordHash::new(hashed)?;

    argon2.verify_password(password.as_bytes(), &parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_only_the_hashed_password() {
        let hashed = hash_password("pw").unwrap();
        assert!(verify_password("pw", &hashed).is_ok());
        assert!(verify_password("pw2", &hashed).is_err());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("pw", "not-a-phc-string").is_err());
    }
}
