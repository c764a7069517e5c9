//! Argon2id hashing and the seed record emitted for provisioning. The PHC
//! string goes to stdout; the password itself is never printed or logged.

use crate::cli::{Action, OutputFormat};
use anyhow::{Result, anyhow, bail};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use serde::Serialize;

/// Role granted to the seeded account.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Serialize)]
pub struct SeedRecord {
    pub email: String,
    pub password_hash: String,
    pub role: &'static str,
}

/// Hashes a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    if password.trim().is_empty() {
        bail!("refusing to hash an empty password");
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow!("failed to hash password: {err}"))?;

    Ok(hash.to_string())
}

/// Builds the seed record for the initial admin account.
pub fn seed_record(email: &str, password_hash: String) -> SeedRecord {
    SeedRecord {
        email: email.to_string(),
        password_hash,
        role: ADMIN_ROLE,
    }
}

/// Hashes the password and prints the requested output to stdout.
pub fn handle(action: &Action) -> Result<()> {
    let password_hash = hash_password(&action.password)?;

    tracing::info!(email = %action.email, "seeding initial admin credential");

    match action.format {
        OutputFormat::Hash => println!("{password_hash}"),
        OutputFormat::Json => {
            let record = seed_record(&action.email, password_hash);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ADMIN_ROLE, hash_password, seed_record};
    use argon2::{
        Argon2,
        password_hash::{PasswordHash, PasswordVerifier},
    };

    #[test]
    fn hash_is_a_verifiable_phc_string() {
        let hash = hash_password("correct horse battery staple").expect("hashing should succeed");

        assert!(hash.starts_with("$argon2id$"));

        let parsed = PasswordHash::new(&hash).expect("hash should parse as PHC");
        Argon2::default()
            .verify_password(b"correct horse battery staple", &parsed)
            .expect("password should verify against its own hash");
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("correct horse battery staple").expect("hashing should succeed");
        let parsed = PasswordHash::new(&hash).expect("hash should parse as PHC");

        assert!(
            Argon2::default()
                .verify_password(b"incorrect horse", &parsed)
                .is_err()
        );
    }

    #[test]
    fn salts_are_fresh_per_hash() {
        let first = hash_password("correct horse battery staple").expect("hashing should succeed");
        let second = hash_password("correct horse battery staple").expect("hashing should succeed");

        assert_ne!(first, second);
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(hash_password("").is_err());
        assert!(hash_password("   ").is_err());
    }

    #[test]
    fn seed_record_carries_the_admin_role() {
        let record = seed_record("op@atrium.dev", "$argon2id$stub".to_string());
        let json = serde_json::to_string(&record).expect("record should serialize");

        assert!(json.contains("op@atrium.dev"));
        assert!(json.contains(ADMIN_ROLE));
        assert!(json.contains("password_hash"));
    }
}
