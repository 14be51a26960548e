use std::sync::RwLock;

use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use password_hash::rand_core::OsRng;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Incorrect current password.")]
    IncorrectCurrentPassword,

    #[error("No changes requested.")]
    NoChanges,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("session token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialChange {
    pub current_password: String,
    pub new_username: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CredentialsChanged {
    pub username_changed: bool,
    pub password_changed: bool,
}

/// Decides who may use the admin surface and how their session is carried.
pub trait AuthPolicy: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
    fn issue_session(&self) -> Result<String, AuthError>;
    fn is_valid(&self, token: &str) -> bool;
    fn change_credentials(&self, change: CredentialChange)
    -> Result<CredentialsChanged, AuthError>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

struct Credentials {
    username: String,
    password_hash: String,
}

/// One admin account from configuration, sessions as signed JWTs.
///
/// Changing the username invalidates sessions issued for the old one.
pub struct StaticCredentials {
    credentials: RwLock<Credentials>,
    secret: SecretString,
    session_ttl: Duration,
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

fn password_matches(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

impl StaticCredentials {
    pub fn new(
        username: impl Into<String>,
        password: &SecretString,
        secret: SecretString,
        session_ttl: Duration,
    ) -> Result<Self, AuthError> {
        Ok(Self {
            credentials: RwLock::new(Credentials {
                username: username.into(),
                password_hash: hash_password(password.expose_secret())?,
            }),
            secret,
            session_ttl,
        })
    }

    pub fn username(&self) -> String {
        self.read().username.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Credentials> {
        self.credentials
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn decode(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let data = decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

impl AuthPolicy for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        let credentials = self.read();
        credentials.username == username && password_matches(password, &credentials.password_hash)
    }

    fn issue_session(&self) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: self.username(),
            iat: now.timestamp() as usize,
            exp: (now + self.session_ttl).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )?;
        Ok(token)
    }

    fn is_valid(&self, token: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.sub == self.read().username,
            Err(_) => false,
        }
    }

    fn change_credentials(
        &self,
        change: CredentialChange,
    ) -> Result<CredentialsChanged, AuthError> {
        let new_username = change
            .new_username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());
        let new_password = change.new_password.filter(|p| !p.trim().is_empty());

        let mut credentials = self
            .credentials
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if !password_matches(&change.current_password, &credentials.password_hash) {
            return Err(AuthError::IncorrectCurrentPassword);
        }
        if new_username.is_none() && new_password.is_none() {
            return Err(AuthError::NoChanges);
        }

        let outcome = CredentialsChanged {
            username_changed: new_username.is_some(),
            password_changed: new_password.is_some(),
        };
        if let Some(password) = new_password {
            credentials.password_hash = hash_password(&password)?;
        }
        if let Some(username) = new_username {
            credentials.username = username;
        }
        Ok(outcome)
    }
}
