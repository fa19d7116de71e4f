use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
};

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration: Duration,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            expiration: Duration::hours(expiration_hours),
        }
    }

    pub fn issue_token(&self, subject: &str) -> AppResult<String> {
        self.issue_token_with_ttl(subject, self.expiration)
    }

    pub fn issue_token_with_ttl(&self, subject: &str, ttl: Duration) -> AppResult<String> {
        let claims = Claims::new(subject, ttl);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    /// Returns the token's subject. Every decoding failure, including an
    /// expired token or an empty subject, is reported as `Unauthenticated`.
    pub fn verify_token(&self, token: &str) -> AppResult<String> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::Unauthenticated("Token has expired".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::Unauthenticated("Token signature is invalid".to_string())
                    }
                    _ => AppError::Unauthenticated("Invalid token".to_string()),
                }
            })?;

        let subject = token_data.claims.sub;
        if subject.trim().is_empty() {
            return Err(AppError::Unauthenticated(
                "Token has no subject".to_string(),
            ));
        }

        Ok(subject)
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }
}
