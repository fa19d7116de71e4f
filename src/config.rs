use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_JWT_SECRET: &str = "dev_secret_key_change_in_production";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_USER_PASSWORD: &str = "user123";

#[derive(Clone, Debug)]
pub struct Config {
    pub app_env: String,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
    pub cors_allowed_origins: Vec<String>,
    pub seed_on_startup: bool,
    pub seed_admin_password: SecretString,
    pub seed_user_password: SecretString,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "techvocab-local".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(24),
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(bcrypt::DEFAULT_COST),
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:5173,http://localhost:3000".to_string()),
            ),
            seed_on_startup: env::var("SEED_ON_STARTUP")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
            seed_admin_password: SecretString::from(
                env::var("SEED_ADMIN_PASSWORD")
                    .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
            ),
            seed_user_password: SecretString::from(
                env::var("SEED_USER_PASSWORD")
                    .unwrap_or_else(|_| DEFAULT_USER_PASSWORD.to_string()),
            ),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects settings that are only acceptable on a developer machine.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEFAULT_JWT_SECRET {
            return Err(AppError::ValidationError(
                "JWT_SECRET is using its default value".to_string(),
            ));
        }

        if jwt_secret.len() < 32 {
            return Err(AppError::ValidationError(format!(
                "JWT_SECRET is too short ({}), must be at least 32 characters",
                jwt_secret.len()
            )));
        }

        if self.seed_on_startup
            && (self.seed_admin_password.expose_secret() == DEFAULT_ADMIN_PASSWORD
                || self.seed_user_password.expose_secret() == DEFAULT_USER_PASSWORD)
        {
            return Err(AppError::ValidationError(
                "Seed passwords must be overridden when seeding in production".to_string(),
            ));
        }

        self.validate()
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(AppError::ValidationError(format!(
                "BCRYPT_COST must be between 4 and 31, got {}",
                self.bcrypt_cost
            )));
        }

        if self.jwt_expiration_hours <= 0 {
            return Err(AppError::ValidationError(
                "JWT_EXPIRATION_HOURS must be positive".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            app_env: "test".to_string(),
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "techvocab-test".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            bcrypt_cost: 4,
            cors_allowed_origins: vec!["http://localhost:5173".to_string()],
            seed_on_startup: false,
            seed_admin_password: SecretString::from("admin123".to_string()),
            seed_user_password: SecretString::from("user123".to_string()),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
