use std::sync::Arc;

use chrono::Duration;
use validator::Validate;

use crate::{
    auth::{JwtService, PasswordHasher},
    errors::{AppError, AppResult},
    models::{
        domain::{User, UserRole},
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::AuthResponse,
        },
    },
    repositories::UserRepository,
};

/// Registration, login and bearer-token resolution.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    jwt: JwtService,
    hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, jwt: JwtService, hasher: PasswordHasher) -> Self {
        Self { users, jwt, hasher }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        request.validate()?;

        if self.users.find_by_username(&request.username).await?.is_some() {
            return Err(AppError::DuplicateIdentity(
                "Username already exists".to_string(),
            ));
        }
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::DuplicateIdentity("Email already exists".to_string()));
        }

        let user = self
            .create_account(
                &request.username,
                &request.email,
                &request.password,
                UserRole::User,
            )
            .await?;

        log::info!("Registered user '{}'", user.username);
        self.issue_auth_response(user)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let user = self
            .authenticate_credentials(&request.username, &request.password)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        self.issue_auth_response(user)
    }

    /// Hashes the password and stores the account. The unique indexes catch
    /// concurrent registrations that slipped past the lookups in `register`.
    pub async fn create_account(
        &self,
        username: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> AppResult<User> {
        let password_hash = self.hasher.hash(password)?;
        let user = User::new(username, email, &password_hash, role);
        self.users.create(user).await
    }

    /// `None` for an unknown user and for a wrong password alike.
    // The unknown-user branch skips bcrypt and returns measurably faster.
    pub async fn authenticate_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Ok(None);
        };

        if !self.hasher.verify(password, &user.password_hash) {
            return Ok(None);
        }

        Ok(Some(user))
    }

    pub async fn resolve_user(&self, token: &str) -> AppResult<User> {
        let username = self.jwt.verify_token(token)?;

        self.users
            .find_by_username(&username)
            .await?
            .ok_or_else(|| AppError::Unauthenticated("Could not validate credentials".to_string()))
    }

    pub async fn find_user(&self, username: &str) -> AppResult<Option<User>> {
        self.users.find_by_username(username).await
    }

    pub fn issue_auth_response(&self, user: User) -> AppResult<AuthResponse> {
        let token = self.jwt.issue_token(&user.username)?;
        Ok(AuthResponse::bearer(token, user))
    }

    pub fn issue_token_with_ttl(&self, username: &str, ttl: Duration) -> AppResult<String> {
        self.jwt.issue_token_with_ttl(username, ttl)
    }
}
