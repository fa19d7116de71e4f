use secrecy::ExposeSecret;

use crate::{
    app_state::AppState,
    constants::seed_terms::{
        SEED_ADMIN_EMAIL, SEED_ADMIN_USERNAME, SEED_TERMS, SEED_USER_EMAIL, SEED_USER_USERNAME,
    },
    errors::{AppError, AppResult},
    models::{domain::UserRole, dto::request::CreateTermRequest},
};

/// Creates the bootstrap accounts and the sample catalog. Does nothing when
/// the `admin` account already exists. Returns whether anything was written.
pub async fn seed_database(state: &AppState) -> AppResult<bool> {
    let auth = &state.auth_service;

    if auth.find_user(SEED_ADMIN_USERNAME).await?.is_some() {
        log::info!("Seed data already present, skipping");
        return Ok(false);
    }

    auth.create_account(
        SEED_ADMIN_USERNAME,
        SEED_ADMIN_EMAIL,
        state.config.seed_admin_password.expose_secret(),
        UserRole::Admin,
    )
    .await?;

    if auth.find_user(SEED_USER_USERNAME).await?.is_none() {
        auth.create_account(
            SEED_USER_USERNAME,
            SEED_USER_EMAIL,
            state.config.seed_user_password.expose_secret(),
            UserRole::User,
        )
        .await?;
    }

    let mut created = 0;
    for seed in SEED_TERMS {
        let request = CreateTermRequest {
            term: seed.term.to_string(),
            definition: seed.definition.to_string(),
            example: seed.example.to_string(),
            real_world: seed.real_world.to_string(),
            difficulty: seed.difficulty,
        };

        match state.term_service.create_term(request).await {
            Ok(_) => created += 1,
            Err(AppError::AlreadyExists(_)) => {}
            Err(e) => return Err(e),
        }
    }

    log::info!(
        "Seeded accounts '{}' and '{}' with {} sample terms",
        SEED_ADMIN_USERNAME,
        SEED_USER_USERNAME,
        created
    );
    Ok(true)
}
