use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Term,
        dto::request::{CreateTermRequest, UpdateTermRequest},
    },
    repositories::TermRepository,
};

pub struct TermService {
    repository: Arc<dyn TermRepository>,
}

impl TermService {
    pub fn new(repository: Arc<dyn TermRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_terms(&self) -> AppResult<Vec<Term>> {
        self.repository.find_all().await
    }

    pub async fn get_term(&self, id: &str) -> AppResult<Term> {
        let term = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Term with id '{}' not found", id)))?;

        Ok(term)
    }

    pub async fn create_term(&self, request: CreateTermRequest) -> AppResult<Term> {
        request.validate()?;

        if self.repository.find_by_name(&request.term).await?.is_some() {
            return Err(AppError::AlreadyExists("Term already exists".to_string()));
        }

        let term = self.repository.create(Term::from_request(request)).await?;
        log::info!("Created term '{}'", term.term);
        Ok(term)
    }

    pub async fn update_term(&self, id: &str, request: UpdateTermRequest) -> AppResult<Term> {
        request.validate()?;

        let mut term = self.get_term(id).await?;

        if let Some(new_name) = request.term.as_deref() {
            if new_name != term.term {
                if let Some(existing) = self.repository.find_by_name(new_name).await? {
                    if existing.id != term.id {
                        return Err(AppError::AlreadyExists("Term already exists".to_string()));
                    }
                }
            }
        }

        term.apply_update(request);
        self.repository.update(term).await
    }

    /// Returns the removed term so callers can name it in their reply.
    pub async fn delete_term(&self, id: &str) -> AppResult<Term> {
        let term = self.get_term(id).await?;
        self.repository.delete(id).await?;
        log::info!("Deleted term '{}'", term.term);
        Ok(term)
    }
}
