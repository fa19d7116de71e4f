use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    db::{is_duplicate_key_error, Database},
    errors::{AppError, AppResult},
    models::domain::Term,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TermRepository: Send + Sync {
    /// Fails with `AlreadyExists` when the term name is taken.
    async fn create(&self, term: Term) -> AppResult<Term>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Term>>;
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Term>>;
    async fn find_all(&self) -> AppResult<Vec<Term>>;
    async fn update(&self, term: Term) -> AppResult<Term>;
    async fn delete(&self, id: &str) -> AppResult<()>;
}

pub struct MongoTermRepository {
    collection: Collection<Term>,
}

impl MongoTermRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("terms");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for terms collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let term_index = IndexModel::builder()
            .keys(doc! { "term": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("term_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(term_index).await?;

        log::info!("Successfully created indexes for terms collection");
        Ok(())
    }
}

fn term_conflict(err: mongodb::error::Error) -> AppError {
    if is_duplicate_key_error(&err) {
        AppError::AlreadyExists("Term already exists".to_string())
    } else {
        err.into()
    }
}

#[async_trait]
impl TermRepository for MongoTermRepository {
    async fn create(&self, term: Term) -> AppResult<Term> {
        self.collection
            .insert_one(&term)
            .await
            .map_err(term_conflict)?;
        Ok(term)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Term>> {
        let term = self.collection.find_one(doc! { "id": id }).await?;
        Ok(term)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Term>> {
        let term = self.collection.find_one(doc! { "term": name }).await?;
        Ok(term)
    }

    async fn find_all(&self) -> AppResult<Vec<Term>> {
        let terms = self
            .collection
            .find(doc! {})
            .sort(doc! { "term": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(terms)
    }

    async fn update(&self, term: Term) -> AppResult<Term> {
        let result = self
            .collection
            .replace_one(doc! { "id": &term.id }, &term)
            .await
            .map_err(term_conflict)?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Term with id '{}' not found",
                term.id
            )));
        }

        Ok(term)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Term with id '{}' not found", id)));
        }

        Ok(())
    }
}
