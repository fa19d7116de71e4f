use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Score};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    async fn create(&self, score: Score) -> AppResult<Score>;
    /// Newest first.
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Score>>;
    /// Newest first.
    async fn find_all(&self) -> AppResult<Vec<Score>>;
}

pub struct MongoScoreRepository {
    collection: Collection<Score>,
}

impl MongoScoreRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("scores");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for scores collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_id_index).await?;

        log::info!("Successfully created indexes for scores collection");
        Ok(())
    }
}

// Timestamps are stored as RFC 3339 strings, so ordering happens here rather
// than in the query.
fn newest_first(mut scores: Vec<Score>) -> Vec<Score> {
    scores.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    scores
}

#[async_trait]
impl ScoreRepository for MongoScoreRepository {
    async fn create(&self, score: Score) -> AppResult<Score> {
        self.collection.insert_one(&score).await?;
        Ok(score)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Score>> {
        let scores: Vec<Score> = self
            .collection
            .find(doc! { "user_id": user_id })
            .await?
            .try_collect()
            .await?;
        Ok(newest_first(scores))
    }

    async fn find_all(&self) -> AppResult<Vec<Score>> {
        let scores: Vec<Score> = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(newest_first(scores))
    }
}
