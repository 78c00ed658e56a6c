// Repository trait for the score dataset provider
use crate::domain::score::ScoreRecord;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Load every score record. Called once at start-up; a malformed
    /// dataset is a fatal error for the caller.
    async fn load_scores(&self) -> anyhow::Result<Vec<ScoreRecord>>;
}
