// JSON file repository implementation
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::score::ScoreRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a JSON array of score records:
/// `[{"meeting_number": 1, "speaker_number": 2, "overall_collaboration_score": 3.5}, ...]`
#[derive(Debug, Clone)]
pub struct JsonDatasetRepository {
    path: PathBuf,
}

impl JsonDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

pub fn parse_records(raw: &str) -> Result<Vec<ScoreRecord>> {
    serde_json::from_str(raw).context("Malformed score dataset")
}

#[async_trait]
impl DatasetRepository for JsonDatasetRepository {
    async fn load_scores(&self) -> Result<Vec<ScoreRecord>> {
        tracing::debug!("Reading score dataset from {}", self.path.display());
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read dataset {}", self.path.display()))?;
        parse_records(&raw).with_context(|| format!("Invalid dataset {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_ignores_extra_fields() {
        let records = parse_records(
            r#"[{"meeting_number": 1, "speaker_number": 2, "overall_collaboration_score": 3.5, "note": "x"}]"#,
        )
        .unwrap();
        assert_eq!(records, vec![ScoreRecord::new(1, 2, 3.5)]);
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let err = parse_records(r#"[{"meeting_number": 1, "overall_collaboration_score": 3.5}]"#)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("speaker_number"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"meeting_number": 1, "speaker_number": 1, "overall_collaboration_score": 10}},
                {{"meeting_number": 2, "speaker_number": 1, "overall_collaboration_score": 30.5}}]"#
        )
        .unwrap();

        let repository = JsonDatasetRepository::new(file.path());
        let records = repository.load_scores().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].overall_collaboration_score, 30.5);
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let repository = JsonDatasetRepository::new("/nonexistent/scores.json");
        assert!(repository.load_scores().await.is_err());
    }
}
