// Score dataset domain models
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of the collaboration dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub meeting_number: i64,
    pub speaker_number: i64,
    pub overall_collaboration_score: f64,
}

impl ScoreRecord {
    pub fn new(meeting_number: i64, speaker_number: i64, overall_collaboration_score: f64) -> Self {
        Self {
            meeting_number,
            speaker_number,
            overall_collaboration_score,
        }
    }
}

/// Immutable snapshot of the records handed over by the dataset provider.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<ScoreRecord>,
}

impl Dataset {
    pub fn new(records: Vec<ScoreRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct meeting numbers in order of first appearance
    pub fn meeting_numbers(&self) -> Vec<i64> {
        distinct_in_order(self.records.iter().map(|r| r.meeting_number))
    }

    /// Distinct speaker numbers in order of first appearance
    pub fn speaker_numbers(&self) -> Vec<i64> {
        distinct_in_order(self.records.iter().map(|r| r.speaker_number))
    }
}

/// Keep the first occurrence of every value, preserving order.
pub fn distinct_in_order<I>(values: I) -> Vec<i64>
where
    I: IntoIterator<Item = i64>,
{
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_numbers_keep_first_appearance() {
        let dataset = Dataset::new(vec![
            ScoreRecord::new(3, 2, 1.0),
            ScoreRecord::new(1, 2, 1.0),
            ScoreRecord::new(3, 7, 1.0),
            ScoreRecord::new(2, 1, 1.0),
        ]);

        assert_eq!(dataset.meeting_numbers(), vec![3, 1, 2]);
        assert_eq!(dataset.speaker_numbers(), vec![2, 7, 1]);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.meeting_numbers().is_empty());
    }
}
