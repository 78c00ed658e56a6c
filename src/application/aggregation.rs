// Filtering and group-by aggregation over score records.
//
// Groups come out in ascending key order.
use crate::domain::score::ScoreRecord;
use crate::domain::stats::{mean, sample_std};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingSummary {
    pub meeting_number: i64,
    pub mean: f64,
    pub std: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerMeetingMean {
    pub meeting_number: i64,
    pub speaker_number: i64,
    pub mean: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerMean {
    pub speaker_number: i64,
    pub mean: f64,
}

/// Keep rows matching both filters. An empty filter places no constraint
/// on its dimension.
pub fn filter_records<'a>(
    records: &'a [ScoreRecord],
    meetings: &[i64],
    speakers: &[i64],
) -> Vec<&'a ScoreRecord> {
    records
        .iter()
        .filter(|r| meetings.is_empty() || meetings.contains(&r.meeting_number))
        .filter(|r| speakers.is_empty() || speakers.contains(&r.speaker_number))
        .collect()
}

/// Mean and sample std of the score per meeting
pub fn summarize_by_meeting(rows: &[&ScoreRecord]) -> Vec<MeetingSummary> {
    let mut groups: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.meeting_number)
            .or_default()
            .push(row.overall_collaboration_score);
    }

    groups
        .into_iter()
        .filter_map(|(meeting_number, scores)| {
            Some(MeetingSummary {
                meeting_number,
                mean: mean(&scores)?,
                std: sample_std(&scores)?,
            })
        })
        .collect()
}

/// Mean score per (meeting, speaker) pair
pub fn mean_by_meeting_speaker(rows: &[&ScoreRecord]) -> Vec<SpeakerMeetingMean> {
    let mut groups: BTreeMap<(i64, i64), Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups
            .entry((row.meeting_number, row.speaker_number))
            .or_default()
            .push(row.overall_collaboration_score);
    }

    groups
        .into_iter()
        .filter_map(|((meeting_number, speaker_number), scores)| {
            Some(SpeakerMeetingMean {
                meeting_number,
                speaker_number,
                mean: mean(&scores)?,
            })
        })
        .collect()
}

/// Mean score per speaker across all given rows
pub fn mean_by_speaker(rows: &[&ScoreRecord]) -> Vec<SpeakerMean> {
    let mut groups: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.speaker_number)
            .or_default()
            .push(row.overall_collaboration_score);
    }

    groups
        .into_iter()
        .filter_map(|(speaker_number, scores)| {
            Some(SpeakerMean {
                speaker_number,
                mean: mean(&scores)?,
            })
        })
        .collect()
}
