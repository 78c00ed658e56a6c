// Selection state driven by the dashboard controls
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    #[default]
    Total,
    BySpeakers,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view type '{0}' (expected 'total' or 'by_speakers')")]
pub struct ParseViewTypeError(pub String);

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Total => "total",
            ViewType::BySpeakers => "by_speakers",
        }
    }
}

impl FromStr for ViewType {
    type Err = ParseViewTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total" => Ok(ViewType::Total),
            "by_speakers" => Ok(ViewType::BySpeakers),
            other => Err(ParseViewTypeError(other.to_string())),
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the three controls. `None` or an empty list means
/// "no constraint" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(default)]
    pub view_type: ViewType,
    #[serde(default)]
    pub selected_meetings: Option<Vec<i64>>,
    #[serde(default)]
    pub selected_speakers: Option<Vec<i64>>,
}

impl SelectionState {
    pub fn meetings(&self) -> &[i64] {
        self.selected_meetings.as_deref().unwrap_or_default()
    }

    pub fn speakers(&self) -> &[i64] {
        self.selected_speakers.as_deref().unwrap_or_default()
    }
}

/// Entry of a dropdown control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: i64,
}

impl DropdownOption {
    pub fn meeting(value: i64) -> Self {
        Self {
            label: format!("Meeting {}", value),
            value,
        }
    }

    pub fn speaker(value: i64) -> Self {
        Self {
            label: format!("Speaker {}", value),
            value,
        }
    }
}
