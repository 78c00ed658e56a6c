// Event dispatcher - Routes dashboard control changes to explorer outputs
use crate::application::error::Result;
use crate::application::score_explorer::ScoreExplorer;
use crate::domain::chart::ChartSpec;
use crate::domain::selection::{DropdownOption, SelectionState, ViewType};
use serde::{Deserialize, Serialize};

/// A change on one of the dashboard controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum UiEvent {
    ViewTypeChanged(String),
    MeetingFilterChanged(Option<Vec<i64>>),
    SpeakerFilterChanged(Option<Vec<i64>>),
    ResetClicked { n_clicks: u64 },
}

/// An output the shell must apply to its controls or chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "target", content = "value", rename_all = "snake_case")]
pub enum UiUpdate {
    MeetingOptions(Vec<DropdownOption>),
    SpeakerOptions(Vec<DropdownOption>),
    FilterValues {
        meetings: Option<Vec<i64>>,
        speakers: Option<Vec<i64>>,
    },
    Figure(ChartSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dispatch {
    pub state: SelectionState,
    pub updates: Vec<UiUpdate>,
}

#[derive(Clone)]
pub struct EventDispatcher {
    explorer: ScoreExplorer,
}

impl EventDispatcher {
    pub fn new(explorer: ScoreExplorer) -> Self {
        Self { explorer }
    }

    /// Apply `event` to `state` and compute every output it triggers.
    /// Nothing is retained between calls.
    pub fn dispatch(&self, state: SelectionState, event: UiEvent) -> Result<Dispatch> {
        let mut state = state;
        let mut updates = Vec::new();

        match event {
            UiEvent::ViewTypeChanged(raw) => {
                state.view_type = raw.parse::<ViewType>()?;
                updates.push(UiUpdate::MeetingOptions(self.explorer.list_meeting_options()));
                updates.push(UiUpdate::SpeakerOptions(self.explorer.list_speaker_options()));
            }
            UiEvent::MeetingFilterChanged(meetings) => {
                state.selected_meetings = meetings;
            }
            UiEvent::SpeakerFilterChanged(speakers) => {
                state.selected_speakers = speakers;
            }
            UiEvent::ResetClicked { n_clicks } => {
                tracing::debug!("Reset clicked ({} total)", n_clicks);
                let (meetings, speakers) = self.explorer.reset_selection();
                state.selected_meetings = meetings.clone();
                state.selected_speakers = speakers.clone();
                updates.push(UiUpdate::FilterValues { meetings, speakers });
            }
        }

        updates.push(UiUpdate::Figure(self.explorer.render_selection(&state)));
        Ok(Dispatch { state, updates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dataset_repository::testing::sample_records;
    use crate::application::error::ExplorerError;
    use crate::domain::score::Dataset;
    use std::sync::Arc;

    fn dispatcher() -> EventDispatcher {
        EventDispatcher::new(ScoreExplorer::new(Arc::new(Dataset::new(sample_records()))))
    }

    fn figure(dispatch: &Dispatch) -> &ChartSpec {
        match dispatch.updates.last() {
            Some(UiUpdate::Figure(chart)) => chart,
            other => panic!("expected figure update last, got {:?}", other),
        }
    }

    #[test]
    fn test_view_type_change_refreshes_options_and_figure() {
        let dispatch = dispatcher()
            .dispatch(
                SelectionState::default(),
                UiEvent::ViewTypeChanged("by_speakers".to_string()),
            )
            .unwrap();

        assert_eq!(dispatch.state.view_type, ViewType::BySpeakers);
        assert_eq!(dispatch.updates.len(), 3);
        assert!(matches!(&dispatch.updates[0], UiUpdate::MeetingOptions(o) if o.len() == 2));
        assert!(matches!(&dispatch.updates[1], UiUpdate::SpeakerOptions(o) if o.len() == 2));
        assert_eq!(figure(&dispatch).data.len(), 2);
    }

    #[test]
    fn test_invalid_view_type_is_an_error() {
        let result = dispatcher().dispatch(
            SelectionState::default(),
            UiEvent::ViewTypeChanged("stacked".to_string()),
        );
        assert!(matches!(result, Err(ExplorerError::InvalidViewType(_))));
    }

    #[test]
    fn test_meeting_filter_change_renders_bar_chart() {
        let dispatch = dispatcher()
            .dispatch(
                SelectionState::default(),
                UiEvent::MeetingFilterChanged(Some(vec![1])),
            )
            .unwrap();

        assert_eq!(dispatch.state.selected_meetings, Some(vec![1]));
        assert_eq!(dispatch.updates.len(), 1);
        assert!(figure(&dispatch).is_bar());
    }

    #[test]
    fn test_reset_clears_filters() {
        let state = SelectionState {
            view_type: ViewType::BySpeakers,
            selected_meetings: Some(vec![1]),
            selected_speakers: Some(vec![2]),
        };
        let dispatch = dispatcher()
            .dispatch(state, UiEvent::ResetClicked { n_clicks: 4 })
            .unwrap();

        assert_eq!(dispatch.state.selected_meetings, None);
        assert_eq!(dispatch.state.selected_speakers, None);
        assert_eq!(dispatch.state.view_type, ViewType::BySpeakers);
        assert_eq!(
            dispatch.updates[0],
            UiUpdate::FilterValues {
                meetings: None,
                speakers: None
            }
        );
        assert!(!figure(&dispatch).is_bar());
    }

    #[test]
    fn test_event_json_shape() {
        let event: UiEvent =
            serde_json::from_str(r#"{"kind":"speaker_filter_changed","value":[1,2]}"#).unwrap();
        assert_eq!(event, UiEvent::SpeakerFilterChanged(Some(vec![1, 2])));

        let event: UiEvent =
            serde_json::from_str(r#"{"kind":"reset_clicked","value":{"n_clicks":1}}"#).unwrap();
        assert_eq!(event, UiEvent::ResetClicked { n_clicks: 1 });
    }
}
