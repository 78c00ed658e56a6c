// Score explorer - Filter, aggregate and chart the collaboration scores
use crate::application::aggregation::{
    filter_records, mean_by_meeting_speaker, mean_by_speaker, summarize_by_meeting,
};
use crate::application::dataset_repository::DatasetRepository;
use crate::application::error::{ExplorerError, Result};
use crate::domain::chart::{
    Axis, BarMarker, BarTrace, ChartSpec, ErrorBars, Layout, MarkerStyle, ScatterTrace, Trace,
    TraceMode,
};
use crate::domain::palette::{assign_colors, ColorAssignment};
use crate::domain::score::{distinct_in_order, Dataset, ScoreRecord};
use crate::domain::selection::{DropdownOption, SelectionState, ViewType};
use std::sync::Arc;

pub const TREND_TITLE: &str = "Mean of Overall Collaboration Score by Meeting";
pub const BAR_TITLE: &str = "Mean Overall Collaboration Score by Speaker for Selected Meetings";
const TOTAL_SERIES_NAME: &str = "Mean Collaboration Score";
const TOTAL_COLOR: &str = "blue";
const ERROR_MARKER_SIZE: u32 = 8;

#[derive(Clone)]
pub struct ScoreExplorer {
    dataset: Arc<Dataset>,
}

impl ScoreExplorer {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Load the dataset once from the provider and build the explorer over it
    pub async fn load(repository: Arc<dyn DatasetRepository>) -> Result<Self> {
        let records = repository
            .load_scores()
            .await
            .map_err(|e| ExplorerError::Dataset(format!("{:#}", e)))?;
        let dataset = Dataset::new(records);
        if dataset.is_empty() {
            tracing::warn!("Score dataset is empty; every chart will be blank");
        } else {
            tracing::info!("Loaded {} collaboration score records", dataset.len());
        }
        Ok(Self::new(Arc::new(dataset)))
    }

    pub fn list_meeting_options(&self) -> Vec<DropdownOption> {
        self.dataset
            .meeting_numbers()
            .into_iter()
            .map(DropdownOption::meeting)
            .collect()
    }

    pub fn list_speaker_options(&self) -> Vec<DropdownOption> {
        self.dataset
            .speaker_numbers()
            .into_iter()
            .map(DropdownOption::speaker)
            .collect()
    }

    /// Cleared (meeting, speaker) filter values
    pub fn reset_selection(&self) -> (Option<Vec<i64>>, Option<Vec<i64>>) {
        (None, None)
    }

    pub fn render_selection(&self, state: &SelectionState) -> ChartSpec {
        self.render_chart(state.meetings(), state.speakers(), state.view_type)
    }

    pub fn render_chart(
        &self,
        selected_meetings: &[i64],
        selected_speakers: &[i64],
        view_type: ViewType,
    ) -> ChartSpec {
        let rows = filter_records(self.dataset.records(), selected_meetings, selected_speakers);
        tracing::debug!(
            view_type = %view_type,
            meetings = selected_meetings.len(),
            speakers = selected_speakers.len(),
            "Filtered {} of {} rows",
            rows.len(),
            self.dataset.len()
        );

        let (traces, colors) = match view_type {
            ViewType::Total => (total_traces(&rows), None),
            ViewType::BySpeakers => {
                let (traces, colors) = speaker_traces(&rows);
                (traces, Some(colors))
            }
        };

        let tick_vals = distinct_in_order(rows.iter().map(|r| r.meeting_number));
        let trend = ChartSpec::new(
            Layout {
                title: TREND_TITLE.to_string(),
                xaxis: Axis::with_ticks("Meeting Number", tick_vals),
                yaxis: Axis::titled("Mean Overall Collaboration Score"),
                showlegend: true,
            },
            traces,
        );

        if trend.is_empty() {
            tracing::debug!("No rows match the selection");
        }

        if selected_meetings.is_empty() {
            return trend;
        }

        let bar_rows: Vec<&ScoreRecord> = rows
            .into_iter()
            .filter(|r| selected_meetings.contains(&r.meeting_number))
            .collect();
        if bar_rows.is_empty() {
            return trend;
        }

        tracing::debug!("Substituting speaker bar chart for {} rows", bar_rows.len());
        speaker_bar_chart(&bar_rows, colors.as_ref())
    }
}

fn total_traces(rows: &[&ScoreRecord]) -> Vec<Trace> {
    let summary = summarize_by_meeting(rows);
    let x: Vec<i64> = summary.iter().map(|s| s.meeting_number).collect();
    let y: Vec<f64> = summary.iter().map(|s| s.mean).collect();
    let std: Vec<f64> = summary.iter().map(|s| s.std).collect();

    let mean_line =
        ScatterTrace::line(TOTAL_SERIES_NAME.to_string(), TOTAL_COLOR, x.clone(), y.clone());
    let error_bars = ScatterTrace {
        x,
        y,
        mode: TraceMode::Markers,
        name: None,
        line: None,
        marker: MarkerStyle {
            color: TOTAL_COLOR.to_string(),
            size: Some(ERROR_MARKER_SIZE),
        },
        error_y: Some(ErrorBars::data(std)),
        showlegend: Some(false),
    };

    vec![Trace::Scatter(mean_line), Trace::Scatter(error_bars)]
}

fn speaker_traces(rows: &[&ScoreRecord]) -> (Vec<Trace>, ColorAssignment) {
    let groups = mean_by_meeting_speaker(rows);
    let speakers = distinct_in_order(groups.iter().map(|g| g.speaker_number));
    let colors = assign_colors(&speakers);
    tracing::debug!("Assigned colours to {} speakers", speakers.len());

    let traces = speakers
        .iter()
        .map(|&speaker| {
            let (x, y): (Vec<i64>, Vec<f64>) = groups
                .iter()
                .filter(|g| g.speaker_number == speaker)
                .map(|g| (g.meeting_number, g.mean))
                .unzip();
            let color = colors.get(speaker).unwrap_or(TOTAL_COLOR);
            Trace::Scatter(ScatterTrace::line(format!("Speaker {}", speaker), color, x, y))
        })
        .collect();

    (traces, colors)
}

/// Bars coloured from the trend chart's assignment when one exists; any
/// speaker without a colour there takes one from a fresh assignment over
/// the bar order.
fn speaker_bar_chart(rows: &[&ScoreRecord], trend_colors: Option<&ColorAssignment>) -> ChartSpec {
    let means = mean_by_speaker(rows);
    let x: Vec<i64> = means.iter().map(|m| m.speaker_number).collect();
    let y: Vec<f64> = means.iter().map(|m| m.mean).collect();

    let fallback = assign_colors(&x);
    let color = x
        .iter()
        .map(|&speaker| {
            trend_colors
                .and_then(|c| c.get(speaker))
                .or_else(|| fallback.get(speaker))
                .unwrap_or(TOTAL_COLOR)
                .to_string()
        })
        .collect();

    ChartSpec::new(
        Layout {
            title: BAR_TITLE.to_string(),
            xaxis: Axis::titled("Speaker Number"),
            yaxis: Axis::titled("Overall Collaboration Score"),
            showlegend: false,
        },
        vec![Trace::Bar(BarTrace {
            x,
            y,
            marker: BarMarker { color },
        })],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dataset_repository::testing::{sample_records, InMemoryRepository};
    use crate::domain::palette::TAB10;

    fn explorer() -> ScoreExplorer {
        ScoreExplorer::new(Arc::new(Dataset::new(sample_records())))
    }

    fn scatter(trace: &Trace) -> &ScatterTrace {
        match trace {
            Trace::Scatter(t) => t,
            Trace::Bar(_) => panic!("expected scatter trace"),
        }
    }

    fn bar(chart: &ChartSpec) -> &BarTrace {
        match chart.data.as_slice() {
            [Trace::Bar(t)] => t,
            _ => panic!("expected a single bar trace"),
        }
    }

    #[test]
    fn test_options_one_per_distinct_value() {
        let explorer = ScoreExplorer::new(Arc::new(Dataset::new(vec![
            ScoreRecord::new(2, 5, 1.0),
            ScoreRecord::new(1, 5, 1.0),
            ScoreRecord::new(2, 4, 1.0),
        ])));

        let meetings = explorer.list_meeting_options();
        assert_eq!(
            meetings,
            vec![DropdownOption::meeting(2), DropdownOption::meeting(1)]
        );
        assert_eq!(meetings[0].label, "Meeting 2");

        let speakers = explorer.list_speaker_options();
        assert_eq!(speakers.len(), 2);
        assert_eq!(speakers[1].label, "Speaker 4");
    }

    #[test]
    fn test_reset_always_clears() {
        let explorer = explorer();
        for _ in 0..3 {
            assert_eq!(explorer.reset_selection(), (None, None));
        }
    }

    #[test]
    fn test_total_view_mean_and_std() {
        let chart = explorer().render_chart(&[], &[], ViewType::Total);

        assert_eq!(chart.layout.title, TREND_TITLE);
        assert!(chart.layout.showlegend);
        assert_eq!(chart.layout.xaxis.title, "Meeting Number");
        assert_eq!(chart.layout.xaxis.tickvals, Some(vec![1, 2]));
        assert_eq!(chart.data.len(), 2);

        let line = scatter(&chart.data[0]);
        assert_eq!(line.x, vec![1, 2]);
        assert_eq!(line.y, vec![15.0, 30.0]);
        assert_eq!(line.mode, TraceMode::LinesMarkers);

        let errors = scatter(&chart.data[1]);
        assert_eq!(errors.showlegend, Some(false));
        let std = &errors.error_y.as_ref().unwrap().array;
        assert!((std[0] - 7.071_067_811).abs() < 1e-6);
        assert_eq!(std[1], 0.0);
    }

    #[test]
    fn test_by_speakers_view_series() {
        let chart = explorer().render_chart(&[], &[], ViewType::BySpeakers);

        assert_eq!(chart.data.len(), 2);
        let first = scatter(&chart.data[0]);
        assert_eq!(first.name.as_deref(), Some("Speaker 1"));
        assert_eq!(first.x, vec![1, 2]);
        assert_eq!(first.y, vec![10.0, 30.0]);
        assert_eq!(first.marker.color, TAB10[0]);

        let second = scatter(&chart.data[1]);
        assert_eq!(second.name.as_deref(), Some("Speaker 2"));
        assert_eq!(second.x, vec![1]);
        assert_eq!(second.y, vec![20.0]);
        assert_eq!(second.line.as_ref().unwrap().color, TAB10[1]);
    }

    #[test]
    fn test_selected_meeting_total_view_substitutes_bar_chart() {
        let chart = explorer().render_chart(&[1], &[], ViewType::Total);

        assert!(chart.is_bar());
        assert_eq!(chart.layout.title, BAR_TITLE);
        assert!(!chart.layout.showlegend);
        let bars = bar(&chart);
        assert_eq!(bars.x, vec![1, 2]);
        assert_eq!(bars.y, vec![10.0, 20.0]);
        assert_eq!(bars.marker.color, vec![TAB10[0], TAB10[1]]);
    }

    #[test]
    fn test_bar_colors_match_trend_colors() {
        let explorer = ScoreExplorer::new(Arc::new(Dataset::new(vec![
            ScoreRecord::new(1, 9, 4.0),
            ScoreRecord::new(2, 3, 6.0),
            ScoreRecord::new(2, 9, 8.0),
        ])));

        let trend = explorer.render_chart(&[], &[], ViewType::BySpeakers);
        let trend_colors: Vec<(String, String)> = trend
            .data
            .iter()
            .map(|t| {
                let t = scatter(t);
                (t.name.clone().unwrap(), t.marker.color.clone())
            })
            .collect();
        // speaker 9 appears first in (meeting, speaker) order
        assert_eq!(trend_colors[0], ("Speaker 9".to_string(), TAB10[0].to_string()));
        assert_eq!(trend_colors[1], ("Speaker 3".to_string(), TAB10[1].to_string()));

        let chart = explorer.render_chart(&[1, 2], &[], ViewType::BySpeakers);
        let bars = bar(&chart);
        assert_eq!(bars.x, vec![3, 9]);
        assert_eq!(bars.marker.color, vec![TAB10[1], TAB10[0]]);
    }

    #[test]
    fn test_unknown_meeting_gives_empty_chart() {
        let explorer = explorer();

        let total = explorer.render_chart(&[99], &[], ViewType::Total);
        assert!(!total.is_bar());
        assert!(total.is_empty());
        assert_eq!(total.layout.xaxis.tickvals, Some(vec![]));

        let by_speakers = explorer.render_chart(&[99], &[], ViewType::BySpeakers);
        assert!(by_speakers.data.is_empty());
        assert_eq!(by_speakers.layout.title, TREND_TITLE);
    }

    #[test]
    fn test_speaker_filter_keeps_trend_chart() {
        let chart = explorer().render_chart(&[], &[2], ViewType::Total);
        assert!(!chart.is_bar());
        assert_eq!(scatter(&chart.data[0]).y, vec![20.0]);
        assert_eq!(chart.layout.xaxis.tickvals, Some(vec![1]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let explorer = explorer();
        let a = explorer.render_chart(&[1, 2], &[1], ViewType::BySpeakers);
        let b = explorer.render_chart(&[1, 2], &[1], ViewType::BySpeakers);
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_load_from_repository() {
        let repository = Arc::new(InMemoryRepository {
            records: sample_records(),
        });
        let explorer = ScoreExplorer::load(repository).await.unwrap();
        assert_eq!(explorer.list_meeting_options().len(), 2);
    }

    struct BrokenRepository;

    #[async_trait::async_trait]
    impl DatasetRepository for BrokenRepository {
        async fn load_scores(&self) -> anyhow::Result<Vec<ScoreRecord>> {
            anyhow::bail!("missing field `speaker_number`")
        }
    }

    #[tokio::test]
    async fn test_load_failure_is_dataset_error() {
        let result = ScoreExplorer::load(Arc::new(BrokenRepository)).await;
        match result {
            Err(ExplorerError::Dataset(message)) => assert!(message.contains("speaker_number")),
            _ => panic!("expected dataset error"),
        }
    }
}
