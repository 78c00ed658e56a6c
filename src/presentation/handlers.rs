// HTTP request handlers
use crate::application::error::ExplorerError;
use crate::application::event_dispatcher::UiEvent;
use crate::domain::selection::{SelectionState, ViewType};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct ChartRequest {
    #[serde(default)]
    pub meetings: Option<Vec<i64>>,
    #[serde(default)]
    pub speakers: Option<Vec<i64>>,
    pub view_type: String,
}

#[derive(Deserialize)]
pub struct EventRequest {
    #[serde(default)]
    pub state: SelectionState,
    pub event: UiEvent,
}

#[derive(Serialize)]
pub struct FilterValues {
    pub meetings: Option<Vec<i64>>,
    pub speakers: Option<Vec<i64>>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

pub async fn list_meeting_options(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let options = state.explorer.list_meeting_options();
    respond(&options, StatusCode::OK, accepts_brotli(&headers)).await
}

pub async fn list_speaker_options(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let options = state.explorer.list_speaker_options();
    respond(&options, StatusCode::OK, accepts_brotli(&headers)).await
}

pub async fn reset_selection(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let (meetings, speakers) = state.explorer.reset_selection();
    respond(
        &FilterValues { meetings, speakers },
        StatusCode::OK,
        accepts_brotli(&headers),
    )
    .await
}

/// Render the chart for one selection
pub async fn render_chart(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChartRequest>,
) -> Response {
    let compress = accepts_brotli(&headers);

    let view_type = match request.view_type.parse::<ViewType>() {
        Ok(view_type) => view_type,
        Err(e) => return error_response(ExplorerError::from(e), compress).await,
    };

    let chart = state.explorer.render_chart(
        request.meetings.as_deref().unwrap_or_default(),
        request.speakers.as_deref().unwrap_or_default(),
        view_type,
    );
    respond(&chart, StatusCode::OK, compress).await
}

/// Apply a control change and return the next state plus every output it triggers
pub async fn dispatch_event(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<EventRequest>,
) -> Response {
    let compress = accepts_brotli(&headers);

    match state.dispatcher.dispatch(request.state, request.event) {
        Ok(dispatch) => respond(&dispatch, StatusCode::OK, compress).await,
        Err(e) => error_response(e, compress).await,
    }
}

async fn respond<T: Serialize>(data: &T, status: StatusCode, compress: bool) -> Response {
    match json_response(data, status, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

async fn error_response(err: ExplorerError, compress: bool) -> Response {
    let status = match &err {
        ExplorerError::InvalidViewType(_) => StatusCode::BAD_REQUEST,
        ExplorerError::Dataset(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::warn!("Request failed: {}", err);
    respond(&json!({ "error": err.to_string() }), status, compress).await
}
