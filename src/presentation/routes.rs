// Router assembly
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dispatch_event, health_check, list_meeting_options, list_speaker_options, render_chart,
    reset_selection,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/options/meetings", get(list_meeting_options))
        .route("/options/speakers", get(list_speaker_options))
        .route("/selection/reset", post(reset_selection))
        .route("/chart", post(render_chart))
        .route("/events", post(dispatch_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
