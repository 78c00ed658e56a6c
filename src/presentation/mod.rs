// Presentation layer - HTTP surface for the dashboard shell
pub mod app_state;
pub mod handlers;
pub mod routes;
