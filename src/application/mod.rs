// Application layer - Use cases over the injected dataset
pub mod aggregation;
pub mod dataset_repository;
pub mod error;
pub mod event_dispatcher;
pub mod score_explorer;
