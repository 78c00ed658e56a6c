// Domain layer - Plain data types, no I/O
pub mod chart;
pub mod palette;
pub mod score;
pub mod selection;
pub mod stats;
