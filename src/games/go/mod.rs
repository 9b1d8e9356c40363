//! Go (Territory Control).

pub mod capture;
pub mod ko;
pub mod scoring;

pub use capture::{capture_dead_neighbors, would_be_suicide, would_capture};
pub use ko::KoTracker;
pub use scoring::{
    calculate_score, count_territory, find_dead_stones, is_eye, ScoreReport, Territory,
};
