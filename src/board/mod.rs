//! Board representation and group analysis shared by both games.

pub mod groups;
pub mod state;

pub use groups::GroupAnalyzer;
pub use state::{point_label, BoardState, ORTHOGONAL};
