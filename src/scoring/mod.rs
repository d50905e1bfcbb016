pub mod engine;
pub mod verdict;

pub use engine::{calculate_score, soil_matches, CriterionCheck, ScoreResult, POINTS_PER_CRITERION};
pub use verdict::Verdict;
