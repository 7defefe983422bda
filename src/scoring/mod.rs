pub mod breakdown;
pub mod classify;
pub mod weights;

pub use breakdown::{score_breakdown, ScoreBreakdown};
pub use classify::{
    classify, is_at_risk, show_flowers, show_sunshine, wellness_score, Classification, PlantState,
};
