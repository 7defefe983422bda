use serde::Serialize;

use crate::models::HealthData;
use crate::scoring::weights::EXERCISE_STREAK_DAYS;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyHighlights {
    pub active_days: u32,
    /// Days in a row without a sad mood, out of seven.
    pub good_mood_days: u32,
    /// Only reported once the streak earns flowers.
    pub exercise_streak: Option<u32>,
    pub perfect_meds_days: u32,
    pub salty_meals: u32,
    pub alcohol_days: u32,
}

pub fn weekly_highlights(data: &HealthData) -> WeeklyHighlights {
    WeeklyHighlights {
        active_days: data.weekly_active_days,
        good_mood_days: data.mood_streak,
        exercise_streak: (data.exercise_streak >= EXERCISE_STREAK_DAYS)
            .then_some(data.exercise_streak),
        perfect_meds_days: u32::from(data.all_medications_taken()),
        salty_meals: data.weekly_salty_meals,
        alcohol_days: data.weekly_alcohol_days,
    }
}
