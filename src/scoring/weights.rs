//! Weight table for the wellness score.
//!
//! Product-chosen values with no clinical calibration. Keep them verbatim;
//! stored journals and the plant artwork are tuned against these numbers.

pub const BASE_SCORE: i32 = 50;

pub const HYDRATION_GOAL_DRINKS: u32 = 8;
pub const HYDRATION_GOOD_DRINKS: u32 = 6;
pub const HYDRATION_LOW_DRINKS: u32 = 4;
pub const HYDRATION_GOAL: i32 = 10;
pub const HYDRATION_GOOD: i32 = 5;
pub const HYDRATION_LOW: i32 = -15;

pub const WEE_CLEAR: i32 = 5;
pub const WEE_DARK: i32 = -10;

pub const BP_TARGET_SYSTOLIC: i32 = 130;
pub const BP_TARGET_DIASTOLIC: i32 = 80;
pub const BP_HIGH_SYSTOLIC: i32 = 140;
pub const BP_HIGH_DIASTOLIC: i32 = 90;
pub const BP_ON_TARGET: i32 = 10;
pub const BP_HIGH: i32 = -15;

pub const EXERCISE_ACTIVE: i32 = 15;
pub const EXERCISE_SOME: i32 = 8;
pub const EXERCISE_NONE: i32 = -5;

pub const ENERGY_HIGH: i32 = 5;
pub const ENERGY_LOW: i32 = -5;

pub const MOOD_HAPPY: i32 = 10;
pub const MOOD_SAD: i32 = -10;

pub const SALTY_MEALS_LIMIT: u32 = 2;
pub const SALT_OVER_LIMIT: i32 = -10;
pub const SALT_FREE: i32 = 5;

pub const MEDS_ALL_TAKEN: i32 = 10;
pub const MEDS_MOSTLY_MISSED: i32 = -10;

pub const SYMPTOM_STRONG: i32 = -10;
pub const SYMPTOM_MILD: i32 = -3;

pub const EDEMA_SEVERE: i32 = -15;
pub const EDEMA_MODERATE: i32 = -8;
pub const EDEMA_MILD: i32 = -3;

pub const EXERCISE_STREAK_DAYS: u32 = 3;
pub const MOOD_STREAK_DAYS: u32 = 5;
pub const STREAK_BONUS: i32 = 5;

pub const THRIVING_MIN: i32 = 80;
pub const HEALTHY_MIN: i32 = 60;
pub const OKAY_MIN: i32 = 40;
pub const STRESSED_MIN: i32 = 20;

/// Strong symptoms at or above this count raise the at-risk flag.
pub const RISK_STRONG_SYMPTOMS: u32 = 2;
