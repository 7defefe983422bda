use serde::{Deserialize, Serialize};

use crate::models::{EdemaLevel, EgfrTrend, HealthData, Mood, SymptomSeverity};

use super::breakdown::{is_high_blood_pressure, score_breakdown};
use super::weights::{
    EXERCISE_STREAK_DAYS, HEALTHY_MIN, OKAY_MIN, RISK_STRONG_SYMPTOMS, STRESSED_MIN, THRIVING_MIN,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlantState {
    Thriving,
    Healthy,
    Okay,
    Stressed,
    Wilted,
}

impl PlantState {
    /// Bucket a raw wellness score, highest band first.
    pub fn from_score(score: i32) -> Self {
        if score >= THRIVING_MIN {
            PlantState::Thriving
        } else if score >= HEALTHY_MIN {
            PlantState::Healthy
        } else if score >= OKAY_MIN {
            PlantState::Okay
        } else if score >= STRESSED_MIN {
            PlantState::Stressed
        } else {
            PlantState::Wilted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantState::Thriving => "thriving",
            PlantState::Healthy => "healthy",
            PlantState::Okay => "okay",
            PlantState::Stressed => "stressed",
            PlantState::Wilted => "wilted",
        }
    }

    pub fn is_flourishing(&self) -> bool {
        matches!(self, PlantState::Thriving | PlantState::Healthy)
    }

    pub fn is_struggling(&self) -> bool {
        matches!(self, PlantState::Stressed | PlantState::Wilted)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub score: i32,
    pub state: PlantState,
    pub is_at_risk: bool,
    pub show_flowers: bool,
    pub show_sunshine: bool,
}

pub fn wellness_score(data: &HealthData) -> i32 {
    score_breakdown(data).total()
}

/// Classify today's record. Pure; reads `data` only.
pub fn classify(data: &HealthData) -> Classification {
    let score = wellness_score(data);
    let state = PlantState::from_score(score);

    Classification {
        score,
        state,
        is_at_risk: is_at_risk(data),
        show_flowers: show_flowers(data, state),
        show_sunshine: show_sunshine(data),
    }
}

/// Flowers need a running exercise streak and a flourishing plant.
pub fn show_flowers(data: &HealthData, state: PlantState) -> bool {
    data.exercise_streak >= EXERCISE_STREAK_DAYS && state.is_flourishing()
}

/// Sunshine: moved today and not feeling sad.
pub fn show_sunshine(data: &HealthData) -> bool {
    data.total_exercise() > 0 && data.mood != Mood::Sad
}

pub fn is_at_risk(data: &HealthData) -> bool {
    let high_bp = data
        .blood_pressure
        .as_ref()
        .is_some_and(is_high_blood_pressure);

    high_bp
        || data.egfr_trend == EgfrTrend::Down
        || data.symptoms.count(SymptomSeverity::Strong) >= RISK_STRONG_SYMPTOMS
        || data.edema_level == EdemaLevel::Severe
}
