use serde::Serialize;

use crate::models::{
    BloodPressure, EdemaLevel, EnergyLevel, HealthData, Mood, SymptomSeverity, Symptoms, WeeColor,
};

use super::weights::*;

/// Contribution of every factor to the wellness score.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: i32,
    pub hydration: i32,
    pub wee_color: i32,
    pub blood_pressure: i32,
    pub exercise: i32,
    pub energy: i32,
    pub mood: i32,
    pub salt: i32,
    pub medication: i32,
    pub symptoms: i32,
    pub edema: i32,
    pub streaks: i32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        self.base
            + self.hydration
            + self.wee_color
            + self.blood_pressure
            + self.exercise
            + self.energy
            + self.mood
            + self.salt
            + self.medication
            + self.symptoms
            + self.edema
            + self.streaks
    }
}

/// Score every factor of `data`. Factors that match no condition add zero.
pub fn score_breakdown(data: &HealthData) -> ScoreBreakdown {
    ScoreBreakdown {
        base: BASE_SCORE,
        hydration: score_hydration(data.drinks),
        wee_color: score_wee_color(data.wee_color),
        blood_pressure: data.blood_pressure.map_or(0, score_blood_pressure),
        exercise: score_exercise(data.total_exercise()),
        energy: score_energy(data.energy_level),
        mood: score_mood(data.mood),
        salt: score_salt(data.salty_meals),
        medication: score_medication(data.medications_taken, data.medications_total),
        symptoms: score_symptoms(&data.symptoms),
        edema: score_edema(data.edema_level),
        streaks: score_streaks(data.exercise_streak, data.mood_streak),
    }
}

fn score_hydration(drinks: u32) -> i32 {
    if drinks >= HYDRATION_GOAL_DRINKS {
        HYDRATION_GOAL
    } else if drinks >= HYDRATION_GOOD_DRINKS {
        HYDRATION_GOOD
    } else if drinks < HYDRATION_LOW_DRINKS {
        HYDRATION_LOW
    } else {
        0
    }
}

fn score_wee_color(color: WeeColor) -> i32 {
    match color {
        WeeColor::Pale | WeeColor::Straw => WEE_CLEAR,
        WeeColor::Amber => 0,
        WeeColor::Dark => WEE_DARK,
    }
}

fn score_blood_pressure(reading: BloodPressure) -> i32 {
    if reading.systolic <= BP_TARGET_SYSTOLIC && reading.diastolic <= BP_TARGET_DIASTOLIC {
        BP_ON_TARGET
    } else if is_high_blood_pressure(&reading) {
        BP_HIGH
    } else {
        0
    }
}

pub(crate) fn is_high_blood_pressure(reading: &BloodPressure) -> bool {
    reading.systolic > BP_HIGH_SYSTOLIC || reading.diastolic > BP_HIGH_DIASTOLIC
}

fn score_exercise(sessions: u32) -> i32 {
    match sessions {
        0 => EXERCISE_NONE,
        1 => EXERCISE_SOME,
        _ => EXERCISE_ACTIVE,
    }
}

fn score_energy(level: EnergyLevel) -> i32 {
    match level {
        EnergyLevel::High => ENERGY_HIGH,
        EnergyLevel::Medium => 0,
        EnergyLevel::Low => ENERGY_LOW,
    }
}

fn score_mood(mood: Mood) -> i32 {
    match mood {
        Mood::Happy => MOOD_HAPPY,
        Mood::Okay => 0,
        Mood::Sad => MOOD_SAD,
    }
}

fn score_salt(salty_meals: u32) -> i32 {
    if salty_meals >= SALTY_MEALS_LIMIT {
        SALT_OVER_LIMIT
    } else if salty_meals == 0 {
        SALT_FREE
    } else {
        0
    }
}

fn score_medication(taken: u32, total: u32) -> i32 {
    // taken < total / 2 without truncating the half
    if taken == total {
        MEDS_ALL_TAKEN
    } else if u64::from(taken) * 2 < u64::from(total) {
        MEDS_MOSTLY_MISSED
    } else {
        0
    }
}

fn score_symptoms(symptoms: &Symptoms) -> i32 {
    let strong = symptoms.count(SymptomSeverity::Strong) as i32;
    let mild = symptoms.count(SymptomSeverity::Mild) as i32;
    strong * SYMPTOM_STRONG + mild * SYMPTOM_MILD
}

fn score_edema(level: EdemaLevel) -> i32 {
    match level {
        EdemaLevel::Severe => EDEMA_SEVERE,
        EdemaLevel::Moderate => EDEMA_MODERATE,
        EdemaLevel::Mild => EDEMA_MILD,
        EdemaLevel::None => 0,
    }
}

fn score_streaks(exercise_streak: u32, mood_streak: u32) -> i32 {
    let mut bonus = 0;
    if exercise_streak >= EXERCISE_STREAK_DAYS {
        bonus += STREAK_BONUS;
    }
    if mood_streak >= MOOD_STREAK_DAYS {
        bonus += STREAK_BONUS;
    }
    bonus
}
