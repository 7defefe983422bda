use serde::Serialize;

use crate::models::{EdemaLevel, HealthData, Mood, SymptomSeverity};
use crate::scoring::{weights::HYDRATION_GOAL_DRINKS, PlantState};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub drinks: u32,
    pub drinks_goal: u32,
    pub drinks_goal_met: bool,
    /// A reading exists and systolic is at or under 130.
    pub bp_ok: bool,
    pub exercise_count: u32,
    pub mood: Mood,
    pub medications_taken: u32,
    pub medications_total: u32,
    pub issues: Vec<String>,
    pub message: &'static str,
}

pub fn daily_summary(data: &HealthData, state: PlantState) -> DailySummary {
    DailySummary {
        drinks: data.drinks,
        drinks_goal: HYDRATION_GOAL_DRINKS,
        drinks_goal_met: data.drinks >= HYDRATION_GOAL_DRINKS,
        bp_ok: data
            .blood_pressure
            .is_some_and(|reading| reading.systolic <= 130),
        exercise_count: data.total_exercise(),
        mood: data.mood,
        medications_taken: data.medications_taken,
        medications_total: data.medications_total,
        issues: issues(data),
        message: motivational_message(data, state),
    }
}

/// Pick the encouragement line; the first matching rule wins.
pub fn motivational_message(data: &HealthData, state: PlantState) -> &'static str {
    if state == PlantState::Thriving {
        return "🌸 Amazing! Your kidney plant is absolutely thriving today!";
    }
    if state == PlantState::Healthy && data.total_exercise() > 0 {
        return "☀️ Great job moving today – your plant's glowing!";
    }
    if data.mood == Mood::Happy && data.all_medications_taken() {
        return "💚 Perfect meds and good mood – you're doing great!";
    }
    if state.is_struggling() {
        return "🌱 Every small step counts. Tomorrow is a new day.";
    }
    "🌿 Keep nurturing yourself – your kidney plant appreciates it!"
}

fn issues(data: &HealthData) -> Vec<String> {
    let mut issues = Vec::new();

    match data.salty_meals {
        0 => {}
        1 => issues.push("1 salty meal".to_string()),
        n => issues.push(format!("{n} salty meals")),
    }
    if data.edema_level != EdemaLevel::None {
        issues.push(format!("{} swelling", data.edema_level.as_str()));
    }
    if data.symptoms.count(SymptomSeverity::Strong) > 0 {
        issues.push("symptoms present".to_string());
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Symptom;

    #[test]
    fn starter_record_summary() {
        let data = HealthData::default();
        let summary = daily_summary(&data, PlantState::Healthy);

        assert_eq!(summary.drinks, 5);
        assert!(!summary.drinks_goal_met);
        assert!(summary.bp_ok);
        assert_eq!(summary.exercise_count, 1);
        assert_eq!(summary.issues, vec!["1 salty meal", "mild swelling"]);
        assert_eq!(summary.message, "☀️ Great job moving today – your plant's glowing!");
    }

    #[test]
    fn issues_pluralise_and_flag_strong_symptoms() {
        let mut data = HealthData {
            salty_meals: 3,
            edema_level: EdemaLevel::None,
            ..HealthData::default()
        };
        data.symptoms.set(Symptom::Nausea, SymptomSeverity::Strong);

        assert_eq!(issues(&data), vec!["3 salty meals", "symptoms present"]);
    }

    #[test]
    fn message_rules_in_order() {
        let resting = HealthData {
            short_walks: 0,
            mood: Mood::Happy,
            medications_taken: 3,
            ..HealthData::default()
        };

        assert!(motivational_message(&resting, PlantState::Thriving).contains("thriving"));
        assert!(motivational_message(&resting, PlantState::Healthy).contains("Perfect meds"));

        let unmedicated = HealthData {
            mood: Mood::Okay,
            medications_taken: 0,
            ..resting
        };
        assert!(motivational_message(&unmedicated, PlantState::Wilted).contains("small step"));
        assert!(motivational_message(&unmedicated, PlantState::Okay).contains("Keep nurturing"));
    }

    #[test]
    fn missing_blood_pressure_is_not_ok() {
        let data = HealthData {
            blood_pressure: None,
            ..HealthData::default()
        };
        assert!(!daily_summary(&data, PlantState::Okay).bp_ok);
    }
}
