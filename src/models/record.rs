use serde::{Deserialize, Serialize};

use super::history::{BpHistoryEntry, EgfrReading};
use super::levels::{
    EdemaLevel, EgfrTrend, EnergyLevel, FoodRating, Mood, Symptom, SymptomSeverity, WeeColor,
};

/// A single blood-pressure and pulse reading. A stored reading without a
/// pulse reads back as 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
    #[serde(default)]
    pub pulse: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Symptoms {
    pub swollen_ankles: SymptomSeverity,
    pub nausea: SymptomSeverity,
    pub tiredness: SymptomSeverity,
    pub dark_pee: SymptomSeverity,
}

impl Symptoms {
    pub fn get(&self, symptom: Symptom) -> SymptomSeverity {
        match symptom {
            Symptom::SwollenAnkles => self.swollen_ankles,
            Symptom::Nausea => self.nausea,
            Symptom::Tiredness => self.tiredness,
            Symptom::DarkPee => self.dark_pee,
        }
    }

    pub fn set(&mut self, symptom: Symptom, severity: SymptomSeverity) {
        let slot = match symptom {
            Symptom::SwollenAnkles => &mut self.swollen_ankles,
            Symptom::Nausea => &mut self.nausea,
            Symptom::Tiredness => &mut self.tiredness,
            Symptom::DarkPee => &mut self.dark_pee,
        };
        *slot = severity;
    }

    /// Number of symptoms currently at `severity`.
    pub fn count(&self, severity: SymptomSeverity) -> u32 {
        Symptom::ALL
            .iter()
            .filter(|symptom| self.get(**symptom) == severity)
            .count() as u32
    }
}

/// Everything logged for "today" plus the rolling counters and history
/// that survive a day reset.
///
/// Missing keys in a persisted blob fall back to the starter record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthData {
    pub drinks: u32,
    pub wee_color: WeeColor,

    pub blood_pressure: Option<BloodPressure>,
    pub weight: Option<f64>,

    pub salty_meals: u32,
    pub alcohol_days: u32,
    pub last_food_rating: Option<FoodRating>,

    pub short_walks: u32,
    pub long_walks: u32,
    pub other_exercise: u32,
    pub energy_level: EnergyLevel,

    pub edema_level: EdemaLevel,

    pub medications_taken: u32,
    pub medications_total: u32,
    pub symptoms: Symptoms,

    #[serde(rename = "eGFR")]
    pub egfr: f64,
    #[serde(rename = "eGFRTrend")]
    pub egfr_trend: EgfrTrend,

    pub mood: Mood,

    pub exercise_streak: u32,
    pub mood_streak: u32,

    pub weekly_active_days: u32,
    pub weekly_salty_meals: u32,
    pub weekly_alcohol_days: u32,

    #[serde(rename = "eGFRHistory")]
    pub egfr_history: Vec<EgfrReading>,
    pub bp_history: Vec<BpHistoryEntry>,
}

impl HealthData {
    /// Sessions of any kind logged today. Saturates rather than wrapping.
    pub fn total_exercise(&self) -> u32 {
        self.short_walks
            .saturating_add(self.long_walks)
            .saturating_add(self.other_exercise)
    }

    pub fn all_medications_taken(&self) -> bool {
        self.medications_taken == self.medications_total
    }
}

impl Default for HealthData {
    fn default() -> Self {
        Self {
            drinks: 5,
            wee_color: WeeColor::Straw,
            blood_pressure: Some(BloodPressure {
                systolic: 128,
                diastolic: 78,
                pulse: 72,
            }),
            weight: Some(75.0),
            salty_meals: 1,
            alcohol_days: 0,
            last_food_rating: None,
            short_walks: 1,
            long_walks: 0,
            other_exercise: 0,
            energy_level: EnergyLevel::Medium,
            edema_level: EdemaLevel::Mild,
            medications_taken: 2,
            medications_total: 3,
            symptoms: Symptoms {
                swollen_ankles: SymptomSeverity::Mild,
                ..Symptoms::default()
            },
            egfr: 55.0,
            egfr_trend: EgfrTrend::Stable,
            mood: Mood::Okay,
            exercise_streak: 3,
            mood_streak: 5,
            weekly_active_days: 4,
            weekly_salty_meals: 2,
            weekly_alcohol_days: 1,
            egfr_history: vec![
                EgfrReading::new("2024-01", 52.0),
                EgfrReading::new("2024-02", 54.0),
                EgfrReading::new("2024-03", 53.0),
                EgfrReading::new("2024-04", 55.0),
                EgfrReading::new("2024-05", 55.0),
            ],
            bp_history: vec![
                BpHistoryEntry::new("Mon", 130, 82),
                BpHistoryEntry::new("Tue", 128, 80),
                BpHistoryEntry::new("Wed", 132, 84),
                BpHistoryEntry::new("Thu", 126, 78),
                BpHistoryEntry::new("Fri", 128, 78),
            ],
        }
    }
}
