pub mod history;
pub mod levels;
pub mod record;

pub use history::{BpHistoryEntry, EgfrReading, BP_HISTORY_LIMIT};
pub use levels::{
    DrinkSize, EdemaLevel, EgfrTrend, EnergyLevel, ExerciseKind, FoodRating, Mood, Symptom,
    SymptomSeverity, WeeColor,
};
pub use record::{BloodPressure, HealthData, Symptoms};
