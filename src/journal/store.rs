use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::{
    log_info, log_warn,
    models::{
        BloodPressure, DrinkSize, EdemaLevel, EgfrTrend, EnergyLevel, ExerciseKind, FoodRating,
        HealthData, Mood, Symptom, SymptomSeverity, WeeColor,
    },
    scoring::{classify, Classification},
    storage::KeyValueStore,
};

use super::voice::{parse_transcript, VoiceCommand};

const ENABLE_LOGS: bool = true;

/// Key the whole record is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "kidneyGardenData";

/// Record plus its classification, as handed to presentation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenSnapshot {
    pub data: HealthData,
    pub plant: Classification,
}

/// Owns today's record and writes it back wholesale after every change.
pub struct JournalStore {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    data: HealthData,
}

impl JournalStore {
    /// Load the record under `key`. An absent or unreadable blob starts from
    /// the starter record; only a failing backend is an error.
    pub fn open(storage: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let raw = storage
            .get(&key)
            .with_context(|| format!("Failed to load journal '{key}'"))?;

        let data = match raw {
            Some(contents) => match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(err) => {
                    log_warn!("Discarding unreadable journal '{key}': {err}");
                    HealthData::default()
                }
            },
            None => {
                log_info!("No saved journal under '{key}', starting fresh");
                HealthData::default()
            }
        };

        Ok(Self { storage, key, data })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn data(&self) -> &HealthData {
        &self.data
    }

    pub fn classification(&self) -> Classification {
        classify(&self.data)
    }

    pub fn snapshot(&self) -> GardenSnapshot {
        GardenSnapshot {
            data: self.data.clone(),
            plant: self.classification(),
        }
    }

    pub fn add_drink(&mut self, size: DrinkSize) -> Result<GardenSnapshot> {
        self.data.add_drink(size);
        self.commit()
    }

    pub fn set_wee_color(&mut self, color: WeeColor) -> Result<GardenSnapshot> {
        self.data.set_wee_color(color);
        self.commit()
    }

    pub fn update_blood_pressure(
        &mut self,
        systolic: i32,
        diastolic: i32,
        pulse: i32,
    ) -> Result<GardenSnapshot> {
        let reading = BloodPressure {
            systolic,
            diastolic,
            pulse,
        };
        self.data.update_blood_pressure(reading, Local::now());
        self.commit()
    }

    pub fn update_weight(&mut self, weight_kg: f64) -> Result<GardenSnapshot> {
        self.data.update_weight(weight_kg)?;
        self.commit()
    }

    pub fn add_salty_meal(&mut self) -> Result<GardenSnapshot> {
        self.data.add_salty_meal();
        self.commit()
    }

    pub fn add_alcohol(&mut self) -> Result<GardenSnapshot> {
        self.data.add_alcohol();
        self.commit()
    }

    pub fn set_food_rating(&mut self, rating: Option<FoodRating>) -> Result<GardenSnapshot> {
        self.data.set_food_rating(rating);
        self.commit()
    }

    pub fn add_exercise(&mut self, kind: ExerciseKind) -> Result<GardenSnapshot> {
        self.data.add_exercise(kind);
        self.commit()
    }

    pub fn set_energy_level(&mut self, level: EnergyLevel) -> Result<GardenSnapshot> {
        self.data.set_energy_level(level);
        self.commit()
    }

    pub fn set_edema_level(&mut self, level: EdemaLevel) -> Result<GardenSnapshot> {
        self.data.set_edema_level(level);
        self.commit()
    }

    pub fn set_medications_taken(&mut self, taken: u32) -> Result<GardenSnapshot> {
        self.data.set_medications_taken(taken)?;
        self.commit()
    }

    pub fn set_medications_total(&mut self, total: u32) -> Result<GardenSnapshot> {
        self.data.set_medications_total(total);
        self.commit()
    }

    pub fn set_symptom(
        &mut self,
        symptom: Symptom,
        severity: SymptomSeverity,
    ) -> Result<GardenSnapshot> {
        self.data.set_symptom(symptom, severity);
        self.commit()
    }

    pub fn set_mood(&mut self, mood: Mood) -> Result<GardenSnapshot> {
        self.data.set_mood(mood);
        self.commit()
    }

    pub fn record_egfr(&mut self, value: f64, trend: EgfrTrend) -> Result<GardenSnapshot> {
        self.data.record_egfr(value, trend, Local::now())?;
        self.commit()
    }

    pub fn reset_day(&mut self) -> Result<GardenSnapshot> {
        self.data.reset_day();
        log_info!("Started a new day for '{}'", self.key);
        self.commit()
    }

    /// Apply every command heard in `transcript`, then persist once.
    pub fn apply_voice(
        &mut self,
        transcript: &str,
    ) -> Result<(Vec<VoiceCommand>, GardenSnapshot)> {
        let commands = parse_transcript(transcript);
        for command in &commands {
            match *command {
                VoiceCommand::AddExercise(kind) => self.data.add_exercise(kind),
                VoiceCommand::SetMood(mood) => self.data.set_mood(mood),
                VoiceCommand::TakeAllMedications => {
                    self.data.medications_taken = self.data.medications_total;
                }
            }
        }

        let snapshot = self.commit()?;
        Ok((commands, snapshot))
    }

    /// Persist the whole record, then hand back what presentation needs.
    fn commit(&self) -> Result<GardenSnapshot> {
        self.persist()?;
        let snapshot = self.snapshot();
        log::debug!(
            "Journal '{}' scored {} ({})",
            self.key,
            snapshot.plant.score,
            snapshot.plant.state.as_str()
        );
        Ok(snapshot)
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string(&self.data)?;
        self.storage
            .set(&self.key, &serialized)
            .with_context(|| format!("Failed to save journal '{}'", self.key))
    }
}
