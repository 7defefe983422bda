//! In-memory transitions of the daily record.
//!
//! Each method is one user action. Nothing here touches storage; see
//! [`JournalStore`](super::JournalStore) for the persisting wrapper.

use anyhow::{bail, Result};
use chrono::{DateTime, Local};

use crate::models::{
    history::push_bp_entry, BloodPressure, BpHistoryEntry, DrinkSize, EdemaLevel, EgfrReading,
    EgfrTrend, EnergyLevel, ExerciseKind, FoodRating, HealthData, Mood, Symptom, SymptomSeverity,
    WeeColor,
};

impl HealthData {
    pub fn add_drink(&mut self, size: DrinkSize) {
        self.drinks = self.drinks.saturating_add(size.servings());
    }

    pub fn set_wee_color(&mut self, color: WeeColor) {
        self.wee_color = color;
    }

    pub fn update_blood_pressure(&mut self, reading: BloodPressure, recorded_at: DateTime<Local>) {
        self.blood_pressure = Some(reading);
        push_bp_entry(
            &mut self.bp_history,
            BpHistoryEntry::at(recorded_at, reading.systolic, reading.diastolic),
        );
    }

    pub fn update_weight(&mut self, weight_kg: f64) -> Result<()> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            bail!("weight must be a positive number, got {weight_kg}");
        }
        self.weight = Some(weight_kg);
        Ok(())
    }

    pub fn add_salty_meal(&mut self) {
        self.salty_meals = self.salty_meals.saturating_add(1);
        self.weekly_salty_meals = self.weekly_salty_meals.saturating_add(1);
    }

    pub fn add_alcohol(&mut self) {
        self.alcohol_days = self.alcohol_days.saturating_add(1);
        self.weekly_alcohol_days = self.weekly_alcohol_days.saturating_add(1);
    }

    pub fn set_food_rating(&mut self, rating: Option<FoodRating>) {
        self.last_food_rating = rating;
    }

    /// Log one exercise session. The first session of the day extends the
    /// exercise streak and counts as an active day this week.
    pub fn add_exercise(&mut self, kind: ExerciseKind) {
        let sessions = match kind {
            ExerciseKind::Short => &mut self.short_walks,
            ExerciseKind::Long => &mut self.long_walks,
            ExerciseKind::Other => &mut self.other_exercise,
        };
        *sessions = sessions.saturating_add(1);

        if self.total_exercise() == 1 {
            self.exercise_streak = self.exercise_streak.saturating_add(1);
            self.weekly_active_days = self.weekly_active_days.saturating_add(1);
        }
    }

    pub fn set_energy_level(&mut self, level: EnergyLevel) {
        self.energy_level = level;
    }

    pub fn set_edema_level(&mut self, level: EdemaLevel) {
        self.edema_level = level;
    }

    pub fn set_medications_taken(&mut self, taken: u32) -> Result<()> {
        if taken > self.medications_total {
            bail!(
                "cannot mark {taken} medications taken out of {}",
                self.medications_total
            );
        }
        self.medications_taken = taken;
        Ok(())
    }

    /// Change the number of daily medications; taken is clamped to fit.
    pub fn set_medications_total(&mut self, total: u32) {
        self.medications_total = total;
        self.medications_taken = self.medications_taken.min(total);
    }

    pub fn set_symptom(&mut self, symptom: Symptom, severity: SymptomSeverity) {
        self.symptoms.set(symptom, severity);
    }

    /// Any mood other than sad extends the streak; sad resets it.
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
        self.mood_streak = match mood {
            Mood::Sad => 0,
            Mood::Okay | Mood::Happy => self.mood_streak.saturating_add(1),
        };
    }

    pub fn record_egfr(
        &mut self,
        value: f64,
        trend: EgfrTrend,
        recorded_at: DateTime<Local>,
    ) -> Result<()> {
        if !value.is_finite() || value < 0.0 {
            bail!("eGFR must be a non-negative number, got {value}");
        }
        self.egfr = value;
        self.egfr_trend = trend;
        self.egfr_history.push(EgfrReading::at(recorded_at, value));
        Ok(())
    }

    /// Clear today's counters. Streaks, weekly totals, readings and history stay.
    pub fn reset_day(&mut self) {
        self.drinks = 0;
        self.salty_meals = 0;
        self.alcohol_days = 0;
        self.short_walks = 0;
        self.long_walks = 0;
        self.other_exercise = 0;
        self.medications_taken = 0;
        self.last_food_rating = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fresh_day() -> HealthData {
        let mut data = HealthData::default();
        data.reset_day();
        data.exercise_streak = 0;
        data.weekly_active_days = 0;
        data
    }

    #[test]
    fn drinks_count_by_glass_size() {
        let mut data = fresh_day();
        data.add_drink(DrinkSize::Small);
        data.add_drink(DrinkSize::Large);
        assert_eq!(data.drinks, 3);
    }

    #[test]
    fn first_exercise_of_the_day_extends_streak_once() {
        let mut data = fresh_day();
        data.add_exercise(ExerciseKind::Short);
        data.add_exercise(ExerciseKind::Long);
        data.add_exercise(ExerciseKind::Other);

        assert_eq!((data.short_walks, data.long_walks, data.other_exercise), (1, 1, 1));
        assert_eq!(data.exercise_streak, 1);
        assert_eq!(data.weekly_active_days, 1);

        data.reset_day();
        data.add_exercise(ExerciseKind::Other);
        assert_eq!(data.exercise_streak, 2);
        assert_eq!(data.weekly_active_days, 2);
    }

    #[test]
    fn sad_mood_resets_streak() {
        let mut data = fresh_day();
        data.mood_streak = 0;
        data.set_mood(Mood::Happy);
        data.set_mood(Mood::Okay);
        assert_eq!(data.mood_streak, 2);

        data.set_mood(Mood::Sad);
        assert_eq!(data.mood, Mood::Sad);
        assert_eq!(data.mood_streak, 0);
    }

    #[test]
    fn salt_and_alcohol_feed_weekly_totals() {
        let mut data = fresh_day();
        let weekly_salt = data.weekly_salty_meals;
        let weekly_alcohol = data.weekly_alcohol_days;

        data.add_salty_meal();
        data.add_salty_meal();
        data.add_alcohol();

        assert_eq!(data.salty_meals, 2);
        assert_eq!(data.weekly_salty_meals, weekly_salt + 2);
        assert_eq!(data.alcohol_days, 1);
        assert_eq!(data.weekly_alcohol_days, weekly_alcohol + 1);
    }

    #[test]
    fn counters_saturate_at_max() {
        let mut data = HealthData {
            salty_meals: u32::MAX,
            weekly_alcohol_days: u32::MAX,
            long_walks: u32::MAX,
            mood_streak: u32::MAX,
            ..fresh_day()
        };
        data.add_salty_meal();
        data.add_alcohol();
        data.add_exercise(ExerciseKind::Long);
        data.add_exercise(ExerciseKind::Short);
        data.set_mood(Mood::Happy);

        assert_eq!(data.salty_meals, u32::MAX);
        assert_eq!(data.weekly_alcohol_days, u32::MAX);
        assert_eq!(data.long_walks, u32::MAX);
        assert_eq!(data.short_walks, 1);
        assert_eq!(data.total_exercise(), u32::MAX);
        assert_eq!(data.exercise_streak, 0);
        assert_eq!(data.mood_streak, u32::MAX);
    }

    #[test]
    fn medications_taken_cannot_exceed_total() {
        let mut data = fresh_day();
        assert!(data.set_medications_taken(4).is_err());
        assert_eq!(data.medications_taken, 0);

        data.set_medications_taken(3).unwrap();
        assert!(data.all_medications_taken());

        data.set_medications_total(2);
        assert_eq!(data.medications_taken, 2);
    }

    #[test]
    fn blood_pressure_reading_is_added_to_history() {
        let mut data = HealthData::default();
        let when = Local.with_ymd_and_hms(2024, 6, 8, 8, 0, 0).unwrap();
        let reading = BloodPressure {
            systolic: 142,
            diastolic: 88,
            pulse: 75,
        };

        data.update_blood_pressure(reading, when);
        data.update_blood_pressure(reading, when);
        data.update_blood_pressure(reading, when);

        assert_eq!(data.blood_pressure, Some(reading));
        assert_eq!(data.bp_history.len(), 7);
        let latest = data.bp_history.last().unwrap();
        assert_eq!(latest, &BpHistoryEntry::new("Sat", 142, 88));
        assert_eq!(data.bp_history[0].date, "Tue");
    }

    #[test]
    fn egfr_reading_updates_estimate_and_history() {
        let mut data = HealthData::default();
        let when = Local.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();

        data.record_egfr(49.5, EgfrTrend::Down, when).unwrap();
        assert_eq!(data.egfr, 49.5);
        assert_eq!(data.egfr_trend, EgfrTrend::Down);
        assert_eq!(data.egfr_history.last(), Some(&EgfrReading::new("2024-07", 49.5)));

        assert!(data.record_egfr(f64::NAN, EgfrTrend::Stable, when).is_err());
        assert!(data.update_weight(-1.0).is_err());
    }

    #[test]
    fn reset_day_keeps_streaks_and_readings() {
        let mut data = HealthData::default();
        data.set_food_rating(Some(FoodRating::Poor));
        data.reset_day();

        assert_eq!(data.drinks, 0);
        assert_eq!(data.salty_meals, 0);
        assert_eq!(data.total_exercise(), 0);
        assert_eq!(data.medications_taken, 0);
        assert_eq!(data.last_food_rating, None);

        assert_eq!(data.exercise_streak, 3);
        assert_eq!(data.mood_streak, 5);
        assert_eq!(data.weekly_active_days, 4);
        assert!(data.blood_pressure.is_some());
        assert_eq!(data.egfr_history.len(), 5);
    }
}
