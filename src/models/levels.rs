//! Closed value sets for everything the journal records as a choice.
//!
//! Serialized lowercase so the persisted blob reads the same as the
//! values the user picked.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeeColor {
    Pale,
    Straw,
    Amber,
    Dark,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Sad,
    Okay,
    Happy,
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Okay
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    None,
    Mild,
    Strong,
}

impl Default for SymptomSeverity {
    fn default() -> Self {
        SymptomSeverity::None
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EdemaLevel {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Default for EdemaLevel {
    fn default() -> Self {
        EdemaLevel::None
    }
}

impl EdemaLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdemaLevel::None => "none",
            EdemaLevel::Mild => "mild",
            EdemaLevel::Moderate => "moderate",
            EdemaLevel::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EgfrTrend {
    Up,
    Stable,
    Down,
}

impl Default for EgfrTrend {
    fn default() -> Self {
        EgfrTrend::Stable
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FoodRating {
    Good,
    Moderate,
    Poor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DrinkSize {
    Small,
    Large,
}

impl DrinkSize {
    /// Drinks counted per glass of this size.
    pub fn servings(&self) -> u32 {
        match self {
            DrinkSize::Small => 1,
            DrinkSize::Large => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    Short,
    Long,
    Other,
}

/// The four tracked symptoms. The persisted keys are fixed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Symptom {
    SwollenAnkles,
    Nausea,
    Tiredness,
    DarkPee,
}

impl Symptom {
    pub const ALL: [Symptom; 4] = [
        Symptom::SwollenAnkles,
        Symptom::Nausea,
        Symptom::Tiredness,
        Symptom::DarkPee,
    ];
}
