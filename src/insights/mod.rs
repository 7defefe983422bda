//! Text and category selectors for whatever renders the garden.
//!
//! Everything here is a pure function of the record and its
//! classification.

pub mod alerts;
pub mod banners;
pub mod blood_pressure;
pub mod kidney;
pub mod summary;
pub mod weekly;

use serde::Serialize;

use crate::models::HealthData;
use crate::scoring::{classify, Classification};

pub use alerts::{care_alerts, CareAlert};
pub use banners::{plant_banner, risk_banner, PlantBanner};
pub use blood_pressure::BpStatus;
pub use kidney::{kidney_stage, trend_label, KidneyStage, Tone};
pub use summary::{daily_summary, motivational_message, DailySummary};
pub use weekly::{weekly_highlights, WeeklyHighlights};

/// Everything the home screen shows, derived in one pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenView {
    pub plant: Classification,
    pub banner: PlantBanner,
    pub risk_message: &'static str,
    pub kidney_stage: KidneyStage,
    pub egfr_trend: &'static str,
    pub blood_pressure: Option<BpStatus>,
    pub summary: DailySummary,
    pub weekly: WeeklyHighlights,
    pub alerts: Vec<CareAlert>,
}

pub fn garden_view(data: &HealthData) -> GardenView {
    let plant = classify(data);

    GardenView {
        plant,
        banner: plant_banner(plant.state),
        risk_message: risk_banner(plant.is_at_risk),
        kidney_stage: kidney_stage(data.egfr),
        egfr_trend: trend_label(data.egfr_trend),
        blood_pressure: data.blood_pressure.as_ref().map(BpStatus::from_reading),
        summary: daily_summary(data, plant.state),
        weekly: weekly_highlights(data),
        alerts: care_alerts(data),
    }
}
