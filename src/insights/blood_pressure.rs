use serde::Serialize;

use crate::models::BloodPressure;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BpStatus {
    Optimal,
    Ok,
    Elevated,
    High,
}

impl BpStatus {
    pub fn from_reading(reading: &BloodPressure) -> Self {
        let BloodPressure {
            systolic,
            diastolic,
            ..
        } = *reading;

        if systolic <= 120 && diastolic <= 80 {
            BpStatus::Optimal
        } else if systolic <= 130 && diastolic <= 85 {
            BpStatus::Ok
        } else if systolic <= 140 && diastolic <= 90 {
            BpStatus::Elevated
        } else {
            BpStatus::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BpStatus::Optimal => "Optimal",
            BpStatus::Ok => "OK",
            BpStatus::Elevated => "Elevated",
            BpStatus::High => "High",
        }
    }
}
