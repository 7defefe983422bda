use serde::Serialize;

use crate::models::{EdemaLevel, HealthData, Mood, SymptomSeverity};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CareAlert {
    SevereSwelling,
    StrongSymptoms,
    LowMood,
}

impl CareAlert {
    pub fn message(&self) -> &'static str {
        match self {
            CareAlert::SevereSwelling => {
                "🚨 Significant swelling. Contact your care team today."
            }
            CareAlert::StrongSymptoms => {
                "Consider contacting your care team if symptoms persist."
            }
            CareAlert::LowMood => {
                "Tough days happen. Consider reaching out to your care team or a support line if you need to talk."
            }
        }
    }
}

pub fn care_alerts(data: &HealthData) -> Vec<CareAlert> {
    let mut alerts = Vec::new();
    if data.edema_level == EdemaLevel::Severe {
        alerts.push(CareAlert::SevereSwelling);
    }
    if data.symptoms.count(SymptomSeverity::Strong) > 0 {
        alerts.push(CareAlert::StrongSymptoms);
    }
    if data.mood == Mood::Sad {
        alerts.push(CareAlert::LowMood);
    }
    alerts
}
