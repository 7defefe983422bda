use serde::Serialize;

use crate::models::EgfrTrend;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Good,
    Warning,
    Danger,
}

/// Chronic kidney disease stage implied by an eGFR estimate.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KidneyStage {
    pub stage: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

pub fn kidney_stage(egfr: f64) -> KidneyStage {
    let (stage, label, tone) = if egfr >= 90.0 {
        ("1", "Normal", Tone::Good)
    } else if egfr >= 60.0 {
        ("2", "Mildly reduced", Tone::Good)
    } else if egfr >= 45.0 {
        ("3a", "Mild-Moderate", Tone::Warning)
    } else if egfr >= 30.0 {
        ("3b", "Moderate-Severe", Tone::Warning)
    } else if egfr >= 15.0 {
        ("4", "Severely reduced", Tone::Danger)
    } else {
        ("5", "Kidney failure", Tone::Danger)
    };

    KidneyStage { stage, label, tone }
}

pub fn trend_label(trend: EgfrTrend) -> &'static str {
    match trend {
        EgfrTrend::Up => "Improving",
        EgfrTrend::Stable => "Stable",
        EgfrTrend::Down => "Declining",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_boundaries() {
        assert_eq!(kidney_stage(90.0).stage, "1");
        assert_eq!(kidney_stage(89.9).stage, "2");
        assert_eq!(kidney_stage(60.0).stage, "2");
        assert_eq!(kidney_stage(55.0).stage, "3a");
        assert_eq!(kidney_stage(45.0).tone, Tone::Warning);
        assert_eq!(kidney_stage(44.0).label, "Moderate-Severe");
        assert_eq!(kidney_stage(15.0).stage, "4");
        assert_eq!(
            kidney_stage(14.0),
            KidneyStage {
                stage: "5",
                label: "Kidney failure",
                tone: Tone::Danger,
            }
        );
    }

    #[test]
    fn trend_labels() {
        assert_eq!(trend_label(EgfrTrend::Down), "Declining");
        assert_eq!(trend_label(EgfrTrend::Up), "Improving");
    }
}
