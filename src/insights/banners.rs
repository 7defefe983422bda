use serde::Serialize;

use crate::scoring::PlantState;

/// Display hints for the plant illustration.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantBanner {
    pub label: &'static str,
    pub droops: bool,
    pub scale: f32,
}

pub fn plant_banner(state: PlantState) -> PlantBanner {
    let (label, scale) = match state {
        PlantState::Thriving => ("🌸 Thriving!", 1.05),
        PlantState::Healthy => ("🫘 Healthy Kidneys", 1.0),
        PlantState::Okay => ("🌱 Doing okay", 1.0),
        PlantState::Stressed => ("😟 A bit stressed", 0.95),
        PlantState::Wilted => ("🥀 Needs attention", 0.9),
    };

    PlantBanner {
        label,
        droops: state.is_struggling(),
        scale,
    }
}

pub const AT_RISK_MESSAGE: &str =
    "⚠️ You may be at risk of kidney stress. Consider speaking with your care team.";
pub const STABLE_MESSAGE: &str = "✓ Your readings look stable. Keep up the good work!";

pub fn risk_banner(is_at_risk: bool) -> &'static str {
    if is_at_risk {
        AT_RISK_MESSAGE
    } else {
        STABLE_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struggling_plants_droop() {
        assert!(plant_banner(PlantState::Wilted).droops);
        assert!(plant_banner(PlantState::Stressed).droops);
        assert!(!plant_banner(PlantState::Okay).droops);
        assert_eq!(plant_banner(PlantState::Thriving).label, "🌸 Thriving!");
        assert_eq!(plant_banner(PlantState::Wilted).scale, 0.9);
    }

    #[test]
    fn risk_banner_matches_flag() {
        assert_eq!(risk_banner(true), AT_RISK_MESSAGE);
        assert_eq!(risk_banner(false), STABLE_MESSAGE);
    }
}
