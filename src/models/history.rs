use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Most recent blood-pressure readings kept for the weekly chart.
pub const BP_HISTORY_LIMIT: usize = 7;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EgfrReading {
    /// Month label, `YYYY-MM`.
    pub date: String,
    pub value: f64,
}

impl EgfrReading {
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }

    pub fn at(recorded_at: DateTime<Local>, value: f64) -> Self {
        Self::new(recorded_at.format("%Y-%m").to_string(), value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BpHistoryEntry {
    /// Short weekday label, e.g. `Mon`.
    pub date: String,
    pub systolic: i32,
    pub diastolic: i32,
}

impl BpHistoryEntry {
    pub fn new(date: impl Into<String>, systolic: i32, diastolic: i32) -> Self {
        Self {
            date: date.into(),
            systolic,
            diastolic,
        }
    }

    pub fn at(recorded_at: DateTime<Local>, systolic: i32, diastolic: i32) -> Self {
        Self::new(recorded_at.format("%a").to_string(), systolic, diastolic)
    }
}

/// Append `entry`, dropping the oldest readings beyond [`BP_HISTORY_LIMIT`].
pub fn push_bp_entry(history: &mut Vec<BpHistoryEntry>, entry: BpHistoryEntry) {
    history.push(entry);
    if history.len() > BP_HISTORY_LIMIT {
        let excess = history.len() - BP_HISTORY_LIMIT;
        history.drain(..excess);
    }
}
