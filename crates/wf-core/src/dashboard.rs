//! Dashboard sample metrics.

use crate::charts::Slice;
use crate::format;
use crate::tone::ChipTone;

/// A headline number with its icon and accent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCard {
    pub label_key: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub tone: ChipTone,
}

pub const SUMMARY_CARDS: [SummaryCard; 4] = [
    SummaryCard { label_key: "dashboard.totalWorkflows", value: "24", icon: "workflow", tone: ChipTone::Primary },
    SummaryCard { label_key: "dashboard.runsToday", value: "187", icon: "play", tone: ChipTone::Success },
    SummaryCard { label_key: "dashboard.errorRate", value: "2.4%", icon: "alert-triangle", tone: ChipTone::Danger },
    SummaryCard { label_key: "dashboard.tokenCost", value: "$12.86", icon: "dollar-sign", tone: ChipTone::Warning },
];

/// Runs per weekday, Monday first. Labels are translation keys.
pub const WEEKLY_RUNS: [(&str, f64); 7] = [
    ("dashboard.days.mon", 120.0),
    ("dashboard.days.tue", 180.0),
    ("dashboard.days.wed", 150.0),
    ("dashboard.days.thu", 210.0),
    ("dashboard.days.fri", 190.0),
    ("dashboard.days.sat", 80.0),
    ("dashboard.days.sun", 60.0),
];

pub const COST_BY_MODEL: [Slice; 4] = [
    Slice { label: "GPT-4", value: 320.0, color: "#2563EB" },
    Slice { label: "GPT-3.5", value: 180.0, color: "#60A5FA" },
    Slice { label: "Claude", value: 150.0, color: "#93C5FD" },
    Slice { label: "Mistral", value: 100.0, color: "#BFDBFE" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Error,
    Running,
}

impl ActivityStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            ActivityStatus::Success => "dashboard.status.success",
            ActivityStatus::Error => "dashboard.status.error",
            ActivityStatus::Running => "dashboard.status.running",
        }
    }

    pub fn tone(&self) -> ChipTone {
        match self {
            ActivityStatus::Success => ChipTone::Success,
            ActivityStatus::Error => ChipTone::Danger,
            ActivityStatus::Running => ChipTone::Primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub workflow: &'static str,
    pub status: ActivityStatus,
    pub duration_secs: u32,
    pub cost_cents: u64,
}

impl Activity {
    pub fn duration_label(&self) -> String {
        format::minutes_seconds(self.duration_secs)
    }

    pub fn cost_label(&self) -> String {
        format::usd_cents(self.cost_cents)
    }
}

pub const RECENT_ACTIVITY: [Activity; 5] = [
    Activity { id: 1, workflow: "Customer Support Bot", status: ActivityStatus::Success, duration_secs: 154, cost_cents: 42 },
    Activity { id: 2, workflow: "Data Extraction Pipeline", status: ActivityStatus::Error, duration_secs: 72, cost_cents: 18 },
    Activity { id: 3, workflow: "Content Summarizer", status: ActivityStatus::Success, duration_secs: 185, cost_cents: 56 },
    Activity { id: 4, workflow: "Email Classifier", status: ActivityStatus::Success, duration_secs: 45, cost_cents: 8 },
    Activity { id: 5, workflow: "Document Analyzer", status: ActivityStatus::Running, duration_secs: 262, cost_cents: 61 },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::shares;

    #[test]
    fn activity_labels() {
        let row = &RECENT_ACTIVITY[4];
        assert_eq!(row.duration_label(), "4m 22s");
        assert_eq!(row.cost_label(), "$0.61");
        assert_eq!(RECENT_ACTIVITY[1].status.tone(), ChipTone::Danger);
    }

    #[test]
    fn weekly_peak_is_thursday() {
        let peak = WEEKLY_RUNS
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(day, _)| *day);
        assert_eq!(peak, Some("dashboard.days.thu"));
    }

    #[test]
    fn model_shares_sum_to_about_one_hundred() {
        let total: u32 = shares(&COST_BY_MODEL).iter().sum();
        assert_eq!(total, 100);
    }
}
