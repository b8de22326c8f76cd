//! Cost analytics sample data and the alert form model.

use crate::charts::Slice;
use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTokens {
    pub date: &'static str,
    pub tokens: u64,
    pub cost_cents: u64,
}

pub const DAILY_TOKENS: [DailyTokens; 15] = [
    DailyTokens { date: "07/01", tokens: 125_000, cost_cents: 250 },
    DailyTokens { date: "07/02", tokens: 98_000, cost_cents: 196 },
    DailyTokens { date: "07/03", tokens: 142_000, cost_cents: 284 },
    DailyTokens { date: "07/04", tokens: 87_000, cost_cents: 174 },
    DailyTokens { date: "07/05", tokens: 163_000, cost_cents: 326 },
    DailyTokens { date: "07/06", tokens: 145_000, cost_cents: 290 },
    DailyTokens { date: "07/07", tokens: 178_000, cost_cents: 356 },
    DailyTokens { date: "07/08", tokens: 132_000, cost_cents: 264 },
    DailyTokens { date: "07/09", tokens: 156_000, cost_cents: 312 },
    DailyTokens { date: "07/10", tokens: 168_000, cost_cents: 336 },
    DailyTokens { date: "07/11", tokens: 124_000, cost_cents: 248 },
    DailyTokens { date: "07/12", tokens: 189_000, cost_cents: 378 },
    DailyTokens { date: "07/13", tokens: 143_000, cost_cents: 286 },
    DailyTokens { date: "07/14", tokens: 167_000, cost_cents: 334 },
    DailyTokens { date: "07/15", tokens: 152_000, cost_cents: 304 },
];

pub const MODEL_COSTS: [Slice; 4] = [
    Slice { label: "GPT-4", value: 42.5, color: "#2563EB" },
    Slice { label: "GPT-3.5", value: 18.3, color: "#60A5FA" },
    Slice { label: "Claude", value: 15.6, color: "#93C5FD" },
    Slice { label: "Mistral", value: 10.2, color: "#BFDBFE" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowCost {
    pub id: u32,
    pub workflow: &'static str,
    pub runs: u32,
    pub tokens: u64,
    pub cost_cents: u64,
}

impl WorkflowCost {
    pub fn tokens_label(&self) -> String {
        format::kilo(self.tokens)
    }

    pub fn cost_label(&self) -> String {
        format::usd_cents(self.cost_cents)
    }
}

pub const WORKFLOW_COSTS: [WorkflowCost; 5] = [
    WorkflowCost { id: 1, workflow: "Customer Support Bot", runs: 245, tokens: 1_245_000, cost_cents: 2490 },
    WorkflowCost { id: 2, workflow: "Data Extraction Pipeline", runs: 187, tokens: 876_000, cost_cents: 1752 },
    WorkflowCost { id: 3, workflow: "Content Generator", runs: 156, tokens: 2_345_000, cost_cents: 4690 },
    WorkflowCost { id: 4, workflow: "Email Classifier", runs: 432, tokens: 432_000, cost_cents: 864 },
    WorkflowCost { id: 5, workflow: "Document Analyzer", runs: 98, tokens: 1_210_000, cost_cents: 2420 },
];

/// Headline figures of the cost page. The dollar amounts are fixed
/// illustrative values; the token total is summed from the daily series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostSummary {
    pub total_cost: String,
    pub total_tokens: String,
    pub daily_average: String,
}

pub fn summary() -> CostSummary {
    let tokens: u64 = DAILY_TOKENS.iter().map(|d| d.tokens).sum();
    CostSummary {
        total_cost: format::usd_cents(8650),
        total_tokens: format::mega(tokens),
        daily_average: format::usd_cents(577),
    }
}

// ---------------------------------------------------------------------------
// Selects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    Today,
    Last7,
    #[default]
    Last15,
    Last30,
    Custom,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::Today,
        DateRange::Last7,
        DateRange::Last15,
        DateRange::Last30,
        DateRange::Custom,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Last7 => "last7",
            DateRange::Last15 => "last15",
            DateRange::Last30 => "last30",
            DateRange::Custom => "custom",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.key() == key)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            DateRange::Today => "costAnalyticsPage.dateRange.today",
            DateRange::Last7 => "costAnalyticsPage.dateRange.last7Days",
            DateRange::Last15 => "costAnalyticsPage.dateRange.last15Days",
            DateRange::Last30 => "costAnalyticsPage.dateRange.last30Days",
            DateRange::Custom => "costAnalyticsPage.dateRange.customRange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertKind {
    #[default]
    Daily,
    Weekly,
    Monthly,
    PerWorkflow,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Daily,
        AlertKind::Weekly,
        AlertKind::Monthly,
        AlertKind::PerWorkflow,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AlertKind::Daily => "daily",
            AlertKind::Weekly => "weekly",
            AlertKind::Monthly => "monthly",
            AlertKind::PerWorkflow => "workflow",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == key)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            AlertKind::Daily => "costAnalyticsPage.dailyCostLimit",
            AlertKind::Weekly => "costAnalyticsPage.weeklyCostLimit",
            AlertKind::Monthly => "costAnalyticsPage.monthlyCostLimit",
            AlertKind::PerWorkflow => "costAnalyticsPage.perWorkflowLimit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifyVia {
    #[default]
    Email,
    Slack,
    Webhook,
}

impl NotifyVia {
    pub const ALL: [NotifyVia; 3] = [NotifyVia::Email, NotifyVia::Slack, NotifyVia::Webhook];

    pub fn key(&self) -> &'static str {
        match self {
            NotifyVia::Email => "email",
            NotifyVia::Slack => "slack",
            NotifyVia::Webhook => "webhook",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|n| n.key() == key)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            NotifyVia::Email => "costAnalyticsPage.email",
            NotifyVia::Slack => "costAnalyticsPage.slack",
            NotifyVia::Webhook => "costAnalyticsPage.webhook",
        }
    }
}

/// Values of the Set Alert modal. Saving only closes the modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertDraft {
    pub kind: AlertKind,
    pub threshold: String,
    pub via: NotifyVia,
    pub email: String,
}

impl AlertDraft {
    /// Parsed threshold in dollars, if it is a non-negative number.
    pub fn threshold_usd(&self) -> Option<f64> {
        self.threshold
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_cards() {
        let s = summary();
        assert_eq!(s.total_cost, "$86.50");
        assert_eq!(s.total_tokens, "2.17M");
        assert_eq!(s.daily_average, "$5.77");
    }

    #[test]
    fn workflow_tokens_use_kilo_format() {
        assert_eq!(WORKFLOW_COSTS[0].tokens_label(), "1245.0K");
        assert_eq!(WORKFLOW_COSTS[1].tokens_label(), "876.0K");
        assert_eq!(WORKFLOW_COSTS[2].cost_label(), "$46.90");
    }

    #[test]
    fn select_keys_roundtrip() {
        for r in DateRange::ALL {
            assert_eq!(DateRange::from_key(r.key()), Some(r));
        }
        assert_eq!(DateRange::default(), DateRange::Last15);
        assert_eq!(AlertKind::from_key("workflow"), Some(AlertKind::PerWorkflow));
        assert_eq!(NotifyVia::from_key("pager"), None);
    }

    #[test]
    fn threshold_parsing() {
        let mut d = AlertDraft::default();
        assert_eq!(d.threshold_usd(), None);
        d.threshold = " 25.5 ".into();
        assert_eq!(d.threshold_usd(), Some(25.5));
        d.threshold = "-1".into();
        assert_eq!(d.threshold_usd(), None);
    }
}
