//! Workflow run history shown on the Runs & Logs page.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::format;
use crate::tone::ChipTone;

// ---------------------------------------------------------------------------
// RunStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStatus {
    Success,
    Failed,
    Running,
    Canceled,
}

impl RunStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            RunStatus::Success => "runsPage.status.success",
            RunStatus::Failed => "runsPage.status.failed",
            RunStatus::Running => "runsPage.status.running",
            RunStatus::Canceled => "runsPage.status.canceled",
        }
    }

    pub fn tone(&self) -> ChipTone {
        match self {
            RunStatus::Success => ChipTone::Success,
            RunStatus::Failed => ChipTone::Danger,
            RunStatus::Running => ChipTone::Primary,
            RunStatus::Canceled => ChipTone::Warning,
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunStatus::Success => "Success",
            RunStatus::Failed => "Failed",
            RunStatus::Running => "Running",
            RunStatus::Canceled => "Canceled",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub id: &'static str,
    pub workflow: &'static str,
    pub status: RunStatus,
    pub start_time: NaiveDateTime,
    pub duration_secs: u32,
    pub tokens: u32,
    pub cost_cents: u32,
}

impl Run {
    pub fn start_label(&self) -> String {
        self.start_time.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn duration_label(&self) -> String {
        format::minutes_seconds(self.duration_secs)
    }

    pub fn tokens_label(&self) -> String {
        format::thousands(u64::from(self.tokens))
    }

    pub fn cost_label(&self) -> String {
        format::usd_cents(u64::from(self.cost_cents))
    }

    /// Tabs of the details drawer; the error tab exists only for failed runs.
    pub fn detail_tabs(&self) -> Vec<DetailTab> {
        let mut tabs = vec![DetailTab::Input, DetailTab::Output, DetailTab::Trace];
        if self.status == RunStatus::Failed {
            tabs.push(DetailTab::Error);
        }
        tabs
    }
}

fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 7, day)
        .and_then(|d| d.and_hms_opt(hour, min, 0))
        .unwrap_or_default()
}

pub fn sample_runs() -> Vec<Run> {
    let run = |id, workflow, status, start, duration_secs, tokens, cost_cents| Run {
        id,
        workflow,
        status,
        start_time: start,
        duration_secs,
        tokens,
        cost_cents,
    };
    vec![
        run("run-001", "Customer Support Bot", RunStatus::Success, at(15, 10, 30), 154, 1245, 42),
        run("run-002", "Data Extraction Pipeline", RunStatus::Failed, at(15, 11, 15), 72, 876, 18),
        run("run-003", "Content Generator", RunStatus::Success, at(15, 12, 5), 185, 2345, 56),
        run("run-004", "Email Classifier", RunStatus::Success, at(15, 13, 20), 45, 432, 8),
        run("run-005", "Document Analyzer", RunStatus::Running, at(15, 14, 10), 262, 3210, 61),
        run("run-006", "Sales Lead Qualifier", RunStatus::Canceled, at(15, 15, 5), 32, 245, 5),
        run("run-007", "Customer Support Bot", RunStatus::Success, at(15, 15, 45), 132, 1123, 38),
        run("run-008", "Data Extraction Pipeline", RunStatus::Failed, at(15, 16, 30), 65, 765, 15),
    ]
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// Status tabs above the runs table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunTab {
    #[default]
    All,
    Success,
    Failed,
    Running,
}

impl RunTab {
    pub const ALL: [RunTab; 4] = [RunTab::All, RunTab::Success, RunTab::Failed, RunTab::Running];

    pub fn label_key(&self) -> &'static str {
        match self {
            RunTab::All => "runsPage.tabs.all",
            RunTab::Success => "runsPage.tabs.success",
            RunTab::Failed => "runsPage.tabs.failed",
            RunTab::Running => "runsPage.tabs.running",
        }
    }

    pub fn matches(&self, status: RunStatus) -> bool {
        match self {
            RunTab::All => true,
            RunTab::Success => status == RunStatus::Success,
            RunTab::Failed => status == RunStatus::Failed,
            RunTab::Running => status == RunStatus::Running,
        }
    }

    pub fn filter<'a>(&self, runs: &'a [Run]) -> Vec<&'a Run> {
        runs.iter().filter(|r| self.matches(r.status)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailTab {
    Input,
    Output,
    Trace,
    Error,
}

impl DetailTab {
    pub fn label_key(&self) -> &'static str {
        match self {
            DetailTab::Input => "runsPage.details.input",
            DetailTab::Output => "runsPage.details.output",
            DetailTab::Trace => "runsPage.details.trace",
            DetailTab::Error => "runsPage.details.error",
        }
    }
}

// ---------------------------------------------------------------------------
// Drawer content
// ---------------------------------------------------------------------------

pub struct TraceStep {
    pub name: &'static str,
    pub seconds: f32,
}

pub const TRACE_STEPS: [TraceStep; 4] = [
    TraceStep { name: "Input Validation", seconds: 0.02 },
    TraceStep { name: "Knowledge Retrieval", seconds: 0.45 },
    TraceStep { name: "LLM Processing", seconds: 1.34 },
    TraceStep { name: "Response Formatting", seconds: 0.08 },
];

pub const SAMPLE_INPUT: &str = r#"{
  "query": "Can you help me find information about our Q2 sales report?",
  "context": {
    "user_id": "u-123456",
    "session_id": "sess-789012",
    "timestamp": "2023-07-15T10:30:00Z"
  },
  "parameters": {
    "max_tokens": 1000,
    "temperature": 0.7
  }
}"#;

pub const SAMPLE_OUTPUT: &str = r#"{
  "response": "I found the Q2 sales report in your company knowledge base. The total revenue was $1.2M, which is 15% above target. Would you like me to summarize the key points?",
  "metadata": {
    "tokens_used": 1245,
    "processing_time": "1.34s",
    "sources": [
      "sales_reports/q2_2023.pdf",
      "company_kpi_dashboard.xlsx"
    ]
  }
}"#;

pub const SAMPLE_STACK_TRACE: &str = "Error: RateLimitError
  at processRequest (api.js:245:23)
  at async handleAPIRequest (controller.js:128:12)
  at async executeWorkflow (workflow.js:87:10)
  at async runPipeline (pipeline.js:54:8)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_filter_by_status() {
        let runs = sample_runs();
        assert_eq!(RunTab::All.filter(&runs).len(), 8);
        assert_eq!(RunTab::Success.filter(&runs).len(), 4);
        assert_eq!(RunTab::Failed.filter(&runs).len(), 2);
        assert_eq!(RunTab::Running.filter(&runs).len(), 1);
        assert!(RunTab::Failed
            .filter(&runs)
            .iter()
            .all(|r| r.status == RunStatus::Failed));
    }

    #[test]
    fn canceled_runs_only_show_under_all() {
        let runs = sample_runs();
        for tab in [RunTab::Success, RunTab::Failed, RunTab::Running] {
            assert!(tab.filter(&runs).iter().all(|r| r.id != "run-006"));
        }
    }

    #[test]
    fn error_tab_only_for_failed_runs() {
        let runs = sample_runs();
        assert_eq!(runs[1].detail_tabs().last(), Some(&DetailTab::Error));
        assert!(!runs[0].detail_tabs().contains(&DetailTab::Error));
    }

    #[test]
    fn row_labels() {
        let run = &sample_runs()[2];
        assert_eq!(run.start_label(), "2023-07-15 12:05:00");
        assert_eq!(run.duration_label(), "3m 05s");
        assert_eq!(run.tokens_label(), "2,345");
        assert_eq!(run.cost_label(), "$0.56");
        assert_eq!(run.status.tone(), ChipTone::Success);
    }

    #[test]
    fn sample_input_is_json() {
        assert!(serde_json::from_str::<serde_json::Value>(SAMPLE_INPUT).is_ok());
        assert!(serde_json::from_str::<serde_json::Value>(SAMPLE_OUTPUT).is_ok());
    }
}
