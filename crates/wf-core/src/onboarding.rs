//! Three-step first-run wizard: basic info, connectors, starter template.

use std::fmt;

use crate::catalog::{connectors, templates, Connector, Template};

// ---------------------------------------------------------------------------
// WizardStep
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    #[default]
    BasicInfo,
    Connectors,
    Template,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::BasicInfo, WizardStep::Connectors, WizardStep::Template];

    pub fn index(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 0,
            WizardStep::Connectors => 1,
            WizardStep::Template => 2,
        }
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "onboardingPage.steps.basicInfo",
            WizardStep::Connectors => "onboardingPage.steps.connectors",
            WizardStep::Template => "onboardingPage.steps.template",
        }
    }

    pub fn subtitle_key(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "onboardingPage.steps.basicInfoHint",
            WizardStep::Connectors => "onboardingPage.steps.connectorsHint",
            WizardStep::Template => "onboardingPage.steps.templateHint",
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            WizardStep::BasicInfo => Some(WizardStep::Connectors),
            WizardStep::Connectors => Some(WizardStep::Template),
            WizardStep::Template => None,
        }
    }

    fn prev(self) -> Option<Self> {
        match self {
            WizardStep::BasicInfo => None,
            WizardStep::Connectors => Some(WizardStep::BasicInfo),
            WizardStep::Template => Some(WizardStep::Connectors),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WizardStep::BasicInfo => "BasicInfo",
            WizardStep::Connectors => "Connectors",
            WizardStep::Template => "Template",
        };
        write!(f, "{}", label)
    }
}

/// Indicator state of a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Waiting,
}

// ---------------------------------------------------------------------------
// Industry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Technology,
    Finance,
    Healthcare,
    Education,
    Retail,
    Manufacturing,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::Technology,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Education,
        Industry::Retail,
        Industry::Manufacturing,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Education => "education",
            Industry::Retail => "retail",
            Industry::Manufacturing => "manufacturing",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.key() == key)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Industry::Technology => "onboardingPage.industries.technology",
            Industry::Finance => "onboardingPage.industries.finance",
            Industry::Healthcare => "onboardingPage.industries.healthcare",
            Industry::Education => "onboardingPage.industries.education",
            Industry::Retail => "onboardingPage.industries.retail",
            Industry::Manufacturing => "onboardingPage.industries.manufacturing",
        }
    }
}

// ---------------------------------------------------------------------------
// Choices offered by the wizard
// ---------------------------------------------------------------------------

/// Connectors offered on the connectors step, by library name.
const OFFERED_CONNECTORS: [&str; 6] = ["OpenAI", "MongoDB", "Slack", "Google Drive", "PostgreSQL", "Stripe"];

/// Starter templates, by marketplace id.
const OFFERED_TEMPLATES: [&str; 3] = ["1", "2", "3"];

pub fn offered_connectors() -> Vec<&'static Connector> {
    OFFERED_CONNECTORS
        .iter()
        .filter_map(|name| connectors().iter().find(|c| c.name == *name))
        .collect()
}

pub fn offered_templates() -> Vec<&'static Template> {
    OFFERED_TEMPLATES
        .iter()
        .filter_map(|id| templates().iter().find(|t| t.id == *id))
        .collect()
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("step {0} is incomplete")]
    Incomplete(WizardStep),
}

/// Result of pressing Continue / Finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(WizardStep),
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
    pub org_name: String,
    pub industry: Option<Industry>,
    pub terms_accepted: bool,
    selected_connectors: Vec<String>,
    selected_template: Option<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self {
            step: WizardStep::BasicInfo,
            org_name: String::new(),
            industry: None,
            terms_accepted: true,
            selected_connectors: Vec::new(),
            selected_template: None,
        }
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn status_of(&self, step: WizardStep) -> StepStatus {
        match step.index().cmp(&self.step.index()) {
            std::cmp::Ordering::Less => StepStatus::Completed,
            std::cmp::Ordering::Equal => StepStatus::Active,
            std::cmp::Ordering::Greater => StepStatus::Waiting,
        }
    }

    pub fn toggle_connector(&mut self, id: &str) {
        if let Some(pos) = self.selected_connectors.iter().position(|c| c == id) {
            self.selected_connectors.remove(pos);
        } else {
            self.selected_connectors.push(id.to_string());
        }
    }

    pub fn is_connector_selected(&self, id: &str) -> bool {
        self.selected_connectors.iter().any(|c| c == id)
    }

    pub fn selected_connectors(&self) -> &[String] {
        &self.selected_connectors
    }

    pub fn select_template(&mut self, id: &str) {
        self.selected_template = Some(id.to_string());
    }

    pub fn selected_template(&self) -> Option<&str> {
        self.selected_template.as_deref()
    }

    /// Whether Continue / Finish is enabled on the current step.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::BasicInfo => !self.org_name.is_empty() && self.industry.is_some(),
            WizardStep::Connectors => true,
            WizardStep::Template => self.selected_template.is_some(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.step.prev().is_some()
    }

    pub fn advance(&mut self) -> Result<Advance, WizardError> {
        if !self.can_advance() {
            tracing::debug!(step = %self.step, "continue pressed on incomplete step");
            return Err(WizardError::Incomplete(self.step));
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Ok(Advance::Moved(next))
            }
            None => Ok(Advance::Finished),
        }
    }

    /// Step back; a no-op on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_info_requires_org_and_industry() {
        let mut w = Wizard::new();
        assert!(!w.can_advance());
        assert_eq!(w.advance(), Err(WizardError::Incomplete(WizardStep::BasicInfo)));
        w.org_name = "Acme".into();
        assert!(!w.can_advance());
        w.industry = Industry::from_key("retail");
        assert_eq!(w.advance(), Ok(Advance::Moved(WizardStep::Connectors)));
    }

    #[test]
    fn connectors_step_is_optional() {
        let mut w = Wizard::new();
        w.org_name = "Acme".into();
        w.industry = Some(Industry::Finance);
        w.advance().unwrap();
        assert!(w.can_advance());
        assert_eq!(w.advance(), Ok(Advance::Moved(WizardStep::Template)));
    }

    #[test]
    fn finish_requires_template() {
        let mut w = Wizard::new();
        w.org_name = "Acme".into();
        w.industry = Some(Industry::Technology);
        w.advance().unwrap();
        w.advance().unwrap();
        assert!(w.advance().is_err());
        w.select_template("2");
        assert_eq!(w.advance(), Ok(Advance::Finished));
        assert_eq!(w.step(), WizardStep::Template);
    }

    #[test]
    fn back_stops_at_first_step() {
        let mut w = Wizard::new();
        assert!(!w.can_go_back());
        assert_eq!(w.back(), WizardStep::BasicInfo);
        w.org_name = "Acme".into();
        w.industry = Some(Industry::Education);
        w.advance().unwrap();
        assert!(w.can_go_back());
        assert_eq!(w.back(), WizardStep::BasicInfo);
        assert_eq!(w.org_name, "Acme");
    }

    #[test]
    fn connector_toggle_and_step_status() {
        let mut w = Wizard::new();
        w.toggle_connector("openai");
        w.toggle_connector("slack");
        w.toggle_connector("openai");
        assert_eq!(w.selected_connectors(), &["slack".to_string()]);
        assert_eq!(w.status_of(WizardStep::BasicInfo), StepStatus::Active);
        assert_eq!(w.status_of(WizardStep::Template), StepStatus::Waiting);
    }

    #[test]
    fn offered_choices_resolve_against_catalog() {
        assert_eq!(offered_connectors().len(), 6);
        assert_eq!(offered_templates().len(), 3);
    }
}
