pub mod agents;
pub mod builder;
pub mod connectors;
pub mod cost_analytics;
pub mod dashboard;
pub mod help;
pub mod not_found;
pub mod onboarding;
pub mod runs_logs;
pub mod settings;
pub mod templates;
