//! Domain model of the AI Workflow Studio front end.
//!
//! Everything the UI renders that has a rule behind it lives here, free of
//! any browser dependency: route resolution and page titles, the sidebar
//! state machine, locale bundles and the translator, sample records for
//! every page, and the editable models (flow graph, chat session,
//! onboarding wizard). The Leptos crate only wires these to the DOM.

pub mod canvas;
pub mod catalog;
pub mod charts;
pub mod chat;
pub mod config;
pub mod costs;
pub mod dashboard;
pub mod format;
pub mod help;
pub mod i18n;
pub mod onboarding;
pub mod routes;
pub mod runs;
pub mod settings;
pub mod shell;
pub mod tone;
