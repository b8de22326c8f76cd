use leptos::prelude::*;
use wf_core::config::StudioConfig;
use wf_core::shell::Sidebar;

const STUDIO_TOML: &str = include_str!("../studio.toml");

/// Load the embedded `studio.toml`; a broken file logs and yields defaults.
pub fn load_config() -> StudioConfig {
    StudioConfig::from_toml_str_or_default(STUDIO_TOML)
}

/// Shell-wide state shared through context. Pages keep their own state.
#[derive(Clone, Copy)]
pub struct ShellState {
    pub sidebar: RwSignal<Sidebar>,
    pub config: StoredValue<StudioConfig>,
}

impl ShellState {
    pub fn toggle_sidebar(&self) {
        self.sidebar.update(|s| {
            s.toggle();
        });
    }

    pub fn collapsed(&self) -> bool {
        self.sidebar.with(|s| s.is_collapsed())
    }

    pub fn sidebar_style(&self) -> String {
        self.sidebar.with(|s| s.style())
    }

    pub fn reply_delay_ms(&self) -> u32 {
        self.config.with_value(|c| c.agent.reply_delay_ms)
    }

    pub fn reply_text(&self) -> String {
        self.config.with_value(|c| c.agent.reply_text.clone())
    }
}

pub fn provide_shell_state(config: StudioConfig) -> ShellState {
    let state = ShellState {
        sidebar: RwSignal::new(Sidebar::new(&config.shell)),
        config: StoredValue::new(config),
    };
    provide_context(state);
    state
}

pub fn use_shell() -> ShellState {
    expect_context::<ShellState>()
}
