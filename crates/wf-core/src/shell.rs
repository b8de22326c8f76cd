use std::fmt;

use crate::config::ShellConfig;

// ---------------------------------------------------------------------------
// SidebarState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Expanded => SidebarState::Collapsed,
            SidebarState::Collapsed => SidebarState::Expanded,
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == SidebarState::Collapsed
    }
}

impl fmt::Display for SidebarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SidebarState::Expanded => "Expanded",
            SidebarState::Collapsed => "Collapsed",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Sidebar
// ---------------------------------------------------------------------------

/// Collapsible navigation rail. Always starts expanded.
#[derive(Debug, Clone, PartialEq)]
pub struct Sidebar {
    state: SidebarState,
    expanded_width: u32,
    collapsed_width: u32,
    transition_ms: u32,
}

impl Sidebar {
    pub fn new(cfg: &ShellConfig) -> Self {
        Self {
            state: SidebarState::Expanded,
            expanded_width: cfg.expanded_width,
            collapsed_width: cfg.collapsed_width,
            transition_ms: cfg.transition_ms,
        }
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.is_collapsed()
    }

    /// Flip between expanded and collapsed; returns the new state.
    pub fn toggle(&mut self) -> SidebarState {
        self.state = self.state.toggled();
        tracing::trace!(state = %self.state, "sidebar toggled");
        self.state
    }

    /// Current rail width in CSS pixels.
    pub fn width_px(&self) -> u32 {
        match self.state {
            SidebarState::Expanded => self.expanded_width,
            SidebarState::Collapsed => self.collapsed_width,
        }
    }

    /// Inline style for the rail element; the width change is animated by a
    /// CSS transition.
    pub fn style(&self) -> String {
        format!(
            "width: {}px; transition: width {}ms ease-in-out;",
            self.width_px(),
            self.transition_ms
        )
    }
}

impl Default for Sidebar {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded_at_full_width() {
        let s = Sidebar::default();
        assert_eq!(s.state(), SidebarState::Expanded);
        assert_eq!(s.width_px(), 240);
    }

    #[test]
    fn toggle_collapses_to_rail_width() {
        let mut s = Sidebar::default();
        assert_eq!(s.toggle(), SidebarState::Collapsed);
        assert!(s.is_collapsed());
        assert_eq!(s.width_px(), 72);
    }

    #[test]
    fn style_carries_width_and_transition() {
        let mut s = Sidebar::new(&ShellConfig {
            expanded_width: 300,
            collapsed_width: 64,
            transition_ms: 200,
        });
        assert_eq!(s.style(), "width: 300px; transition: width 200ms ease-in-out;");
        s.toggle();
        assert_eq!(s.style(), "width: 64px; transition: width 200ms ease-in-out;");
    }
}
