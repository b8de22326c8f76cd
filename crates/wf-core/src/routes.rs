//! Client-side route table, page titles and the navigation rail entries.

use std::fmt;

/// Where `/` (and the empty path) redirects to.
pub const HOME_PATH: &str = "/dashboard";
pub const ONBOARDING_PATH: &str = "/onboarding";
/// Title key used when no page prefix occurs in the path.
pub const DEFAULT_TITLE_KEY: &str = "app.name";

/// Pages rendered inside the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Builder,
    Connectors,
    Templates,
    Agents,
    RunsLogs,
    CostAnalytics,
    Settings,
    Help,
}

impl Page {
    /// Shell pages in route-table order. Title derivation depends on it.
    pub const ALL: [Page; 9] = [
        Page::Dashboard,
        Page::Builder,
        Page::Connectors,
        Page::Templates,
        Page::Agents,
        Page::RunsLogs,
        Page::CostAnalytics,
        Page::Settings,
        Page::Help,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::Builder => "/builder",
            Page::Connectors => "/connectors",
            Page::Templates => "/templates",
            Page::Agents => "/agents",
            Page::RunsLogs => "/runs-logs",
            Page::CostAnalytics => "/cost-analytics",
            Page::Settings => "/settings",
            Page::Help => "/help",
        }
    }

    /// Translation key of the top bar title.
    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Dashboard => "titles.dashboard",
            Page::Builder => "titles.builder",
            Page::Connectors => "titles.connectors",
            Page::Templates => "titles.templates",
            Page::Agents => "titles.agents",
            Page::RunsLogs => "titles.runsLogs",
            Page::CostAnalytics => "titles.costAnalytics",
            Page::Settings => "titles.settings",
            Page::Help => "titles.help",
        }
    }

    /// Translation key of the navigation rail label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Page::Dashboard => "nav.dashboard",
            Page::Builder => "nav.builder",
            Page::Connectors => "nav.connectors",
            Page::Templates => "nav.templates",
            Page::Agents => "nav.agents",
            Page::RunsLogs => "nav.runsLogs",
            Page::CostAnalytics => "nav.costAnalytics",
            Page::Settings => "nav.settings",
            Page::Help => "nav.help",
        }
    }

    /// Lucide icon name shown in the navigation rail.
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::Builder => "workflow",
            Page::Connectors => "plug",
            Page::Templates => "template",
            Page::Agents => "bot",
            Page::RunsLogs => "list-checks",
            Page::CostAnalytics => "bar-chart-2",
            Page::Settings => "settings",
            Page::Help => "help-circle",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of resolving a location path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Replace the location with the given path.
    Redirect(&'static str),
    /// Render the page inside the shell.
    Shell(Page),
    /// Render the onboarding wizard without shell chrome.
    Onboarding,
    /// No route matched; the shell shows a not-found view.
    NotFound,
}

/// True when `path` equals `prefix` or continues it with a new segment.
/// Comparison ignores ASCII case.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    let Some(head) = path.get(..prefix.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(prefix) {
        return false;
    }
    matches!(path.as_bytes().get(prefix.len()), None | Some(b'/'))
}

/// Resolve a location path to exactly one outcome.
pub fn resolve(path: &str) -> Resolution {
    if path.is_empty() || path == "/" {
        return Resolution::Redirect(HOME_PATH);
    }
    if matches_prefix(path, ONBOARDING_PATH) {
        return Resolution::Onboarding;
    }
    match Page::ALL.iter().find(|p| matches_prefix(path, p.path())) {
        Some(page) => Resolution::Shell(*page),
        None => {
            tracing::debug!(path, "no route matched");
            Resolution::NotFound
        }
    }
}

/// Top bar title key for a path.
///
/// Checks whether each page path occurs anywhere in `path`, in route-table
/// order, and takes the first hit. Case-sensitive.
pub fn title_key(path: &str) -> &'static str {
    Page::ALL
        .iter()
        .find(|p| path.contains(p.path()))
        .map(|p| p.title_key())
        .unwrap_or(DEFAULT_TITLE_KEY)
}

// ---------------------------------------------------------------------------
// Navigation rail
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub page: Page,
    pub path: &'static str,
    pub label_key: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    const fn new(page: Page, path: &'static str, label_key: &'static str, icon: &'static str) -> Self {
        Self {
            page,
            path,
            label_key,
            icon,
        }
    }

    /// Highlight rule of the rail: plain prefix test on the current path.
    pub fn is_active(&self, pathname: &str) -> bool {
        pathname.starts_with(self.path)
    }
}

pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem::new(Page::Dashboard, "/dashboard", "nav.dashboard", "layout-dashboard"),
    NavItem::new(Page::Builder, "/builder", "nav.builder", "workflow"),
    NavItem::new(Page::Connectors, "/connectors", "nav.connectors", "plug"),
    NavItem::new(Page::Templates, "/templates", "nav.templates", "template"),
    NavItem::new(Page::Agents, "/agents", "nav.agents", "bot"),
    NavItem::new(Page::RunsLogs, "/runs-logs", "nav.runsLogs", "list-checks"),
    NavItem::new(Page::CostAnalytics, "/cost-analytics", "nav.costAnalytics", "bar-chart-2"),
    NavItem::new(Page::Settings, "/settings", "nav.settings", "settings"),
    NavItem::new(Page::Help, "/help", "nav.help", "help-circle"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_redirects_to_dashboard() {
        assert_eq!(resolve("/"), Resolution::Redirect("/dashboard"));
        assert_eq!(resolve(""), Resolution::Redirect("/dashboard"));
    }

    #[test]
    fn onboarding_renders_without_shell() {
        assert_eq!(resolve("/onboarding"), Resolution::Onboarding);
        assert_eq!(resolve("/onboarding/step-2"), Resolution::Onboarding);
        assert_eq!(resolve("/onboardingx"), Resolution::NotFound);
    }

    #[test]
    fn prefix_match_is_segment_aware() {
        assert_eq!(resolve("/help"), Resolution::Shell(Page::Help));
        assert_eq!(resolve("/help/"), Resolution::Shell(Page::Help));
        assert_eq!(resolve("/helpdesk"), Resolution::NotFound);
        assert_eq!(resolve("/runs"), Resolution::NotFound);
    }

    #[test]
    fn prefix_match_ignores_ascii_case() {
        assert_eq!(resolve("/Dashboard"), Resolution::Shell(Page::Dashboard));
        assert_eq!(resolve("/COST-ANALYTICS/x"), Resolution::Shell(Page::CostAnalytics));
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(resolve("/nope"), Resolution::NotFound);
        assert_eq!(resolve("/日本"), Resolution::NotFound);
    }

    #[test]
    fn title_uses_first_contained_path() {
        assert_eq!(title_key("/dashboard"), "titles.dashboard");
        assert_eq!(title_key("/runs-logs/42"), "titles.runsLogs");
        // `/dashboard` precedes `/help` in the table.
        assert_eq!(title_key("/help/dashboard"), "titles.dashboard");
        assert_eq!(title_key("/nowhere"), DEFAULT_TITLE_KEY);
        assert_eq!(title_key("/Dashboard"), DEFAULT_TITLE_KEY);
    }

    #[test]
    fn nav_items_follow_route_order() {
        for (item, page) in NAV_ITEMS.iter().zip(Page::ALL) {
            assert_eq!(item.page, page);
            assert_eq!(item.path, page.path());
            assert_eq!(item.label_key, page.nav_key());
            assert_eq!(item.icon, page.icon());
        }
    }

    #[test]
    fn active_item_uses_plain_prefix() {
        let help = NAV_ITEMS[8];
        assert!(help.is_active("/help"));
        assert!(help.is_active("/helpdesk"));
        assert!(!help.is_active("/dashboard"));
    }
}
