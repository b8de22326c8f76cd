//! Help centre content and article search.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub articles: u32,
}

pub const HELP_CATEGORIES: [HelpCategory; 8] = [
    HelpCategory { id: "getting-started", title: "Getting Started", description: "Learn the basics of AI Workflow Studio", icon: "rocket", articles: 12 },
    HelpCategory { id: "api", title: "API Reference", description: "Comprehensive API documentation", icon: "code", articles: 24 },
    HelpCategory { id: "tutorials", title: "Tutorials", description: "Step-by-step guides for common tasks", icon: "book-open", articles: 18 },
    HelpCategory { id: "faq", title: "FAQ", description: "Frequently asked questions", icon: "help-circle", articles: 32 },
    HelpCategory { id: "connectors", title: "Connectors", description: "How to use and configure connectors", icon: "plug", articles: 15 },
    HelpCategory { id: "workflows", title: "Workflows", description: "Building and optimizing workflows", icon: "workflow", articles: 22 },
    HelpCategory { id: "agents", title: "Agents & RAG", description: "Creating AI agents with knowledge retrieval", icon: "bot", articles: 9 },
    HelpCategory { id: "billing", title: "Billing & Plans", description: "Pricing, plans, and billing information", icon: "credit-card", articles: 7 },
];

pub const POPULAR_ARTICLES: [&str; 5] = [
    "Getting started with AI Workflow Studio",
    "How to create your first workflow",
    "Connecting to external APIs",
    "Understanding token usage and costs",
    "Best practices for prompt engineering",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Video {
    pub title: &'static str,
    pub summary: &'static str,
    pub thumbnail: &'static str,
}

pub const VIDEOS: [Video; 3] = [
    Video {
        title: "Getting Started with AI Workflow Studio",
        summary: "Learn the basics in this 10-minute tutorial",
        thumbnail: "https://img.heroui.chat/image/ai?w=400&h=225&u=10",
    },
    Video {
        title: "Building Your First Workflow",
        summary: "Step-by-step guide to creating workflows",
        thumbnail: "https://img.heroui.chat/image/ai?w=400&h=225&u=11",
    },
    Video {
        title: "Advanced RAG Techniques",
        summary: "Learn how to optimize retrieval for your agents",
        thumbnail: "https://img.heroui.chat/image/ai?w=400&h=225&u=12",
    },
];

/// What the search dropdown shows for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchDropdown {
    /// Empty query: no dropdown at all.
    Hidden,
    /// Query matched nothing: a single "No results" row.
    NoResults,
    Results(Vec<&'static str>),
}

pub fn search_articles(query: &str) -> SearchDropdown {
    if query.is_empty() {
        return SearchDropdown::Hidden;
    }
    let needle = query.to_lowercase();
    let hits: Vec<_> = POPULAR_ARTICLES
        .iter()
        .copied()
        .filter(|a| a.to_lowercase().contains(&needle))
        .collect();
    if hits.is_empty() {
        SearchDropdown::NoResults
    } else {
        SearchDropdown::Results(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_hides_dropdown() {
        assert_eq!(search_articles(""), SearchDropdown::Hidden);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert_eq!(
            search_articles("WORKFLOW"),
            SearchDropdown::Results(vec![
                "Getting started with AI Workflow Studio",
                "How to create your first workflow",
            ])
        );
    }

    #[test]
    fn unmatched_query_shows_no_results_row() {
        assert_eq!(search_articles("kubernetes"), SearchDropdown::NoResults);
    }

    #[test]
    fn whitespace_query_still_searches() {
        // A lone space matches every multi-word title.
        assert!(matches!(search_articles(" "), SearchDropdown::Results(v) if v.len() == 5));
    }
}
