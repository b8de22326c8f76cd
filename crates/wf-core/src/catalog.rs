//! Connector library and template marketplace sample data, with the
//! search / filter / sort rules of both pages.

use std::cmp::Ordering;
use std::fmt;

use crate::tone::ChipTone;

// ---------------------------------------------------------------------------
// Connectors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorCategory {
    Ai,
    Database,
    Communication,
    Storage,
    Payment,
    Crm,
    Development,
}

impl ConnectorCategory {
    pub const ALL: [ConnectorCategory; 7] = [
        ConnectorCategory::Ai,
        ConnectorCategory::Database,
        ConnectorCategory::Communication,
        ConnectorCategory::Storage,
        ConnectorCategory::Payment,
        ConnectorCategory::Crm,
        ConnectorCategory::Development,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConnectorCategory::Ai => "AI",
            ConnectorCategory::Database => "Database",
            ConnectorCategory::Communication => "Communication",
            ConnectorCategory::Storage => "Storage",
            ConnectorCategory::Payment => "Payment",
            ConnectorCategory::Crm => "CRM",
            ConnectorCategory::Development => "Development",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for ConnectorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: ConnectorCategory,
    pub tags: &'static [&'static str],
    /// Iconify logo name.
    pub logo: &'static str,
    pub installed: bool,
}

const fn connector(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: ConnectorCategory,
    tags: &'static [&'static str],
    logo: &'static str,
    installed: bool,
) -> Connector {
    Connector {
        id,
        name,
        description,
        category,
        tags,
        logo,
        installed,
    }
}

static CONNECTORS: [Connector; 12] = [
    connector("1", "OpenAI", "Connect to OpenAI models including GPT-4 and DALL-E", ConnectorCategory::Ai, &["LLM", "Image Generation"], "logos:openai-icon", true),
    connector("2", "MongoDB", "Connect to MongoDB databases for document storage", ConnectorCategory::Database, &["NoSQL", "Database"], "logos:mongodb-icon", false),
    connector("3", "Slack", "Send and receive messages from Slack channels", ConnectorCategory::Communication, &["Messaging", "Notifications"], "logos:slack-icon", true),
    connector("4", "Google Drive", "Access and manage files in Google Drive", ConnectorCategory::Storage, &["File Storage", "Cloud"], "logos:google-drive", false),
    connector("5", "PostgreSQL", "Connect to PostgreSQL databases", ConnectorCategory::Database, &["SQL", "Database"], "logos:postgresql", false),
    connector("6", "Stripe", "Process payments and manage subscriptions", ConnectorCategory::Payment, &["Payment", "Finance"], "logos:stripe", false),
    connector("7", "HubSpot", "Manage customer relationships and marketing", ConnectorCategory::Crm, &["Marketing", "CRM"], "logos:hubspot", false),
    connector("8", "AWS S3", "Store and retrieve files from Amazon S3", ConnectorCategory::Storage, &["File Storage", "Cloud"], "logos:aws-s3", true),
    connector("9", "Anthropic", "Connect to Claude models for text generation", ConnectorCategory::Ai, &["LLM", "Text Generation"], "logos:anthropic", false),
    connector("10", "Salesforce", "Integrate with Salesforce CRM", ConnectorCategory::Crm, &["CRM", "Sales"], "logos:salesforce", false),
    connector("11", "Twilio", "Send SMS and make phone calls", ConnectorCategory::Communication, &["SMS", "Voice"], "logos:twilio-icon", false),
    connector("12", "GitHub", "Integrate with GitHub repositories", ConnectorCategory::Development, &["Code", "Version Control"], "logos:github-icon", true),
];

/// Base of the hosted SVG endpoint for Iconify names.
pub const ICONIFY_API: &str = "https://api.iconify.design";

impl Connector {
    /// `logos:openai-icon` becomes `<ICONIFY_API>/logos/openai-icon.svg`.
    pub fn logo_url(&self) -> String {
        format!("{ICONIFY_API}/{}.svg", self.logo.replacen(':', "/", 1))
    }
}

/// Tag chips offered above the connector grid.
pub const CONNECTOR_TAGS: [&str; 10] = [
    "LLM",
    "Database",
    "SQL",
    "NoSQL",
    "Messaging",
    "File Storage",
    "Cloud",
    "Payment",
    "CRM",
    "Code",
];

pub fn connectors() -> &'static [Connector] {
    &CONNECTORS
}

/// Whether the named connector is marked installed in the library.
pub fn is_installed(name: &str) -> bool {
    CONNECTORS.iter().any(|c| c.installed && c.name == name)
}

pub fn installed_connectors() -> impl Iterator<Item = &'static Connector> {
    CONNECTORS.iter().filter(|c| c.installed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectorSort {
    #[default]
    Name,
    Category,
}

impl ConnectorSort {
    pub fn key(&self) -> &'static str {
        match self {
            ConnectorSort::Name => "name",
            ConnectorSort::Category => "category",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(ConnectorSort::Name),
            "category" => Some(ConnectorSort::Category),
            _ => None,
        }
    }

    fn compare(&self, a: &Connector, b: &Connector) -> Ordering {
        match self {
            ConnectorSort::Name => cmp_ignore_case(a.name, b.name),
            ConnectorSort::Category => cmp_ignore_case(a.category.label(), b.category.label()),
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Filter state of the connectors page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectorQuery {
    pub search: String,
    /// `None` is the "All" entry.
    pub category: Option<ConnectorCategory>,
    pub tags: Vec<String>,
    pub sort: ConnectorSort,
}

impl ConnectorQuery {
    /// Add the tag if absent, remove it otherwise.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn matches(&self, c: &Connector) -> bool {
        let needle = self.search.to_lowercase();
        if !needle.is_empty()
            && !c.name.to_lowercase().contains(&needle)
            && !c.description.to_lowercase().contains(&needle)
            && !c.category.label().to_lowercase().contains(&needle)
        {
            return false;
        }
        if let Some(category) = self.category {
            if c.category != category {
                return false;
            }
        }
        // Any selected tag is enough.
        if !self.tags.is_empty() && !c.tags.iter().any(|t| self.has_tag(t)) {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, items: &'a [Connector]) -> Vec<&'a Connector> {
        let mut out: Vec<&Connector> = items.iter().filter(|c| self.matches(c)).collect();
        out.sort_by(|a, b| self.sort.compare(a, b));
        out
    }
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateCategory {
    CustomerService,
    DataProcessing,
    Marketing,
    Sales,
    Productivity,
    Development,
}

impl TemplateCategory {
    pub fn label_key(&self) -> &'static str {
        match self {
            TemplateCategory::CustomerService => "templatesPage.customerService",
            TemplateCategory::DataProcessing => "templatesPage.dataProcessing",
            TemplateCategory::Marketing => "templatesPage.marketing",
            TemplateCategory::Sales => "templatesPage.sales",
            TemplateCategory::Productivity => "templatesPage.productivity",
            TemplateCategory::Development => "templatesPage.development",
        }
    }
}

pub const ALL_TEMPLATE_CATEGORIES_KEY: &str = "templatesPage.allCategories";

/// Category chips above the template grid; `None` is "All Categories".
pub const TEMPLATE_CATEGORY_CHIPS: [Option<TemplateCategory>; 6] = [
    None,
    Some(TemplateCategory::CustomerService),
    Some(TemplateCategory::DataProcessing),
    Some(TemplateCategory::Marketing),
    Some(TemplateCategory::Sales),
    Some(TemplateCategory::Productivity),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label_key(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "templatesPage.difficulty.beginner",
            Difficulty::Intermediate => "templatesPage.difficulty.intermediate",
            Difficulty::Advanced => "templatesPage.difficulty.advanced",
        }
    }

    pub fn tone(&self) -> ChipTone {
        match self {
            Difficulty::Beginner => ChipTone::Success,
            Difficulty::Intermediate => ChipTone::Warning,
            Difficulty::Advanced => ChipTone::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: &'static str,
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub category: TemplateCategory,
    pub difficulty: Difficulty,
    pub rating: f32,
    pub downloads: u32,
    pub image: &'static str,
    /// Connector names, not translation keys.
    pub required_connectors: &'static [&'static str],
}

impl Template {
    pub fn missing_connectors(&self) -> Vec<&'static str> {
        self.required_connectors
            .iter()
            .copied()
            .filter(|name| !is_installed(name))
            .collect()
    }

    pub fn needs_install(&self) -> bool {
        self.required_connectors.iter().any(|name| !is_installed(name))
    }
}

static TEMPLATES: [Template; 6] = [
    Template {
        id: "1",
        name_key: "templatesPage.templateNames.customerSupport",
        description_key: "templatesPage.templateDescriptions.customerSupport",
        category: TemplateCategory::CustomerService,
        difficulty: Difficulty::Beginner,
        rating: 4.8,
        downloads: 1245,
        image: "https://img.heroui.chat/image/ai?w=400&h=200&u=1",
        required_connectors: &["OpenAI", "Slack", "HubSpot"],
    },
    Template {
        id: "2",
        name_key: "templatesPage.templateNames.dataExtraction",
        description_key: "templatesPage.templateDescriptions.dataExtraction",
        category: TemplateCategory::DataProcessing,
        difficulty: Difficulty::Intermediate,
        rating: 4.5,
        downloads: 876,
        image: "https://img.heroui.chat/image/ai?w=400&h=200&u=2",
        required_connectors: &["OpenAI", "MongoDB", "AWS S3"],
    },
    Template {
        id: "3",
        name_key: "templatesPage.templateNames.contentGenerator",
        description_key: "templatesPage.templateDescriptions.contentGenerator",
        category: TemplateCategory::Marketing,
        difficulty: Difficulty::Beginner,
        rating: 4.6,
        downloads: 1532,
        image: "https://img.heroui.chat/image/ai?w=400&h=200&u=3",
        required_connectors: &["OpenAI", "Google Drive"],
    },
    Template {
        id: "4",
        name_key: "templatesPage.templateNames.salesLeadQualifier",
        description_key: "templatesPage.templateDescriptions.salesLeadQualifier",
        category: TemplateCategory::Sales,
        difficulty: Difficulty::Intermediate,
        rating: 4.3,
        downloads: 654,
        image: "https://img.heroui.chat/image/ai?w=400&h=200&u=4",
        required_connectors: &["Salesforce", "HubSpot"],
    },
    Template {
        id: "5",
        name_key: "templatesPage.templateNames.documentSummarizer",
        description_key: "templatesPage.templateDescriptions.documentSummarizer",
        category: TemplateCategory::Productivity,
        difficulty: Difficulty::Beginner,
        rating: 4.7,
        downloads: 987,
        image: "https://img.heroui.chat/image/ai?w=400&h=200&u=5",
        required_connectors: &["OpenAI", "Google Drive"],
    },
    Template {
        id: "6",
        name_key: "templatesPage.templateNames.codeReviewAssistant",
        description_key: "templatesPage.templateDescriptions.codeReviewAssistant",
        category: TemplateCategory::Development,
        difficulty: Difficulty::Advanced,
        rating: 4.4,
        downloads: 432,
        image: "https://img.heroui.chat/image/ai?w=400&h=200&u=6",
        required_connectors: &["OpenAI", "GitHub"],
    },
];

pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

/// Filter state of the templates page.
///
/// Search runs over the *translated* name, description and category, so
/// the caller supplies the translation function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateQuery {
    pub search: String,
    pub category: Option<TemplateCategory>,
}

impl TemplateQuery {
    pub fn matches<F>(&self, tpl: &Template, translate: &F) -> bool
    where
        F: Fn(&str) -> String,
    {
        if let Some(category) = self.category {
            if tpl.category != category {
                return false;
            }
        }
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [tpl.name_key, tpl.description_key, tpl.category.label_key()]
            .iter()
            .any(|key| translate(key).to_lowercase().contains(&needle))
    }

    pub fn apply<'a, F>(&self, items: &'a [Template], translate: F) -> Vec<&'a Template>
    where
        F: Fn(&str) -> String,
    {
        items.iter().filter(|t| self.matches(t, &translate)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&Connector]) -> Vec<&'static str> {
        items.iter().map(|c| c.name).collect()
    }

    #[test]
    fn logo_url_points_at_iconify_svg() {
        assert_eq!(
            connectors()[0].logo_url(),
            "https://api.iconify.design/logos/openai-icon.svg"
        );
    }

    #[test]
    fn default_query_lists_all_sorted_by_name() {
        let out = ConnectorQuery::default().apply(connectors());
        assert_eq!(out.len(), 12);
        assert_eq!(out.first().map(|c| c.name), Some("Anthropic"));
        assert_eq!(out.last().map(|c| c.name), Some("Twilio"));
    }

    #[test]
    fn search_covers_name_description_and_category() {
        let mut q = ConnectorQuery {
            search: "SLACK".into(),
            ..Default::default()
        };
        assert_eq!(names(&q.apply(connectors())), vec!["Slack"]);

        q.search = "phone calls".into();
        assert_eq!(names(&q.apply(connectors())), vec!["Twilio"]);

        q.search = "payment".into();
        assert_eq!(names(&q.apply(connectors())), vec!["Stripe"]);
    }

    #[test]
    fn tags_use_or_semantics() {
        let mut q = ConnectorQuery::default();
        q.toggle_tag("SQL");
        q.toggle_tag("NoSQL");
        assert_eq!(names(&q.apply(connectors())), vec!["MongoDB", "PostgreSQL"]);
        q.toggle_tag("SQL");
        assert_eq!(names(&q.apply(connectors())), vec!["MongoDB"]);
    }

    #[test]
    fn sort_by_category_groups_categories() {
        let q = ConnectorQuery {
            sort: ConnectorSort::Category,
            ..Default::default()
        };
        let cats: Vec<_> = q.apply(connectors()).iter().map(|c| c.category.label()).collect();
        let mut sorted = cats.clone();
        sorted.sort_by_key(|c| c.to_lowercase());
        assert_eq!(cats, sorted);
        assert_eq!(ConnectorSort::from_key("category"), Some(ConnectorSort::Category));
        assert_eq!(ConnectorSort::from_key("rating"), None);
    }

    #[test]
    fn installed_set_comes_from_library() {
        let installed: Vec<_> = installed_connectors().map(|c| c.name).collect();
        assert_eq!(installed, vec!["OpenAI", "Slack", "AWS S3", "GitHub"]);
        assert!(is_installed("GitHub"));
        assert!(!is_installed("HubSpot"));
    }

    #[test]
    fn template_install_reports_missing_connectors() {
        let support = &templates()[0];
        assert_eq!(support.missing_connectors(), vec!["HubSpot"]);
        assert!(support.needs_install());
        let review = &templates()[5];
        assert!(!review.needs_install());
    }

    #[test]
    fn template_search_uses_translated_text() {
        let translate = |key: &str| match key {
            "templatesPage.templateNames.codeReviewAssistant" => "Code Review Assistant".to_string(),
            other => other.to_string(),
        };
        let q = TemplateQuery {
            search: "review".into(),
            category: None,
        };
        let ids: Vec<_> = q.apply(templates(), translate).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["6"]);
    }

    #[test]
    fn template_category_chip_filters() {
        let q = TemplateQuery {
            search: String::new(),
            category: Some(TemplateCategory::Productivity),
        };
        let ids: Vec<_> = q.apply(templates(), |k: &str| k.to_string()).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["5"]);
    }

    #[test]
    fn difficulty_tone_is_keyed_by_enum() {
        assert_eq!(Difficulty::Beginner.tone(), ChipTone::Success);
        assert_eq!(Difficulty::Intermediate.tone(), ChipTone::Warning);
        assert_eq!(Difficulty::Advanced.tone(), ChipTone::Danger);
    }
}
