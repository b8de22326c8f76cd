//! Organization settings: section menu, members, API keys and billing.

use std::fmt;

use crate::format;
use crate::tone::ChipTone;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsSection {
    #[default]
    General,
    Members,
    ApiKeys,
    Billing,
}

impl SettingsSection {
    pub const ALL: [SettingsSection; 4] = [
        SettingsSection::General,
        SettingsSection::Members,
        SettingsSection::ApiKeys,
        SettingsSection::Billing,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            SettingsSection::General => "settingsPage.sections.general",
            SettingsSection::Members => "settingsPage.sections.members",
            SettingsSection::ApiKeys => "settingsPage.sections.apiKeys",
            SettingsSection::Billing => "settingsPage.sections.billing",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SettingsSection::General => "building",
            SettingsSection::Members => "users",
            SettingsSection::ApiKeys => "key",
            SettingsSection::Billing => "credit-card",
        }
    }
}

impl fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SettingsSection::General => "general",
            SettingsSection::Members => "members",
            SettingsSection::ApiKeys => "api-keys",
            SettingsSection::Billing => "billing",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// General
// ---------------------------------------------------------------------------

pub const DEFAULT_ORG_NAME: &str = "Acme Inc.";
pub const DEFAULT_INDUSTRY: &str = "technology";
pub const DEFAULT_TIMEZONE: &str = "utc-8";

pub const TIMEZONES: [(&str, &str); 8] = [
    ("utc-12", "UTC-12:00"),
    ("utc-11", "UTC-11:00"),
    ("utc-10", "UTC-10:00"),
    ("utc-9", "UTC-09:00"),
    ("utc-8", "UTC-08:00 (Pacific Time)"),
    ("utc-7", "UTC-07:00 (Mountain Time)"),
    ("utc-6", "UTC-06:00 (Central Time)"),
    ("utc-5", "UTC-05:00 (Eastern Time)"),
];

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    Admin,
    Developer,
}

impl MemberRole {
    pub fn label_key(&self) -> &'static str {
        match self {
            MemberRole::Admin => "settingsPage.roles.admin",
            MemberRole::Developer => "settingsPage.roles.developer",
        }
    }

    pub fn tone(&self) -> ChipTone {
        match self {
            MemberRole::Admin => ChipTone::Primary,
            MemberRole::Developer => ChipTone::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStatus {
    Active,
    Pending,
}

impl MemberStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            MemberStatus::Active => "settingsPage.memberStatus.active",
            MemberStatus::Pending => "settingsPage.memberStatus.pending",
        }
    }

    pub fn tone(&self) -> ChipTone {
        match self {
            MemberStatus::Active => ChipTone::Success,
            MemberStatus::Pending => ChipTone::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub name: &'static str,
    pub email: &'static str,
    pub avatar: &'static str,
    pub role: MemberRole,
    pub status: MemberStatus,
}

pub const MEMBERS: [Member; 3] = [
    Member {
        name: "Alex Johnson",
        email: "alex@company.com",
        avatar: "https://img.heroui.chat/image/avatar?w=200&h=200&u=1",
        role: MemberRole::Admin,
        status: MemberStatus::Active,
    },
    Member {
        name: "Sarah Miller",
        email: "sarah@company.com",
        avatar: "https://img.heroui.chat/image/avatar?w=200&h=200&u=2",
        role: MemberRole::Developer,
        status: MemberStatus::Active,
    },
    Member {
        name: "Michael Chen",
        email: "michael@company.com",
        avatar: "https://img.heroui.chat/image/avatar?w=200&h=200&u=3",
        role: MemberRole::Developer,
        status: MemberStatus::Pending,
    },
];

// ---------------------------------------------------------------------------
// API keys
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Production,
    Development,
}

impl KeyKind {
    pub fn label_key(&self) -> &'static str {
        match self {
            KeyKind::Production => "settingsPage.keyKinds.production",
            KeyKind::Development => "settingsPage.keyKinds.development",
        }
    }

    pub fn tone(&self) -> ChipTone {
        match self {
            KeyKind::Production => ChipTone::Success,
            KeyKind::Development => ChipTone::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiKey {
    pub name: &'static str,
    /// Masked secret, never the full key.
    pub masked: &'static str,
    pub kind: KeyKind,
    pub created: &'static str,
    pub last_used: &'static str,
}

pub const API_KEYS: [ApiKey; 2] = [
    ApiKey {
        name: "Production API Key",
        masked: "sk_prod_...8f3d",
        kind: KeyKind::Production,
        created: "2023-06-15",
        last_used: "2023-07-14",
    },
    ApiKey {
        name: "Development API Key",
        masked: "sk_dev_...2a7c",
        kind: KeyKind::Development,
        created: "2023-06-20",
        last_used: "2023-07-15",
    },
];

pub const KEY_SECURITY_TIPS: [&str; 4] = [
    "settingsPage.apiKeyTips.noSharing",
    "settingsPage.apiKeyTips.envVars",
    "settingsPage.apiKeyTips.rotate",
    "settingsPage.apiKeyTips.separate",
];

// ---------------------------------------------------------------------------
// Billing
// ---------------------------------------------------------------------------

pub const PLAN_NAME: &str = "Pro Plan";
pub const PLAN_PRICE_CENTS: u64 = 4900;
pub const PLAN_RENEWS_ON: &str = "August 15, 2023";
pub const PAYMENT_CARD: (&str, &str) = ("Visa ending in 4242", "12/2025");

/// Which unit a meter's raw numbers are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeterUnit {
    Count,
    Tokens,
    /// Stored in megabytes, shown in GB.
    Megabytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageMeter {
    pub label_key: &'static str,
    pub used: u64,
    pub limit: u64,
    pub unit: MeterUnit,
}

impl UsageMeter {
    pub fn percent(&self) -> f64 {
        format::percent(self.used, self.limit)
    }

    /// `"24.9% used"`, trailing `.0` dropped as the page shows it.
    pub fn percent_label(&self) -> String {
        let p = self.percent();
        if p.fract() == 0.0 {
            format!("{:.0}%", p)
        } else {
            format!("{:.1}%", p)
        }
    }

    /// `"12,450 / 50,000"`.
    pub fn amount_label(&self) -> String {
        match self.unit {
            MeterUnit::Count => format!("{} / {}", format::thousands(self.used), format::thousands(self.limit)),
            MeterUnit::Tokens => format!("{} / {}", format::mega(self.used), compact_mega(self.limit)),
            MeterUnit::Megabytes => format!("{} / {}", gigabytes(self.used), gigabytes(self.limit)),
        }
    }

    /// Meters close to their limit switch from success to warning tone.
    pub fn tone(&self) -> ChipTone {
        let p = self.percent();
        if p >= 90.0 {
            ChipTone::Danger
        } else if p >= 75.0 {
            ChipTone::Warning
        } else {
            ChipTone::Success
        }
    }
}

fn compact_mega(n: u64) -> String {
    if n % 1_000_000 == 0 {
        format!("{}M", n / 1_000_000)
    } else {
        format::mega(n)
    }
}

fn gigabytes(mb: u64) -> String {
    if mb % 1000 == 0 {
        format!("{}GB", mb / 1000)
    } else {
        format!("{:.1}GB", mb as f64 / 1000.0)
    }
}

pub const USAGE_METERS: [UsageMeter; 3] = [
    UsageMeter { label_key: "settingsPage.usage.apiCalls", used: 12_450, limit: 50_000, unit: MeterUnit::Count },
    UsageMeter { label_key: "settingsPage.usage.tokens", used: 2_170_000, limit: 5_000_000, unit: MeterUnit::Tokens },
    UsageMeter { label_key: "settingsPage.usage.storage", used: 1_200, limit: 10_000, unit: MeterUnit::Megabytes },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invoice {
    pub date: &'static str,
    pub description: &'static str,
    pub amount_cents: u64,
    pub paid: bool,
}

impl Invoice {
    pub fn amount_label(&self) -> String {
        format::usd_cents(self.amount_cents)
    }
}

pub const INVOICES: [Invoice; 3] = [
    Invoice { date: "Jul 15, 2023", description: "Pro Plan - Monthly", amount_cents: 4900, paid: true },
    Invoice { date: "Jun 15, 2023", description: "Pro Plan - Monthly", amount_cents: 4900, paid: true },
    Invoice { date: "May 15, 2023", description: "Pro Plan - Monthly", amount_cents: 4900, paid: true },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_percentages_are_computed() {
        let labels: Vec<_> = USAGE_METERS.iter().map(|m| m.percent_label()).collect();
        assert_eq!(labels, vec!["24.9%", "43.4%", "12%"]);
    }

    #[test]
    fn usage_amounts() {
        assert_eq!(USAGE_METERS[0].amount_label(), "12,450 / 50,000");
        assert_eq!(USAGE_METERS[1].amount_label(), "2.17M / 5M");
        assert_eq!(USAGE_METERS[2].amount_label(), "1.2GB / 10GB");
    }

    #[test]
    fn meter_tone_tracks_usage() {
        assert!(USAGE_METERS.iter().all(|m| m.tone() == ChipTone::Success));
        let hot = UsageMeter { label_key: "x", used: 95, limit: 100, unit: MeterUnit::Count };
        assert_eq!(hot.tone(), ChipTone::Danger);
        let zero = UsageMeter { label_key: "x", used: 5, limit: 0, unit: MeterUnit::Count };
        assert_eq!(zero.percent(), 0.0);
    }

    #[test]
    fn member_and_key_chips() {
        assert_eq!(MEMBERS[0].role.tone(), ChipTone::Primary);
        assert_eq!(MEMBERS[2].status.tone(), ChipTone::Warning);
        assert!(API_KEYS.iter().all(|k| k.masked.contains("...")));
        assert_eq!(INVOICES[0].amount_label(), "$49.00");
    }

    #[test]
    fn default_section_is_general() {
        assert_eq!(SettingsSection::default(), SettingsSection::General);
        assert_eq!(SettingsSection::ApiKeys.to_string(), "api-keys");
    }
}
