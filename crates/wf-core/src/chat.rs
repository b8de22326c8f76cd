//! Agent test chat and the agent configuration panel.
//!
//! Sending appends the user message at once and hands back a
//! [`ReplyTicket`]. The caller schedules the simulated assistant reply and
//! redeems the ticket when the delay elapses. Cancelled tickets are ignored,
//! so a reply can never land after its page went away.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

impl Message {
    /// `HH:MM` shown under the bubble.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

fn sample_time(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 7, 15)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .unwrap_or_default()
}

/// Conversation shown when the agents page opens.
pub fn sample_messages() -> Vec<Message> {
    let msg = |id: &str, role, content: &str, timestamp| Message {
        id: id.to_string(),
        role,
        content: content.to_string(),
        timestamp,
    };
    vec![
        msg(
            "1",
            Role::User,
            "Can you help me find information about our Q2 sales report?",
            sample_time(10, 30, 0),
        ),
        msg(
            "2",
            Role::Assistant,
            "I found the Q2 sales report in your company knowledge base. The total revenue was $1.2M, which is 15% above target. Would you like me to summarize the key points?",
            sample_time(10, 30, 30),
        ),
        msg(
            "3",
            Role::User,
            "Yes, please summarize the main highlights and any areas of concern.",
            sample_time(10, 31, 0),
        ),
        msg(
            "4",
            Role::Assistant,
            "Here are the highlights from the Q2 sales report:\n\n\
             • Total revenue: $1.2M (15% above target)\n\
             • New customers: 45 (20% increase from Q1)\n\
             • Average deal size: $26,500 (5% increase)\n\
             • Sales cycle: 32 days (improved by 3 days)\n\n\
             Areas of concern:\n\
             • Customer churn increased to 5% (up from 3% in Q1)\n\
             • West region missed targets by 8%\n\
             • Enterprise segment growth slowed to 4% (vs 12% in Q1)\n\n\
             The report recommends focusing on retention strategies and investigating the slowdown in the enterprise segment.",
            sample_time(10, 31, 45),
        ),
    ]
}

// ---------------------------------------------------------------------------
// ChatSession
// ---------------------------------------------------------------------------

/// Handle for one pending simulated reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<Message>,
    next_seq: u64,
    pending: Vec<u64>,
}

impl ChatSession {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            next_seq: 1,
            pending: Vec::new(),
        }
    }

    pub fn with_sample() -> Self {
        Self::new(sample_messages())
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether the reply for `ticket` is still outstanding.
    pub fn is_pending(&self, ticket: ReplyTicket) -> bool {
        self.pending.contains(&ticket.0)
    }

    /// Append a user message. Blank drafts are ignored and return `None`.
    pub fn send(&mut self, draft: &str, now: NaiveDateTime) -> Option<ReplyTicket> {
        if draft.trim().is_empty() {
            return None;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.messages.push(Message {
            id: format!("user-{seq}"),
            role: Role::User,
            content: draft.to_string(),
            timestamp: now,
        });
        self.pending.push(seq);
        Some(ReplyTicket(seq))
    }

    /// Append the assistant reply for `ticket`. Returns `false` and leaves
    /// the transcript alone when the ticket was cancelled or already used.
    pub fn deliver_reply(&mut self, ticket: ReplyTicket, text: &str, now: NaiveDateTime) -> bool {
        let Some(pos) = self.pending.iter().position(|s| *s == ticket.0) else {
            tracing::debug!(ticket = ticket.0, "dropping reply for cancelled ticket");
            return false;
        };
        self.pending.remove(pos);
        self.messages.push(Message {
            id: format!("assistant-{}", ticket.0),
            role: Role::Assistant,
            content: text.to_string(),
            timestamp: now,
        });
        true
    }

    pub fn cancel(&mut self, ticket: ReplyTicket) {
        self.pending.retain(|s| *s != ticket.0);
    }
}

// ---------------------------------------------------------------------------
// Configuration panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgentTab {
    #[default]
    SystemPrompt,
    Knowledge,
    MemoryTools,
}

impl AgentTab {
    pub const ALL: [AgentTab; 3] = [AgentTab::SystemPrompt, AgentTab::Knowledge, AgentTab::MemoryTools];

    pub fn label_key(&self) -> &'static str {
        match self {
            AgentTab::SystemPrompt => "agentsPage.tabs.systemPrompt",
            AgentTab::Knowledge => "agentsPage.tabs.knowledge",
            AgentTab::MemoryTools => "agentsPage.tabs.memoryTools",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AgentTab::SystemPrompt => "file-text",
            AgentTab::Knowledge => "database",
            AgentTab::MemoryTools => "tool",
        }
    }
}

/// `(value, label)` options of a select box; the first entry is selected.
pub type Options = &'static [(&'static str, &'static str)];

pub const BASE_MODELS: Options = &[
    ("gpt4", "GPT-4"),
    ("gpt35", "GPT-3.5 Turbo"),
    ("claude", "Claude 3"),
    ("mistral", "Mistral Large"),
];

pub const VECTOR_DATABASES: Options = &[
    ("pinecone", "Pinecone"),
    ("qdrant", "Qdrant"),
    ("weaviate", "Weaviate"),
    ("redis", "Redis"),
];

pub const EMBEDDING_MODELS: Options = &[
    ("openai", "OpenAI Embeddings"),
    ("cohere", "Cohere Embeddings"),
    ("huggingface", "HuggingFace Embeddings"),
];

pub const MEMORY_TYPES: Options = &[
    ("conversation", "Conversation History"),
    ("summary", "Summary Memory"),
    ("buffer", "Buffer Memory"),
];

pub const DEFAULT_AGENT_NAME: &str = "Sales Data Assistant";
pub const DEFAULT_MEMORY_WINDOW: u32 = 10;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant that specializes in retrieving and explaining sales data. You have access to the company's sales reports, customer data, and market analysis. Always be concise and accurate. If you don't know something, say so and don't make up information.";

pub const EXAMPLE_PAIR: (&str, &str) = (
    "What were our top selling products last quarter?",
    "Based on the Q2 sales data, your top selling products were:\n\
     1. Product X - $450K (22% of revenue)\n\
     2. Product Y - $320K (16% of revenue)\n\
     3. Product Z - $280K (14% of revenue)\n\n\
     Product X showed the strongest growth at 28% YoY. Would you like more details on any specific product?",
);

/// `(icon, name)` of the connected knowledge sources.
pub const DATA_SOURCES: [(&str, &str); 3] = [
    ("file", "Sales Reports"),
    ("database", "Customer Database"),
    ("folder", "Market Analysis"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

pub const TOOLS: [Tool; 3] = [
    Tool { name: "Web Search", description: "Search the web for up-to-date information", enabled: true },
    Tool { name: "Calculator", description: "Perform mathematical calculations", enabled: true },
    Tool { name: "Data Visualization", description: "Generate charts and graphs from data", enabled: false },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        sample_time(12, 0, 0)
    }

    #[test]
    fn session_starts_with_sample_conversation() {
        let chat = ChatSession::with_sample();
        assert_eq!(chat.messages().len(), 4);
        assert_eq!(chat.messages()[0].role, Role::User);
        assert_eq!(chat.messages()[3].role, Role::Assistant);
        assert_eq!(chat.messages()[1].time_label(), "10:30");
    }

    #[test]
    fn blank_messages_are_ignored() {
        let mut chat = ChatSession::with_sample();
        assert!(chat.send("   \n\t", now()).is_none());
        assert!(chat.send("", now()).is_none());
        assert_eq!(chat.messages().len(), 4);
    }

    #[test]
    fn send_appends_user_then_reply() {
        let mut chat = ChatSession::with_sample();
        let ticket = chat.send("hello", now()).unwrap();
        assert_eq!(chat.messages().len(), 5);
        assert_eq!(chat.messages()[4].role, Role::User);
        assert_eq!(chat.messages()[4].content, "hello");
        assert!(chat.is_pending(ticket));

        assert!(chat.deliver_reply(ticket, "simulated", now()));
        assert_eq!(chat.messages().len(), 6);
        assert_eq!(chat.messages()[5].role, Role::Assistant);
        assert!(!chat.is_pending(ticket));

        // A ticket is redeemable once.
        assert!(!chat.deliver_reply(ticket, "again", now()));
        assert_eq!(chat.messages().len(), 6);
    }

    #[test]
    fn cancelled_reply_is_dropped() {
        let mut chat = ChatSession::new(Vec::new());
        let first = chat.send("one", now()).unwrap();
        let second = chat.send("two", now()).unwrap();
        chat.cancel(first);
        assert!(!chat.deliver_reply(first, "late", now()));
        assert!(chat.deliver_reply(second, "ok", now()));
        let third = chat.send("three", now()).unwrap();
        chat.cancel(third);
        assert!(!chat.is_pending(third));
        let roles: Vec<_> = chat.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::User, Role::Assistant, Role::User]);
    }

    #[test]
    fn message_ids_are_unique() {
        let mut chat = ChatSession::new(Vec::new());
        let a = chat.send("a", now()).unwrap();
        let b = chat.send("b", now()).unwrap();
        chat.deliver_reply(b, "rb", now());
        chat.deliver_reply(a, "ra", now());
        let mut ids: Vec<_> = chat.messages().iter().map(|m| m.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn option_lists_are_non_empty() {
        for opts in [BASE_MODELS, VECTOR_DATABASES, EMBEDDING_MODELS, MEMORY_TYPES] {
            assert!(!opts.is_empty());
        }
        assert_eq!(AgentTab::default(), AgentTab::SystemPrompt);
    }
}
