use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wf_core::chat::{
    AgentTab, ChatSession, ReplyTicket, Role, BASE_MODELS, DATA_SOURCES, DEFAULT_AGENT_NAME, DEFAULT_MEMORY_WINDOW,
    DEFAULT_SYSTEM_PROMPT, EMBEDDING_MODELS, EXAMPLE_PAIR, MEMORY_TYPES, TOOLS, VECTOR_DATABASES,
};
use wf_core::tone::ChipTone;

use crate::components::icons::Icon;
use crate::components::status_chip::StatusChip;
use crate::components::tabs::{options, TabBar};
use crate::i18n::{tr, use_i18n};
use crate::state::use_shell;

fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[component]
pub fn AgentsPage() -> impl IntoView {
    view! {
        <div class="page page-agents">
            <div class="page-header">
                <div>
                    <h1>{tr("agentsPage.heading")}</h1>
                    <p class="muted">{tr("agentsPage.subtitle")}</p>
                </div>
            </div>

            <div class="agents-layout">
                <ChatPanel />
                <ConfigPanel />
            </div>

            <div class="form-actions">
                <button class="btn btn-flat">{tr("agentsPage.saveDraft")}</button>
                <button class="btn btn-primary">
                    <Icon name="rocket" size=16 />
                    {tr("agentsPage.saveDeploy")}
                </button>
            </div>
        </div>
    }
}

/// Test chat. Each send schedules one simulated reply; leaving the page
/// drops the pending timers and cancels their tickets.
#[component]
fn ChatPanel() -> impl IntoView {
    let i18n = use_i18n();
    let shell = use_shell();
    let chat = RwSignal::new(ChatSession::with_sample());
    let (draft, set_draft) = signal(String::new());
    let end_ref = NodeRef::<html::Div>::new();
    let timers: SendWrapper<Rc<RefCell<HashMap<ReplyTicket, Timeout>>>> =
        SendWrapper::new(Rc::new(RefCell::new(HashMap::new())));

    {
        let timers = timers.clone();
        on_cleanup(move || {
            for (ticket, _timeout) in timers.borrow_mut().drain() {
                chat.try_update_untracked(|c| c.cancel(ticket));
            }
        });
    }

    // Keep the newest message in view.
    Effect::new(move |_| {
        chat.with(|c| c.messages().len());
        if let Some(el) = end_ref.get() {
            el.scroll_into_view();
        }
    });

    let send = move || {
        let text = draft.get_untracked();
        let Some(ticket) = chat.try_update(|c| c.send(&text, now())).flatten() else {
            return;
        };
        set_draft.set(String::new());
        let reply = shell.reply_text();
        let timeout = Timeout::new(shell.reply_delay_ms(), move || {
            chat.try_update(|c| c.deliver_reply(ticket, &reply, now()));
        });
        let mut timers = timers.borrow_mut();
        // Fired timers are dropped here, outside their own callback.
        timers.retain(|t, _| chat.with_untracked(|c| c.is_pending(*t)));
        timers.insert(ticket, timeout);
    };
    let send_on_click = send.clone();

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <section class="card chat-panel">
            <div class="chat-header">
                <h3>{tr("agentsPage.chatHistory")}</h3>
                <p class="muted small">{tr("agentsPage.chatHint")}</p>
            </div>
            <div class="chat-messages" role="log" aria-live="polite">
                <For
                    each=move || chat.with(|c| c.messages().to_vec())
                    key=|m| m.id.clone()
                    children=|m| {
                        let mine = m.role == Role::User;
                        view! {
                            <div class="chat-row" class:mine=mine>
                                <div class="bubble" class:bubble-user=mine class:bubble-assistant=!mine>
                                    <p class="bubble-text">{m.content.clone()}</p>
                                    <p class="bubble-time">{m.time_label()}</p>
                                </div>
                            </div>
                        }
                    }
                />
                <div node_ref=end_ref></div>
            </div>
            <div class="chat-input">
                <input
                    type="text"
                    placeholder=move || i18n.t("agentsPage.typeMessage")
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn-primary icon-only" aria-label=tr("agentsPage.send") on:click=move |_| send_on_click()>
                    <Icon name="send" size=18 />
                </button>
            </div>
        </section>
    }
}

#[component]
fn ConfigPanel() -> impl IntoView {
    let tab = RwSignal::new(AgentTab::default());
    let tabs: Vec<_> = AgentTab::ALL.iter().map(|t| (*t, t.label_key(), Some(t.icon()))).collect();

    view! {
        <section class="card config-panel">
            <TabBar tabs active=tab aria_label="Agent configuration tabs" />
            <div class="tab-panel">
                {move || match tab.get() {
                    AgentTab::SystemPrompt => view! { <SystemPromptTab /> }.into_any(),
                    AgentTab::Knowledge => view! { <KnowledgeTab /> }.into_any(),
                    AgentTab::MemoryTools => view! { <MemoryToolsTab /> }.into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn SystemPromptTab() -> impl IntoView {
    let (user, assistant) = EXAMPLE_PAIR;
    view! {
        <label class="field">
            <span>{tr("agentsPage.agentName")}</span>
            <input type="text" value=DEFAULT_AGENT_NAME />
        </label>
        <label class="field">
            <span>{tr("agentsPage.baseModel")}</span>
            <select>{options(BASE_MODELS, "gpt4")}</select>
        </label>
        <label class="field">
            <span>{tr("agentsPage.systemPrompt")}</span>
            <textarea rows="6">{DEFAULT_SYSTEM_PROMPT}</textarea>
        </label>
        <div>
            <p class="field-label">{tr("agentsPage.examplePairs")}</p>
            <div class="card inset">
                <p class="field-label">{tr("agentsPage.user")}</p>
                <p class="example">{user}</p>
                <p class="field-label">{tr("agentsPage.assistant")}</p>
                <p class="example">{assistant}</p>
            </div>
            <button class="btn btn-primary-flat">
                <Icon name="plus" size=16 />
                {tr("agentsPage.addExamplePair")}
            </button>
        </div>
    }
}

#[component]
fn KnowledgeTab() -> impl IntoView {
    view! {
        <label class="field">
            <span>{tr("agentsPage.vectorDatabase")}</span>
            <select>{options(VECTOR_DATABASES, "pinecone")}</select>
        </label>
        <label class="field">
            <span>{tr("agentsPage.embeddingModel")}</span>
            <select>{options(EMBEDDING_MODELS, "openai")}</select>
        </label>
        <div>
            <p class="field-label">{tr("agentsPage.dataSources")}</p>
            <ul class="card inset source-list">
                {DATA_SOURCES
                    .iter()
                    .map(|(icon, name)| view! {
                        <li>
                            <span><Icon name=*icon size=16 />{*name}</span>
                            <StatusChip tone=ChipTone::Success label_key="agentsPage.connected" />
                        </li>
                    })
                    .collect_view()}
            </ul>
            <button class="btn btn-primary-flat">
                <Icon name="plus" size=16 />
                {tr("agentsPage.addDataSource")}
            </button>
        </div>
    }
}

#[component]
fn MemoryToolsTab() -> impl IntoView {
    view! {
        <div>
            <p class="field-label">{tr("agentsPage.memory")}</p>
            <div class="card inset">
                <label class="field">
                    <span>{tr("agentsPage.memoryType")}</span>
                    <select>{options(MEMORY_TYPES, "conversation")}</select>
                </label>
                <label class="field">
                    <span>{tr("agentsPage.memoryWindow")}</span>
                    <input type="number" min="1" value=DEFAULT_MEMORY_WINDOW.to_string() />
                </label>
                <label class="checkbox">
                    <input type="checkbox" checked />
                    {tr("agentsPage.longTermMemory")}
                </label>
            </div>
        </div>
        <div>
            <p class="field-label">{tr("agentsPage.tools")}</p>
            <div class="card inset">
                {TOOLS
                    .iter()
                    .map(|tool| view! {
                        <label class="checkbox tool-row">
                            <input type="checkbox" checked=tool.enabled />
                            <span>
                                <span class="tool-name">{tool.name}</span>
                                <span class="muted tiny">{tool.description}</span>
                            </span>
                        </label>
                    })
                    .collect_view()}
            </div>
            <button class="btn btn-primary-flat">
                <Icon name="plus" size=16 />
                {tr("agentsPage.addCustomTool")}
            </button>
        </div>
    }
}
