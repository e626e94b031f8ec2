//! Direct messages page: conversation list, thread, and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Conversations and messages persist together under `messages_state_v1`, so
//! a send appends the message and bumps `lastMessageAt` in one write. The
//! unsent composer text is kept separately under `messages_draft_v1` and is
//! restored only after hydration.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;
use localstate::messages::{
    Conversation, MessagesAction, MessagesState, conversations_by_recency, counterpart, last_message,
    messages_by_conversation,
};

use crate::components::post_body::PostBody;
use crate::state::auth::AuthState;
use crate::state::persisted::Persisted;
use crate::state::ui::UiState;
use crate::util::clock;
use crate::util::ui_persistence::{clear_json, load_json, save_json};

const DRAFT_KEY: &str = "messages_draft_v1";

#[component]
pub fn MessagesPage() -> impl IntoView {
    let messages = expect_context::<Persisted<MessagesState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let draft = RwSignal::new(String::new());
    Effect::new(move || {
        if let Some(saved) = load_json::<String>(DRAFT_KEY) {
            draft.set(saved);
        }
    });

    let conversations = move || messages.with(conversations_by_recency);
    let active = move || {
        let ids: Vec<String> = conversations().into_iter().map(|c| c.id).collect();
        ui.with(|u| u.resolve_conversation(&ids))
    };

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let me = auth.with_untracked(|a| a.user.id.clone());
        let Some(action) =
            build_send_action(active().as_deref(), &me, &draft.get_untracked(), clock::new_id("msg"), clock::now())
        else {
            return;
        };
        if messages.dispatch(action) {
            draft.set(String::new());
            clear_json(DRAFT_KEY);
        }
    };

    let thread = move || {
        let Some(id) = active() else {
            return Vec::new();
        };
        messages.with(|state| messages_by_conversation(state).remove(&id).unwrap_or_default())
    };

    view! {
        <div class="messages-page">
            <aside class="messages-page__list">
                <h2>"Messages"</h2>
                {move || {
                    conversations()
                        .into_iter()
                        .map(|conversation| {
                            let id = conversation.id.clone();
                            let selected_id = id.clone();
                            let title = auth.with(|a| conversation_title(a, &conversation));
                            let preview = messages
                                .with(|state| last_message(state, &conversation.id).map(|m| preview_text(&m.content)))
                                .unwrap_or_default();
                            view! {
                                <button
                                    class=move || {
                                        if active().as_deref() == Some(selected_id.as_str()) {
                                            "messages-page__conversation messages-page__conversation--active"
                                        } else {
                                            "messages-page__conversation"
                                        }
                                    }
                                    on:click=move |_| ui.update(|u| u.active_conversation = Some(id.clone()))
                                >
                                    <strong>{title}</strong>
                                    <span class="messages-page__preview">{preview}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <div class="messages-page__new">
                    {move || {
                        auth.get()
                            .contacts()
                            .into_iter()
                            .map(|contact| {
                                let label = format!("Message {}", contact.name);
                                view! {
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            let me = auth.with_untracked(|a| a.user.id.clone());
                                            let action = open_action(&me, &contact.id);
                                            let id = conversation_id_for(&contact.id);
                                            messages.dispatch(action);
                                            ui.update(|u| u.active_conversation = Some(id));
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </aside>

            <section class="messages-page__thread">
                <Show when=move || !messages.is_ready()>
                    <p class="messages-page__loading">"Loading conversations..."</p>
                </Show>
                {move || {
                    thread()
                        .into_iter()
                        .map(|message| {
                            let mine = auth.with(|a| a.user.id == message.sender_id);
                            let sender = auth.with(|a| a.display_name(&message.sender_id));
                            view! {
                                <article class=if mine { "message message--mine" } else { "message" }>
                                    <header class="message__meta">
                                        <span>{sender}</span>
                                        <time>{message.created_at}</time>
                                    </header>
                                    <PostBody source=message.content/>
                                </article>
                            }
                        })
                        .collect_view()
                }}
                <form class="messages-page__composer" on:submit=on_send>
                    <textarea
                        placeholder="Write a message. Markdown and @mentions work."
                        prop:value=move || draft.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            save_json(DRAFT_KEY, &value);
                            draft.set(value);
                        }
                    ></textarea>
                    <button class="btn" type="submit" disabled=move || !messages.is_ready() || active().is_none()>
                        "Send"
                    </button>
                </form>
            </section>
        </div>
    }
}

/// The send for `draft`, or `None` when there is nowhere to send or nothing
/// but whitespace to say.
fn build_send_action(
    conversation_id: Option<&str>,
    me: &str,
    draft: &str,
    id: String,
    created_at: String,
) -> Option<MessagesAction> {
    let conversation_id = conversation_id?;
    let content = draft.trim();
    if content.is_empty() {
        return None;
    }
    Some(MessagesAction::Send {
        id,
        conversation_id: conversation_id.to_owned(),
        sender_id: me.to_owned(),
        content: content.to_owned(),
        created_at,
    })
}

/// One direct conversation per contact.
fn conversation_id_for(contact_id: &str) -> String {
    format!("cv-{contact_id}")
}

fn open_action(me: &str, contact_id: &str) -> MessagesAction {
    MessagesAction::Open {
        id: conversation_id_for(contact_id),
        participants: vec![me.to_owned(), contact_id.to_owned()],
    }
}

fn conversation_title(auth: &AuthState, conversation: &Conversation) -> String {
    counterpart(conversation, &auth.user.id).map_or_else(|| "Notes to self".to_owned(), |id| auth.display_name(id))
}

const PREVIEW_CHARS: usize = 40;

fn preview_text(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    if first_line.chars().count() > PREVIEW_CHARS {
        let cut: String = first_line.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}…")
    } else {
        first_line.to_owned()
    }
}
