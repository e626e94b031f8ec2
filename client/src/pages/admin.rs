//! Admin panel shell and its built-in modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/admin` lists the modules from `admin_registry`; `/admin/:module` mounts
//! one of them. Modules inspect and reset the local stores; there is no
//! server-side admin surface.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_params_map;
use localstate::HydrationPhase;
use localstate::messages::MessagesState;
use localstate::notifications::{DismissedNotifications, notifications_seed, unread_count};
use localstate::reactions::{Reactions, total};
use localstate::reputation::{members_seed, reputation};
use localstate::settings::Settings;
use localstate::todo::{TodoList, task_counts};

use super::admin_registry::{lookup, registry};
use crate::state::persisted::Persisted;

#[component]
pub fn AdminPage() -> impl IntoView {
    let params = use_params_map();
    let selected = move || params.with(|p| p.get("module"));

    view! {
        <div class="admin-page">
            <nav class="admin-page__modules">
                {registry()
                    .iter()
                    .map(|(key, _)| {
                        let key = *key;
                        view! {
                            <a
                                class=move || module_link_class(selected().as_deref() == Some(key.as_str()))
                                href=format!("/admin/{}", key.as_str())
                            >
                                {key.label()}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <section class="admin-page__body">
                {move || match selected() {
                    None => view! { <p>"Pick a module."</p> }.into_any(),
                    Some(raw) => match lookup(&raw) {
                        Some(factory) => factory(),
                        None => view! { <p class="admin-page__error">{format!("Unknown module: {raw}")}</p> }.into_any(),
                    },
                }}
            </section>
        </div>
    }
}

fn module_link_class(active: bool) -> &'static str {
    if active { "admin-page__module admin-page__module--active" } else { "admin-page__module" }
}

fn phase_label(phase: HydrationPhase) -> &'static str {
    match phase {
        HydrationPhase::Uninitialized => "not loaded",
        HydrationPhase::Hydrating => "loading",
        HydrationPhase::Ready => "ready",
    }
}

/// One row per persisted store: key, hydration phase, and a reset button.
#[component]
pub fn StorageModule() -> impl IntoView {
    let todo = expect_context::<Persisted<TodoList>>();
    let messages = expect_context::<Persisted<MessagesState>>();
    let reactions = expect_context::<Persisted<Reactions>>();
    let dismissed = expect_context::<Persisted<DismissedNotifications>>();
    let settings = expect_context::<Persisted<Settings>>();

    let rows: Vec<(&'static str, Signal<HydrationPhase>, Callback<()>)> = vec![
        (localstate::todo::STORAGE_KEY, Signal::derive(move || todo.phase()), Callback::new(move |()| todo.clear())),
        (localstate::messages::STORAGE_KEY, Signal::derive(move || messages.phase()), Callback::new(move |()| messages.clear())),
        (localstate::reactions::STORAGE_KEY, Signal::derive(move || reactions.phase()), Callback::new(move |()| reactions.clear())),
        (
            localstate::notifications::STORAGE_KEY,
            Signal::derive(move || dismissed.phase()),
            Callback::new(move |()| dismissed.clear()),
        ),
        (localstate::settings::STORAGE_KEY, Signal::derive(move || settings.phase()), Callback::new(move |()| settings.clear())),
    ];

    view! {
        <table class="admin-storage">
            <thead>
                <tr>
                    <th>"Key"</th>
                    <th>"State"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|(key, phase, on_clear)| {
                        view! {
                            <tr>
                                <td>
                                    <code>{key}</code>
                                </td>
                                <td>{move || phase_label(phase.get())}</td>
                                <td>
                                    <button
                                        class="btn"
                                        disabled=move || phase.get() != HydrationPhase::Ready
                                        on:click=move |_| on_clear.run(())
                                    >
                                        "Reset"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// Totals across the local stores.
#[component]
pub fn ActivityModule() -> impl IntoView {
    let todo = expect_context::<Persisted<TodoList>>();
    let messages = expect_context::<Persisted<MessagesState>>();
    let reactions = expect_context::<Persisted<Reactions>>();
    let dismissed = expect_context::<Persisted<DismissedNotifications>>();

    let stats = move || {
        let counts = todo.with(|t| task_counts(&t.tasks));
        vec![
            ("Open tasks", counts.active.to_string()),
            ("Completed tasks", counts.completed.to_string()),
            ("Conversations", messages.with(|m| m.conversations.len()).to_string()),
            ("Messages", messages.with(|m| m.messages.len()).to_string()),
            ("Reactions", reactions.with(total).to_string()),
            ("Unread notifications", dismissed.with(|d| unread_count(&notifications_seed(), d)).to_string()),
        ]
    };

    view! {
        <dl class="admin-activity">
            {move || {
                stats()
                    .into_iter()
                    .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                    .collect_view()
            }}
        </dl>
    }
}

/// Reputation breakdown per member.
#[component]
pub fn MembersModule() -> impl IntoView {
    view! {
        <table class="admin-members">
            <thead>
                <tr>
                    <th>"Member"</th>
                    <th>"Votes"</th>
                    <th>"Answers"</th>
                    <th>"Best answers"</th>
                    <th>"Reputation"</th>
                </tr>
            </thead>
            <tbody>
                {members_seed()
                    .into_iter()
                    .map(|m| {
                        let c = m.contributions;
                        view! {
                            <tr>
                                <td>{m.name}</td>
                                <td>{c.votes}</td>
                                <td>{c.answers}</td>
                                <td>{c.best_answers}</td>
                                <td>{reputation(c)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
