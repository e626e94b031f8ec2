//! Notification inbox with persistent dismissal.
//!
//! The feed itself is seed data; only the set of dismissed ids is stored, so
//! a dismissed notification stays hidden across reloads.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;
use localstate::notifications::{
    DismissedNotifications, Notification, NotificationAction, NotificationKind, notifications_seed,
    visible_notifications,
};

use crate::state::persisted::Persisted;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let dismissed = expect_context::<Persisted<DismissedNotifications>>();

    let visible = move || dismissed.with(|d| visible_notifications(&notifications_seed(), d));
    let hidden = move || dismissed.with(|d| hidden_notifications(&notifications_seed(), d));

    let on_dismiss_all = move |_| {
        let ids = visible().into_iter().map(|n| n.id).collect();
        dismissed.dispatch(NotificationAction::DismissAll(ids));
    };

    view! {
        <div class="notifications-page">
            <header class="notifications-page__header">
                <h1>"Notifications"</h1>
                <button
                    class="btn"
                    disabled=move || !dismissed.is_ready() || visible().is_empty()
                    on:click=on_dismiss_all
                >
                    "Dismiss all"
                </button>
            </header>

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="notifications-page__empty">"You're all caught up."</p> }
            >
                <ul class="notifications-page__feed">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|n| {
                                let id = n.id.clone();
                                view! {
                                    <li class=format!("notification notification--{}", kind_slug(n.kind))>
                                        <span class="notification__icon">{kind_icon(n.kind)}</span>
                                        <span class="notification__text">{n.text}</span>
                                        <time>{n.created_at}</time>
                                        <button
                                            class="btn notification__dismiss"
                                            title="Dismiss"
                                            on:click=move |_| {
                                                dismissed.dispatch(NotificationAction::Dismiss(id.clone()));
                                            }
                                        >
                                            "×"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>

            <Show when=move || !hidden().is_empty()>
                <details class="notifications-page__dismissed">
                    <summary>{move || format!("Dismissed ({})", hidden().len())}</summary>
                    <ul>
                        {move || {
                            hidden()
                                .into_iter()
                                .map(|n| {
                                    let id = n.id.clone();
                                    view! {
                                        <li>
                                            <span>{n.text}</span>
                                            <button
                                                class="btn"
                                                on:click=move |_| {
                                                    dismissed.dispatch(NotificationAction::Restore(id.clone()));
                                                }
                                            >
                                                "Restore"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </details>
            </Show>
        </div>
    }
}

/// Feed entries the user has dismissed, in feed order.
fn hidden_notifications(feed: &[Notification], dismissed: &DismissedNotifications) -> Vec<Notification> {
    feed.iter().filter(|n| dismissed.ids.contains(&n.id)).cloned().collect()
}

fn kind_slug(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Mention => "mention",
        NotificationKind::Answer => "answer",
        NotificationKind::Reaction => "reaction",
        NotificationKind::Order => "order",
        NotificationKind::System => "system",
    }
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Mention => "@",
        NotificationKind::Answer => "💬",
        NotificationKind::Reaction => "★",
        NotificationKind::Order => "📦",
        NotificationKind::System => "ℹ",
    }
}
