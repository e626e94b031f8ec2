//! Top navigation with the unread notification badge.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;
use localstate::notifications::{DismissedNotifications, notifications_seed, unread_count};

use crate::state::auth::AuthState;
use crate::state::persisted::Persisted;
use crate::state::ui::UiState;

const LINKS: [(&str, &str); 7] = [
    ("/", "Community"),
    ("/todo", "To-do"),
    ("/messages", "Messages"),
    ("/notifications", "Notifications"),
    ("/settings", "Settings"),
    ("/editor", "Editor"),
    ("/admin", "Admin"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let dismissed = expect_context::<Persisted<DismissedNotifications>>();

    let badge = move || dismissed.with(|d| badge_label(unread_count(&notifications_seed(), d)));
    let nav_class = move || if ui.get().nav_expanded { "nav nav--expanded" } else { "nav" };

    view! {
        <nav class=nav_class>
            <button
                class="btn nav__toggle"
                title="Toggle navigation"
                on:click=move |_| ui.update(|u| u.nav_expanded = !u.nav_expanded)
            >
                "☰"
            </button>
            <ul class="nav__links">
                {LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        let is_inbox = href == "/notifications";
                        view! {
                            <li>
                                <a href=href>{label}</a>
                                <Show when=move || is_inbox && badge().is_some()>
                                    <span class="nav__badge">{move || badge().unwrap_or_default()}</span>
                                </Show>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <span class="nav__self">{move || auth.get().user.name}</span>
        </nav>
    }
}

/// Badge text for `unread` notifications; `None` hides the badge.
fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        1..=9 => Some(unread.to_string()),
        _ => Some("9+".to_owned()),
    }
}
