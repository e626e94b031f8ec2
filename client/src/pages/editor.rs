//! Embedded code editor page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server resolves a project id to the editor URL for its workspace
//! folder (`GET /api/editor`). The page only validates input and frames the
//! returned URL.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use leptos::prelude::*;

use crate::net::types::{EditorLink, is_valid_project_id};

const DEFAULT_PROJECT: &str = "playground";

#[component]
pub fn EditorPage() -> impl IntoView {
    let project = RwSignal::new(DEFAULT_PROJECT.to_owned());
    let link = RwSignal::new(None::<EditorLink>);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_open = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let project_value = match validate_project_input(&project.get()) {
            Ok(p) => p,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(format!("Opening {project_value}..."));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_editor_link(&project_value).await {
                Ok(resolved) => {
                    info.set(String::new());
                    link.set(Some(resolved));
                }
                Err(e) => info.set(format!("Could not open editor: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="editor-page">
            <form class="editor-page__picker" on:submit=on_open>
                <label for="editor-project">"Project"</label>
                <input
                    id="editor-project"
                    prop:value=move || project.get()
                    on:input=move |ev| project.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || busy.get()>
                    "Open"
                </button>
                <span class="editor-page__info">{move || info.get()}</span>
            </form>
            {move || {
                link.get()
                    .map(|l| {
                        view! {
                            <iframe
                                class="editor-page__frame"
                                title=frame_title(&l.project)
                                src=l.url
                                allow="clipboard-read; clipboard-write"
                            ></iframe>
                        }
                    })
            }}
        </div>
    }
}

fn validate_project_input(raw: &str) -> Result<String, &'static str> {
    let project = raw.trim();
    if project.is_empty() {
        return Err("Enter a project id first.");
    }
    if !is_valid_project_id(project) {
        return Err("Use up to 64 letters, digits, '-' or '_'.");
    }
    Ok(project.to_owned())
}

fn frame_title(project: &str) -> String {
    format!("Editor: {project}")
}
