//! Personal to-do list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tasks persist under `personal_todo_tasks_v1` through the shared
//! `Persisted<TodoList>` handle. The active filter is view-only state in
//! `UiState` and is not persisted.

#[cfg(test)]
#[path = "todo_test.rs"]
mod todo_test;

use leptos::prelude::*;
use localstate::todo::{TaskFilter, TodoAction, TodoList, filter_tasks, task_counts};

use crate::state::persisted::Persisted;
use crate::state::ui::UiState;
use crate::util::clock;

#[component]
pub fn TodoPage() -> impl IntoView {
    let todo = expect_context::<Persisted<TodoList>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let draft = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<(u64, String)>);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(title) = validate_title(&draft.get()) else {
            return;
        };
        if todo.dispatch(TodoAction::Add { title, created_at: clock::now() }) {
            draft.set(String::new());
        }
    };

    let commit_edit = move || {
        if let Some((id, title)) = editing.get_untracked() {
            if let Some(title) = validate_title(&title) {
                todo.dispatch(TodoAction::Rename { id, title });
            }
        }
        editing.set(None);
    };

    let visible = move || {
        let filter = ui.get().todo_filter;
        todo.with(|list| filter_tasks(&list.tasks, filter))
    };
    let counts = move || todo.with(|list| task_counts(&list.tasks));

    view! {
        <div class="todo-page">
            <header class="todo-page__header">
                <h1>"To-do"</h1>
                <Show when=move || !todo.is_ready()>
                    <span class="todo-page__loading">"Loading saved tasks..."</span>
                </Show>
            </header>

            <form class="todo-page__add" on:submit=on_add>
                <input
                    class="todo-page__input"
                    placeholder="What needs doing?"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || !todo.is_ready()>
                    "Add"
                </button>
            </form>

            <div class="todo-page__filters">
                {TaskFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <button
                                class=move || filter_button_class(ui.get().todo_filter == filter)
                                on:click=move |_| ui.update(|u| u.todo_filter = filter)
                            >
                                {filter_label(filter)}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <ul class="todo-page__list">
                {move || {
                    visible()
                        .into_iter()
                        .map(|task| {
                            let id = task.id;
                            let completed = task.completed;
                            let title = task.title;
                            let is_editing = move || editing.get().is_some_and(|(eid, _)| eid == id);
                            view! {
                                <li class=task_class(completed)>
                                    <input
                                        type="checkbox"
                                        prop:checked=completed
                                        on:change=move |_| {
                                            todo.dispatch(TodoAction::Toggle(id));
                                        }
                                    />
                                    <Show
                                        when=is_editing
                                        fallback=move || {
                                            let title = title.clone();
                                            let seed = title.clone();
                                            view! {
                                                <span
                                                    class="todo-page__title"
                                                    on:dblclick=move |_| editing.set(Some((id, seed.clone())))
                                                >
                                                    {title}
                                                </span>
                                            }
                                        }
                                    >
                                        <input
                                            class="todo-page__rename"
                                            prop:value=move || editing.get().map(|(_, t)| t).unwrap_or_default()
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                editing.update(|e| {
                                                    if let Some((_, t)) = e {
                                                        *t = value;
                                                    }
                                                });
                                            }
                                            on:blur=move |_| commit_edit()
                                            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                                match ev.key().as_str() {
                                                    "Enter" => commit_edit(),
                                                    "Escape" => editing.set(None),
                                                    _ => {}
                                                }
                                            }
                                        />
                                    </Show>
                                    <button
                                        class="btn todo-page__remove"
                                        title="Remove task"
                                        on:click=move |_| {
                                            todo.dispatch(TodoAction::Remove(id));
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

            <footer class="todo-page__footer">
                <span>{move || remaining_label(counts().active)}</span>
                <button
                    class="btn"
                    disabled=move || counts().completed == 0
                    on:click=move |_| {
                        todo.dispatch(TodoAction::ClearCompleted);
                    }
                >
                    "Clear completed"
                </button>
            </footer>
        </div>
    }
}

/// Trimmed title, or `None` when nothing but whitespace was typed.
fn validate_title(raw: &str) -> Option<String> {
    let title = raw.trim();
    (!title.is_empty()).then(|| title.to_owned())
}

fn filter_label(filter: TaskFilter) -> &'static str {
    match filter {
        TaskFilter::All => "All",
        TaskFilter::Active => "Active",
        TaskFilter::Completed => "Completed",
    }
}

fn filter_button_class(selected: bool) -> &'static str {
    if selected { "btn todo-page__filter todo-page__filter--selected" } else { "btn todo-page__filter" }
}

fn task_class(completed: bool) -> &'static str {
    if completed { "todo-page__task todo-page__task--done" } else { "todo-page__task" }
}

fn remaining_label(active: usize) -> String {
    if active == 1 { "1 task left".to_owned() } else { format!("{active} tasks left") }
}
