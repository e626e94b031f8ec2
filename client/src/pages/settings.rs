//! Draft settings page.
//!
//! Every toggle is a `SettingKey`; the page iterates `SettingKey::ALL`, so a
//! new key shows up here once it has a section.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use localstate::settings::{SettingKey, Settings, SettingsAction};

use crate::state::persisted::Persisted;
use crate::util::dark_mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Notifications,
    Privacy,
    Editing,
    Appearance,
}

impl Section {
    const ALL: [Section; 4] = [Section::Notifications, Section::Privacy, Section::Editing, Section::Appearance];

    fn title(self) -> &'static str {
        match self {
            Section::Notifications => "Notifications",
            Section::Privacy => "Privacy",
            Section::Editing => "Editing",
            Section::Appearance => "Appearance",
        }
    }
}

fn section_for(key: SettingKey) -> Section {
    match key {
        SettingKey::EmailNotifications | SettingKey::PushNotifications => Section::Notifications,
        SettingKey::PublicProfile | SettingKey::ShowOnlineStatus => Section::Privacy,
        SettingKey::AutosaveDrafts => Section::Editing,
        SettingKey::CompactMode | SettingKey::DarkMode => Section::Appearance,
    }
}

fn field_id(key: SettingKey) -> String {
    format!("setting-{}", key.label().to_ascii_lowercase().replace(' ', "-"))
}

/// `for` of the label and `id` of the checkbox it labels.
fn toggle_ids(key: SettingKey) -> (String, String) {
    let id = field_id(key);
    (id.clone(), id)
}

fn changed_summary(changed: usize) -> String {
    match changed {
        0 => "Using defaults".to_owned(),
        1 => "1 setting changed".to_owned(),
        n => format!("{n} settings changed"),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = expect_context::<Persisted<Settings>>();

    let on_match_system = move |_| {
        settings.dispatch(SettingsAction::Set(SettingKey::DarkMode, dark_mode::system_prefers_dark()));
    };
    let on_reset = move |_| {
        settings.dispatch(SettingsAction::Reset);
    };

    view! {
        <div class="settings-page">
            <header class="settings-page__header">
                <h1>"Settings"</h1>
                <span class="settings-page__summary">
                    {move || settings.with(|s| changed_summary(s.changed_keys().len()))}
                </span>
            </header>

            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <fieldset class="settings-page__section">
                            <legend>{section.title()}</legend>
                            {SettingKey::ALL
                                .into_iter()
                                .filter(|key| section_for(*key) == section)
                                .map(|key| {
                                    let (label_for, id) = toggle_ids(key);
                                    view! {
                                        <label class="settings-page__toggle" for=label_for>
                                            <input
                                                id=id
                                                type="checkbox"
                                                disabled=move || !settings.is_ready()
                                                prop:checked=move || settings.with(|s| s.get(key))
                                                on:change=move |_| {
                                                    settings.dispatch(SettingsAction::Toggle(key));
                                                }
                                            />
                                            {key.label()}
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </fieldset>
                    }
                })
                .collect_view()}

            <footer class="settings-page__footer">
                <button class="btn" on:click=on_match_system disabled=move || !settings.is_ready()>
                    "Match system theme"
                </button>
                <button class="btn" on:click=on_reset disabled=move || settings.with(|s| s.changed_keys().is_empty())>
                    "Reset to defaults"
                </button>
            </footer>
        </div>
    }
}
