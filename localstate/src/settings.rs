//! Draft account settings.
//!
//! DESIGN
//! ======
//! Settings are a fixed record, not a string-keyed bag: [`SettingKey`] lists
//! every toggle and `get`/`set` match on it exhaustively, so adding a key
//! fails to compile until every site handles it.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use crate::store::Reducer;

pub const STORAGE_KEY: &str = "draft_settings_v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    EmailNotifications,
    PushNotifications,
    PublicProfile,
    ShowOnlineStatus,
    AutosaveDrafts,
    CompactMode,
    DarkMode,
}

impl SettingKey {
    pub const ALL: [SettingKey; 7] = [
        SettingKey::EmailNotifications,
        SettingKey::PushNotifications,
        SettingKey::PublicProfile,
        SettingKey::ShowOnlineStatus,
        SettingKey::AutosaveDrafts,
        SettingKey::CompactMode,
        SettingKey::DarkMode,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EmailNotifications => "Email notifications",
            Self::PushNotifications => "Push notifications",
            Self::PublicProfile => "Public profile",
            Self::ShowOnlineStatus => "Show online status",
            Self::AutosaveDrafts => "Autosave drafts",
            Self::CompactMode => "Compact layout",
            Self::DarkMode => "Dark mode",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub public_profile: bool,
    pub show_online_status: bool,
    pub autosave_drafts: bool,
    pub compact_mode: bool,
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            public_profile: true,
            show_online_status: true,
            autosave_drafts: true,
            compact_mode: false,
            dark_mode: false,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::EmailNotifications => self.email_notifications,
            SettingKey::PushNotifications => self.push_notifications,
            SettingKey::PublicProfile => self.public_profile,
            SettingKey::ShowOnlineStatus => self.show_online_status,
            SettingKey::AutosaveDrafts => self.autosave_drafts,
            SettingKey::CompactMode => self.compact_mode,
            SettingKey::DarkMode => self.dark_mode,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: bool) {
        let slot = match key {
            SettingKey::EmailNotifications => &mut self.email_notifications,
            SettingKey::PushNotifications => &mut self.push_notifications,
            SettingKey::PublicProfile => &mut self.public_profile,
            SettingKey::ShowOnlineStatus => &mut self.show_online_status,
            SettingKey::AutosaveDrafts => &mut self.autosave_drafts,
            SettingKey::CompactMode => &mut self.compact_mode,
            SettingKey::DarkMode => &mut self.dark_mode,
        };
        *slot = value;
    }

    /// Keys whose value differs from the defaults.
    #[must_use]
    pub fn changed_keys(&self) -> Vec<SettingKey> {
        let defaults = Self::default();
        SettingKey::ALL.into_iter().filter(|k| self.get(*k) != defaults.get(*k)).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    Toggle(SettingKey),
    Set(SettingKey, bool),
    Reset,
}

impl Reducer for Settings {
    type Action = SettingsAction;

    fn reduce(&self, action: SettingsAction) -> Option<Self> {
        let mut next = *self;
        match action {
            SettingsAction::Toggle(key) => next.set(key, !self.get(key)),
            SettingsAction::Set(key, value) => next.set(key, value),
            SettingsAction::Reset => next = Self::default(),
        }
        (next != *self).then_some(next)
    }
}
