use super::*;

#[test]
fn set_then_get_for_every_key() {
    for key in SettingKey::ALL {
        let mut settings = Settings::default();
        settings.set(key, true);
        assert!(settings.get(key), "{key:?}");
        settings.set(key, false);
        assert!(!settings.get(key), "{key:?}");
    }
}

#[test]
fn keys_have_distinct_labels() {
    let mut labels: Vec<&str> = SettingKey::ALL.iter().map(|k| k.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), SettingKey::ALL.len());
}

#[test]
fn toggle_flips_single_key() {
    let settings = Settings::default();
    let next = settings.reduce(SettingsAction::Toggle(SettingKey::CompactMode)).expect("changed");
    assert!(next.compact_mode);
    assert_eq!(next.changed_keys(), vec![SettingKey::CompactMode]);
}

#[test]
fn set_to_same_value_is_rejected() {
    let settings = Settings::default();
    assert!(settings.reduce(SettingsAction::Set(SettingKey::PublicProfile, true)).is_none());
}

#[test]
fn reset_restores_defaults() {
    let mut settings = Settings::default();
    settings.set(SettingKey::DarkMode, true);
    let next = settings.reduce(SettingsAction::Reset).expect("reset");
    assert_eq!(next, Settings::default());
    assert!(next.reduce(SettingsAction::Reset).is_none());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed: Settings = serde_json::from_str(r#"{"darkMode":true}"#).expect("parse");
    assert!(parsed.dark_mode);
    assert_eq!(parsed.email_notifications, Settings::default().email_notifications);
}
