use super::*;

#[test]
fn every_section_has_at_least_one_key() {
    for section in Section::ALL {
        assert!(SettingKey::ALL.into_iter().any(|k| section_for(k) == section), "{}", section.title());
    }
}

#[test]
fn field_ids_are_unique_slugs() {
    let mut ids: Vec<String> = SettingKey::ALL.into_iter().map(field_id).collect();
    assert!(ids.iter().all(|id| !id.contains(' ')));
    assert_eq!(field_id(SettingKey::DarkMode), "setting-dark-mode");
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), SettingKey::ALL.len());
}

#[test]
fn changed_summary_pluralizes() {
    assert_eq!(changed_summary(0), "Using defaults");
    assert_eq!(changed_summary(1), "1 setting changed");
    assert_eq!(changed_summary(3), "3 settings changed");
}

#[test]
fn toggle_label_points_at_its_checkbox() {
    for key in SettingKey::ALL {
        let (label_for, input_id) = toggle_ids(key);
        assert_eq!(label_for, input_id);
        assert_eq!(input_id, field_id(key));
    }
}
