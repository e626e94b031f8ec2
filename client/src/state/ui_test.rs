use super::*;

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn ui_state_defaults() {
    let state = UiState::default();
    assert_eq!(state.todo_filter, TaskFilter::All);
    assert!(state.active_conversation.is_none());
    assert!(!state.nav_expanded);
}

#[test]
fn resolve_conversation_prefers_selection() {
    let state = UiState { active_conversation: Some("cv2".to_owned()), ..UiState::default() };
    assert_eq!(state.resolve_conversation(&ids(&["cv1", "cv2"])), Some("cv2".to_owned()));
}

#[test]
fn resolve_conversation_falls_back_to_first() {
    let state = UiState { active_conversation: Some("gone".to_owned()), ..UiState::default() };
    assert_eq!(state.resolve_conversation(&ids(&["cv1", "cv2"])), Some("cv1".to_owned()));
    assert_eq!(UiState::default().resolve_conversation(&[]), None);
}
