use super::*;

#[test]
fn bar_style_clamps_to_full_width() {
    assert_eq!(bar_style(42), "width: 42%");
    assert_eq!(bar_style(250), "width: 100%");
}

#[test]
fn option_class_marks_own_vote() {
    assert!(option_class(true).ends_with("--mine"));
    assert_eq!(option_class(false), "live-poll__option");
}

#[test]
fn total_label_pluralizes() {
    assert_eq!(total_label(0), "0 votes");
    assert_eq!(total_label(1), "1 vote");
    assert_eq!(total_label(12), "12 votes");
}
