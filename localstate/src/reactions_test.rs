use super::*;

fn toggle(emoji: &str) -> ReactionAction {
    ReactionAction::Toggle(emoji.to_owned())
}

#[test]
fn toggle_adds_then_withdraws() {
    let once = Reactions::default().reduce(toggle("🎉")).expect("added");
    assert_eq!(once.counts.get("🎉"), Some(&1));
    assert!(once.mine.contains("🎉"));

    let twice = once.reduce(toggle("🎉")).expect("withdrawn");
    assert_eq!(twice, Reactions::default());
}

#[test]
fn withdraw_keeps_other_users_counts() {
    let mut state = Reactions::default();
    state.counts.insert("👍".to_owned(), 4);
    let added = state.reduce(toggle("👍")).expect("added");
    assert_eq!(added.counts["👍"], 5);
    let removed = added.reduce(toggle("👍")).expect("withdrawn");
    assert_eq!(removed.counts["👍"], 4);
}

#[test]
fn blank_emoji_is_rejected() {
    assert!(Reactions::default().reduce(toggle(" ")).is_none());
}

#[test]
fn ranked_orders_by_count_then_emoji() {
    let mut state = Reactions::default();
    state.counts.insert("b".to_owned(), 2);
    state.counts.insert("a".to_owned(), 2);
    state.counts.insert("c".to_owned(), 5);
    state.counts.insert("z".to_owned(), 0);
    state.mine.insert("a".to_owned());

    let view = ranked(&state);
    let order: Vec<&str> = view.iter().map(|r| r.emoji.as_str()).collect();
    assert_eq!(order, vec!["c", "a", "b"]);
    assert!(view[1].mine);
    assert_eq!(total(&state), 9);
}
