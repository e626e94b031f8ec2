use super::*;

#[test]
fn picker_rows_keeps_ranked_first_then_unused_defaults() {
    let ranked = vec![RankedReaction { emoji: "🚀".to_owned(), count: 3, mine: true }];
    let rows = picker_rows(&ranked);
    assert_eq!(rows[0], ranked[0]);
    assert_eq!(rows.len(), DEFAULT_EMOJI.len());
    assert!(rows[1..].iter().all(|r| r.count == 0 && !r.mine));
}

#[test]
fn picker_rows_keeps_custom_emoji() {
    let ranked = vec![RankedReaction { emoji: "🦀".to_owned(), count: 1, mine: false }];
    assert_eq!(picker_rows(&ranked).len(), DEFAULT_EMOJI.len() + 1);
}

#[test]
fn total_label_pluralizes() {
    assert_eq!(total_label(0), "No reactions yet");
    assert_eq!(total_label(1), "1 reaction");
    assert_eq!(total_label(7), "7 reactions");
}
