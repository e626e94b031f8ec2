use super::*;

#[test]
fn hidden_and_visible_partition_the_feed() {
    let feed = notifications_seed();
    let mut dismissed = DismissedNotifications::default();
    dismissed.ids.insert("n2".to_owned());
    dismissed.ids.insert("gone".to_owned());

    let hidden = hidden_notifications(&feed, &dismissed);
    let visible = visible_notifications(&feed, &dismissed);
    assert_eq!(hidden.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(), vec!["n2"]);
    assert_eq!(hidden.len() + visible.len(), feed.len());
}

#[test]
fn kind_slugs_are_distinct() {
    let kinds = [
        NotificationKind::Mention,
        NotificationKind::Answer,
        NotificationKind::Reaction,
        NotificationKind::Order,
        NotificationKind::System,
    ];
    let mut slugs: Vec<&str> = kinds.into_iter().map(kind_slug).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), kinds.len());
}
