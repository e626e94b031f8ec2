use super::*;

#[test]
fn dismiss_hides_notification() {
    let feed = notifications_seed();
    let dismissed = DismissedNotifications::default()
        .reduce(NotificationAction::Dismiss("n2".to_owned()))
        .expect("dismissed");

    let visible = visible_notifications(&feed, &dismissed);
    assert_eq!(visible.len(), feed.len() - 1);
    assert!(visible.iter().all(|n| n.id != "n2"));
    assert_eq!(unread_count(&feed, &dismissed), feed.len() - 1);
}

#[test]
fn dismissing_twice_is_rejected() {
    let once = DismissedNotifications::default()
        .reduce(NotificationAction::Dismiss("n1".to_owned()))
        .expect("dismissed");
    assert!(once.reduce(NotificationAction::Dismiss("n1".to_owned())).is_none());
}

#[test]
fn dismiss_all_then_restore_one() {
    let feed = notifications_seed();
    let ids = feed.iter().map(|n| n.id.clone()).collect();
    let all = DismissedNotifications::default()
        .reduce(NotificationAction::DismissAll(ids))
        .expect("dismissed");
    assert_eq!(unread_count(&feed, &all), 0);

    let restored = all.reduce(NotificationAction::Restore("n3".to_owned())).expect("restored");
    let visible = visible_notifications(&feed, &restored);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "n3");
}

#[test]
fn restore_unknown_is_rejected() {
    assert!(
        DismissedNotifications::default()
            .reduce(NotificationAction::Restore("n1".to_owned()))
            .is_none()
    );
}

#[test]
fn dismissed_set_serializes_as_array() {
    let mut dismissed = DismissedNotifications::default();
    dismissed.ids.insert("n2".to_owned());
    dismissed.ids.insert("n1".to_owned());
    assert_eq!(serde_json::to_value(&dismissed).expect("json"), serde_json::json!(["n1", "n2"]));
}
