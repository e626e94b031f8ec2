//! Notification feed with locally persisted dismissals.
//!
//! Notifications themselves come from the feed; only the set of dismissed
//! ids is stored, under [`STORAGE_KEY`].

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::store::Reducer;

pub const STORAGE_KEY: &str = "dismissed_notifications_v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Mention,
    Answer,
    Reaction,
    Order,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub text: String,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DismissedNotifications {
    pub ids: BTreeSet<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationAction {
    Dismiss(String),
    DismissAll(Vec<String>),
    Restore(String),
}

impl Reducer for DismissedNotifications {
    type Action = NotificationAction;

    fn reduce(&self, action: NotificationAction) -> Option<Self> {
        let mut next = self.clone();
        let changed = match action {
            NotificationAction::Dismiss(id) => next.ids.insert(id),
            NotificationAction::DismissAll(ids) => {
                let before = next.ids.len();
                next.ids.extend(ids);
                next.ids.len() != before
            }
            NotificationAction::Restore(id) => next.ids.remove(&id),
        };
        changed.then_some(next)
    }
}

/// Starter feed shown until a real feed is wired in.
#[must_use]
pub fn notifications_seed() -> Vec<Notification> {
    let n = |id: &str, kind, text: &str, created_at: &str| Notification {
        id: id.to_owned(),
        kind,
        text: text.to_owned(),
        created_at: created_at.to_owned(),
    };
    vec![
        n("n1", NotificationKind::Answer, "Ana answered your question about lifetimes", "2024-05-01T11:00:00Z"),
        n("n2", NotificationKind::Mention, "Ben mentioned you in \"Weekend hack night\"", "2024-05-01T09:30:00Z"),
        n("n3", NotificationKind::Reaction, "Your post got 12 new reactions", "2024-04-30T20:15:00Z"),
        n("n4", NotificationKind::Order, "Your marketplace order shipped", "2024-04-29T14:00:00Z"),
    ]
}

/// Notifications not yet dismissed, in feed order.
#[must_use]
pub fn visible_notifications(feed: &[Notification], dismissed: &DismissedNotifications) -> Vec<Notification> {
    feed.iter().filter(|n| !dismissed.ids.contains(&n.id)).cloned().collect()
}

#[must_use]
pub fn unread_count(feed: &[Notification], dismissed: &DismissedNotifications) -> usize {
    feed.iter().filter(|n| !dismissed.ids.contains(&n.id)).count()
}
