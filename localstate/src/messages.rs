//! Direct messaging between community members.
//!
//! INVARIANTS
//! ==========
//! - Every `Message::conversation_id` names an existing conversation.
//! - `Conversation::last_message_at` equals the `created_at` of the newest
//!   message in that conversation. `Send` updates both in one transition.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::store::Reducer;
use crate::timestamp;

pub const STORAGE_KEY: &str = "messages_state_v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<String>,
    pub last_message_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesState {
    pub conversations: Vec<Conversation>,
    pub messages: Vec<Message>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessagesAction {
    Send { id: String, conversation_id: String, sender_id: String, content: String, created_at: String },
    /// Start a conversation with `participants` unless `id` already exists.
    Open { id: String, participants: Vec<String> },
}

impl MessagesState {
    #[must_use]
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }
}

impl Reducer for MessagesState {
    type Action = MessagesAction;

    fn reduce(&self, action: MessagesAction) -> Option<Self> {
        match action {
            MessagesAction::Send { id, conversation_id, sender_id, content, created_at } => {
                let content = content.trim();
                if content.is_empty() {
                    return None;
                }
                let idx = self.conversations.iter().position(|c| c.id == conversation_id)?;
                let mut next = self.clone();
                next.conversations[idx].last_message_at = Some(created_at.clone());
                next.messages.push(Message {
                    id,
                    conversation_id,
                    sender_id,
                    content: content.to_owned(),
                    created_at,
                });
                Some(next)
            }
            MessagesAction::Open { id, participants } => {
                if self.conversation(&id).is_some() || participants.is_empty() {
                    return None;
                }
                let mut next = self.clone();
                next.conversations.push(Conversation { id, participants, last_message_at: None });
                Some(next)
            }
        }
    }
}

/// Starter conversations for a fresh client.
#[must_use]
pub fn messages_seed(me: &str) -> MessagesState {
    let message = |id: &str, conversation_id: &str, sender_id: &str, content: &str, created_at: &str| Message {
        id: id.to_owned(),
        conversation_id: conversation_id.to_owned(),
        sender_id: sender_id.to_owned(),
        content: content.to_owned(),
        created_at: created_at.to_owned(),
    };

    MessagesState {
        conversations: vec![
            Conversation {
                id: "cv1".to_owned(),
                participants: vec![me.to_owned(), "u-ana".to_owned()],
                last_message_at: Some("2024-05-01T10:05:00Z".to_owned()),
            },
            Conversation {
                id: "cv2".to_owned(),
                participants: vec![me.to_owned(), "u-ben".to_owned()],
                last_message_at: Some("2024-04-28T18:30:00Z".to_owned()),
            },
        ],
        messages: vec![
            message("m1", "cv1", "u-ana", "Is the standing desk still for sale?", "2024-05-01T10:00:00Z"),
            message("m2", "cv1", me, "Yes, pickup only.", "2024-05-01T10:05:00Z"),
            message("m3", "cv2", "u-ben", "Thanks for the answer on the borrow checker thread!", "2024-04-28T18:30:00Z"),
        ],
    }
}

// =============================================================================
// VIEWS
// =============================================================================

/// Messages grouped by conversation, in send order. Every known conversation
/// has an entry, possibly empty.
#[must_use]
pub fn messages_by_conversation(state: &MessagesState) -> BTreeMap<String, Vec<Message>> {
    let mut out: BTreeMap<String, Vec<Message>> =
        state.conversations.iter().map(|c| (c.id.clone(), Vec::new())).collect();
    for message in &state.messages {
        out.entry(message.conversation_id.clone()).or_default().push(message.clone());
    }
    out
}

/// Conversations newest first; never-used conversations last, then by id.
#[must_use]
pub fn conversations_by_recency(state: &MessagesState) -> Vec<Conversation> {
    let mut out = state.conversations.clone();
    out.sort_by(|a, b| match (&a.last_message_at, &b.last_message_at) {
        (Some(x), Some(y)) => timestamp::compare(y, x).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    });
    out
}

#[must_use]
pub fn last_message<'a>(state: &'a MessagesState, conversation_id: &str) -> Option<&'a Message> {
    state.messages.iter().rev().find(|m| m.conversation_id == conversation_id)
}

/// The participant that is not `me`, for conversation list labels.
#[must_use]
pub fn counterpart<'a>(conversation: &'a Conversation, me: &str) -> Option<&'a str> {
    conversation.participants.iter().map(String::as_str).find(|p| *p != me)
}
