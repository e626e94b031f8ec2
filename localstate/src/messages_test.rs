use super::*;

const ME: &str = "u-me";

fn send(conversation_id: &str, content: &str, created_at: &str) -> MessagesAction {
    MessagesAction::Send {
        id: format!("m-{created_at}"),
        conversation_id: conversation_id.to_owned(),
        sender_id: ME.to_owned(),
        content: content.to_owned(),
        created_at: created_at.to_owned(),
    }
}

#[test]
fn seed_satisfies_last_message_invariant() {
    let state = messages_seed(ME);
    for conversation in &state.conversations {
        let last = last_message(&state, &conversation.id).map(|m| m.created_at.clone());
        assert_eq!(conversation.last_message_at, last, "conversation {}", conversation.id);
    }
    assert!(state.messages.iter().all(|m| state.conversation(&m.conversation_id).is_some()));
}

#[test]
fn send_appends_message_and_updates_last_message_at() {
    let state = messages_seed(ME);
    let before = messages_by_conversation(&state)["cv1"].len();

    let next = state.reduce(send("cv1", "hello", "2024-05-02T08:00:00Z")).expect("sent");

    let grouped = messages_by_conversation(&next);
    assert_eq!(grouped["cv1"].len(), before + 1);
    let newest = grouped["cv1"].last().expect("message");
    assert_eq!(newest.sender_id, ME);
    assert_eq!(newest.content, "hello");
    assert_eq!(
        next.conversation("cv1").and_then(|c| c.last_message_at.clone()),
        Some(newest.created_at.clone())
    );
    assert_eq!(next.conversation("cv2"), state.conversation("cv2"));
}

#[test]
fn send_to_unknown_conversation_is_rejected() {
    let state = messages_seed(ME);
    assert!(state.reduce(send("cv9", "hello", "2024-05-02T08:00:00Z")).is_none());
}

#[test]
fn send_blank_content_is_rejected() {
    let state = messages_seed(ME);
    assert!(state.reduce(send("cv1", " \n ", "2024-05-02T08:00:00Z")).is_none());
}

#[test]
fn open_adds_conversation_once() {
    let state = MessagesState::default();
    let open = MessagesAction::Open { id: "cv3".to_owned(), participants: vec![ME.to_owned(), "u-cy".to_owned()] };
    let next = state.reduce(open.clone()).expect("opened");
    assert_eq!(next.conversations.len(), 1);
    assert!(next.conversations[0].last_message_at.is_none());
    assert!(next.reduce(open).is_none());
}

#[test]
fn grouping_includes_empty_conversations() {
    let state = MessagesState::default()
        .reduce(MessagesAction::Open { id: "cv3".to_owned(), participants: vec![ME.to_owned()] })
        .expect("opened");
    let grouped = messages_by_conversation(&state);
    assert_eq!(grouped.get("cv3").map(Vec::len), Some(0));
}

#[test]
fn sending_moves_conversation_to_front() {
    let state = messages_seed(ME);
    let order: Vec<String> = conversations_by_recency(&state).into_iter().map(|c| c.id).collect();
    assert_eq!(order, vec!["cv1", "cv2"]);

    let next = state.reduce(send("cv2", "ping", "2024-05-03T00:00:00Z")).expect("sent");
    let order: Vec<String> = conversations_by_recency(&next).into_iter().map(|c| c.id).collect();
    assert_eq!(order, vec!["cv2", "cv1"]);
}

#[test]
fn counterpart_skips_me() {
    let state = messages_seed(ME);
    let cv1 = state.conversation("cv1").expect("cv1");
    assert_eq!(counterpart(cv1, ME), Some("u-ana"));
}

#[test]
fn views_are_value_equal_on_repeat() {
    let state = messages_seed(ME);
    assert_eq!(messages_by_conversation(&state), messages_by_conversation(&state));
    assert_eq!(conversations_by_recency(&state), conversations_by_recency(&state));
}
