use super::*;
use crate::backend::{MemoryBackend, UnavailableBackend};
use crate::messages::{self, MessagesAction, MessagesState};
use crate::todo::{self, TaskFilter, TodoAction, TodoList};

const TS: &str = "2024-05-01T09:00:00Z";

/// Backend whose reads throw, as `localStorage` does under some privacy modes.
#[derive(Clone, Default)]
struct ThrowingReads {
    inner: MemoryBackend,
}

impl StorageBackend for ThrowingReads {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Backend("SecurityError: access denied".to_owned()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.inner.remove_item(key)
    }
}

fn add(title: &str) -> TodoAction {
    TodoAction::Add { title: title.to_owned(), created_at: TS.to_owned() }
}

// =============================================================
// Hydration gating
// =============================================================

#[test]
fn dispatch_before_hydrate_is_refused() {
    let backend = MemoryBackend::new();
    let mut store = PersistedStore::new(todo::STORAGE_KEY, TodoList::default(), backend.clone());
    let err = store.dispatch(add("early")).expect_err("not ready");
    assert!(matches!(err, StoreError::NotReady(HydrationPhase::Uninitialized)));
    assert!(backend.is_empty());
    assert!(store.state().tasks.is_empty());
}

#[test]
fn clear_and_replace_before_hydrate_are_refused() {
    let mut store = PersistedStore::new("k", 1_u32, MemoryBackend::new());
    assert!(store.clear().is_err());
    assert!(store.replace(2).is_err());
    assert_eq!(*store.state(), 1);
}

#[test]
fn hydrate_loads_persisted_state_instead_of_default() {
    let backend = MemoryBackend::new();
    {
        let mut first = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), backend.clone());
        first.dispatch(add("Buy milk")).expect("ready");
    }
    let second = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), backend);
    assert_eq!(second.state().tasks.len(), 1);
    assert_eq!(second.state().tasks[0].title, "Buy milk");
}

#[test]
fn hydrate_twice_does_not_reload() {
    let backend = MemoryBackend::new();
    let mut store = PersistedStore::open("k", 0_u32, backend.clone());
    backend.set_item("k", "5").expect("seed");
    store.hydrate();
    assert_eq!(*store.state(), 0);
}

#[test]
fn unavailable_storage_is_ready_with_default() {
    let mut store = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), UnavailableBackend);
    assert_eq!(store.phase(), HydrationPhase::Ready);
    assert!(store.dispatch(add("offline")).expect("ready"));
    assert_eq!(store.state().tasks.len(), 1);
}

#[test]
fn throwing_reads_initialize_with_default() {
    let store = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), ThrowingReads::default());
    assert!(store.is_ready());
    assert_eq!(*store.state(), TodoList::default());
}

#[test]
fn corrupt_payload_initializes_with_default() {
    let backend = MemoryBackend::new();
    backend.set_item(todo::STORAGE_KEY, "[{\"id\":").expect("seed");
    let store = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), backend);
    assert!(store.state().tasks.is_empty());
}

// =============================================================
// Optimistic mutation
// =============================================================

#[test]
fn dispatch_writes_every_accepted_mutation() {
    let backend = MemoryBackend::new();
    let mut store = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), backend.clone());

    assert!(store.dispatch(add("a")).expect("ready"));
    assert!(store.dispatch(add("b")).expect("ready"));
    let stored: TodoList = serde_json::from_str(&backend.raw(todo::STORAGE_KEY).expect("written")).expect("json");
    assert_eq!(&stored, store.state());
}

#[test]
fn rejected_action_skips_write() {
    let backend = MemoryBackend::new();
    let mut store = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), backend.clone());
    assert!(!store.dispatch(TodoAction::Toggle(1)).expect("ready"));
    assert!(backend.raw(todo::STORAGE_KEY).is_none());
}

#[test]
fn failed_write_keeps_in_memory_state() {
    let backend = MemoryBackend::with_quota(8);
    let mut store = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), backend.clone());
    assert!(store.dispatch(add("a task that will never fit")).expect("ready"));
    assert_eq!(store.state().tasks.len(), 1);
    assert!(backend.raw(todo::STORAGE_KEY).is_none());
}

#[test]
fn write_then_read_returns_equal_task_list() {
    let backend = MemoryBackend::new();
    let mut store = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), backend.clone());
    for title in ["a", "b", "c"] {
        store.dispatch(add(title)).expect("ready");
    }
    store.dispatch(TodoAction::Toggle(2)).expect("ready");

    let loaded = store.adapter().read(todo::STORAGE_KEY, TodoList::default());
    assert_eq!(&loaded, store.state());
}

#[test]
fn clear_removes_key_and_resets() {
    let backend = MemoryBackend::new();
    let mut store = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), backend.clone());
    store.dispatch(add("a")).expect("ready");
    store.clear().expect("ready");
    assert!(store.state().tasks.is_empty());
    assert!(backend.raw(todo::STORAGE_KEY).is_none());
}

#[test]
fn replace_persists_whole_state() {
    let backend = MemoryBackend::new();
    let mut store = PersistedStore::open("counter", 0_u32, backend.clone());
    store.replace(9).expect("ready");
    assert_eq!(backend.raw("counter"), Some("9".to_owned()));
    assert_eq!(store.key(), "counter");
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn todo_scenario() {
    let mut store = PersistedStore::open(todo::STORAGE_KEY, TodoList::default(), MemoryBackend::new());

    store.dispatch(add("Buy milk")).expect("ready");
    let tasks = &store.state().tasks;
    assert_eq!(tasks.len(), 1);
    assert_eq!((tasks[0].id, tasks[0].title.as_str(), tasks[0].completed), (1, "Buy milk", false));

    store.dispatch(TodoAction::Toggle(1)).expect("ready");
    assert!(store.state().tasks[0].completed);

    let completed = todo::filter_tasks(&store.state().tasks, TaskFilter::parse("completed").expect("filter"));
    assert_eq!(completed, store.state().tasks);

    store.dispatch(TodoAction::ClearCompleted).expect("ready");
    assert!(store.state().tasks.is_empty());
}

#[test]
fn messaging_scenario() {
    let me = "u-me";
    let mut store =
        PersistedStore::open(messages::STORAGE_KEY, messages::messages_seed(me), MemoryBackend::new());
    let before = messages::messages_by_conversation(store.state())["cv1"].len();

    let sent = store
        .dispatch(MessagesAction::Send {
            id: "m-new".to_owned(),
            conversation_id: "cv1".to_owned(),
            sender_id: me.to_owned(),
            content: "hello".to_owned(),
            created_at: "2024-05-02T12:00:00Z".to_owned(),
        })
        .expect("ready");
    assert!(sent);

    let state: &MessagesState = store.state();
    let grouped = messages::messages_by_conversation(state);
    assert_eq!(grouped["cv1"].len(), before + 1);
    let newest = grouped["cv1"].last().expect("message");
    assert_eq!(newest.sender_id, me);
    assert_eq!(newest.content, "hello");
    let cv1 = state.conversations.iter().find(|c| c.id == "cv1").expect("cv1");
    assert_eq!(cv1.last_message_at.as_deref(), Some(newest.created_at.as_str()));
}
