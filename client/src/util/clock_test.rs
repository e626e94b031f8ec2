use super::*;

#[test]
fn new_id_is_prefixed_and_unique() {
    let a = new_id("msg");
    let b = new_id("msg");
    assert!(a.starts_with("msg-"));
    assert_ne!(a, b);
}

#[test]
fn now_parses_back() {
    assert!(localstate::timestamp::parse(&now()).is_some());
}
