use super::*;
use crate::util::format::extract_mentions;

#[test]
fn featured_post_mentions_known_members() {
    assert_eq!(extract_mentions(FEATURED_POST), vec!["ana".to_owned(), "ben".to_owned()]);
}
