use super::*;

#[test]
fn badge_hidden_when_nothing_unread() {
    assert_eq!(badge_label(0), None);
}

#[test]
fn badge_shows_small_counts_verbatim() {
    assert_eq!(badge_label(1).as_deref(), Some("1"));
    assert_eq!(badge_label(9).as_deref(), Some("9"));
}

#[test]
fn badge_caps_large_counts() {
    assert_eq!(badge_label(10).as_deref(), Some("9+"));
}

#[test]
fn links_have_unique_routes() {
    let mut hrefs: Vec<&str> = LINKS.iter().map(|(href, _)| *href).collect();
    hrefs.sort_unstable();
    hrefs.dedup();
    assert_eq!(hrefs.len(), LINKS.len());
}
