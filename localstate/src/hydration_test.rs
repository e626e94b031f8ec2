use super::*;

#[test]
fn guard_starts_uninitialized() {
    let guard = HydrationGuard::new();
    assert_eq!(guard.phase(), HydrationPhase::Uninitialized);
    assert!(!guard.is_ready());
}

#[test]
fn guard_walks_phases_in_order() {
    let mut guard = HydrationGuard::new();
    assert!(guard.begin());
    assert_eq!(guard.phase(), HydrationPhase::Hydrating);
    guard.finish();
    assert_eq!(guard.phase(), HydrationPhase::Ready);
    assert!(guard.ensure_ready().is_ok());
}

#[test]
fn begin_only_once() {
    let mut guard = HydrationGuard::new();
    assert!(guard.begin());
    assert!(!guard.begin());
    guard.finish();
    assert!(!guard.begin());
    assert_eq!(guard.phase(), HydrationPhase::Ready);
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut guard = HydrationGuard::new();
    guard.finish();
    assert_eq!(guard.phase(), HydrationPhase::Uninitialized);
}

#[test]
fn ensure_ready_reports_current_phase() {
    let mut guard = HydrationGuard::new();
    assert!(matches!(
        guard.ensure_ready(),
        Err(StoreError::NotReady(HydrationPhase::Uninitialized))
    ));
    guard.begin();
    assert!(matches!(guard.ensure_ready(), Err(StoreError::NotReady(HydrationPhase::Hydrating))));
}
