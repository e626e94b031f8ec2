use super::*;

#[test]
fn log_refusal_passes_success_through() {
    assert_eq!(log_refusal::<bool>("k", Ok(true)), Some(true));
}

#[test]
fn log_refusal_swallows_not_ready() {
    let result: Result<bool, StoreError> = Err(StoreError::NotReady(HydrationPhase::Hydrating));
    assert_eq!(log_refusal("k", result), None);
}
