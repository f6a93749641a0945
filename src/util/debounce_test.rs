use super::*;

#[test]
fn cancel_token_starts_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn cancel_token_clones_share_state() {
    let token = CancelToken::new();
    let clone = token.clone();
    clone.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn restart_cancels_previous_wait() {
    let mut debouncer = Debouncer::default();
    let first = debouncer.restart();
    let second = debouncer.restart();
    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
    assert!(debouncer.is_pending());
}

#[test]
fn cancel_clears_pending_wait() {
    let mut debouncer = Debouncer::default();
    let token = debouncer.restart();
    debouncer.cancel();
    assert!(token.is_cancelled());
    assert!(!debouncer.is_pending());
}

#[test]
fn cancel_without_pending_is_noop() {
    let mut debouncer = Debouncer::default();
    debouncer.cancel();
    assert!(!debouncer.is_pending());
}
