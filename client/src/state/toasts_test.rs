use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut toasts = ToastState::default();
    let a = toasts.success("saved");
    let b = toasts.error("failed");
    assert!(b > a);
    assert_eq!(toasts.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_that_toast() {
    let mut toasts = ToastState::default();
    let a = toasts.success("one");
    toasts.success("two");
    toasts.dismiss(a);
    assert_eq!(toasts.toasts.len(), 1);
    assert_eq!(toasts.toasts[0].message, "two");
}

#[test]
fn oldest_toast_is_dropped_past_capacity() {
    let mut toasts = ToastState::default();
    for n in 0..=ToastState::MAX_VISIBLE {
        toasts.success(format!("toast {n}"));
    }
    assert_eq!(toasts.toasts.len(), ToastState::MAX_VISIBLE);
    assert_eq!(toasts.toasts[0].message, "toast 1");
}
