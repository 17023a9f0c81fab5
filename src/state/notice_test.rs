use super::*;

#[test]
fn notice_state_default_is_empty() {
    assert!(NoticeState::default().items.is_empty());
}

#[test]
fn push_assigns_increasing_ids_in_order() {
    let mut notices = NoticeState::default();
    let a = notices.info("Downloading Gradient Button Pack...");
    let b = notices.success("Gradient Button Pack downloaded successfully!");
    assert!(b > a);
    let kinds: Vec<NoticeKind> = notices.items.iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NoticeKind::Info, NoticeKind::Success]);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut notices = NoticeState::default();
    let a = notices.info("a");
    let b = notices.error("b");
    notices.dismiss(a);
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].id, b);
    notices.dismiss(999);
    assert_eq!(notices.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut notices = NoticeState::default();
    let a = notices.info("a");
    notices.dismiss(a);
    let b = notices.info("b");
    assert_ne!(a, b);
}
