use super::*;

#[test]
fn dashboard_default_has_no_pending_course() {
    assert_eq!(DashboardState::default().starting_course, None);
}

#[test]
fn only_one_course_starts_at_a_time() {
    let mut state = DashboardState::default();
    assert!(state.begin_course(2));
    assert!(!state.begin_course(3));
    assert!(state.is_starting(2));
    assert!(!state.is_starting(3));
    state.finish_course();
    assert!(state.begin_course(3));
}
