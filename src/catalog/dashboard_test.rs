use super::*;

#[test]
fn courses_have_consistent_progress() {
    for course in COURSES {
        assert!(course.progress <= 100, "{} progress out of range", course.title);
        assert!(course.completed <= course.lessons, "{} over-completed", course.title);
    }
}

#[test]
fn find_course_by_id() {
    assert_eq!(find_course(4).map(|c| c.title), Some("CSS Magic"));
    assert!(find_course(0).is_none());
}

#[test]
fn course_start_message_names_the_course() {
    let course = find_course(1).expect("course 1");
    assert_eq!(course_start_message(course), "Starting JavaScript Fundamentals...");
}

#[test]
fn half_of_achievements_are_unlocked() {
    let unlocked: Vec<&str> = ACHIEVEMENTS.iter().filter(|a| a.unlocked).map(|a| a.name).collect();
    assert_eq!(unlocked, vec!["First Code", "Debug Master", "Creative Coder"]);
}

#[test]
fn recent_project_status_labels() {
    assert_eq!(RECENT_PROJECTS[0].status_label(), "Completed");
    assert_eq!(RECENT_PROJECTS[1].status_label(), "In Progress");
}

#[test]
fn quick_action_ids_are_stable() {
    let ids: Vec<&str> = QUICK_ACTIONS.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec!["new-project", "ai-helper", "browse-templates"]);
}
