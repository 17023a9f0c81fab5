//! Dashboard view state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Tracks the course whose "Continue" action is in flight.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub starting_course: Option<u32>,
}

impl DashboardState {
    /// Start opening `course_id`. Returns `false` while another course is opening.
    pub fn begin_course(&mut self, course_id: u32) -> bool {
        if self.starting_course.is_some() {
            return false;
        }
        self.starting_course = Some(course_id);
        true
    }

    pub fn finish_course(&mut self) {
        self.starting_course = None;
    }

    pub fn is_starting(&self, course_id: u32) -> bool {
        self.starting_course == Some(course_id)
    }
}
