//! Courses, achievements, and progress figures for the dashboard and profile menu.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
}

impl CourseLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub level: CourseLevel,
    pub icon: &'static str,
    pub lessons: u32,
    pub completed: u32,
}

pub const COURSES: &[Course] = &[
    Course {
        id: 1,
        title: "JavaScript Fundamentals",
        progress: 75,
        level: CourseLevel::Beginner,
        icon: "🚀",
        lessons: 12,
        completed: 9,
    },
    Course {
        id: 2,
        title: "React Adventures",
        progress: 45,
        level: CourseLevel::Intermediate,
        icon: "⚛️",
        lessons: 15,
        completed: 7,
    },
    Course {
        id: 3,
        title: "Python Playground",
        progress: 30,
        level: CourseLevel::Beginner,
        icon: "🐍",
        lessons: 18,
        completed: 5,
    },
    Course { id: 4, title: "CSS Magic", progress: 90, level: CourseLevel::Intermediate, icon: "🎨", lessons: 10, completed: 9 },
];

pub fn find_course(course_id: u32) -> Option<&'static Course> {
    COURSES.iter().find(|course| course.id == course_id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub name: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { name: "First Code", icon: "🎯", unlocked: true },
    Achievement { name: "Debug Master", icon: "🔧", unlocked: true },
    Achievement { name: "Creative Coder", icon: "🎨", unlocked: true },
    Achievement { name: "AI Assistant", icon: "🤖", unlocked: false },
    Achievement { name: "Project Master", icon: "🏆", unlocked: false },
    Achievement { name: "Code Warrior", icon: "⚔️", unlocked: false },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentProject {
    pub name: &'static str,
    pub tech: &'static str,
    pub completed: bool,
    pub when: &'static str,
}

impl RecentProject {
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "In Progress" }
    }
}

pub const RECENT_PROJECTS: &[RecentProject] = &[
    RecentProject { name: "Portfolio Website", tech: "React", completed: true, when: "2 days ago" },
    RecentProject { name: "Calculator App", tech: "JavaScript", completed: false, when: "1 day ago" },
    RecentProject { name: "Todo List", tech: "Python", completed: true, when: "1 week ago" },
];

/// Headline figures: `(label, value)`.
pub const DASHBOARD_STATS: &[(&str, &str)] =
    &[("Courses Active", "4"), ("Projects Built", "12"), ("Hours Coded", "48"), ("Achievements", "8")];

/// Figures shown in the profile menu: `(label, value)`.
pub const PROFILE_STATS: &[(&str, &str)] = &[("Courses Completed", "8"), ("Projects Built", "12"), ("Hours Coded", "48")];

pub const PROFILE_MENU_ITEMS: &[&str] = &["Edit Profile", "Settings", "My Courses", "Achievements"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickAction {
    pub id: &'static str,
    pub label: &'static str,
    pub notice: &'static str,
}

pub const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction { id: "new-project", label: "Start New Project", notice: "Opening project creator..." },
    QuickAction { id: "ai-helper", label: "Ask AI Helper", notice: "Starting AI assistant..." },
    QuickAction { id: "browse-templates", label: "Browse Templates", notice: "Opening template library..." },
];

/// Notice shown once a course finishes opening.
pub fn course_start_message(course: &Course) -> String {
    format!("Starting {}...", course.title)
}
