//! Student dashboard: progress, courses, achievements, and shortcuts.

use leptos::prelude::*;

use crate::catalog::dashboard::{ACHIEVEMENTS, COURSES, CourseLevel, DASHBOARD_STATS, QUICK_ACTIONS, RECENT_PROJECTS};
use crate::config::ClientConfig;
use crate::state::dashboard::DashboardState;
use crate::state::notice::NoticeState;
use crate::state::session::SessionStore;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let dashboard = RwSignal::new(DashboardState::default());
    let notices = expect_context::<RwSignal<NoticeState>>();
    let wait_ms = expect_context::<ClientConfig>().delays.course_start_ms;

    let first_name = move || {
        session.with(|s| s.identity().map_or_else(|| "Student".to_owned(), |i| i.first_name().to_owned()))
    };

    let continue_course = move |course_id: u32| {
        if !dashboard.try_update(|d| d.begin_course(course_id)).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::delay::sleep(crate::util::delay::millis(wait_ms)).await;
            dashboard.update(DashboardState::finish_course);
            if let Some(course) = crate::catalog::dashboard::find_course(course_id) {
                notices.update(|n| {
                    n.info(crate::catalog::dashboard::course_start_message(course));
                });
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = wait_ms;
    };

    view! {
        <section class="dashboard">
            <div class="dashboard__welcome">
                <h1>{move || format!("Welcome back, {}! 👋", first_name())}</h1>
                <p>"Ready to continue your coding journey?"</p>
            </div>

            <div class="dashboard__stats">
                {DASHBOARD_STATS
                    .iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__label">{*label}</span>
                                <span class="stat-card__value">{*value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="dashboard__grid">
                <div class="dashboard__courses">
                    <h2>"Continue Learning"</h2>
                    {COURSES
                        .iter()
                        .map(|course| {
                            let course_id = course.id;
                            let loading = move || dashboard.with(|d| d.is_starting(course_id));
                            view! {
                                <div class="course-card">
                                    <div class="course-card__head">
                                        <span class="course-card__icon">{course.icon}</span>
                                        <div>
                                            <h3>{course.title}</h3>
                                            <p class="course-card__meta">
                                                {format!("{} • {} lessons", course.level.label(), course.lessons)}
                                            </p>
                                        </div>
                                        <span
                                            class="course-card__level"
                                            class:course-card__level--beginner=course.level == CourseLevel::Beginner
                                        >
                                            {course.level.label()}
                                        </span>
                                    </div>
                                    <div class="course-card__progress-label">
                                        <span>{format!("{}/{} lessons", course.completed, course.lessons)}</span>
                                        <span>{format!("{}%", course.progress)}</span>
                                    </div>
                                    <div class="progress">
                                        <div class="progress__bar" style:width=format!("{}%", course.progress)></div>
                                    </div>
                                    <button class="btn btn--primary course-card__continue" on:click=move |_| continue_course(course_id)>
                                        {move || if loading() { "Loading..." } else { "Continue Course" }}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <aside class="dashboard__sidebar">
                    <div class="panel">
                        <h3>"Achievements"</h3>
                        <div class="achievements">
                            {ACHIEVEMENTS
                                .iter()
                                .map(|achievement| {
                                    view! {
                                        <div class="achievement" class:achievement--locked=!achievement.unlocked>
                                            <span class="achievement__icon">{achievement.icon}</span>
                                            <span class="achievement__name">{achievement.name}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="panel">
                        <h3>"Recent Projects"</h3>
                        {RECENT_PROJECTS
                            .iter()
                            .map(|project| {
                                view! {
                                    <div class="recent-project">
                                        <div>
                                            <div class="recent-project__name">{project.name}</div>
                                            <div class="recent-project__meta">{format!("{} • {}", project.tech, project.when)}</div>
                                        </div>
                                        <span
                                            class="recent-project__status"
                                            class:recent-project__status--done=project.completed
                                            title=project.status_label()
                                        >
                                            {if project.completed { "✓" } else { "⏱" }}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="panel">
                        <h3>"Quick Actions"</h3>
                        {QUICK_ACTIONS
                            .iter()
                            .map(|action| {
                                let message = action.notice;
                                view! {
                                    <button
                                        class="quick-action"
                                        data-action=action.id
                                        on:click=move |_| {
                                            notices.update(|n| {
                                                n.info(message);
                                            });
                                        }
                                    >
                                        {action.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </aside>
            </div>
        </section>
    }
}
