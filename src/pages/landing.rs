//! Public landing page.

use leptos::prelude::*;

use crate::catalog::landing::{COMMUNITY_STATS, FEATURES};
use crate::state::router::Section;
use crate::state::ui::UiState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <section class="landing">
            <div class="landing__hero">
                <div class="landing__badge">"🚀"</div>
                <h1 class="landing__headline">
                    <span class="landing__headline-accent">"Learn Coding"</span>
                    <br/>
                    "The Fun Way!"
                </h1>
                <p class="landing__lead">
                    "Join thousands of students building amazing projects with AI assistance, creative tools, and gamified learning experiences that make coding addictive! 🚀"
                </p>
                <div class="landing__actions">
                    <button class="btn btn--primary btn--large" on:click=move |_| ui.update(|u| u.navigate(Section::Dashboard))>
                        "Start Learning →"
                    </button>
                    <button class="btn btn--large" on:click=move |_| ui.update(|u| u.navigate(Section::Projects))>
                        "View Projects"
                    </button>
                </div>
            </div>

            <div class="landing__features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="landing__feature">
                                <div class="landing__feature-icon">{feature.icon}</div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="landing__stats">
                {COMMUNITY_STATS
                    .iter()
                    .map(|(number, label)| {
                        view! {
                            <div class="landing__stat">
                                <span class="landing__stat-number">{*number}</span>
                                <span class="landing__stat-label">{*label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
