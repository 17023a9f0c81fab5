//! Project workspace: project list, read-only editor, live preview, and suggestions.

use leptos::prelude::*;

use crate::catalog::workspace::{PROJECTS, code_sample};
use crate::config::ClientConfig;
use crate::state::notice::NoticeState;
use crate::state::workspace::{EditorTab, PreviewMode, Suggestion, WorkspaceState, share_url};
use crate::util::browser;

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let workspace = RwSignal::new(WorkspaceState::default());
    let notices = expect_context::<RwSignal<NoticeState>>();
    let delays = expect_context::<ClientConfig>().delays;

    let running = move || workspace.with(|w| w.running);
    let saving = move || workspace.with(|w| w.saving);

    let on_run = move |_| {
        if !workspace.try_update(WorkspaceState::begin_run).unwrap_or(false) {
            return;
        }
        let wait_ms = delays.project_run_ms;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::delay::sleep(crate::util::delay::millis(wait_ms)).await;
            workspace.update(WorkspaceState::finish_run);
            notices.update(|n| {
                n.success("Project is now running in preview!");
            });
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = wait_ms;
    };

    let on_save = move |_| {
        if !workspace.try_update(WorkspaceState::begin_save).unwrap_or(false) {
            return;
        }
        let wait_ms = delays.project_save_ms;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::util::delay::sleep(crate::util::delay::millis(wait_ms)).await;
            workspace.update(WorkspaceState::finish_save);
            notices.update(|n| {
                n.success("Project saved successfully!");
            });
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = wait_ms;
    };

    let on_share = move |_| {
        let url = share_url(browser::now_ms());
        notices.update(|n| {
            if browser::copy_to_clipboard(&url) {
                n.success(format!("Project link copied to clipboard: {url}"));
            } else {
                n.error(format!("Could not copy link. Share this URL: {url}"));
            }
        });
    };

    let on_new_project = move |_| {
        let Some(name) = browser::prompt_text("Enter project name:") else {
            return;
        };
        let name = name.trim().to_owned();
        if name.is_empty() {
            return;
        }
        notices.update(|n| {
            n.info(format!("Creating new project: {name}"));
        });
    };

    view! {
        <section class="workspace">
            <div class="workspace__header">
                <div>
                    <h1>"Project Workspace"</h1>
                    <p>"Build amazing projects with our AI-powered editor"</p>
                </div>
                <div class="workspace__actions">
                    <button class="btn btn--run" on:click=on_run disabled=running>
                        {move || if running() { "Running..." } else { "Run" }}
                    </button>
                    <button class="btn btn--save" on:click=on_save disabled=saving>
                        {move || if saving() { "Saving..." } else { "Save" }}
                    </button>
                    <button class="btn btn--share" on:click=on_share>
                        "Share"
                    </button>
                </div>
            </div>

            <div class="workspace__grid">
                <div class="panel workspace__projects">
                    <h3>"My Projects"</h3>
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <button
                                    class="workspace__project"
                                    class:workspace__project--selected=move || {
                                        workspace.with(|w| w.selected_project == index)
                                    }
                                    on:click=move |_| workspace.update(|w| w.select_project(index, PROJECTS.len()))
                                >
                                    <span class="workspace__project-name">{project.name}</span>
                                    <span class="workspace__project-tech">{project.tech}</span>
                                    <span class=format!("status {}", project.status.css_modifier())>
                                        {project.status.label()}
                                    </span>
                                </button>
                            }
                        })
                        .collect_view()}
                    <button class="btn btn--primary workspace__new" on:click=on_new_project>
                        "+ New Project"
                    </button>
                </div>

                <div class="panel workspace__editor">
                    <div class="workspace__tabs">
                        {EditorTab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        class="workspace__tab"
                                        class:workspace__tab--active=move || workspace.with(|w| w.active_tab == tab)
                                        on:click=move |_| workspace.update(|w| w.active_tab = tab)
                                    >
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <pre class="workspace__code">
                        <code>{move || code_sample(workspace.with(|w| w.active_tab))}</code>
                    </pre>
                </div>

                <div class="panel workspace__preview">
                    <div class="workspace__preview-head">
                        <h3>"Preview"</h3>
                        <div class="workspace__preview-modes">
                            {PreviewMode::ALL
                                .into_iter()
                                .map(|mode| {
                                    view! {
                                        <button
                                            class="workspace__preview-mode"
                                            class:workspace__preview-mode--active=move || {
                                                workspace.with(|w| w.preview_mode == mode)
                                            }
                                            title=mode.label()
                                            on:click=move |_| workspace.update(|w| w.preview_mode = mode)
                                        >
                                            {mode.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class=move || {
                        format!("workspace__preview-frame {}", workspace.with(|w| w.preview_mode.css_modifier()))
                    }>
                        <h1>"🚀 Welcome to My Project!"</h1>
                        <p>"This is an amazing project built with CodeCraft Academy!"</p>
                        <button class="btn btn--primary">"Click me!"</button>
                    </div>
                    <button class="btn workspace__open" on:click=move |_| browser::open_in_new_tab("#")>
                        "Open in New Tab"
                    </button>
                </div>
            </div>

            <div class="panel workspace__suggestions">
                <h3>"🤖 AI Suggestions"</h3>
                <div class="workspace__suggestion-grid">
                    {Suggestion::ALL
                        .into_iter()
                        .map(|suggestion| {
                            view! {
                                <div class="suggestion">
                                    <h4>{suggestion.title()}</h4>
                                    <p>{suggestion.description()}</p>
                                    <button
                                        class="suggestion__apply"
                                        on:click=move |_| {
                                            notices.update(|n| {
                                                n.info(suggestion.applying_message());
                                            });
                                        }
                                    >
                                        "Apply"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
