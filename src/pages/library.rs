//! Creative library: searchable catalog of templates, animations, components, and themes.

use leptos::prelude::*;

use crate::catalog::library::{ASSETS, CategoryFilter, CreativeAsset, category_count, format_count};
use crate::net::Backends;
use crate::state::library::{LibraryState, LibraryView};
use crate::state::notice::NoticeState;

const FEATURED_COUNT: usize = 3;

#[component]
pub fn LibraryPage() -> impl IntoView {
    let library = RwSignal::new(LibraryState::default());
    let notices = expect_context::<RwSignal<NoticeState>>();
    let assets = StoredValue::new(expect_context::<Backends>().assets);

    let on_download = move |asset: &'static CreativeAsset| {
        notices.update(|n| {
            n.info(format!("Downloading {}...", asset.title));
        });
        let store = assets.get_value();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match store.download(asset.id).await {
                Ok(link) => {
                    log::debug!("asset {} resolved to {}", link.asset_id, link.url);
                    notices.update(|n| {
                        n.success(format!("{} downloaded successfully!", asset.title));
                    });
                }
                Err(e) => {
                    log::warn!("download failed: {e}");
                    notices.update(|n| {
                        n.error(format!("Download failed: {e}"));
                    });
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = store;
    };

    let notify = move |text: String| {
        notices.update(|n| {
            n.info(text);
        });
    };

    let is_list = move || library.with(|l| l.view == LibraryView::List);

    view! {
        <section class="library">
            <div class="library__header">
                <h1>"🎨 Creative Library"</h1>
                <p>"Discover amazing templates, animations, and components to supercharge your projects"</p>
            </div>

            <div class="library__toolbar">
                <div class="library__categories">
                    {CategoryFilter::tabs()
                        .map(|filter| {
                            view! {
                                <button
                                    class="library__category"
                                    class:library__category--active=move || library.with(|l| l.filter == filter)
                                    on:click=move |_| library.update(|l| l.filter = filter)
                                >
                                    {format!("{} ({})", filter.label(), category_count(ASSETS, filter))}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <input
                    class="library__search"
                    type="text"
                    placeholder="Search creative assets..."
                    prop:value=move || library.with(|l| l.search.clone())
                    on:input=move |ev| library.update(|l| l.search = event_target_value(&ev))
                />
                <div class="library__view-toggle">
                    <button
                        class="library__view"
                        class:library__view--active=move || !is_list()
                        title="Grid"
                        on:click=move |_| library.update(|l| l.view = LibraryView::Grid)
                    >
                        "▦"
                    </button>
                    <button
                        class="library__view"
                        class:library__view--active=is_list
                        title="List"
                        on:click=move |_| library.update(|l| l.view = LibraryView::List)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            <div class="library__featured">
                <h2>"⭐ Featured This Week"</h2>
                <p>"Check out these trending creative assets picked by our community"</p>
                <div class="library__featured-grid">
                    {ASSETS
                        .iter()
                        .take(FEATURED_COUNT)
                        .map(|asset| {
                            view! {
                                <div class="library__featured-item">
                                    <div class="library__swatch" style:background=asset.preview></div>
                                    <span class="library__featured-title">{asset.title}</span>
                                    <span class="library__kind">{asset.kind}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="library__assets" class:library__assets--list=is_list>
                {move || {
                    let visible = library.with(LibraryState::visible);
                    if visible.is_empty() {
                        return view! { <p class="library__empty">"No assets match your search."</p> }.into_any();
                    }
                    visible
                        .into_iter()
                        .map(|asset| {
                            let liked = move || library.with(|l| l.is_liked(asset.id));
                            view! {
                                <article class="asset-card">
                                    <div class="asset-card__preview" style:background=asset.preview>
                                        <button
                                            class="asset-card__preview-btn"
                                            on:click=move |_| notify(format!("Opening preview for {}", asset.title))
                                        >
                                            "Preview"
                                        </button>
                                    </div>
                                    <div class="asset-card__body">
                                        <div class="asset-card__title-row">
                                            <h3>{asset.title}</h3>
                                            <span class="library__kind">{asset.kind}</span>
                                        </div>
                                        <div class="asset-card__tags">
                                            {asset
                                                .tags
                                                .iter()
                                                .map(|tag| view! { <span class="asset-card__tag">{format!("#{tag}")}</span> })
                                                .collect_view()}
                                        </div>
                                        <div class="asset-card__footer">
                                            <button
                                                class="asset-card__like"
                                                class:asset-card__like--active=liked
                                                on:click=move |_| {
                                                    library.update(|l| {
                                                        l.toggle_like(asset.id);
                                                    });
                                                }
                                            >
                                                {move || if liked() { "♥" } else { "♡" }}
                                                " "
                                                {asset.likes}
                                            </button>
                                            <button class="asset-card__download" on:click=move |_| on_download(asset)>
                                                {format!("⬇ {}", format_count(asset.downloads))}
                                            </button>
                                            <button
                                                class="btn btn--small asset-card__use"
                                                on:click=move |_| notify(format!("Adding {} to your project...", asset.title))
                                            >
                                                "Use"
                                            </button>
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <div class="library__upload">
                <h2>"Share Your Creativity"</h2>
                <p>
                    "Created something amazing? Share it with the community and help other students learn and build incredible projects!"
                </p>
                <button class="btn btn--primary" on:click=move |_| notify("Opening asset upload dialog...".to_owned())>
                    "Upload Asset"
                </button>
            </div>
        </section>
    }
}
