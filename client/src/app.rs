//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::ScoutConfig;
use crate::pages::{home::HomePage, properties::PropertiesPage, search::SearchPage};
use crate::state::basket::BasketStore;
use crate::state::map::MapViewState;
use crate::state::profile::ProfileState;
use crate::state::query_cache::QueryCache;
use crate::state::toasts::ToastState;
use crate::util::analytics::Analytics;
use crate::util::i18n::t;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ScoutConfig::from_build_env();
    let profile = RwSignal::new(ProfileState::default());
    provide_context(Analytics::new(config.analytics_url.clone()));
    provide_context(BasketStore::new());
    provide_context(RwSignal::new(QueryCache::default()));
    provide_context(RwSignal::new(MapViewState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(profile);

    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        leptos::task::spawn_local(async move {
            profile.update(|p| p.loading = true);
            let result = crate::net::api::fetch_profile(&config).await;
            profile.update(|p| {
                p.loading = false;
                match result {
                    Ok(fresh) => p.profile = Some(fresh),
                    Err(e) => leptos::logging::warn!("profile read failed: {e}"),
                }
            });
        });
    }
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/scout.css"/>
        <Title text="Scout"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("scout"), StaticSegment("search")) view=SearchPage/>
                    <Route path=(StaticSegment("scout"), StaticSegment("properties")) view=PropertiesPage/>
                </Routes>
            </main>
            <ToastStack/>
        </Router>
    }
}

/// Top bar with navigation, organization name and basket size.
#[component]
fn Header() -> impl IntoView {
    let basket = expect_context::<BasketStore>();
    let profile = expect_context::<RwSignal<ProfileState>>();

    let organization = move || profile.with(|p| p.organization_name().map(str::to_owned)).unwrap_or_default();
    let credits = move || profile.with(ProfileState::credits).map(|c| c.to_string());

    view! {
        <header class="app-header">
            <nav class="app-header__nav">
                <A href="/scout/search">{t("nav.search")}</A>
                <A href="/scout/properties">{t("nav.properties")}</A>
            </nav>
            <span class="app-header__organization">{organization}</span>
            {move || credits().map(|c| view! { <span class="app-header__credits">{c}</span> })}
            <span class="app-header__basket" title=t("nav.basket")>
                {t("nav.basket")} " " <span class="badge">{move || basket.len()}</span>
            </span>
        </header>
    }
}
