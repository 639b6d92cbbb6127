//! Parcel search page.
//!
//! The selected parcel lives in the `propertyId` query parameter so links
//! from elsewhere (including the organization list) open the same card.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::property_preview::{PropertyPreview, search_href};
use crate::state::map::MapViewState;
use crate::util::i18n::t;

pub const SEARCH_PATH: &str = "/scout/search";

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let navigate = use_navigate();
    let map = expect_context::<RwSignal<MapViewState>>();

    let parcel_id = Signal::derive(move || query.with(|q| q.get("propertyId").unwrap_or_default()));
    let draft = RwSignal::new(parcel_id.get_untracked());

    // Opening a parcel by link frames it once its bbox arrives.
    Effect::new(move || {
        if !parcel_id.with(String::is_empty) {
            map.update(MapViewState::request_zoom);
        }
    });

    let navigate_open = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let id = draft.get_untracked().trim().to_owned();
        if !id.is_empty() {
            navigate_open(&search_href(&id), NavigateOptions::default());
        }
    };
    let closed = RwSignal::new(false);
    let on_close = Callback::new(move |()| {
        draft.set(String::new());
        closed.set(true);
    });
    Effect::new(move || {
        if closed.get() {
            closed.set(false);
            navigate(SEARCH_PATH, NavigateOptions::default());
        }
    });

    let viewport = move || {
        let v = map.with(|m| m.viewport);
        format!("{:.4}, {:.4} @ {:.1}", v.latitude, v.longitude, v.zoom)
    };

    view! {
        <section class="search-page">
            <form class="search-page__form" on:submit=on_submit>
                <input
                    class="search-page__input"
                    placeholder=t("search.placeholder")
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">{t("search.open")}</button>
            </form>
            <p class="search-page__viewport">{viewport}</p>
            <PropertyPreview
                parcel_id=parcel_id
                on_close=on_close
                show_purchase_button=true
            />
        </section>
    }
}
