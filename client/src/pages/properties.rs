//! Organization properties page: purchased properties with the preview card.

use forest::Property;
use forest::format::with_unit;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::property_preview::PropertyPreview;
use crate::config::ScoutConfig;
use crate::state::property_view::Remote;
use crate::state::query_cache::QueryCache;
use crate::util::i18n::{error_message, t};

fn load(config: ScoutConfig, cache: RwSignal<QueryCache>, listing: RwSignal<Remote<Vec<Property>>>) {
    #[cfg(feature = "hydrate")]
    {
        listing.set(Remote::Loading);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_organization_properties(&config, cache).await;
            if let Err(e) = &result {
                leptos::logging::warn!("organization properties read failed: {e}");
            }
            listing.try_set(Remote::from_result(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, cache, listing);
    }
}

#[component]
pub fn PropertiesPage() -> impl IntoView {
    let config = expect_context::<ScoutConfig>();
    let cache = expect_context::<RwSignal<QueryCache>>();
    let listing = RwSignal::new(Remote::<Vec<Property>>::NotStarted);
    let selected = RwSignal::new(String::new());

    {
        let config = config.clone();
        Effect::new(move || load(config.clone(), cache, listing));
    }
    let on_purchased = Callback::new(move |_: String| load(config.clone(), cache, listing));

    let rows = move || match listing.get() {
        Remote::NotStarted | Remote::Loading => view! { <div class="spinner"></div> }.into_any(),
        Remote::Failed(err) => {
            view! { <p class="properties-page__error">{error_message(&err.translation_key())}</p> }.into_any()
        }
        Remote::Ready(properties) if properties.is_empty() => {
            view! { <p class="properties-page__empty">{t("properties.empty")}</p> }.into_any()
        }
        Remote::Ready(properties) => {
            let hectares = t("unit.ha");
            properties
                .into_iter()
                .map(|property| {
                    let id = property.parcel_id.clone();
                    let active = {
                        let id = id.clone();
                        move || selected.with(|s| *s == id)
                    };
                    view! {
                        <li>
                            <button
                                class="properties-page__row"
                                class:properties-page__row--active=active
                                on:click=move |_| selected.set(id.clone())
                            >
                                <span>{property.cadastral_id.clone()}</span>
                                <span>{with_unit(Some(property.forest_area_ha), 2, &hectares)}</span>
                            </button>
                        </li>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        }
    };

    view! {
        <section class="properties-page">
            <ul class="properties-page__list">{rows}</ul>
            <PropertyPreview
                parcel_id=selected
                on_close=Callback::new(move |()| selected.set(String::new()))
                on_purchased=on_purchased
                show_status=true
            />
        </section>
    }
}
