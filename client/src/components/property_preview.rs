//! Property preview card: summary row, actions, purchase modal and the
//! expandable detail panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card owns one [`PropertyViewState`] and reacts to the selected parcel
//! id. Reads go through [`run_transition`]; purchase and export talk to the
//! API directly and report failures as toasts.

use forest::ExportFormat;
use forest::format::with_unit;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::export_menu::ExportMenu;
use crate::components::property_detail::PropertyDetail;
use crate::components::purchase_modal::PurchaseModal;
use crate::components::toast_stack::notify;
use crate::net::reads::{ReadDeps, run_transition};
use crate::state::basket::BasketStore;
use crate::state::profile::ProfileState;
use crate::state::property_view::PropertyViewState;
use crate::state::purchase::PurchaseState;
use crate::state::toasts::{ToastKind, ToastState};
use crate::util::analytics::AnalyticsEvent;
use crate::util::i18n::{t, t_with};

pub const PROPERTIES_PATH: &str = "/scout/properties";

/// Search route that opens `parcel_id`.
#[must_use]
pub fn search_href(parcel_id: &str) -> String {
    format!("/scout/search?propertyId={parcel_id}")
}

#[component]
pub fn PropertyPreview(
    #[prop(into)] parcel_id: Signal<String>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] on_purchased: Option<Callback<String>>,
    #[prop(optional)] show_status: bool,
    #[prop(optional)] show_purchase_button: bool,
) -> impl IntoView {
    let deps = ReadDeps::from_context();
    let basket = expect_context::<BasketStore>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let view_state = RwSignal::new(PropertyViewState::default());
    let purchase = RwSignal::new(PurchaseState::default());
    let limit = deps.config.stands_page_limit;

    // Parcel selection drives every read.
    {
        let deps = deps.clone();
        Effect::new(move || {
            let id = parcel_id.get();
            let bbox_known = deps.map.with_untracked(|m| m.bbox_for(&id).is_some());
            if let Some(transition) = view_state.try_update(|s| s.select_parcel(&id, bbox_known)) {
                run_transition(&deps, view_state, transition);
            }
        });
    }

    // Zoom requests from elsewhere apply once a bbox is known.
    {
        let map = deps.map;
        let padding = deps.config.map_padding_px;
        let max_zoom = deps.config.map_max_zoom;
        Effect::new(move || {
            if map.with(|m| m.zoom_to_bbox && m.parcel_bbox.is_some()) {
                map.update(|m| {
                    m.apply_zoom(padding, max_zoom);
                });
            }
        });
    }

    // Unpurchased properties are not listed under the organization view.
    {
        let location = use_location();
        let navigate = use_navigate();
        Effect::new(move || {
            let unpurchased = view_state.with(|s| s.preview.ready().map(|p| (p.parcel_id.clone(), p.is_purchased)));
            if let Some((id, false)) = unpurchased {
                if location.pathname.get_untracked().starts_with(PROPERTIES_PATH) {
                    navigate(&search_href(&id), leptos_router::NavigateOptions::default());
                }
            }
        });
    }

    let current_id = move || view_state.with(|s| s.parcel_id.clone());

    let close = {
        let deps = deps.clone();
        move || {
            if let Some(id) = current_id() {
                deps.analytics.track(&AnalyticsEvent::PreviewClose { parcel_id: id });
            }
            deps.map.update(|m| m.clear_parcel_bbox());
            if let Some(cb) = on_close {
                cb.run(());
            }
        }
    };

    let toggle = {
        let deps = deps.clone();
        move || {
            if let Some(transition) = view_state.try_update(PropertyViewState::toggle_expanded) {
                run_transition(&deps, view_state, transition);
            }
        }
    };

    let change_page = {
        let deps = deps.clone();
        Callback::new(move |page: u32| {
            if let Some(transition) = view_state.try_update(|s| s.set_stands_page(page)) {
                run_transition(&deps, view_state, transition);
            }
        })
    };

    let add_to_basket = {
        let deps = deps.clone();
        let close = close.clone();
        move || {
            let Some(id) = current_id() else { return };
            let mut event = None;
            basket.update(|selection| event = selection.add_from_preview(&id));
            let Some(event) = event else { return };
            deps.analytics.track(&event);
            notify(toasts, ToastKind::Success, t_with("toast.basket.addItem.success", &[("id", &id)]));
            close();
        }
    };

    let open_purchase = {
        let deps = deps.clone();
        move || {
            let Some(id) = current_id() else { return };
            if let Some(event) = purchase.try_update(|p| p.open(&id)).flatten() {
                deps.analytics.track(&event);
            }
        }
    };

    let cancel_purchase = {
        let deps = deps.clone();
        Callback::new(move |()| {
            let Some(id) = current_id() else { return };
            if let Some(event) = purchase.try_update(|p| p.cancel(&id)).flatten() {
                deps.analytics.track(&event);
            }
        })
    };

    let confirm_purchase = {
        let deps = deps.clone();
        let close = close.clone();
        Callback::new(move |()| {
            let Some(id) = current_id() else { return };
            let Some(event) = purchase.try_update(|p| p.begin_submit(&id)).flatten() else {
                return;
            };
            deps.analytics.track(&event);
            submit_purchase(deps.clone(), id, purchase, basket, toasts, profile, close.clone(), on_purchased);
        })
    };

    let export = {
        let deps = deps.clone();
        Callback::new(move |format: ExportFormat| {
            let property = view_state.with_untracked(|s| s.preview.ready().cloned());
            start_export(deps.clone(), property, format, toasts);
        })
    };

    let summary = move || {
        let state = view_state.get();
        let property = state.preview.ready()?.clone();
        let in_basket = basket.contains(&property.parcel_id);
        let status = state.status(in_basket);
        let carbon = state.purchased_details().map(|d| d.property.cc_carbon_tco2eq);
        let hectares = t("unit.ha");
        Some(view! {
            <dl class="property-preview__summary">
                <dt>{t("property.cadastralId")}</dt>
                <dd>{property.cadastral_id.clone()}</dd>
                <dt>{t("property.parcelId")}</dt>
                <dd>{property.parcel_id.clone()}</dd>
                <dt>{t("property.propertyAreaHa")}</dt>
                <dd>{with_unit(Some(property.property_area_ha), 2, &hectares)}</dd>
                <dt>{t("property.forestAreaHa")}</dt>
                <dd>{with_unit(Some(property.forest_area_ha), 2, &hectares)}</dd>
                {carbon.map(|value| view! {
                    <dt title=t("tooltip.ccCarbonTCO2eq")>{t("property.ccCarbonTCO2eq")}</dt>
                    <dd>{with_unit(value, 0, &t("unit.tCO2eq"))}</dd>
                })}
                {show_status.then(|| view! {
                    <dt>{t("property.status.label")}</dt>
                    <dd class="property-preview__status">{t(status.translation_key())}</dd>
                })}
            </dl>
        })
    };

    let actions = move || {
        let state = view_state.get();
        let Some(property) = state.preview.ready().cloned() else {
            return ().into_any();
        };
        if property.is_purchased {
            let toggle = toggle.clone();
            let label = if state.mode == crate::state::property_view::DetailMode::Expanded {
                t("action.property.close")
            } else {
                t("action.property.open")
            };
            view! {
                <div class="property-preview__actions">
                    <ExportMenu on_export=export/>
                    <button class="btn" on:click=move |_| toggle()>{label}</button>
                </div>
            }
            .into_any()
        } else if show_purchase_button {
            let add_to_basket = add_to_basket.clone();
            let open_purchase = open_purchase.clone();
            let in_basket = basket.contains(&property.parcel_id);
            view! {
                <div class="property-preview__actions">
                    {(!in_basket).then(|| view! {
                        <button class="btn" on:click=move |_| add_to_basket()>
                            {t("action.property.addToBasket")}
                        </button>
                    })}
                    <button class="btn btn--primary" on:click=move |_| open_purchase()>
                        {t("action.property.purchaseNow")}
                    </button>
                </div>
            }
            .into_any()
        } else {
            ().into_any()
        }
    };

    let detail = move || {
        let state = view_state.get();
        if !state.show_detail_panel() {
            return None;
        }
        let details = state.details.ready()?.clone();
        Some(view! {
            <PropertyDetail
                details=details
                stands=Signal::derive(move || view_state.with(|s| s.stand_page_or_empty(limit)))
                page=Signal::derive(move || view_state.with(|s| s.stands_page))
                on_page_change=change_page
            />
        })
    };

    let modal = move || {
        if !purchase.with(|p| p.modal_open) {
            return None;
        }
        let property = view_state.with(|s| s.preview.ready().cloned())?;
        Some(view! {
            <PurchaseModal
                property=property
                pending=Signal::derive(move || purchase.with(|p| p.pending))
                on_confirm=confirm_purchase
                on_cancel=cancel_purchase
            />
        })
    };

    let close_click = close.clone();
    view! {
        <Show when=move || parcel_id.with(|id| !id.is_empty())>
            <article class="property-preview">
                <header class="property-preview__header">
                    <button
                        class="btn btn--icon"
                        title=t("action.close")
                        on:click={
                            let close = close_click.clone();
                            move |_| close()
                        }
                    >
                        "×"
                    </button>
                </header>
                <Show when=move || view_state.with(PropertyViewState::is_loading)>
                    <div class="spinner"></div>
                </Show>
                {
                    let actions = actions.clone();
                    view! {
                        <Show when=move || view_state.with(PropertyViewState::should_show_preview)>
                            {summary}
                            {actions.clone()}
                        </Show>
                    }
                }
                {detail}
                {modal}
            </article>
        </Show>
    }
}

#[allow(clippy::too_many_arguments)]
fn submit_purchase(
    deps: ReadDeps,
    parcel_id: String,
    purchase: RwSignal<PurchaseState>,
    basket: BasketStore,
    toasts: RwSignal<ToastState>,
    profile: RwSignal<ProfileState>,
    close: impl Fn() + 'static,
    on_purchased: Option<Callback<String>>,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::api;
        use crate::util::i18n::error_message;

        leptos::task::spawn_local(async move {
            match api::purchase_properties(&deps.config, std::slice::from_ref(&parcel_id)).await {
                Ok(()) => {
                    let mut event = None;
                    deps.cache.update(|cache| {
                        basket.update(|selection| {
                            purchase.update(|p| event = Some(p.apply_success(&parcel_id, cache, selection)));
                        });
                    });
                    if let Some(event) = event {
                        deps.analytics.track(&event);
                    }
                    close();
                    if let Some(cb) = on_purchased {
                        cb.run(parcel_id.clone());
                    }
                    profile.update(|p| p.loading = true);
                    let refreshed = api::fetch_profile(&deps.config).await;
                    profile.update(|p| {
                        p.loading = false;
                        match refreshed {
                            Ok(fresh) => p.profile = Some(fresh),
                            Err(e) => leptos::logging::warn!("profile refetch failed: {e}"),
                        }
                    });
                }
                Err(err) => {
                    leptos::logging::warn!("purchase failed for {parcel_id}: {err}");
                    notify(toasts, ToastKind::Error, error_message(&err.translation_key()));
                    purchase.update(|p| p.apply_failure(err));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (deps, parcel_id, purchase, basket, toasts, profile, on_purchased);
        let _ = close;
    }
}

fn start_export(
    deps: ReadDeps,
    property: Option<forest::Property>,
    format: ExportFormat,
    toasts: RwSignal<ToastState>,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::i18n::error_message;

        leptos::task::spawn_local(async move {
            match crate::net::export::download_export(&deps.config, property.as_ref(), format).await {
                Ok(saved) => {
                    leptos::logging::log!("exported {}", saved.filename);
                    deps.analytics.track(&saved.event);
                }
                Err(err) => {
                    leptos::logging::warn!("export failed: {err}");
                    notify(toasts, ToastKind::Error, error_message(&err.translation_key()));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (deps, property, format, toasts);
    }
}
