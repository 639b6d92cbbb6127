//! Confirmation dialog summarising a single-property purchase.

#[cfg(test)]
#[path = "purchase_modal_test.rs"]
mod purchase_modal_test;

use forest::Property;
use forest::format::with_unit;
use leptos::prelude::*;

use crate::util::i18n::{t, t_with};

/// Forest area and total area rows. The total covers forest land only.
#[must_use]
pub fn area_rows(property: &Property, unit: &str) -> (String, String) {
    let forest_area = with_unit(Some(property.forest_area_ha), 2, unit);
    (forest_area.clone(), forest_area)
}

#[component]
pub fn PurchaseModal(
    property: Property,
    #[prop(into)] pending: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let hectares = t("unit.ha");
    let (forest_area, total_area) = area_rows(&property, &hectares);
    let count = t_with("purchase.totalPropertyCount", &[("count", "1")]);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" && !pending.get_untracked() {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--purchase"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{t("purchase.title")}</h2>
                <dl class="dialog__summary">
                    <dt>{t("property.cadastralId")}</dt>
                    <dd>{property.cadastral_id.clone()}</dd>
                    <dt>{t("property.parcelId")}</dt>
                    <dd>{property.parcel_id.clone()}</dd>
                    <dt>{t("property.forestAreaHa")}</dt>
                    <dd>{forest_area}</dd>
                    <dt>{t("purchase.totalArea")}</dt>
                    <dd>{total_area}</dd>
                    <dt>{t("purchase.totalProperty")}</dt>
                    <dd>{count}</dd>
                </dl>
                <div class="dialog__actions">
                    <button
                        class="btn"
                        disabled=move || pending.get()
                        on:click=move |_| on_cancel.run(())
                    >
                        {t("purchase.cancel")}
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || pending.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {t("purchase.buy")}
                    </button>
                </div>
            </div>
        </div>
    }
}
