//! Drop-down offering the property export formats.

use forest::ExportFormat;
use leptos::prelude::*;

use crate::util::i18n::t;

#[component]
pub fn ExportMenu(on_export: Callback<ExportFormat>) -> impl IntoView {
    let open = RwSignal::new(false);
    let pick = move |format: ExportFormat| {
        open.set(false);
        on_export.run(format);
    };

    view! {
        <div class="menu">
            <button class="btn" on:click=move |_| open.update(|o| *o = !*o)>
                {t("property.action.export.title")}
            </button>
            <Show when=move || open.get()>
                <ul class="menu__list">
                    <li>
                        <button class="menu__item" on:click=move |_| pick(ExportFormat::Csv)>
                            {t("property.action.export.csv")}
                        </button>
                    </li>
                    <li>
                        <button class="menu__item" on:click=move |_| pick(ExportFormat::Xlsx)>
                            {t("property.action.export.xlsx")}
                        </button>
                    </li>
                </ul>
            </Show>
        </div>
    }
}
