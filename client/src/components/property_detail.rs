//! Expanded property panel: volume charts, development-class chart and the
//! paginated stand table.

#[cfg(test)]
#[path = "property_detail_test.rs"]
mod property_detail_test;

use forest::aggregate::{development_class_shares, round0, species_volumes};
use forest::format::{category, fixed, with_unit};
use forest::{ChartDatum, PropertyDetails, Species, Stand, StandPage, VolumeKind};
use leptos::prelude::*;

use crate::components::bar_chart::BarChart;
use crate::components::pagination::Pagination;
use crate::util::i18n::{species_label, t};

/// Stand table header keys, in column order.
pub const STAND_COLUMNS: [&str; 14] = [
    "stand.mkStandNumber",
    "stand.standAreaHa",
    "stand.mkFertilityClass.label",
    "stand.ccMeanHeightM",
    "stand.ccMainSpecies",
    "stand.mkDevelopmentClass.label",
    "stand.ccPineTimberM3Ha",
    "stand.ccSpruceTimberM3Ha",
    "stand.ccDeciduousTimberM3Ha",
    "stand.ccPineFiberM3Ha",
    "stand.ccSpruceFiberM3Ha",
    "stand.ccDeciduousFiberM3Ha",
    "stand.ccTotalM3Ha",
    "stand.ccCarbonTCO2eq",
];

fn main_species(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(key) if key.eq_ignore_ascii_case("none") => category(None),
        Some(key) => Species::from_key(key).map_or_else(|| category(Some(key)), species_label),
        None => category(None),
    }
}

/// Display cells for one stand, matching [`STAND_COLUMNS`].
fn stand_cells(stand: &Stand) -> Vec<String> {
    vec![
        stand.mk_stand_number.clone(),
        fixed(Some(stand.stand_area_ha), 2),
        category(stand.mk_fertility_class.as_deref()),
        fixed(stand.cc_mean_height_m, 1),
        main_species(stand.cc_main_species.as_deref()),
        category(stand.mk_development_class.as_deref()),
        fixed(stand.cc_pine_timber_m3_ha, 0),
        fixed(stand.cc_spruce_timber_m3_ha, 0),
        fixed(stand.cc_deciduous_timber_m3_ha, 0),
        fixed(stand.cc_pine_fiber_m3_ha, 0),
        fixed(stand.cc_spruce_fiber_m3_ha, 0),
        fixed(stand.cc_deciduous_fiber_m3_ha, 0),
        fixed(stand.cc_total_m3_ha, 0),
        fixed(stand.cc_carbon_tco2eq, 0),
    ]
}

fn volume_title_key(kind: VolumeKind) -> &'static str {
    match kind {
        VolumeKind::Total => "property.graph.totalVolume",
        VolumeKind::Timber => "property.graph.timberVolume",
        VolumeKind::Fiber => "property.graph.fiberVolume",
    }
}

/// Chart title carrying the rounded total, e.g. `"Timber volume 1234 m³"`.
fn volume_title(details: &PropertyDetails, kind: VolumeKind) -> String {
    let total = round0(details.property.volume_total(kind));
    format!("{} {}", t(volume_title_key(kind)), with_unit(total, 0, &t("unit.m3")))
}

fn volume_chart(details: &PropertyDetails, kind: VolumeKind) -> (String, Vec<ChartDatum>) {
    (volume_title(details, kind), species_volumes(&details.property, kind, species_label))
}

#[component]
pub fn PropertyDetail(
    details: PropertyDetails,
    #[prop(into)] stands: Signal<StandPage>,
    #[prop(into)] page: Signal<u32>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let volume_charts = VolumeKind::ALL
        .into_iter()
        .map(|kind| {
            let (title, data) = volume_chart(&details, kind);
            view! { <BarChart title=title data=data unit=t("unit.m3")/> }
        })
        .collect::<Vec<_>>();
    let development_classes = development_class_shares(
        &details.stands_by_development_class,
        &t("stand.mkDevelopmentClass.other"),
    );

    let header = STAND_COLUMNS
        .iter()
        .map(|key| view! { <th>{t(key)}</th> })
        .collect::<Vec<_>>();
    let rows = move || {
        stands
            .get()
            .sorted_by_stand_number()
            .into_iter()
            .map(|stand| {
                let cells = stand_cells(stand)
                    .into_iter()
                    .map(|cell| view! { <td>{cell}</td> })
                    .collect::<Vec<_>>();
                view! { <tr>{cells}</tr> }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="property-detail">
            <div class="property-detail__charts">
                {volume_charts}
                <BarChart
                    title=t("property.graph.mkDevelopmentClass")
                    data=development_classes
                    unit="%"
                />
            </div>
            <div class="property-detail__table">
                <table class="stand-table">
                    <thead>
                        <tr>{header}</tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <Pagination
                count=Signal::derive(move || stands.get().count)
                limit=Signal::derive(move || stands.get().pagination.limit)
                page=page
                on_change=on_page_change
                previous_text=t("pagination.previous")
                next_text=t("pagination.next")
            />
        </section>
    }
}
