//! English UI strings keyed the way the translation bundles are keyed.
//!
//! Missing keys render as the key itself so gaps are visible in the UI.
//! `{{name}}` placeholders are filled by [`t_with`].

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use forest::Species;

fn lookup(key: &str) -> Option<&'static str> {
    let text = match key {
        "species.pine" => "Pine",
        "species.spruce" => "Spruce",
        "species.deciduous" => "Deciduous",

        "unit.ha" => "ha",
        "unit.m" => "m",
        "unit.m3" => "m³",
        "unit.m3Ha" => "m³/ha",
        "unit.tCO2eq" => "tCO2eq",

        "property.cadastralId" => "Property ID",
        "property.parcelId" => "Parcel ID",
        "property.propertyAreaHa" => "Property area",
        "property.forestAreaHa" => "Forest area",
        "property.ccCarbonTCO2eq" => "Carbon storage",
        "property.status.label" => "Status",
        "property.status.purchased" => "Purchased",
        "property.status.inBasket" => "In basket",
        "property.status.available" => "Available",
        "property.graph.totalVolume" => "Total volume",
        "property.graph.timberVolume" => "Timber volume",
        "property.graph.fiberVolume" => "Fiber volume",
        "property.graph.mkDevelopmentClass" => "Development class",
        "property.action.export.title" => "Export",
        "property.action.export.csv" => "Stand data (CSV)",
        "property.action.export.xlsx" => "Property data (XLSX)",
        "graph.total" => "Total",

        "action.property.open" => "Show data",
        "action.property.close" => "Hide data",
        "action.property.purchase" => "Purchase",
        "action.property.addToBasket" => "Add to basket",
        "action.property.purchaseNow" => "Purchase now",
        "action.close" => "Close",

        "stand.mkStandNumber" => "Stand",
        "stand.standAreaHa" => "Area",
        "stand.mkFertilityClass.label" => "Fertility class",
        "stand.ccMeanHeightM" => "Mean height",
        "stand.ccMainSpecies" => "Main species",
        "stand.mkDevelopmentClass.label" => "Development class",
        "stand.mkDevelopmentClass.other" => "Other",
        "stand.ccPineTimberM3Ha" => "Pine timber",
        "stand.ccSpruceTimberM3Ha" => "Spruce timber",
        "stand.ccDeciduousTimberM3Ha" => "Deciduous timber",
        "stand.ccPineFiberM3Ha" => "Pine fiber",
        "stand.ccSpruceFiberM3Ha" => "Spruce fiber",
        "stand.ccDeciduousFiberM3Ha" => "Deciduous fiber",
        "stand.ccTotalM3Ha" => "Total volume",
        "stand.ccCarbonTCO2eq" => "Carbon storage",

        "tooltip.ccCarbonTCO2eq" => "Estimated carbon stored in the growing stock, in tonnes of CO2 equivalent.",

        "pagination.previous" => "Previous",
        "pagination.next" => "Next",

        "purchase.title" => "Purchase property",
        "purchase.totalArea" => "Total area",
        "purchase.totalProperty" => "Properties",
        "purchase.totalPropertyCount" => "{{count}} property",
        "purchase.buy" => "Buy",
        "purchase.cancel" => "Cancel",

        "toast.basket.addItem.success" => "Property {{id}} added to basket",

        "nav.search" => "Search",
        "nav.properties" => "My properties",
        "nav.basket" => "Basket",
        "properties.empty" => "No purchased properties yet.",
        "search.placeholder" => "Parcel ID",
        "search.open" => "Open",
        "home.slide.search.title" => "Find a property",
        "home.slide.search.body" => "Open any parcel by its ID to see its area and status.",
        "home.slide.details.title" => "Forest data",
        "home.slide.details.body" => "Purchased properties show volumes by species and a stand-by-stand table.",
        "home.slide.export.title" => "Take it with you",
        "home.slide.export.body" => "Export stand data as CSV or the whole property as XLSX.",

        "error.generic" => "Something went wrong. Please try again.",
        "error.network" => "Could not reach the server. Check your connection.",
        "error.unauthorized" => "Your session has expired. Please sign in again.",
        "error.export" => "The export could not be downloaded.",
        "error.insufficient_credits" => "Your organization does not have enough credits for this purchase.",
        "error.already_purchased" => "This property has already been purchased.",
        "error.purchase_failed" => "The purchase could not be completed.",
        _ => return None,
    };
    Some(text)
}

/// Translate `key`, falling back to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    lookup(key).map_or_else(|| key.to_owned(), str::to_owned)
}

/// Translate `key` and substitute `{{name}}` placeholders.
#[must_use]
pub fn t_with(key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(t(key), |text, (name, value)| text.replace(&format!("{{{{{name}}}}}"), value))
}

/// Translate an error key, using the generic message for unknown codes.
#[must_use]
pub fn error_message(key: &str) -> String {
    lookup(key).or_else(|| lookup("error.generic")).unwrap_or_default().to_owned()
}

#[must_use]
pub fn species_label(species: Species) -> String {
    t(&format!("species.{}", species.key()))
}
