use super::*;

#[test]
fn t_returns_text_or_key() {
    assert_eq!(t("species.pine"), "Pine");
    assert_eq!(t("no.such.key"), "no.such.key");
}

#[test]
fn t_with_fills_placeholders() {
    assert_eq!(t_with("toast.basket.addItem.success", &[("id", "p-1")]), "Property p-1 added to basket");
    assert_eq!(t_with("purchase.totalPropertyCount", &[("count", "1")]), "1 property");
}

#[test]
fn error_message_falls_back_to_generic() {
    assert_eq!(error_message("error.insufficient_credits"), t("error.insufficient_credits"));
    assert_eq!(error_message("error.some_new_code"), t("error.generic"));
}

#[test]
fn species_labels_are_translated() {
    assert_eq!(species_label(Species::Deciduous), "Deciduous");
}
