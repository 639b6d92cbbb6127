use super::*;
use crate::property::{Stand, StandGroup};

fn label(species: Species) -> String {
    species.key().to_uppercase()
}

fn group(key: Option<&str>, areas: &[f64]) -> StandGroup {
    StandGroup {
        key: key.map(str::to_owned),
        data: areas
            .iter()
            .enumerate()
            .map(|(i, area)| Stand {
                mk_stand_id: i.to_string(),
                mk_stand_number: i.to_string(),
                stand_area_ha: *area,
                ..Stand::default()
            })
            .collect(),
    }
}

#[test]
fn species_volumes_round_and_keep_missing_values() {
    let property = Property {
        cc_pine_timber_m3: Some(120.5),
        cc_spruce_timber_m3: None,
        cc_deciduous_timber_m3: Some(0.4),
        ..Property::default()
    };

    let rows = species_volumes(&property, VolumeKind::Timber, label);
    assert_eq!(
        rows,
        vec![
            ChartDatum { label: "PINE".to_owned(), value: Some(121.0) },
            ChartDatum { label: "SPRUCE".to_owned(), value: None },
            ChartDatum { label: "DECIDUOUS".to_owned(), value: Some(0.0) },
        ]
    );
}

#[test]
fn species_volumes_select_the_requested_kind() {
    let property = Property {
        cc_pine_m3: Some(1.0),
        cc_pine_timber_m3: Some(2.0),
        cc_pine_fiber_m3: Some(3.0),
        ..Property::default()
    };
    let pine = |kind| species_volumes(&property, kind, label)[0].value;
    assert_eq!(pine(VolumeKind::Total), Some(1.0));
    assert_eq!(pine(VolumeKind::Timber), Some(2.0));
    assert_eq!(pine(VolumeKind::Fiber), Some(3.0));
}

#[test]
fn development_class_shares_compute_rounded_percentages() {
    let grouped = StandsByDevelopmentClass {
        stands_total_area: 10.0,
        stand_groups: vec![group(Some("02"), &[2.0, 1.0]), group(Some("null"), &[5.0]), group(Some("04"), &[2.0])],
    };

    let rows = development_class_shares(&grouped, "Other");
    assert_eq!(
        rows,
        vec![
            ChartDatum { label: "02".to_owned(), value: Some(30.0) },
            ChartDatum { label: "Other".to_owned(), value: Some(50.0) },
            ChartDatum { label: "04".to_owned(), value: Some(20.0) },
        ]
    );
}

#[test]
fn development_class_shares_sum_to_hundred_within_rounding() {
    let grouped = StandsByDevelopmentClass {
        stands_total_area: 9.0,
        stand_groups: vec![group(Some("01"), &[3.0]), group(Some("02"), &[3.0]), group(None, &[3.0])],
    };
    let rows = development_class_shares(&grouped, "Other");
    let sum: f64 = rows.iter().filter_map(|row| row.value).sum();
    assert!((sum - 100.0).abs() <= rows.len() as f64, "sum was {sum}");
}

#[test]
fn development_class_shares_empty_and_zero_total() {
    assert!(development_class_shares(&StandsByDevelopmentClass::default(), "Other").is_empty());

    let grouped = StandsByDevelopmentClass { stands_total_area: 0.0, stand_groups: vec![group(Some("01"), &[0.0])] };
    assert_eq!(development_class_shares(&grouped, "Other")[0].value, None);
}

#[test]
fn species_keys_parse_back() {
    for species in Species::ALL {
        assert_eq!(Species::from_key(species.key()), Some(species));
    }
    assert_eq!(Species::from_key("none"), None);
}
