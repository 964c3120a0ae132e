use super::*;

#[test]
fn demand_and_supply_cover_every_month() {
    assert_eq!(demand_series().values.len(), 12);
    assert_eq!(supply_series().values.len(), 12);
    assert_eq!(month_labels().first(), Some(&"Jan"));
    assert_eq!(month_labels().last(), Some(&"Dec"));
}

#[test]
fn series_use_distinct_classes() {
    assert_ne!(demand_series().class, supply_series().class);
}

#[test]
fn series_max_spans_all_series() {
    let max = series_max(&[demand_series(), supply_series()]);
    assert!((max - 140.0).abs() < f64::EPSILON);
}

#[test]
fn series_max_of_nothing_is_zero() {
    assert!(series_max(&[]).abs() < f64::EPSILON);
}

#[test]
fn coord_rounds_to_one_decimal() {
    assert_eq!(coord(12.345), "12.3");
    assert_eq!(coord(7.0), "7.0");
}
