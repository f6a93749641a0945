use super::*;

// =============================================================
// Validation
// =============================================================

#[test]
fn from_pair_accepts_two_finite_numbers() {
    assert_eq!(Coordinate::from_pair(&[40.7128, -74.006]), Some(Coordinate::new(40.7128, -74.006)));
}

#[test]
fn from_pair_rejects_wrong_arity() {
    assert_eq!(Coordinate::from_pair(&[]), None);
    assert_eq!(Coordinate::from_pair(&[1.0]), None);
    assert_eq!(Coordinate::from_pair(&[1.0, 2.0, 3.0]), None);
}

#[test]
fn from_pair_rejects_non_finite_values() {
    assert_eq!(Coordinate::from_pair(&[f64::NAN, 0.0]), None);
    assert_eq!(Coordinate::from_pair(&[0.0, f64::INFINITY]), None);
}

#[test]
fn from_pair_rejects_out_of_range_values() {
    assert_eq!(Coordinate::from_pair(&[90.5, 0.0]), None);
    assert_eq!(Coordinate::from_pair(&[0.0, -180.1]), None);
}

#[test]
fn parse_reads_textual_degrees() {
    assert_eq!(Coordinate::parse("48.8566", " 2.3522 "), Some(Coordinate::new(48.8566, 2.3522)));
    assert_eq!(Coordinate::parse("north", "2.0"), None);
}

// =============================================================
// Normalization and display
// =============================================================

#[test]
fn wrapped_moves_longitude_back_into_range() {
    let c = Coordinate::new(10.0, 190.0).wrapped();
    assert!((c.lon - -170.0).abs() < 1e-9);
    let c = Coordinate::new(10.0, -200.0).wrapped();
    assert!((c.lon - 160.0).abs() < 1e-9);
}

#[test]
fn wrapped_clamps_latitude() {
    assert_eq!(Coordinate::new(95.0, 0.0).wrapped().lat, 90.0);
    assert_eq!(Coordinate::new(-95.0, 0.0).wrapped().lat, -90.0);
}

#[test]
fn wrapped_keeps_in_range_values() {
    let c = Coordinate::new(40.7128, -74.006);
    assert_eq!(c.wrapped(), c);
}

#[test]
fn display_uses_six_decimal_places() {
    assert_eq!(
        Coordinate::new(40.7128, -74.0060).display(),
        "Latitude: 40.712800, Longitude: -74.006000"
    );
}

#[test]
fn serializes_as_two_element_array() {
    let json = serde_json::to_string(&Coordinate::new(1.5, -2.25)).unwrap();
    assert_eq!(json, "[1.5,-2.25]");
    let back: Coordinate = serde_json::from_str("[51.505,-0.09]").unwrap();
    assert_eq!(back, DEFAULT_CENTER);
}
