use super::*;

#[test]
fn lat_lng_requires_both_finite_parts() {
    assert_eq!(lat_lng_from_parts(Some(1.0), Some(2.0)), Some(Coordinate::new(1.0, 2.0)));
    assert_eq!(lat_lng_from_parts(Some(1.0), None), None);
    assert_eq!(lat_lng_from_parts(Some(f64::NAN), Some(2.0)), None);
}

#[test]
fn lat_lng_keeps_off_world_longitude_for_picker_to_wrap() {
    assert_eq!(lat_lng_from_parts(Some(10.0), Some(190.0)), Some(Coordinate::new(10.0, 190.0)));
}
