use super::*;

#[test]
fn timeout_is_ten_seconds() {
    assert_eq!(GEOLOCATION_TIMEOUT.as_millis(), 10_000);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn native_build_reports_unsupported() {
    use futures::executor::block_on;

    let geolocator = BrowserGeolocator;
    assert!(!geolocator.is_supported());
    assert_eq!(block_on(geolocator.current_position(GEOLOCATION_TIMEOUT)), Err(GeolocationError::Unsupported));
}

#[test]
fn failure_reason_is_displayed() {
    assert_eq!(GeolocationError::Failed("User denied".to_owned()).to_string(), "geolocation failed: User denied");
}
