use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_round_trips_wire_names() {
    for role in Role::ALL {
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, format!("\"{}\"", role.as_str()));
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn role_parse_rejects_unknown() {
    assert_eq!(Role::parse("CHEF"), None);
}

#[test]
fn role_personal_location_only_for_customers_and_couriers() {
    assert!(Role::Customer.has_personal_location());
    assert!(Role::DeliveryPerson.has_personal_location());
    assert!(!Role::RestaurantOwner.has_personal_location());
    assert!(!Role::Admin.has_personal_location());
}

// =============================================================
// User / Restaurant
// =============================================================

#[test]
fn user_deserializes_camel_case_fields() {
    let user: User = serde_json::from_str(
        r#"{"id":7,"name":"Ana","email":"ana@example.com","vehicleDetails":"Bike","role":"DELIVERY_PERSON","latitude":40.0,"longitude":-3.5}"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::DeliveryPerson);
    assert_eq!(user.vehicle_details.as_deref(), Some("Bike"));
    assert_eq!(user.coordinates(), Some(Coordinate::new(40.0, -3.5)));
}

#[test]
fn user_without_location_has_no_coordinates() {
    let user: User = serde_json::from_str(r#"{"name":"Bo","email":"bo@example.com","role":"CUSTOMER"}"#).unwrap();
    assert_eq!(user.coordinates(), None);
    assert_eq!(picker_seed(user.coordinates()), DEFAULT_CENTER);
}

#[test]
fn zero_coordinates_are_kept() {
    let user: User =
        serde_json::from_str(r#"{"role":"CUSTOMER","latitude":0.0,"longitude":0.0}"#).unwrap();
    assert_eq!(user.coordinates(), Some(Coordinate::new(0.0, 0.0)));
}

#[test]
fn restaurant_update_preserves_unknown_fields() {
    let restaurant: Restaurant = serde_json::from_str(
        r#"{"restaurantId":3,"name":"Taqueria","cuisineType":"Mexican","status":"OPEN","rating":4.5}"#,
    )
    .unwrap();
    let moved = restaurant.with_coordinates(Coordinate::new(19.43, -99.13));
    let json = serde_json::to_value(&moved).unwrap();
    assert_eq!(json["restaurantId"], 3);
    assert_eq!(json["rating"], 4.5);
    assert_eq!(json["latitude"], 19.43);
    assert_eq!(json["longitude"], -99.13);
}

// =============================================================
// Requests
// =============================================================

#[test]
fn register_request_omits_blank_optionals() {
    let req = RegisterRequest {
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        name: "A".to_owned(),
        address: None,
        phone: Some("555".to_owned()),
        role: Role::RestaurantOwner,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("address").is_none());
    assert_eq!(json["phone"], "555");
    assert_eq!(json["role"], "RESTAURANT_OWNER");
}

#[test]
fn auth_response_accepts_token_aliases() {
    let a: AuthResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
    let b: AuthResponse = serde_json::from_str(r#"{"jwt":"t2"}"#).unwrap();
    assert_eq!(a.token, "t1");
    assert_eq!(b.token, "t2");
}

#[test]
fn profile_update_uses_camel_case_and_skips_absent_fields() {
    let update = ProfileUpdate {
        name: "C".to_owned(),
        email: "c@d.com".to_owned(),
        phone: String::new(),
        address: None,
        vehicle_details: Some("Van".to_owned()),
    };
    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["vehicleDetails"], "Van");
    assert!(json.get("address").is_none());
}
