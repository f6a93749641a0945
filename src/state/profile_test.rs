use super::*;

use crate::util::coords::DEFAULT_CENTER;

fn user(role: Role) -> User {
    User {
        id: Some(5),
        name: "Dana".to_owned(),
        email: "dana@example.com".to_owned(),
        phone: Some("555-0100".to_owned()),
        address: Some("1 Main St".to_owned()),
        vehicle_details: Some("Scooter".to_owned()),
        role,
        latitude: Some(41.9),
        longitude: Some(12.5),
    }
}

fn restaurant(id: i64, lat: Option<f64>) -> Restaurant {
    Restaurant {
        restaurant_id: id,
        name: format!("R{id}"),
        cuisine_type: Some("Pizza".to_owned()),
        location: None,
        status: Some("OPEN".to_owned()),
        latitude: lat,
        longitude: lat.map(|_| 10.0),
        extra: serde_json::Map::new(),
    }
}

// =============================================================
// Role-tagged form
// =============================================================

#[test]
fn details_carry_only_role_fields() {
    assert_eq!(
        ProfileDetails::for_user(&user(Role::Customer)),
        ProfileDetails::Customer { address: "1 Main St".to_owned() }
    );
    assert_eq!(
        ProfileDetails::for_user(&user(Role::DeliveryPerson)),
        ProfileDetails::DeliveryPerson { vehicle_details: "Scooter".to_owned() }
    );
    assert_eq!(ProfileDetails::for_user(&user(Role::RestaurantOwner)), ProfileDetails::RestaurantOwner);
    assert_eq!(ProfileDetails::for_user(&user(Role::Admin)).role(), Role::Admin);
}

#[test]
fn customer_update_includes_address_only() {
    let form = ProfileForm::from_user(&user(Role::Customer));
    let update = form.to_update().unwrap();
    assert_eq!(update.address.as_deref(), Some("1 Main St"));
    assert_eq!(update.vehicle_details, None);
}

#[test]
fn courier_update_includes_vehicle_details_only() {
    let mut form = ProfileForm::from_user(&user(Role::DeliveryPerson));
    form.set(ProfileField::VehicleDetails, "Van".to_owned());
    form.set(ProfileField::Address, "ignored".to_owned());
    let update = form.to_update().unwrap();
    assert_eq!(update.vehicle_details.as_deref(), Some("Van"));
    assert_eq!(update.address, None);
}

#[test]
fn owner_update_has_no_role_fields() {
    let update = ProfileForm::from_user(&user(Role::RestaurantOwner)).to_update().unwrap();
    assert_eq!(update.address, None);
    assert_eq!(update.vehicle_details, None);
}

#[test]
fn update_requires_name_and_email() {
    let mut form = ProfileForm::from_user(&user(Role::Customer));
    form.set(ProfileField::Name, "   ".to_owned());
    assert_eq!(form.to_update(), Err("Name and email are required."));
}

// =============================================================
// Loading and saving
// =============================================================

#[test]
fn finish_load_seeds_positions() {
    let mut state = ProfileState::default();
    state.begin_load();
    state.finish_load(Ok((user(Role::RestaurantOwner), vec![restaurant(1, Some(45.0)), restaurant(2, None)])));

    assert!(!state.loading);
    assert_eq!(state.position, Some(Coordinate::new(41.9, 12.5)));
    assert_eq!(state.restaurants[0].position, Coordinate::new(45.0, 10.0));
    assert_eq!(state.restaurants[1].position, DEFAULT_CENTER);
    assert_eq!(state.role(), Some(Role::RestaurantOwner));
}

#[test]
fn finish_load_failure_sets_message() {
    let mut state = ProfileState::default();
    state.begin_load();
    state.finish_load(Err(ApiError::Network));
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED));
    assert!(state.user.is_none());
}

#[test]
fn restaurant_update_carries_picked_position() {
    let mut state = ProfileState::default();
    state.finish_load(Ok((user(Role::RestaurantOwner), vec![restaurant(3, None)])));
    state.set_restaurant_position(3, Coordinate::new(52.37, 4.9));

    let update = state.restaurant_update(3).unwrap();
    assert_eq!(update.latitude, Some(52.37));
    assert_eq!(update.longitude, Some(4.9));
    assert_eq!(update.name, "R3");
    assert!(state.restaurant_update(99).is_none());
}

#[test]
fn save_messages_replace_each_other() {
    let mut state = ProfileState::default();
    state.begin_save();
    state.finish_save(Err(ApiError::Network), COORDINATES_SAVED.to_owned(), COORDINATES_SAVE_FAILED);
    assert_eq!(state.error.as_deref(), Some(COORDINATES_SAVE_FAILED));

    state.begin_save();
    assert!(state.error.is_none());
    state.finish_save(Ok(()), restaurant_saved_message(3), RESTAURANT_SAVE_FAILED);
    assert_eq!(state.success.as_deref(), Some("Restaurant 3 coordinates updated successfully."));
}
