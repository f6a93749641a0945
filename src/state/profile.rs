//! Profile page state: personal details, own location, owned restaurants.
//!
//! DESIGN
//! ======
//! Role-specific fields live in `ProfileDetails`, a variant per role that
//! carries only what that role can edit. The request body is derived from
//! it, so a courier never sends an address and a customer never sends
//! vehicle details.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use crate::net::api::ApiError;
use crate::net::types::{ProfileUpdate, Restaurant, Role, User, picker_seed};
use crate::util::coords::Coordinate;

pub const LOAD_FAILED: &str = "Failed to load profile data. Please try again.";
pub const PROFILE_SAVED: &str = "Profile updated successfully.";
pub const PROFILE_SAVE_FAILED: &str = "Failed to update profile. Please try again.";
pub const COORDINATES_SAVED: &str = "Coordinates updated successfully.";
pub const COORDINATES_SAVE_FAILED: &str = "Failed to update coordinates. Please try again.";
pub const RESTAURANT_SAVE_FAILED: &str = "Failed to update restaurant coordinates. Please try again.";

/// Editable fields that depend on the account role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileDetails {
    Customer { address: String },
    DeliveryPerson { vehicle_details: String },
    RestaurantOwner,
    Admin,
}

impl ProfileDetails {
    pub fn for_user(user: &User) -> Self {
        match user.role {
            Role::Customer => ProfileDetails::Customer { address: user.address.clone().unwrap_or_default() },
            Role::DeliveryPerson => {
                ProfileDetails::DeliveryPerson { vehicle_details: user.vehicle_details.clone().unwrap_or_default() }
            }
            Role::RestaurantOwner => ProfileDetails::RestaurantOwner,
            Role::Admin => ProfileDetails::Admin,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            ProfileDetails::Customer { .. } => Role::Customer,
            ProfileDetails::DeliveryPerson { .. } => Role::DeliveryPerson,
            ProfileDetails::RestaurantOwner => Role::RestaurantOwner,
            ProfileDetails::Admin => Role::Admin,
        }
    }
}

/// Input field identifiers for `ProfileForm::set`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Address,
    VehicleDetails,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub details: Option<ProfileDetails>,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            details: Some(ProfileDetails::for_user(user)),
        }
    }

    pub fn address(&self) -> Option<&str> {
        match &self.details {
            Some(ProfileDetails::Customer { address }) => Some(address),
            _ => None,
        }
    }

    pub fn vehicle_details(&self) -> Option<&str> {
        match &self.details {
            Some(ProfileDetails::DeliveryPerson { vehicle_details }) => Some(vehicle_details),
            _ => None,
        }
    }

    /// Update one field. Fields the current role does not own are ignored.
    pub fn set(&mut self, field: ProfileField, value: String) {
        match (field, &mut self.details) {
            (ProfileField::Name, _) => self.name = value,
            (ProfileField::Email, _) => self.email = value,
            (ProfileField::Phone, _) => self.phone = value,
            (ProfileField::Address, Some(ProfileDetails::Customer { address })) => *address = value,
            (ProfileField::VehicleDetails, Some(ProfileDetails::DeliveryPerson { vehicle_details })) => {
                *vehicle_details = value;
            }
            _ => {}
        }
    }

    /// Validate required fields and build the request body.
    pub fn to_update(&self) -> Result<ProfileUpdate, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err("Name and email are required.");
        }
        let (address, vehicle_details) = match &self.details {
            Some(ProfileDetails::Customer { address }) => (Some(address.trim().to_owned()), None),
            Some(ProfileDetails::DeliveryPerson { vehicle_details }) => (None, Some(vehicle_details.trim().to_owned())),
            _ => (None, None),
        };
        Ok(ProfileUpdate {
            name: name.to_owned(),
            email: email.to_owned(),
            phone: self.phone.trim().to_owned(),
            address,
            vehicle_details,
        })
    }
}

/// A restaurant with the location currently chosen in its picker.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedRestaurant {
    pub record: Restaurant,
    pub position: Coordinate,
}

impl OwnedRestaurant {
    pub fn new(record: Restaurant) -> Self {
        let position = picker_seed(record.coordinates());
        Self { record, position }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileState {
    pub user: Option<User>,
    pub form: ProfileForm,
    pub position: Option<Coordinate>,
    pub restaurants: Vec<OwnedRestaurant>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl ProfileState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<(User, Vec<Restaurant>), ApiError>) {
        self.loading = false;
        match result {
            Ok((user, restaurants)) => {
                self.form = ProfileForm::from_user(&user);
                self.position = Some(picker_seed(user.coordinates()));
                self.restaurants = restaurants.into_iter().map(OwnedRestaurant::new).collect();
                self.user = Some(user);
            }
            Err(_) => self.error = Some(LOAD_FAILED.to_owned()),
        }
    }

    pub fn set_position(&mut self, position: Coordinate) {
        self.position = Some(position);
    }

    pub fn set_restaurant_position(&mut self, restaurant_id: i64, position: Coordinate) {
        if let Some(entry) = self.restaurants.iter_mut().find(|r| r.record.restaurant_id == restaurant_id) {
            entry.position = position;
        }
    }

    /// Full record to send when saving a restaurant's location.
    pub fn restaurant_update(&self, restaurant_id: i64) -> Option<Restaurant> {
        self.restaurants
            .iter()
            .find(|r| r.record.restaurant_id == restaurant_id)
            .map(|r| r.record.with_coordinates(r.position))
    }

    pub fn begin_save(&mut self) {
        self.loading = true;
        self.error = None;
        self.success = None;
    }

    pub fn finish_save(&mut self, result: Result<(), ApiError>, saved: String, failed: &str) {
        self.loading = false;
        match result {
            Ok(()) => self.success = Some(saved),
            Err(_) => self.error = Some(failed.to_owned()),
        }
    }

    /// Record a successful restaurant save so the stored copy matches.
    pub fn commit_restaurant(&mut self, updated: Restaurant) {
        if let Some(entry) = self.restaurants.iter_mut().find(|r| r.record.restaurant_id == updated.restaurant_id) {
            entry.record = updated;
        }
    }
}

pub fn restaurant_saved_message(restaurant_id: i64) -> String {
    format!("Restaurant {restaurant_id} coordinates updated successfully.")
}
