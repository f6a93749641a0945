//! Wire types for the marketplace REST API.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON with SCREAMING_SNAKE_CASE roles.
//! Restaurant records keep any fields this client does not model so an
//! update can send the full record back unchanged.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::coords::{Coordinate, DEFAULT_CENTER};

/// Account role assigned at registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Customer,
    RestaurantOwner,
    DeliveryPerson,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Customer, Role::RestaurantOwner, Role::DeliveryPerson, Role::Admin];

    /// Wire value, also used as the `<select>` option value.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::RestaurantOwner => "RESTAURANT_OWNER",
            Role::DeliveryPerson => "DELIVERY_PERSON",
            Role::Admin => "ADMIN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::RestaurantOwner => "Restaurant Owner",
            Role::DeliveryPerson => "Delivery Person",
            Role::Admin => "Admin",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_str() == raw)
    }

    /// Customers and couriers pin their own location; owners pin restaurants.
    pub fn has_personal_location(self) -> bool {
        matches!(self, Role::Customer | Role::DeliveryPerson)
    }
}

/// The signed-in account as returned by `/users/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub vehicle_details: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl User {
    /// Saved location, if the backend holds a valid one.
    pub fn coordinates(&self) -> Option<Coordinate> {
        stored_coordinates(self.latitude, self.longitude)
    }
}

/// A restaurant record owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub restaurant_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cuisine_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Restaurant {
    pub fn coordinates(&self) -> Option<Coordinate> {
        stored_coordinates(self.latitude, self.longitude)
    }

    /// Copy of this record with the location replaced.
    #[must_use]
    pub fn with_coordinates(&self, position: Coordinate) -> Self {
        Self { latitude: Some(position.lat), longitude: Some(position.lon), ..self.clone() }
    }
}

fn stored_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Option<Coordinate> {
    Coordinate::from_pair(&[latitude?, longitude?])
}

/// Initial picker position for a stored location.
pub fn picker_seed(stored: Option<Coordinate>) -> Coordinate {
    stored.unwrap_or(DEFAULT_CENTER)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "jwt", alias = "accessToken")]
    pub token: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CoordinatesUpdate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinate> for CoordinatesUpdate {
    fn from(value: Coordinate) -> Self {
        Self { latitude: value.lat, longitude: value.lon }
    }
}

/// Body for `PUT /users/me`; role-specific fields are omitted when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_details: Option<String>,
}
