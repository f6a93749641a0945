use super::*;

#[test]
fn save_label_switches_while_loading() {
    assert_eq!(save_label(false, "Save Details"), "Save Details");
    assert_eq!(save_label(true, "Save Details"), "Saving...");
}

#[test]
fn restaurant_save_label_names_restaurant() {
    assert_eq!(restaurant_save_label("Luigi's"), "Save Coordinates for Luigi's");
}

#[test]
fn details_heading_shows_wire_role() {
    assert_eq!(details_heading(Role::DeliveryPerson), "Personal Details (DELIVERY_PERSON)");
}
