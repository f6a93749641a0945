use super::*;

fn filled() -> RegisterForm {
    RegisterForm {
        email: " new@example.com ".to_owned(),
        password: "pw".to_owned(),
        name: " Sam ".to_owned(),
        ..RegisterForm::default()
    }
}

#[test]
fn default_role_is_customer() {
    assert_eq!(RegisterForm::default().role, Role::Customer);
}

#[test]
fn blank_optionals_are_omitted() {
    let request = validate_register_input(&filled()).unwrap();
    assert_eq!(request.email, "new@example.com");
    assert_eq!(request.name, "Sam");
    assert_eq!(request.address, None);
    assert_eq!(request.phone, None);
}

#[test]
fn filled_optionals_are_trimmed() {
    let form = RegisterForm { address: " 2 Elm ".to_owned(), phone: "555".to_owned(), role: Role::DeliveryPerson, ..filled() };
    let request = validate_register_input(&form).unwrap();
    assert_eq!(request.address.as_deref(), Some("2 Elm"));
    assert_eq!(request.phone.as_deref(), Some("555"));
    assert_eq!(request.role, Role::DeliveryPerson);
}

#[test]
fn missing_required_field_is_rejected() {
    let form = RegisterForm { name: "  ".to_owned(), ..filled() };
    assert_eq!(validate_register_input(&form), Err("Email, password, and name are required."));
}

#[test]
fn error_message_prefers_backend_text() {
    assert_eq!(register_error_message(&ApiError::Server("Email already in use".to_owned())), "Email already in use");
    assert_eq!(register_error_message(&ApiError::Network), "Network error");
    assert_eq!(register_error_message(&ApiError::Server(String::new())), REGISTER_FAILED);
}
