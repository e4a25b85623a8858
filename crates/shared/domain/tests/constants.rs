use titanic_domain::constants::{SYSTEM_TAG, WELCOME_MESSAGE};

#[test]
fn constants_match_wire_strings() {
    assert_eq!(WELCOME_MESSAGE, "Welcome to the Titanic API");
    assert_eq!(SYSTEM_TAG, "system");
}
