use crate::error::CliError;
use crate::state_file::{load_state, schema_output, state_output};

use a0_provider::DesiredState;
use tempfile::TempDir;

#[test]
fn test_load_toml_state() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("alice.toml");
    std::fs::write(
        &path,
        r#"
            conn = "db"
            email = "a@x.com"
            email_verified = true

            [app_metadata]
            plan = "free"
        "#,
    )
    .unwrap();

    let state = load_state(&path).unwrap();

    assert_eq!(state.conn, "db");
    assert_eq!(state.email.as_deref(), Some("a@x.com"));
    assert_eq!(state.email_verified, Some(true));
    assert_eq!(state.app_metadata.unwrap()["plan"], "free");
}

#[test]
fn test_load_json_state() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("alice.JSON");
    std::fs::write(&path, r#"{ "conn": "db", "phone_number": "+15555550100" }"#).unwrap();

    let state = load_state(&path).unwrap();

    assert_eq!(state.phone_number.as_deref(), Some("+15555550100"));
}

#[test]
fn test_load_missing_file_names_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = load_state(&path).unwrap_err();

    assert!(matches!(err, CliError::StateFile { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_load_rejects_unknown_attribute() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    std::fs::write(&path, "conn = \"db\"\nnickname = \"al\"\n").unwrap();

    assert!(load_state(&path).is_err());
}

#[test]
fn test_state_output_masks_password() {
    let state = DesiredState {
        password: Some("hunter2!".into()),
        email: Some("a@x.com".into()),
        ..DesiredState::new("db")
    };

    let value = state_output(&state).unwrap();

    assert_eq!(value["password"], "(sensitive)");
    assert_eq!(value["email"], "a@x.com");
    assert_eq!(value["conn"], "db");
}

#[test]
fn test_state_output_omits_unset_password() {
    let value = state_output(&DesiredState::new("db")).unwrap();

    assert!(value.get("password").is_none());
}

#[test]
fn test_printed_state_loads_back_as_state_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("created.json");
    let refreshed = DesiredState {
        user_id: Some("auth0|1".into()),
        email: Some("a@x.com".into()),
        ..DesiredState::new("db")
    };
    std::fs::write(&path, state_output(&refreshed).unwrap().to_string()).unwrap();

    let state = load_state(&path).unwrap();

    assert_eq!(state, refreshed);
}

#[test]
fn test_schema_output_for_user() {
    let value = schema_output("auth0_user").unwrap();

    let attributes = value.as_array().unwrap();
    assert_eq!(attributes.len(), 11);
    assert_eq!(attributes[1]["name"], "conn");
    assert_eq!(attributes[1]["required"], true);
}

#[test]
fn test_schema_output_rejects_unknown_resource_type() {
    let err = schema_output("auth0_role").unwrap_err();

    assert!(matches!(err, CliError::UnknownResourceType { .. }));
    assert!(err.to_string().contains("auth0_role"));
}
