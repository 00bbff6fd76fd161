use crate::LoggingConfig;

#[test]
fn test_default_logging_is_valid() {
    assert!(LoggingConfig::default().validate().is_ok());
}

#[test]
fn test_log_file_with_path_rejected() {
    let config = LoggingConfig {
        file: Some("../escape.log".into()),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}
