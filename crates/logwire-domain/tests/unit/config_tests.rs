//! Configuration schema tests

use logwire_domain::LogConfiguration;
use logwire_domain::constants::{BYTES_PER_MEGABYTE, DEFAULT_MAX_SIZE_MB};
use std::time::Duration;

#[test]
fn test_documented_keys() {
    let config: LogConfiguration = serde_json::from_str(
        r#"{
            "outputDirectory": "/var/log/app/",
            "level": "warn",
            "maxSizeMB": 10,
            "maxBackups": 3,
            "maxAgeDays": 7,
            "compressRotated": true,
            "splitErrorFile": true,
            "formatter": "json",
            "environment": "prod",
            "reportCaller": true
        }"#,
    )
    .unwrap();

    assert_eq!(config.output_directory, "/var/log/app/");
    assert_eq!(config.level, "warn");
    assert_eq!(config.max_size_mb, 10);
    assert_eq!(config.max_backups, 3);
    assert_eq!(config.max_age_days, 7);
    assert!(config.compress_rotated);
    assert!(config.split_error_file);
    assert_eq!(config.formatter, "json");
    assert_eq!(config.environment, "prod");
    assert!(config.report_caller);
}

#[test]
fn test_legacy_key_aliases() {
    let config: LogConfiguration = serde_json::from_str(
        r#"{
            "path": "logs/",
            "maxSizeInMb": 5,
            "maxAgeInDays": 2,
            "gZipCompress": true,
            "isDifferentErrorFile": true,
            "env": "LOCAL",
            "shouldSetCaller": true
        }"#,
    )
    .unwrap();

    assert_eq!(config.output_directory, "logs/");
    assert_eq!(config.max_size_mb, 5);
    assert_eq!(config.max_age_days, 2);
    assert!(config.compress_rotated);
    assert!(config.split_error_file);
    assert!(config.is_development());
    assert!(config.report_caller);
}

#[test]
fn test_missing_and_unknown_keys() {
    let config: LogConfiguration =
        serde_json::from_str(r#"{ "level": "info", "sampling": 0.5 }"#).unwrap();
    assert_eq!(
        config,
        LogConfiguration {
            level: "info".to_string(),
            ..LogConfiguration::default()
        }
    );
}

#[test]
fn test_null_values_read_as_missing() {
    let config: LogConfiguration = serde_json::from_str(
        r#"{
            "outputDirectory": "/x/",
            "level": "error",
            "formatter": null,
            "maxSizeMB": null,
            "splitErrorFile": null,
            "env": null
        }"#,
    )
    .unwrap();

    assert_eq!(config.output_directory, "/x/");
    assert_eq!(config.level, "error");
    assert_eq!(config.formatter, "");
    assert_eq!(config.max_size_mb, 0);
    assert!(!config.split_error_file);
    assert_eq!(config.environment, "");
}

#[test]
fn test_is_development() {
    let mut config = LogConfiguration::default();
    for env in ["dev", "DEV", "Local", "local"] {
        config.environment = env.to_string();
        assert!(config.is_development(), "{env}");
    }
    for env in ["", "prod", "development", "staging"] {
        config.environment = env.to_string();
        assert!(!config.is_development(), "{env}");
    }
}

#[test]
fn test_rotation_policy_interpretation() {
    let config = LogConfiguration {
        max_size_mb: 10,
        max_backups: 4,
        max_age_days: 3,
        compress_rotated: true,
        ..LogConfiguration::default()
    };
    let rotation = config.rotation();
    assert_eq!(rotation.max_bytes(), 10 * BYTES_PER_MEGABYTE);
    assert_eq!(rotation.backup_limit(), Some(4));
    assert_eq!(rotation.max_age(), Some(Duration::from_secs(3 * 86_400)));
    assert!(rotation.compress);

    let zero = LogConfiguration::default().rotation();
    assert_eq!(zero.max_bytes(), DEFAULT_MAX_SIZE_MB * BYTES_PER_MEGABYTE);
    assert_eq!(zero.backup_limit(), None);
    assert_eq!(zero.max_age(), None);

    let negative = LogConfiguration {
        max_size_mb: -1,
        max_backups: -2,
        max_age_days: -3,
        ..LogConfiguration::default()
    }
    .rotation();
    assert_eq!(negative.max_bytes(), DEFAULT_MAX_SIZE_MB * BYTES_PER_MEGABYTE);
    assert_eq!(negative.backup_limit(), None);
    assert_eq!(negative.max_age(), None);
}
