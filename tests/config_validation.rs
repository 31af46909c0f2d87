#![allow(clippy::expect_used)]
//! Integration tests for configuration validation

use datagram_protocol::config::{CodecConfig, LoggingConfig, ProtocolConfig, MAX_BODY_LEN};
use datagram_protocol::FrameCodec;
use tracing::Level;

#[test]
fn test_default_config_validates() {
    let config = ProtocolConfig::default();
    let errors = config.validate();
    assert!(
        errors.is_empty(),
        "Default config should be valid, but got errors: {:?}",
        errors
    );
}

#[test]
fn test_zero_max_body_len() {
    let mut config = ProtocolConfig::default();
    config.codec.max_body_len = 0;

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("cannot be 0")));
}

#[test]
fn test_max_body_len_over_length_field() {
    let mut config = ProtocolConfig::default();
    config.codec.max_body_len = u32::MAX as usize + 1;

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors
        .iter()
        .any(|e| e.contains("does not fit the 4-byte length field")));
}

#[test]
fn test_empty_default_charset() {
    let mut config = ProtocolConfig::default();
    config.codec.default_charset = String::new();

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_default_charset_wider_than_field() {
    let mut config = ProtocolConfig::default();
    config.codec.default_charset = String::from("ISO-8859-15");

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("too long")));
}

#[test]
fn test_empty_app_name() {
    let mut config = ProtocolConfig::default();
    config.logging.app_name = String::new();

    let errors = config.validate();
    assert!(!errors.is_empty());
    assert!(errors.iter().any(|e| e.contains("cannot be empty")));
}

#[test]
fn test_validate_strict_aggregates_errors() {
    let mut config = ProtocolConfig::default();
    config.codec.max_body_len = 0;
    config.logging.app_name = String::new();

    let err = config
        .validate_strict()
        .expect_err("Should fail validation");
    let msg = err.to_string();
    assert!(msg.contains("cannot be 0"));
    assert!(msg.contains("cannot be empty"));
}

#[test]
fn test_toml_roundtrip() {
    let config = ProtocolConfig::default_with_overrides(|c| {
        c.codec.max_body_len = 4096;
        c.codec.default_charset = String::from("ASCII");
        c.logging.log_level = Level::DEBUG;
        c.logging.json_format = true;
    });

    let toml = toml::to_string_pretty(&config).expect("serialize");
    let parsed = ProtocolConfig::from_toml(&toml).expect("parse");

    assert_eq!(parsed.codec.max_body_len, 4096);
    assert_eq!(parsed.codec.default_charset, "ASCII");
    assert_eq!(parsed.logging.log_level, Level::DEBUG);
    assert!(parsed.logging.json_format);
}

#[test]
fn test_partial_toml_uses_section_defaults() {
    let parsed = ProtocolConfig::from_toml("[codec]\nmax_body_len = 1024\ndefault_charset = \"UTF-8\"\n")
        .expect("parse");

    assert_eq!(parsed.codec.max_body_len, 1024);
    assert_eq!(parsed.logging.log_level, Level::INFO);
}

#[test]
fn test_invalid_toml_is_a_config_error() {
    let result = ProtocolConfig::from_toml("codec = not valid toml");
    assert!(result.is_err());
}

#[test]
fn test_example_config_parses_back() {
    let example = ProtocolConfig::example_config();
    let parsed = ProtocolConfig::from_toml(&example).expect("example config should parse");
    assert_eq!(parsed.codec.max_body_len, MAX_BODY_LEN);
}

#[test]
fn test_config_file_roundtrip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("protocol.toml");

    let config = ProtocolConfig::default_with_overrides(|c| {
        c.codec.max_body_len = 2048;
    });
    config.save_to_file(&path).expect("save");

    let loaded = ProtocolConfig::from_file(&path).expect("load");
    assert_eq!(loaded.codec.max_body_len, 2048);
}

#[test]
fn test_codec_picks_up_configured_ceiling() {
    let config = CodecConfig {
        max_body_len: 512,
        default_charset: String::from("UTF-8"),
    };
    let codec = FrameCodec::from_config(&config);
    assert_eq!(codec.max_body_len(), 512);

    let body = vec![0u8; 513];
    assert!(codec.encode(1, 1, "UTF-8", &[0u8; 40], &body).is_err());
}

#[test]
fn test_logging_config_defaults() {
    let logging = LoggingConfig::default();
    assert_eq!(logging.log_level, Level::INFO);
    assert!(logging.log_to_console);
    assert!(!logging.json_format);
}
