/*!
 * Tests for application configuration
 */

use subtrans::app_config::{Config, LogLevel};
use subtrans::errors::PipelineError;
use crate::common;

#[test]
fn test_defaultConfig_shouldMatchReferenceTunables() {
    let config = Config::default();

    assert_eq!(config.target_language, "Yoruba");
    assert_eq!(config.batch_size, 40);
    assert_eq!(config.delimiter, "\n\n");
    assert_eq!(config.provider.model, "gpt-4-turbo");
    assert_eq!(config.provider.timeout_secs, 120);
    assert!(config.provider.api_key.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_defaultConfig_shouldValidate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_withZeroBatchSize_shouldFail() {
    let mut config = Config::default();
    config.batch_size = 0;

    assert!(matches!(
        config.validate(),
        Err(PipelineError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_validate_withEmptyDelimiter_shouldFail() {
    let mut config = Config::default();
    config.delimiter = String::new();

    assert!(matches!(
        config.validate(),
        Err(PipelineError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_validate_withBlankTargetLanguage_shouldFail() {
    let mut config = Config::default();
    config.target_language = "  ".to_string();

    assert!(matches!(
        config.validate(),
        Err(PipelineError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_saveAndLoad_shouldRoundTrip() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.target_language = "Fon".to_string();
    config.batch_size = 12;
    config.save_to_file(&path).unwrap();

    let loaded = Config::from_file(&path).unwrap();
    assert_eq!(loaded.target_language, "Fon");
    assert_eq!(loaded.batch_size, 12);
    assert_eq!(loaded.delimiter, "\n\n");
}

#[test]
fn test_loadOrCreate_withMissingFile_shouldCreateDefault() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.batch_size, 40);
}

#[test]
fn test_fromFile_withPartialJson_shouldFillDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let path =
        common::create_test_file(&dir, "conf.json", r#"{"target_language": "Fon"}"#).unwrap();

    let config = Config::from_file(&path).unwrap();

    assert_eq!(config.target_language, "Fon");
    assert_eq!(config.batch_size, 40);
    assert_eq!(config.provider.model, "gpt-4-turbo");
}

#[test]
fn test_fromFile_withInvalidJson_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let path = common::create_test_file(&dir, "conf.json", "{ not json").unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_logLevel_toLevelFilter_shouldMap() {
    assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
