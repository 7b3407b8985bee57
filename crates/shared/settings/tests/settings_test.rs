//! Integration tests for loading settings from an environment source.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use settings::{resolve_model_path, ConfigError, Settings, ENV_VARS};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// Model Path Scenarios
// =============================================================================

#[test]
fn test_model_path_scenarios() {
    let base = Path::new("/app");
    let default = Path::new("ml_models/combined.joblib");

    let cases = [
        (None, "/app/ml_models/combined.joblib"),
        (Some("/custom/model.joblib"), "/custom/model.joblib"),
        (Some("models/v2.joblib"), "/app/models/v2.joblib"),
    ];

    for (override_value, expected) in cases {
        let resolved = resolve_model_path(base, default, override_value);
        assert_eq!(resolved, PathBuf::from(expected));
        assert!(resolved.is_absolute());
    }
}

#[test]
fn test_loaded_model_path_exists_check() {
    let dir = tempfile::tempdir().unwrap();
    let models = dir.path().join("ml_models");
    std::fs::create_dir_all(&models).unwrap();

    let base = dir.path().to_string_lossy().to_string();
    let settings = Settings::from_source(&env(&[("APP_BASE_DIR", base.as_str())])).unwrap();
    assert_eq!(settings.model.path(), models.join("combined.joblib"));
    assert!(!settings.model.exists());

    std::fs::write(models.join("combined.joblib"), b"model").unwrap();
    assert!(settings.model.exists());
}

#[test]
fn test_resolution_does_not_touch_filesystem() {
    let settings = Settings::from_source(&env(&[
        ("APP_BASE_DIR", "/definitely/not/here"),
        ("MODEL_PATH", "../elsewhere/model.joblib"),
    ]))
    .unwrap();

    assert_eq!(
        settings.model.path(),
        Path::new("/definitely/not/elsewhere/model.joblib")
    );
    assert!(!settings.model.exists());
}

// =============================================================================
// Whole Settings
// =============================================================================

#[test]
fn test_loading_is_deterministic() {
    let source = env(&[("DB_HOST", "db"), ("MODEL_PATH", "models/v2.joblib")]);
    let first = Settings::from_source(&source).unwrap();
    let second = Settings::from_source(&source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_show_output_shape() {
    let settings = Settings::from_source(&env(&[("APP_BASE_DIR", "/app")])).unwrap();
    let json = serde_json::to_value(&settings).unwrap();

    assert_eq!(json["api"]["title"], "Weather Prediction API");
    assert_eq!(json["api"]["version"], "2.0.0");
    assert_eq!(json["server"]["host"], "0.0.0.0");
    assert_eq!(json["server"]["port"], 8000);
    assert_eq!(json["email"]["username"], serde_json::Value::Null);
    assert_eq!(json["model"]["path"], "/app/ml_models/combined.joblib");
    assert_eq!(json["cors"]["origins"], serde_json::json!(["*"]));
    assert_eq!(json["cors"]["allow_credentials"], true);
}

#[test]
fn test_error_messages_name_the_variable() {
    let err = Settings::from_source(&env(&[("EMAIL_PORT", "smtp")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(err.to_string().contains("EMAIL_PORT"));
}

#[test]
fn test_env_table_covers_model_path() {
    assert!(ENV_VARS.iter().any(|var| var.name == "MODEL_PATH"));
    assert!(ENV_VARS
        .iter()
        .filter(|var| var.secret)
        .all(|var| var.name.ends_with("PASSWORD")));
}
