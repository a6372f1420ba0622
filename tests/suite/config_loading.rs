//! Config files feeding the UI options.

use std::fs;

use syllabus_config::{ConfigError, SyllabusConfig};
use syllabus_types::ui::UiOptions;

#[test]
fn config_file_selects_ui_options_and_log_filter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[app]
ascii_only = true
high_contrast = true

[logging]
filter = "syllabus_core=debug"
"#,
    )
    .unwrap();

    let config = SyllabusConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(
        config.ui_options(),
        UiOptions {
            ascii_only: true,
            high_contrast: true
        }
    );
    assert_eq!(config.log_filter(), Some("syllabus_core=debug"));
}

#[test]
fn partial_app_section_defaults_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[app]\nhigh_contrast = true\n").unwrap();

    let options = SyllabusConfig::load_from(&path)
        .unwrap()
        .unwrap()
        .ui_options();
    assert!(options.high_contrast);
    assert!(!options.ascii_only);
}

#[test]
fn unreadable_config_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists at the path but cannot be read as a file.
    let path = dir.path().join("config.toml");
    fs::create_dir(&path).unwrap();

    let err = SyllabusConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("config.toml"));
}
