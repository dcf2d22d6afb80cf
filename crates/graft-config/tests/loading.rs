//! Tests for layered option loading.

use std::fs;

use figment::Jail;
use graft_config::{ConfigDiscovery, ConfigError, ProcessorOptions, find_config};
use tempfile::TempDir;

#[test]
fn explicit_missing_file_is_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("nope.toml");

    let err = ProcessorOptions::load(Some(&missing)).unwrap_err();
    match err {
        ConfigError::NotFound { path } => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn discovery_finds_graft_toml() {
    let dir = TempDir::new().expect("tempdir");
    assert!(find_config(dir.path()).is_none());

    fs::write(dir.path().join("graft.toml"), "share_test_components = false\n")
        .expect("write config");

    assert_eq!(find_config(dir.path()), Some(dir.path().join("graft.toml")));
}

#[test]
fn discovery_load_requires_file() {
    let dir = TempDir::new().expect("tempdir");
    let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }));
}

#[test]
fn file_values_override_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "graft.toml",
            r#"
share_test_components = false

[settings]
log_level = "debug"
"#,
        )?;

        let options = ProcessorOptions::load(None).expect("load");
        assert!(!options.share_test_components);
        assert!(!options.disable_cross_compilation_root_validation);
        assert_eq!(options.settings.log_level.as_deref(), Some("debug"));
        Ok(())
    });
}

#[test]
fn environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("graft.toml", "share_test_components = false\n")?;
        jail.set_env("GRAFT_SHARE_TEST_COMPONENTS", "true");
        jail.set_env("GRAFT_SETTINGS__LOG_FORMAT", "full");

        let options = ProcessorOptions::load(None).expect("load");
        assert!(options.share_test_components);
        assert!(options.settings.wants_full_format());
        Ok(())
    });
}

#[test]
fn load_or_default_without_file_uses_defaults() {
    Jail::expect_with(|jail| {
        let options = ConfigDiscovery::new(jail.directory())
            .load_or_default()
            .expect("load");
        assert_eq!(options, ProcessorOptions::default());
        Ok(())
    });
}

#[test]
fn invalid_file_reports_configuration_field() {
    Jail::expect_with(|jail| {
        jail.create_file("graft.toml", "share_test_components = 3\n")?;

        let err = ProcessorOptions::load(None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "configuration"));
        Ok(())
    });
}
