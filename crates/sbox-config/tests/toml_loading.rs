//! Integration tests for TOML and environment configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use sbox_config::{ConfigError, SboxConfig};

fn jailed_figment() -> Figment {
    Figment::from(Serialized::defaults(SboxConfig::default()))
        .merge(Toml::file("config.toml"))
        .merge(Env::prefixed("SBOX_").split("__"))
}

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
path = "/tmp/box.json"
canonical_key = "campus_suggestions"
legacy_pattern = "idea"

[feed]
public_limit = 10
max_chars = 280

[admin]
session_ttl_hours = 8
"#,
        )?;

        let config = SboxConfig::from_figment(&jailed_figment()).expect("config loads");
        assert_eq!(config.storage.path, "/tmp/box.json");
        assert_eq!(config.storage.canonical_key, "campus_suggestions");
        assert_eq!(config.storage.legacy_pattern, "idea");
        assert_eq!(config.feed.public_limit, 10);
        assert_eq!(config.feed.max_chars, 280);
        assert_eq!(config.admin.session_ttl_hours, 8);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[feed]
public_limit = 3
",
        )?;

        let config = SboxConfig::from_figment(&jailed_figment()).expect("config loads");
        assert_eq!(config.feed.public_limit, 3);
        assert_eq!(config.feed.max_chars, 500);
        assert_eq!(config.storage.canonical_key, "muni_suggestions_v1");
        assert_eq!(config.admin.session_ttl_hours, 24);
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[storage]
path = "from-toml.json"
"#,
        )?;
        jail.set_env("SBOX_STORAGE__PATH", "from-env.json");
        jail.set_env("SBOX_ADMIN__SESSION_TTL_HOURS", "2");

        let config = SboxConfig::from_figment(&jailed_figment()).expect("config loads");
        assert_eq!(config.storage.path, "from-env.json");
        assert_eq!(config.admin.session_ttl_hours, 2);
        Ok(())
    });
}

#[test]
fn invalid_values_are_reported_by_field() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[feed]
public_limit = 0
",
        )?;

        let err = SboxConfig::from_figment(&jailed_figment()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref field, .. } if field == "feed.public_limit"
        ));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[feed\npublic_limit = ")?;

        let err = SboxConfig::from_figment(&jailed_figment()).unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn default_figment_reads_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".sbox")?;
        jail.create_file(
            ".sbox/config.toml",
            r#"
[storage]
canonical_key = "project_suggestions"
"#,
        )?;

        let config = SboxConfig::load().expect("config loads");
        assert_eq!(config.storage.canonical_key, "project_suggestions");
        Ok(())
    });
}
