//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed working directory and env var changes.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use sentio_config::{MatchMode, NeutralConfidence, SentioConfig};

fn isolate_user_config(jail: &mut Jail) {
    let xdg = jail.directory().join("xdg").display().to_string();
    jail.set_env("XDG_CONFIG_HOME", xdg);
}

#[test]
fn loads_engine_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[engine]
latency_ms = 0
neutral_confidence = "fixed"
match_mode = "whole_token"
"#,
        )?;

        let config: SentioConfig = Figment::from(Serialized::defaults(SentioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.engine.latency_ms, 0);
        assert_eq!(config.engine.neutral_confidence, NeutralConfidence::Fixed);
        assert_eq!(config.engine.match_mode, MatchMode::WholeToken);
        Ok(())
    });
}

#[test]
fn partial_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r"
[report]
top_keywords = 3
",
        )?;

        let config: SentioConfig = Figment::from(Serialized::defaults(SentioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.report.top_keywords, 3);
        assert_eq!(config.report.cloud_max_words, 50);
        assert_eq!(config.engine.latency_ms, 1500);
        assert_eq!(config.general.default_format, "json");
        Ok(())
    });
}

#[test]
fn project_local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(".sentio")).expect("mkdir");
        jail.create_file(
            ".sentio/config.toml",
            r"
[report]
cloud_max_words = 20
",
        )?;

        let config = SentioConfig::load().expect("config loads");
        assert_eq!(config.report.cloud_max_words, 20);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        std::fs::create_dir_all(jail.directory().join(".sentio")).expect("mkdir");
        jail.create_file(".sentio/config.toml", "[engine]\nlatency_ms = 10\n")?;
        jail.create_file("override.toml", "[engine]\nlatency_ms = 20\n")?;

        let config = SentioConfig::load_from(Some(std::path::Path::new("override.toml")))
            .expect("config loads");
        assert_eq!(config.engine.latency_ms, 20);
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file("bad.toml", "[report]\ntop_keywords = 0\n")?;

        let result = SentioConfig::load_from(Some(std::path::Path::new("bad.toml")));
        assert!(result.is_err(), "top_keywords = 0 should be rejected");
        Ok(())
    });
}

#[test]
fn unknown_enum_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        isolate_user_config(jail);
        jail.create_file("bad.toml", "[engine]\nmatch_mode = \"fuzzy\"\n")?;

        let err = SentioConfig::load_from(Some(std::path::Path::new("bad.toml")))
            .expect_err("fuzzy is not a match mode");
        assert!(matches!(err, sentio_config::ConfigError::Figment(_)));
        Ok(())
    });
}
