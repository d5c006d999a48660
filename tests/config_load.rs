use gdp_dash::config::{Config, generate_default_config};
use gdp_dash::error::DashError;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn empty_file_gives_defaults() {
    let c = Config::from_toml("").unwrap();
    assert_eq!(c.data.gdp_path, PathBuf::from("data/gdp_data.csv"));
    assert_eq!(
        c.data.schedule_path,
        PathBuf::from("assets/leman_bicer_schedule.html")
    );
    assert_eq!(c.display.locale, "en");
    assert_eq!(
        c.display.default_countries,
        vec!["DEU", "FRA", "GBR", "BRA", "MEX", "JPN"]
    );
    assert_eq!(c.display.metric_columns, 4);
    assert_eq!(c.cache.ttl(), None);
}

#[test]
fn generated_default_config_parses() {
    let c = Config::from_toml(&generate_default_config()).unwrap();
    assert_eq!(c.display.metric_columns, 4);
    assert_eq!(c.display.default_countries.len(), 6);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let c = Config::from_toml(
        r#"
        [display]
        locale = "de"

        [cache]
        ttl_secs = 60
        "#,
    )
    .unwrap();
    assert_eq!(c.display.locale, "de");
    assert_eq!(c.display.metric_columns, 4);
    assert_eq!(c.cache.ttl(), Some(Duration::from_secs(60)));
    assert_eq!(c.data.gdp_path, PathBuf::from("data/gdp_data.csv"));
}

#[test]
fn env_overrides_apply() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("GDP_DASH_DATA", "/tmp/gdp.csv"),
        ("GDP_DASH_LOCALE", "fr"),
        ("GDP_DASH_CACHE_TTL", "3600"),
    ]);
    let mut c = Config::default();
    c.apply_env_overrides(|k| env.get(k).map(|v| v.to_string()));

    assert_eq!(c.data.gdp_path, PathBuf::from("/tmp/gdp.csv"));
    assert_eq!(
        c.data.schedule_path,
        PathBuf::from("assets/leman_bicer_schedule.html")
    );
    assert_eq!(c.display.locale, "fr");
    assert_eq!(c.cache.ttl_secs, Some(3600));
}

#[test]
fn bad_ttl_override_is_ignored() {
    let mut c = Config::default();
    c.apply_env_overrides(|k| (k == "GDP_DASH_CACHE_TTL").then(|| "soon".to_string()));
    assert_eq!(c.cache.ttl_secs, None);
}

#[test]
fn load_reports_missing_and_malformed_files() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, DashError::NotFound { .. }));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[display\nlocale = 1").unwrap();
    let err = Config::load(&bad).unwrap_err();
    assert!(matches!(err, DashError::Config { .. }), "got {err:?}");
}
