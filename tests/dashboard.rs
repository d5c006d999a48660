use gdp_dash::dashboard::{EMPTY_SELECTION_WARNING, Rendered, Selection};
use gdp_dash::error::DashError;
use gdp_dash::models::{DeltaColor, View, YearRange};
use gdp_dash::schedule::decode_preview_url;
use gdp_dash::{Config, Dashboard};
use std::fs;
use std::path::Path;

fn write_inputs(dir: &Path) -> Config {
    let mut csv = String::from("Country Name,Country Code");
    for y in 1960..=2022 {
        csv.push_str(&format!(",{y}"));
    }
    csv.push('\n');
    for (name, code) in [("Germany", "DEU"), ("Chile", "CHL"), ("Japan", "JPN")] {
        csv.push_str(&format!("{name},{code}"));
        for y in 1960..=2022 {
            // Chile has no data before 1970
            if code == "CHL" && y < 1970 {
                csv.push(',');
            } else {
                csv.push_str(&format!(",{}", (y - 1959) as f64 * 1e9));
            }
        }
        csv.push('\n');
    }

    let mut config = Config::default();
    config.data.gdp_path = dir.join("gdp_data.csv");
    config.data.schedule_path = dir.join("schedule.html");
    fs::write(&config.data.gdp_path, csv).unwrap();
    fs::write(&config.data.schedule_path, "<h1>Ders Programı</h1>").unwrap();
    config
}

#[test]
fn default_render_uses_full_range_and_present_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let mut dash = Dashboard::new(write_inputs(dir.path()));

    let Rendered::Gdp(view) = dash.render(View::Dashboard, &Selection::default()).unwrap() else {
        panic!("expected the GDP view");
    };
    assert_eq!(view.bounds, YearRange::new(1960, 2022));
    assert_eq!(view.range, view.bounds);
    assert_eq!(view.available, vec!["DEU", "CHL", "JPN"]);
    // only DEU and JPN of the defaults are in the file
    assert_eq!(view.selected, vec!["DEU", "JPN"]);
    assert_eq!(view.filtered.len(), 2 * 63);
    assert_eq!(view.header, "GDP in 2022");
    assert!(view.warning.is_none());
    assert_eq!(view.metrics[0].growth.display_value, "63B");
    assert_eq!(view.metrics[0].growth.growth, "63.00x");
}

#[test]
fn selection_is_applied_and_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let mut dash = Dashboard::new(write_inputs(dir.path()));

    let sel = Selection {
        range: Some(YearRange::new(1950, 1965)),
        countries: Some(vec!["CHL".into()]),
    };
    let view = dash.render_gdp(&sel).unwrap();
    assert_eq!(view.range, YearRange::new(1960, 1965));
    assert_eq!(view.filtered.len(), 6);
    assert!(view.filtered.iter().all(|r| r.gdp.is_none()));

    let card = &view.metrics[0];
    assert_eq!(card.label, "CHL GDP");
    // the 1965 record exists with an empty cell, so it is not "unavailable"
    assert_eq!(card.growth.display_value, "NaNB");
    assert_eq!(card.growth.growth, "n/a");
    assert_eq!(card.growth.color, DeltaColor::Off);
}

#[test]
fn empty_selection_warns() {
    let dir = tempfile::tempdir().unwrap();
    let mut dash = Dashboard::new(write_inputs(dir.path()));
    let view = dash
        .render_gdp(&Selection {
            range: None,
            countries: Some(Vec::new()),
        })
        .unwrap();
    assert_eq!(view.warning.as_deref(), Some(EMPTY_SELECTION_WARNING));
    assert!(view.filtered.is_empty());
    assert!(view.metrics.is_empty());
}

#[test]
fn schedule_view_carries_preview_and_download_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut dash = Dashboard::new(write_inputs(dir.path()));
    let Rendered::Schedule(view) = dash.render(View::Schedule, &Selection::default()).unwrap()
    else {
        panic!("expected the schedule view");
    };
    assert_eq!(view.html.as_str(), "<h1>Ders Programı</h1>");
    assert_eq!(
        decode_preview_url(&view.preview_url).as_deref(),
        Some("<h1>Ders Programı</h1>")
    );
    assert_eq!(view.download_name, "leman-bicer-ders-programi.html");
}

#[test]
fn cache_serves_until_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path());
    let schedule_path = config.data.schedule_path.clone();
    let mut dash = Dashboard::new(config);

    assert_eq!(dash.schedule_html().unwrap().as_str(), "<h1>Ders Programı</h1>");
    fs::write(&schedule_path, "<h1>v2</h1>").unwrap();
    assert_eq!(dash.schedule_html().unwrap().as_str(), "<h1>Ders Programı</h1>");

    dash.clear_cache();
    assert_eq!(dash.schedule_html().unwrap().as_str(), "<h1>v2</h1>");
}

#[test]
fn one_missing_file_does_not_break_the_other_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_inputs(dir.path());
    config.data.gdp_path = dir.path().join("missing.csv");
    let mut dash = Dashboard::new(config);

    let err = dash.render(View::Dashboard, &Selection::default()).unwrap_err();
    assert!(matches!(err, DashError::NotFound { .. }));
    assert!(dash.render(View::Schedule, &Selection::default()).is_ok());
}
