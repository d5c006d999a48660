use gdp_dash::models::GdpRecord;
use gdp_dash::storage;
use std::fs;

fn sample(n: usize) -> Vec<GdpRecord> {
    (0..n)
        .map(|i| GdpRecord {
            country_code: "DEU".into(),
            year: 2000 + i as i32,
            gdp: if i == 1 { None } else { Some(100.0 + i as f64) },
        })
        .collect()
}

#[test]
fn save_csv_and_json() {
    let rows = sample(3);
    let dir = tempfile::tempdir().unwrap();

    let csv_path = dir.path().join("gdp_long.csv");
    storage::save_csv(&rows, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    assert!(csv_txt.starts_with("country_code,year,gdp\n"));
    assert_eq!(csv_txt.lines().count(), 1 + rows.len());
    // missing value is an empty cell
    assert!(csv_txt.contains("DEU,2001,\n"), "{csv_txt}");

    let json_path = dir.path().join("gdp_long.json");
    storage::save_json(&rows, &json_path).unwrap();
    let json_txt = fs::read_to_string(&json_path).unwrap();
    let back: Vec<GdpRecord> = serde_json::from_str(&json_txt).unwrap();
    assert_eq!(back, rows);
}

//test if the CSV file is save and won't include executable formulas
//country codes come from user-provided files, so a crafted code could be
//evaluated when the export is opened in a spreadsheet
#[test]
fn csv_cells_are_prefixed_to_avoid_formulas() {
    let points = vec![GdpRecord {
        country_code: "=HYPERLINK(\"http://evil\")".into(),
        year: 2020,
        gdp: Some(1.0),
    }];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("csv_injection.csv");
    storage::save_csv(&points, &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let row = rdr.records().next().expect("one data row expected").unwrap();
    let code = row.get(0).unwrap();
    assert!(code.starts_with('\''), "country_code not prefixed: {code}");
    assert!(code.contains("=HYPERLINK"), "content changed: {code}");
}
