use gdp_dash::models::{GdpRecord, YearRange};
use gdp_dash::query::{
    boundary_value, country_codes, default_selection, filter_records, year_bounds,
};

fn rows() -> Vec<GdpRecord> {
    let mut out = Vec::new();
    for code in ["DEU", "USA", "BRA"] {
        for year in 2015..=2020 {
            out.push(GdpRecord {
                country_code: code.into(),
                year,
                gdp: if code == "BRA" && year == 2017 {
                    None
                } else {
                    Some(year as f64)
                },
            });
        }
    }
    out
}

#[test]
fn filter_keeps_exactly_the_matching_records() {
    let all = rows();
    let wanted = vec!["DEU".to_string(), "BRA".to_string()];
    let range = YearRange::new(2016, 2018);
    let got = filter_records(&all, range, &wanted);

    let expected: Vec<GdpRecord> = all
        .iter()
        .filter(|r| (2016..=2018).contains(&r.year) && r.country_code != "USA")
        .cloned()
        .collect();
    assert_eq!(got, expected);
    assert_eq!(got.len(), 6);
    // records with missing GDP are not silently dropped
    assert!(got.iter().any(|r| r.country_code == "BRA" && r.gdp.is_none()));
}

#[test]
fn filter_with_empty_selection_or_disjoint_range_is_empty() {
    let all = rows();
    assert!(filter_records(&all, YearRange::full(), &[]).is_empty());
    assert!(filter_records(&all, YearRange::new(1960, 1970), &["DEU".into()]).is_empty());
}

#[test]
fn reversed_range_is_normalized() {
    let r = YearRange::new(2018, 2016);
    assert_eq!(r, YearRange { from: 2016, to: 2018 });
    assert_eq!(
        YearRange::new(1900, 2100).clamp_to(YearRange::full()),
        YearRange::full()
    );
}

#[test]
fn bounds_and_codes() {
    let all = rows();
    assert_eq!(year_bounds(&all), Some(YearRange::new(2015, 2020)));
    assert_eq!(year_bounds(&[]), None);
    assert_eq!(country_codes(&all), vec!["DEU", "USA", "BRA"]);
}

#[test]
fn boundary_value_distinguishes_absent_and_empty() {
    let all = rows();
    assert_eq!(boundary_value(&all, "DEU", 2016), Some(2016.0));
    assert_eq!(boundary_value(&all, "DEU", 1999), None);
    assert_eq!(boundary_value(&all, "XXX", 2016), None);
    assert!(boundary_value(&all, "BRA", 2017).unwrap().is_nan());
}

#[test]
fn default_selection_keeps_only_present_codes() {
    let defaults: Vec<String> = ["DEU", "FRA", "BRA"].iter().map(|s| s.to_string()).collect();
    let available = country_codes(&rows());
    assert_eq!(default_selection(&defaults, &available), vec!["DEU", "BRA"]);
}
