//! Render the filtered GDP series to **SVG** or **PNG**.
//!
//! - One line per country, colors from the Microsoft Office palette
//! - Y axis scaled to a readable unit (billions for most economies) with
//!   locale-aware thousands separators
//! - PNG output carries no text (no font is bundled); use SVG for labelled charts

use crate::format::map_locale;
use crate::models::GdpRecord;
use anyhow::{Result, anyhow};
use num_format::{Locale, ToFormattedString};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_TITLE: &str = "GDP over time";

/// Microsoft Office (2013+) chart series palette.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

/// Pick a single Y-axis scale and its human label based on the overall magnitude.
/// Returns (scale, label), e.g. (1e9, "billions").
pub fn choose_axis_scale(max_abs: f64) -> (f64, &'static str) {
    if max_abs >= 1.0e12 {
        (1.0e12, "trillions")
    } else if max_abs >= 1.0e9 {
        (1.0e9, "billions")
    } else if max_abs >= 1.0e6 {
        (1.0e6, "millions")
    } else if max_abs >= 1.0e3 {
        (1.0e3, "thousands")
    } else {
        (1.0, "")
    }
}

/// Group present values by country, each series sorted by year.
pub fn series_by_country(records: &[GdpRecord]) -> BTreeMap<String, Vec<(i32, f64)>> {
    let mut groups: BTreeMap<String, Vec<(i32, f64)>> = BTreeMap::new();
    for r in records {
        if let Some(v) = r.gdp.filter(|v| v.is_finite()) {
            groups
                .entry(r.country_code.clone())
                .or_default()
                .push((r.year, v));
        }
    }
    for series in groups.values_mut() {
        series.sort_by_key(|(y, _)| *y);
    }
    groups
}

/// Series in one shared display unit, with that unit's label (e.g. `"billions"`).
///
/// Used by interactive hosts that draw the chart themselves.
pub fn scaled_series(records: &[GdpRecord]) -> (&'static str, BTreeMap<String, Vec<[f64; 2]>>) {
    let groups = series_by_country(records);
    let max_abs = groups
        .values()
        .flatten()
        .fold(0.0_f64, |acc, (_, v)| acc.max(v.abs()));
    let (scale, label) = choose_axis_scale(max_abs);
    let scaled = groups
        .into_iter()
        .map(|(code, series)| {
            let points = series
                .into_iter()
                .map(|(y, v)| [f64::from(y), v / scale])
                .collect();
            (code, points)
        })
        .collect();
    (label, scaled)
}

/// Plot with the default title and English labels.
pub fn plot_gdp<P: AsRef<Path>>(
    records: &[GdpRecord],
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    plot_gdp_with(records, out_path, width, height, DEFAULT_TITLE, "en")
}

/// Line chart of GDP per country. SVG when the extension is `svg`, PNG otherwise.
pub fn plot_gdp_with<P: AsRef<Path>>(
    records: &[GdpRecord],
    out_path: P,
    width: u32,
    height: u32,
    title: &str,
    locale_tag: &str,
) -> Result<()> {
    let groups = series_by_country(records);
    if groups.is_empty() {
        return Err(anyhow!("no data to plot"));
    }

    let years = groups.values().flatten().map(|(y, _)| *y);
    let (mut min_year, mut max_year) = years.fold((i32::MAX, i32::MIN), |(lo, hi), y| {
        (lo.min(y), hi.max(y))
    });
    if min_year == max_year {
        min_year -= 1;
        max_year += 1;
    }

    let values = groups.values().flatten().map(|(_, v)| *v);
    let (mut min_val, mut max_val) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let (scale, scale_label) = choose_axis_scale(min_val.abs().max(max_val.abs()));
    min_val /= scale;
    max_val /= scale;
    // GDP is non-negative; anchor the axis at zero like the host chart does
    if min_val > 0.0 {
        min_val = 0.0;
    }
    if (max_val - min_val).abs() < f64::EPSILON {
        max_val += 1.0;
    }

    let frame = Frame {
        title,
        min_year,
        max_year,
        min_val,
        max_val,
        scale,
        y_desc: if scale_label.is_empty() {
            "GDP (US$)".to_string()
        } else {
            format!("GDP (US$, {scale_label})")
        },
        locale: map_locale(locale_tag).0,
    };

    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &groups, &frame, true)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, &groups, &frame, false)?;
    }
    log::info!("wrote chart to {}", out_path.display());
    Ok(())
}

struct Frame<'a> {
    title: &'a str,
    min_year: i32,
    max_year: i32,
    min_val: f64,
    max_val: f64,
    scale: f64,
    y_desc: String,
    locale: &'static Locale,
}

/// Helper that draws to any Plotters backend.
///
/// `labelled = false` skips every text element; only the SVG backend renders
/// text without a registered font.
fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    groups: &BTreeMap<String, Vec<(i32, f64)>>,
    frame: &Frame<'_>,
    labelled: bool,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut builder = ChartBuilder::on(&root);
    builder.margin(20);
    if labelled {
        builder
            .caption(frame.title, ("sans-serif", 24))
            .set_label_area_size(LabelAreaPosition::Left, 80)
            .set_label_area_size(LabelAreaPosition::Bottom, 44);
    }
    let mut chart = builder
        .build_cartesian_2d(frame.min_year..frame.max_year, frame.min_val..frame.max_val)
        .map_err(|e| anyhow!("{:?}", e))?;

    let locale = frame.locale;
    let y_label_fmt = |v: &f64| (v.round() as i64).to_formatted_string(locale);
    let x_label_fmt = |y: &i32| y.to_string();

    // Limit label counts to avoid overlap
    let (x_label_count, y_label_count) = if labelled {
        (((frame.max_year - frame.min_year + 1) as usize).min(12), 10)
    } else {
        (0, 0)
    };

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(x_label_count)
        .y_labels(y_label_count)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt);
    if labelled {
        mesh.x_desc("Year")
            .y_desc(frame.y_desc.as_str())
            .label_style(("sans-serif", 14))
            .axis_desc_style(("sans-serif", 16));
    }
    mesh.draw().map_err(|e| anyhow!("{:?}", e))?;

    for (idx, (country, series)) in groups.iter().enumerate() {
        let color = office_color(idx);
        let style = ShapeStyle {
            color,
            filled: false,
            stroke_width: 2,
        };
        let scaled: Vec<(i32, f64)> = series.iter().map(|(y, v)| (*y, v / frame.scale)).collect();

        chart
            .draw_series(LineSeries::new(scaled, style))
            .map_err(|e| anyhow!("{:?}", e))?
            .label(country.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color));
    }

    if labelled {
        chart
            .configure_series_labels()
            .border_style(&BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.85))
            .label_font(("sans-serif", 14))
            .draw()
            .map_err(|e| anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_scale_thresholds() {
        assert_eq!(choose_axis_scale(5.0e12).1, "trillions");
        assert_eq!(choose_axis_scale(3.0e9).1, "billions");
        assert_eq!(choose_axis_scale(12.0), (1.0, ""));
    }
}
