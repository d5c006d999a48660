/*!
 * GUI application for gdp-dash
 *
 * A desktop host for the two dashboard views:
 * - GDP dashboard: year range sliders, country selection, per-country GDP cards,
 *   chart and data export
 * - Timetable: preview link, HTML source and a save dialog for the download file
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use gdp_dash::dashboard::{Dashboard, GdpView, Rendered, ScheduleView, Selection};
use gdp_dash::models::{DeltaColor, View, YearRange};
use gdp_dash::{Config, storage, viz};
use std::path::Path;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("GDP dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "GDP dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashApp::new(Config::load_default())))),
    )
}

/// Main application state
struct DashApp {
    dash: Dashboard,
    view: View,

    // Widget state; `None` until the data has been seen once
    range: Option<YearRange>,
    countries: Option<Vec<String>>,

    // Chart export options
    plot_width: u32,
    plot_height: u32,

    status_message: String,
    error_message: String,
}

impl DashApp {
    fn new(config: Config) -> Self {
        Self {
            dash: Dashboard::new(config),
            view: View::Dashboard,
            range: None,
            countries: None,
            plot_width: 1000,
            plot_height: 600,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    fn selection(&self) -> Selection {
        Selection {
            range: self.range,
            countries: self.countries.clone(),
        }
    }

    fn show_gdp(&mut self, ui: &mut egui::Ui, view: GdpView) {
        ui.heading("🌎 GDP dashboard");
        ui.label(
            "Browse GDP data from the World Bank Open Data website. The data only goes to 2022, \
             and datapoints for certain years are often missing.",
        );
        ui.hyperlink_to("World Bank Open Data", "https://data.worldbank.org/");
        ui.add_space(10.0);

        // Sliders and multiselect write back into the widget state
        let (mut from, mut to) = (view.range.from, view.range.to);
        ui.label("Which years are you interested in?");
        ui.horizontal(|ui| {
            ui.add(egui::Slider::new(&mut from, view.bounds.from..=view.bounds.to).text("from"));
            ui.add(egui::Slider::new(&mut to, view.bounds.from..=view.bounds.to).text("to"));
        });
        self.range = Some(YearRange::new(from, to));

        let mut selected = view.selected.clone();
        ui.collapsing("Which countries would you like to view?", |ui| {
            ui.label(selected.join(", "));
            egui::ScrollArea::vertical()
                .id_salt("countries")
                .max_height(160.0)
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for code in &view.available {
                            let mut on = selected.contains(code);
                            if ui.checkbox(&mut on, code).changed() {
                                if on {
                                    selected.push(code.clone());
                                } else {
                                    selected.retain(|c| c != code);
                                }
                            }
                        }
                    });
                });
        });
        self.countries = Some(selected);

        if let Some(warning) = &view.warning {
            ui.colored_label(egui::Color32::from_rgb(200, 140, 0), warning);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.heading("GDP over time");
        ui.label(format!(
            "{} data points for {} countries, {}–{}",
            view.filtered.len(),
            view.selected.len(),
            view.range.from,
            view.range.to
        ));
        show_chart(ui, &view);
        ui.horizontal(|ui| {
            ui.label("Chart size:");
            ui.add(egui::DragValue::new(&mut self.plot_width).range(200..=3000));
            ui.label("×");
            ui.add(egui::DragValue::new(&mut self.plot_height).range(200..=3000));
            if ui.button("Export chart…").clicked() {
                self.export_chart(&view);
            }
            if ui.button("Export data…").clicked() {
                self.export_data(&view);
            }
        });

        ui.add_space(10.0);
        ui.separator();
        ui.heading(&view.header);
        let columns = self.dash.config().display.metric_columns.max(1);
        egui::Grid::new("metrics")
            .num_columns(columns)
            .spacing([24.0, 12.0])
            .show(ui, |ui| {
                for (i, card) in view.metrics.iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.label(&card.label);
                        ui.label(egui::RichText::new(&card.growth.display_value).size(22.0));
                        let color = match card.growth.color {
                            DeltaColor::Normal => egui::Color32::DARK_GREEN,
                            DeltaColor::Off => egui::Color32::GRAY,
                        };
                        ui.colored_label(color, &card.growth.growth);
                    });
                    if (i + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn show_schedule(&mut self, ui: &mut egui::Ui, view: ScheduleView) {
        ui.heading(view.title);
        ui.label(egui::RichText::new(view.caption).italics());
        ui.add_space(8.0);

        ui.hyperlink_to("🡥 Ön izlemeyi yeni sekmede aç", &view.preview_url);
        ui.horizontal(|ui| {
            if ui.button("HTML dosyasını indir").clicked() {
                self.save_schedule(&view);
            }
        });

        ui.add_space(8.0);
        ui.label("🧾 HTML kaynağı");
        egui::ScrollArea::vertical()
            .id_salt("schedule_source")
            .show(ui, |ui| {
                let mut text = view.html.as_str();
                ui.add(
                    egui::TextEdit::multiline(&mut text)
                        .code_editor()
                        .desired_width(f32::INFINITY),
                );
            });
    }

    fn export_chart(&mut self, view: &GdpView) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("SVG", &["svg"])
            .add_filter("PNG", &["png"])
            .set_file_name("gdp_chart.svg")
            .save_file()
        else {
            return;
        };
        let result = viz::plot_gdp_with(
            &view.filtered,
            &path,
            self.plot_width,
            self.plot_height,
            viz::DEFAULT_TITLE,
            &self.dash.config().display.locale,
        );
        self.report(result, &path);
    }

    fn export_data(&mut self, view: &GdpView) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .add_filter("JSON", &["json"])
            .set_file_name("gdp_data_long.csv")
            .save_file()
        else {
            return;
        };
        let result = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => storage::save_json(&view.filtered, &path),
            _ => storage::save_csv(&view.filtered, &path),
        };
        self.report(result, &path);
    }

    fn save_schedule(&mut self, view: &ScheduleView) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("HTML", &["html"])
            .set_file_name(view.download_name)
            .save_file()
        else {
            return;
        };
        let result = std::fs::write(&path, view.html.as_bytes()).map_err(anyhow::Error::from);
        self.report(result, &path);
    }

    fn report(&mut self, result: anyhow::Result<()>, path: &Path) {
        match result {
            Ok(()) => {
                self.status_message = format!("Saved {}", path.display());
                self.error_message.clear();
            }
            Err(err) => {
                self.error_message = format!("Failed to save {}: {}", path.display(), err);
                self.status_message.clear();
            }
        }
    }
}

/// Line chart of the filtered series, one line per country.
fn show_chart(ui: &mut egui::Ui, view: &GdpView) {
    let (unit, series) = viz::scaled_series(&view.filtered);
    if series.is_empty() {
        ui.label("No values to chart for this selection.");
        return;
    }
    let y_label = if unit.is_empty() {
        "GDP (US$)".to_string()
    } else {
        format!("GDP (US$, {unit})")
    };
    Plot::new("gdp_over_time")
        .height(320.0)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label(y_label)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (code, points) in series {
                plot_ui.line(Line::new(PlotPoints::from(points)).name(code));
            }
        });
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("views").show(ctx, |ui| {
            ui.label("Select a view");
            for view in [View::Dashboard, View::Schedule] {
                ui.radio_value(&mut self.view, view, view.label())
                    .on_hover_text("Switch between the interactive GDP charts and the provided timetable.");
            }
            ui.add_space(10.0);
            if ui.button("Reload files").clicked() {
                self.dash.clear_cache();
                self.status_message = "Reloaded input files".to_string();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match self.dash.render(self.view, &self.selection()) {
                    Ok(Rendered::Gdp(view)) => self.show_gdp(ui, view),
                    Ok(Rendered::Schedule(view)) => self.show_schedule(ui, view),
                    // Input file problems are shown in place; the other view stays usable
                    Err(err) => {
                        ui.colored_label(egui::Color32::RED, err.to_string());
                    }
                }

                ui.add_space(10.0);
                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });
        });
    }
}
