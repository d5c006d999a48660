use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gdp_dash::config::{Config, generate_default_config};
use gdp_dash::dashboard::{Dashboard, Selection};
use gdp_dash::models::{DeltaColor, YearRange};
use gdp_dash::query::{country_codes, parse_list, year_bounds};
use gdp_dash::{schedule, storage, viz};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gdp-dash",
    version,
    about = "Browse World Bank GDP series and the Leman Biçer timetable"
)]
struct Cli {
    /// Config file (TOML). Defaults to the user config dir or ./gdp-dash.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Wide GDP CSV (overrides config).
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Timetable HTML (overrides config).
    #[arg(long, global = true)]
    schedule: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show GDP cards for a year range (and optionally save and plot).
    Gdp(GdpArgs),
    /// List the country codes present in the data.
    Countries,
    /// Print the timetable, its preview link, or save it for download.
    Schedule(ScheduleArgs),
    /// Print a default config file.
    Config,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GdpArgs {
    /// First year (defaults to the earliest year in the data)
    #[arg(long)]
    from: Option<i32>,
    /// Last year (defaults to the latest year in the data)
    #[arg(long)]
    to: Option<i32>,
    /// Country codes separated by comma or semicolon, or `all`
    #[arg(short, long)]
    countries: Option<String>,
    /// Save the filtered records (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Create a chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Number formatting locale (en, de, fr, ...). Defaults to the config value.
    #[arg(long)]
    locale: Option<String>,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    /// Print the data: URL preview link instead of the HTML.
    #[arg(long, default_value_t = false)]
    preview_url: bool,
    /// Write leman-bicer-ders-programi.html into this directory.
    #[arg(long)]
    download: Option<PathBuf>,
    /// Verify that the preview link decodes back to the timetable file.
    #[arg(long, default_value_t = false)]
    check: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let mut c = Config::load(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            c.apply_env_overrides(|k| std::env::var(k).ok());
            c
        }
        None => Config::load_default(),
    };
    if let Some(p) = cli.data {
        config.data.gdp_path = p;
    }
    if let Some(p) = cli.schedule {
        config.data.schedule_path = p;
    }

    match cli.cmd {
        Command::Gdp(args) => cmd_gdp(config, args),
        Command::Countries => cmd_countries(config),
        Command::Schedule(args) => cmd_schedule(config, args),
        Command::Config => {
            print!("{}", generate_default_config());
            Ok(())
        }
    }
}

fn cmd_gdp(mut config: Config, args: GdpArgs) -> Result<()> {
    if let Some(locale) = args.locale {
        config.display.locale = locale;
    }
    let columns = config.display.metric_columns.max(1);
    let mut dash = Dashboard::new(config);

    let records = dash.gdp_records().context("loading GDP data")?;
    let countries = match args.countries.as_deref() {
        Some(s) if s.trim().eq_ignore_ascii_case("all") => Some(country_codes(&records)),
        Some(s) => Some(parse_list(s)),
        None => None,
    };
    let range = match (args.from, args.to) {
        (None, None) => None,
        (from, to) => {
            let bounds = year_bounds(&records).unwrap_or_else(YearRange::full);
            Some(YearRange::new(
                from.unwrap_or(bounds.from),
                to.unwrap_or(bounds.to),
            ))
        }
    };

    let view = dash.render_gdp(&Selection { range, countries })?;

    if let Some(warning) = &view.warning {
        eprintln!("{warning}");
    }

    println!("{}", view.header);
    for row in view.metrics.chunks(columns) {
        let cells: Vec<String> = row
            .iter()
            .map(|card| {
                let delta = match card.growth.color {
                    DeltaColor::Normal => card.growth.growth.clone(),
                    DeltaColor::Off => format!("({})", card.growth.growth),
                };
                format!("{}: {} {}", card.label, card.growth.display_value, delta)
            })
            .collect();
        println!("{}", cells.join("  |  "));
    }

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&view.filtered, path)?,
            "json" => storage::save_json(&view.filtered, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", view.filtered.len(), path.display());
    }

    if let Some(plot_path) = args.plot.as_ref() {
        viz::plot_gdp_with(
            &view.filtered,
            plot_path,
            args.width,
            args.height,
            viz::DEFAULT_TITLE,
            &dash.config().display.locale,
        )?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    Ok(())
}

fn cmd_countries(config: Config) -> Result<()> {
    let mut dash = Dashboard::new(config);
    let records = dash.gdp_records().context("loading GDP data")?;
    for code in country_codes(&records) {
        println!("{code}");
    }
    Ok(())
}

fn cmd_schedule(config: Config, args: ScheduleArgs) -> Result<()> {
    let mut dash = Dashboard::new(config);
    let view = dash.render_schedule().context("loading timetable")?;

    if let Some(dir) = args.download.as_ref() {
        let path = schedule::save_download(&view.html, dir)?;
        eprintln!("Saved {}", path.display());
        return Ok(());
    }

    if args.check {
        match schedule::decode_preview_url(&view.preview_url) {
            Some(decoded) if decoded == view.html.as_str() => {
                println!("preview link OK ({} bytes)", decoded.len());
                return Ok(());
            }
            _ => anyhow::bail!("preview link does not decode back to the timetable"),
        }
    }

    if args.preview_url {
        println!("{}", view.preview_url);
    } else {
        print!("{}", view.html);
    }
    Ok(())
}
