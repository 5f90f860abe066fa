use analytics::DerivedColumn;
use charting::{ChartRenderer, SvgRenderer};
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use configuration::{Config, LoggingSettings};
use core_types::{Metric, Mode, Property, RawMetric};
use rust_decimal::Decimal;
use selection::{CompetitorSet, RoutedView, Selection, SelectionRouter};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// The main entry point for the competitive-set dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // COMPSET__* overrides may live in a .env file; it is optional.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = configuration::load_config(cli.config.as_deref())?;
    let _guard = init_tracing(&config.logging)?;

    match cli.command {
        Commands::Table => handle_table()?,
        Commands::Metrics(args) => handle_metrics(args)?,
        Commands::View(args) => handle_view(args, &config)?,
        Commands::Serve(args) => handle_serve(args, config).await?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Performance dashboard comparing BNBME against its competitive set.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file. Defaults to `compset.toml` when it exists.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the base table and the derived metrics table.
    Table,
    /// List the metrics offered in a mode.
    Metrics(MetricsArgs),
    /// Show one dashboard view: chart data, summaries and analysis.
    View(ViewArgs),
    /// Run the web dashboard.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct MetricsArgs {
    /// "solo" or "comparison".
    #[arg(long, default_value = "solo")]
    mode: Mode,
}

#[derive(Parser)]
struct ViewArgs {
    /// "solo" or "comparison".
    #[arg(long)]
    mode: Mode,

    /// Metric id, e.g. "occupancy", "revpar-per-occupancy", "market-share".
    #[arg(long)]
    metric: Metric,

    /// Property to compare against ("competitor" or "market"). Repeatable.
    /// Comparison mode selects both when omitted.
    #[arg(long)]
    competitor: Vec<String>,

    /// Compare against nobody; only the subject is plotted.
    #[arg(long, conflicts_with = "competitor")]
    no_competitors: bool,

    /// Write the chart as SVG to this file.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the routed view as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ServeArgs {
    /// Listen address. Defaults to `server.host:server.port` from the configuration.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

// ==============================================================================
// Tracing
// ==============================================================================

/// Installs the global subscriber. `RUST_LOG` wins over `logging.level`.
///
/// The returned guard flushes the file writer and must live until exit.
fn init_tracing(logging: &LoggingSettings) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;
    let stderr = fmt::layer().with_writer(std::io::stderr);

    match &logging.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, "compset.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(filter).with(stderr).try_init()?;
            Ok(None)
        }
    }
}

// ==============================================================================
// Command Handlers
// ==============================================================================

fn handle_table() -> anyhow::Result<()> {
    let table = dataset::load()?;
    let derived = analytics::MetricEngine::new().derive(&table)?;
    let names = table.names();

    let mut base = Table::new();
    let mut header = vec!["Month".to_string()];
    for property in Property::ALL {
        for metric in [RawMetric::Occupancy, RawMetric::Revpar, RawMetric::Adr] {
            header.push(format!("{} {}", names.get(property), metric.label()));
        }
    }
    base.load_preset(UTF8_FULL).set_header(header);
    for record in table.records() {
        let mut row = vec![record.month.clone()];
        for property in Property::ALL {
            let metrics = record.property(property);
            for metric in [RawMetric::Occupancy, RawMetric::Revpar, RawMetric::Adr] {
                row.push(metrics.get(metric).to_string());
            }
        }
        base.add_row(row);
    }
    println!("{base}");

    let mut derived_table = Table::new();
    let mut header = vec!["Month".to_string()];
    header.extend(DerivedColumn::ALL.iter().map(DerivedColumn::header));
    derived_table.load_preset(UTF8_FULL).set_header(header);
    for row in &derived.rows {
        let mut cells = vec![row.month.clone()];
        cells.extend(DerivedColumn::ALL.iter().map(|&column| match column {
            DerivedColumn::MarketShare => format!("{}%", (row.get(column) * Decimal::ONE_HUNDRED).round_dp(2)),
            _ => row.get(column).round_dp(4).to_string(),
        }));
        derived_table.add_row(cells);
    }
    println!("{derived_table}");

    Ok(())
}

fn handle_metrics(args: MetricsArgs) -> anyhow::Result<()> {
    let table = dataset::load()?;
    let mut menu = Table::new();
    menu.load_preset(UTF8_FULL).set_header(vec!["Id", "Label", "Follows Competitor Selection"]);
    for metric in args.mode.metrics() {
        let follows = args.mode == Mode::Comparison && metric.is_toggleable();
        menu.add_row(vec![
            metric.id().to_string(),
            metric.label(table.names()),
            if follows { "yes" } else { "no" }.to_string(),
        ]);
    }
    println!("{} mode", args.mode.label());
    println!("{menu}");
    Ok(())
}

fn handle_view(args: ViewArgs, config: &Config) -> anyhow::Result<()> {
    let table = dataset::load()?;
    let derived = analytics::MetricEngine::new().derive(&table)?;

    let competitors = CompetitorSet::resolve(args.mode, &args.competitor, args.no_competitors)?;
    let selection = Selection::from_parts(args.mode, args.metric, competitors)?;
    let view = SelectionRouter::new().route(&table, &derived, &selection)?;

    if let Some(path) = &args.output {
        let svg = SvgRenderer::new(config.chart.width, config.chart.height).render(&view.chart)?;
        std::fs::write(path, svg)?;
        tracing::info!(path = %path.display(), "Chart written.");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view);
    }
    Ok(())
}

fn print_view(view: &RoutedView) {
    let chart = &view.chart;
    println!("{}", chart.subheader);
    println!("{} [{}]", chart.title, chart.y_label);

    let mut points = Table::new();
    let mut header = vec![chart.x_label.clone()];
    header.extend(chart.series.iter().map(|s| s.name.clone()));
    points.load_preset(UTF8_FULL).set_header(header);
    for (i, month) in chart.x_values.iter().enumerate() {
        let mut row = vec![month.clone()];
        row.extend(chart.series.iter().map(|s| s.values.get(i).map(|v| format!("{v:.2}")).unwrap_or_default()));
        points.add_row(row);
    }
    println!("{points}");
    if let Some(guide) = &chart.reference_line {
        println!("Reference line: {} at {}", guide.label, guide.y);
    }

    let mut summaries = Table::new();
    summaries.load_preset(UTF8_FULL).set_header(vec!["Series", "Average", "Peak", "Trough"]);
    for named in &view.summaries {
        let s = &named.summary;
        summaries.add_row(vec![
            named.series.clone(),
            format!("{:.2}", s.average),
            format!("{} ({:.2})", s.peak.month, s.peak.value),
            format!("{} ({:.2})", s.trough.month, s.trough.value),
        ]);
    }
    println!("{summaries}");

    println!();
    println!("{}", view.analysis);
}

async fn handle_serve(args: ServeArgs, config: Config) -> anyhow::Result<()> {
    let addr = match args.addr {
        Some(addr) => addr,
        None => config.server.address().parse()?,
    };
    let table = dataset::load()?;
    let state = web_server::AppState::new(table, config.dashboard, config.chart)?;
    web_server::run_server(addr, state).await
}
