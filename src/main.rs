use clap::{Parser, Subcommand, ValueEnum};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use colorcop::models::{AnalyzeRequest, AppConfig, ContrastRequest, NearestRequest};
use colorcop::server::{self, ApiDoc};
use colorcop::services::{export_css, export_json, AuditService};

#[derive(Parser)]
#[command(name = "colorcop")]
#[command(about = "Colorcop - perceptual color clustering for design-system audits")]
struct Cli {
    /// Configuration file (overrides CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Cluster colors given as arguments, or one per line on stdin
    Cluster {
        /// Colors as #RRGGBB, RRGGBB, rgb() or rgba()
        colors: Vec<String>,

        /// CIEDE2000 merge threshold (0 to 100)
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Find the candidate closest to a target color
    Nearest {
        target: String,
        candidates: Vec<String>,

        /// Print the JSON report
        #[arg(long)]
        json: bool,
    },
    /// Show the CIE LAB values of a color
    Lab {
        color: String,

        /// Print the JSON report
        #[arg(long)]
        json: bool,
    },
    /// Check WCAG contrast between two colors
    Contrast {
        foreground: String,
        background: String,

        /// Print the JSON report
        #[arg(long)]
        json: bool,
    },
    /// Summarize a palette: hue families, scheme, luminance order
    Analyze {
        /// Colors as arguments, or one per line on stdin
        colors: Vec<String>,

        /// Print the JSON report
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One line per cluster
    Text,
    /// JSON export with metadata
    Json,
    /// CSS custom properties for the cluster representatives
    Css,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_file = cli.config;

    match cli.command {
        Some(Commands::Serve) => run_server(config_file).await,
        Some(Commands::Cluster {
            colors,
            threshold,
            format,
        }) => run_cluster_command(config_file, colors, threshold, format),
        Some(Commands::Nearest {
            target,
            candidates,
            json,
        }) => {
            let (_, audit) = load_for_cli(config_file);
            let report = audit.nearest(&NearestRequest { target, candidates })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                match (report.color, report.distance) {
                    (Some(color), Some(distance)) => println!("{color}  dE {distance:.4}"),
                    _ => println!("no candidates"),
                }
            }
            Ok(())
        }
        Some(Commands::Lab { color, json }) => {
            let (_, audit) = load_for_cli(config_file);
            let report = audit.lab(&color)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "{}  L {:.4}  a {:.4}  b {:.4}  C {:.4}  h {:.4}",
                    report.color, report.l, report.a, report.b, report.c, report.h
                );
            }
            Ok(())
        }
        Some(Commands::Contrast {
            foreground,
            background,
            json,
        }) => run_contrast_command(config_file, foreground, background, json),
        Some(Commands::Analyze { colors, json }) => run_analyze_command(config_file, colors, json),
        None => {
            run_status_command(config_file);
            Ok(())
        }
    }
}

/// Initialize minimal logging and load configuration for one-shot commands
fn load_for_cli(config_file: Option<PathBuf>) -> (AppConfig, AuditService) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorcop=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config(config_file.as_deref());
    let audit = AuditService::new(config.clustering.clone());
    (config, audit)
}

/// Load `--config` if given, otherwise whatever `CONFIG_FILE` names
fn load_config(config_file: Option<&Path>) -> AppConfig {
    match config_file {
        Some(path) => AppConfig::load(Some(path)),
        None => AppConfig::load_from_env(),
    }
}

/// Path the configuration is read from, for display
fn config_source(config_file: Option<&Path>) -> Option<PathBuf> {
    config_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
}

/// Cluster colors and print them as text, JSON export or CSS
fn run_cluster_command(
    config_file: Option<PathBuf>,
    colors: Vec<String>,
    threshold: Option<f64>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (config, audit) = load_for_cli(config_file);
    let colors = colors_or_stdin(colors)?;
    let palette = audit.cluster_palette(&colors, threshold)?;

    match format {
        OutputFormat::Text => {
            let report = palette.to_report();
            println!(
                "{} colors, {} clusters (threshold {})",
                report.total_colors,
                report.clusters.len(),
                report.threshold
            );
            for cluster in &report.clusters {
                println!(
                    "{}  x{:<3} {}",
                    cluster.representative,
                    cluster.count,
                    cluster.colors.join(" ")
                );
            }
            for skipped in &report.skipped {
                eprintln!(
                    "skipped #{} {:?}: {}",
                    skipped.index, skipped.input, skipped.error
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", export_json(&palette, chrono::Utc::now())?);
        }
        OutputFormat::Css => {
            let representatives: Vec<_> = palette
                .clusters
                .iter()
                .map(|c| c.representative())
                .collect();
            print!(
                "{}",
                export_css(&representatives, &config.export.css_prefix)
            );
        }
    }

    Ok(())
}

fn run_contrast_command(
    config_file: Option<PathBuf>,
    foreground: String,
    background: String,
    json: bool,
) -> anyhow::Result<()> {
    let (_, audit) = load_for_cli(config_file);
    let report = audit.contrast(&ContrastRequest {
        foreground,
        background,
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let verdict = |pass: bool| if pass { "pass" } else { "fail" };
    println!(
        "{} on {}  {:.2}:1  AA {}  AAA {}  text {}",
        report.foreground,
        report.background,
        report.ratio,
        verdict(report.aa),
        verdict(report.aaa),
        report.text_color
    );
    Ok(())
}

fn run_analyze_command(
    config_file: Option<PathBuf>,
    colors: Vec<String>,
    json: bool,
) -> anyhow::Result<()> {
    let (_, audit) = load_for_cli(config_file);
    let colors = colors_or_stdin(colors)?;
    let report = audit.analyze(&AnalyzeRequest { colors })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} ({} colors), {} scheme",
        report.palette_name,
        report.total_colors,
        format!("{:?}", report.scheme).to_lowercase()
    );
    for group in &report.hue_groups {
        println!(
            "  {:<8} {}",
            format!("{:?}", group.family).to_lowercase(),
            group.colors.join(" ")
        );
    }
    println!("  lightest first: {}", report.by_luminance.join(" "));
    Ok(())
}

/// Use the given colors, or read one per line from stdin when none were given
fn colors_or_stdin(colors: Vec<String>) -> anyhow::Result<Vec<String>> {
    if !colors.is_empty() {
        return Ok(colors);
    }

    let mut read = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            read.push(trimmed.to_string());
        }
    }
    Ok(read)
}

/// Display status and configuration information
fn run_status_command(config_file: Option<PathBuf>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();

    println!("Colorcop v{VERSION}");
    println!("Perceptual color clustering for design-system audits\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE").as_deref().unwrap_or("(not set)")
    );

    let source = match config_source(config_file.as_deref()) {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    let config = load_config(config_file.as_deref());

    println!("\nConfiguration: {source}");
    println!(
        "  default_threshold = {}",
        config.clustering.default_threshold
    );
    println!("  max_colors        = {}", config.clustering.max_colors);
    println!(
        "  invalid_colors    = {:?}",
        config.clustering.invalid_colors
    );
    println!("  order             = {:?}", config.clustering.order);
    println!("  css_prefix        = {}", config.export.css_prefix);

    println!("\nCommands:");
    println!("  colorcop serve      Start the HTTP server");
    println!("  colorcop cluster    Cluster colors");
    println!("  colorcop nearest    Find the closest candidate color");
    println!("  colorcop lab        Show CIE LAB values");
    println!("  colorcop contrast   Check WCAG contrast");
    println!("  colorcop analyze    Summarize a palette");
    println!("\nRun 'colorcop --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config_file: Option<PathBuf>) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorcop=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!(
        config = ?config_source(config_file.as_deref()).map(|p| p.display().to_string()).unwrap_or_else(|| "defaults".to_string()),
        "Configuration source"
    );
    let config = load_config(config_file.as_deref());

    let state = server::create_app_state(config);

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Colorcop server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
