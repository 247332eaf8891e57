use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use comply_core::model::Catalog;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AssessmentService, AuthService, Clock};
use storage::{CatalogSource, DirectorySink, InMemoryCatalog, JsonCatalogFile, ReportSink};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const ENV_CATALOG: &str = "COMPLY_CATALOG";
const ENV_EXPORT_DIR: &str = "COMPLY_EXPORT_DIR";
const ENV_LOGIN_EMAIL: &str = "COMPLY_LOGIN_EMAIL";
const ENV_LOGIN_PASSWORD: &str = "COMPLY_LOGIN_PASSWORD";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(value)
}

struct DesktopApp {
    assessment: Arc<AssessmentService>,
    auth: Arc<AuthService>,
}

impl UiApp for DesktopApp {
    fn assessment(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessment)
    }

    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    /// `None` means the bundled catalog.
    catalog: Option<PathBuf>,
    export_dir: PathBuf,
}

impl Args {
    fn from_env() -> Self {
        Self {
            catalog: std::env::var(ENV_CATALOG)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            export_dir: std::env::var(ENV_EXPORT_DIR)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from),
        }
    }

    /// Flags override whatever `self` was seeded with.
    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => self.catalog = Some(require_value(args, "--catalog")?.into()),
                "--export-dir" => self.export_dir = require_value(args, "--export-dir")?.into(),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(self)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--catalog <questions.json>] [--export-dir <dir>]");
    eprintln!("  cargo run -p app -- check [--catalog <questions.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --catalog     bundled NDPA question set");
    eprintln!("  --export-dir  current directory");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {ENV_CATALOG}, {ENV_EXPORT_DIR}, {ENV_LOGIN_EMAIL}, {ENV_LOGIN_PASSWORD}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

fn catalog_source(args: &Args) -> Box<dyn CatalogSource> {
    match &args.catalog {
        Some(path) => Box::new(JsonCatalogFile::new(path)),
        None => Box::new(InMemoryCatalog::bundled()),
    }
}

fn auth_from_env() -> AuthService {
    match (
        std::env::var(ENV_LOGIN_EMAIL).ok(),
        std::env::var(ENV_LOGIN_PASSWORD).ok(),
    ) {
        (Some(email), Some(password)) => AuthService::new(email.trim(), password),
        (None, None) => AuthService::demo(),
        _ => {
            tracing::warn!(
                "{ENV_LOGIN_EMAIL} and {ENV_LOGIN_PASSWORD} must be set together; using the demo account"
            );
            AuthService::demo()
        }
    }
}

fn category_counts(catalog: &Catalog) -> Vec<(String, usize)> {
    catalog
        .categories()
        .into_iter()
        .map(|category| {
            let count = catalog
                .iter()
                .filter(|q| q.category() == category)
                .count();
            (category.to_string(), count)
        })
        .collect()
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::from_env()
        .parse(&mut argv.into_iter())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    let source = catalog_source(&parsed);
    tracing::debug!(origin = %source.origin(), "loading catalog");

    match cmd {
        Command::Check => {
            let catalog = source.load().await?;
            println!("{}: {} questions", source.origin(), catalog.len());
            for (category, count) in category_counts(&catalog) {
                println!("  {category}: {count}");
            }
            Ok(())
        }
        Command::Ui => {
            let reports: Arc<dyn ReportSink> = Arc::new(DirectorySink::new(&parsed.export_dir));
            let assessment =
                AssessmentService::from_source(Clock::system(), source.as_ref(), reports).await?;
            tracing::info!(
                export_dir = %parsed.export_dir.display(),
                questions = assessment.catalog().len(),
                "starting desktop ui"
            );

            let app = DesktopApp {
                assessment: Arc::new(assessment),
                auth: Arc::new(auth_from_env()),
            };
            let context = build_app_context(Arc::new(app));

            // Some tao setups default to an always-on-top window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(ui::app::APP_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
