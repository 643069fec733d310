use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    API_BASE_ENV, ApiConfig, AppServices, AuthService, DEFAULT_API_BASE, QuizService,
    ScoreboardService,
};
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyApiBase,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyApiBase => write!(f, "--api-base must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
    base_url: String,
}

impl UiApp for DesktopApp {
    fn auth_service(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn quiz_service(&self) -> Arc<QuizService> {
        self.services.quiz()
    }

    fn scoreboard_service(&self) -> Arc<ScoreboardService> {
        self.services.scoreboard()
    }

    fn backend_label(&self) -> String {
        self.base_url.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-base <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-base {DEFAULT_API_BASE}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {API_BASE_ENV}, RUST_LOG");
}

#[derive(Debug, Default)]
struct Args {
    /// Overrides the environment when set.
    api_base: Option<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-base" => {
                    let value = require_value(args, "--api-base")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyApiBase);
                    }
                    parsed.api_base = Some(value);
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }
        Ok(Some(parsed))
    }

    fn api_config(&self) -> Result<ApiConfig, services::AppServicesError> {
        match &self.api_base {
            Some(raw) => ApiConfig::new(raw),
            None => ApiConfig::from_env(),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = log_fmt().with_env_filter(filter).with_target(false).try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut argv = std::env::args().skip(1);
    let Some(args) = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    let config = args.api_config()?;
    let base_url = config.base_url().to_string();
    let app = DesktopApp {
        services: AppServices::http(config)?,
        base_url,
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("IntelliQuiz")
            .with_always_on_top(false),
    );

    tracing::info!("Launching IntelliQuiz");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
