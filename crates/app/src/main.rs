use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use portal_core::Clock;
use services::directory::{DirectoryService, DirectorySource, HttpDirectorySource};
use services::{AdminService, AuthService, PortalConfig, ProgressService, ThemeService};
use storage::session_store::{FileSessionStore, SessionStore};
use storage::sync::{InMemoryProgressSync, ProgressSync};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUrl { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUrl { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
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

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--sheet-url <csv_url>] [--api-url <url>]");
    eprintln!("                      [--session-file <path>]");
    eprintln!();
    eprintln!("Defaults come from the environment:");
    eprintln!("  PORTAL_SHEET_CSV_URL, PORTAL_API_URL, PORTAL_SESSION_FILE");
}

struct DesktopApp {
    auth: Arc<AuthService>,
    progress: Arc<ProgressService>,
    admin: Arc<AdminService>,
    theme: Arc<ThemeService>,
}

impl UiApp for DesktopApp {
    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn admin(&self) -> Arc<AdminService> {
        Arc::clone(&self.admin)
    }

    fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}

fn apply_args(
    config: &mut PortalConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<(), ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sheet-url" => {
                let value = require_value(args, "--sheet-url")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidUrl {
                        flag: "--sheet-url",
                        raw: value,
                    });
                }
                config.sheet_csv_url = value;
            }
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::InvalidUrl {
                        flag: "--api-url",
                        raw: value,
                    });
                }
                config.api_url = value;
            }
            "--session-file" => {
                let value = require_value(args, "--session-file")?;
                config.session_path = PathBuf::from(value);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = PortalConfig::from_env()?;
    let mut args = std::env::args().skip(1);
    apply_args(&mut config, &mut args).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    config.validate()?;

    let source: Arc<dyn DirectorySource> =
        Arc::new(HttpDirectorySource::new(config.sheet_csv_url.clone()));
    let directory = DirectoryService::new(source);
    let store: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::new(config.session_path.clone()));
    let auth = Arc::new(AuthService::new(directory, store, config.api_url.clone()));

    // The hosted deployment injects the real data-sync collaborator; the
    // desktop build runs the in-memory binding behind the same trait.
    let sync: Arc<dyn ProgressSync> = Arc::new(InMemoryProgressSync::new());
    let progress = Arc::new(ProgressService::new(Clock::default_clock(), sync));

    let admin = Arc::new(AdminService::new(config.api_url.clone()));
    let theme = Arc::new(ThemeService::new());

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        auth,
        progress,
        admin,
        theme: Arc::clone(&theme),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(theme.active().platform_title)
            .with_always_on_top(false),
    );

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
