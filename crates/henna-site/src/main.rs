//! Entry point for the Faria's Henna landing page.
//!
//! This Dioxus desktop application shows the splash screen, then the page.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use henna_logging::{FileConfig, HennaSubscriberBuilder, LogConfig, RotationStrategy};
use henna_site::components::App;
use henna_site::config::SiteConfig;
use henna_site::content::BUSINESS_NAME;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the resolved site config.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "henna-site")]
#[command(about = "Landing page for Faria's Henna")]
struct Args {
    /// Path to a TOML site config (defaults are used if not provided)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the splash screen delay in milliseconds
    #[arg(long)]
    splash_ms: Option<u64>,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let mut logging = HennaSubscriberBuilder::new()
        .with_config(LogConfig::development())
        .with_level(args.log_level);
    if let Some(directory) = args.log_dir {
        logging = logging.with_file_output(FileConfig {
            directory,
            prefix: "henna-site".to_string(),
            rotation: RotationStrategy::Daily,
        });
    }
    let _log_guard = logging.init();

    tracing::info!("Starting {} landing page", BUSINESS_NAME);

    let mut config = SiteConfig::load_or_default(args.config.as_deref());
    if let Some(splash_ms) = args.splash_ms {
        tracing::info!("Splash delay overridden to {}ms", splash_ms);
        config.splash_delay_ms = splash_ms;
    }
    SITE_CONFIG.set(config).ok();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(BUSINESS_NAME)
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <meta name="viewport" content="width=device-width, initial-scale=1">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(RootApp);
}

/// Root component that hands the resolved config to the app.
#[component]
fn RootApp() -> Element {
    let config = use_hook(|| SITE_CONFIG.get().cloned().unwrap_or_default());

    use_drop(|| {
        tracing::info!("Shutting down {} landing page", BUSINESS_NAME);
    });

    rsx! {
        App { config }
    }
}
