//! Tweaks Extra - GNOME hidden settings editor
//!
//! This is the main entry point. It handles:
//! 1. CLI argument parsing (all optional)
//! 2. Loading the configuration file
//! 3. Initializing GTK4/Libadwaita and running the application

mod ui;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use tweaks_extra::config::AppConfig;
use tweaks_extra::theme::Variant;

/// Tweaks Extra - edit GNOME settings that aren't exposed by default
#[derive(Parser, Debug)]
#[command(name = "tweaks-extra")]
#[command(about = "Editor for hidden GNOME settings")]
#[command(version)]
struct Args {
    /// Window layout to use
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Configuration file (default: ~/.config/tweaks-extra/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the title bar icons
    #[arg(long, value_name = "DIR")]
    icons_dir: Option<PathBuf>,

    /// Run even outside a GNOME desktop session
    #[arg(long)]
    skip_session_check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let _ = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str())))
        .with_target(false)
        .without_time()
        .try_init();

    info!("Tweaks Extra v{}", env!("CARGO_PKG_VERSION"));

    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(variant) = args.variant {
        config.variant = variant;
    }
    if let Some(icons_dir) = args.icons_dir {
        config.icons_dir = icons_dir;
    }
    if args.skip_session_check {
        config.session.check = false;
    }

    if std::env::var("DISPLAY").is_err() && std::env::var("WAYLAND_DISPLAY").is_err() {
        eprintln!("Error: No display server detected (X11 or Wayland).");
        std::process::exit(1);
    }

    if let Err(e) = gtk::init() {
        eprintln!("Failed to initialize GTK4: {}", e);
        eprintln!("Please ensure GTK4 is installed on your system.");
        std::process::exit(1);
    }

    if let Err(e) = adw::init() {
        eprintln!("Failed to initialize Libadwaita: {}", e);
        eprintln!("Please ensure Libadwaita is installed on your system.");
        std::process::exit(1);
    }

    let app = ui::app::TweaksApplication::new(config);
    let exit_code = app.run();

    std::process::exit(exit_code.into());
}
