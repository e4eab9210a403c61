#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use bodsphere_core::{LoggingBuilder, SiteContent, DEFAULT_DURATION};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::LaunchSettings;

/// Global launch settings, set from command line
static LAUNCH_SETTINGS: OnceLock<LaunchSettings> = OnceLock::new();

/// Get the launch settings (set from command line or built-in defaults)
pub fn get_launch_settings() -> LaunchSettings {
    LAUNCH_SETTINGS.get().cloned().unwrap_or_else(|| LaunchSettings {
        content: SiteContent::default(),
        count_up: DEFAULT_DURATION,
    })
}

/// Record the launch settings. Only the first call takes effect; returns
/// whether this call did.
fn set_launch_settings(settings: LaunchSettings) -> bool {
    let stored = LAUNCH_SETTINGS.set(settings).is_ok();
    if !stored {
        tracing::debug!("launch settings already set, keeping the first value");
    }
    stored
}

/// Bodsphere - yoga subscription landing page
#[derive(Parser, Debug)]
#[command(name = "bodsphere-desktop")]
#[command(about = "Bodsphere - yoga subscription landing page")]
struct Args {
    /// JSON file replacing the built-in page content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Write the built-in page content as JSON to this path and exit
    #[arg(long)]
    dump_content: Option<PathBuf>,

    /// Length of the stats count-up animation, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DURATION.as_millis() as u64, value_parser = clap::value_parser!(u64).range(1..))]
    count_up_ms: u64,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new();
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    logging.try_init().context("failed to set up logging")?;

    if let Some(path) = &args.dump_content {
        SiteContent::default()
            .save(path)
            .with_context(|| format!("failed to write content to {}", path.display()))?;
        tracing::info!("Wrote built-in content to {:?}", path);
        return Ok(());
    }

    let content = match &args.content {
        Some(path) => SiteContent::load(path)
            .with_context(|| format!("failed to load content from {}", path.display()))?,
        None => SiteContent::default(),
    };

    let title = content.brand.clone();
    let settings = LaunchSettings {
        content,
        count_up: Duration::from_millis(args.count_up_ms),
    };
    set_launch_settings(settings);

    tracing::info!(
        "Starting '{}' ({}x{}, count-up {}ms)",
        title,
        args.width,
        args.height,
        args.count_up_ms
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_settings_keep_first_value() {
        let first = LaunchSettings {
            content: SiteContent::default(),
            count_up: Duration::from_millis(750),
        };
        let second = LaunchSettings {
            content: SiteContent::default(),
            count_up: Duration::from_millis(3_000),
        };
        assert!(set_launch_settings(first));
        assert!(!set_launch_settings(second));
        assert_eq!(get_launch_settings().count_up, Duration::from_millis(750));
    }
}
