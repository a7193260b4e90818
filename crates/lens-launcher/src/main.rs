//! Lens launcher command-line entry point.
//!
//! Loads the settings file, then runs one subcommand:
//!
//! ```text
//! lens-launcher grid     --width 1080 --height 1920 --items 40 [--dpi 420]
//! lens-launcher frame    --width 1080 --height 1920 --items 40 --x 540 --y 960
//! lens-launcher settings show
//! lens-launcher settings set lens_diameter 800
//! ```
//!
//! `grid` and `frame` print JSON on stdout so the output can be fed to a
//! renderer or inspected with `jq`.  Logs go to stderr.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lens_core::{BoolKey, FloatKey, FocalPoint};
use lens_launcher::application::layout_grid::{layout_grid, LayoutRequest};
use lens_launcher::application::lens_frame::compose_frame;
use lens_launcher::infrastructure::display::FixedDisplayMetrics;
use lens_launcher::infrastructure::storage::config::{SettingsStore, TomlSettingsStore};

#[derive(Debug, Parser)]
#[command(name = "lens-launcher", version, about = "Grid layout and fisheye lens for app launchers")]
struct Cli {
    /// Settings file to use instead of the platform default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the grid for a viewport.
    Grid(ViewportArgs),
    /// Print every item's position and size for one focal point.
    Frame {
        #[command(flatten)]
        viewport: ViewportArgs,
        /// Focal point X; omit both coordinates for a frame without lens.
        #[arg(long, requires = "y", allow_negative_numbers = true)]
        x: Option<f32>,
        /// Focal point Y.
        #[arg(long, requires = "x", allow_negative_numbers = true)]
        y: Option<f32>,
    },
    /// Show or change settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(Debug, Args)]
struct ViewportArgs {
    /// Viewport width in physical pixels.
    #[arg(long)]
    width: u32,
    /// Viewport height in physical pixels.
    #[arg(long)]
    height: u32,
    /// Number of apps to lay out.
    #[arg(long)]
    items: usize,
    /// Minimum top margin in physical pixels.
    #[arg(long, default_value_t = 0)]
    top_offset: i32,
    /// Display density in dots per inch.
    #[arg(long, default_value_t = 160)]
    dpi: u32,
}

impl ViewportArgs {
    fn request(&self) -> LayoutRequest {
        LayoutRequest {
            viewport_width: self.width,
            viewport_height: self.height,
            item_count: self.items,
            desired_top_offset: self.top_offset,
        }
    }
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Print the current settings as TOML.
    Show,
    /// Save one setting.
    Set {
        /// Setting name, e.g. `lens_diameter` or `vibrate_app_launch`.
        key: String,
        /// New value (`true`/`false` for toggles).
        value: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut store = match &cli.config {
        Some(path) => TomlSettingsStore::open(path.clone()),
        None => TomlSettingsStore::open_default(),
    }
    .context("failed to load settings")?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&store.config().logging.level)),
        )
        .init();

    info!("using settings at {}", store.path().display());

    match cli.command {
        Command::Grid(viewport) => {
            let metrics = FixedDisplayMetrics::new(viewport.dpi);
            let grid = layout_grid(&viewport.request(), &store.snapshot(), &metrics)?;
            println!("{}", serde_json::to_string_pretty(&grid)?);
        }
        Command::Frame { viewport, x, y } => {
            // One snapshot for the layout and the frame.
            let settings = store.snapshot();
            let metrics = FixedDisplayMetrics::new(viewport.dpi);
            let grid = layout_grid(&viewport.request(), &settings, &metrics)?;
            let focal = x.zip(y).map(|(x, y)| FocalPoint::new(x, y));
            let frame = compose_frame(&grid, viewport.height as f32, focal, &settings)?;
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Command::Settings(SettingsCommand::Show) => {
            print!("{}", toml::to_string_pretty(store.config())?);
        }
        Command::Settings(SettingsCommand::Set { key, value }) => {
            set_setting(&mut store, &key, &value)?;
            info!("{key} = {value}");
        }
    }

    Ok(())
}

/// Parses `key` and `value` and saves them through `store`.
fn set_setting(store: &mut dyn SettingsStore, key: &str, value: &str) -> anyhow::Result<()> {
    if let Ok(float_key) = key.parse::<FloatKey>() {
        let value: f32 = value
            .parse()
            .with_context(|| format!("{key} expects a number, got {value:?}"))?;
        store.save_float(float_key, value)?;
    } else {
        let bool_key: BoolKey = key.parse()?;
        let value: bool = value
            .parse()
            .with_context(|| format!("{key} expects true or false, got {value:?}"))?;
        store.save_bool(bool_key, value)?;
    }
    Ok(())
}
