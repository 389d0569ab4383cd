use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use neural_backdrop::{BackdropConfig, NeuralBackdropApp};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file with backdrop settings
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<f32>,
    #[arg(long)]
    height: Option<f32>,
    /// Frames of fading history behind moving nodes (0 disables trails)
    #[arg(long)]
    trail_frames: Option<usize>,
    /// Show FPS and node/link counts in the corner
    #[arg(long)]
    show_stats: bool,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "neural_backdrop=info")]
    log_filter: String,
}

impl Args {
    fn apply(&self, config: &mut BackdropConfig) {
        if let Some(width) = self.width {
            config.window_size[0] = width;
        }
        if let Some(height) = self.height {
            config.window_size[1] = height;
        }
        if let Some(trail_frames) = self.trail_frames {
            config.trail_frames = trail_frames;
        }
        if self.show_stats {
            config.show_stats = true;
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter)),
        )
        .init();

    let mut config = match &args.config {
        Some(path) => BackdropConfig::load(path)?,
        None => BackdropConfig::default(),
    };
    args.apply(&mut config);
    info!(
        width = config.window_size[0],
        height = config.window_size[1],
        trail_frames = config.trail_frames,
        "starting neural backdrop"
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("neural backdrop"),
        ..Default::default()
    };

    eframe::run_native(
        "neural-backdrop",
        options,
        Box::new(move |cc| Ok(Box::new(NeuralBackdropApp::new(cc, config)))),
    )
    .map_err(|error| anyhow!("backdrop window failed: {error}"))
}
