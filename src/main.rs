use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use mandelbrot_explorer::{
    CliSnapshotController, LoggingConfig, MandelbrotConfig, PpmFilePresenter, init_logging,
};

const DEFAULT_OUTPUT: &str = "output/mandelbrot.ppm";
const CANVAS_WIDTH: u32 = 1024;
const CANVAS_HEIGHT: u32 = 768;
const RENDER_TIMEOUT: Duration = Duration::from_secs(300);

/// Usage: `mandelbrot_explorer [VIEW_FRAGMENT] [OUTPUT_PATH]`
///
/// The fragment looks like `#/x=-0.5&y=0&z=0.004`. Any argument containing
/// `=` is taken as the fragment, anything else as the output path.
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args, CANVAS_WIDTH, CANVAS_HEIGHT)?;

    Ok(())
}

fn run(args: &[String], canvas_width: u32, canvas_height: u32) -> Result<PathBuf> {
    let mut config = MandelbrotConfig::default();
    let mut output = PathBuf::from(DEFAULT_OUTPUT);

    for arg in args {
        if arg.contains('=') {
            config
                .view
                .update_from_fragment(arg)
                .with_context(|| format!("invalid view fragment {:?}", arg))?;
        } else {
            output = PathBuf::from(arg);
        }
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }

    let mut controller = CliSnapshotController::new(PpmFilePresenter::new());
    controller
        .generate(canvas_width, canvas_height, &config, RENDER_TIMEOUT)
        .context("rendering snapshot")?;
    write_snapshot(&controller, &output)?;

    log::info!("Saved {} (view {})", output.display(), config.view);

    Ok(output)
}

fn write_snapshot(controller: &CliSnapshotController<PpmFilePresenter>, output: &Path) -> Result<()> {
    controller
        .write(output)
        .with_context(|| format!("writing {}", output.display()))
}
