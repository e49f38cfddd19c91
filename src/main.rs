use arctanktan::config::Config;
use arctanktan::continuation::{gap, reduce};
use arctanktan::{Error, Figure};
use clap::Parser;
use std::f64::consts::FRAC_PI_2;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
///plots the continuous extension of arctan(k tan(x)) for k in 2, 1, 0.5, 0, -0.5, -1, -2
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Write each figure to DIR/k=<k>.png instead of opening windows
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
    /// Figure width in pixels
    #[arg(long)]
    width: Option<u32>,
    /// Figure height in pixels
    #[arg(long)]
    height: Option<u32>,
}
fn main() -> Result<(), Error> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok()))
        .init();
    let defaults = Config::default();
    let config = Config {
        width: args.width.unwrap_or(defaults.width),
        height: args.height.unwrap_or(defaults.height),
        ..defaults
    };
    let x0 = 3.0 * FRAC_PI_2;
    debug!(
        left = reduce(x0 - 0.001).n,
        right = reduce(x0 + 0.001).n,
        gap = gap(x0, 0.001, 2.0),
        "k = 2 across 3π/2"
    );
    let figures = arctanktan::figures(&config)?;
    match args.out {
        Some(dir) => save(&figures, &dir),
        None => display(figures),
    }
}
///RUST_LOG directives, info when unset or unparsable
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
fn save(figures: &[Figure], dir: &Path) -> Result<(), Error> {
    std::fs::create_dir_all(dir)?;
    for figure in figures {
        figure.save_png(dir.join(figure.file_name()))?;
    }
    Ok(())
}
#[cfg(feature = "winit")]
fn display(figures: Vec<Figure>) -> Result<(), Error> {
    arctanktan::show(figures)
}
#[cfg(not(feature = "winit"))]
fn display(figures: Vec<Figure>) -> Result<(), Error> {
    tracing::warn!("built without the winit feature, writing figures to the working directory");
    save(&figures, Path::new("."))
}
