//! textgraph CLI - Render an image URL or file as text graphics

use clap::Parser;
use std::path::PathBuf;
use textgraph::{Converter, ImageSource, Locator, Settings, TextGraphError};

#[derive(Parser)]
#[command(name = "textgraph", about = "Render images as text graphics")]
struct Args {
    /// Image URL or file path
    location: String,
    /// Maximum width in pixels before conversion (0 = unlimited)
    #[arg(short = 'W', long)]
    max_width: Option<u32>,
    /// Maximum height in pixels before conversion (0 = unlimited)
    #[arg(short = 'H', long)]
    max_height: Option<u32>,
    /// Maximum long-side/short-side ratio (0 = unlimited)
    #[arg(short = 'r', long)]
    max_ratio: Option<f64>,
    /// Glyphs ordered from darkest to lightest
    #[arg(short, long)]
    palette: Option<String>,
    /// JSON settings file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Invert the image
    #[arg(short, long)]
    invert: bool,
    /// Write the text to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), TextGraphError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(width) = args.max_width {
        settings.max_width = width;
    }
    if let Some(height) = args.max_height {
        settings.max_height = height;
    }
    if let Some(ratio) = args.max_ratio {
        settings.max_ratio = ratio;
    }
    if args.palette.is_some() {
        settings.palette = args.palette;
    }

    let converter = Converter::from_settings(&settings)?;

    let mut image = Locator::new().open(&args.location)?;
    if args.invert {
        image.invert();
    }

    let text = converter.convert_image(&image)?;
    match args.output {
        Some(path) => {
            std::fs::write(&path, &text)?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
