use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use chromaplot::{render::ImageRenderer, ColorspaceResult, PlotOptions, RawColorspace};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Plot a colour-space result to an image.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file holding the result: `{ "space": "tcs", "rows": [...] }`.
    input: PathBuf,

    /// Where to write the image. The format follows the extension.
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    /// JSON file with plot options. Fields left out keep their defaults.
    #[arg(short, long, env = "CHROMAPLOT_CONFIG")]
    config: Option<PathBuf>,

    /// TrueType font used for labels and the title.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Title drawn above the plot. Overrides the configuration file.
    #[arg(long)]
    title: Option<String>,

    /// Image width and height in pixels. Overrides the configuration file.
    #[arg(long)]
    size: Option<u32>,
}

fn load_options(args: &Args) -> Result<PlotOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid plot options in {}", path.display()))?
        }
        None => PlotOptions::default(),
    };

    if let Some(title) = &args.title {
        options = options.with_title(title.clone());
    }
    if let Some(size) = args.size {
        options = options.with_size(size, size);
    }

    Ok(options)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    debug!(?args, "starting");

    let options = load_options(&args)?;

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("could not read {}", args.input.display()))?;
    let raw: RawColorspace = serde_json::from_str(&text)
        .with_context(|| format!("invalid colour space result in {}", args.input.display()))?;
    let result = ColorspaceResult::try_from(raw)
        .with_context(|| format!("could not read {}", args.input.display()))?;

    let mut renderer = ImageRenderer::new();
    if let Some(path) = &args.font {
        let data = fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
        renderer = renderer
            .with_font(data)
            .with_context(|| format!("could not load font {}", path.display()))?;
    }

    chromaplot::render::plot_to_file(&result, &options, &mut renderer, &args.output)
        .with_context(|| format!("could not plot to {}", args.output.display()))?;

    Ok(())
}
