use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use ringcal::args::alignment_from_args;
use ringcal::{CalendarBuilder, LayoutConfig, SvgRenderer};
use ringcal_raster::{DEFAULT_DPI, ResvgRenderer};
use tracing::info;

#[derive(Parser)]
#[command(name = "ringcal", about = "Generate a two-ring Gregorian/Hijri calendar")]
struct Cli {
    /// Gregorian date to align to (YYYY-MM-DD or YY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<String>,

    /// Hijri date to align to (YYYY-MM-DD or YY-MM-DD); wins over --date
    #[arg(long)]
    hijri: Option<String>,

    /// Ring scale factor; also picks how many month pairs fit per page
    #[arg(long, default_value_t = LayoutConfig::default().scale_factor)]
    scale: f64,

    /// Days in the solar year (365 or 366)
    #[arg(long, default_value_t = LayoutConfig::default().days_in_year)]
    days_in_year: u32,

    /// Output directory
    #[arg(short, long, default_value = "out")]
    out: PathBuf,

    /// Also rasterize every page to PNG
    #[arg(long)]
    png: bool,

    /// PNG resolution
    #[arg(long, default_value_t = DEFAULT_DPI)]
    dpi: f64,
}

fn write_page(path: &Path, svg: &str, renderer: Option<&ResvgRenderer>) -> anyhow::Result<()> {
    fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote page");

    if let Some(renderer) = renderer {
        let page = renderer
            .render(svg)
            .with_context(|| format!("rasterizing {}", path.display()))?;
        let png_path = path.with_extension("png");
        fs::write(&png_path, &page.png).with_context(|| format!("writing {}", png_path.display()))?;
        info!(path = %png_path.display(), width = page.width_px, height = page.height_px, "wrote png");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let alignment = alignment_from_args(cli.date.as_deref(), cli.hijri.as_deref())
        .map_err(|e| anyhow::anyhow!("{:?}", miette::Report::new(e)))?;
    info!("\n{alignment}");
    info!(scale = cli.scale, "scale factor");

    let config = LayoutConfig::default()
        .with_scale(cli.scale)
        .with_days_in_year(cli.days_in_year);
    let builder = CalendarBuilder::new(config);
    let set = builder.build(&alignment);

    fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;
    let renderer = cli.png.then(|| ResvgRenderer::new(cli.dpi));

    for (n, svg) in set.pages.iter().enumerate() {
        let path = cli.out.join(format!("calendar_page_{}_{n}.svg", cli.scale));
        write_page(&path, svg, renderer.as_ref())?;
    }

    let cover = cli
        .out
        .join(format!("calendar_page_{}_{}_cover.svg", cli.scale, set.pages.len()));
    write_page(&cover, &set.cover, renderer.as_ref())?;

    info!(pages = set.pages.len() + 1, dir = %cli.out.display(), "done");
    Ok(())
}
