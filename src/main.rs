use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

use squiggler::config::Config;
use squiggler::draw::{CairoSurface, StrokeStyle};
use squiggler::input::PointerSession;
use squiggler::ui::StyleSelector;
use squiggler::util::Point;

#[derive(Parser, Debug)]
#[command(name = "squiggler")]
#[command(version, about = "Decorative freehand stroke sketchpad")]
struct Cli {
    /// List available stroke styles and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_styles: bool,

    /// Stroke style to render with (overrides the config default)
    #[arg(long, short = 's', value_name = "STYLE")]
    style: Option<String>,

    /// Render a sample stroke per style (or only the selected style) to a PNG
    #[arg(long, short = 'r', value_name = "PATH")]
    render: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_styles {
        for style in StrokeStyle::ALL {
            println!("{}", style.label());
        }
        return Ok(());
    }

    let config = Config::load()?;

    let style_override = cli
        .style
        .as_deref()
        .map(str::parse::<StrokeStyle>)
        .transpose()?;

    if let Some(path) = cli.render.as_deref() {
        render_samples(&config, style_override, path)?;
        return Ok(());
    }

    // No flags: show usage
    println!("squiggler: decorative freehand stroke sketchpad");
    println!();
    println!("Usage:");
    println!("  squiggler --list-styles            List the registered stroke styles");
    println!("  squiggler --render <out.png>       Render a sample stroke per style");
    println!("  squiggler --render <out.png> -s wobble");
    println!("                                     Render only the chosen style");
    println!("  squiggler --help                   Show help");
    println!();
    println!("Stroke color, width, and surface size are read from");
    println!("~/.config/squiggler/config.toml when present.");

    Ok(())
}

/// Drives a synthetic pointer trace through the full pipeline (session,
/// selector, curve generators, Cairo surface) and writes the result.
fn render_samples(config: &Config, only: Option<StrokeStyle>, path: &Path) -> anyhow::Result<()> {
    let mut surface = CairoSurface::new(
        config.surface.width,
        config.surface.height,
        config.surface.background.to_color(),
        config.drawing.stroke_color.to_color(),
        config.drawing.stroke_width,
    )?;

    let styles: Vec<StrokeStyle> = match only {
        Some(style) => vec![style],
        None => StrokeStyle::ALL.to_vec(),
    };

    let mut selector = StyleSelector::new(config.initial_style());
    // The sample surface occupies the whole page, so page and canvas
    // coordinates coincide.
    let mut session = PointerSession::new(selector.current(), Point::new(0.0, 0.0));

    let width = config.surface.width as f64;
    let height = config.surface.height as f64;
    let rows = styles.len() as f64;
    let steps = 24;

    for (i, style) in styles.iter().enumerate() {
        selector.select(*style);
        session.set_style(selector.current());

        let y = height * (i as f64 + 0.5) / rows;
        let x0 = width * 0.1;
        let x1 = width * 0.9;

        session.on_press(x0, y);
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            session.on_motion(&mut surface, x0 + (x1 - x0) * t, y);
        }
        session.on_release();

        log::info!("Rendered sample stroke for style '{}'", style.label());
    }

    surface.write_png(path)?;
    Ok(())
}
