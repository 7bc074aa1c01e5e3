use std::path::PathBuf;

use clap::Parser;
use peek_common::Size;

/// peek: load an embed snippet into a draggable overlay panel on a
/// headless page, replay input against it, and print the result.
#[derive(Parser, Debug)]
#[command(name = "peek", version, about)]
pub struct Args {
    /// Embed markup (an `<iframe ...>` snippet).
    #[arg(long, conflicts_with = "embed_file")]
    pub embed: Option<String>,

    /// Read the embed markup from a file. Stdin is read when neither
    /// `--embed` nor `--embed-file` is given.
    #[arg(long)]
    pub embed_file: Option<PathBuf>,

    /// Chords to replay after loading, e.g. `Ctrl+Shift+Z,Ctrl+Shift+Space`.
    #[arg(long, value_delimiter = ',')]
    pub keys: Vec<String>,

    /// Drag the handle by `dx,dy` pixels after loading.
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    pub drag: Option<(i32, i32)>,

    /// Host viewport as `WIDTHxHEIGHT`.
    #[arg(long, value_parser = parse_viewport, default_value = "1280x720")]
    pub viewport: Size,

    /// Install the overlay runtime before the trigger runs.
    #[arg(long)]
    pub preinstalled: bool,

    /// Simulate a page that refuses script injection.
    #[arg(long)]
    pub restricted: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_offset(s: &str) -> Result<(i32, i32), String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected dx,dy but got '{s}'"))?;
    let dx = dx.trim().parse().map_err(|e| format!("bad dx '{dx}': {e}"))?;
    let dy = dy.trim().parse().map_err(|e| format!("bad dy '{dy}': {e}"))?;
    Ok((dx, dy))
}

fn parse_viewport(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT but got '{s}'"))?;
    let width: i32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let height: i32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if width <= 0 || height <= 0 {
        return Err(format!("viewport must be positive, got {width}x{height}"));
    }
    Ok(Size::new(width, height))
}
