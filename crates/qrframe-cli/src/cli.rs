//! CLI argument definitions using Clap v4

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// qrframe - styled QR codes with decorative frames
#[derive(Parser, Debug)]
#[command(name = "qrframe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Display available frames and style options
    #[command(alias = "i")]
    Info(InfoArgs),

    /// Render a payload to an image file
    #[command(alias = "r")]
    Render(Box<RenderArgs>),
}

/// Arguments for the info command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// List registered decorative frames
    #[arg(long)]
    pub frames: bool,

    /// List module and eye style names
    #[arg(long)]
    pub styles: bool,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Payload text to encode (typically a URL)
    pub payload: String,

    /// Output file; extension is added from the format when missing
    #[arg(short = 'o', long = "output", default_value = "qrcode")]
    pub output: PathBuf,

    /// Output format: svg, png
    #[arg(short = 'F', long = "format", default_value = "svg")]
    pub format: String,

    /// Display size in pixels for the longer dimension
    #[arg(short = 's', long = "size")]
    pub size: Option<f64>,

    /// Module style: square, dots, rounded
    #[arg(long = "module-style")]
    pub module_style: Option<String>,

    /// Eye style: square, circle, rounded, leaf, diamond
    #[arg(long = "eye-style")]
    pub eye_style: Option<String>,

    /// Foreground color (#rrggbb or name)
    #[arg(long = "fg")]
    pub foreground: Option<String>,

    /// Background color (#rrggbb or name)
    #[arg(long = "bg")]
    pub background: Option<String>,

    /// Eye color override (defaults to foreground)
    #[arg(long = "eye-color")]
    pub eye_color: Option<String>,

    /// Gradient as start,end,direction
    /// (direction: vertical, horizontal, diagonal, radial)
    #[arg(long = "gradient")]
    pub gradient: Option<String>,

    /// Logo image path or URL; forces error correction to high
    #[arg(long = "logo")]
    pub logo: Option<String>,

    /// Decorative frame name (see `qrframe info --frames`);
    /// unknown names fall back to no frame
    #[arg(short = 'f', long = "frame", default_value = "none")]
    pub frame: String,

    /// Caption text for frames that display one
    #[arg(short = 'c', long = "caption")]
    pub caption: Option<String>,

    /// Error-correction level: l, m, q, h
    #[arg(long = "ec-level")]
    pub ec_level: Option<String>,

    /// JSON style file; command-line flags override its values
    #[arg(long = "style-file")]
    pub style_file: Option<PathBuf>,

    /// Root element id for the output document
    #[arg(long = "id")]
    pub id: Option<String>,

    /// Suppress progress output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
