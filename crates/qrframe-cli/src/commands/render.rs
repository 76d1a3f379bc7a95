//! Render command implementation

use crate::cli::RenderArgs;
use qrframe::export::{exporter_for, write_artifact, Exporter};
use qrframe::{
    Color, EcLevel, EyeStyle, FrameKind, FrameSpec, GradientDirection, GradientSpec, LogoRef,
    ModuleStyle, QrError, RenderOptions, Result, StyleConfig,
};

pub fn run(args: &RenderArgs) -> Result<()> {
    let style = build_style(args)?;
    let frame = FrameSpec::new(FrameKind::from_name(&args.frame), args.caption.clone());
    log::debug!("rendering {} bytes as {}", args.payload.len(), args.format);
    let opts = RenderOptions {
        display_size: args.size,
        id: args.id.clone(),
    };

    let vector = qrframe::render(&args.payload, &style, &frame, &opts)?
        .ok_or_else(|| QrError::ConfigError("empty payload, nothing to render".into()))?;

    let exporter = exporter_for(&args.format)
        .ok_or_else(|| QrError::ConfigError(format!("unknown format {:?}", args.format)))?;
    let bytes = exporter.export(&vector)?;
    let path = write_artifact(&args.output, &bytes, exporter.extension())?;

    if !args.quiet {
        eprintln!(
            "wrote {} ({} bytes, {:.0}x{:.0})",
            path.display(),
            bytes.len(),
            vector.width,
            vector.height
        );
    }
    Ok(())
}

/// Resolve the effective style: the style file (if any) supplies the
/// base, command-line flags override individual fields.
pub fn build_style(args: &RenderArgs) -> Result<StyleConfig> {
    let mut style = match &args.style_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<StyleConfig>(&raw)
                .map_err(|e| QrError::ConfigError(format!("{}: {e}", path.display())))?
        }
        None => StyleConfig::default(),
    };

    if let Some(name) = &args.module_style {
        style.module_style = parse_module_style(name)?;
    }
    if let Some(name) = &args.eye_style {
        style.eye_style = parse_eye_style(name)?;
    }
    if let Some(raw) = &args.foreground {
        style.foreground = parse_color(raw)?;
    }
    if let Some(raw) = &args.background {
        style.background = parse_color(raw)?;
    }
    if let Some(raw) = &args.eye_color {
        style.eye_color = Some(parse_color(raw)?);
    }
    if let Some(raw) = &args.gradient {
        style.gradient = Some(parse_gradient(raw)?);
    }
    if let Some(href) = &args.logo {
        style.logo = Some(LogoRef { href: href.clone() });
    }
    if let Some(name) = &args.ec_level {
        style.ec_level = parse_ec_level(name)?;
    }
    Ok(style)
}

fn parse_color(raw: &str) -> Result<Color> {
    raw.parse::<Color>()
        .map_err(|e| QrError::ConfigError(e.to_string()))
}

fn parse_module_style(name: &str) -> Result<ModuleStyle> {
    match name.to_ascii_lowercase().as_str() {
        "square" => Ok(ModuleStyle::Square),
        "dots" => Ok(ModuleStyle::Dots),
        "rounded" => Ok(ModuleStyle::Rounded),
        _ => Err(QrError::ConfigError(format!("unknown module style {name:?}"))),
    }
}

fn parse_eye_style(name: &str) -> Result<EyeStyle> {
    match name.to_ascii_lowercase().as_str() {
        "square" => Ok(EyeStyle::Square),
        "circle" => Ok(EyeStyle::Circle),
        "rounded" => Ok(EyeStyle::Rounded),
        "leaf" => Ok(EyeStyle::Leaf),
        "diamond" => Ok(EyeStyle::Diamond),
        _ => Err(QrError::ConfigError(format!("unknown eye style {name:?}"))),
    }
}

fn parse_ec_level(name: &str) -> Result<EcLevel> {
    match name.to_ascii_lowercase().as_str() {
        "l" | "low" => Ok(EcLevel::Low),
        "m" | "medium" => Ok(EcLevel::Medium),
        "q" | "quartile" => Ok(EcLevel::Quartile),
        "h" | "high" => Ok(EcLevel::High),
        _ => Err(QrError::ConfigError(format!("unknown EC level {name:?}"))),
    }
}

fn parse_gradient(raw: &str) -> Result<GradientSpec> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let (start, end, direction) = match parts.as_slice() {
        [start, end] => (*start, *end, "vertical"),
        [start, end, direction] => (*start, *end, *direction),
        _ => {
            return Err(QrError::ConfigError(format!(
                "expected start,end[,direction], got {raw:?}"
            )))
        }
    };
    let direction = match direction.to_ascii_lowercase().as_str() {
        "vertical" => GradientDirection::Vertical,
        "horizontal" => GradientDirection::Horizontal,
        "diagonal" => GradientDirection::Diagonal,
        "radial" => GradientDirection::Radial,
        other => {
            return Err(QrError::ConfigError(format!(
                "unknown gradient direction {other:?}"
            )))
        }
    };
    Ok(GradientSpec {
        start: parse_color(start)?,
        end: parse_color(end)?,
        direction,
    })
}
