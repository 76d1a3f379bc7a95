//! The composed renderer
//!
//! Orchestrates the whole pipeline for one invocation: resolve the
//! effective error-correction level, obtain the matrix, build module
//! and eye shapes around the excavation and finder skip predicates,
//! attach the gradient definition and logo overlay, then either wrap
//! the bare symbol or hand it to the selected frame for composition
//! and final proportional scaling.

use std::sync::Arc;

use qrframe_core::{
    Fill, FrameRenderer, FrameSpec, Group, Node, RenderedVector, Result, StyleConfig, CELL,
};

use crate::cache::MatrixCache;
use crate::excavate::{logo_overlay, Excavation};
use crate::eyes::{eye_nodes, finder_positions, in_finder};
use crate::gradient::{gradient_def, GRADIENT_ID};
use crate::matrix::SymbolMatrix;
use crate::modules::module_nodes;

/// Id of the group holding the rendered symbol, inside any frame.
pub const SYMBOL_GROUP_ID: &str = "qr-symbol";

/// Per-invocation knobs that are not visual style.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Target display size in pixels for the longer dimension. When
    /// unset, the output keeps its internal coordinate extent.
    pub display_size: Option<f64>,
    /// Root element identifier for the output document.
    pub id: Option<String>,
}

/// Render a payload in one shot, without matrix memoization.
///
/// Returns `Ok(None)` for an empty payload — there is nothing to draw
/// and callers must not invoke export in that state.
pub fn render(
    payload: &str,
    style: &StyleConfig,
    frame: &FrameSpec,
    opts: &RenderOptions,
) -> Result<Option<RenderedVector>> {
    if payload.is_empty() {
        log::debug!("empty payload, nothing to render");
        return Ok(None);
    }
    let matrix = SymbolMatrix::encode(payload, style.effective_ec_level())?;
    Ok(Some(build_vector(&matrix, style, frame, opts)))
}

/// Memoizing renderer for hosts that re-render on every style change.
///
/// The matrix stage (expensive-ish, rare) is cached on (payload,
/// effective level); the vector rebuild (cheap, frequent) runs every
/// call.
#[derive(Default)]
pub struct QrRenderer {
    matrices: MatrixCache,
}

impl QrRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &self,
        payload: &str,
        style: &StyleConfig,
        frame: &FrameSpec,
        opts: &RenderOptions,
    ) -> Result<Option<RenderedVector>> {
        if payload.is_empty() {
            log::debug!("empty payload, nothing to render");
            return Ok(None);
        }
        let matrix: Arc<SymbolMatrix> = self
            .matrices
            .get_or_encode(payload, style.effective_ec_level())?;
        Ok(Some(build_vector(&matrix, style, frame, opts)))
    }
}

/// Build the vector tree for an already-encoded matrix.
pub fn build_vector(
    matrix: &SymbolMatrix,
    style: &StyleConfig,
    frame: &FrameSpec,
    opts: &RenderOptions,
) -> RenderedVector {
    let size = matrix.size();
    let extent = size as f64 * CELL;

    if style.logo.is_some() {
        log::warn!(
            "logo configured: error correction forced to High (requested {:?})",
            style.ec_level
        );
    }

    let excavation = Excavation::for_symbol(size, style.logo.is_some());

    let mut defs = Vec::new();
    let module_fill = match &style.gradient {
        Some(spec) => {
            defs.push(gradient_def(spec, extent));
            Fill::Ref(GRADIENT_ID.to_owned())
        }
        None => Fill::Solid(style.foreground),
    };

    // Background first, then modules, then eyes so abutting modules
    // never occlude them, then the logo overlay on top of everything.
    let mut children = vec![Node::rect(0.0, 0.0, extent, extent, style.background)];
    children.extend(module_nodes(matrix, style.module_style, &module_fill, |row, col| {
        in_finder(size, row, col) || excavation.contains(row, col)
    }));
    for (row, col) in finder_positions(size) {
        children.extend(eye_nodes(
            row,
            col,
            style.eye_style,
            style.effective_eye_color(),
            style.background,
        ));
    }
    if let Some(logo) = &style.logo {
        children.push(logo_overlay(extent, &logo.href));
    }

    let symbol = Node::Group(Group::new(children).with_id(SYMBOL_GROUP_ID));

    let (view_box, nodes) = match qrframe_frames::lookup(frame.kind) {
        None => ((extent, extent), vec![symbol]),
        Some(renderer) => {
            log::debug!("composing frame {:?}", renderer.name());
            let canvas = renderer.size_for(extent);
            let nodes = renderer.compose(
                symbol,
                extent,
                style.foreground,
                style.background,
                frame.caption.as_deref(),
            );
            (canvas, nodes)
        }
    };

    let (width, height) = display_dims(view_box, opts.display_size);
    RenderedVector {
        width,
        height,
        view_box,
        id: opts.id.clone(),
        defs,
        nodes,
    }
}

/// Scale the canvas proportionally so the longer dimension matches the
/// requested display size.
fn display_dims(view_box: (f64, f64), display_size: Option<f64>) -> (f64, f64) {
    match display_size {
        None => view_box,
        Some(target) => {
            let long = view_box.0.max(view_box.1);
            let scale = target / long;
            (view_box.0 * scale, view_box.1 * scale)
        }
    }
}
