//! Qrframe Render: from payload text to a vector tree
//!
//! The stages, in dependency order:
//!
//! 1. **Matrix** — encode the payload into the square dark/light grid
//!    via the `qrcode` crate ([`matrix`])
//! 2. **Modules** — one shape per remaining dark cell ([`modules`])
//! 3. **Eyes** — the three finder patterns as concentric triples,
//!    never drawn by the module path ([`eyes`])
//! 4. **Excavation** — centered keep-out region for logo overlays
//!    ([`excavate`])
//! 5. **Gradient** — symbol-local fill definition ([`gradient`])
//! 6. **Compose** — orchestration, frame delegation, final scaling
//!    ([`compose`])
//!
//! Everything past the matrix is pure and synchronous; [`QrRenderer`]
//! adds an LRU over the matrix stage for hosts that re-render on every
//! keystroke.

pub mod cache;
pub mod compose;
pub mod excavate;
pub mod eyes;
pub mod gradient;
pub mod matrix;
pub mod modules;

pub use cache::MatrixCache;
pub use compose::{build_vector, render, QrRenderer, RenderOptions, SYMBOL_GROUP_ID};
pub use excavate::{logo_overlay, Excavation};
pub use eyes::{eye_nodes, finder_positions, in_finder, FINDER_SPAN};
pub use gradient::{gradient_def, GRADIENT_ID};
pub use matrix::SymbolMatrix;
pub use modules::module_nodes;
