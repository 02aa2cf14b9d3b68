#![forbid(unsafe_code)]

//! Bidirectional bridge between nested multi-pane layout documents and the
//! flat session/compiler state model.
//!
//! # Role
//! - [`normalize`]: depth-first fold of an arbitrary layout document into a
//!   [`statefold_model::State`], merging panes by session key.
//! - [`synthesize`]: deterministic reconstruction of a canonical,
//!   fixed-shape document from a state, geometry chosen by session and
//!   compiler counts.
//!
//! The two directions are independent pure functions sharing only the state
//! type. A normalize→synthesize round trip preserves session and compiler
//! content, never the original nesting or geometry.

pub mod normalize;
pub mod schema;
pub mod synthesize;

pub use normalize::{LayoutReadError, normalize, normalize_str};
pub use schema::{
    COMPONENT_COMPILER, COMPONENT_EDITOR, CompilerPaneState, EditorPaneState, LayoutDimensions,
    LayoutItem, LayoutLabels, LayoutSettings, LayoutTree, PaneFilters, PaneState,
};
pub use synthesize::synthesize;
