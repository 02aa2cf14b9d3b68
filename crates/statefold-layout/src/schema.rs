//! Canonical layout document schema.
//!
//! Typed shape of the documents [`crate::synthesize`] produces: a fixed
//! presentation skeleton (settings, dimensions, labels) over a content tree
//! of rows, columns, stacks, and panes. The skeleton blocks are constant
//! configuration values, carried by the `Default` impls, never derived from
//! the state being laid out.
//!
//! The schema is serialize-only. The normalizer consumes arbitrary
//! [`serde_json::Value`] documents, so nothing here needs to deserialize.

use serde::Serialize;
use serde_json::Value;

use statefold_model::{CompilerFilters, SessionId};

/// Component kind tag for source editor panes.
pub const COMPONENT_EDITOR: &str = "codeEditor";
/// Component kind tag for compiler panes.
pub const COMPONENT_COMPILER: &str = "compiler";

/// Top-level canonical layout document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutTree {
    pub settings: LayoutSettings,
    pub dimensions: LayoutDimensions,
    pub labels: LayoutLabels,
    pub content: Vec<LayoutItem>,
}

impl LayoutTree {
    /// Serialize to a generic JSON value.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Serialize to compact JSON text.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Fixed presentation settings block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSettings {
    pub has_headers: bool,
    pub constrain_drag_to_container: bool,
    pub reorder_enabled: bool,
    pub selection_enabled: bool,
    pub popout_whole_stack: bool,
    pub blocked_popouts_throw_error: bool,
    pub close_popouts_on_unload: bool,
    pub show_popout_icon: bool,
    pub show_maximise_icon: bool,
    pub show_close_icon: bool,
    pub responsive_mode: String,
    pub tab_overlap_allowance: u32,
    pub reorder_on_tab_menu_click: bool,
    pub tab_control_offset: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            has_headers: true,
            constrain_drag_to_container: false,
            reorder_enabled: true,
            selection_enabled: false,
            popout_whole_stack: false,
            blocked_popouts_throw_error: true,
            close_popouts_on_unload: true,
            show_popout_icon: false,
            show_maximise_icon: true,
            show_close_icon: true,
            responsive_mode: "onload".to_owned(),
            tab_overlap_allowance: 0,
            reorder_on_tab_menu_click: true,
            tab_control_offset: 10,
        }
    }
}

/// Fixed chrome dimensions block, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDimensions {
    pub border_width: u32,
    pub border_grab_width: u32,
    pub min_item_height: u32,
    pub min_item_width: u32,
    pub header_height: u32,
    pub drag_proxy_width: u32,
    pub drag_proxy_height: u32,
}

impl Default for LayoutDimensions {
    fn default() -> Self {
        Self {
            border_width: 5,
            border_grab_width: 15,
            min_item_height: 10,
            min_item_width: 10,
            header_height: 20,
            drag_proxy_width: 300,
            drag_proxy_height: 200,
        }
    }
}

/// Fixed UI label strings block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutLabels {
    pub close: String,
    pub maximise: String,
    pub minimise: String,
    pub popout: String,
    pub popin: String,
    pub tab_dropdown: String,
}

impl Default for LayoutLabels {
    fn default() -> Self {
        Self {
            close: "close".to_owned(),
            maximise: "maximise".to_owned(),
            minimise: "minimise".to_owned(),
            popout: "open in new window".to_owned(),
            popin: "pop in".to_owned(),
            tab_dropdown: "additional tabs".to_owned(),
        }
    }
}

/// One node in the canonical content tree.
///
/// Widths are percentages of the enclosing group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutItem {
    Row {
        content: Vec<LayoutItem>,
    },
    #[serde(rename_all = "camelCase")]
    Column {
        is_closable: bool,
        reorder_enabled: bool,
        width: f64,
        content: Vec<LayoutItem>,
    },
    Stack {
        width: f64,
        content: Vec<LayoutItem>,
    },
    #[serde(rename_all = "camelCase")]
    Component {
        component_name: String,
        component_state: PaneState,
        is_closable: bool,
        reorder_enabled: bool,
        title: String,
    },
}

impl LayoutItem {
    /// Empty row container.
    #[must_use]
    pub fn empty_row() -> Self {
        Self::Row {
            content: Vec::new(),
        }
    }
}

/// Pane configuration payload, opaque to the containers above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PaneState {
    Editor(EditorPaneState),
    Compiler(CompilerPaneState),
}

/// Editor pane payload: which session, its text, its language.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorPaneState {
    pub id: SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Compiler pane payload.
///
/// `source` names the owning session's key, not the pane's own identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompilerPaneState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    pub source: SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    pub filters: PaneFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub libs: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

/// Filter flags as emitted on a compiler pane.
///
/// Carries the model's seven flags plus `execute`, which has no
/// domain-model source: it is emitted from the default (absent) and dropped
/// again on the next normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaneFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execute: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directives: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demangle: Option<bool>,
}

impl From<&CompilerFilters> for PaneFilters {
    fn from(filters: &CompilerFilters) -> Self {
        Self {
            binary: filters.binary,
            execute: None,
            labels: filters.labels,
            directives: filters.directives,
            comment_only: filters.comment_only,
            trim: filters.trim,
            intel: filters.intel,
            demangle: filters.demangle,
        }
    }
}
