//! Folding arbitrary layout documents into a flat [`State`].
//!
//! The walk is depth-first and pre-order, visiting a container's children in
//! list order; that order alone determines session order and, within a
//! session, compiler order. Every pane naming a session key resolves through
//! [`State::find_or_create_session`], so a compiler pane arriving before its
//! editor pane leaves a sparse placeholder that the editor later fills in.
//!
//! Nothing here validates: a missing field, a wrong-typed field, or a whole
//! missing configuration blob lifts to an absent value and the fold carries
//! on. Unrecognized pane kinds and childless containers are no-ops.

use std::fmt;

use serde_json::Value;

use statefold_model::{Compiler, CompilerFilters, SessionId, State};

use crate::schema::{COMPONENT_COMPILER, COMPONENT_EDITOR};

/// Fold a layout document into a flat state.
#[must_use]
pub fn normalize(tree: &Value) -> State {
    let mut state = State::new();
    if let Some(children) = tree.get("content").and_then(Value::as_array) {
        fold_children(&mut state, children);
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(
        sessions = state.sessions.len(),
        "normalized layout document"
    );
    state
}

/// Parse JSON text and fold it.
///
/// The parse is the only fallible step; the fold itself cannot fail.
pub fn normalize_str(json: &str) -> Result<State, LayoutReadError> {
    let tree: Value = serde_json::from_str(json).map_err(LayoutReadError::Parse)?;
    Ok(normalize(&tree))
}

/// Failure reading a layout document before normalization.
#[derive(Debug)]
pub enum LayoutReadError {
    /// The document is not valid JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for LayoutReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => write!(f, "layout document is not valid JSON: {error}"),
        }
    }
}

impl std::error::Error for LayoutReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
        }
    }
}

/// What a single tree node means to the fold.
#[derive(Debug)]
enum NodeKind<'a> {
    /// Source editor pane.
    Editor(EditorPane),
    /// Compiler pane.
    Compiler(CompilerPane),
    /// Container with ordered children.
    Container(&'a [Value]),
    /// Anything else; skipped without error.
    Opaque,
}

/// Fields lifted from an editor pane's configuration blob.
#[derive(Debug, Default)]
struct EditorPane {
    id: Option<SessionId>,
    lang: Option<String>,
    source: Option<String>,
}

impl EditorPane {
    fn lift(config: Option<&Value>) -> Self {
        let Some(config) = config else {
            return Self::default();
        };
        Self {
            id: lifted_key(config.get("id")),
            lang: lifted_string(config.get("lang")),
            source: lifted_string(config.get("source")),
        }
    }
}

/// Fields lifted from a compiler pane's configuration blob.
///
/// `session` is the pane's `source` field: the owning session's key, a
/// cross-reference rather than the pane's own identity.
#[derive(Debug, Default)]
struct CompilerPane {
    compiler: Option<String>,
    session: Option<SessionId>,
    options: Option<String>,
    libs: Option<Value>,
    filters: CompilerFilters,
}

impl CompilerPane {
    fn lift(config: Option<&Value>) -> Self {
        let Some(config) = config else {
            return Self::default();
        };
        let filters = config.get("filters");
        Self {
            compiler: lifted_string(config.get("compiler")),
            session: lifted_key(config.get("source")),
            options: lifted_string(config.get("options")),
            libs: config.get("libs").cloned(),
            filters: CompilerFilters {
                binary: lifted_flag(filters, "binary"),
                labels: lifted_flag(filters, "labels"),
                directives: lifted_flag(filters, "directives"),
                comment_only: lifted_flag(filters, "commentOnly"),
                trim: lifted_flag(filters, "trim"),
                intel: lifted_flag(filters, "intel"),
                demangle: lifted_flag(filters, "demangle"),
            },
        }
    }
}

fn classify(node: &Value) -> NodeKind<'_> {
    match node.get("componentName").and_then(Value::as_str) {
        Some(COMPONENT_EDITOR) => NodeKind::Editor(EditorPane::lift(node.get("componentState"))),
        Some(COMPONENT_COMPILER) => {
            NodeKind::Compiler(CompilerPane::lift(node.get("componentState")))
        }
        _ => match node.get("content").and_then(Value::as_array) {
            Some(children) => NodeKind::Container(children),
            None => NodeKind::Opaque,
        },
    }
}

fn fold_children(state: &mut State, children: &[Value]) {
    for child in children {
        fold_node(state, child);
    }
}

fn fold_node(state: &mut State, node: &Value) {
    match classify(node) {
        NodeKind::Editor(pane) => apply_editor(state, pane),
        NodeKind::Compiler(pane) => apply_compiler(state, pane),
        NodeKind::Container(children) => fold_children(state, children),
        NodeKind::Opaque => {}
    }
}

fn apply_editor(state: &mut State, pane: EditorPane) {
    let Some(id) = pane.id else {
        return;
    };
    let session = state.find_or_create_session(id);
    // Last editor wins, including overwriting with an absent value.
    session.language = pane.lang;
    session.source = pane.source;
}

fn apply_compiler(state: &mut State, pane: CompilerPane) {
    let Some(key) = pane.session else {
        return;
    };
    let session = state.find_or_create_session(key);
    session.compilers.push(Compiler {
        id: pane.compiler,
        options: pane.options,
        libs: pane.libs,
        filters: pane.filters,
    });
}

fn lifted_key(value: Option<&Value>) -> Option<SessionId> {
    match value? {
        Value::Number(n) => n.as_i64().map(SessionId::Num),
        Value::String(s) => Some(SessionId::Text(s.clone())),
        _ => None,
    }
}

fn lifted_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_owned)
}

fn lifted_flag(filters: Option<&Value>, key: &str) -> Option<bool> {
    filters?.get(key).and_then(Value::as_bool)
}
