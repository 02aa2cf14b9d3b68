//! Building the canonical layout document from a flat [`State`].
//!
//! The produced document always has the fixed presentation skeleton; only
//! the content region depends on the state, and its geometry is picked by
//! session count:
//!
//! - 0 sessions: a single empty row.
//! - 1 session: one row holding the source stack and every compiler stack
//!   side by side, each `100 / (1 + compilers)` wide.
//! - 2+ sessions: one column per session (`100 / sessions` wide), each
//!   stacking a full-width source row over a row of compiler stacks
//!   (`100 / compilers` wide each).
//!
//! The two branches intentionally differ: a lone session shares one row
//! between source and compilers, while multiple sessions each reserve a
//! dedicated source row inside their column.

use statefold_model::{Compiler, Session, State};

use crate::schema::{
    COMPONENT_COMPILER, COMPONENT_EDITOR, CompilerPaneState, EditorPaneState, LayoutDimensions,
    LayoutItem, LayoutLabels, LayoutSettings, LayoutTree, PaneFilters, PaneState,
};

const FULL_WIDTH: f64 = 100.0;

/// Build the canonical layout document for `state`.
#[must_use]
pub fn synthesize(state: &State) -> LayoutTree {
    let content = match state.sessions.as_slice() {
        [] => vec![LayoutItem::empty_row()],
        [session] => vec![single_session_row(session)],
        sessions => vec![multi_session_row(sessions)],
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(
        sessions = state.sessions.len(),
        "synthesized canonical layout"
    );
    LayoutTree {
        settings: LayoutSettings::default(),
        dimensions: LayoutDimensions::default(),
        labels: LayoutLabels::default(),
        content,
    }
}

/// One row sharing its width between the source stack and every compiler.
fn single_session_row(session: &Session) -> LayoutItem {
    let width = FULL_WIDTH / (1 + session.compilers.len()) as f64;
    let mut content = Vec::with_capacity(1 + session.compilers.len());
    content.push(source_stack(session, width));
    for compiler in &session.compilers {
        content.push(compiler_stack(session, compiler, width));
    }
    LayoutItem::Row { content }
}

/// One column per session, evenly splitting the full width.
fn multi_session_row(sessions: &[Session]) -> LayoutItem {
    let column_width = FULL_WIDTH / sessions.len() as f64;
    LayoutItem::Row {
        content: sessions
            .iter()
            .map(|session| session_column(session, column_width))
            .collect(),
    }
}

/// A session's column: its source row over its compiler row.
fn session_column(session: &Session, width: f64) -> LayoutItem {
    // A session without compilers keeps its compiler row, just empty; the
    // per-stack width is never computed for it.
    let compiler_row = if session.compilers.is_empty() {
        LayoutItem::empty_row()
    } else {
        let stack_width = FULL_WIDTH / session.compilers.len() as f64;
        LayoutItem::Row {
            content: session
                .compilers
                .iter()
                .map(|compiler| compiler_stack(session, compiler, stack_width))
                .collect(),
        }
    };
    LayoutItem::Column {
        is_closable: true,
        reorder_enabled: true,
        width,
        content: vec![
            LayoutItem::Row {
                content: vec![source_stack(session, FULL_WIDTH)],
            },
            compiler_row,
        ],
    }
}

fn source_stack(session: &Session, width: f64) -> LayoutItem {
    LayoutItem::Stack {
        width,
        content: vec![LayoutItem::Component {
            component_name: COMPONENT_EDITOR.to_owned(),
            component_state: PaneState::Editor(EditorPaneState {
                id: session.id.clone(),
                source: session.source.clone(),
                lang: session.language.clone(),
            }),
            is_closable: true,
            reorder_enabled: true,
            title: source_title(session),
        }],
    }
}

fn compiler_stack(session: &Session, compiler: &Compiler, width: f64) -> LayoutItem {
    LayoutItem::Stack {
        width,
        content: vec![LayoutItem::Component {
            component_name: COMPONENT_COMPILER.to_owned(),
            component_state: PaneState::Compiler(CompilerPaneState {
                compiler: compiler.id.clone(),
                source: session.id.clone(),
                options: compiler.options.clone(),
                filters: PaneFilters::from(&compiler.filters),
                libs: compiler.libs.clone(),
                lang: session.language.clone(),
            }),
            is_closable: true,
            reorder_enabled: true,
            title: compiler_title(session, compiler),
        }],
    }
}

/// `"<language> source #<id>"`; absent fields render empty.
fn source_title(session: &Session) -> String {
    format!(
        "{} source #{}",
        session.language.as_deref().unwrap_or_default(),
        session.id
    )
}

/// `"<compiler> (Editor #<id>) <language>"`; absent fields render empty.
fn compiler_title(session: &Session, compiler: &Compiler) -> String {
    format!(
        "{} (Editor #{}) {}",
        compiler.id.as_deref().unwrap_or_default(),
        session.id,
        session.language.as_deref().unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use statefold_model::{CompilerFilters, SessionId};

    fn session(id: i64, language: &str, source: &str, compilers: usize) -> Session {
        Session {
            id: SessionId::from(id),
            language: Some(language.to_owned()),
            source: Some(source.to_owned()),
            compilers: (0..compilers)
                .map(|n| Compiler {
                    id: Some(format!("gcc{n}")),
                    options: Some("-O2".to_owned()),
                    libs: None,
                    filters: CompilerFilters::default(),
                })
                .collect(),
        }
    }

    #[test]
    fn empty_state_yields_one_empty_row() {
        let tree = synthesize(&State::new());
        assert_eq!(tree.content, vec![LayoutItem::empty_row()]);
    }

    #[test]
    fn single_session_shares_one_row() {
        let state = State {
            sessions: vec![session(1, "c++", "int main() {}", 2)],
        };
        let tree = synthesize(&state);
        let LayoutItem::Row { content } = &tree.content[0] else {
            panic!("expected a row");
        };
        assert_eq!(content.len(), 3);
        for item in content {
            let LayoutItem::Stack { width, .. } = item else {
                panic!("expected a stack");
            };
            assert!((width - 100.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn multi_session_columns_reserve_a_source_row() {
        let state = State {
            sessions: vec![session(1, "c++", "int x;", 1), session(2, "rust", "fn f() {}", 0)],
        };
        let tree = synthesize(&state);
        let LayoutItem::Row { content } = &tree.content[0] else {
            panic!("expected a row");
        };
        assert_eq!(content.len(), 2);
        for column in content {
            let LayoutItem::Column { width, content, .. } = column else {
                panic!("expected a column");
            };
            assert!((width - 50.0).abs() < 1e-9);
            assert_eq!(content.len(), 2);
        }
    }

    #[test]
    fn zero_compiler_session_gets_an_empty_compiler_row() {
        let state = State {
            sessions: vec![session(1, "c++", "int x;", 0), session(2, "rust", "", 0)],
        };
        let tree = synthesize(&state);
        let LayoutItem::Row { content } = &tree.content[0] else {
            panic!("expected a row");
        };
        let LayoutItem::Column { content, .. } = &content[0] else {
            panic!("expected a column");
        };
        assert_eq!(content[1], LayoutItem::empty_row());
    }

    #[test]
    fn titles_follow_the_contract() {
        let s = session(7, "c++", "int x;", 1);
        assert_eq!(source_title(&s), "c++ source #7");
        assert_eq!(compiler_title(&s, &s.compilers[0]), "gcc0 (Editor #7) c++");
    }

    #[test]
    fn absent_fields_render_empty_in_titles() {
        let sparse = Session::empty(SessionId::from("pad"));
        assert_eq!(source_title(&sparse), " source #pad");
        let compiler = Compiler::default();
        assert_eq!(compiler_title(&sparse, &compiler), " (Editor #pad) ");
    }

    #[test]
    fn synthesize_does_not_mutate_the_state() {
        let state = State {
            sessions: vec![session(1, "c++", "int x;", 2)],
        };
        let before = state.clone();
        let _ = synthesize(&state);
        assert_eq!(state, before);
    }
}
