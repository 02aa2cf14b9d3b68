//! Shared builders and proptest strategies for the integration suites.
#![allow(dead_code)]

use proptest::prelude::*;
use serde_json::json;

use statefold_layout::LayoutItem;
use statefold_model::{Compiler, CompilerFilters, Session, SessionId, State};

pub fn flag() -> impl Strategy<Value = Option<bool>> {
    proptest::option::of(any::<bool>())
}

pub fn filters() -> impl Strategy<Value = CompilerFilters> {
    (flag(), flag(), flag(), flag(), flag(), flag(), flag()).prop_map(
        |(binary, labels, directives, comment_only, trim, intel, demangle)| CompilerFilters {
            binary,
            labels,
            directives,
            comment_only,
            trim,
            intel,
            demangle,
        },
    )
}

pub fn libs() -> impl Strategy<Value = Option<serde_json::Value>> {
    prop_oneof![
        Just(None),
        Just(Some(json!([]))),
        Just(Some(json!([{"name": "fmt", "ver": "10.1"}]))),
    ]
}

pub fn compiler() -> impl Strategy<Value = Compiler> {
    (
        proptest::option::of("[a-z][a-z0-9]{1,5}"),
        proptest::option::of("-O[0-3]( -g)?"),
        libs(),
        filters(),
    )
        .prop_map(|(id, options, libs, filters)| Compiler {
            id,
            options,
            libs,
            filters,
        })
}

type SessionBody = (Option<String>, Option<String>, Vec<Compiler>);

fn session_body() -> impl Strategy<Value = SessionBody> {
    (
        proptest::option::of(prop_oneof![
            Just("c++".to_owned()),
            Just("rust".to_owned()),
            Just("go".to_owned()),
        ]),
        proptest::option::of("[ -~]{0,20}"),
        proptest::collection::vec(compiler(), 0..4),
    )
}

/// States with distinct session keys, mixing numeric and textual ids.
pub fn state() -> impl Strategy<Value = State> {
    proptest::collection::vec(session_body(), 0..5).prop_map(|bodies| State {
        sessions: bodies
            .into_iter()
            .enumerate()
            .map(|(idx, (language, source, compilers))| Session {
                id: if idx % 2 == 0 {
                    SessionId::Num(idx as i64)
                } else {
                    SessionId::Text(format!("s{idx}"))
                },
                language,
                source,
                compilers,
            })
            .collect(),
    })
}

/// Collect every group of sibling widths below `item`, including its own
/// direct children.
pub fn sibling_width_groups(item: &LayoutItem, groups: &mut Vec<Vec<f64>>) {
    let content = match item {
        LayoutItem::Row { content }
        | LayoutItem::Column { content, .. }
        | LayoutItem::Stack { content, .. } => content,
        LayoutItem::Component { .. } => return,
    };
    let widths: Vec<f64> = content.iter().filter_map(width_of).collect();
    if !widths.is_empty() {
        groups.push(widths);
    }
    for child in content {
        sibling_width_groups(child, groups);
    }
}

fn width_of(item: &LayoutItem) -> Option<f64> {
    match item {
        LayoutItem::Column { width, .. } | LayoutItem::Stack { width, .. } => Some(*width),
        LayoutItem::Row { .. } | LayoutItem::Component { .. } => None,
    }
}
