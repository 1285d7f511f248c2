// Rowgraph - Tabular / Property-Graph Bridge
//
// Copyright (c) 2026 Rowgraph contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Human-readable rendering of graph values.
//!
//! Nodes render as `(:Label {"key":value})`, relationships as
//! `[:TYPE {"key":value}]`, and paths as a directed chain such as
//! `(:A)-[:A_to_B]->(:B)`. Property maps render as canonical key-sorted
//! JSON.
//!
//! Path rendering is the hard case: the node list is deduplicated and
//! not necessarily in traversal order, and successive relationships may
//! point forward, backward, or be disjoint from the previous one. The
//! renderer tracks the "far endpoint" of the chain built so far and
//! extends it in whichever direction keeps the chain connected. Display
//! is best-effort: a relationship endpoint with no matching node aborts
//! rendering with the partial string rather than panicking.

use crate::value::{Node, Path, Properties, Relationship, Value};
use std::collections::HashMap;

/// Render any graph value as display text.
pub fn to_display_string(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Node(node) => write_node(node, out),
        Value::Relationship(rel) => write_relationship(rel, out),
        Value::Path(path) => write_path(path, out),
        Value::String(s) => out.push_str(s),
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(f) => out.push_str(&f.to_string()),
        Value::Date(_) | Value::DateTime(_) | Value::List(_) | Value::Map(_) => {
            match value.to_json() {
                serde_json::Value::String(s) => out.push_str(&s),
                other => out.push_str(&other.to_string()),
            }
        }
    }
}

fn write_node(node: &Node, out: &mut String) {
    out.push('(');
    for label in &node.labels {
        out.push(':');
        out.push_str(label);
    }
    if !node.properties.is_empty() {
        out.push(' ');
        out.push_str(&properties_json(&node.properties));
    }
    out.push(')');
}

fn properties_json(properties: &Properties) -> String {
    Value::Map(properties.clone()).to_json().to_string()
}

fn write_relationship(rel: &Relationship, out: &mut String) {
    out.push('[');
    if !rel.rel_type.is_empty() {
        out.push(':');
        out.push_str(&rel.rel_type);
    }
    if !rel.properties.is_empty() {
        out.push(' ');
        out.push_str(&properties_json(&rel.properties));
    }
    out.push(']');
}

fn write_path(path: &Path, out: &mut String) {
    if path.nodes.is_empty() {
        return;
    }
    if path.nodes.len() == 1 && path.relationships.is_empty() {
        write_node(&path.nodes[0], out);
        return;
    }
    // Several nodes but nothing connecting them: abort rather than guess.
    let Some(first) = path.relationships.first() else {
        return;
    };

    let mut rendered: HashMap<i64, String> = HashMap::with_capacity(path.nodes.len());
    for node in &path.nodes {
        let mut s = String::new();
        write_node(node, &mut s);
        rendered.insert(node.id, s);
    }

    // Pick the first relationship's direction so its far endpoint meets
    // the second relationship where possible.
    let left_to_right = match path.relationships.get(1) {
        Some(second) => {
            let touches_end = second.start_id == first.end_id || second.end_id == first.end_id;
            let touches_start =
                second.start_id == first.start_id || second.end_id == first.start_id;
            touches_end || !touches_start
        }
        None => true,
    };

    let (anchor, tip) = if left_to_right {
        (first.start_id, first.end_id)
    } else {
        (first.end_id, first.start_id)
    };
    let Some(anchor_str) = rendered.get(&anchor) else {
        return;
    };
    out.push_str(anchor_str);

    let Some(tip_str) = rendered.get(&tip) else {
        return;
    };
    if left_to_right {
        out.push('-');
        write_relationship(first, out);
        out.push_str("->");
    } else {
        out.push_str("<-");
        write_relationship(first, out);
        out.push('-');
    }
    out.push_str(tip_str);
    let mut far = tip;

    for rel in &path.relationships[1..] {
        if far == rel.start_id {
            let Some(node) = rendered.get(&rel.end_id) else {
                return;
            };
            out.push('-');
            write_relationship(rel, out);
            out.push_str("->");
            out.push_str(node);
            far = rel.end_id;
        } else if far == rel.end_id {
            let Some(node) = rendered.get(&rel.start_id) else {
                return;
            };
            out.push_str("<-");
            write_relationship(rel, out);
            out.push('-');
            out.push_str(node);
            far = rel.start_id;
        } else {
            // Disjoint from the chain so far: start a fresh segment.
            let Some(start) = rendered.get(&rel.start_id) else {
                return;
            };
            out.push_str(" | ");
            out.push_str(start);
            let Some(end) = rendered.get(&rel.end_id) else {
                return;
            };
            out.push('-');
            write_relationship(rel, out);
            out.push_str("->");
            out.push_str(end);
            far = rel.end_id;
        }
    }
}
