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

//! Cypher statement builders.
//!
//! Pure functions from structural configuration to statement text; no
//! I/O happens here. Every statement starts with `UNWIND $batch AS row`
//! and expects `$batch` as its single parameter, a list of property
//! maps. Statements are built once and reused for every flush, so all
//! validation happens here, at build time. A bad configuration yields
//! an error and no statement, never a partial one.

use std::fmt::Write as _;

use crate::error::CypherError;
use crate::escape::escape_name;

/// Node create/merge configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeWriteConfig {
    /// Node label; must not be blank.
    pub label: String,
    /// Merge-key property names. Empty means plain `CREATE`.
    pub key_fields: Vec<String>,
    /// Non-key property names carried onto the node.
    pub prop_fields: Vec<String>,
}

/// One side of a relationship pattern: the label to match plus two
/// parallel lists pairing batch-row columns with graph properties.
#[derive(Debug, Clone, Default)]
pub struct MatchSide {
    /// Label of the node being matched; must not be blank.
    pub label: String,
    /// Batch-row column names, parallel to `property_fields`.
    pub source_fields: Vec<String>,
    /// Graph property names, parallel to `source_fields`.
    pub property_fields: Vec<String>,
}

impl MatchSide {
    fn check(&self, side: &'static str) -> Result<(), CypherError> {
        if self.source_fields.len() != self.property_fields.len() {
            return Err(CypherError::FieldCountMismatch {
                side,
                sources: self.source_fields.len(),
                properties: self.property_fields.len(),
            });
        }
        Ok(())
    }
}

/// Relationship merge configuration.
#[derive(Debug, Clone, Default)]
pub struct RelationshipWriteConfig {
    /// Relationship type; must not be blank.
    pub rel_type: String,
    /// Merge-key property names on the relationship itself.
    pub key_fields: Vec<String>,
    /// Non-key property names carried onto the relationship.
    pub prop_fields: Vec<String>,
    /// The start node of the pattern.
    pub left: MatchSide,
    /// The end node of the pattern.
    pub right: MatchSide,
}

/// Node delete configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeDeleteConfig {
    /// Label to match; empty matches any label.
    pub label: String,
    /// Key property names equated with same-named batch columns.
    pub key_fields: Vec<String>,
}

/// Relationship delete configuration.
#[derive(Debug, Clone, Default)]
pub struct RelationshipDeleteConfig {
    /// Relationship type; empty matches any type.
    pub rel_type: String,
    /// Relationship property names equated with same-named batch columns.
    pub property_fields: Vec<String>,
    /// The node on one end; its label is required.
    pub left: MatchSide,
    /// The node on the other end; its label is required.
    pub right: MatchSide,
}

/// Build the node create/merge statement.
///
/// Without key fields the statement is a plain `CREATE` listing the
/// property fields. With key fields it is a `MERGE` keyed on them,
/// followed by `ON CREATE SET` / `ON MATCH SET` over the non-key
/// properties when there are any.
pub fn node_write_statement(config: &NodeWriteConfig) -> Result<String, CypherError> {
    if config.label.is_empty() {
        return Err(CypherError::BlankLabel);
    }
    let mut query = String::from("UNWIND $batch AS row\n");
    if config.key_fields.is_empty() {
        let _ = write!(query, "CREATE (newNode:`{}`{{", escape_name(&config.label));
        write_self_pairs(&mut query, &config.prop_fields);
        query.push_str("})");
        return Ok(query);
    }
    let _ = write!(query, "MERGE (newNode:`{}`{{", escape_name(&config.label));
    write_self_pairs(&mut query, &config.key_fields);
    query.push_str("})\n");
    if config.prop_fields.is_empty() {
        return Ok(query);
    }
    write_set_clauses(&mut query, &config.prop_fields, "newNode");
    Ok(query)
}

/// Build the relationship merge statement.
///
/// Matches the two endpoint nodes, then merges the relationship keyed
/// on its key fields, setting non-key properties on create and match.
pub fn relationship_write_statement(
    config: &RelationshipWriteConfig,
) -> Result<String, CypherError> {
    if config.rel_type.is_empty() {
        return Err(CypherError::BlankLabel);
    }
    if config.left.label.is_empty() {
        return Err(CypherError::BlankLeftLabel);
    }
    if config.right.label.is_empty() {
        return Err(CypherError::BlankRightLabel);
    }
    config.left.check("left")?;
    config.right.check("right")?;
    let mut query = String::from("UNWIND $batch AS row\n");
    write_match_node(&mut query, &config.left, "left");
    write_match_node(&mut query, &config.right, "right");
    let _ = write!(query, "MERGE (left)-[newRel:`{}`", escape_name(&config.rel_type));
    if !config.key_fields.is_empty() {
        query.push('{');
        write_self_pairs(&mut query, &config.key_fields);
        query.push('}');
    }
    query.push_str("]->(right)\n");
    if config.prop_fields.is_empty() {
        return Ok(query);
    }
    write_set_clauses(&mut query, &config.prop_fields, "newRel");
    Ok(query)
}

/// Build the node delete statement.
///
/// Matches on the optional label and the key fields, then detach
/// deletes so attached relationships go too.
pub fn node_delete_statement(config: &NodeDeleteConfig) -> String {
    let mut query = String::from("UNWIND $batch AS row\nMATCH (d");
    if !config.label.is_empty() {
        let _ = write!(query, ":`{}`", escape_name(&config.label));
    }
    if !config.key_fields.is_empty() {
        query.push('{');
        write_self_pairs(&mut query, &config.key_fields);
        query.push('}');
    }
    query.push_str(") DETACH DELETE d");
    query
}

/// Build the relationship delete statement.
///
/// The pattern is undirected so a relationship is found regardless of
/// which side it was drawn from. Both endpoint labels are required;
/// the type and the property equalities are optional narrowing.
pub fn relationship_delete_statement(
    config: &RelationshipDeleteConfig,
) -> Result<String, CypherError> {
    if config.left.label.is_empty() {
        return Err(CypherError::BlankLeftLabel);
    }
    if config.right.label.is_empty() {
        return Err(CypherError::BlankRightLabel);
    }
    config.left.check("left")?;
    config.right.check("right")?;
    let mut query = String::from("UNWIND $batch AS row\nMATCH ");
    write_pattern_node(&mut query, &config.left);
    query.push_str("-[r");
    if !config.rel_type.is_empty() {
        let _ = write!(query, ":`{}`", escape_name(&config.rel_type));
    }
    if !config.property_fields.is_empty() {
        query.push('{');
        write_self_pairs(&mut query, &config.property_fields);
        query.push('}');
    }
    query.push_str("]-");
    write_pattern_node(&mut query, &config.right);
    query.push_str("\nDELETE r");
    Ok(query)
}

// `key`:row.`key`, both sides the same name.
fn write_self_pairs(query: &mut String, fields: &[String]) {
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            query.push(',');
        }
        let escaped = escape_name(field);
        let _ = write!(query, "`{escaped}`:row.`{escaped}`");
    }
}

fn write_property_pairs(query: &mut String, side: &MatchSide) {
    for (index, (source, property)) in side
        .source_fields
        .iter()
        .zip(&side.property_fields)
        .enumerate()
    {
        if index > 0 {
            query.push(',');
        }
        let _ = write!(
            query,
            "`{}`:row.`{}`",
            escape_name(property),
            escape_name(source)
        );
    }
}

fn write_match_node(query: &mut String, side: &MatchSide, variable: &str) {
    let _ = write!(query, "MATCH ({variable}:`{}`{{", escape_name(&side.label));
    write_property_pairs(query, side);
    query.push_str("})\n");
}

fn write_pattern_node(query: &mut String, side: &MatchSide) {
    let _ = write!(query, "(:`{}`", escape_name(&side.label));
    if !side.source_fields.is_empty() {
        query.push('{');
        write_property_pairs(query, side);
        query.push('}');
    }
    query.push(')');
}

fn write_set_clauses(query: &mut String, props: &[String], variable: &str) {
    query.push_str("ON CREATE SET ");
    write_set_properties(query, props, variable);
    query.push_str("\nON MATCH SET ");
    write_set_properties(query, props, variable);
}

fn write_set_properties(query: &mut String, props: &[String], variable: &str) {
    for (index, prop) in props.iter().enumerate() {
        if index > 0 {
            query.push(',');
        }
        let escaped = escape_name(prop);
        let _ = write!(query, "{variable}.`{escaped}`=row.`{escaped}`");
    }
}
