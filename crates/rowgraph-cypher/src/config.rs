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

//! Write-side tool configurations.
//!
//! A configuration decodes from the JSON payload an operator edits,
//! then compiles into an [`Exporter`]: the statement is built once,
//! the field list is fixed, and the batch is allocated at full size.

use serde::{Deserialize, Serialize};

use crate::error::CypherError;
use crate::statements::{
    node_delete_statement, node_write_statement, relationship_delete_statement,
    relationship_write_statement, MatchSide, NodeDeleteConfig, NodeWriteConfig,
    RelationshipDeleteConfig, RelationshipWriteConfig,
};
use crate::writer::Exporter;

/// Pairs a batch-row column with the graph property it matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FieldPair {
    /// The incoming column name.
    pub source: String,
    /// The graph property the column is compared against.
    pub property: String,
}

fn match_side(label: &str, pairs: &[FieldPair]) -> MatchSide {
    MatchSide {
        label: label.to_string(),
        source_fields: pairs.iter().map(|p| p.source.clone()).collect(),
        property_fields: pairs.iter().map(|p| p.property.clone()).collect(),
    }
}

/// Configuration for writing nodes or relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WriteConfig {
    /// What to export, `Node` or `Relationship`.
    pub export_object: String,
    /// Rows per write transaction.
    pub batch_size: usize,
    /// Node label, for node exports.
    pub node_label: String,
    /// Node merge-key property names.
    pub node_id_fields: Vec<String>,
    /// Node non-key property names.
    pub node_prop_fields: Vec<String>,
    /// Relationship type, for relationship exports.
    pub rel_label: String,
    /// Relationship merge-key property names.
    pub rel_key_fields: Vec<String>,
    /// Relationship non-key property names.
    pub rel_prop_fields: Vec<String>,
    /// Label of the relationship's start node.
    pub rel_left_label: String,
    /// Column/property pairs matching the start node.
    pub rel_left_fields: Vec<FieldPair>,
    /// Label of the relationship's end node.
    pub rel_right_label: String,
    /// Column/property pairs matching the end node.
    pub rel_right_fields: Vec<FieldPair>,
}

impl WriteConfig {
    /// Decode a configuration from its JSON payload.
    pub fn from_json(json: &str) -> Result<Self, CypherError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the statement this configuration describes.
    pub fn statement(&self) -> Result<String, CypherError> {
        match self.export_object.as_str() {
            "Node" => node_write_statement(&NodeWriteConfig {
                label: self.node_label.clone(),
                key_fields: self.node_id_fields.clone(),
                prop_fields: self.node_prop_fields.clone(),
            }),
            "Relationship" => relationship_write_statement(&RelationshipWriteConfig {
                rel_type: self.rel_label.clone(),
                key_fields: self.rel_key_fields.clone(),
                prop_fields: self.rel_prop_fields.clone(),
                left: match_side(&self.rel_left_label, &self.rel_left_fields),
                right: match_side(&self.rel_right_label, &self.rel_right_fields),
            }),
            other => Err(CypherError::InvalidExportObject(other.to_string())),
        }
    }

    /// Every incoming column the statement reads from a batch row.
    pub fn required_fields(&self) -> Vec<String> {
        match self.export_object.as_str() {
            "Node" => self
                .node_id_fields
                .iter()
                .chain(&self.node_prop_fields)
                .cloned()
                .collect(),
            _ => self
                .rel_left_fields
                .iter()
                .chain(&self.rel_right_fields)
                .map(|pair| pair.source.clone())
                .chain(self.rel_key_fields.iter().cloned())
                .chain(self.rel_prop_fields.iter().cloned())
                .collect(),
        }
    }

    /// Build the statement and allocate the batch.
    pub fn compile(&self) -> Result<Exporter, CypherError> {
        Ok(Exporter::new(
            self.statement()?,
            self.required_fields(),
            self.batch_size,
        ))
    }
}

/// Configuration for deleting nodes or relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DeleteConfig {
    /// What to delete, `Node` or `Relationship`.
    pub delete_object: String,
    /// Rows per write transaction.
    pub batch_size: usize,
    /// Node label to match; empty matches any.
    pub node_label: String,
    /// Node key property names.
    pub node_id_fields: Vec<String>,
    /// Relationship type to match; empty matches any.
    pub rel_type: String,
    /// Relationship property names equated with same-named columns.
    pub rel_fields: Vec<String>,
    /// Label of the node on one end.
    pub rel_left_label: String,
    /// Column/property pairs matching that node.
    pub rel_left_fields: Vec<FieldPair>,
    /// Label of the node on the other end.
    pub rel_right_label: String,
    /// Column/property pairs matching that node.
    pub rel_right_fields: Vec<FieldPair>,
}

impl DeleteConfig {
    /// Decode a configuration from its JSON payload.
    pub fn from_json(json: &str) -> Result<Self, CypherError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the statement this configuration describes.
    pub fn statement(&self) -> Result<String, CypherError> {
        match self.delete_object.as_str() {
            "Node" => Ok(node_delete_statement(&NodeDeleteConfig {
                label: self.node_label.clone(),
                key_fields: self.node_id_fields.clone(),
            })),
            "Relationship" => relationship_delete_statement(&RelationshipDeleteConfig {
                rel_type: self.rel_type.clone(),
                property_fields: self.rel_fields.clone(),
                left: match_side(&self.rel_left_label, &self.rel_left_fields),
                right: match_side(&self.rel_right_label, &self.rel_right_fields),
            }),
            other => Err(CypherError::InvalidExportObject(other.to_string())),
        }
    }

    /// Every incoming column the statement reads from a batch row.
    pub fn required_fields(&self) -> Vec<String> {
        match self.delete_object.as_str() {
            "Node" => self.node_id_fields.clone(),
            _ => self
                .rel_fields
                .iter()
                .cloned()
                .chain(
                    self.rel_left_fields
                        .iter()
                        .chain(&self.rel_right_fields)
                        .map(|pair| pair.source.clone()),
                )
                .collect(),
        }
    }

    /// Build the statement and allocate the batch.
    pub fn compile(&self) -> Result<Exporter, CypherError> {
        Ok(Exporter::new(
            self.statement()?,
            self.required_fields(),
            self.batch_size,
        ))
    }
}
