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

//! Error types for the write path.

use thiserror::Error;

/// Errors raised while building statements or exporting batches.
///
/// Statement-shape problems are caught at build time, before any row
/// flows; nothing here is a per-row error.
#[derive(Debug, Error)]
pub enum CypherError {
    /// A node statement was configured without a label.
    #[error("label cannot be blank")]
    BlankLabel,

    /// A relationship statement was configured without a left label.
    #[error("left node label cannot be blank")]
    BlankLeftLabel,

    /// A relationship statement was configured without a right label.
    #[error("right node label cannot be blank")]
    BlankRightLabel,

    /// One side of a relationship statement declared source-column and
    /// graph-property lists of different lengths.
    #[error("{side} node has {sources} source fields but {properties} graph properties")]
    FieldCountMismatch {
        /// Which side is misconfigured, `left` or `right`.
        side: &'static str,
        /// The number of source columns declared.
        sources: usize,
        /// The number of graph properties declared.
        properties: usize,
    },

    /// A field named by the configuration is absent from the incoming
    /// record layout.
    #[error("field '{0}' was not contained in the record")]
    MissingField(String),

    /// The export-object selector was neither `Node` nor `Relationship`.
    #[error("the export object '{0}' is not valid, expected either 'Node' or 'Relationship'")]
    InvalidExportObject(String),

    /// The configuration payload failed to decode.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The graph writer rejected a flush.
    #[error("batch write failed: {0}")]
    WriteFailed(String),
}
