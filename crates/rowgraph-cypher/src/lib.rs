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

//! The write side of the bridge: batched Cypher mutation of a graph.
//!
//! Flat rows become parameterized create, merge, and delete statements.
//! The statement text is built once from structural configuration
//! ([`statements`], decoded by [`config`]); rows accumulate in a
//! fixed-capacity [`batch::Batch`] and flush transactionally through
//! the [`writer::GraphWriter`] collaborator. Identifier escaping lives
//! in [`escape`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod batch;
pub mod config;
pub mod error;
pub mod escape;
pub mod statements;
pub mod writer;

pub use batch::{Batch, RowMap};
pub use config::{DeleteConfig, FieldPair, WriteConfig};
pub use error::CypherError;
pub use escape::escape_name;
pub use statements::{
    node_delete_statement, node_write_statement, relationship_delete_statement,
    relationship_write_statement, MatchSide, NodeDeleteConfig, NodeWriteConfig,
    RelationshipDeleteConfig, RelationshipWriteConfig,
};
pub use writer::{Exporter, GraphWriter, IncomingField, IncomingKind, RowSource};
