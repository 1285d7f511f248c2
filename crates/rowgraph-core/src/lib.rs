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

//! Core types for moving property-graph query results into tabular rows.
//!
//! This crate covers the read side of the bridge: the graph value model
//! ([`Value`], [`Node`], [`Relationship`], [`Path`]), the declarative
//! path configuration ([`config`]), the extraction compiler that turns
//! a path into a per-record closure ([`extract`]), the typed output
//! schema and record mapper ([`schema`]), the display renderer for
//! graph structures ([`render`]), and the pipeline that wires a record
//! stream to a row sink ([`reader`]).
//!
//! Configurations are validated once, at compile time; per-record work
//! is a chain of prebuilt closures. Absent data flows through as null,
//! while data whose shape contradicts the declared path is a per-record
//! error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod extract;
pub mod reader;
pub mod record;
pub mod render;
pub mod schema;
pub mod value;

pub use config::{ElementKind, ElementType, Field, PathElement, ReadConfig, ScalarType};
pub use error::{PlanError, ReadError, RowError};
pub use extract::{compile_field, ValueFn};
pub use reader::{ReadPipeline, RecordStream, RowSink};
pub use record::Record;
pub use render::to_display_string;
pub use schema::{CellValue, Column, ColumnType, OutputRow, OutputSchema, RecordMapper};
pub use value::{Node, Path, Properties, Relationship, Value};
