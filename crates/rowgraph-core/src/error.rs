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

//! Error types for the read path.
//!
//! The taxonomy is deliberate: [`PlanError`] is detected while compiling
//! a field's path, before any record is processed, and no partial
//! artifact is usable; [`RowError`] aborts extraction of the current row
//! and is surfaced to the caller. Absence (missing keys, empty lists,
//! out-of-range indices, sentinel nodes) is never an error; it becomes
//! a typed null.

use thiserror::Error;

/// Configuration error raised while compiling a field's extraction path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The field declared no path at all.
    #[error("no path was provided for field '{0}'")]
    EmptyPath(String),

    /// The path ran out of elements while a structural type still needed
    /// a terminal scalar step.
    #[error("the path for field '{field}' ends in {kind} and not in a property data type")]
    MissingTerminal {
        /// The output field being compiled.
        field: String,
        /// Description of the structural type left dangling.
        kind: String,
    },

    /// A path element used a key the current structural type does not
    /// understand.
    #[error("field '{field}' has an invalid key '{key}' for {kind}")]
    InvalidKey {
        /// The output field being compiled.
        field: String,
        /// The offending key.
        key: String,
        /// The structural type the key was applied to.
        kind: String,
    },

    /// An `Index:<n>` key whose index does not parse.
    #[error("field '{field}' does not have a valid index in key '{key}'")]
    InvalidIndex {
        /// The output field being compiled.
        field: String,
        /// The offending key.
        key: String,
    },

    /// A map entry declared a type that cannot terminate a map lookup.
    #[error("field '{field}' has an invalid data type '{data_type}' for Map")]
    InvalidMapType {
        /// The output field being compiled.
        field: String,
        /// The declared type's wire spelling.
        data_type: String,
    },

    /// `Concatenate` applied to a list whose elements are not strings.
    #[error("field '{field}' cannot concatenate a list of {kind}")]
    InvalidConcatenate {
        /// The output field being compiled.
        field: String,
        /// The element kind of the list.
        kind: String,
    },

    /// Two output fields share a name.
    #[error("duplicate output field '{0}'")]
    DuplicateField(String),
}

/// Error raised while applying a compiled extraction to one record.
///
/// These mean the declared path shape and the actual graph value
/// disagree; they abort the current output row but not the stream,
/// unless the caller decides otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// A path key found a value of a different shape than declared.
    #[error("path key '{key}' for field '{field}' is not a {expected}, but is {actual}")]
    TypeMismatch {
        /// The output field being extracted.
        field: String,
        /// The path key that performed the lookup.
        key: String,
        /// The declared shape.
        expected: String,
        /// The shape actually found.
        actual: &'static str,
    },

    /// A map entry held a value of a different shape than declared.
    #[error("map value with key '{key}' on field '{field}' is not a {expected}; it is {actual}")]
    MapValueMismatch {
        /// The output field being extracted.
        field: String,
        /// The map key that was looked up.
        key: String,
        /// The declared shape.
        expected: String,
        /// The shape actually found.
        actual: &'static str,
    },

    /// The extracted value does not fit the field's output column type.
    #[error("value {value} is not {expected} for field '{field}'")]
    Conversion {
        /// The output field being written.
        field: String,
        /// The column type expected.
        expected: &'static str,
        /// Display form of the offending value.
        value: String,
    },
}

/// Error surfaced by the read pipeline.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Field compilation failed before any record was processed.
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// A record failed extraction or conversion.
    #[error(transparent)]
    Row(#[from] RowError),

    /// The record stream collaborator failed.
    #[error("record stream error: {0}")]
    Source(String),

    /// The row sink collaborator failed.
    #[error("row sink error: {0}")]
    Sink(String),
}
