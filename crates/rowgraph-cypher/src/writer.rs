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

//! The exporter: rows in, batched write transactions out.
//!
//! An [`Exporter`] holds the prebuilt statement, the batch, and one
//! copier per required field. Copiers are bound once, when the incoming
//! record layout is known; per-row work is then a straight run through
//! prebuilt closures. The first failed flush disables the exporter so
//! a broken stream reports once instead of once per batch.

use chrono::{DateTime, Utc};
use rowgraph_core::Value;

use crate::batch::{Batch, RowMap};
use crate::error::CypherError;

/// The blocking write-transaction contract a database driver fulfils.
pub trait GraphWriter {
    /// Run `query` with the pending rows bound as `$batch`, in one
    /// transaction. An `Err` means nothing was committed.
    fn run_write(&mut self, query: &str, batch: &[RowMap]) -> Result<(), String>;
}

/// Typed access to one incoming row.
pub trait RowSource {
    /// The integer in `field`, or `None` when null.
    fn get_int(&self, field: &str) -> Option<i64>;
    /// The float in `field`, or `None` when null.
    fn get_float(&self, field: &str) -> Option<f64>;
    /// The boolean in `field`, or `None` when null.
    fn get_bool(&self, field: &str) -> Option<bool>;
    /// The string in `field`, or `None` when null.
    fn get_string(&self, field: &str) -> Option<String>;
    /// The instant in `field`, or `None` when null.
    fn get_time(&self, field: &str) -> Option<DateTime<Utc>>;
}

/// The scalar type of one incoming column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomingKind {
    /// Read with [`RowSource::get_int`].
    Integer,
    /// Read with [`RowSource::get_float`].
    Float,
    /// Read with [`RowSource::get_bool`].
    Boolean,
    /// Read with [`RowSource::get_string`].
    String,
    /// Read with [`RowSource::get_time`].
    Temporal,
}

/// One column of the incoming record layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingField {
    /// Column name.
    pub name: String,
    /// How to read the column.
    pub kind: IncomingKind,
}

impl IncomingField {
    /// Describe one incoming column.
    pub fn new(name: impl Into<String>, kind: IncomingKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

type Copier = Box<dyn Fn(&dyn RowSource, &mut RowMap)>;

fn make_copier(field: String, kind: IncomingKind) -> Copier {
    match kind {
        IncomingKind::Integer => Box::new(move |source, row| {
            let value = source.get_int(&field).map_or(Value::Null, Value::Int);
            row.insert(field.clone(), value);
        }),
        IncomingKind::Float => Box::new(move |source, row| {
            let value = source.get_float(&field).map_or(Value::Null, Value::Float);
            row.insert(field.clone(), value);
        }),
        IncomingKind::Boolean => Box::new(move |source, row| {
            let value = source.get_bool(&field).map_or(Value::Null, Value::Bool);
            row.insert(field.clone(), value);
        }),
        IncomingKind::String => Box::new(move |source, row| {
            let value = source.get_string(&field).map_or(Value::Null, Value::String);
            row.insert(field.clone(), value);
        }),
        IncomingKind::Temporal => Box::new(move |source, row| {
            let value = source.get_time(&field).map_or(Value::Null, Value::DateTime);
            row.insert(field.clone(), value);
        }),
    }
}

/// Pushes rows through a fixed-capacity batch into a [`GraphWriter`].
pub struct Exporter {
    query: String,
    required_fields: Vec<String>,
    copiers: Vec<Copier>,
    batch: Batch,
    disabled: bool,
}

impl Exporter {
    /// Build an exporter around a prebuilt statement.
    pub fn new(query: String, required_fields: Vec<String>, batch_size: usize) -> Self {
        Self {
            query,
            required_fields,
            copiers: Vec::new(),
            batch: Batch::with_capacity(batch_size),
            disabled: false,
        }
    }

    /// The statement run on every flush.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Bind one copier per required field against the incoming layout.
    ///
    /// Must be called before any row flows. A required field missing
    /// from the layout is fatal here, before the first record.
    pub fn open(&mut self, incoming: &[IncomingField]) -> Result<(), CypherError> {
        self.copiers = Vec::with_capacity(self.required_fields.len());
        for field in &self.required_fields {
            let Some(found) = incoming.iter().find(|f| &f.name == field) else {
                return Err(CypherError::MissingField(field.clone()));
            };
            self.copiers.push(make_copier(field.clone(), found.kind));
        }
        Ok(())
    }

    /// Copy one row into the batch, flushing first if the batch is full.
    ///
    /// After a failed flush the exporter is disabled and further rows
    /// are silently dropped; the failure was already reported.
    pub fn push_row(
        &mut self,
        source: &dyn RowSource,
        writer: &mut dyn GraphWriter,
    ) -> Result<(), CypherError> {
        if self.disabled {
            return Ok(());
        }
        if self.batch.is_full() {
            self.flush(writer)?;
        }
        let row = self.batch.append();
        for copier in &self.copiers {
            copier(source, row);
        }
        Ok(())
    }

    /// Flush any pending rows at end of stream.
    pub fn finish(&mut self, writer: &mut dyn GraphWriter) -> Result<(), CypherError> {
        if self.disabled || self.batch.is_empty() {
            return Ok(());
        }
        self.flush(writer)
    }

    fn flush(&mut self, writer: &mut dyn GraphWriter) -> Result<(), CypherError> {
        match writer.run_write(&self.query, self.batch.pending()) {
            Ok(()) => {
                tracing::debug!(rows = self.batch.len(), "batch flushed");
                self.batch.reset();
                Ok(())
            }
            Err(message) => {
                tracing::error!(rows = self.batch.len(), error = %message, "batch write failed");
                self.disabled = true;
                Err(CypherError::WriteFailed(message))
            }
        }
    }
}
