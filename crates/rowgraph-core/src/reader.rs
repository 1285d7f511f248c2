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

//! The read pipeline: graph records in, tabular rows out.
//!
//! The pipeline owns a compiled [`RecordMapper`] and drives two small
//! traits at its edges. [`RecordStream`] is where graph records come
//! from (a driver result cursor in production, a vector in tests);
//! [`RowSink`] is where typed rows go.

use crate::config::Field;
use crate::error::{PlanError, ReadError};
use crate::record::Record;
use crate::schema::{OutputRow, OutputSchema, RecordMapper};

/// A source of graph records, consumed one at a time.
pub trait RecordStream {
    /// The next record, or `None` once the stream is exhausted.
    fn next_record(&mut self) -> Result<Option<Record>, ReadError>;
}

/// A destination for typed output rows.
pub trait RowSink {
    /// Called once, before any row, with the schema every row follows.
    fn declare_schema(&mut self, schema: &OutputSchema) -> Result<(), ReadError>;

    /// Deliver one row. The row is reused between calls; implementors
    /// must copy what they keep.
    fn write_row(&mut self, row: &OutputRow) -> Result<(), ReadError>;
}

/// Drives records from a stream through a compiled mapper into a sink.
pub struct ReadPipeline {
    mapper: RecordMapper,
}

impl ReadPipeline {
    /// Compile the field list into a pipeline. All path validation
    /// happens here; `run` only ever fails on data or I/O.
    pub fn new(fields: &[Field]) -> Result<Self, PlanError> {
        Ok(Self {
            mapper: RecordMapper::compile(fields)?,
        })
    }

    /// The compiled mapper, mostly useful for its schema.
    pub fn mapper(&self) -> &RecordMapper {
        &self.mapper
    }

    /// Pump the stream dry, returning the number of rows written.
    ///
    /// The first failing record aborts the run; rows written before it
    /// stay with the sink.
    pub fn run(
        &self,
        stream: &mut dyn RecordStream,
        sink: &mut dyn RowSink,
    ) -> Result<u64, ReadError> {
        sink.declare_schema(self.mapper.schema())?;
        let mut row = self.mapper.new_row();
        let mut written = 0u64;
        while let Some(record) = stream.next_record()? {
            if let Err(err) = self.mapper.transfer(&record, &mut row) {
                tracing::warn!(rows = written, error = %err, "record transfer failed");
                return Err(err.into());
            }
            sink.write_row(&row)?;
            written += 1;
        }
        tracing::debug!(rows = written, "record stream drained");
        Ok(written)
    }
}
