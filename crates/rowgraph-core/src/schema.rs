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

//! Output schema and the record-to-row mapper.
//!
//! A [`RecordMapper`] is the compiled form of a field list: one column
//! per field, in declaration order, each paired with an extraction
//! closure and a strict coercion into the column's cell type. Coercion
//! never guesses; an integer column accepts integers and nulls, nothing
//! else.

use chrono::{DateTime, Utc};

use crate::config::{check_unique_names, Field, ScalarType};
use crate::error::{PlanError, RowError};
use crate::extract::{compile_field, ValueFn};
use crate::record::Record;
use crate::render;
use crate::value::Value;

/// The type of one output column.
///
/// Date and date-time fields collapse into a single temporal column
/// type; the distinction only matters on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 64-bit signed integers.
    Integer,
    /// 64-bit floats.
    Float,
    /// Booleans.
    Boolean,
    /// UTF-8 strings.
    String,
    /// Instants, carried as UTC date-times.
    Temporal,
}

impl From<ScalarType> for ColumnType {
    fn from(scalar: ScalarType) -> Self {
        match scalar {
            ScalarType::Integer => Self::Integer,
            ScalarType::Float => Self::Float,
            ScalarType::Boolean => Self::Boolean,
            ScalarType::String => Self::String,
            ScalarType::Date | ScalarType::DateTime => Self::Temporal,
        }
    }
}

/// One output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name, taken from the field name.
    pub name: String,
    /// The cell type every value in this column must carry.
    pub column_type: ColumnType,
}

/// The ordered set of output columns a mapper produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSchema {
    columns: Vec<Column>,
}

impl OutputSchema {
    /// The columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True when the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The position of the named column, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }
}

/// A typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// An integer cell.
    Int(i64),
    /// A float cell.
    Float(f64),
    /// A boolean cell.
    Bool(bool),
    /// A string cell.
    String(String),
    /// A temporal cell, always UTC.
    Temporal(DateTime<Utc>),
}

/// One output row, positionally aligned with the schema. `None` is a
/// null cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputRow {
    cells: Vec<Option<CellValue>>,
}

impl OutputRow {
    /// The cells in column order.
    pub fn cells(&self) -> &[Option<CellValue>] {
        &self.cells
    }

    /// The cell at `index`, or `None` when null or out of range.
    pub fn cell(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)?.as_ref()
    }
}

type TransferFn = Box<dyn Fn(&Record, &mut OutputRow) -> Result<(), RowError>>;

/// A compiled field list: schema plus one transfer closure per column.
pub struct RecordMapper {
    schema: OutputSchema,
    transfers: Vec<TransferFn>,
}

impl RecordMapper {
    /// Compile a field list. Rejects duplicate field names and every
    /// malformed path up front, before any record is seen.
    pub fn compile(fields: &[Field]) -> Result<Self, PlanError> {
        check_unique_names(fields)?;
        let mut columns = Vec::with_capacity(fields.len());
        let mut transfers: Vec<TransferFn> = Vec::with_capacity(fields.len());
        for (slot, field) in fields.iter().enumerate() {
            columns.push(Column {
                name: field.name.clone(),
                column_type: field.data_type.into(),
            });
            let value_fn = compile_field(field)?;
            transfers.push(bind_transfer(slot, field, value_fn));
        }
        Ok(Self {
            schema: OutputSchema { columns },
            transfers,
        })
    }

    /// The output schema.
    pub fn schema(&self) -> &OutputSchema {
        &self.schema
    }

    /// An all-null row shaped for this schema.
    pub fn new_row(&self) -> OutputRow {
        OutputRow {
            cells: vec![None; self.schema.len()],
        }
    }

    /// Fill `row` from `record`, column by column in declaration order.
    ///
    /// Stops at the first failing column. Cells written before the
    /// failure keep their new values; cells after it keep whatever the
    /// row held before the call.
    pub fn transfer(&self, record: &Record, row: &mut OutputRow) -> Result<(), RowError> {
        for transfer in &self.transfers {
            transfer(record, row)?;
        }
        Ok(())
    }
}

fn bind_transfer(slot: usize, field: &Field, value_fn: ValueFn) -> TransferFn {
    let column_type = ColumnType::from(field.data_type);
    let field_name = field.name.clone();
    Box::new(move |record, row| {
        let value = value_fn(record)?;
        row.cells[slot] = coerce(&field_name, column_type, value)?;
        Ok(())
    })
}

fn coerce(
    field_name: &str,
    column_type: ColumnType,
    value: Value,
) -> Result<Option<CellValue>, RowError> {
    if value.is_null() {
        return Ok(None);
    }
    let cell = match (column_type, value) {
        (ColumnType::Integer, Value::Int(n)) => CellValue::Int(n),
        (ColumnType::Float, Value::Float(f)) => CellValue::Float(f),
        (ColumnType::Boolean, Value::Bool(b)) => CellValue::Bool(b),
        (ColumnType::String, Value::String(s)) => CellValue::String(s),
        (ColumnType::Temporal, Value::DateTime(dt)) => CellValue::Temporal(dt),
        (ColumnType::Temporal, Value::Date(d)) => {
            // Midnight UTC; dates carry no zone of their own.
            let midnight = d.and_hms_opt(0, 0, 0).unwrap_or_default();
            CellValue::Temporal(midnight.and_utc())
        }
        (column_type, other) => {
            return Err(RowError::Conversion {
                field: field_name.to_string(),
                expected: expected_name(column_type),
                value: render::to_display_string(&other),
            })
        }
    };
    Ok(Some(cell))
}

fn expected_name(column_type: ColumnType) -> &'static str {
    match column_type {
        ColumnType::Integer => "an integer",
        ColumnType::Float => "a float",
        ColumnType::Boolean => "a boolean",
        ColumnType::String => "a string",
        ColumnType::Temporal => "a date or date-time",
    }
}
