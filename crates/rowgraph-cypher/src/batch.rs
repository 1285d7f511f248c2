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

//! The fixed-capacity batch accumulator.
//!
//! Row maps are allocated once, up front, and reused across flushes.
//! The cursor marks the next free slot; a reset moves it back to zero
//! without touching the maps, so a row handed out by [`Batch::append`]
//! must never be retained past a flush boundary.

use std::collections::BTreeMap;

use rowgraph_core::Value;

/// One pending row: property name to value.
pub type RowMap = BTreeMap<String, Value>;

/// A fixed-capacity buffer of pending write rows.
#[derive(Debug)]
pub struct Batch {
    rows: Vec<RowMap>,
    cursor: usize,
}

impl Batch {
    /// Allocate a batch of `capacity` empty row maps.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: vec![RowMap::new(); capacity],
            cursor: 0,
        }
    }

    /// Hand out the next free row slot, cleared of stale keys.
    ///
    /// Callers must check [`is_full`](Self::is_full) first; appending
    /// past capacity is a contract violation and panics.
    pub fn append(&mut self) -> &mut RowMap {
        let row = &mut self.rows[self.cursor];
        row.clear();
        self.cursor += 1;
        row
    }

    /// True when every slot is taken and a flush is due.
    pub fn is_full(&self) -> bool {
        self.cursor == self.rows.len()
    }

    /// The number of pending rows.
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// True when no rows are pending.
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// The pending rows, in append order.
    pub fn pending(&self) -> &[RowMap] {
        &self.rows[..self.cursor]
    }

    /// Mark every slot free again. Called after a successful flush.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
