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

//! Identifier escaping for backtick-quoted Cypher names.

/// Escape a label, type, or property name for use inside backticks.
///
/// Every backtick in the name is doubled. Nothing else changes; the
/// caller supplies the surrounding backticks.
pub fn escape_name(name: &str) -> String {
    name.replace('`', "``")
}
