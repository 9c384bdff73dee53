// Copyright 2019 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Finalized chart positions, as the recognizer sees them.

use {
  crate::{
    chart::{Edge, EdgeSet},
    grammar::Symbol,
  },
  std::collections::BTreeMap,
};

/// The full edge set of a finalized position, with its active edges indexed
/// by the symbol they expect next.
///
/// Columns are read-only once built.
#[derive(Default)]
pub(super) struct Column {
  edges: EdgeSet,
  waiting: BTreeMap<Symbol, Vec<Edge>>,
}

impl Column {
  pub fn new(edges: EdgeSet) -> Self {
    let mut waiting: BTreeMap<Symbol, Vec<Edge>> = BTreeMap::new();
    for edge in edges.active() {
      if let Some(next) = edge.next_symbol() {
        waiting
          .entry(next.clone())
          .or_insert_with(Vec::new)
          .push(edge.clone());
      }
    }

    Column { edges, waiting }
  }

  /// Returns the active edges whose next expected symbol is `sym`.
  pub fn waiting_for<'a>(
    &'a self,
    sym: &Symbol,
  ) -> impl Iterator<Item = &'a Edge> + 'a {
    self.waiting.get(sym).into_iter().flatten()
  }

  pub fn into_passive(self) -> EdgeSet {
    self.edges.into_passive()
  }
}
