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

//! The chart built by a recognizer, and queries over it.
//!
//! A chart for an input of `n` tokens has `n + 1` positions. Position `k`
//! holds the passive edges ending at `k`; position 0 is always empty.

mod edge;
mod graphviz;
mod render;

pub use {edge::Edge, render::ChartView};

use {
  crate::{grammar::Symbol, utils::WasChanged},
  std::collections::{btree_set, BTreeSet},
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
  #[error("position {position} is outside a chart of length {len}")]
  PositionOutOfRange { position: isize, len: usize },
}

/// A deduplicated set of edges, enumerated in edge order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EdgeSet(BTreeSet<Edge>);

impl EdgeSet {
  pub fn new() -> Self {
    EdgeSet(BTreeSet::new())
  }

  /// Adds an edge, reporting whether it was not already present.
  pub fn insert(&mut self, edge: Edge) -> WasChanged {
    WasChanged::from_changed(self.0.insert(edge))
  }

  pub fn contains(&self, edge: &Edge) -> bool {
    self.0.contains(edge)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> btree_set::Iter<Edge> {
    self.0.iter()
  }

  /// Returns the passive edges of this set.
  pub fn passive(&self) -> impl Iterator<Item = &Edge> {
    self.0.iter().filter(|e| e.is_passive())
  }

  /// Returns the active edges of this set.
  pub fn active(&self) -> impl Iterator<Item = &Edge> {
    self.0.iter().filter(|e| e.is_active())
  }

  /// Consumes the set, keeping only its passive edges.
  pub fn into_passive(self) -> EdgeSet {
    self.0.into_iter().filter(Edge::is_passive).collect()
  }
}

impl std::iter::FromIterator<Edge> for EdgeSet {
  fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
    EdgeSet(iter.into_iter().collect())
  }
}

impl<'a> IntoIterator for &'a EdgeSet {
  type Item = &'a Edge;
  type IntoIter = btree_set::Iter<'a, Edge>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl IntoIterator for EdgeSet {
  type Item = Edge;
  type IntoIter = btree_set::IntoIter<Edge>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl std::fmt::Debug for EdgeSet {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.debug_set().entries(self.0.iter()).finish()
  }
}

/// The passive edges recognized over an input, indexed by end position.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Chart {
  input: Vec<Symbol>,
  positions: Vec<EdgeSet>,
}

impl Chart {
  /// Creates a chart from one edge set per position of `input`.
  ///
  /// Panics unless there are exactly `input.len() + 1` edge sets.
  pub fn new(input: Vec<Symbol>, positions: Vec<EdgeSet>) -> Self {
    assert_eq!(
      positions.len(),
      input.len() + 1,
      "a chart needs one edge set per input position"
    );
    Chart { input, positions }
  }

  /// The input this chart was built over.
  pub fn input(&self) -> &[Symbol] {
    &self.input
  }

  /// The number of positions, which is one more than the input length.
  pub fn len(&self) -> usize {
    self.positions.len()
  }

  pub fn get(&self, position: usize) -> Option<&EdgeSet> {
    self.positions.get(position)
  }

  pub fn positions(&self) -> &[EdgeSet] {
    &self.positions
  }

  /// Iterates over `(position, edges ending there)` pairs.
  pub fn iter(&self) -> impl Iterator<Item = (usize, &EdgeSet)> {
    self.positions.iter().enumerate()
  }

  /// Iterates over every edge in the chart, by position then edge order.
  pub fn edges(&self) -> impl Iterator<Item = &Edge> {
    self.positions.iter().flat_map(EdgeSet::iter)
  }

  /// The total number of edges across all positions.
  pub fn size(&self) -> usize {
    self.positions.iter().map(EdgeSet::len).sum()
  }

  /// Resolves a possibly end-relative position to an index into this chart.
  ///
  /// Negative positions count back from the end, so `-1` is the last
  /// position.
  pub fn resolve_position(&self, position: isize) -> Result<usize, ChartError> {
    let len = self.len();
    let resolved = if position < 0 {
      len as isize + position
    } else {
      position
    };

    if resolved < 0 || resolved as usize >= len {
      Err(ChartError::PositionOutOfRange { position, len })
    } else {
      Ok(resolved as usize)
    }
  }

  /// True if a `category` constituent was recognized spanning from `start`
  /// to `end`. `end` may be end-relative, see `resolve_position`.
  pub fn success(
    &self,
    category: impl Into<Symbol>,
    start: usize,
    end: isize,
  ) -> Result<bool, ChartError> {
    let category = category.into();
    let end = self.resolve_position(end)?;
    Ok(
      self.positions[end]
        .passive()
        .any(|edge| edge.start() == start && edge.lhs() == &category),
    )
  }

  /// True if the whole input was recognized as a `category`.
  pub fn accepts(&self, category: impl Into<Symbol>) -> bool {
    // The last position always exists.
    self.success(category, 0, -1).unwrap_or(false)
  }
}

/// See `Chart::success`.
pub fn success(
  chart: &Chart,
  category: impl Into<Symbol>,
  start: usize,
  end: isize,
) -> Result<bool, ChartError> {
  chart.success(category, start, end)
}

/// See `Chart::size`.
pub fn chart_size(chart: &Chart) -> usize {
  chart.size()
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::grammar::{symbols, Rule};

  fn small_chart() -> Chart {
    let det = Rule::new("Det", vec!["the"]).unwrap();
    let noun = Rule::new("Noun", vec!["lion"]).unwrap();
    let np = Rule::new("NP", vec!["Det", "Noun"]).unwrap();

    let mut one = EdgeSet::new();
    one.insert(Edge::scan(0, Symbol::new("the")));
    one.insert(Edge::predicted(0, 1, &det));
    let mut two = EdgeSet::new();
    two.insert(Edge::scan(1, Symbol::new("lion")));
    two.insert(Edge::predicted(1, 2, &noun));
    two.insert(Edge::predicted(0, 1, &np).advance(2));

    Chart::new(symbols(&["the", "lion"]), vec![EdgeSet::new(), one, two])
  }

  #[test]
  fn test_edge_set_dedups() {
    let mut set = EdgeSet::new();
    assert!(set.insert(Edge::scan(0, Symbol::new("a"))).is_changed());
    assert!(!set.insert(Edge::scan(0, Symbol::new("a"))).is_changed());
    assert_eq!(set.len(), 1);
  }

  #[test]
  fn test_into_passive() {
    let np = Rule::new("NP", vec!["Det", "Noun"]).unwrap();
    let set: EdgeSet = vec![
      Edge::predicted(0, 1, &np),
      Edge::scan(0, Symbol::new("the")),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.active().count(), 1);
    let passive = set.into_passive();
    assert_eq!(passive.len(), 1);
    assert!(passive.contains(&Edge::scan(0, Symbol::new("the"))));
  }

  #[test]
  fn test_resolve_position() {
    let chart = small_chart();
    assert_eq!(chart.len(), 3);
    assert_eq!(chart.resolve_position(-1), Ok(2));
    assert_eq!(chart.resolve_position(-3), Ok(0));
    assert_eq!(chart.resolve_position(1), Ok(1));
    assert_eq!(
      chart.resolve_position(3),
      Err(ChartError::PositionOutOfRange {
        position: 3,
        len: 3
      })
    );
    assert!(chart.resolve_position(-4).is_err());
  }

  #[test]
  fn test_success() {
    let chart = small_chart();
    assert_eq!(chart.success("NP", 0, -1), Ok(true));
    assert_eq!(success(&chart, "NP", 0, 2), Ok(true));
    assert_eq!(chart.success("NP", 1, -1), Ok(false));
    assert_eq!(chart.success("Det", 0, 1), Ok(true));
    assert_eq!(chart.success("Det", 0, -1), Ok(false));
    assert!(chart.success("NP", 0, 7).is_err());
    assert_eq!(chart.success("NP", 2, 1), Ok(false));
    assert_eq!(chart.success("NP", 9, -1), Ok(false));
    assert!(chart.accepts("NP"));
    assert!(!chart.accepts("S"));
  }

  #[test]
  fn test_size() {
    let chart = small_chart();
    assert_eq!(chart.size(), 5);
    assert_eq!(chart_size(&chart), chart.edges().count());
    let empty = Chart::new(Vec::new(), vec![EdgeSet::new()]);
    assert_eq!(chart_size(&empty), 0);
    assert!(!empty.accepts("S"));
  }
}
