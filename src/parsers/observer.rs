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

//! Hooks for watching a recognizer build a chart.
//!
//! Recognizers never print. Anything that wants to trace or measure chart
//! construction implements `ChartObserver` and is passed in by the caller.

use crate::{
  chart::{Edge, EdgeSet},
  grammar::Symbol,
};

/// Receives progress events during chart construction. Every hook defaults
/// to doing nothing.
///
/// For each position `k`, a recognizer calls `position_started`, then for
/// every edge taken from the agenda calls `edge_popped` followed by either
/// `edge_duplicated` or `edge_added`. Edges derived from an added edge are
/// reported through `edge_predicted` and `edge_completed` as they are
/// pushed. The full edge set for `k`, active edges included, is reported to
/// `position_finished`.
pub trait ChartObserver {
  fn position_started(&mut self, _position: usize, _word: &Symbol) {}

  fn edge_popped(&mut self, _edge: &Edge, _agenda_len: usize) {}

  fn edge_duplicated(&mut self, _edge: &Edge) {}

  fn edge_added(&mut self, _edge: &Edge) {}

  fn edge_predicted(&mut self, _edge: &Edge) {}

  fn edge_completed(&mut self, _edge: &Edge) {}

  fn position_finished(&mut self, _position: usize, _edges: &EdgeSet) {}
}

/// Ignores all events.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl ChartObserver for NoopObserver {}

/// Forwards events to the `log` facade: positions at debug level, agenda
/// activity at trace level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogObserver;

impl ChartObserver for LogObserver {
  fn position_started(&mut self, position: usize, word: &Symbol) {
    log::debug!("word {}: {}", position, word);
  }

  fn edge_popped(&mut self, edge: &Edge, agenda_len: usize) {
    log::trace!("edge = {} ({} left on agenda)", edge, agenda_len);
  }

  fn edge_duplicated(&mut self, edge: &Edge) {
    log::trace!("already in edge set: {}", edge);
  }

  fn edge_predicted(&mut self, edge: &Edge) {
    log::trace!("predict {}", edge);
  }

  fn edge_completed(&mut self, edge: &Edge) {
    log::trace!("complete {}", edge);
  }

  fn position_finished(&mut self, position: usize, edges: &EdgeSet) {
    log::debug!(
      "position {}: {} edges ({} passive)",
      position,
      edges.len(),
      edges.passive().count()
    );
  }
}

/// Counters describing one chart construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecognizeStats {
  /// Edges taken off the agenda.
  pub edges_popped: usize,
  /// Edges that were new to their position's edge set.
  pub edges_added: usize,
  /// Edges that were already in their position's edge set.
  pub duplicates: usize,
  pub predictions: usize,
  pub completions: usize,
  /// Full (active and passive) edge set size for each position after 0.
  pub position_sizes: Vec<usize>,
}

/// Accumulates `RecognizeStats`.
#[derive(Clone, Debug, Default)]
pub struct StatsObserver {
  stats: RecognizeStats,
}

impl StatsObserver {
  pub fn new() -> Self {
    StatsObserver::default()
  }

  pub fn stats(&self) -> &RecognizeStats {
    &self.stats
  }

  pub fn into_stats(self) -> RecognizeStats {
    self.stats
  }
}

impl ChartObserver for StatsObserver {
  fn edge_popped(&mut self, _edge: &Edge, _agenda_len: usize) {
    self.stats.edges_popped += 1;
  }

  fn edge_duplicated(&mut self, _edge: &Edge) {
    self.stats.duplicates += 1;
  }

  fn edge_added(&mut self, _edge: &Edge) {
    self.stats.edges_added += 1;
  }

  fn edge_predicted(&mut self, _edge: &Edge) {
    self.stats.predictions += 1;
  }

  fn edge_completed(&mut self, _edge: &Edge) {
    self.stats.completions += 1;
  }

  fn position_finished(&mut self, _position: usize, edges: &EdgeSet) {
    self.stats.position_sizes.push(edges.len());
  }
}
