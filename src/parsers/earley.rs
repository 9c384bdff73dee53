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

//! An agenda-driven Earley recognizer.
//!
//! The chart is built left to right. For each position `k`, the edges ending
//! at `k` are derived to a fixed point starting from the single scanned
//! edge for the `k`th word:
//!
//! - Predict: a passive edge for `X` starting at `i` starts every rule
//!   `A --> X ...`, giving `[i-k: A --> X . ...]`.
//! - Complete: a passive edge for `X` starting at `i` advances every active
//!   edge at position `i` that expects an `X` next.
//!
//! Edges are deduplicated by value, so the fixed point is reached even for
//! left recursive grammars. Position `k` only reads positions before it,
//! which are already final.

mod column;

use {
  self::column::Column,
  super::{ChartObserver, NoopObserver, Recognizer},
  crate::{
    chart::{Chart, Edge, EdgeSet},
    grammar::{Grammar, Symbol},
  },
  std::collections::VecDeque,
};

/// The order in which agenda edges are processed.
///
/// The order has no effect on the finished chart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AgendaOrder {
  /// Last in, first out.
  Stack,
  /// First in, first out.
  Queue,
}

impl Default for AgendaOrder {
  fn default() -> Self {
    AgendaOrder::Stack
  }
}

/// The worklist for a single chart position.
struct Agenda {
  order: AgendaOrder,
  edges: VecDeque<Edge>,
}

impl Agenda {
  fn new(order: AgendaOrder) -> Self {
    Agenda {
      order,
      edges: VecDeque::new(),
    }
  }

  fn push(&mut self, edge: Edge) {
    self.edges.push_back(edge);
  }

  fn pop(&mut self) -> Option<Edge> {
    match self.order {
      AgendaOrder::Stack => self.edges.pop_back(),
      AgendaOrder::Queue => self.edges.pop_front(),
    }
  }

  fn len(&self) -> usize {
    self.edges.len()
  }
}

/// Recognizer configuration.
#[derive(Clone, Debug, Default)]
pub struct EarleyRecognizer {
  agenda_order: AgendaOrder,
}

impl EarleyRecognizer {
  pub fn new() -> Self {
    EarleyRecognizer::default()
  }

  pub fn with_agenda_order(mut self, order: AgendaOrder) -> Self {
    self.agenda_order = order;
    self
  }

  pub fn agenda_order(&self) -> AgendaOrder {
    self.agenda_order
  }

  /// Derives every edge ending at `position` from the scanned `word`.
  fn build_position(
    &self,
    grammar: &Grammar,
    columns: &[Column],
    position: usize,
    word: &Symbol,
    observer: &mut dyn ChartObserver,
  ) -> EdgeSet {
    let mut edges = EdgeSet::new();
    let mut agenda = Agenda::new(self.agenda_order);
    agenda.push(Edge::scan(position - 1, word.clone()));

    while let Some(edge) = agenda.pop() {
      observer.edge_popped(&edge, agenda.len());
      if !edges.insert(edge.clone()).is_changed() {
        observer.edge_duplicated(&edge);
        continue;
      }
      observer.edge_added(&edge);

      if edge.is_passive() {
        for rule in grammar.rules_starting_with(edge.lhs()) {
          let predicted = Edge::predicted(edge.start(), position, rule);
          observer.edge_predicted(&predicted);
          agenda.push(predicted);
        }

        // Every edge ending here starts strictly before here, since the
        // grammar has no empty rules.
        debug_assert!(edge.start() < position);
        for waiting in columns[edge.start()].waiting_for(edge.lhs()) {
          let completed = waiting.advance(position);
          observer.edge_completed(&completed);
          agenda.push(completed);
        }
      }
    }

    edges
  }
}

impl Recognizer for EarleyRecognizer {
  fn recognize_with(
    &self,
    grammar: &Grammar,
    input: &[Symbol],
    observer: &mut dyn ChartObserver,
  ) -> Chart {
    // No edge ends at position 0.
    let mut columns = vec![Column::default()];

    for (k, word) in (1..).zip(input) {
      observer.position_started(k, word);
      let edges = self.build_position(grammar, &columns, k, word, observer);
      observer.position_finished(k, &edges);
      log::trace!("finished position {} with {} edges", k, edges.len());
      columns.push(Column::new(edges));
    }

    let positions = columns.into_iter().map(Column::into_passive).collect();
    Chart::new(input.to_vec(), positions)
  }
}

/// Recognizes `input` with the default configuration.
pub fn earley(grammar: &Grammar, input: &[Symbol]) -> Chart {
  EarleyRecognizer::new().recognize_with(grammar, input, &mut NoopObserver)
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::{
    chart::chart_size,
    grammar::{examples, symbols, tokenize, Rule},
    parsers::{LogObserver, StatsObserver},
  };
  use std::collections::BTreeSet;

  /// Every `(start, end, lhs)` derivable from the grammar over `input`,
  /// found by a bottom-up fixed point over spans.
  fn derivable_spans(
    grammar: &Grammar,
    input: &[Symbol],
  ) -> BTreeSet<(usize, usize, Symbol)> {
    let mut spans: BTreeSet<_> = input
      .iter()
      .enumerate()
      .map(|(i, w)| (i, i + 1, w.clone()))
      .collect();

    loop {
      let mut found = Vec::new();
      for rule in grammar.rules() {
        for start in 0..input.len() {
          let mut ends = vec![start];
          for sym in rule.rhs() {
            ends = ends
              .iter()
              .flat_map(|&from| {
                spans
                  .iter()
                  .filter(move |(s, _, l)| *s == from && l == sym)
                  .map(|(_, e, _)| *e)
              })
              .collect::<BTreeSet<_>>()
              .into_iter()
              .collect();
          }
          for end in ends {
            found.push((start, end, rule.lhs().clone()));
          }
        }
      }

      let before = spans.len();
      spans.extend(found);
      if spans.len() == before {
        return spans;
      }
    }
  }

  fn chart_spans(chart: &Chart) -> BTreeSet<(usize, usize, Symbol)> {
    chart
      .edges()
      .map(|e| (e.start(), e.end(), e.lhs().clone()))
      .collect()
  }

  fn chart_lines(chart: &Chart) -> Vec<Vec<String>> {
    chart
      .positions()
      .iter()
      .map(|edges| edges.iter().map(|e| e.to_string()).collect())
      .collect()
  }

  #[test]
  fn test_recognizes_sentence() {
    let g = examples::zoo_grammar();
    let chart = earley(&g, &examples::example_sentence(0));
    assert_eq!(chart.len(), 6);
    assert_eq!(chart.success("S", 0, -1), Ok(true));
    assert!(chart.accepts("S"));
  }

  #[test]
  fn test_sentence_chart_contents() {
    let g = examples::zoo_grammar();
    let chart = earley(&g, &examples::example_sentence(0));
    assert_eq!(
      chart_lines(&chart),
      vec![
        vec![],
        vec!["[0-1: Det --> the .]", "[0-1: the --> .]"],
        vec![
          "[0-2: NP --> Det Noun .]",
          "[1-2: Noun --> lion .]",
          "[1-2: lion --> .]",
        ],
        vec![
          "[0-3: S --> NP VP .]",
          "[2-3: VP --> Verb .]",
          "[2-3: Verb --> sees .]",
          "[2-3: sees --> .]",
        ],
        vec!["[3-4: Det --> a .]", "[3-4: a --> .]"],
        vec![
          "[0-5: S --> NP VP .]",
          "[2-5: VP --> Verb NP .]",
          "[3-5: NP --> Det Noun .]",
          "[4-5: Noun --> zebra .]",
          "[4-5: zebra --> .]",
        ],
      ]
    );
    assert_eq!(chart_size(&chart), 16);
  }

  #[test]
  fn test_prefixes() {
    let g = examples::zoo_grammar();
    // Intransitive use of the verb makes this a sentence.
    assert!(earley(&g, &tokenize("the lion sees")).accepts("S"));
    assert!(!earley(&g, &tokenize("the lion")).accepts("S"));
    assert!(!earley(&g, &tokenize("the lion sees a")).accepts("S"));
    assert!(!earley(&g, &tokenize("sees")).accepts("S"));
  }

  #[test]
  fn test_sub_constituents() {
    let g = examples::zoo_grammar();
    let chart = earley(&g, &examples::example_sentence(0));
    assert_eq!(chart.success("NP", 3, 5), Ok(true));
    assert_eq!(chart.success("VP", 2, -1), Ok(true));
    assert_eq!(chart.success("VP", 2, 3), Ok(true));
    assert_eq!(chart.success("NP", 2, 5), Ok(false));
    assert_eq!(chart.success("S", 1, -1), Ok(false));
  }

  #[test]
  fn test_chart_sizes_grow_with_attachments() {
    let g = examples::zoo_grammar();
    let sizes: Vec<_> = (0..5)
      .map(|n| chart_size(&earley(&g, &examples::example_sentence(n))))
      .collect();
    assert_eq!(sizes, vec![16, 28, 42, 58, 76]);

    let chart = earley(&g, &examples::example_sentence(4));
    assert!(chart.accepts("S"));
    let per_position: Vec<_> = chart.positions().iter().map(EdgeSet::len).collect();
    assert_eq!(
      per_position,
      vec![0, 2, 3, 4, 2, 5, 2, 2, 8, 2, 2, 10, 2, 2, 12, 2, 2, 14]
    );
  }

  #[test]
  fn test_empty_input() {
    let g = examples::zoo_grammar();
    let chart = earley(&g, &[]);
    assert_eq!(chart.len(), 1);
    assert!(chart.get(0).unwrap().is_empty());
    assert_eq!(chart_size(&chart), 0);
    assert_eq!(chart.success("S", 0, -1), Ok(false));
  }

  #[test]
  fn test_unknown_words_only_scan() {
    let g = examples::zoo_grammar();
    let chart = earley(&g, &symbols(&["the", "unicorn"]));
    assert_eq!(chart.get(2).unwrap().len(), 1);
    assert!(!chart.accepts("NP"));
  }

  #[test]
  fn test_agenda_order_does_not_matter() {
    let g = examples::zoo_grammar();
    for n in 0..4 {
      let input = examples::example_sentence(n);
      let stack = EarleyRecognizer::new()
        .with_agenda_order(AgendaOrder::Stack)
        .recognize(&g, &input);
      let queue = EarleyRecognizer::new()
        .with_agenda_order(AgendaOrder::Queue)
        .recognize(&g, &input);
      assert_eq!(stack, queue);
    }
  }

  #[test]
  fn test_repeated_runs_match() {
    let g = examples::zoo_grammar();
    let input = examples::example_sentence(2);
    assert_eq!(earley(&g, &input), earley(&g, &input));
  }

  #[test]
  fn test_matches_bottom_up_spans() {
    let g = examples::zoo_grammar();
    for n in 0..3 {
      let input = examples::example_sentence(n);
      let chart = earley(&g, &input);
      assert_eq!(chart_spans(&chart), derivable_spans(&g, &input));
    }
  }

  #[test]
  fn test_left_recursion_terminates() {
    let g = Grammar::from_rules(vec![
      ("A", vec!["A", "A"]),
      ("A", vec!["A"]),
      ("A", vec!["x"]),
    ])
    .unwrap();
    let input = symbols(&["x"; 6]);
    let chart = earley(&g, &input);
    assert!(chart.accepts("A"));
    assert_eq!(chart_spans(&chart), derivable_spans(&g, &input));

    // Position k holds the scan, `A --> x`, `A --> A` from every earlier
    // start and `A --> A A` from every start at least two words back.
    for (k, edges) in chart.iter().skip(1) {
      assert_eq!(edges.len(), 2 * k + 1);
      assert!(edges.len() <= g.len() * k + 1);
    }
  }

  #[test]
  fn test_no_duplicate_edges() {
    let g = examples::zoo_grammar();
    let input = examples::example_sentence(1);
    let mut stats = StatsObserver::new();
    let chart = EarleyRecognizer::new().recognize_with(&g, &input, &mut stats);
    let stats = stats.into_stats();

    // Two derivations reach the same edges, but each is stored once.
    assert_eq!(stats.duplicates, 2);
    assert_eq!(stats.edges_popped, 46);
    assert_eq!(stats.edges_added, 44);
    assert_eq!(stats.position_sizes.iter().sum::<usize>(), 44);
    let listed: Vec<_> = chart.edges().collect();
    let unique: BTreeSet<_> = listed.iter().collect();
    assert_eq!(listed.len(), unique.len());
  }

  #[test]
  fn test_stats() {
    let g = examples::zoo_grammar();
    let mut stats = StatsObserver::new();
    EarleyRecognizer::new().recognize_with(
      &g,
      &examples::example_sentence(0),
      &mut stats,
    );
    assert_eq!(
      stats.stats(),
      &crate::parsers::RecognizeStats {
        edges_popped: 25,
        edges_added: 25,
        duplicates: 0,
        predictions: 15,
        completions: 5,
        position_sizes: vec![3, 5, 6, 3, 8],
      }
    );
  }

  #[derive(Default)]
  struct EventLog(Vec<String>);

  impl ChartObserver for EventLog {
    fn edge_popped(&mut self, edge: &Edge, _agenda_len: usize) {
      self.0.push(format!("popped {}", edge));
    }

    fn edge_duplicated(&mut self, edge: &Edge) {
      self.0.push(format!("duplicated {}", edge));
    }

    fn edge_added(&mut self, edge: &Edge) {
      self.0.push(format!("added {}", edge));
    }

    fn edge_predicted(&mut self, edge: &Edge) {
      self.0.push(format!("predicted {}", edge));
    }

    fn edge_completed(&mut self, edge: &Edge) {
      self.0.push(format!("completed {}", edge));
    }
  }

  #[test]
  fn test_observer_event_order() {
    let g = examples::zoo_grammar();
    let mut events = EventLog::default();
    EarleyRecognizer::new().recognize_with(&g, &symbols(&["the"]), &mut events);
    assert_eq!(
      events.0,
      vec![
        "popped [0-1: the --> .]",
        "added [0-1: the --> .]",
        "predicted [0-1: Det --> the .]",
        "popped [0-1: Det --> the .]",
        "added [0-1: Det --> the .]",
        "predicted [0-1: NP --> Det . Noun]",
        "popped [0-1: NP --> Det . Noun]",
        "added [0-1: NP --> Det . Noun]",
      ]
    );
  }

  #[test]
  fn test_log_observer_builds_same_chart() {
    let g = examples::zoo_grammar();
    let input = examples::example_sentence(1);
    let logged = EarleyRecognizer::new().recognize_with(&g, &input, &mut LogObserver);
    assert_eq!(logged, earley(&g, &input));
  }

  #[test]
  fn test_passive_edges_only() {
    let g = Grammar::new(vec![Rule::new("S", vec!["a", "b"]).unwrap()]);
    let chart = earley(&g, &symbols(&["a", "b"]));
    assert!(chart.edges().all(Edge::is_passive));
    assert_eq!(chart.get(1).unwrap().len(), 1);
    assert!(chart.accepts("S"));
  }
}
