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

//! Dotted items spanning a range of the input.

use {
  crate::{
    grammar::{Rule, Symbol},
    utils::{NoCompare, ToDoc},
  },
  im::Vector,
};

/// A chart edge: a rule `lhs --> rhs` recognized up to `dot` over the input
/// span `[start, end)`.
///
/// For example:
///
/// ```text
/// [0-2: S --> NP . VP]
/// ```
///
/// says that `NP` was found between positions 0 and 2, and that an `S`
/// starting at 0 is possible if a `VP` follows. Lexical edges created by
/// scanning have an empty `rhs`, and are passive from the start.
///
/// An edge can carry a value of type `V`. The value is not part of the edge's
/// identity: two edges with the same span, rule and dot are equal, ordered
/// and hashed the same regardless of their values.
#[derive(Derivative)]
#[derivative(
  Clone(bound = "V: Clone"),
  PartialEq(bound = ""),
  Eq(bound = ""),
  PartialOrd(bound = ""),
  Ord(bound = ""),
  Hash(bound = "")
)]
pub struct Edge<V = ()> {
  start: usize,
  end: usize,
  lhs: Symbol,
  rhs: Vector<Symbol>,
  /// Must be in the range [0, self.rhs.len()].
  dot: usize,
  value: NoCompare<Option<V>>,
}

impl Edge {
  /// Creates an edge without a value.
  ///
  /// Panics if `start > end` or if `dot` is past the end of `rhs`.
  pub fn new(
    start: usize,
    end: usize,
    lhs: Symbol,
    rhs: Vector<Symbol>,
    dot: usize,
  ) -> Self {
    assert!(start <= end, "edge start {} is after end {}", start, end);
    assert!(
      dot <= rhs.len(),
      "edge dot {} is past a right-hand side of length {}",
      dot,
      rhs.len()
    );
    Edge {
      start,
      end,
      lhs,
      rhs,
      dot,
      value: NoCompare::new(None),
    }
  }

  /// The passive edge recognizing `word` between `start` and `start + 1`.
  pub fn scan(start: usize, word: Symbol) -> Self {
    Edge::new(start, start + 1, word, Vector::new(), 0)
  }

  /// An edge for `rule` whose first symbol has been recognized over
  /// `[start, end)`.
  pub fn predicted(start: usize, end: usize, rule: &Rule) -> Self {
    Edge::new(start, end, rule.lhs().clone(), rule.rhs().clone(), 1)
  }
}

impl<V> Edge<V> {
  pub fn start(&self) -> usize {
    self.start
  }

  pub fn end(&self) -> usize {
    self.end
  }

  pub fn lhs(&self) -> &Symbol {
    &self.lhs
  }

  pub fn rhs(&self) -> &Vector<Symbol> {
    &self.rhs
  }

  pub fn dot(&self) -> usize {
    self.dot
  }

  /// True if the whole right-hand side has been recognized.
  pub fn is_passive(&self) -> bool {
    self.dot == self.rhs.len()
  }

  pub fn is_active(&self) -> bool {
    !self.is_passive()
  }

  /// True for edges created by scanning an input token.
  pub fn is_lexical(&self) -> bool {
    self.rhs.is_empty()
  }

  /// Returns the symbol right after the dot, or `None` for a passive edge.
  pub fn next_symbol(&self) -> Option<&Symbol> {
    self.rhs.get(self.dot)
  }

  /// Returns this edge with its dot moved over the next symbol, now ending at
  /// `end`. The value is not carried over.
  ///
  /// Panics if the edge is passive.
  pub fn advance(&self, end: usize) -> Edge {
    assert!(self.is_active(), "cannot advance a passive edge");
    Edge::new(self.start, end, self.lhs.clone(), self.rhs.clone(), self.dot + 1)
  }

  /// Returns the rule this edge is an instance of, or `None` for a lexical
  /// edge.
  pub fn rule(&self) -> Option<Rule> {
    Rule::new(self.lhs.clone(), self.rhs.iter().cloned()).ok()
  }

  pub fn value(&self) -> Option<&V> {
    self.value.as_ref()
  }

  /// Returns the same edge carrying `value`.
  pub fn with_value<W>(self, value: W) -> Edge<W> {
    Edge {
      start: self.start,
      end: self.end,
      lhs: self.lhs,
      rhs: self.rhs,
      dot: self.dot,
      value: NoCompare::new(Some(value)),
    }
  }

  /// Returns the same edge with its value removed.
  pub fn without_value(self) -> Edge {
    Edge {
      start: self.start,
      end: self.end,
      lhs: self.lhs,
      rhs: self.rhs,
      dot: self.dot,
      value: NoCompare::new(None),
    }
  }
}

impl<V> std::fmt::Display for Edge<V> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "[{}-{}: {} -->", self.start, self.end, self.lhs)?;
    for (i, sym) in self.rhs.iter().enumerate() {
      if i == self.dot {
        f.write_str(" .")?;
      }
      write!(f, " {}", sym)?;
    }
    if self.is_passive() {
      f.write_str(" .")?;
    }
    f.write_str("]")
  }
}

impl<V> std::fmt::Debug for Edge<V> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    std::fmt::Display::fmt(self, f)
  }
}

impl<V> ToDoc for Edge<V> {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    da.text(self.to_string())
  }
}
