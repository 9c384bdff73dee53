// Copyright 2018 Google LLC
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

pub mod builder;
pub mod symbol;

use {
  crate::utils::{render_doc, ToDoc},
  im::Vector,
  std::collections::{BTreeMap, BTreeSet},
  symbol::Symbol,
};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
  #[error("rule for `{lhs}` has an empty right-hand side")]
  EmptyRhs { lhs: Symbol },
}

/// A single production: a left-hand symbol and the nonempty sequence of
/// symbols it derives.
///
/// Rules are immutable and compare by value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rule {
  lhs: Symbol,
  rhs: Vector<Symbol>,
}

impl Rule {
  /// Creates a rule. Empty right-hand sides are rejected, since the
  /// recognizer has no support for epsilon productions.
  pub fn new<L, I>(lhs: L, rhs: I) -> Result<Self, GrammarError>
  where
    L: Into<Symbol>,
    I: IntoIterator,
    I::Item: Into<Symbol>,
  {
    let lhs = lhs.into();
    let rhs: Vector<Symbol> = rhs.into_iter().map(Into::into).collect();
    if rhs.is_empty() {
      return Err(GrammarError::EmptyRhs { lhs });
    }
    Ok(Rule { lhs, rhs })
  }

  pub fn lhs(&self) -> &Symbol {
    &self.lhs
  }

  pub fn rhs(&self) -> &Vector<Symbol> {
    &self.rhs
  }

  /// Returns the first right-hand symbol. Always present for a constructed
  /// rule.
  pub fn first(&self) -> Option<&Symbol> {
    self.rhs.front()
  }

  pub fn len(&self) -> usize {
    self.rhs.len()
  }
}

impl std::fmt::Display for Rule {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{} -->", self.lhs)?;
    for sym in &self.rhs {
      write!(f, " {}", sym)?;
    }
    Ok(())
  }
}

impl std::fmt::Debug for Rule {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "Rule({})", self)
  }
}

impl ToDoc for Rule {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    self
      .lhs
      .to_doc(da)
      .append(da.text(" -->"))
      .append(da.softline())
      .append(
        da.intersperse(self.rhs.iter().map(|s| s.to_doc(da)), da.softline())
          .nest(2),
      )
      .group()
  }
}

/// A context-free grammar: a set of rules.
///
/// Rules are kept in insertion order with duplicates removed. The grammar
/// also indexes its rules by their first right-hand symbol, which is the
/// only lookup the recognizer's predict step performs.
#[derive(Clone)]
pub struct Grammar {
  rules: Vec<Rule>,
  by_first: BTreeMap<Symbol, Vec<usize>>,
}

impl Grammar {
  pub fn new(rules: impl IntoIterator<Item = Rule>) -> Self {
    let mut seen = BTreeSet::new();
    let mut kept = Vec::new();
    for rule in rules {
      if seen.insert(rule.clone()) {
        kept.push(rule);
      }
    }

    let mut by_first: BTreeMap<Symbol, Vec<usize>> = BTreeMap::new();
    for (i, rule) in kept.iter().enumerate() {
      if let Some(first) = rule.first() {
        by_first.entry(first.clone()).or_insert_with(Vec::new).push(i);
      }
    }

    Grammar {
      rules: kept,
      by_first,
    }
  }

  /// Builds a grammar from `(lhs, rhs)` pairs, failing on the first
  /// malformed rule.
  pub fn from_rules<L, R, I>(
    rules: impl IntoIterator<Item = (L, R)>,
  ) -> Result<Self, GrammarError>
  where
    L: Into<Symbol>,
    R: IntoIterator<Item = I>,
    I: Into<Symbol>,
  {
    let rules = rules
      .into_iter()
      .map(|(lhs, rhs)| Rule::new(lhs, rhs))
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Grammar::new(rules))
  }

  /// Returns an iterator over all of the rules in this grammar.
  pub fn rules(&self) -> impl Iterator<Item = &Rule> {
    self.rules.iter()
  }

  /// Returns the rules whose right-hand side begins with `sym`.
  pub fn rules_starting_with<'a>(
    &'a self,
    sym: &Symbol,
  ) -> impl Iterator<Item = &'a Rule> + 'a {
    self
      .by_first
      .get(sym)
      .into_iter()
      .flatten()
      .map(move |&i| &self.rules[i])
  }

  /// Returns the set of symbols appearing as a left-hand side.
  pub fn nonterminals(&self) -> BTreeSet<&Symbol> {
    self.rules.iter().map(Rule::lhs).collect()
  }

  pub fn len(&self) -> usize {
    self.rules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rules.is_empty()
  }

  pub fn to_pretty(&self) -> String {
    render_doc(self, 80)
  }
}

impl std::iter::FromIterator<Rule> for Grammar {
  fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
    Grammar::new(iter)
  }
}

impl std::fmt::Debug for Grammar {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let mut dbg_struct = f.debug_struct("Grammar");
    dbg_struct.field("rules", &self.rules);
    dbg_struct.finish()
  }
}

impl ToDoc for Grammar {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    da.intersperse(self.rules.iter().map(|r| r.to_doc(da)), da.hardline())
  }
}
