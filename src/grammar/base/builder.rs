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

use super::{symbol::Symbol, Grammar, GrammarError, Rule};

/// Collects the right-hand side of a single rule.
pub struct RuleBuilder {
  lhs: Symbol,
  rhs: Vec<Symbol>,
}

impl RuleBuilder {
  fn new(lhs: Symbol) -> Self {
    RuleBuilder {
      lhs,
      rhs: Vec::new(),
    }
  }

  fn build(self) -> Result<Rule, GrammarError> {
    let RuleBuilder { lhs, rhs } = self;
    Rule::new(lhs, rhs)
  }

  /// Appends a symbol to the right-hand side.
  pub fn add(&mut self, sym: impl Into<Symbol>) -> &mut Self {
    self.rhs.push(sym.into());
    self
  }
}

// ----------------

pub struct GrammarBuilder {
  rules: Vec<RuleBuilder>,
}

impl GrammarBuilder {
  fn new() -> Self {
    GrammarBuilder { rules: Vec::new() }
  }

  fn build(self) -> Result<Grammar, GrammarError> {
    let rules = self
      .rules
      .into_iter()
      .map(RuleBuilder::build)
      .collect::<Result<Vec<_>, _>>()?;
    Ok(Grammar::new(rules))
  }

  pub fn add_rule<F>(
    &mut self,
    lhs: impl Into<Symbol>,
    build_fn: F,
  ) -> &mut Self
  where
    F: FnOnce(&mut RuleBuilder),
  {
    let mut rule_builder = RuleBuilder::new(lhs.into());
    build_fn(&mut rule_builder);
    self.rules.push(rule_builder);
    self
  }

  /// Adds the rule `lhs --> rhs[0] rhs[1] ...`.
  pub fn add_prod<I>(&mut self, lhs: impl Into<Symbol>, rhs: I) -> &mut Self
  where
    I: IntoIterator,
    I::Item: Into<Symbol>,
  {
    self.add_rule(lhs, |rb| {
      for sym in rhs {
        rb.add(sym);
      }
    })
  }

  /// Adds one lexical rule `category --> word` for each word.
  pub fn add_lexicon<I>(
    &mut self,
    category: impl Into<Symbol>,
    words: I,
  ) -> &mut Self
  where
    I: IntoIterator,
    I::Item: Into<Symbol>,
  {
    let category = category.into();
    for word in words {
      self.add_rule(&category, |rb| {
        rb.add(word);
      });
    }
    self
  }
}

/// Builds a grammar using a builder function.
///
/// Example:
///
/// ```rust
/// let g = chart_earley::grammar::build(|gb| {
///   gb.add_rule("S", |rb| {
///     rb.add("NP").add("VP");
///   })
///   .add_prod("VP", vec!["Verb", "NP"])
///   .add_lexicon("Noun", vec!["lion", "zebra"]);
/// })
/// .unwrap();
/// assert_eq!(g.len(), 4);
/// ```
///
/// A rule built with an empty right-hand side makes the whole build fail.
pub fn build(
  build_fn: impl FnOnce(&mut GrammarBuilder),
) -> Result<Grammar, GrammarError> {
  let mut builder = GrammarBuilder::new();
  build_fn(&mut builder);
  builder.build()
}
