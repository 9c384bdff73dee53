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

//! Recognizes sentences of the zoo grammar and prints their charts.
//!
//! Run with `cargo run --example zoo`.

use {
  anyhow::Context,
  chart_earley::{
    grammar::{examples, Symbol},
    ChartView, EarleyRecognizer, Edge, Recognizer, StatsObserver,
  },
  im::vector,
};

fn sentence(words: &[Symbol]) -> String {
  words
    .iter()
    .map(Symbol::as_str)
    .collect::<Vec<_>>()
    .join(" ")
}

fn main() -> anyhow::Result<()> {
  let grammar = examples::zoo_grammar();

  let rule = grammar.rules().next().context("the zoo grammar has rules")?;
  println!("rule = {}", rule);
  println!("rule = {:?}", rule);
  println!("lhs = {}, rhs = {:?}", rule.lhs(), rule.rhs());

  println!("{}", grammar.to_pretty());

  for n in 0..5 {
    println!("example({}) = {}", n, sentence(&examples::example_sentence(n)));
  }

  let np_vp = vector![Symbol::new("NP"), Symbol::new("VP")];
  println!("{}", Edge::new(0, 2, Symbol::new("S"), np_vp.clone(), 1));
  println!("{}", Edge::new(0, 5, Symbol::new("S"), np_vp, 2));

  let recognizer = EarleyRecognizer::new();
  for n in 0..3 {
    let input = examples::example_sentence(n);
    let mut stats = StatsObserver::new();
    let chart = recognizer.recognize_with(&grammar, &input, &mut stats);
    let parsed = chart
      .success("S", 0, -1)
      .with_context(|| format!("querying the chart for example({})", n))?;

    println!();
    println!("Parsing \"{}\": {}", sentence(&input), parsed);
    println!("{:?}", stats.stats());
    println!(
      "{}",
      chart.to_pretty_with(&ChartView::new().positions(vec![1, -1]).cutoff(6))
    );
  }

  Ok(())
}
