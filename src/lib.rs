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

//! Chart-based recognition of context-free grammars.
//!
//! A `Grammar` is a list of `Rule`s over `Symbol`s. The Earley recognizer
//! turns a grammar and a tokenized input into a `Chart`: for every position
//! in the input, the set of passive edges (completed constituents) ending
//! there. Queries like `success` then ask whether a category spans a range.
//!
//! ```
//! use chart_earley::{earley, grammar::{examples, tokenize}, success};
//!
//! let grammar = examples::zoo_grammar();
//! let chart = earley(&grammar, &tokenize("the lion sees a zebra"));
//! assert_eq!(success(&chart, "S", 0, -1), Ok(true));
//! ```

#[macro_use]
extern crate derivative;

pub mod chart;
pub mod grammar;
pub mod parsers;
pub mod utils;

pub use crate::{
  chart::{chart_size, success, Chart, ChartError, ChartView, Edge, EdgeSet},
  grammar::{Grammar, GrammarError, Rule, Symbol},
  parsers::{
    earley::{earley, AgendaOrder, EarleyRecognizer},
    ChartObserver, LogObserver, NoopObserver, RecognizeStats, Recognizer,
    StatsObserver,
  },
};
