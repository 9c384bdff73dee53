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

use crate::{
  chart::Chart,
  grammar::{Grammar, Symbol},
};

pub mod earley;
pub mod observer;

pub use observer::{
  ChartObserver, LogObserver, NoopObserver, RecognizeStats, StatsObserver,
};

/// Builds a chart of the constituents a grammar recognizes over an input.
pub trait Recognizer {
  /// Builds the chart, reporting progress to `observer`.
  fn recognize_with(
    &self,
    grammar: &Grammar,
    input: &[Symbol],
    observer: &mut dyn ChartObserver,
  ) -> Chart;

  fn recognize(&self, grammar: &Grammar, input: &[Symbol]) -> Chart {
    self.recognize_with(grammar, input, &mut NoopObserver)
  }
}
