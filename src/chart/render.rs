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

use {
  super::{Chart, EdgeSet},
  crate::utils::{render_doc, ToDoc},
};

/// Selects which parts of a chart to render.
#[derive(Clone, Debug, Default)]
pub struct ChartView {
  positions: Option<Vec<isize>>,
  cutoff: Option<usize>,
}

impl ChartView {
  /// A view of every edge at every position.
  pub fn new() -> Self {
    ChartView::default()
  }

  /// Only render the given positions. Negative positions count back from the
  /// end of the chart.
  pub fn positions(mut self, positions: impl IntoIterator<Item = isize>) -> Self {
    self.positions = Some(positions.into_iter().collect());
    self
  }

  /// Render at most `cutoff` edges per position, followed by `...` when
  /// edges were left out. A cutoff of 0 renders every edge.
  pub fn cutoff(mut self, cutoff: usize) -> Self {
    self.cutoff = Some(cutoff);
    self
  }

  fn shows(&self, position: usize, chart_len: usize) -> bool {
    match &self.positions {
      None => true,
      Some(selected) => {
        let from_end = position as isize - chart_len as isize;
        selected
          .iter()
          .any(|&p| p == position as isize || p == from_end)
      }
    }
  }
}

struct ChartDoc<'c> {
  chart: &'c Chart,
  view: &'c ChartView,
}

fn position_doc<'a, DA: pretty::DocAllocator<'a>>(
  da: &'a DA,
  position: usize,
  edges: &EdgeSet,
  cutoff: Option<usize>,
) -> pretty::DocBuilder<'a, DA>
where
  DA::Doc: Clone,
{
  let shown = cutoff.filter(|&n| n > 0).unwrap_or(usize::MAX);
  let mut lines: Vec<_> = edges.iter().take(shown).map(|e| e.to_doc(da)).collect();
  if edges.len() > shown {
    lines.push(da.text("..."));
  }

  da.text(format!("{} edges ending in position {}:", edges.len(), position))
    .append(da.hardline().append(da.intersperse(lines, da.hardline())).nest(4))
}

impl ToDoc for ChartDoc<'_> {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    let header = da.text(format!("Chart size: {} edges", self.chart.size()));
    let sections = self
      .chart
      .iter()
      .filter(|(k, edges)| {
        !edges.is_empty() && self.view.shows(*k, self.chart.len())
      })
      .map(|(k, edges)| position_doc(da, k, edges, self.view.cutoff));

    da.intersperse(std::iter::once(header).chain(sections), da.hardline())
  }
}

impl ToDoc for Chart {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    ChartDoc {
      chart: self,
      view: &ChartView::default(),
    }
    .to_doc(da)
  }
}

impl Chart {
  /// Renders every edge of the chart, grouped by end position.
  pub fn to_pretty(&self) -> String {
    render_doc(self, 80)
  }

  /// Renders the parts of the chart selected by `view`.
  pub fn to_pretty_with(&self, view: &ChartView) -> String {
    render_doc(&ChartDoc { chart: self, view }, 80)
  }
}
