// Copyright 2020 Google LLC
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

//! Renders a chart as a Graphviz graph.
//!
//! Chart positions become nodes, and each passive edge becomes an arc from
//! its start position to its end position labelled with its rule.

use {
  super::{Chart, Edge},
  std::borrow::Cow,
};

type Position = usize;

impl<'a> dot::Labeller<'a, Position, &'a Edge> for Chart {
  fn graph_id(&'a self) -> dot::Id<'a> {
    dot::Id::new("chart").expect("graph id is a valid identifier")
  }

  fn node_id(&'a self, n: &Position) -> dot::Id<'a> {
    dot::Id::new(format!("p{}", n)).expect("node ids are valid identifiers")
  }

  fn node_label(&'a self, n: &Position) -> dot::LabelText<'a> {
    dot::LabelText::LabelStr(n.to_string().into())
  }

  fn edge_label(&'a self, e: &&'a Edge) -> dot::LabelText<'a> {
    let label = match e.rule() {
      Some(rule) => rule.to_string(),
      None => e.lhs().to_string(),
    };
    dot::LabelText::LabelStr(label.into())
  }
}

impl<'a> dot::GraphWalk<'a, Position, &'a Edge> for Chart {
  fn nodes(&'a self) -> dot::Nodes<'a, Position> {
    Cow::Owned((0..self.len()).collect())
  }

  fn edges(&'a self) -> dot::Edges<'a, &'a Edge> {
    Cow::Owned(Chart::edges(self).filter(|e| e.is_passive()).collect())
  }

  fn source(&'a self, e: &&'a Edge) -> Position {
    e.start()
  }

  fn target(&'a self, e: &&'a Edge) -> Position {
    e.end()
  }
}

impl Chart {
  /// Renders this chart in the Graphviz dot language.
  pub fn to_dot(&self) -> String {
    let mut buffer = Vec::new();
    dot::render(self, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("dot output is utf-8")
  }
}
