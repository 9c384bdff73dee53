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

pub mod cmp_wrappers;

pub use cmp_wrappers::NoCompare;

pub trait ToDoc {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA, ()>
  where
    DA::Doc: Clone;
}

/// Renders a `ToDoc` value to a string at the given line width.
pub fn render_doc<T: ToDoc + ?Sized>(value: &T, width: usize) -> String {
  let arena = pretty::Arena::new();
  format!("{}", value.to_doc(&arena).into_doc().pretty(width))
}

/// A refcounted name type, used to avoid duplicating common string values
/// throughout grammars and charts.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(std::rc::Rc<String>);

impl Name {
  /// Creates a new Name containing the given string.
  pub fn new(s: &(impl AsRef<str> + ?Sized)) -> Self {
    Name(std::rc::Rc::new(s.as_ref().to_string()))
  }

  /// Returns a reference to the internal string.
  pub fn str(&self) -> &str {
    &**self.0
  }
}

impl From<String> for Name {
  fn from(s: String) -> Self {
    Name(std::rc::Rc::new(s))
  }
}

impl AsRef<str> for Name {
  fn as_ref(&self) -> &str {
    self.str()
  }
}

impl std::fmt::Debug for Name {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    fmt.write_str(&self.0)
  }
}

impl std::fmt::Display for Name {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    fmt.write_str(&self.0)
  }
}

impl ToDoc for Name {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    da.text(self.str().to_string())
  }
}

/// The result of inserting into a deduplicating collection.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum WasChanged {
  Changed,
  Unchanged,
}

impl WasChanged {
  pub fn from_changed(changed: bool) -> Self {
    if changed {
      WasChanged::Changed
    } else {
      WasChanged::Unchanged
    }
  }

  pub fn is_changed(self) -> bool {
    matches!(self, WasChanged::Changed)
  }
}
