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

use std::{cmp, hash, ops};

/// A wrapper that is invisible to comparison and hashing.
///
/// Every pair of `NoCompare` values is equal, and hashing one writes nothing
/// to the hasher. A struct can carry an attachment in a `NoCompare` field and
/// still derive its identity from its other fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCompare<T>(T);

impl<T> NoCompare<T> {
  pub fn new(value: T) -> Self {
    NoCompare(value)
  }

  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T> cmp::PartialEq for NoCompare<T> {
  fn eq(&self, _: &Self) -> bool {
    true
  }
}

impl<T> cmp::Eq for NoCompare<T> {}

impl<T> cmp::PartialOrd for NoCompare<T> {
  fn partial_cmp(&self, _: &Self) -> Option<cmp::Ordering> {
    Some(cmp::Ordering::Equal)
  }
}

impl<T> cmp::Ord for NoCompare<T> {
  fn cmp(&self, _: &Self) -> cmp::Ordering {
    cmp::Ordering::Equal
  }
}

impl<T> hash::Hash for NoCompare<T> {
  fn hash<H: hash::Hasher>(&self, _: &mut H) {}
}

impl<T> ops::Deref for NoCompare<T> {
  type Target = T;
  fn deref(&self) -> &T {
    &self.0
  }
}

#[cfg(test)]
mod test {
  use super::NoCompare;
  use std::collections::hash_map::DefaultHasher;
  use std::hash::{Hash, Hasher};

  fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
  }

  #[test]
  fn test_values_are_invisible() {
    let a = NoCompare::new(1);
    let b = NoCompare::new(2);
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);
    assert_eq!(hash_of(&(7, a)), hash_of(&(7, b)));
    assert_eq!(*a, 1);
    assert_eq!(b.into_inner(), 2);
  }
}
