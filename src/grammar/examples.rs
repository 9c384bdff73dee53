//! A small English grammar and sentence generator, used by tests and demos.

use crate::grammar::{build, Grammar, Symbol};

/// The zoo grammar: simple English sentences about animals.
///
/// Both `NP --> NP PP` and `VP --> VP PP` are left recursive, and
/// prepositional phrases attach ambiguously.
pub fn zoo_grammar() -> Grammar {
  build(|gb| {
    gb.add_prod("S", vec!["NP", "VP"])
      .add_prod("VP", vec!["Verb"])
      .add_prod("VP", vec!["Verb", "NP"])
      .add_prod("VP", vec!["VP", "PP"])
      .add_prod("NP", vec!["Det", "Noun"])
      .add_prod("NP", vec!["NP", "PP"])
      .add_prod("PP", vec!["Prep", "NP"])
      .add_lexicon("Verb", vec!["sees"])
      .add_lexicon("Det", vec!["the", "a"])
      .add_lexicon("Prep", vec!["under", "with", "in"])
      .add_lexicon("Noun", vec!["zebra", "lion", "tree", "park", "telescope"]);
  })
  .expect("zoo grammar has no empty rules")
}

/// Returns `the lion sees a zebra` followed by `3 * n` words of trailing
/// prepositional phrases, each three words long.
pub fn example_sentence(n: usize) -> Vec<Symbol> {
  let prefix = "the lion sees a zebra".split_whitespace();
  let suffix: Vec<&str> = "under a tree with a telescope in the park"
    .split_whitespace()
    .collect();
  let tail = suffix.iter().cycle().take(n * 3).copied();
  prefix.chain(tail).map(Symbol::new).collect()
}
