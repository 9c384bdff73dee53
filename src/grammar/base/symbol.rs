use {
  crate::utils::{Name, ToDoc},
  unicode_segmentation::UnicodeSegmentation,
};

/// A terminal or nonterminal label.
///
/// Grammars make no distinction between the two: a symbol is a terminal
/// exactly when it appears in the input, and a nonterminal when some rule
/// has it as a left-hand side. Symbols compare by value and are cheap to
/// clone.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(Name);

impl Symbol {
  pub fn new(s: &str) -> Self {
    Symbol(Name::new(s))
  }

  pub fn as_str(&self) -> &str {
    self.0.str()
  }
}

impl From<&str> for Symbol {
  fn from(s: &str) -> Self {
    Symbol::new(s)
  }
}

impl From<String> for Symbol {
  fn from(s: String) -> Self {
    Symbol(Name::from(s))
  }
}

impl From<&Symbol> for Symbol {
  fn from(s: &Symbol) -> Self {
    s.clone()
  }
}

impl std::fmt::Debug for Symbol {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    std::fmt::Debug::fmt(&self.0, fmt)
  }
}

impl std::fmt::Display for Symbol {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    std::fmt::Display::fmt(&self.0, fmt)
  }
}

impl ToDoc for Symbol {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    self.0.to_doc(da)
  }
}

/// Converts a slice of strings into symbols.
pub fn symbols(words: &[&str]) -> Vec<Symbol> {
  words.iter().map(|w| Symbol::new(w)).collect()
}

/// Splits a sentence into word tokens on Unicode word boundaries.
///
/// Whitespace and punctuation between words are dropped.
pub fn tokenize(text: &str) -> Vec<Symbol> {
  text.unicode_words().map(Symbol::new).collect()
}
