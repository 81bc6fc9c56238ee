use std::fmt::{self, Debug, Display};

use crate::matchers::Matcher;

/// Number of elements listed before a collection is abbreviated in mismatch reports.
const ABBREVIATE_AFTER: usize = 5;

/// Text accumulator matchers write their expectations and mismatches into.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Description {
  text: String,
}

impl Description {
  pub fn new() -> Self {
    Description { text: String::new() }
  }

  /// Renders what `matcher` expects into a fresh description.
  pub fn of<T: ?Sized, M: Matcher<T> + ?Sized>(matcher: &M) -> Self {
    let mut description = Description::new();
    matcher.describe_to(&mut description);
    description
  }

  /// Renders why `actual` failed `matcher` into a fresh description.
  pub fn mismatch_of<T: ?Sized, M: Matcher<T> + ?Sized>(matcher: &M, actual: &T) -> Self {
    let mut description = Description::new();
    matcher.describe_mismatch(actual, &mut description);
    description
  }

  pub fn append_text(&mut self, text: &str) -> &mut Self {
    self.text.push_str(text);
    self
  }

  pub fn append_value<V: Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
    self.text.push_str(&format!("<{:?}>", value));
    self
  }

  pub fn append_description_of<T: ?Sized, M: Matcher<T> + ?Sized>(&mut self, matcher: &M) -> &mut Self {
    matcher.describe_to(self);
    self
  }

  /// Appends `[<a>, <b>, ...]`, listing every value.
  pub fn append_list<'v, V, I>(&mut self, values: I) -> &mut Self
  where
    V: Debug + ?Sized + 'v,
    I: IntoIterator<Item = &'v V>,
  {
    let values = values.into_iter().collect::<Vec<&V>>();
    self.text.push('[');
    self.text.push_str(&highlight(&values));
    self.text.push(']');
    self
  }

  /// Appends `[<a>, <b>, ...]`, listing at most five values and counting the rest.
  pub fn append_abbreviated_list<'v, V, I>(&mut self, values: I) -> &mut Self
  where
    V: Debug + ?Sized + 'v,
    I: IntoIterator<Item = &'v V>,
  {
    let values = values.into_iter().collect::<Vec<&V>>();
    self.text.push('[');
    self.text.push_str(&abbreviate_highlight(&values));
    self.text.push(']');
    self
  }

  pub fn as_str(&self) -> &str {
    &self.text
  }
}

impl Display for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.text)
  }
}

impl From<Description> for String {
  fn from(description: Description) -> Self {
    description.text
  }
}

fn highlight<V: Debug + ?Sized>(values: &[&V]) -> String {
  values.iter().map(|value| format!("<{:?}>", value)).collect::<Vec<String>>().join(", ")
}

fn abbreviate_highlight<V: Debug + ?Sized>(values: &[&V]) -> String {
  let mut highlighted = highlight(&values[..values.len().min(ABBREVIATE_AFTER)]);
  if values.len() > ABBREVIATE_AFTER {
    highlighted.push_str(format!(", ... ({} items)", values.len() - ABBREVIATE_AFTER).as_str());
  }
  highlighted
}

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn values_are_highlighted() {
    let mut description = Description::new();
    description.append_text("was ").append_value(&"x").append_text(" and ").append_value(&1);

    assert_eq!(description.as_str(), "was <\"x\"> and <1>");
  }

  #[test]
  fn lists_are_separated() {
    let mut description = Description::new();
    description.append_list(&[1, 2, 3]);

    assert_eq!(description.to_string(), "[<1>, <2>, <3>]");
  }

  #[test]
  fn empty_lists_have_no_elements() {
    let mut description = Description::new();
    description.append_list(Vec::<i8>::new().iter());

    assert_eq!(description.to_string(), "[]");
  }

  #[test]
  fn long_lists_are_abbreviated() {
    let mut description = Description::new();
    description.append_abbreviated_list(&[1, 2, 3, 4, 5, 6, 7]);

    assert_eq!(description.to_string(), "[<1>, <2>, <3>, <4>, <5>, ... (2 items)]");
  }

  #[test]
  fn short_lists_are_not_abbreviated() {
    let mut description = Description::new();
    description.append_abbreviated_list(&[1, 2]);

    assert_eq!(description.to_string(), "[<1>, <2>]");
  }
}
