use super::{BoxedMatcher, Matcher};
use crate::description::Description;
use crate::types::*;
use std::fmt::Debug;

/// Matches collections whose elements satisfy the given matchers pairwise, in order,
/// with no elements left over on either side.
pub struct ContainsInOrder<E> {
  matchers: Vec<BoxedMatcher<E>>,
}

pub fn contains_in_order<E>(matchers: Vec<BoxedMatcher<E>>) -> ContainsInOrder<E> {
  ContainsInOrder { matchers }
}

pub(crate) fn describe_matchers<E>(matchers: &[BoxedMatcher<E>], description: &mut Description) {
  description.append_text("[");
  let mut it = matchers.iter();
  if let Some(matcher) = it.next() {
    Matcher::<E>::describe_to(matcher, description);
    for matcher in it {
      description.append_text(", ");
      Matcher::<E>::describe_to(matcher, description);
    }
  }
  description.append_text("]");
}

impl<I, E> Matcher<I> for ContainsInOrder<E>
where
  I: OrderedIterable<Item = E> + ?Sized,
  E: Debug,
{
  fn matches(&self, actual: &I) -> bool {
    let elements = actual.elements();
    elements.len() == self.matchers.len() && elements.iter().zip(&self.matchers).all(|(element, matcher)| matcher.matches(*element))
  }

  fn describe_to(&self, description: &mut Description) {
    description.append_text("iterable containing ");
    describe_matchers(&self.matchers, description);
  }

  fn describe_mismatch(&self, actual: &I, description: &mut Description) {
    let elements = actual.elements();
    for (index, element) in elements.iter().copied().enumerate() {
      match self.matchers.get(index) {
        None => {
          description.append_text("not matched: ").append_value(element);
          return;
        }
        Some(matcher) if !matcher.matches(element) => {
          description.append_text(&format!("item {}: ", index));
          matcher.describe_mismatch(element, description);
          return;
        }
        Some(_) => {}
      }
    }
    if let Some(missing) = self.matchers.get(elements.len()) {
      description.append_text("no item matched: ");
      Matcher::<E>::describe_to(missing, description);
    }
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::core::{since, Locatable};
  use crate::matchers::{equal_to, Satisfies};
  use std::collections::BTreeSet;

  fn equal_to_all(expected: Vec<i8>) -> ContainsInOrder<i8> {
    contains_in_order(expected.into_iter().map(|e| Box::new(equal_to(e)) as BoxedMatcher<i8>).collect())
  }

  #[test]
  fn compiles_with_different_collections() {
    since("vec should compile").expect(&vec![1i8, 2i8]).to_satisfy(equal_to_all(vec![1, 2]));
    since("btreeset should compile").expect(&BTreeSet::from([2i8, 1i8])).to_satisfy(equal_to_all(vec![1, 2]));
    since("array should compile").expect(&[1i8]).to_satisfy(equal_to_all(vec![1]));
  }

  #[test]
  fn order_is_relevant() {
    since("reordered elements should not match").expect(&vec![2i8, 1i8]).not().to_satisfy(equal_to_all(vec![1, 2]));
  }

  #[test]
  fn no_matchers_match_only_empty_collections() {
    since("empty should match").expect(&Vec::<i8>::new()).to_satisfy(equal_to_all(vec![]));
    since("non empty should not match").expect(&vec![1i8]).not().to_satisfy(equal_to_all(vec![]));
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: iterable containing [<1>, <2>]\n\
                             \t   found: item 1: was <1>\n\
                             at location.rs:42\n")]
  fn failure_message_for_mismatch_at_later_element() {
    since("description should be displayed").expect(&vec![1i8, 1i8]).at("location.rs:42").to_satisfy(equal_to_all(vec![1, 2]));
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: iterable containing [<2>]\n\
                             \t   found: not matched: <3>\n\
                             at location.rs:42\n")]
  fn failure_message_for_surplus() {
    since("description should be displayed").expect(&vec![2i8, 3i8]).at("location.rs:42").to_satisfy(equal_to_all(vec![2]));
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: iterable containing [<2>, <3>]\n\
                             \t   found: no item matched: <3>\n\
                             at location.rs:42\n")]
  fn failure_message_for_missing() {
    since("description should be displayed").expect(&vec![2i8]).at("location.rs:42").to_satisfy(equal_to_all(vec![2, 3]));
  }
}
