use super::contains_in_order::describe_matchers;
use super::{BoxedMatcher, Matcher};
use crate::description::Description;
use crate::types::*;
use std::fmt::Debug;

/// Matches collections where every element satisfies a distinct matcher, regardless of order.
/// Elements claim the first unused matcher they satisfy.
pub struct ContainsInAnyOrder<E> {
  matchers: Vec<BoxedMatcher<E>>,
}

pub fn contains_in_any_order<E>(matchers: Vec<BoxedMatcher<E>>) -> ContainsInAnyOrder<E> {
  ContainsInAnyOrder { matchers }
}

enum Assignment<'a, E> {
  Complete,
  Surplus(&'a E),
  Missing(Vec<usize>),
}

impl<E> ContainsInAnyOrder<E> {
  fn assign<'a>(&self, elements: &[&'a E]) -> Assignment<'a, E> {
    let mut unused = (0..self.matchers.len()).collect::<Vec<usize>>();
    for element in elements.iter().copied() {
      match unused.iter().position(|&index| self.matchers[index].matches(element)) {
        Some(position) => {
          unused.remove(position);
        }
        None => return Assignment::Surplus(element),
      }
    }
    if unused.is_empty() {
      Assignment::Complete
    } else {
      Assignment::Missing(unused)
    }
  }
}

impl<I, E> Matcher<I> for ContainsInAnyOrder<E>
where
  I: Iterable<Item = E> + ?Sized,
  E: Debug,
{
  fn matches(&self, actual: &I) -> bool {
    matches!(self.assign(&actual.elements()), Assignment::Complete)
  }

  fn describe_to(&self, description: &mut Description) {
    description.append_text("iterable with items ");
    describe_matchers(&self.matchers, description);
    description.append_text(" in any order");
  }

  fn describe_mismatch(&self, actual: &I, description: &mut Description) {
    let elements = actual.elements();
    match self.assign(&elements) {
      Assignment::Complete => {}
      Assignment::Surplus(element) => {
        description.append_text("not matched: ").append_value(element);
      }
      Assignment::Missing(unused) => {
        description.append_text("no item matches: ");
        for (position, index) in unused.into_iter().enumerate() {
          if position > 0 {
            description.append_text(", ");
          }
          Matcher::<E>::describe_to(&self.matchers[index], description);
        }
        description.append_text(" in ").append_abbreviated_list(elements);
      }
    }
  }
}
