use super::Matcher;
use crate::description::Description;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Matches only `None`. Stands in for properties whose expected value is absent.
pub struct IsNone<P> {
  value: PhantomData<fn(&P)>,
}

pub fn is_none<P>() -> IsNone<P> {
  IsNone { value: PhantomData }
}

impl<P> Matcher<Option<P>> for IsNone<P>
where
  P: Debug,
{
  fn matches(&self, actual: &Option<P>) -> bool {
    actual.is_none()
  }

  fn describe_to(&self, description: &mut Description) {
    description.append_text("None");
  }

  fn describe_mismatch(&self, actual: &Option<P>, description: &mut Description) {
    description.append_text("was ").append_value(actual);
  }
}

/// Matches `Some(value)` where `value` satisfies the inner matcher.
pub struct Present<M> {
  inner: M,
}

pub fn present<M>(inner: M) -> Present<M> {
  Present { inner }
}

impl<P, M> Matcher<Option<P>> for Present<M>
where
  M: Matcher<P>,
{
  fn matches(&self, actual: &Option<P>) -> bool {
    actual.as_ref().is_some_and(|value| self.inner.matches(value))
  }

  fn describe_to(&self, description: &mut Description) {
    Matcher::<P>::describe_to(&self.inner, description);
  }

  fn describe_mismatch(&self, actual: &Option<P>, description: &mut Description) {
    match actual {
      Some(value) => self.inner.describe_mismatch(value, description),
      None => {
        description.append_text("was None but expected ").append_description_of::<P, M>(&self.inner);
      }
    }
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::core::{since, Locatable};
  use crate::matchers::{empty, equal_to, Satisfies};

  #[test]
  fn none_matches_only_none() {
    assert!(is_none::<i8>().matches(&None));
    assert!(!is_none().matches(&Some(1)));
  }

  #[test]
  fn present_delegates_to_inner_matcher() {
    assert!(present(equal_to(1)).matches(&Some(1)));
    assert!(!present(equal_to(1)).matches(&Some(2)));
    assert!(!present(equal_to(1)).matches(&None));
  }

  #[test]
  fn present_distinguishes_empty_from_none() {
    let matcher = present(empty());

    assert!(matcher.matches(&Some(Vec::<i8>::new())));
    assert!(!matcher.matches(&None::<Vec<i8>>));
    assert_eq!(
      Description::mismatch_of(&matcher, &None::<Vec<i8>>).as_str(),
      "was None but expected an empty collection"
    );
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: None\n\
                             \t   found: was <Some(1)>\n\
                             at location.rs:42\n")]
  fn failure_message() {
    since("description should be displayed").expect(&Some(1)).at("location.rs:42").to_satisfy(is_none());
  }

  #[test]
  #[should_panic(expected = "\n\
                             description should be displayed:\n\
                             \texpected: <1>\n\
                             \t   found: was None but expected <1>\n\
                             at location.rs:42\n")]
  fn present_failure_message() {
    since("description should be displayed").expect(&None::<i8>).at("location.rs:42").to_satisfy(present(equal_to(1)));
  }
}
