use super::Matcher;
use crate::core::{Mismatch, NegatedSubject, Subject};
use std::fmt::Debug;

/// Assertion on a subject, failing with the matcher's expectation and mismatch report.
pub trait Satisfies<S: ?Sized> {
  #[allow(clippy::wrong_self_convention)]
  fn to_satisfy<M: Matcher<S>>(self, matcher: M) -> Self;
}

impl<'a, S> Satisfies<S> for Subject<'a, S>
where
  S: ?Sized,
{
  fn to_satisfy<M: Matcher<S>>(self, matcher: M) -> Self {
    let subject = self.subject();
    if !matcher.matches(subject) {
      let mut mismatch = Mismatch::from(self);
      Matcher::<S>::describe_to(&matcher, mismatch.expected());
      matcher.describe_mismatch(subject, mismatch.found());
      mismatch.fail()
    }
    self
  }
}

impl<'a, S> Satisfies<S> for NegatedSubject<'a, S>
where
  S: Debug + ?Sized,
{
  fn to_satisfy<M: Matcher<S>>(self, matcher: M) -> Self {
    let subject = self.subject();
    if matcher.matches(subject) {
      let mut mismatch = Mismatch::from(self);
      mismatch.expected().append_text("not ").append_description_of::<S, M>(&matcher);
      mismatch.found().append_text("was ").append_value(subject);
      mismatch.fail()
    }
    self
  }
}

#[cfg(test)]
mod tests {

  use super::*;
  use crate::core::since;
  use crate::matchers::equal_to;

  #[test]
  fn passing_assertions_return_the_subject() {
    let subject = since("value should match").expect(&1).to_satisfy(equal_to(1));

    assert_eq!(*subject.subject(), 1);
  }

  #[test]
  fn negated_assertions_pass_on_mismatch() {
    since("value should not match").expect(&1).not().to_satisfy(equal_to(2));
  }

  #[test]
  #[should_panic(expected = "\texpected: <2>\n")]
  fn macro_assertions_fail_with_expectation() {
    crate::expect!(1).to_satisfy(equal_to(2));
  }
}
