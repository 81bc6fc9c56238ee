use super::Matcher;
use crate::description::Description;
use std::fmt::Debug;

/// Matches values equal to the expected one, compared with `PartialEq`.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualTo<E> {
  expected: E,
}

pub fn equal_to<E>(expected: E) -> EqualTo<E> {
  EqualTo { expected }
}

impl<E> Matcher<E> for EqualTo<E>
where
  E: PartialEq + Debug,
{
  fn matches(&self, actual: &E) -> bool {
    actual.eq(&self.expected)
  }

  fn describe_to(&self, description: &mut Description) {
    description.append_value(&self.expected);
  }

  fn describe_mismatch(&self, actual: &E, description: &mut Description) {
    description.append_text("was ").append_value(actual);
  }
}
