pub mod contains;
pub mod contains_in_order;
pub mod empty;
pub mod equal_to;
pub mod none;
pub mod satisfies;

use crate::description::Description;

pub use contains::{contains_in_any_order, ContainsInAnyOrder};
pub use contains_in_order::{contains_in_order, ContainsInOrder};
pub use empty::{empty, Empty};
pub use equal_to::{equal_to, EqualTo};
pub use none::{is_none, present, IsNone, Present};
pub use satisfies::Satisfies;

/// A condition on values of type `T` that can explain itself.
pub trait Matcher<T: ?Sized> {
  fn matches(&self, actual: &T) -> bool;

  /// Describes what a matching value looks like.
  fn describe_to(&self, description: &mut Description);

  /// Describes why `actual` does not match. Only meaningful if `matches(actual)` is false.
  fn describe_mismatch(&self, actual: &T, description: &mut Description);
}

/// Matcher that can be stored in a [`crate::config::MatcherConfig`] and shared between threads.
pub type BoxedMatcher<T> = Box<dyn Matcher<T> + Send + Sync>;

impl<T, M> Matcher<T> for Box<M>
where
  T: ?Sized,
  M: Matcher<T> + ?Sized,
{
  fn matches(&self, actual: &T) -> bool {
    (**self).matches(actual)
  }

  fn describe_to(&self, description: &mut Description) {
    (**self).describe_to(description)
  }

  fn describe_mismatch(&self, actual: &T, description: &mut Description) {
    (**self).describe_mismatch(actual, description)
  }
}

impl<T, M> Matcher<T> for &M
where
  T: ?Sized,
  M: Matcher<T> + ?Sized,
{
  fn matches(&self, actual: &T) -> bool {
    (**self).matches(actual)
  }

  fn describe_to(&self, description: &mut Description) {
    (**self).describe_to(description)
  }

  fn describe_mismatch(&self, actual: &T, description: &mut Description) {
    (**self).describe_mismatch(actual, description)
  }
}
