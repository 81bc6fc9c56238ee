//! Matchers derived from a type's property table instead of a hand-written configuration.
//!
//! A type opts in by implementing [`Inspect`], usually through the [`inspect!`](crate::inspect)
//! macro:
//!
//! ```
//! use automatcher::{auto, inspect};
//! use automatcher::core::expect;
//! use automatcher::matchers::Satisfies;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Point {
//!   x: i32,
//!   y: i32,
//! }
//!
//! inspect!(Point { x, y });
//!
//! expect(&Point { x: 1, y: 2 }).to_satisfy(auto::equal_to(Point { x: 1, y: 2 }));
//! ```

use std::fmt::Debug;

use crate::config::{Builder, MatcherConfig};
use crate::configurable::ConfigurableMatcher;
use crate::description::Description;
use crate::matchers::{empty, BoxedMatcher, ContainsInAnyOrder, ContainsInOrder, Matcher};
use crate::types::Iterable;

/// Supplies the ordered list of properties that make up a type's value.
pub trait Inspect: Sized + Send + Sync + 'static {
  fn properties(builder: Builder<Self>) -> Builder<Self>;
}

/// Matches objects whose every inspected property equals the one of `expected`.
pub fn equal_to<T: Inspect>(expected: T) -> ConfigurableMatcher<T> {
  T::properties(MatcherConfig::builder(expected)).build().into_matcher()
}

fn equal_to_each<T: Inspect>(expected: Vec<T>) -> Vec<BoxedMatcher<T>> {
  expected.into_iter().map(|element| Box::new(equal_to(element)) as BoxedMatcher<T>).collect()
}

/// Collection matcher built from expected objects. `C` is the element-wise matcher used when
/// there are expected objects at all.
pub enum Contains<C> {
  Nothing,
  Elements(C),
}

/// Matches collections holding objects equal to `expected`, in the same order.
/// Without expected objects only empty collections match.
pub fn contains<T: Inspect>(expected: Vec<T>) -> Contains<ContainsInOrder<T>> {
  if expected.is_empty() {
    return Contains::Nothing;
  }
  Contains::Elements(crate::matchers::contains_in_order(equal_to_each(expected)))
}

/// Matches collections holding objects equal to `expected`, in any order. Also applies to
/// collections without a stable iteration order.
/// Without expected objects only empty collections match.
pub fn contains_in_any_order<T: Inspect>(expected: Vec<T>) -> Contains<ContainsInAnyOrder<T>> {
  if expected.is_empty() {
    return Contains::Nothing;
  }
  Contains::Elements(crate::matchers::contains_in_any_order(equal_to_each(expected)))
}

impl<I, C> Matcher<I> for Contains<C>
where
  I: Iterable + ?Sized,
  I::Item: Debug,
  C: Matcher<I>,
{
  fn matches(&self, actual: &I) -> bool {
    match self {
      Contains::Nothing => Matcher::<I>::matches(&empty(), actual),
      Contains::Elements(matcher) => matcher.matches(actual),
    }
  }

  fn describe_to(&self, description: &mut Description) {
    match self {
      Contains::Nothing => Matcher::<I>::describe_to(&empty(), description),
      Contains::Elements(matcher) => Matcher::<I>::describe_to(matcher, description),
    }
  }

  fn describe_mismatch(&self, actual: &I, description: &mut Description) {
    match self {
      Contains::Nothing => Matcher::<I>::describe_mismatch(&empty(), actual, description),
      Contains::Elements(matcher) => matcher.describe_mismatch(actual, description),
    }
  }
}

/// Implements [`Inspect`] from a list of fields.
///
/// Plain fields are compared with `PartialEq`. Collections marked `iterable` or `optional_iterable`
/// are compared element by element, telling an empty collection apart from an absent one.
/// Collections without a stable iteration order, such as `HashSet`, are marked `unordered` or
/// `optional_unordered` and compared regardless of element order. Nested
/// types implementing [`Inspect`] are compared property by property when marked as `model`,
/// `optional_model` (`Option<T>`), `models` (collection of `T`) or `optional_models` (`Option` of
/// a collection of `T`).
#[macro_export]
macro_rules! inspect {
  ($model:ty { $($field:ident $(: $kind:ident)?),* $(,)? }) => {
    impl $crate::auto::Inspect for $model {
      fn properties(builder: $crate::config::Builder<Self>) -> $crate::config::Builder<Self> {
        $(
          let builder = $crate::inspect_property!(builder, $field $(: $kind)?);
        )*
        builder
      }
    }
  };
}

#[doc(hidden)]
#[macro_export]
macro_rules! inspect_property {
  ($builder:ident, $field:ident) => {
    $builder.add_equals_property(stringify!($field), |model: &Self| model.$field.clone())
  };
  ($builder:ident, $field:ident : iterable) => {
    $builder.add_iterable_property(stringify!($field), |model: &Self| model.$field.clone(), $crate::matchers::equal_to)
  };
  ($builder:ident, $field:ident : optional_iterable) => {
    $builder.add_optional_iterable_property(stringify!($field), |model: &Self| model.$field.clone(), $crate::matchers::equal_to)
  };
  ($builder:ident, $field:ident : unordered) => {
    $builder.add_unordered_iterable_property(stringify!($field), |model: &Self| model.$field.clone(), $crate::matchers::equal_to)
  };
  ($builder:ident, $field:ident : optional_unordered) => {
    $builder.add_optional_unordered_iterable_property(stringify!($field), |model: &Self| model.$field.clone(), $crate::matchers::equal_to)
  };
  ($builder:ident, $field:ident : model) => {
    $builder.add_property(stringify!($field), |model: &Self| model.$field.clone(), $crate::auto::equal_to)
  };
  ($builder:ident, $field:ident : optional_model) => {
    $builder.add_optional_property(stringify!($field), |model: &Self| model.$field.clone(), $crate::auto::equal_to)
  };
  ($builder:ident, $field:ident : models) => {
    $builder.add_iterable_property(stringify!($field), |model: &Self| model.$field.clone(), $crate::auto::equal_to)
  };
  ($builder:ident, $field:ident : optional_models) => {
    $builder.add_optional_iterable_property(stringify!($field), |model: &Self| model.$field.clone(), $crate::auto::equal_to)
  };
}
