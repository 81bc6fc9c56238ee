use std::any::Any;
use std::fmt::{self, Debug};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::configurable::ConfigurableMatcher;
use crate::description::Description;
use crate::error::{AccessError, ConfigError, ConfigResult};
use crate::matchers::{contains_in_any_order, contains_in_order, empty, equal_to, is_none, present, BoxedMatcher, Matcher};
use crate::types::{Iterable, OrderedIterable};

type Accessor<T, P> = Box<dyn Fn(&T) -> P + Send + Sync>;

/// One configured property: how to read it and what the read value has to satisfy.
pub struct PropertyConfig<T, P> {
  name: String,
  accessor: Accessor<T, P>,
  matcher: BoxedMatcher<P>,
}

impl<T, P> PropertyConfig<T, P> {
  /// Reads the property, turning a panicking accessor into an [`AccessError`].
  ///
  /// The panic is still passed to the installed panic hook first, so with the default hook every
  /// caught accessor panic also prints a `thread '…' panicked` line to stderr.
  fn value_of(&self, actual: &T) -> Result<P, AccessError> {
    panic::catch_unwind(AssertUnwindSafe(|| (self.accessor)(actual))).map_err(|payload| {
      let message = panic_message(payload.as_ref());
      tracing::warn!(property = %self.name, %message, "property accessor panicked");
      AccessError::Panicked { message }
    })
  }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    message.to_string()
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.clone()
  } else {
    "accessor panicked".to_string()
  }
}

/// Type-erased view on a [`PropertyConfig`], so properties of different value types share one list.
pub(crate) trait Property<T>: Send + Sync {
  fn name(&self) -> &str;
  fn is_satisfied_by(&self, actual: &T) -> bool;
  fn describe_expected(&self, description: &mut Description);
  /// Reads the property once and, if it is not satisfied, writes why. Returns whether it failed.
  fn describe_failure(&self, actual: &T, description: &mut Description) -> bool;
}

impl<T, P> Property<T> for PropertyConfig<T, P> {
  fn name(&self) -> &str {
    &self.name
  }

  fn is_satisfied_by(&self, actual: &T) -> bool {
    match self.value_of(actual) {
      Ok(value) => self.matcher.matches(&value),
      Err(_) => false,
    }
  }

  fn describe_expected(&self, description: &mut Description) {
    Matcher::<P>::describe_to(&self.matcher, description);
  }

  fn describe_failure(&self, actual: &T, description: &mut Description) -> bool {
    match self.value_of(actual) {
      Ok(value) if self.matcher.matches(&value) => false,
      Ok(value) => {
        self.matcher.describe_mismatch(&value, description);
        true
      }
      Err(error) => {
        description.append_text(&error.to_string());
        true
      }
    }
  }
}

/// Immutable set of property rules derived from one expected object.
pub struct MatcherConfig<T> {
  expected: Arc<T>,
  properties: Vec<Arc<dyn Property<T>>>,
}

impl<T> MatcherConfig<T> {
  pub fn builder(expected: T) -> Builder<T> {
    Builder {
      expected: Arc::new(expected),
      properties: Vec::new(),
    }
  }

  /// Like [`MatcherConfig::builder`], but for an expected object that may be absent.
  pub fn try_builder(expected: Option<T>) -> ConfigResult<Builder<T>> {
    expected.map(MatcherConfig::builder).ok_or(ConfigError::MissingExpected)
  }

  pub fn expected(&self) -> &T {
    &self.expected
  }

  pub fn property_names(&self) -> Vec<&str> {
    self.properties.iter().map(|property| property.name()).collect()
  }

  pub fn len(&self) -> usize {
    self.properties.len()
  }

  pub fn is_empty(&self) -> bool {
    self.properties.is_empty()
  }

  pub(crate) fn properties(&self) -> &[Arc<dyn Property<T>>] {
    &self.properties
  }

  pub fn into_matcher(self) -> ConfigurableMatcher<T> {
    ConfigurableMatcher::using(self)
  }
}

impl<T> Clone for MatcherConfig<T> {
  fn clone(&self) -> Self {
    MatcherConfig {
      expected: Arc::clone(&self.expected),
      properties: self.properties.clone(),
    }
  }
}

impl<T: Debug> Debug for MatcherConfig<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MatcherConfig")
      .field("expected", &self.expected)
      .field("properties", &self.property_names())
      .finish()
  }
}

/// Collects property rules for one expected object.
///
/// Every `add_*` method reads the property from the expected object right away and binds the
/// resulting matcher to that value. Absent expected values (`None`) turn into a rule that only
/// accepts an absent actual value.
pub struct Builder<T> {
  expected: Arc<T>,
  properties: Vec<Arc<dyn Property<T>>>,
}

impl<T: 'static> Builder<T> {
  /// Compares the property with `PartialEq`. For `Option` properties a `None` expected value
  /// only accepts `None`.
  pub fn add_equals_property<P, F>(self, name: &str, accessor: F) -> Self
  where
    F: Fn(&T) -> P + Send + Sync + 'static,
    P: PartialEq + Debug + Send + Sync + 'static,
  {
    self.add_property(name, accessor, equal_to)
  }

  /// Compares the property with the matcher `matcher_builder` creates from the expected value.
  pub fn add_property<P, F, B, M>(self, name: &str, accessor: F, matcher_builder: B) -> Self
  where
    F: Fn(&T) -> P + Send + Sync + 'static,
    B: FnOnce(P) -> M,
    M: Matcher<P> + Send + Sync + 'static,
    P: 'static,
  {
    let matcher = matcher_builder(accessor(&*self.expected));
    self.add_property_internal(name, accessor, Box::new(matcher))
  }

  /// Like [`Builder::add_property`] for properties that may be absent.
  pub fn add_optional_property<P, F, B, M>(self, name: &str, accessor: F, matcher_builder: B) -> Self
  where
    F: Fn(&T) -> Option<P> + Send + Sync + 'static,
    B: FnOnce(P) -> M,
    M: Matcher<P> + Send + Sync + 'static,
    P: Debug + 'static,
  {
    let matcher: BoxedMatcher<Option<P>> = match accessor(&*self.expected) {
      None => Box::new(is_none()),
      Some(expected) => Box::new(present(matcher_builder(expected))),
    };
    self.add_property_internal(name, accessor, matcher)
  }

  /// Adds a collection property whose element order is relevant. Each expected element is turned
  /// into a matcher by `matcher_builder`; an empty expected collection only accepts empty ones.
  ///
  /// Only collections with a stable iteration order qualify. Hash sets go through
  /// [`Builder::add_unordered_iterable_property`]:
  ///
  /// ```compile_fail
  /// use std::collections::HashSet;
  /// use automatcher::config::MatcherConfig;
  /// use automatcher::matchers::equal_to;
  ///
  /// MatcherConfig::builder(HashSet::from([1]))
  ///   .add_iterable_property("ids", |ids: &HashSet<i32>| ids.clone(), equal_to);
  /// ```
  pub fn add_iterable_property<I, E, F, B, M>(self, name: &str, accessor: F, matcher_builder: B) -> Self
  where
    F: Fn(&T) -> I + Send + Sync + 'static,
    I: OrderedIterable<Item = E> + IntoIterator<Item = E> + 'static,
    B: Fn(E) -> M,
    M: Matcher<E> + Send + Sync + 'static,
    E: Debug + 'static,
  {
    let matcher = ordered_matcher(accessor(&*self.expected), matcher_builder);
    self.add_property_internal(name, accessor, matcher)
  }

  /// Like [`Builder::add_iterable_property`] for collections that may be absent. An absent
  /// expected collection only accepts an absent one, an empty one only accepts an empty one.
  pub fn add_optional_iterable_property<I, E, F, B, M>(self, name: &str, accessor: F, matcher_builder: B) -> Self
  where
    F: Fn(&T) -> Option<I> + Send + Sync + 'static,
    I: OrderedIterable<Item = E> + IntoIterator<Item = E> + Debug + 'static,
    B: Fn(E) -> M,
    M: Matcher<E> + Send + Sync + 'static,
    E: Debug + 'static,
  {
    let matcher: BoxedMatcher<Option<I>> = match accessor(&*self.expected) {
      None => Box::new(is_none()),
      Some(expected) => Box::new(present(ordered_matcher(expected, matcher_builder))),
    };
    self.add_property_internal(name, accessor, matcher)
  }

  /// Adds a collection property whose element order is irrelevant, such as a `HashSet`. Every
  /// actual element has to satisfy a distinct matcher built from an expected element.
  pub fn add_unordered_iterable_property<I, E, F, B, M>(self, name: &str, accessor: F, matcher_builder: B) -> Self
  where
    F: Fn(&T) -> I + Send + Sync + 'static,
    I: Iterable<Item = E> + IntoIterator<Item = E> + 'static,
    B: Fn(E) -> M,
    M: Matcher<E> + Send + Sync + 'static,
    E: Debug + 'static,
  {
    let matcher = unordered_matcher(accessor(&*self.expected), matcher_builder);
    self.add_property_internal(name, accessor, matcher)
  }

  /// Like [`Builder::add_unordered_iterable_property`] for collections that may be absent.
  pub fn add_optional_unordered_iterable_property<I, E, F, B, M>(self, name: &str, accessor: F, matcher_builder: B) -> Self
  where
    F: Fn(&T) -> Option<I> + Send + Sync + 'static,
    I: Iterable<Item = E> + IntoIterator<Item = E> + Debug + 'static,
    B: Fn(E) -> M,
    M: Matcher<E> + Send + Sync + 'static,
    E: Debug + 'static,
  {
    let matcher: BoxedMatcher<Option<I>> = match accessor(&*self.expected) {
      None => Box::new(is_none()),
      Some(expected) => Box::new(present(unordered_matcher(expected, matcher_builder))),
    };
    self.add_property_internal(name, accessor, matcher)
  }

  fn add_property_internal<P, F>(mut self, name: &str, accessor: F, matcher: BoxedMatcher<P>) -> Self
  where
    F: Fn(&T) -> P + Send + Sync + 'static,
    P: 'static,
  {
    tracing::trace!(property = name, "configured property");
    self.properties.push(Arc::new(PropertyConfig {
      name: name.to_string(),
      accessor: Box::new(accessor),
      matcher,
    }));
    self
  }

  /// Snapshots the rules collected so far. Later additions do not affect the returned config.
  pub fn build(&self) -> MatcherConfig<T> {
    tracing::trace!(properties = self.properties.len(), "built matcher config");
    MatcherConfig {
      expected: Arc::clone(&self.expected),
      properties: self.properties.clone(),
    }
  }
}

fn element_matchers<I, E, B, M>(expected: I, matcher_builder: B) -> Vec<BoxedMatcher<E>>
where
  I: IntoIterator<Item = E>,
  B: Fn(E) -> M,
  M: Matcher<E> + Send + Sync + 'static,
{
  expected.into_iter().map(|element| Box::new(matcher_builder(element)) as BoxedMatcher<E>).collect()
}

fn ordered_matcher<I, E, B, M>(expected: I, matcher_builder: B) -> BoxedMatcher<I>
where
  I: OrderedIterable<Item = E> + IntoIterator<Item = E> + 'static,
  B: Fn(E) -> M,
  M: Matcher<E> + Send + Sync + 'static,
  E: Debug + 'static,
{
  if expected.count() == 0 {
    return Box::new(empty());
  }
  Box::new(contains_in_order(element_matchers(expected, matcher_builder)))
}

fn unordered_matcher<I, E, B, M>(expected: I, matcher_builder: B) -> BoxedMatcher<I>
where
  I: Iterable<Item = E> + IntoIterator<Item = E> + 'static,
  B: Fn(E) -> M,
  M: Matcher<E> + Send + Sync + 'static,
  E: Debug + 'static,
{
  if expected.count() == 0 {
    return Box::new(empty());
  }
  Box::new(contains_in_any_order(element_matchers(expected, matcher_builder)))
}
