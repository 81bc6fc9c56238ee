use std::any::type_name;
use std::fmt;

use crate::config::MatcherConfig;
use crate::description::Description;
use crate::matchers::Matcher;

/// Matches objects property by property, following a [`MatcherConfig`].
///
/// All properties are checked even after one fails, so a mismatch report lists every
/// deviating property in configuration order.
pub struct ConfigurableMatcher<T> {
  config: MatcherConfig<T>,
}

impl<T> ConfigurableMatcher<T> {
  pub fn using(config: MatcherConfig<T>) -> Self {
    ConfigurableMatcher { config }
  }

  pub fn config(&self) -> &MatcherConfig<T> {
    &self.config
  }
}

impl<T> Clone for ConfigurableMatcher<T> {
  fn clone(&self) -> Self {
    ConfigurableMatcher {
      config: self.config.clone(),
    }
  }
}

impl<T> fmt::Debug for ConfigurableMatcher<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(Description::of::<T, Self>(self).as_str())
  }
}

fn short_type_name<T>() -> &'static str {
  let name = type_name::<T>();
  let path = name.split('<').next().unwrap_or(name);
  let start = path.rfind("::").map_or(0, |index| index + 2);
  &name[start..]
}

impl<T> Matcher<T> for ConfigurableMatcher<T> {
  fn matches(&self, actual: &T) -> bool {
    self.config.properties().iter().fold(true, |matching, property| {
      let property_matches = property.is_satisfied_by(actual);
      if !property_matches {
        tracing::debug!(property = property.name(), "property does not match");
      }
      matching && property_matches
    })
  }

  fn describe_to(&self, description: &mut Description) {
    description.append_text(short_type_name::<T>()).append_text(" {");
    for (index, property) in self.config.properties().iter().enumerate() {
      description.append_text(if index == 0 { " " } else { ", " });
      description.append_text(property.name()).append_text(": ");
      property.describe_expected(description);
    }
    description.append_text(" }");
  }

  fn describe_mismatch(&self, actual: &T, description: &mut Description) {
    let mut separator = "";
    for property in self.config.properties() {
      let mut failure = Description::new();
      if property.describe_failure(actual, &mut failure) {
        description.append_text(separator).append_text(property.name()).append_text(" ").append_text(failure.as_str());
        separator = ", ";
      }
    }
  }
}
