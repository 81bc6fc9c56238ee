use super::Matcher;
use crate::description::Description;
use crate::types::*;
use std::fmt::Debug;

/// Matches collections without elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

pub fn empty() -> Empty {
  Empty
}

impl<I> Matcher<I> for Empty
where
  I: Iterable + ?Sized,
  I::Item: Debug,
{
  fn matches(&self, actual: &I) -> bool {
    actual.count() == 0
  }

  fn describe_to(&self, description: &mut Description) {
    description.append_text("an empty collection");
  }

  fn describe_mismatch(&self, actual: &I, description: &mut Description) {
    description.append_text(&format!("has size <{}> ", actual.count())).append_abbreviated_list(actual.elements());
  }
}
