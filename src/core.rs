//! Assertion front-end: `since(reason).expect(&value).to_satisfy(matcher)`.
//!
//! Failed assertions panic with a report of the form
//!
//! ```text
//!
//! reason:
//! 	expected: <what the matcher describes>
//! 	   found: <why the value does not match>
//! at file.rs:42
//! ```
//!
//! where the reason and location lines only appear if they were given.

use crate::description::Description;

/// Starts an assertion with a reason, recording the calling file and line as its location.
#[macro_export]
macro_rules! since {
  ($reason:expr) => {
    $crate::core::Locatable::at($crate::core::since($reason), format!("{}:{}", file!(), line!()))
  };
}

/// Starts an assertion on `subject`, recording the calling file and line as its location.
#[macro_export]
macro_rules! expect {
  ($subject:expr) => {
    $crate::core::Locatable::at($crate::core::expect(&$subject), format!("{}:{}", file!(), line!()))
  };
}

/// Why and where an assertion is made. Both parts are optional.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Context {
  reason: Option<String>,
  location: Option<String>,
}

impl Context {
  pub fn expect<S: ?Sized>(self, subject: &S) -> Subject<'_, S> {
    Subject { subject, context: self }
  }

  fn headline(&self) -> String {
    self.reason.as_ref().map_or_else(String::new, |reason| format!("\n{}:", reason))
  }

  fn footer(&self) -> String {
    self.location.as_ref().map_or_else(String::new, |location| format!("at {}\n", location))
  }
}

pub fn since(reason: &str) -> Context {
  Context {
    reason: Some(reason.to_string()),
    location: None,
  }
}

pub fn expect<S: ?Sized>(subject: &S) -> Subject<'_, S> {
  Context::default().expect(subject)
}

/// Attaches a source location to an assertion.
pub trait Locatable: Sized {
  fn at(self, location: impl Into<String>) -> Self;
}

impl Locatable for Context {
  fn at(mut self, location: impl Into<String>) -> Self {
    self.location = Some(location.into());
    self
  }
}

/// A value that is expected to satisfy a matcher.
pub struct Subject<'a, S: ?Sized> {
  subject: &'a S,
  context: Context,
}

impl<'a, S: ?Sized> Subject<'a, S> {
  pub fn subject(&self) -> &'a S {
    self.subject
  }

  #[allow(clippy::should_implement_trait)]
  pub fn not(self) -> NegatedSubject<'a, S> {
    NegatedSubject {
      subject: self.subject,
      context: self.context,
    }
  }
}

impl<'a, S: ?Sized> Locatable for Subject<'a, S> {
  fn at(mut self, location: impl Into<String>) -> Self {
    self.context = self.context.at(location);
    self
  }
}

/// A value that is expected not to satisfy a matcher.
pub struct NegatedSubject<'a, S: ?Sized> {
  subject: &'a S,
  context: Context,
}

impl<'a, S: ?Sized> NegatedSubject<'a, S> {
  pub fn subject(&self) -> &'a S {
    self.subject
  }

  #[allow(clippy::should_implement_trait)]
  pub fn not(self) -> Subject<'a, S> {
    Subject {
      subject: self.subject,
      context: self.context,
    }
  }
}

impl<'a, S: ?Sized> Locatable for NegatedSubject<'a, S> {
  fn at(mut self, location: impl Into<String>) -> Self {
    self.context = self.context.at(location);
    self
  }
}

/// Report of a failed assertion. Matchers write into its expected and found descriptions.
#[derive(Debug)]
pub struct Mismatch {
  context: Context,
  expected: Description,
  found: Description,
}

impl Mismatch {
  pub fn new(context: Context) -> Self {
    Mismatch {
      context,
      expected: Description::new(),
      found: Description::new(),
    }
  }

  pub fn expected(&mut self) -> &mut Description {
    &mut self.expected
  }

  pub fn found(&mut self) -> &mut Description {
    &mut self.found
  }

  pub fn fail(self) -> ! {
    panic!(
      "{}\n\
       \texpected: {}\n\
       \t   found: {}\n\
       {}",
      self.context.headline(),
      self.expected,
      self.found,
      self.context.footer()
    )
  }
}

impl<'a, S: ?Sized> From<Subject<'a, S>> for Mismatch {
  fn from(subject: Subject<'a, S>) -> Self {
    Mismatch::new(subject.context)
  }
}

impl<'a, S: ?Sized> From<NegatedSubject<'a, S>> for Mismatch {
  fn from(subject: NegatedSubject<'a, S>) -> Self {
    Mismatch::new(subject.context)
  }
}

#[cfg(test)]
mod tests {

  use super::*;

  fn fail_with(mut mismatch: Mismatch) -> ! {
    mismatch.expected().append_text("something");
    mismatch.found().append_text("was ").append_value(&0);
    mismatch.fail()
  }

  #[test]
  #[should_panic(expected = "\n\
                             reason should be displayed:\n\
                             \texpected: something\n\
                             \t   found: was <0>\n\
                             at location.rs:42\n")]
  fn failure_message() {
    fail_with(Mismatch::from(since("reason should be displayed").expect(&1).at("location.rs:42")))
  }

  #[test]
  #[should_panic(expected = "\n\
                             \texpected: something\n\
                             \t   found: was <0>\n")]
  fn failure_message_without_reason_or_location() {
    fail_with(Mismatch::from(expect(&1)))
  }

  #[test]
  fn location_can_be_given_before_or_after_the_subject() {
    let early = since("reason").at("early.rs:1").expect(&1);
    let late = since("reason").expect(&1).at(String::from("late.rs:2"));

    assert_eq!(early.context, since("reason").at("early.rs:1"));
    assert_eq!(late.context.footer(), "at late.rs:2\n");
  }

  #[test]
  fn double_negation_restores_subject() {
    let subject = since("reason").expect(&7).not().not();

    assert_eq!(*subject.subject(), 7);
    assert_eq!(subject.context.headline(), "\nreason:");
  }

  #[test]
  #[should_panic(expected = "found: was <0>\nat src/core.rs:")]
  fn expect_macro_records_location() {
    fail_with(Mismatch::from(crate::expect!(1)))
  }

  #[test]
  #[should_panic(expected = "\nreason should be displayed:\n\texpected: something\n\t   found: was <0>\nat src/core.rs:")]
  fn since_macro_records_location() {
    fail_with(Mismatch::from(crate::since!("reason should be displayed").expect(&1)))
  }
}
