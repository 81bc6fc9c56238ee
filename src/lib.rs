//! Declarative matchers for model objects.
//!
//! A [`config::MatcherConfig`] lists the properties of an expected object together with the
//! matcher each property of an actual object has to satisfy. The resulting
//! [`configurable::ConfigurableMatcher`] checks all properties and reports every deviating one.
//!
//! ```
//! use automatcher::config::MatcherConfig;
//! use automatcher::core::{since, Locatable};
//! use automatcher::matchers::{equal_to, Satisfies};
//!
//! #[derive(Debug)]
//! struct User {
//!   id: u32,
//!   nick: Option<String>,
//!   roles: Option<Vec<String>>,
//! }
//!
//! let expected = User { id: 7, nick: None, roles: Some(vec![]) };
//! let matcher = MatcherConfig::builder(expected)
//!   .add_equals_property("id", |user: &User| user.id)
//!   .add_optional_property("nick", |user: &User| user.nick.clone(), equal_to)
//!   .add_optional_iterable_property("roles", |user: &User| user.roles.clone(), equal_to)
//!   .build()
//!   .into_matcher();
//!
//! let actual = User { id: 7, nick: None, roles: Some(vec![]) };
//! since("the stored user should be unchanged").expect(&actual).at("docs").to_satisfy(&matcher);
//! ```

pub mod auto;
pub mod config;
pub mod configurable;
pub mod core;
pub mod description;
pub mod error;
pub mod matchers;
pub mod types;

#[cfg(test)]
mod demo;
