//! Model types exercising builders and auto matchers in tests.

use crate::inspect;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoAttribute {
  pub value: String,
}

impl DemoAttribute {
  pub fn new(value: &str) -> Self {
    DemoAttribute { value: value.to_string() }
  }
}

inspect!(DemoAttribute { value });

#[derive(Debug, Clone, PartialEq)]
pub struct DemoModel {
  pub id: i32,
  pub name: Option<String>,
  pub long_val: Option<i64>,
  pub attr: Option<DemoAttribute>,
  pub string_array: Option<Vec<String>>,
  pub children: Option<Vec<DemoModel>>,
}

impl DemoModel {
  pub fn with_id(id: i32) -> Self {
    DemoModel {
      id,
      name: None,
      long_val: None,
      attr: None,
      string_array: None,
      children: None,
    }
  }

  pub fn named(mut self, name: &str) -> Self {
    self.name = Some(name.to_string());
    self
  }

  pub fn with_long(mut self, long_val: i64) -> Self {
    self.long_val = Some(long_val);
    self
  }

  pub fn with_attr(mut self, attr: DemoAttribute) -> Self {
    self.attr = Some(attr);
    self
  }

  pub fn with_strings(mut self, strings: Vec<&str>) -> Self {
    self.string_array = Some(strings.into_iter().map(String::from).collect());
    self
  }

  pub fn with_children(mut self, children: Vec<DemoModel>) -> Self {
    self.children = Some(children);
    self
  }
}

inspect!(DemoModel {
  id,
  name,
  long_val,
  attr: optional_model,
  string_array: optional_iterable,
  children: optional_models,
});
