use std::collections::{BTreeSet, HashSet, VecDeque};

/// Borrowed view on the elements of a collection property.
pub trait Iterable {
  type Item;
  fn elements(&self) -> Vec<&Self::Item>;
  fn count(&self) -> usize;
}

/// Collections whose iteration order is the same for equal contents, so they can be compared
/// element by element.
pub trait OrderedIterable: Iterable {}

impl<T> OrderedIterable for Vec<T> {}
impl<T> OrderedIterable for [T] {}
impl<T, const N: usize> OrderedIterable for [T; N] {}
impl<T> OrderedIterable for VecDeque<T> {}
impl<T> OrderedIterable for BTreeSet<T> {}

impl<T> Iterable for Vec<T> {
  type Item = T;

  fn elements(&self) -> Vec<&T> {
    self.iter().collect()
  }

  fn count(&self) -> usize {
    self.len()
  }
}

impl<T> Iterable for [T] {
  type Item = T;

  fn elements(&self) -> Vec<&T> {
    self.iter().collect()
  }

  fn count(&self) -> usize {
    self.len()
  }
}

impl<T, const N: usize> Iterable for [T; N] {
  type Item = T;

  fn elements(&self) -> Vec<&T> {
    self.iter().collect()
  }

  fn count(&self) -> usize {
    N
  }
}

impl<T> Iterable for VecDeque<T> {
  type Item = T;

  fn elements(&self) -> Vec<&T> {
    self.iter().collect()
  }

  fn count(&self) -> usize {
    self.len()
  }
}

impl<T> Iterable for BTreeSet<T> {
  type Item = T;

  fn elements(&self) -> Vec<&T> {
    self.iter().collect()
  }

  fn count(&self) -> usize {
    self.len()
  }
}

// Not ordered: equal sets may iterate differently.
impl<T, S> Iterable for HashSet<T, S> {
  type Item = T;

  fn elements(&self) -> Vec<&T> {
    self.iter().collect()
  }

  fn count(&self) -> usize {
    self.len()
  }
}

#[cfg(test)]
mod tests {

  use super::*;

  #[test]
  fn elements_keep_insertion_order() {
    let deque = VecDeque::from(vec![3, 1, 2]);

    assert_eq!(deque.elements(), vec![&3, &1, &2]);
    assert_eq!(deque.count(), 3);
  }

  #[test]
  fn sets_are_ordered_by_value() {
    let set = BTreeSet::from([3, 1, 2]);

    assert_eq!(set.elements(), vec![&1, &2, &3]);
  }

  #[test]
  fn hash_sets_expose_all_elements() {
    let set = HashSet::from([3, 1, 2]);
    let mut elements = set.elements();
    elements.sort();

    assert_eq!(elements, vec![&1, &2, &3]);
    assert_eq!(set.count(), 3);
  }

  #[test]
  fn arrays_and_slices_count_their_elements() {
    let array = [1, 2];

    assert_eq!(array.count(), 2);
    assert_eq!(array[..1].count(), 1);
  }
}
