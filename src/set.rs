//! A generic set.
//!
//! [`Set`] is an unordered collection of unique elements. Its operations
//! come in two families which differ only in what they do to the receiver.
//!
//! ##### Operation Families
//!
//! ###### Mutating
//!
//! [`insert`](Set::insert) and [`remove`](Set::remove) edit the receiver in
//! place. Inserting a present element and removing an absent one are
//! no-ops, never errors. Bulk insertion goes through the standard
//! [`Extend`] and [`FromIterator`] implementations.
//!
//! ###### Copy-producing
//!
//! [`with`](Set::with), [`without`](Set::without), [`union`](Set::union),
//! [`intersection`](Set::intersection) and [`difference`](Set::difference)
//! leave their operands untouched and return a freshly built set sharing
//! no storage with them. These should be preferred when the original set
//! is still needed afterwards.
//!
//! Beyond the algebra, [`subsets`](Set::subsets) enumerates every
//! combination of a requested size drawn from the set.

use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt::{self, Debug, Formatter};
use std::hash::Hash;

#[cfg(any(test, feature = "quickcheck_generators"))]
use quickcheck::{Arbitrary, Gen};

/// An unordered collection of unique elements.
///
/// Iteration order is unspecified and not stable across calls, even on
/// equal sets. Membership tests are O(1) amortized.
#[derive(Clone)]
pub struct Set<T> {
    elements: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Create a new empty set.
    ///
    /// ### Example
    ///
    /// ```
    /// use setsort::set::Set;
    ///
    /// let set = Set::<i32>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Set<T> {
        Set { elements: HashSet::new() }
    }

    /// Insert an element into the set.
    ///
    /// Inserting an element which is already present leaves the set
    /// unchanged. Returns `true` if the element was not present before.
    ///
    /// ### Example
    ///
    /// ```
    /// use setsort::set::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert("first-element"));
    /// assert!(!set.insert("first-element"));
    /// assert!(set.contains(&"first-element"));
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Remove an element from the set.
    ///
    /// Removing an absent element is a no-op. Returns `true` if the
    /// element was present.
    ///
    /// ### Example
    ///
    /// ```
    /// use setsort::set::Set;
    ///
    /// let mut set = Set::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, element: &T) -> bool {
        self.elements.remove(element)
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the set contains the value.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Returns true if every element of the set is contained in `other`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.elements.is_subset(&other.elements)
    }

    /// Returns true if every element of `other` is contained in the set.
    pub fn is_superset(&self, other: &Set<T>) -> bool {
        self.elements.is_superset(&other.elements)
    }

    /// Returns true if the set has no element in common with `other`.
    pub fn is_disjoint(&self, other: &Set<T>) -> bool {
        self.elements.is_disjoint(&other.elements)
    }

    /// An iterator visiting every element once, in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Returns a new set holding every element of the receiver plus
    /// `element`. The receiver is untouched.
    ///
    /// This is the copy-producing counterpart of [`Set::insert`].
    ///
    /// ### Example
    ///
    /// ```
    /// use setsort::set::Set;
    ///
    /// let set: Set<i32> = [1, 2].into_iter().collect();
    /// let extended = set.with(3);
    /// assert_eq!(set.len(), 2);
    /// assert!(extended.contains(&3));
    /// ```
    pub fn with(&self, element: T) -> Set<T> {
        let mut result = self.clone();
        result.insert(element);
        result
    }

    /// Returns a new set holding every element of the receiver except
    /// `element`. The receiver is untouched.
    ///
    /// This is the copy-producing counterpart of [`Set::remove`].
    ///
    /// ### Example
    ///
    /// ```
    /// use setsort::set::Set;
    ///
    /// let set: Set<i32> = [1, 2].into_iter().collect();
    /// let shrunk = set.without(&2);
    /// assert!(set.contains(&2));
    /// assert!(!shrunk.contains(&2));
    /// ```
    pub fn without(&self, element: &T) -> Set<T> {
        let mut result = self.clone();
        result.remove(element);
        result
    }

    /// Returns a set with all the elements from both sets.
    ///
    /// ### Example
    ///
    /// ```
    /// use setsort::set::Set;
    ///
    /// let a: Set<i32> = [1, 2].into_iter().collect();
    /// let b: Set<i32> = [3, 4].into_iter().collect();
    /// let expected: Set<i32> = [1, 2, 3, 4].into_iter().collect();
    /// assert_eq!(a.union(&b), expected);
    /// ```
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        Set { elements: self.elements.union(&other.elements).cloned().collect() }
    }

    /// Returns a set with the values common to both sets.
    ///
    /// ### Example
    ///
    /// ```
    /// use setsort::set::Set;
    ///
    /// let a: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let b: Set<i32> = [2, 3, 4].into_iter().collect();
    /// let expected: Set<i32> = [2, 3].into_iter().collect();
    /// assert_eq!(a.intersection(&b), expected);
    /// ```
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        Set { elements: self.elements.intersection(&other.elements).cloned().collect() }
    }

    /// Returns a set with the elements of the receiver which are not in
    /// `other`. Note the asymmetry: elements only in `other` do not
    /// appear in the result.
    ///
    /// ### Example
    ///
    /// ```
    /// use setsort::set::Set;
    ///
    /// let a: Set<i32> = [1, 2, 3].into_iter().collect();
    /// let b: Set<i32> = [2, 3, 4].into_iter().collect();
    /// let expected: Set<i32> = [1].into_iter().collect();
    /// assert_eq!(a.difference(&b), expected);
    /// ```
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        Set { elements: self.elements.difference(&other.elements).cloned().collect() }
    }

    /// Returns the content of the set as a vector, in unspecified order.
    ///
    /// The order is not guaranteed to be stable across calls.
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.iter().cloned().collect()
    }

    /// Enumerate every subset of exactly `size` elements, i.e. every
    /// combination of `size` elements drawn from the set.
    ///
    /// Each combination appears exactly once and the order of the returned
    /// subsets is unspecified. `subsets(0)` yields a single empty set, and
    /// a `size` larger than the cardinality yields no subsets at all.
    ///
    /// The result holds C(n, `size`) sets, each costing O(`size`) to
    /// build, so this is only suitable for small sets.
    ///
    /// ### Example
    ///
    /// ```
    /// use setsort::set::Set;
    ///
    /// let set: Set<i32> = [1, 2].into_iter().collect();
    /// let subsets = set.subsets(1);
    /// assert_eq!(subsets.len(), 2);
    /// assert!(subsets.iter().all(|s| s.len() == 1 && s.is_subset(&set)));
    /// ```
    pub fn subsets(&self, size: usize) -> Vec<Set<T>> {
        if size > self.len() {
            return Vec::new();
        }
        let values = self.to_vec();
        let mut chosen = Vec::with_capacity(size);
        let mut found = Vec::new();
        subsets_of(&values, 0, size, &mut chosen, &mut found);
        found
    }
}

/// Extends the partial combination `chosen` with elements of `values` taken
/// at or after position `next`, collecting every completed combination of
/// `size` elements into `found`.
///
/// Candidates are only ever taken from positions after all previously
/// chosen ones, so each combination is built exactly once.
fn subsets_of<T: Eq + Hash + Clone>(
    values: &[T],
    next: usize,
    size: usize,
    chosen: &mut Vec<T>,
    found: &mut Vec<Set<T>>,
) {
    if chosen.len() == size {
        found.push(chosen.iter().cloned().collect());
        return;
    }
    for i in next..values.len() {
        chosen.push(values[i].clone());
        subsets_of(values, i + 1, size, chosen, found);
        chosen.pop();
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Set<T> {
        Set::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    /// Two sets are equal iff they have the same cardinality and every
    /// element of one is contained in the other, independent of the order
    /// in which the elements were inserted.
    fn eq(&self, other: &Set<T>) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.elements.fmt(f)
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Set<T> {
        Set { elements: iter.into_iter().collect() }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

#[cfg(any(test, feature = "quickcheck_generators"))]
impl<T: Arbitrary + Eq + Hash> Arbitrary for Set<T> {
    fn arbitrary(g: &mut Gen) -> Set<T> {
        let elements: Vec<T> = Arbitrary::arbitrary(g);
        elements.into_iter().collect()
    }
    fn shrink(&self) -> Box<dyn Iterator<Item = Set<T>>> {
        let elements: Vec<T> = self.elements.iter().cloned().collect();
        Box::new(elements.shrink().map(|es| es.into_iter().collect::<Set<T>>()))
    }
}
