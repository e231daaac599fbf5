//! Insertion-ordered set used for graph membership.

use std::collections::HashSet;
use std::hash::Hash;

/// A deduplicating collection that remembers first-insertion order.
///
/// Membership lives in a hash index, order in a plain vector:
/// - `add` / `contains` are O(1)
/// - `remove` is O(n), it scans the order list for the element's position
///
/// Element identity is whatever `Eq + Hash` says it is. The graph builders
/// store [`NodeRef`](crate::NodeRef) / [`EdgeRef`](crate::EdgeRef) handles,
/// which compare by pointer, so structurally equal records stay distinct.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    index: HashSet<T>,
    order: Vec<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            index: HashSet::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Eq + Hash + Clone> OrderedSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the element was added, false if it was already a member.
    pub fn add(&mut self, element: T) -> bool {
        if self.index.contains(&element) {
            return false;
        }
        self.order.push(element.clone());
        self.index.insert(element);
        true
    }

    /// Returns true if the element was removed, false if it was not a member.
    pub fn remove(&mut self, element: &T) -> bool {
        if !self.index.remove(element) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|e| e == element) {
            self.order.remove(pos);
        }
        true
    }

    /// Returns true if the element is a member of the set.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.index.contains(element)
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visit every element in order of addition.
    pub fn visit<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        for element in &self.order {
            visitor(element);
        }
    }

    /// Iterate elements in order of addition.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.order.iter()
    }
}

impl<'a, T: Eq + Hash + Clone> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Eq + Hash + Clone> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.add(element);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(set: &OrderedSet<&'static str>) -> Vec<&'static str> {
        set.iter().copied().collect()
    }

    #[test]
    fn add_then_contains() {
        let mut set = OrderedSet::new();
        assert!(set.add("a"));
        assert!(set.contains(&"a"));
        assert!(!set.add("a"));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn iteration_follows_first_insertion() {
        let mut set = OrderedSet::new();
        for e in ["c", "a", "b", "a", "c"] {
            set.add(e);
        }
        assert_eq!(collect(&set), vec!["c", "a", "b"]);
    }

    #[test]
    fn removing_other_elements_keeps_order() {
        let mut set: OrderedSet<_> = ["a", "b", "c", "d"].into_iter().collect();
        assert!(set.remove(&"b"));
        set.add("e");
        assert!(set.remove(&"d"));
        assert_eq!(collect(&set), vec!["a", "c", "e"]);
    }

    #[test]
    fn remove_present_and_absent() {
        let mut set: OrderedSet<_> = ["a", "b"].into_iter().collect();
        assert!(set.remove(&"a"));
        assert_eq!(set.count(), 1);
        assert!(!set.contains(&"a"));

        assert!(!set.remove(&"zzz"));
        assert!(!set.remove(&"a"));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn readd_after_remove_goes_to_end() {
        let mut set: OrderedSet<_> = ["a", "b", "c"].into_iter().collect();
        set.remove(&"a");
        assert!(set.add("a"));
        assert_eq!(collect(&set), vec!["b", "c", "a"]);
    }

    #[test]
    fn visit_is_restartable() {
        let set: OrderedSet<_> = [1, 2, 3].into_iter().collect();
        let mut first = Vec::new();
        set.visit(|e| first.push(*e));
        let mut second = Vec::new();
        set.visit(|e| second.push(*e));
        assert_eq!(first, vec![1, 2, 3]);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_set() {
        let set: OrderedSet<u32> = OrderedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }
}
