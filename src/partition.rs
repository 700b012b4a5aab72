use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Element key within a partition: an explicit name or an integer offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Key {
    Int(usize),
    Str(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(v) => write!(f, "{}", v),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<usize> for Key {
    fn from(v: usize) -> Self {
        Key::Int(v)
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Key::Str(v.to_string())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Key::Str(v)
    }
}

impl From<&Key> for Key {
    fn from(v: &Key) -> Self {
        v.clone()
    }
}

/// An ordered, keyed bucket of elements.
///
/// Partitions are used internally by [`Collection`](crate::Collection) for
/// batching chained transformations. Elements keep insertion order; integer
/// keys auto-increment on [`add`](Partition::add) the way a plain list
/// would, while explicit keys retain their position on upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    entries: Vec<(Key, T)>,
    next_index: usize,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Partition {
            entries: Vec::new(),
            next_index: 0,
        }
    }
}

impl<T> Partition<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a partition from a plain list; elements are keyed 0..n.
    pub fn from_elements(elements: Vec<T>) -> Self {
        let mut partition = Self::new();
        for element in elements {
            partition.add(element);
        }
        partition
    }

    /// Build a partition from keyed entries, preserving the given order.
    pub fn from_entries(entries: Vec<(Key, T)>) -> Self {
        let mut partition = Self::new();
        for (key, element) in entries {
            partition.set(key, element);
        }
        partition
    }

    /// Return the first element.
    pub fn first(&self) -> Option<&T> {
        self.entries.first().map(|(_, element)| element)
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.entries.last_mut().map(|(_, element)| element)
    }

    /// Return the element at the given key.
    pub fn get(&self, key: impl Into<Key>) -> Result<&T> {
        let key = key.into();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, element)| element)
            .ok_or_else(|| Error::key_not_found(&key, self.key_strings()))
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Result<&mut T> {
        let key = key.into();
        let known = self.key_strings();
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, element)| element)
            .ok_or_else(|| Error::key_not_found(&key, known))
    }

    /// Upsert at the given key. An existing key keeps its position, a new
    /// key appends.
    pub fn set(&mut self, key: impl Into<Key>, element: T) {
        let key = key.into();
        if let Key::Int(index) = key {
            self.next_index = self.next_index.max(index + 1);
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = element,
            None => self.entries.push((key, element)),
        }
    }

    /// Append with the next auto-assigned integer key.
    pub fn add(&mut self, element: T) {
        let key = Key::Int(self.next_index);
        self.next_index += 1;
        self.entries.push((key, element));
    }

    /// Remove the element at the given key. Does nothing if absent.
    pub fn remove(&mut self, key: impl Into<Key>) {
        let key = key.into();
        self.entries.retain(|(k, _)| *k != key);
    }

    pub fn exists(&self, key: impl Into<Key>) -> bool {
        let key = key.into();
        self.entries.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The keyed entries, in order.
    pub fn elements(&self) -> &[(Key, T)] {
        &self.entries
    }

    pub fn keys(&self) -> Vec<&Key> {
        self.entries.iter().map(|(key, _)| key).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &T)> {
        self.entries.iter().map(|(key, element)| (key, element))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut T)> {
        self.entries.iter_mut().map(|(key, element)| (&*key, element))
    }

    pub(crate) fn into_entries(self) -> Vec<(Key, T)> {
        self.entries
    }

    /// Stable sort of the element values. Key associations are discarded
    /// and rebuilt positionally, as in a plain list sort.
    pub fn sort<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut elements: Vec<T> = self.entries.drain(..).map(|(_, element)| element).collect();
        elements.sort_by(|a, b| compare(a, b));
        self.entries = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| (Key::Int(index), element))
            .collect();
        self.next_index = self.entries.len();
    }

    /// Invoke the visitor with each element and its key, in order. The
    /// visitor may mutate the element in place.
    pub fn each<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut T, &Key),
    {
        for (key, element) in self.entries.iter_mut() {
            visitor(element, key);
        }
    }

    /// Replace each element with the closure's return value.
    pub fn map<F>(&mut self, mut f: F)
    where
        F: FnMut(&T, &Key) -> T,
    {
        for (key, element) in self.entries.iter_mut() {
            *element = f(element, key);
        }
    }

    /// Left fold over the elements in order.
    pub fn evaluate<A, F>(&self, mut f: F, initial: A) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        let mut accumulator = initial;
        for (_, element) in &self.entries {
            accumulator = f(element, accumulator);
        }
        accumulator
    }

    fn key_strings(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.to_string()).collect()
    }
}
