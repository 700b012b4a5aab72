use std::cmp::Ordering;

use log::trace;

use crate::error::{Error, Result};
use crate::partition::{Key, Partition};

/// A sequence of [`Partition`]s presented as one logical ordered mapping.
///
/// A collection always holds at least one partition, the primary partition.
/// With a single partition it behaves as a plain ordered map and offers
/// indexed access; once segmented by [`partition_by`](Collection::partition_by)
/// the indexed accessors refuse to run until the partitions are folded back
/// together with [`fork`](Collection::fork).
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    partitions: Vec<Partition<T>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection {
            partitions: vec![Partition::new()],
        }
    }
}

impl<T> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a single-partition collection from a plain list.
    pub fn create(elements: Vec<T>) -> Self {
        Collection {
            partitions: vec![Partition::from_elements(elements)],
        }
    }

    /// Create a single-partition collection from keyed entries.
    pub fn from_entries(entries: Vec<(Key, T)>) -> Self {
        Collection {
            partitions: vec![Partition::from_entries(entries)],
        }
    }

    /// Create a collection with one partition per seed list. No seeds
    /// yields one empty partition.
    pub fn with_partitions(seeds: Vec<Vec<T>>) -> Self {
        if seeds.is_empty() {
            return Self::new();
        }
        Collection {
            partitions: seeds.into_iter().map(Partition::from_elements).collect(),
        }
    }

    pub(crate) fn from_partition(partition: Partition<T>) -> Self {
        Collection {
            partitions: vec![partition],
        }
    }

    /// Return the primary partition.
    ///
    /// There is always a primary partition; a collection without one has
    /// been corrupted through means outside the public API.
    pub fn primary_partition(&self) -> Result<&Partition<T>> {
        self.partitions.first().ok_or_else(|| {
            Error::InvalidState("collection has no primary partition".to_string())
        })
    }

    pub fn primary_partition_mut(&mut self) -> Result<&mut Partition<T>> {
        self.partitions.first_mut().ok_or_else(|| {
            Error::InvalidState("collection has no primary partition".to_string())
        })
    }

    pub fn partitions(&self) -> &[Partition<T>] {
        &self.partitions
    }

    /// Merge all partitions into one ordered element view, in partition
    /// order. A key seen again in a later partition overwrites the earlier
    /// element, at the position the key first appeared.
    pub fn elements(&self) -> Vec<(&Key, &T)> {
        let mut merged: Vec<(&Key, &T)> = Vec::new();
        for partition in &self.partitions {
            for (key, element) in partition.iter() {
                match merged.iter_mut().find(|(k, _)| *k == key) {
                    Some(entry) => entry.1 = element,
                    None => merged.push((key, element)),
                }
            }
        }
        merged
    }

    fn take_merged_entries(&mut self) -> Vec<(Key, T)> {
        let partitions = std::mem::take(&mut self.partitions);
        let mut merged: Vec<(Key, T)> = Vec::new();
        for partition in partitions {
            for (key, element) in partition.into_entries() {
                match merged.iter_mut().find(|(k, _)| *k == key) {
                    Some(entry) => entry.1 = element,
                    None => merged.push((key, element)),
                }
            }
        }
        merged
    }

    pub fn keys(&self) -> Vec<&Key> {
        self.elements().into_iter().map(|(key, _)| key).collect()
    }

    /// Iterate every element of every partition mutably, in order. No key
    /// deduplication is applied.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Key, &mut T)> {
        self.partitions.iter_mut().flat_map(|partition| partition.iter_mut())
    }

    /// Return the first element of the unified view.
    pub fn first(&self) -> Option<&T> {
        self.elements().into_iter().next().map(|(_, element)| element)
    }

    /// Number of elements across all partitions.
    pub fn len(&self) -> usize {
        self.partitions.iter().map(Partition::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(Partition::is_empty)
    }

    /// Reset to a single empty partition.
    pub fn clear(&mut self) {
        self.partitions = vec![Partition::new()];
    }

    /// Re-partition the unified element view by a discriminator.
    ///
    /// Scans elements in order and starts a new partition every time the
    /// discriminator value changes. This is stream segmentation, not a
    /// group-by: equal discriminator values separated by a different one
    /// land in separate partitions. Pre-sort to group all equal values.
    pub fn partition_by<K, F>(&mut self, mut discriminator: F) -> &mut Self
    where
        K: PartialEq,
        F: FnMut(&T) -> K,
    {
        let entries = self.take_merged_entries();
        let mut partitions: Vec<Partition<T>> = Vec::new();
        let mut current = Partition::new();
        let mut last: Option<K> = None;

        for (key, element) in entries {
            let discriminant = discriminator(&element);
            if let Some(previous) = &last {
                if *previous != discriminant {
                    partitions.push(std::mem::take(&mut current));
                }
            }
            current.set(key, element);
            last = Some(discriminant);
        }
        partitions.push(current);

        trace!("partition_by: segmented into {} partitions", partitions.len());
        self.partitions = partitions;
        self
    }

    /// Aggregate the partitions back to a single partition.
    ///
    /// Each partition is wrapped in a fresh single-partition collection and
    /// passed to the closure together with a shared accumulator collection;
    /// the closure pushes whatever each partition reduces to. Afterwards the
    /// accumulator's primary partition becomes this collection's only
    /// partition. This is the map-reduce primitive paired with
    /// [`partition_by`](Collection::partition_by).
    pub fn fork<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(Collection<T>, &mut Collection<T>),
    {
        let partitions = std::mem::take(&mut self.partitions);
        let count = partitions.len();
        let mut accumulator = Collection::new();
        for partition in partitions {
            f(Collection::from_partition(partition), &mut accumulator);
        }
        let primary = accumulator.partitions.into_iter().next().unwrap_or_default();
        trace!("fork: reduced {} partitions into {} elements", count, primary.len());
        self.partitions = vec![primary];
        self
    }

    /// Stable-sort each partition independently. Elements never move
    /// across partition boundaries.
    pub fn sort<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        for partition in &mut self.partitions {
            partition.sort(&mut compare);
        }
        self
    }

    /// Left fold across all partitions in order.
    pub fn evaluate<A, F>(&self, mut f: F, initial: A) -> A
    where
        F: FnMut(&T, A) -> A,
    {
        let mut accumulator = initial;
        for partition in &self.partitions {
            accumulator = partition.evaluate(&mut f, accumulator);
        }
        accumulator
    }

    /// Apply the visitor to each element of each partition.
    pub fn each<F>(&mut self, mut visitor: F) -> &mut Self
    where
        F: FnMut(&mut T, &Key),
    {
        for partition in &mut self.partitions {
            partition.each(&mut visitor);
        }
        self
    }

    /// Replace each element with the closure's return value.
    pub fn map<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&T, &Key) -> T,
    {
        for partition in &mut self.partitions {
            partition.map(&mut f);
        }
        self
    }

    /// Retain only the elements for which the predicate holds, rebuilding
    /// as a single partition in the original relative order.
    pub fn filter<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&T, &Key) -> bool,
    {
        let entries = self.take_merged_entries();
        let mut partition = Partition::new();
        for (key, element) in entries {
            if predicate(&element, &key) {
                partition.set(key, element);
            }
        }
        self.partitions = vec![partition];
        self
    }

    pub(crate) fn assert_single_partition(&self, method: &str) -> Result<()> {
        if self.partitions.len() == 1 {
            return Ok(());
        }
        Err(Error::InvalidState(format!(
            "\"{}\" requires a collection with a single partition, this collection has {}",
            method,
            self.partitions.len()
        )))
    }

    /// Return the element at the given key. Single partition only.
    pub fn get(&self, key: impl Into<Key>) -> Result<&T> {
        self.assert_single_partition("get")?;
        self.primary_partition()?.get(key)
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Result<&mut T> {
        self.assert_single_partition("get_mut")?;
        self.primary_partition_mut()?.get_mut(key)
    }

    /// Upsert at the given key. Single partition only.
    pub fn set(&mut self, key: impl Into<Key>, element: T) -> Result<()> {
        self.assert_single_partition("set")?;
        self.primary_partition_mut()?.set(key, element);
        Ok(())
    }

    /// Append with an auto-assigned integer key. Single partition only.
    pub fn add(&mut self, element: T) -> Result<()> {
        self.assert_single_partition("add")?;
        self.primary_partition_mut()?.add(element);
        Ok(())
    }

    pub fn exists(&self, key: impl Into<Key>) -> Result<bool> {
        self.assert_single_partition("exists")?;
        Ok(self.primary_partition()?.exists(key))
    }

    /// Remove the element at the given key, if present. Single partition
    /// only.
    pub fn remove(&mut self, key: impl Into<Key>) -> Result<()> {
        self.assert_single_partition("remove")?;
        self.primary_partition_mut()?.remove(key);
        Ok(())
    }
}
