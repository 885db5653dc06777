//! Contiguous sequence of fixed-width records with explicit doubling growth
//!
//! Capacity is tracked here rather than read back from the backing `Vec`, so
//! growth is observable exactly: a full container grows to `max(1, 2 * cap)`
//! and never shrinks. Reads hand out copies; removal shifts later slots left
//! so iteration order is always insertion order minus removed slots.

use crate::core::error::{Result, SkirmishError};
use serde::{Serialize, Serializer};

/// Homogeneous dynamic array
#[derive(Debug)]
pub struct Container<T> {
    slots: Vec<T>,
    /// Logical slot count; `slots.len() <= capacity` always holds
    capacity: usize,
}

impl<T> Container<T> {
    /// Allocate room for `initial_capacity` records.
    ///
    /// Fails on a zero capacity, on a zero-sized element type, or when the
    /// allocation cannot be satisfied.
    pub fn create(initial_capacity: usize) -> Result<Self> {
        if initial_capacity == 0 {
            return Err(SkirmishError::ZeroCapacity);
        }
        if std::mem::size_of::<T>() == 0 {
            return Err(SkirmishError::ZeroElementSize);
        }

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(initial_capacity)
            .map_err(|_| SkirmishError::AllocationFailed {
                requested: initial_capacity,
            })?;

        Ok(Self {
            slots,
            capacity: initial_capacity,
        })
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Allocated slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes per record
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Index of the leftmost record for which `cmp(record, key)` holds
    pub fn position<K, F>(&self, key: &K, cmp: F) -> Option<usize>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        self.slots.iter().position(|slot| cmp(slot, key))
    }

    /// Append a record, doubling capacity when full
    pub fn push_back(&mut self, element: T) -> Result<()> {
        if self.slots.len() == self.capacity {
            self.grow()?;
        } else if self.slots.len() == self.slots.capacity() {
            self.reserve_backing()?;
        }
        self.slots.push(element);
        Ok(())
    }

    /// Back every logical slot with storage so `push` never reallocates
    fn reserve_backing(&mut self) -> Result<()> {
        let additional = self.capacity - self.slots.len();
        self.slots
            .try_reserve_exact(additional)
            .map_err(|_| SkirmishError::AllocationFailed {
                requested: self.capacity,
            })
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity
                .checked_mul(2)
                .ok_or(SkirmishError::AllocationFailed {
                    requested: usize::MAX,
                })?
        };

        let additional = new_capacity - self.slots.len();
        self.slots
            .try_reserve_exact(additional)
            .map_err(|_| SkirmishError::AllocationFailed {
                requested: new_capacity,
            })?;

        self.capacity = new_capacity;
        tracing::debug!("Grew container to {} capacity", new_capacity);
        Ok(())
    }

    /// Remove the leftmost record matching `cmp(record, key)`.
    ///
    /// Returns whether a record was removed.
    pub fn remove_where<K, F>(&mut self, key: &K, cmp: F) -> bool
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        match self.position(key, cmp) {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the record at `index`, shifting later records left
    pub fn remove_by_index(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.slots.remove(index))
    }

    /// Overwrite the record at `index`, returning the previous one
    pub fn replace(&mut self, index: usize, element: T) -> Result<T> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.slots[index], element))
    }

    /// Read-only view of the live records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slots.iter()
    }

    /// Release storage and reset to zero capacity.
    ///
    /// Idempotent. The container stays usable: the next `push_back` grows it
    /// from zero to one slot.
    pub fn destroy(&mut self) {
        self.slots = Vec::new();
        self.capacity = 0;
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.slots.len() {
            return Err(SkirmishError::IndexOutOfBounds {
                index,
                len: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl<T: Clone> Container<T> {
    /// Copy of the leftmost record for which `cmp(record, key)` holds.
    ///
    /// The comparator sees the stored record itself and must not mutate it.
    pub fn search<K, F>(&self, key: &K, cmp: F) -> Option<T>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        self.slots.iter().find(|slot| cmp(*slot, key)).cloned()
    }

    /// Copy of the record at `index`
    pub fn get(&self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.slots[index].clone())
    }
}

impl<T: PartialEq> Container<T> {
    /// Remove the first record equal to `element`. Only one record is removed.
    pub fn remove_by_value(&mut self, element: &T) -> bool {
        self.remove_where(element, |slot, target| slot == target)
    }
}

/// Copies keep the full logical capacity backed by storage
impl<T: Clone> Clone for Container<T> {
    fn clone(&self) -> Self {
        let mut slots = Vec::with_capacity(self.capacity);
        slots.extend(self.slots.iter().cloned());
        Self {
            slots,
            capacity: self.capacity,
        }
    }
}

/// Compares live records only; capacity is not part of equality
impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<T: Eq> Eq for Container<T> {}

impl<T: Serialize> Serialize for Container<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.slots.iter())
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
